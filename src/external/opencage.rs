use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::entities::{Coordinates, Place};
use crate::error::{
    malformed_provider_response_error, provider_unavailable_error, provider_unconfigured_error,
    Error,
};
use crate::external::GeocodingProvider;

pub const OPENCAGE_GEOCODE_URL: &str = "https://api.opencagedata.com/geocode/v1/json";

/// Free-text place search via the OpenCage forward geocoder.
pub struct OpenCageClient {
    api_key: Option<String>,
    url: String,
    client: reqwest::Client,
}

impl OpenCageClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            url: OPENCAGE_GEOCODE_URL.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Deserialize)]
struct GeocodeResult {
    formatted: Option<String>,
    geometry: Option<GeocodePoint>,
    #[serde(default)]
    components: serde_json::Map<String, Value>,
    annotations: Option<GeocodeAnnotations>,
}

#[derive(Deserialize)]
struct GeocodePoint {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize)]
struct GeocodeAnnotations {
    what3words: Option<What3Words>,
}

#[derive(Deserialize)]
struct What3Words {
    words: Option<String>,
}

// The most specific component wins the display name; the full
// formatted address is always kept as the address line.
fn place_from_result(result: GeocodeResult) -> Option<Place> {
    let point = result.geometry?;
    let formatted = result.formatted.unwrap_or_default();

    let name = ["tourism", "attraction", "road", "city"]
        .iter()
        .find_map(|key| result.components.get(*key).and_then(Value::as_str))
        .map(str::to_owned)
        .unwrap_or_else(|| formatted.clone());

    let id = result
        .annotations
        .and_then(|annotations| annotations.what3words)
        .and_then(|what3words| what3words.words)
        .unwrap_or_else(|| format!("{}-{},{}", formatted, point.lat, point.lng));

    Some(Place {
        id,
        name,
        address: formatted,
        coordinates: Coordinates {
            latitude: point.lat,
            longitude: point.lng,
        },
        kinds: Vec::new(),
        category: None,
    })
}

#[async_trait]
impl GeocodingProvider for OpenCageClient {
    #[tracing::instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<Place>, Error> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| provider_unconfigured_error())?;

        let res = self
            .client
            .get(&self.url)
            .query(&[("q", query), ("key", key)])
            .query(&[("limit", 10u32)])
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(provider_unavailable_error());
        }

        let payload: Value = res.json().await?;

        let data: GeocodeResponse = serde_json::from_value(payload.clone())
            .map_err(|_| malformed_provider_response_error(payload))?;

        Ok(data
            .results
            .into_iter()
            .filter_map(place_from_result)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio_test::block_on;

    #[test]
    fn missing_key_fails_before_any_request() {
        let client = OpenCageClient::new(None);

        let err = block_on(client.search("eiffel tower")).unwrap_err();

        assert_eq!(err.code, provider_unconfigured_error().code);
    }

    #[test]
    fn maps_components_to_place_fields() {
        let result: GeocodeResult = serde_json::from_value(json!({
            "formatted": "Tour Eiffel, Paris, France",
            "geometry": { "lat": 48.8584, "lng": 2.2945 },
            "components": { "tourism": "Tour Eiffel", "city": "Paris" },
            "annotations": { "what3words": { "words": "prices.slippery.traded" } },
        }))
        .unwrap();

        let place = place_from_result(result).unwrap();

        assert_eq!(place.id, "prices.slippery.traded");
        assert_eq!(place.name, "Tour Eiffel");
        assert_eq!(place.address, "Tour Eiffel, Paris, France");
        assert_eq!(place.coordinates.latitude, 48.8584);
        assert_eq!(place.coordinates.longitude, 2.2945);
    }

    #[test]
    fn results_without_geometry_are_dropped() {
        let result: GeocodeResult =
            serde_json::from_value(json!({ "formatted": "Somewhere" })).unwrap();

        assert!(place_from_result(result).is_none());
    }
}
