use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::entities::{Coordinates, Place};
use crate::error::{malformed_provider_response_error, provider_unavailable_error, Error};
use crate::external::NearbyProvider;

pub const OPENTRIPMAP_RADIUS_URL: &str = "https://api.opentripmap.com/0.1/en/places/radius";

/// Nearby points of interest via the OpenTripMap radius search. The
/// API key is optional upstream; unauthenticated requests fall back to
/// IP-based rate limiting.
pub struct OpenTripMapClient {
    api_key: Option<String>,
    url: String,
    client: reqwest::Client,
}

impl OpenTripMapClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            url: OPENTRIPMAP_RADIUS_URL.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Deserialize)]
struct RadiusResponse {
    #[serde(default)]
    features: Vec<RadiusFeature>,
}

#[derive(Deserialize)]
struct RadiusFeature {
    properties: Option<RadiusProperties>,
    geometry: Option<PointGeometry>,
}

#[derive(Deserialize)]
struct RadiusProperties {
    xid: Option<String>,
    name: Option<String>,
    kinds: Option<String>,
}

#[derive(Deserialize)]
struct PointGeometry {
    // GeoJSON point order: (lng, lat).
    coordinates: [f64; 2],
}

// Nameless features are noise in the upstream data and are dropped.
fn place_from_feature(feature: RadiusFeature) -> Option<Place> {
    let properties = feature.properties?;
    let [lng, lat] = feature.geometry?.coordinates;

    let name = properties.name.filter(|name| !name.is_empty())?;

    let id = properties
        .xid
        .unwrap_or_else(|| format!("{}-{},{}", name, lat, lng));

    let kinds = properties
        .kinds
        .map(|kinds| kinds.split(',').map(str::to_owned).collect())
        .unwrap_or_default();

    Some(Place {
        id,
        name: name.clone(),
        address: name,
        coordinates: Coordinates {
            latitude: lat,
            longitude: lng,
        },
        kinds,
        category: None,
    })
}

#[async_trait]
impl NearbyProvider for OpenTripMapClient {
    #[tracing::instrument(skip(self))]
    async fn find_nearby(
        &self,
        center: &Coordinates,
        radius: f64,
        kinds: &str,
        limit: u32,
    ) -> Result<Vec<Place>, Error> {
        let point: geo_types::Point = center.into();

        let mut req = self
            .client
            .get(&self.url)
            .query(&[("radius", radius)])
            .query(&[("lon", point.x()), ("lat", point.y())])
            .query(&[("kinds", kinds)])
            .query(&[("limit", limit)]);

        if let Some(key) = &self.api_key {
            req = req.query(&[("apikey", key.as_str())]);
        }

        let res = req.send().await?;

        if !res.status().is_success() {
            return Err(provider_unavailable_error());
        }

        let payload: Value = res.json().await?;

        let data: RadiusResponse = serde_json::from_value(payload.clone())
            .map_err(|_| malformed_provider_response_error(payload))?;

        Ok(data
            .features
            .into_iter()
            .filter_map(place_from_feature)
            .collect())
    }
}
