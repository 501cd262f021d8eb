use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::{Coordinates, DistanceMatrix};
use crate::error::{
    malformed_provider_response_error, provider_unavailable_error, provider_unconfigured_error,
    Error,
};
use crate::external::{DirectionsProvider, DistanceProvider};

pub const ORS_MATRIX_URL: &str = "https://api.openrouteservice.org/v2/matrix/driving-car";
pub const ORS_DIRECTIONS_URL: &str = "https://api.openrouteservice.org/v2/directions/driving-car";

/// OpenRouteService client backing both the distance-matrix and the
/// turn-by-turn directions capabilities.
pub struct OrsClient {
    api_key: Option<String>,
    matrix_url: String,
    directions_url: String,
    client: reqwest::Client,
}

impl OrsClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            matrix_url: ORS_MATRIX_URL.into(),
            directions_url: ORS_DIRECTIONS_URL.into(),
            client: reqwest::Client::new(),
        }
    }

    // The credential check runs before any request is issued.
    fn key(&self) -> Result<&str, Error> {
        self.api_key
            .as_deref()
            .ok_or_else(|| provider_unconfigured_error())
    }

    async fn post_json<B: Serialize>(&self, url: &str, body: &B, key: &str) -> Result<Value, Error> {
        let res = self
            .client
            .post(url)
            .header("Authorization", key)
            .json(body)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(provider_unavailable_error());
        }

        Ok(res.json().await?)
    }
}

#[derive(Serialize)]
struct MatrixRequestBody {
    locations: Vec<[f64; 2]>,
    metrics: Vec<&'static str>,
}

#[derive(Deserialize)]
struct MatrixResponse {
    distances: Option<Vec<Vec<f64>>>,
}

#[derive(Serialize)]
struct DirectionsRequestBody {
    coordinates: Vec<[f64; 2]>,
    format: &'static str,
}

fn lng_lat_pairs(points: &[Coordinates]) -> Vec<[f64; 2]> {
    points
        .iter()
        .map(|coordinates| {
            let point: geo_types::Point = coordinates.into();
            [point.x(), point.y()]
        })
        .collect()
}

#[async_trait]
impl DistanceProvider for OrsClient {
    #[tracing::instrument(skip(self, points))]
    async fn fetch_matrix(&self, points: &[Coordinates]) -> Result<DistanceMatrix, Error> {
        let key = self.key()?;

        let body = MatrixRequestBody {
            locations: lng_lat_pairs(points),
            metrics: vec!["distance"],
        };

        let payload = self.post_json(&self.matrix_url, &body, key).await?;

        let data: MatrixResponse = serde_json::from_value(payload.clone())
            .map_err(|_| malformed_provider_response_error(payload.clone()))?;

        let rows = data
            .distances
            .ok_or_else(|| malformed_provider_response_error(payload.clone()))?;

        DistanceMatrix::from_rows(rows, points.len())
            .ok_or_else(|| malformed_provider_response_error(payload))
    }
}

#[async_trait]
impl DirectionsProvider for OrsClient {
    #[tracing::instrument(skip(self, points))]
    async fn fetch_directions(&self, points: &[Coordinates]) -> Result<Value, Error> {
        let key = self.key()?;

        let body = DirectionsRequestBody {
            coordinates: lng_lat_pairs(points),
            format: "geojson",
        };

        self.post_json(&self.directions_url, &body, key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    fn points() -> Vec<Coordinates> {
        vec![
            Coordinates {
                latitude: 48.8566,
                longitude: 2.3522,
            },
            Coordinates {
                latitude: 45.764,
                longitude: 4.8357,
            },
        ]
    }

    #[test]
    fn missing_key_fails_matrix_before_any_request() {
        let client = OrsClient::new(None);

        let err = block_on(client.fetch_matrix(&points())).unwrap_err();

        assert_eq!(err.code, provider_unconfigured_error().code);
    }

    #[test]
    fn missing_key_fails_directions_before_any_request() {
        let client = OrsClient::new(None);

        let err = block_on(client.fetch_directions(&points())).unwrap_err();

        assert_eq!(err.code, provider_unconfigured_error().code);
    }

    #[test]
    fn request_coordinates_are_lng_lat() {
        let pairs = lng_lat_pairs(&points());

        assert_eq!(pairs[0], [2.3522, 48.8566]);
        assert_eq!(pairs[1], [4.8357, 45.764]);
    }
}
