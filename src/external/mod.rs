mod ollama;
mod openai;
mod opencage;
mod opentripmap;
mod ors;

pub use ollama::OllamaClient;
pub use openai::OpenAiClient;
pub use opencage::OpenCageClient;
pub use opentripmap::OpenTripMapClient;
pub use ors::OrsClient;

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::entities::{Coordinates, DistanceMatrix, Place};
use crate::error::Error;

// Provider capabilities are fixed at process construction and injected
// into the engine; nothing below reads ambient configuration.

#[async_trait]
pub trait DistanceProvider {
    async fn fetch_matrix(&self, points: &[Coordinates]) -> Result<DistanceMatrix, Error>;
}

#[async_trait]
pub trait DirectionsProvider {
    /// Returns the raw directions payload; shape normalization is the
    /// engine's job.
    async fn fetch_directions(&self, points: &[Coordinates]) -> Result<Value, Error>;
}

#[async_trait]
pub trait ItineraryGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, Error>;
}

#[async_trait]
pub trait GeocodingProvider {
    async fn search(&self, query: &str) -> Result<Vec<Place>, Error>;
}

#[async_trait]
pub trait NearbyProvider {
    async fn find_nearby(
        &self,
        center: &Coordinates,
        radius: f64,
        kinds: &str,
        limit: u32,
    ) -> Result<Vec<Place>, Error>;
}

pub type DynDistanceProvider = Arc<dyn DistanceProvider + Send + Sync>;
pub type DynDirectionsProvider = Arc<dyn DirectionsProvider + Send + Sync>;
pub type DynItineraryGenerator = Arc<dyn ItineraryGenerator + Send + Sync>;
pub type DynGeocodingProvider = Arc<dyn GeocodingProvider + Send + Sync>;
pub type DynNearbyProvider = Arc<dyn NearbyProvider + Send + Sync>;
