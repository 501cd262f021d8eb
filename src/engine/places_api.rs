use super::Engine;

use async_trait::async_trait;

use crate::{
    api::PlacesAPI,
    entities::{Coordinates, Place},
    error::Error,
};

const DEFAULT_NEARBY_KINDS: &str = "interesting_places,tourist_facilities";
const NEARBY_LIMIT: u32 = 20;

#[async_trait]
impl PlacesAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn search_places(&self, query: String) -> Result<Vec<Place>, Error> {
        self.geocoder.search(&query).await
    }

    #[tracing::instrument(skip(self))]
    async fn find_nearby(
        &self,
        center: Coordinates,
        radius: f64,
        kinds: Option<String>,
    ) -> Result<Vec<Place>, Error> {
        let kinds = kinds.unwrap_or_else(|| DEFAULT_NEARBY_KINDS.into());

        self.nearby
            .find_nearby(&center, radius, &kinds, NEARBY_LIMIT)
            .await
    }
}
