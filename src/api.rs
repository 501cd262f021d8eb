use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

use crate::entities::{Coordinates, Itinerary, OptimizedRoute, Place, Stop};
use crate::error::Error;

#[async_trait]
pub trait RouteAPI {
    async fn optimize_route(&self, stops: Vec<Stop>) -> Result<OptimizedRoute, Error>;
}

#[async_trait]
pub trait ItineraryAPI {
    async fn generate_itineraries(
        &self,
        stops: Vec<Stop>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        preferences: Option<String>,
    ) -> Result<Vec<Itinerary>, Error>;

    async fn recommend_nearby(&self, stop: Stop) -> Result<Vec<Place>, Error>;
}

#[async_trait]
pub trait PlacesAPI {
    async fn search_places(&self, query: String) -> Result<Vec<Place>, Error>;

    async fn find_nearby(
        &self,
        center: Coordinates,
        radius: f64,
        kinds: Option<String>,
    ) -> Result<Vec<Place>, Error>;
}

pub trait API: RouteAPI + ItineraryAPI + PlacesAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
