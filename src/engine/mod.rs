mod directions;
mod fallback;
mod itinerary_api;
mod places_api;
mod polyline;
mod route_api;
mod search;

use crate::api::API;
use crate::external::{
    DynDirectionsProvider, DynDistanceProvider, DynGeocodingProvider, DynItineraryGenerator,
    DynNearbyProvider,
};

/// The orchestrator. Holds the provider capabilities it was constructed
/// with; all state is per-request.
pub struct Engine {
    matrix: DynDistanceProvider,
    directions: DynDirectionsProvider,
    generator: Option<DynItineraryGenerator>,
    geocoder: DynGeocodingProvider,
    nearby: DynNearbyProvider,
}

impl Engine {
    pub fn new(
        matrix: DynDistanceProvider,
        directions: DynDirectionsProvider,
        generator: Option<DynItineraryGenerator>,
        geocoder: DynGeocodingProvider,
        nearby: DynNearbyProvider,
    ) -> Self {
        Self {
            matrix,
            directions,
            generator,
            geocoder,
            nearby,
        }
    }
}

impl API for Engine {}
