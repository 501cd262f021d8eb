mod itinerary;
mod matrix;
mod place;
mod route;
mod stop;

pub use itinerary::{EnrichedStop, Itinerary};
pub use matrix::DistanceMatrix;
pub use place::Place;
pub use route::{Leg, OptimizedRoute, RouteSummary};
pub use stop::{Coordinates, Stop};
