use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Stop;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Leg {
    pub distance: String,
    pub duration: String,
    pub start_address: String,
    pub end_address: String,
}

/// Normalized directions result: totals in meters/seconds, legs with
/// display labels, geometry as (lng, lat) pairs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteSummary {
    pub total_distance: f64,
    pub total_duration: f64,
    pub geometry: Vec<[f64; 2]>,
    pub legs: Vec<Leg>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OptimizedRoute {
    pub id: Uuid,
    pub stops: Vec<Stop>,
    pub summary: RouteSummary,
}

impl OptimizedRoute {
    pub fn new(stops: Vec<Stop>, summary: RouteSummary) -> Self {
        Self {
            id: Uuid::new_v4(),
            stops,
            summary,
        }
    }
}
