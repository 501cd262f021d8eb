use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

/// A geocoding or nearby-search result, before the caller promotes it
/// to a route stop.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
    pub kinds: Vec<String>,
    pub category: Option<String>,
}
