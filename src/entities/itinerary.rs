use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnrichedStop {
    pub stop_id: String,
    pub name: String,
    pub address: String,
    pub highlight: String,
    pub estimated_cost: u32,
    pub estimated_time: String,
    pub time_slot: String,
    #[serde(default)]
    pub nearby_recommendations: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Itinerary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub stops: Vec<EnrichedStop>,
}
