use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&Coordinates> for geo_types::Point {
    fn from(coordinates: &Coordinates) -> Self {
        geo_types::Point::new(coordinates.longitude, coordinates.latitude)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stop {
    pub id: String,
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
}
