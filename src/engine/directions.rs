use serde::Deserialize;
use serde_json::Value;

use super::polyline;
use crate::entities::{Leg, RouteSummary};
use crate::error::{malformed_provider_response_error, Error};

// The directions provider answers in one of two documents: a "routes"
// document carrying summary and segments directly, or a GeoJSON
// "features" document carrying them under properties.

#[derive(Deserialize)]
struct RoutesShape {
    routes: Vec<RouteEntry>,
}

#[derive(Deserialize)]
struct RouteEntry {
    geometry: Option<RouteGeometry>,
    summary: Option<Summary>,
    #[serde(default)]
    segments: Vec<Segment>,
}

#[derive(Deserialize)]
struct FeaturesShape {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    geometry: Option<RouteGeometry>,
    properties: Option<FeatureProperties>,
}

#[derive(Deserialize)]
struct FeatureProperties {
    summary: Option<Summary>,
    #[serde(default)]
    segments: Vec<Segment>,
}

#[derive(Deserialize)]
struct Summary {
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    duration: f64,
}

#[derive(Deserialize)]
struct Segment {
    distance: f64,
    duration: f64,
}

/// Geometry arrives either as an encoded polyline or as a GeoJSON
/// LineString whose coordinates are already (lng, lat).
#[derive(Deserialize)]
#[serde(untagged)]
enum RouteGeometry {
    Encoded(String),
    Line { coordinates: Vec<[f64; 2]> },
}

/// Normalizes a raw directions payload into a `RouteSummary`. Tries the
/// "routes" shape first, then the "features" shape; whichever yields an
/// entry must carry both a geometry and a summary.
pub fn normalize_directions(payload: &Value) -> Result<RouteSummary, Error> {
    let (geometry, summary, segments) =
        extract(payload).ok_or_else(|| malformed_provider_response_error(payload.clone()))?;

    Ok(RouteSummary {
        total_distance: summary.distance,
        total_duration: summary.duration,
        geometry: line_coordinates(geometry),
        legs: segments.into_iter().map(leg_from_segment).collect(),
    })
}

fn extract(payload: &Value) -> Option<(RouteGeometry, Summary, Vec<Segment>)> {
    if let Ok(shape) = serde_json::from_value::<RoutesShape>(payload.clone()) {
        if let Some(route) = shape.routes.into_iter().next() {
            return match (route.geometry, route.summary) {
                (Some(geometry), Some(summary)) => Some((geometry, summary, route.segments)),
                _ => None,
            };
        }
    }

    if let Ok(shape) = serde_json::from_value::<FeaturesShape>(payload.clone()) {
        if let Some(feature) = shape.features.into_iter().next() {
            let properties = feature.properties?;

            return match (feature.geometry, properties.summary) {
                (Some(geometry), Some(summary)) => Some((geometry, summary, properties.segments)),
                _ => None,
            };
        }
    }

    None
}

fn line_coordinates(geometry: RouteGeometry) -> Vec<[f64; 2]> {
    match geometry {
        // Decoded points come out as (lat, lng); the output convention
        // is (lng, lat).
        RouteGeometry::Encoded(encoded) => polyline::decode(&encoded)
            .into_iter()
            .map(|(lat, lng)| [lng, lat])
            .collect(),
        RouteGeometry::Line { coordinates } => coordinates,
    }
}

fn leg_from_segment(segment: Segment) -> Leg {
    Leg {
        distance: format!("{:.1} km", segment.distance / 1000.0),
        duration: format!("{} mins", (segment.duration / 60.0).round() as i64),
        start_address: String::new(),
        end_address: String::new(),
    }
}
