use axum::extract::{Extension, Json, Path, Query};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::DynAPI;
use crate::entities::Coordinates;
use crate::error::Error;

const DEFAULT_NEARBY_RADIUS: f64 = 5000.0;

#[derive(Deserialize)]
pub struct SearchParams {
    query: String,
}

pub async fn search(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, Error> {
    let results = api.search_places(params.query).await?;

    Ok(Json(json!({ "results": results })))
}

// No place database behind this service; echo the id back.
pub async fn details(Path(id): Path<String>) -> Json<Value> {
    Json(json!({ "id": id, "name": "Place", "address": "", "coordinates": null }))
}

#[derive(Deserialize)]
pub struct NearbyParams {
    latitude: f64,
    longitude: f64,
    radius: Option<f64>,
    kinds: Option<String>,
}

pub async fn nearby(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<NearbyParams>,
) -> Result<Json<Value>, Error> {
    let center = Coordinates {
        latitude: params.latitude,
        longitude: params.longitude,
    };

    let results = api
        .find_nearby(
            center,
            params.radius.unwrap_or(DEFAULT_NEARBY_RADIUS),
            params.kinds,
        )
        .await?;

    Ok(Json(json!({ "results": results })))
}
