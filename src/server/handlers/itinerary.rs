use axum::extract::{Extension, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::api::DynAPI;
use crate::entities::{OptimizedRoute, Stop};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct OptimizeRouteParams {
    stops: Vec<Stop>,
}

pub async fn optimize_route(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<OptimizeRouteParams>,
) -> Result<Json<OptimizedRoute>, Error> {
    let route = api.optimize_route(params.stops).await?;

    Ok(route.into())
}

#[derive(Serialize, Deserialize)]
pub struct GenerateParams {
    stops: Vec<Stop>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    preferences: Option<String>,
}

pub async fn generate(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<GenerateParams>,
) -> Result<Json<Value>, Error> {
    let itineraries = api
        .generate_itineraries(
            params.stops,
            params.start_date,
            params.end_date,
            params.preferences,
        )
        .await?;

    Ok(Json(json!({ "itineraries": itineraries })))
}

#[derive(Serialize, Deserialize)]
pub struct RecommendationsParams {
    stop: Stop,
}

pub async fn recommendations(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<RecommendationsParams>,
) -> Result<Json<Value>, Error> {
    let recommendations = api.recommend_nearby(params.stop).await?;

    Ok(Json(json!({ "recommendations": recommendations })))
}
