mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::api::{DynAPI, API};
use crate::server::handlers::{itinerary, places};

pub async fn serve<T: API + Sync + Send + 'static>(api: T) {
    tracing_subscriber::fmt::init();

    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route("/health", get(health))
        .route("/places/search", get(places::search))
        .route("/places/details/:id", get(places::details))
        .route("/places/nearby", get(places::nearby))
        .route("/itinerary/optimize-route", post(itinerary::optimize_route))
        .route("/itinerary/generate", post(itinerary::generate))
        .route("/itinerary/recommendations", post(itinerary::recommendations))
        .layer(Extension(api));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}

async fn health() -> &'static str {
    "ok"
}
