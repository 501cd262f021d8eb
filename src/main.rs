use std::env;
use std::sync::Arc;

use dotenv::dotenv;

use viator::engine::Engine;
use viator::external::{
    DynItineraryGenerator, OllamaClient, OpenAiClient, OpenCageClient, OpenTripMapClient,
    OrsClient,
};
use viator::server::serve;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let ors = Arc::new(OrsClient::new(env::var("ORS_API_KEY").ok()));

    let generator: Option<DynItineraryGenerator> =
        match env::var("AI_PROVIDER").as_deref().unwrap_or("ollama") {
            "ollama" => Some(Arc::new(OllamaClient::new(
                env::var("OLLAMA_BASE_URL").ok(),
                env::var("OLLAMA_MODEL").ok(),
            )) as DynItineraryGenerator),
            "openai" => Some(
                Arc::new(OpenAiClient::new(env::var("OPENAI_API_KEY").ok()))
                    as DynItineraryGenerator,
            ),
            _ => None,
        };

    let engine = Engine::new(
        ors.clone(),
        ors,
        generator,
        Arc::new(OpenCageClient::new(env::var("OPENCAGE_API_KEY").ok())),
        Arc::new(OpenTripMapClient::new(env::var("OPENTRIPMAP_API_KEY").ok())),
    );

    serve(engine).await;
}
