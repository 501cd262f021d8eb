use super::{fallback, Engine};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    api::ItineraryAPI,
    entities::{EnrichedStop, Itinerary, Place, Stop},
    error::{insufficient_stops_error, Error},
};

const ATTRACTION_KINDS: &str = "interesting_places,tourist_facilities";
const FOOD_KINDS: &str = "foods,restaurants";

fn build_prompt(
    stops: &[Stop],
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    preferences: Option<&str>,
) -> String {
    let stops_info = stops
        .iter()
        .enumerate()
        .map(|(index, stop)| format!("{}. {} ({})", index + 1, stop.name, stop.address))
        .collect::<Vec<String>>()
        .join("\n");

    let start = start_date.map_or_else(|| "Flexible".into(), |date| date.to_string());
    let end = end_date.map_or_else(|| "Flexible".into(), |date| date.to_string());

    format!(
        "You are a travel planning expert. Create 3 different optimized car travel itineraries for the following places:\n\
        \n\
        {stops_info}\n\
        \n\
        Travel Dates: {start} to {end}\n\
        Preferences: {preferences}\n\
        \n\
        For each itinerary:\n\
        1. Suggest a logical order of visits\n\
        2. Recommend optimal time to spend at each location\n\
        3. Include suggestions for nearby must-visit attractions\n\
        4. Consider driving time and minimize backtracking\n\
        \n\
        Format your response as a JSON array with 3 itinerary objects. Each should have:\n\
        - title: a catchy name for the itinerary\n\
        - description: brief overview\n\
        - stops: array of objects with {{ \"stop_id\", \"name\", \"address\", \"highlight\", \"estimated_cost\", \"estimated_time\", \"time_slot\", \"nearby_recommendations\" }}\n\
        \n\
        Keep it concise and practical. ONLY respond with valid JSON, no other text.",
        preferences = preferences.unwrap_or("None specified"),
    )
}

// Lenient mirror of the itinerary shape the prompt asks for; models
// routinely drop fields.
#[derive(Deserialize)]
struct GeneratedItinerary {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    stops: Vec<GeneratedStop>,
}

#[derive(Deserialize)]
struct GeneratedStop {
    #[serde(default)]
    stop_id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    highlight: String,
    #[serde(default)]
    estimated_cost: u32,
    #[serde(default)]
    estimated_time: String,
    #[serde(default)]
    time_slot: String,
    #[serde(default)]
    nearby_recommendations: Vec<String>,
}

impl From<GeneratedStop> for EnrichedStop {
    fn from(stop: GeneratedStop) -> Self {
        Self {
            stop_id: stop.stop_id,
            name: stop.name,
            address: stop.address,
            highlight: stop.highlight,
            estimated_cost: stop.estimated_cost,
            estimated_time: stop.estimated_time,
            time_slot: stop.time_slot,
            nearby_recommendations: stop.nearby_recommendations,
        }
    }
}

// The model wraps its JSON in prose more often than not; take the
// outermost array substring.
fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;

    if end < start {
        return None;
    }

    text.get(start..=end)
}

fn parse_generated(text: &str) -> Option<Vec<Itinerary>> {
    let array = extract_json_array(text)?;
    let generated: Vec<GeneratedItinerary> = serde_json::from_str(array).ok()?;

    if generated.is_empty() {
        return None;
    }

    Some(
        generated
            .into_iter()
            .enumerate()
            .map(|(index, itinerary)| Itinerary {
                id: format!("itinerary-{}", index + 1),
                title: itinerary.title,
                description: itinerary.description,
                stops: itinerary.stops.into_iter().map(EnrichedStop::from).collect(),
            })
            .collect(),
    )
}

#[async_trait]
impl ItineraryAPI for Engine {
    #[tracing::instrument(skip(self, stops, preferences))]
    async fn generate_itineraries(
        &self,
        stops: Vec<Stop>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        preferences: Option<String>,
    ) -> Result<Vec<Itinerary>, Error> {
        if stops.is_empty() {
            return Err(insufficient_stops_error());
        }

        let generator = match &self.generator {
            Some(generator) => generator,
            None => {
                tracing::warn!("no generative provider configured, using fallback itineraries");
                return Ok(fallback::fallback_itineraries(&stops));
            }
        };

        let prompt = build_prompt(&stops, start_date, end_date, preferences.as_deref());

        let generated = match generator.generate(&prompt).await {
            Ok(text) => parse_generated(&text),
            Err(err) => {
                tracing::warn!(code = err.code, "generative provider failed");
                None
            }
        };

        // Provider trouble never reaches the caller; the deterministic
        // variants stand in.
        Ok(generated.unwrap_or_else(|| fallback::fallback_itineraries(&stops)))
    }

    #[tracing::instrument(skip(self))]
    async fn recommend_nearby(&self, stop: Stop) -> Result<Vec<Place>, Error> {
        let center = &stop.coordinates;

        let (attractions, food) = futures::join!(
            self.nearby.find_nearby(center, 3000.0, ATTRACTION_KINDS, 10),
            self.nearby.find_nearby(center, 2000.0, FOOD_KINDS, 6),
        );

        let mut recommendations: Vec<Place> = attractions?
            .into_iter()
            .take(6)
            .map(|place| Place {
                category: Some("attraction".into()),
                ..place
            })
            .collect();

        recommendations.extend(food?.into_iter().take(6).map(|place| Place {
            category: Some("restaurant".into()),
            ..place
        }));

        Ok(recommendations)
    }
}
