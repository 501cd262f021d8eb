use crate::entities::{EnrichedStop, Itinerary, Stop};

/// Pseudo-highlights cycled over stops by position.
const HIGHLIGHTS: [&str; 10] = [
    "Iconic landmark",
    "Scenic viewpoint",
    "Local cuisine",
    "Historic site",
    "Nature walk",
    "Cultural experience",
    "Shopping district",
    "Beach access",
    "Family friendly",
    "Adventure spot",
];

#[derive(Clone, Copy)]
enum Variant {
    Classic,
    Relaxed,
    Express,
}

impl Variant {
    fn id(&self) -> &'static str {
        match self {
            Self::Classic => "classic-route",
            Self::Relaxed => "relaxed-tour",
            Self::Express => "efficient-express",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Classic => "Classic Route",
            Self::Relaxed => "Relaxed Tour",
            Self::Express => "Efficient Express",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::Classic => "Visit all locations in the order provided",
            Self::Relaxed => "Take your time at each location with extended breaks",
            Self::Express => "Quick visits to maximize coverage",
        }
    }

    fn estimated_time(&self) -> &'static str {
        match self {
            Self::Classic => "2-3 hours",
            Self::Relaxed => "3-4 hours",
            Self::Express => "1-2 hours",
        }
    }

    fn time_slot(&self) -> &'static str {
        match self {
            Self::Classic => "Morning",
            Self::Relaxed => "Full Day",
            Self::Express => "Afternoon",
        }
    }
}

fn enrich(stop: &Stop, position: usize, variant: Variant) -> EnrichedStop {
    EnrichedStop {
        stop_id: stop.id.clone(),
        name: stop.name.clone(),
        address: stop.address.clone(),
        highlight: HIGHLIGHTS[position % HIGHLIGHTS.len()].into(),
        estimated_cost: 200 + 100 * (position % 3) as u32,
        estimated_time: variant.estimated_time().into(),
        time_slot: variant.time_slot().into(),
        nearby_recommendations: Vec::new(),
    }
}

fn variant_itinerary(stops: &[Stop], variant: Variant) -> Itinerary {
    Itinerary {
        id: variant.id().into(),
        title: variant.title().into(),
        description: variant.description().into(),
        stops: stops
            .iter()
            .enumerate()
            .map(|(position, stop)| enrich(stop, position, variant))
            .collect(),
    }
}

/// Deterministic itineraries used whenever no generative result is
/// usable. Always exactly three variants in a fixed order; the relaxed
/// tour covers only the first half of the stops, rounded up.
pub fn fallback_itineraries(stops: &[Stop]) -> Vec<Itinerary> {
    let half = (stops.len() + 1) / 2;

    vec![
        variant_itinerary(stops, Variant::Classic),
        variant_itinerary(&stops[..half], Variant::Relaxed),
        variant_itinerary(stops, Variant::Express),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Coordinates;

    fn stops(count: usize) -> Vec<Stop> {
        (0..count)
            .map(|index| Stop {
                id: format!("stop-{}", index),
                name: format!("Stop {}", index),
                address: format!("{} Main Street", index),
                coordinates: Coordinates {
                    latitude: 48.0 + index as f64,
                    longitude: 2.0 + index as f64,
                },
            })
            .collect()
    }

    #[test]
    fn always_three_variants_in_fixed_order() {
        let itineraries = fallback_itineraries(&stops(4));

        assert_eq!(itineraries.len(), 3);
        assert_eq!(itineraries[0].title, "Classic Route");
        assert_eq!(itineraries[1].title, "Relaxed Tour");
        assert_eq!(itineraries[2].title, "Efficient Express");
    }

    #[test]
    fn relaxed_tour_takes_first_half_rounded_up() {
        let itineraries = fallback_itineraries(&stops(4));

        assert_eq!(itineraries[1].stops.len(), 2);
        assert_eq!(itineraries[1].stops[0].stop_id, "stop-0");
        assert_eq!(itineraries[1].stops[1].stop_id, "stop-1");

        let odd = fallback_itineraries(&stops(5));

        assert_eq!(odd[1].stops.len(), 3);
    }

    #[test]
    fn classic_and_express_cover_all_stops_in_input_order() {
        let itineraries = fallback_itineraries(&stops(4));

        for variant in [&itineraries[0], &itineraries[2]] {
            assert_eq!(variant.stops.len(), 4);
            for (index, stop) in variant.stops.iter().enumerate() {
                assert_eq!(stop.stop_id, format!("stop-{}", index));
            }
        }

        assert_eq!(itineraries[0].stops[0].time_slot, "Morning");
        assert_eq!(itineraries[0].stops[0].estimated_time, "2-3 hours");
        assert_eq!(itineraries[2].stops[0].time_slot, "Afternoon");
        assert_eq!(itineraries[2].stops[0].estimated_time, "1-2 hours");
    }

    #[test]
    fn enrichment_cycles_highlights_and_costs() {
        let itineraries = fallback_itineraries(&stops(4));
        let classic = &itineraries[0];

        let costs: Vec<u32> = classic.stops.iter().map(|s| s.estimated_cost).collect();
        assert_eq!(costs, vec![200, 300, 400, 200]);

        for (index, stop) in classic.stops.iter().enumerate() {
            assert!(!stop.highlight.is_empty());
            assert_eq!(stop.highlight, HIGHLIGHTS[index % HIGHLIGHTS.len()]);
            assert!(stop.estimated_cost >= 200);
            assert!(stop.nearby_recommendations.is_empty());
        }

        // The relaxed subset re-indexes positions from zero.
        assert_eq!(itineraries[1].stops[0].estimated_cost, 200);
        assert_eq!(itineraries[1].stops[0].highlight, HIGHLIGHTS[0]);
    }

    #[test]
    fn zero_stops_still_yields_three_shells() {
        let itineraries = fallback_itineraries(&[]);

        assert_eq!(itineraries.len(), 3);
        for itinerary in &itineraries {
            assert!(itinerary.stops.is_empty());
            assert!(!itinerary.title.is_empty());
            assert!(!itinerary.description.is_empty());
        }
    }
}
