use super::{directions, search, Engine};

use async_trait::async_trait;

use crate::{
    api::RouteAPI,
    entities::{Coordinates, OptimizedRoute, Stop},
    error::{insufficient_stops_error, too_many_stops_error, Error},
};

fn coordinates(stops: &[Stop]) -> Vec<Coordinates> {
    stops.iter().map(|stop| stop.coordinates.clone()).collect()
}

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self, stops))]
    async fn optimize_route(&self, stops: Vec<Stop>) -> Result<OptimizedRoute, Error> {
        if stops.len() < 2 {
            return Err(insufficient_stops_error());
        }

        if stops.len() - 1 > search::MAX_REMAINING_STOPS {
            return Err(too_many_stops_error());
        }

        // Two stops admit a single order; go straight to directions.
        let ordered = if stops.len() == 2 {
            stops
        } else {
            // One matrix request covers the start and every remaining
            // stop, so permutation costs need no further lookups.
            let matrix = self.matrix.fetch_matrix(&coordinates(&stops)).await?;
            let (order, _) = search::best_order(&matrix)?;

            let mut stops = stops;
            let rest = stops.split_off(1);
            let mut ordered = stops;
            ordered.extend(order.into_iter().map(|index| rest[index].clone()));
            ordered
        };

        let payload = self
            .directions
            .fetch_directions(&coordinates(&ordered))
            .await?;

        let summary = directions::normalize_directions(&payload)?;

        Ok(OptimizedRoute::new(ordered, summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use serde_json::{json, Value};
    use tokio_test::block_on;

    use crate::entities::{DistanceMatrix, Place};
    use crate::error::provider_unavailable_error;
    use crate::external::{DirectionsProvider, DistanceProvider, GeocodingProvider, NearbyProvider};

    struct MatrixStub {
        rows: Vec<Vec<f64>>,
        calls: AtomicUsize,
    }

    impl MatrixStub {
        fn new(rows: Vec<Vec<f64>>) -> Arc<Self> {
            Arc::new(Self {
                rows,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl DistanceProvider for MatrixStub {
        async fn fetch_matrix(&self, points: &[Coordinates]) -> Result<DistanceMatrix, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            DistanceMatrix::from_rows(self.rows.clone(), points.len())
                .ok_or_else(|| provider_unavailable_error())
        }
    }

    struct DirectionsStub {
        calls: AtomicUsize,
    }

    impl DirectionsStub {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl DirectionsProvider for DirectionsStub {
        async fn fetch_directions(&self, points: &[Coordinates]) -> Result<Value, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            let line: Vec<[f64; 2]> = points
                .iter()
                .map(|point| [point.longitude, point.latitude])
                .collect();

            Ok(json!({
                "routes": [{
                    "geometry": { "type": "LineString", "coordinates": line },
                    "summary": { "distance": 3000.0, "duration": 240.0 },
                    "segments": [{ "distance": 1500.0, "duration": 120.0 }],
                }]
            }))
        }
    }

    struct GeocoderStub;

    #[async_trait]
    impl GeocodingProvider for GeocoderStub {
        async fn search(&self, _query: &str) -> Result<Vec<Place>, Error> {
            Ok(Vec::new())
        }
    }

    struct NearbyStub;

    #[async_trait]
    impl NearbyProvider for NearbyStub {
        async fn find_nearby(
            &self,
            _center: &Coordinates,
            _radius: f64,
            _kinds: &str,
            _limit: u32,
        ) -> Result<Vec<Place>, Error> {
            Ok(Vec::new())
        }
    }

    fn engine(matrix: Arc<MatrixStub>, directions: Arc<DirectionsStub>) -> Engine {
        Engine::new(
            matrix,
            directions,
            None,
            Arc::new(GeocoderStub),
            Arc::new(NearbyStub),
        )
    }

    fn stop(id: &str, latitude: f64, longitude: f64) -> Stop {
        Stop {
            id: id.into(),
            name: format!("Stop {}", id),
            address: format!("{} Street", id),
            coordinates: Coordinates {
                latitude,
                longitude,
            },
        }
    }

    #[test]
    fn one_stop_fails_without_provider_calls() {
        let matrix = MatrixStub::new(vec![vec![0.0]]);
        let directions = DirectionsStub::new();
        let engine = engine(matrix.clone(), directions.clone());

        let err = block_on(engine.optimize_route(vec![stop("a", 1.0, 1.0)])).unwrap_err();

        assert_eq!(err.code, insufficient_stops_error().code);
        assert_eq!(matrix.calls.load(Ordering::SeqCst), 0);
        assert_eq!(directions.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn too_many_stops_fail_without_provider_calls() {
        let matrix = MatrixStub::new(vec![vec![0.0]]);
        let directions = DirectionsStub::new();
        let engine = engine(matrix.clone(), directions.clone());

        let stops: Vec<Stop> = (0..10)
            .map(|index| stop(&index.to_string(), index as f64, index as f64))
            .collect();

        let err = block_on(engine.optimize_route(stops)).unwrap_err();

        assert_eq!(err.code, too_many_stops_error().code);
        assert_eq!(matrix.calls.load(Ordering::SeqCst), 0);
        assert_eq!(directions.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn two_stops_skip_the_search() {
        let matrix = MatrixStub::new(vec![vec![0.0]]);
        let directions = DirectionsStub::new();
        let engine = engine(matrix.clone(), directions.clone());

        let route = block_on(engine.optimize_route(vec![
            stop("a", 1.0, 1.0),
            stop("b", 2.0, 2.0),
        ]))
        .unwrap();

        assert_eq!(matrix.calls.load(Ordering::SeqCst), 0);
        assert_eq!(directions.calls.load(Ordering::SeqCst), 1);

        let ids: Vec<&str> = route.stops.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn reorders_remaining_stops_by_search_result() {
        // Remaining stops b, c, d; best order visits c, b, d.
        let matrix = MatrixStub::new(vec![
            vec![0.0, 10.0, 2.0, 9.0],
            vec![10.0, 0.0, 4.0, 1.0],
            vec![2.0, 4.0, 0.0, 6.0],
            vec![9.0, 1.0, 6.0, 0.0],
        ]);
        let directions = DirectionsStub::new();
        let engine = engine(matrix.clone(), directions.clone());

        let route = block_on(engine.optimize_route(vec![
            stop("a", 1.0, 1.0),
            stop("b", 2.0, 2.0),
            stop("c", 3.0, 3.0),
            stop("d", 4.0, 4.0),
        ]))
        .unwrap();

        assert_eq!(matrix.calls.load(Ordering::SeqCst), 1);
        assert_eq!(directions.calls.load(Ordering::SeqCst), 1);

        let ids: Vec<&str> = route.stops.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "b", "d"]);

        // Directions were requested for the reordered sequence.
        assert_eq!(route.summary.total_distance, 3000.0);
        assert_eq!(route.summary.total_duration, 240.0);
        assert_eq!(route.summary.geometry[0], [1.0, 1.0]);
        assert_eq!(route.summary.geometry[1], [3.0, 3.0]);
        assert_eq!(route.summary.legs.len(), 1);
        assert_eq!(route.summary.legs[0].distance, "1.5 km");
        assert_eq!(route.summary.legs[0].duration, "2 mins");
    }
}
