use tokio::sync::broadcast;

use crate::engine::catalog::{Catalog, Identified};
use crate::models::activity::ActivityEvent;
use crate::models::ride::Ride;
use crate::models::rider::Rider;
use crate::models::route::Route;
use crate::observability::metrics::Metrics;
use crate::seed;

pub struct AppState {
    pub riders: Catalog<Rider>,
    pub rides: Catalog<Ride>,
    pub routes: Catalog<Route>,
    pub activity_tx: broadcast::Sender<ActivityEvent>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(
        riders: Vec<Rider>,
        rides: Vec<Ride>,
        routes: Vec<Route>,
        event_buffer_size: usize,
    ) -> Self {
        let (activity_tx, _unused_rx) = broadcast::channel(event_buffer_size);
        let metrics = Metrics::new();

        for (entity, size) in [("rider", riders.len()), ("ride", rides.len()), ("route", routes.len())] {
            metrics
                .catalog_size
                .with_label_values(&[entity])
                .set(size as i64);
        }

        Self {
            riders: Catalog::new("rider", riders),
            rides: Catalog::new("ride", rides),
            routes: Catalog::new("route", routes),
            activity_tx,
            metrics,
        }
    }

    pub fn empty(event_buffer_size: usize) -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new(), event_buffer_size)
    }

    pub fn with_demo_data(event_buffer_size: usize) -> Self {
        let riders = seed::demo_riders();
        let rides = seed::demo_rides(&riders);
        let routes = seed::demo_routes(&riders);
        Self::new(riders, rides, routes, event_buffer_size)
    }

    pub fn record_catalog_size<T: Identified + Clone>(&self, catalog: &Catalog<T>, size: usize) {
        self.metrics
            .catalog_size
            .with_label_values(&[catalog.name()])
            .set(size as i64);
    }
}
