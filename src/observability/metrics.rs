use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGaugeVec, Opts, Registry, TextEncoder,
};

const MATCH_COUNT_BUCKETS: &[f64] = &[0.0, 1.0, 2.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0];

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub filter_requests_total: IntCounterVec,
    pub filter_matches: HistogramVec,
    pub filter_latency_seconds: HistogramVec,
    pub hook_events_total: IntCounterVec,
    pub catalog_size: IntGaugeVec,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let filter_requests_total = IntCounterVec::new(
            Opts::new("filter_requests_total", "Total filter evaluations by entity"),
            &["entity"],
        )
        .expect("valid filter_requests_total metric");

        let filter_matches = HistogramVec::new(
            HistogramOpts::new("filter_matches", "Number of entities returned per filter")
                .buckets(MATCH_COUNT_BUCKETS.to_vec()),
            &["entity"],
        )
        .expect("valid filter_matches metric");

        let filter_latency_seconds = HistogramVec::new(
            HistogramOpts::new(
                "filter_latency_seconds",
                "Latency of filter evaluation in seconds",
            ),
            &["entity"],
        )
        .expect("valid filter_latency_seconds metric");

        let hook_events_total = IntCounterVec::new(
            Opts::new("hook_events_total", "Placeholder action hooks invoked by action"),
            &["action"],
        )
        .expect("valid hook_events_total metric");

        let catalog_size = IntGaugeVec::new(
            Opts::new("catalog_size", "Entities currently held per catalog"),
            &["entity"],
        )
        .expect("valid catalog_size metric");

        registry
            .register(Box::new(filter_requests_total.clone()))
            .expect("register filter_requests_total");
        registry
            .register(Box::new(filter_matches.clone()))
            .expect("register filter_matches");
        registry
            .register(Box::new(filter_latency_seconds.clone()))
            .expect("register filter_latency_seconds");
        registry
            .register(Box::new(hook_events_total.clone()))
            .expect("register hook_events_total");
        registry
            .register(Box::new(catalog_size.clone()))
            .expect("register catalog_size");

        Self {
            registry,
            filter_requests_total,
            filter_matches,
            filter_latency_seconds,
            hook_events_total,
            catalog_size,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
