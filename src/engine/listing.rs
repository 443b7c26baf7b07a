use std::time::Instant;

use tracing::debug;

use crate::engine::catalog::{Catalog, Identified};
use crate::engine::filter::{filter_entities, Criteria};
use crate::error::AppError;
use crate::observability::metrics::Metrics;

/// Filters a snapshot of `catalog` and records the evaluation in `metrics`.
pub fn list_matching<T, C>(
    catalog: &Catalog<T>,
    criteria: &C,
    metrics: &Metrics,
) -> Result<Vec<T>, AppError>
where
    T: Identified + Clone,
    C: Criteria<T> + std::fmt::Debug,
{
    let entity = catalog.name();
    let start = Instant::now();

    let snapshot = catalog.snapshot()?;
    let matched = filter_entities(&snapshot, criteria);

    metrics
        .filter_latency_seconds
        .with_label_values(&[entity])
        .observe(start.elapsed().as_secs_f64());
    metrics
        .filter_requests_total
        .with_label_values(&[entity])
        .inc();
    metrics
        .filter_matches
        .with_label_values(&[entity])
        .observe(matched.len() as f64);

    debug!(
        entity,
        ?criteria,
        total = snapshot.len(),
        matched = matched.len(),
        "filter evaluated"
    );

    Ok(matched)
}
