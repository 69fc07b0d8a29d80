//! Bounded parallel fan-out over independent chart requests.
//!
//! Each request is a pure computation, so batch processing is an ordinary
//! parallel map: one blocking task per request, admission gated by a
//! semaphore. Results come back in input order.

use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::api::{ChartError, ChartRequest, ChartResponse};
use crate::services::chart::calculate_chart;

/// Backpressure configuration for batch calculation.
#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    /// Maximum number of charts computed at once. Values below 1 are
    /// treated as 1.
    pub max_concurrency: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self { max_concurrency: 8 }
    }
}

/// Compute many charts concurrently, bounded by `options.max_concurrency`.
///
/// The output vector has one entry per request, in the same order. A failed
/// join (worker panic) maps to [`ChartError::TaskFailed`] for that entry
/// only; the rest of the batch is unaffected.
pub async fn calculate_charts(
    requests: Vec<ChartRequest>,
    options: BatchOptions,
) -> Vec<Result<ChartResponse, ChartError>> {
    let semaphore = Arc::new(Semaphore::new(options.max_concurrency.max(1)));

    let handles: Vec<_> = requests
        .into_iter()
        .map(|request| {
            let semaphore = Arc::clone(&semaphore);
            tokio::spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| ChartError::TaskFailed(e.to_string()))?;
                tokio::task::spawn_blocking(move || calculate_chart(&request))
                    .await
                    .map_err(|e| ChartError::TaskFailed(e.to_string()))?
            })
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(match handle.await {
            Ok(result) => result,
            Err(e) => Err(ChartError::TaskFailed(e.to_string())),
        });
    }
    results
}
