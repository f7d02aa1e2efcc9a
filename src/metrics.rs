//! Request metrics for the greeting route.
//!
//! Values are emitted through the `metrics` facade and reach whichever
//! recorder the embedding process installs.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

/// Greetings served counter metric name.
pub const METRIC_GREETINGS_SERVED: &str = "greetings_served_total";
/// Greeting latency metric name.
pub const METRIC_GREETING_LATENCY: &str = "greeting_latency_ms";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_GREETINGS_SERVED,
        "Total number of greetings served, labelled by environment"
    );
    describe_histogram!(
        METRIC_GREETING_LATENCY,
        "Time to build a greeting in milliseconds"
    );

    debug!("Metrics initialized");
}

/// Increment the greetings served counter.
pub fn inc_greetings_served(environment: &str) {
    counter!(METRIC_GREETINGS_SERVED, "environment" => environment.to_string()).increment(1);
}

/// RAII guard for timing operations.
/// Automatically records latency when dropped.
pub struct LatencyTimer {
    start: Instant,
    metric_name: &'static str,
}

impl LatencyTimer {
    /// Create a new latency timer for the given metric.
    pub fn new(metric_name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            metric_name,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        histogram!(self.metric_name).record(self.elapsed_ms());
    }
}

/// Create a latency timer for building a greeting.
pub fn timer_greeting() -> LatencyTimer {
    LatencyTimer::new(METRIC_GREETING_LATENCY)
}
