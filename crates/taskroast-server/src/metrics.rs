//! Prometheus metrics collection and formatting.
//!
//! This module provides metrics in Prometheus text exposition format.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-lifetime counters for the roast pipeline.
#[derive(Debug, Default)]
pub struct Metrics {
    /// Authorized invocations of the scheduled trigger.
    pub runs_total: AtomicU64,

    /// Trigger calls rejected for a bad or missing credential.
    pub unauthorized_total: AtomicU64,

    /// Targets processed across all invocations, delivered or not.
    pub targets_attempted_total: AtomicU64,

    /// Targets whose generation or dispatch failed.
    pub targets_failed_total: AtomicU64,
}

impl Metrics {
    /// Record one authorized invocation.
    pub fn record_run(&self) {
        self.runs_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one rejected trigger call.
    pub fn record_unauthorized(&self) {
        self.unauthorized_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the outcome counts of one completed invocation.
    pub fn record_outcomes(&self, attempted: u64, failed: u64) {
        self.targets_attempted_total
            .fetch_add(attempted, Ordering::Relaxed);
        self.targets_failed_total.fetch_add(failed, Ordering::Relaxed);
    }
}

/// Format all counters as Prometheus text.
pub fn collect_metrics(metrics: &Metrics) -> String {
    let mut output = String::new();

    writeln!(
        output,
        "# HELP taskroast_runs_total Authorized invocations of the roast trigger"
    )
    .ok();
    writeln!(output, "# TYPE taskroast_runs_total counter").ok();
    writeln!(
        output,
        "taskroast_runs_total {}",
        metrics.runs_total.load(Ordering::Relaxed)
    )
    .ok();

    writeln!(output).ok();
    writeln!(
        output,
        "# HELP taskroast_unauthorized_total Trigger calls rejected for a bad credential"
    )
    .ok();
    writeln!(output, "# TYPE taskroast_unauthorized_total counter").ok();
    writeln!(
        output,
        "taskroast_unauthorized_total {}",
        metrics.unauthorized_total.load(Ordering::Relaxed)
    )
    .ok();

    writeln!(output).ok();
    writeln!(
        output,
        "# HELP taskroast_targets_total Targets processed by result"
    )
    .ok();
    writeln!(output, "# TYPE taskroast_targets_total counter").ok();
    let attempted = metrics.targets_attempted_total.load(Ordering::Relaxed);
    let failed = metrics.targets_failed_total.load(Ordering::Relaxed);
    writeln!(
        output,
        "taskroast_targets_total{{result=\"delivered\"}} {}",
        attempted.saturating_sub(failed)
    )
    .ok();
    writeln!(output, "taskroast_targets_total{{result=\"failed\"}} {failed}").ok();

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_metrics_on_fresh_counters() {
        let metrics = Metrics::default();
        let output = collect_metrics(&metrics);

        assert!(output.contains("taskroast_runs_total 0"));
        assert!(output.contains("taskroast_unauthorized_total 0"));
        assert!(output.contains("taskroast_targets_total{result=\"delivered\"} 0"));
        assert!(output.contains("taskroast_targets_total{result=\"failed\"} 0"));
    }

    #[test]
    fn collect_metrics_after_recording() {
        let metrics = Metrics::default();
        metrics.record_run();
        metrics.record_unauthorized();
        metrics.record_outcomes(5, 2);

        let output = collect_metrics(&metrics);
        assert!(output.contains("taskroast_runs_total 1"));
        assert!(output.contains("taskroast_unauthorized_total 1"));
        assert!(output.contains("taskroast_targets_total{result=\"delivered\"} 3"));
        assert!(output.contains("taskroast_targets_total{result=\"failed\"} 2"));
    }
}
