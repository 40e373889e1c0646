//! Metrics setup and update for query execution.

use prometheus::IntCounter;

use crate::response::QueryResponse;

#[derive(Debug, Clone)]
pub struct Metrics {
    pub query_total: IntCounter,
    pub query_error_total: IntCounter,
}

impl Metrics {
    /// Set up the counters used to produce Prometheus metrics.
    pub fn initialize(metrics_registry: &mut prometheus::Registry) -> Result<Self, prometheus::Error> {
        let query_total = add_int_counter_metric(
            metrics_registry,
            "covid_graph_query_total",
            "Total queries executed.",
        )?;

        let query_error_total = add_int_counter_metric(
            metrics_registry,
            "covid_graph_query_error_total",
            "Total queries answered with errors.",
        )?;

        Ok(Metrics {
            query_total,
            query_error_total,
        })
    }

    pub fn record_query(&self, response: &QueryResponse) {
        self.query_total.inc();
        if !response.is_ok() {
            self.query_error_total.inc();
        }
    }
}

/// Create a new int counter metric and register it with the provided Prometheus Registry.
fn add_int_counter_metric(
    metrics_registry: &mut prometheus::Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<IntCounter, prometheus::Error> {
    let int_counter =
        IntCounter::with_opts(prometheus::Opts::new(metric_name, metric_description))?;
    metrics_registry.register(Box::new(int_counter.clone()))?;
    Ok(int_counter)
}
