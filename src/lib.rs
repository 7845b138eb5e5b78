#![doc(test(attr(deny(warnings))))]

//! Finsight derives financial intelligence from a user's raw records:
//! recurring-obligation materialization, summary and trend aggregation,
//! health scoring, anomaly detection, goal feasibility, insights, and a
//! standalone wealth projector.
//!
//! This crate is the host-facing facade: it wires tracing, re-exports the
//! engine surface, and maps persisted preferences onto engine options.

use std::sync::Once;

pub use finsight_config as config;
pub use finsight_core::*;
pub use finsight_domain as domain;
pub use finsight_storage_memory::MemoryRecordStore;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        init_tracing();
        tracing::info!("Finsight tracing initialized.");
    });
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::from_default_env().add_directive("finsight=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}

/// Maps persisted preferences onto the composite read path's options.
pub fn overview_options(config: &config::Config) -> OverviewOptions {
    OverviewOptions {
        anomaly_threshold: config.anomaly_threshold_percent,
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }

    #[test]
    fn config_threshold_feeds_overview_options() {
        let mut config = crate::config::Config::default();
        config.anomaly_threshold_percent = 55.0;
        let options = super::overview_options(&config);
        assert_eq!(options.anomaly_threshold, 55.0);
    }
}
