use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Stores user-tunable engine preferences.
///
/// Unknown thresholds fall back to their defaults on load, so older config
/// files keep working after new knobs appear.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    /// Percentage swing against the trailing average that flags a
    /// spending category.
    #[serde(default = "Config::default_anomaly_threshold")]
    pub anomaly_threshold_percent: f64,
    /// Horizon offered by default when simulating wealth growth.
    #[serde(default = "Config::default_projection_years")]
    pub default_projection_years: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-IN".into(),
            currency: "INR".into(),
            anomaly_threshold_percent: Self::default_anomaly_threshold(),
            default_projection_years: Self::default_projection_years(),
        }
    }
}

impl Config {
    pub fn default_anomaly_threshold() -> f64 {
        30.0
    }

    pub fn default_projection_years() -> u32 {
        10
    }

    /// Base directory for finsight's persisted state.
    pub fn default_base_dir() -> PathBuf {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        base.join("finsight")
    }
}
