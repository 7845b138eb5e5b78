use finsight_config::{Config, ConfigManager};
use tempfile::TempDir;

#[test]
fn load_returns_defaults_when_no_file_exists() {
    let dir = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    let config = manager.load().expect("load defaults");
    assert_eq!(config, Config::default());
    assert_eq!(config.currency, "INR");
    assert_eq!(config.anomaly_threshold_percent, 30.0);
}

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut config = Config::default();
    config.locale = "en-US".into();
    config.currency = "USD".into();
    config.anomaly_threshold_percent = 45.0;
    config.default_projection_years = 20;

    manager.save(&config).expect("save");
    assert!(manager.config_path().exists());

    let loaded = manager.load().expect("reload");
    assert_eq!(loaded, config);
}

#[test]
fn missing_thresholds_fall_back_to_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let partial = r#"{ "locale": "en-IN", "currency": "INR" }"#;
    std::fs::create_dir_all(manager.config_path().parent().unwrap()).unwrap();
    std::fs::write(manager.config_path(), partial).unwrap();

    let loaded = manager.load().expect("load partial");
    assert_eq!(loaded.anomaly_threshold_percent, 30.0);
    assert_eq!(loaded.default_projection_years, 10);
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = TempDir::new().expect("temp dir");
    let nested = dir.path().join("deeply").join("nested");
    let manager = ConfigManager::with_base_dir(nested).expect("manager");
    manager.save(&Config::default()).expect("save into new tree");
    assert!(manager.config_path().exists());
}

#[test]
fn corrupt_config_surfaces_a_serde_error() {
    let dir = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    std::fs::write(manager.config_path(), "not json").unwrap();
    let err = manager.load().expect_err("corrupt file should fail");
    assert!(format!("{err}").contains("Serialization"));
}
