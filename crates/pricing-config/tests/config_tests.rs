use std::fs;

use pricing_config::{ColorScheme, Config, ConfigError, ConfigManager};
use pricing_domain::{PlanCatalog, PlanTier, Program, ProrationBasis};
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());

    let cfg = manager.load().expect("load defaults");

    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.catalog().len(), 15);
    assert!(manager.config_path().ends_with("config/config.json"));
    assert!(!dir.path().join("config").exists());
}

#[test]
fn save_creates_config_directory() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("fresh"));

    manager.save(&Config::default()).expect("save config");

    assert!(manager.config_path().exists());
    assert_eq!(manager.load().expect("reload"), Config::default());
}

#[test]
fn partial_family_policy_in_config_loads() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"rules": {"family_plan": {"enrollment_fee": 79.0}}}"#).expect("write");

    let cfg = ConfigManager::new(path).load().expect("load partial policy");

    assert_eq!(cfg.rules.family_plan.enrollment_fee, 79.0);
    assert_eq!(cfg.rules.family_plan.threshold, 3);
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let mut cfg = Config::default();
    cfg.saved_enrollment_discount = Some(75.0);
    cfg.color_scheme = ColorScheme::Dark;
    cfg.rules.proration = ProrationBasis::StandardMonth;

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.saved_enrollment_discount, Some(75.0));
    assert_eq!(loaded.color_scheme, ColorScheme::Dark);
    assert_eq!(loaded.rules.proration, ProrationBasis::StandardMonth);
}

#[test]
fn supplied_catalog_replaces_built_in_list() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let catalog = PlanCatalog::new(vec![PlanTier::monthly(
        "Jiu Jitsu Standard",
        Program::JiuJitsu,
        185.0,
        199.0,
        true,
    )])
    .expect("catalog");
    let cfg = Config {
        catalog: Some(catalog),
        ..Config::default()
    };
    manager.save(&cfg).expect("save");

    let loaded = manager.load().expect("load");
    let tiers = loaded.catalog();
    assert_eq!(tiers.len(), 1);
    assert_eq!(tiers.get(0).map(PlanTier::enrollment_fee), Some(199.0));
}

#[test]
fn invalid_values_are_rejected_on_load() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    let manager = ConfigManager::new(path.clone());

    fs::write(&path, r#"{"saved_enrollment_discount": -20.0}"#).expect("write");
    assert!(matches!(manager.load(), Err(ConfigError::Invalid(_))));

    fs::write(&path, r#"{"rules": {"card_fee_rate": 2.5}}"#).expect("write");
    assert!(matches!(manager.load(), Err(ConfigError::Invalid(_))));

    fs::write(&path, r#"{"catalog": []}"#).expect("write");
    assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
}

#[test]
fn unknown_color_scheme_falls_back_to_light() {
    let cfg: Config = serde_json::from_str(r#"{"color_scheme": "sepia"}"#).expect("parse");
    assert_eq!(cfg.color_scheme, ColorScheme::Light);
    assert!(cfg.ui_color_enabled);
}
