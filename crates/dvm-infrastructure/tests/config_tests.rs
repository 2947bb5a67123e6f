//! Configuration loading and service assembly tests

use dvm_infrastructure::config::{AppConfig, ConfigLoader};
use dvm_infrastructure::di::ServiceFactory;

#[test]
fn defaults_apply_when_no_file_exists() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("missing.toml"))
        .load()
        .unwrap();

    assert_eq!(config.store.provider, "memory");
    assert_eq!(config.cache.provider, "moka");
    assert!(config.cache.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn toml_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("device-manager.toml");
    std::fs::write(
        &path,
        r#"
[cache]
enabled = false
provider = "redis"
redis_url = "redis://cache:6379"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = ConfigLoader::new().with_config_path(&path).load().unwrap();

    assert!(!config.cache.enabled);
    assert_eq!(config.cache.provider, "redis");
    assert_eq!(config.cache.redis_url.as_deref(), Some("redis://cache:6379"));
    assert_eq!(config.logging.level, "debug");
    // Untouched sections keep their defaults
    assert_eq!(config.store.provider, "memory");
}

#[test]
fn environment_overrides_file_and_defaults() {
    std::env::set_var("DVMTEST_CACHE__PROVIDER", "null");

    let dir = tempfile::tempdir().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("missing.toml"))
        .with_env_prefix("DVMTEST")
        .load()
        .unwrap();

    assert_eq!(config.cache.provider, "null");
    std::env::remove_var("DVMTEST_CACHE__PROVIDER");
}

#[test]
fn invalid_log_level_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("device-manager.toml");
    std::fs::write(&path, "[logging]\nlevel = \"verbose\"\n").unwrap();

    let result = ConfigLoader::new().with_config_path(&path).load();
    assert!(result.is_err());
}

#[test]
fn save_then_load_roundtrips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.toml");

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&AppConfig::default(), &path).unwrap();
    let loaded = loader.load().unwrap();

    assert_eq!(loaded.store.provider, "memory");
    assert_eq!(loaded.cache.provider, "moka");
}

#[test]
fn factory_assembles_service_from_defaults() {
    let factory = ServiceFactory::new(AppConfig::default());
    assert!(factory.build_device_service().is_ok());
}

#[test]
fn factory_accepts_disabled_cache() {
    let mut config = AppConfig::default();
    config.cache.enabled = false;
    config.cache.provider = "does-not-matter".to_string();

    let factory = ServiceFactory::new(config);
    assert!(factory.build_device_service().is_ok());
}

#[test]
fn factory_rejects_unknown_providers() {
    let mut config = AppConfig::default();
    config.store.provider = "cosmos".to_string();
    assert!(ServiceFactory::new(config).build_device_service().is_err());

    let mut config = AppConfig::default();
    config.cache.provider = "memcached".to_string();
    assert!(ServiceFactory::new(config).build_device_service().is_err());
}
