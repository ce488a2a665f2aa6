//! Tests for configuration loading and log level parsing

use ruc_infrastructure::config::{AppConfig, ConfigLoader};
use ruc_infrastructure::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS, IMAGE_CACHE_DEFAULT_CAPACITY,
};
use ruc_infrastructure::logging::parse_log_level;

#[test]
fn defaults_match_constants() {
    let config = AppConfig::default();

    assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.api.timeout_secs, DEFAULT_HTTP_TIMEOUT_SECS);
    assert_eq!(config.images.cache_capacity, IMAGE_CACHE_DEFAULT_CAPACITY);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn toml_file_overrides_defaults() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "ruc.toml",
            r#"
[api]
base_url = "http://localhost:8080/api/"
timeout_secs = 5

[logging]
level = "debug"
"#,
        )?;

        let config = ConfigLoader::new().load().expect("load");
        assert_eq!(config.api.base_url, "http://localhost:8080/api/");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.logging.level, "debug");
        // untouched sections keep their defaults
        assert_eq!(config.images.cache_capacity, IMAGE_CACHE_DEFAULT_CAPACITY);
        Ok(())
    });
}

#[test]
fn environment_overrides_file_and_defaults() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "ruc.toml",
            r#"
[api]
base_url = "http://from-file.example/api/"
"#,
        )?;
        jail.set_env("RUC_API__BASE_URL", "http://from-env.example/api/");
        jail.set_env("RUC_API__TIMEOUT_SECS", "7");
        jail.set_env("RUC_IMAGES__CACHE_CAPACITY", "32");

        let config = ConfigLoader::new().load().expect("load");
        assert_eq!(config.api.base_url, "http://from-env.example/api/");
        assert_eq!(config.api.timeout_secs, 7);
        assert_eq!(config.images.cache_capacity, 32);
        // untouched fields keep their defaults
        assert_eq!(config.logging.level, "info");
        Ok(())
    });
}

#[test]
fn missing_file_falls_back_to_defaults() {
    figment::Jail::expect_with(|jail| {
        let config = ConfigLoader::new()
            .with_config_path(jail.directory().join("absent.toml"))
            .load()
            .expect("load");

        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        Ok(())
    });
}

#[test]
fn invalid_toml_is_a_configuration_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("ruc.toml");
    std::fs::write(&path, "api = { base_url = ").expect("write config");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .err()
        .expect("load must fail");

    assert!(
        matches!(err, ruc_domain::Error::Configuration { .. }),
        "got: {err}"
    );
}

#[test]
fn log_levels_parse_case_insensitively() {
    assert_eq!(parse_log_level("debug").expect("debug"), tracing::Level::DEBUG);
    assert_eq!(parse_log_level("WARN").expect("warn"), tracing::Level::WARN);
    assert_eq!(
        parse_log_level("warning").expect("warning"),
        tracing::Level::WARN
    );
    assert!(parse_log_level("verbose").is_err());
}
