use explainer::{ErrorCategory, ObservabilityConfig};

#[test]
fn builder_overrides_defaults() {
    let config = ObservabilityConfig::new("explainer")
        .with_version("9.9.9")
        .with_log_level("explainer_models=debug,warn")
        .with_json_logs(true);

    assert_eq!(config.service_name, "explainer");
    assert_eq!(config.service_version, "9.9.9");
    assert!(config.json_logs);
    assert!(config.env_filter().is_ok());
}

#[test]
fn invalid_filter_is_config_error() {
    let err = ObservabilityConfig::new("explainer")
        .with_log_level("explainer=notalevel")
        .env_filter()
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Config);
}
