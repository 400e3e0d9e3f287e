use pathshala::infrastructure::observability::TracingConfig;
use pathshala::presentation::Environment;
use pathshala::presentation::config::LoggingSettings;

#[test]
fn given_logging_settings_when_building_config_then_uses_level_and_format() {
    let logging = LoggingSettings {
        level: "warn".to_string(),
        json: true,
    };

    let config = TracingConfig::from_settings(Environment::Prod, &logging);

    assert_eq!(config.environment, "Prod");
    assert!(config.json_format);
    assert!(config.default_directives.starts_with("warn,"));
    assert!(config.default_directives.contains("pathshala=debug"));
}
