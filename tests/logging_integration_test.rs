//! Integration tests for logging initialisation

use vscene_report::config::{LogFormat, LoggingConfig};
use vscene_report::domain::ReportError;
use vscene_report::logging::init_logging;
use vscene_report::{log_stage_failed, log_stage_start};

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Json);
}

// Installs the global subscriber, so it is the only test in this binary
// that calls init_logging successfully.
#[test]
fn test_init_logging_installs_once() {
    let config = LoggingConfig {
        level: "debug".to_string(),
        format: LogFormat::Json,
    };
    init_logging(&config).unwrap();

    log_stage_start!("fetch", 42, "2024-03-14");
    let error = ReportError::Validation("day out of range".to_string());
    log_stage_failed!("fetch", 42, &error);

    let again = init_logging(&config).unwrap_err();
    assert!(matches!(again, ReportError::Configuration(_)));
}
