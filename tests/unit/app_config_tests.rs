/*!
 * Tests for app configuration
 */

use rtlfix::app_config::{Config, LogLevel};

#[test]
fn test_default_config_shouldValidate() {
    let config = Config::default();
    assert!(config.validate().is_ok());

    assert_eq!(config.output.suffix, "rtl");
    assert!(!config.output.in_place);
    assert_eq!(config.encoding.utf16_control_ratio, 0.5);
    assert_eq!(config.preview.max_lines, 10);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_config_withEmptyJson_shouldUseDefaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.output.suffix, "rtl");
    assert_eq!(config.preview.max_lines, 10);
}

#[test]
fn test_config_withPartialJson_shouldFillRemainingDefaults() {
    let config: Config =
        serde_json::from_str(r#"{"output": {"suffix": "fixed"}, "log_level": "debug"}"#).unwrap();

    assert_eq!(config.output.suffix, "fixed");
    assert!(!config.output.in_place);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.encoding.utf16_control_ratio, 0.5);
}

#[test]
fn test_config_roundTrip_shouldPreserveValues() {
    let mut config = Config::default();
    config.output.suffix = "he".to_string();
    config.preview.max_lines = 3;

    let json = serde_json::to_string(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.output.suffix, "he");
    assert_eq!(parsed.preview.max_lines, 3);
}

#[test]
fn test_validate_withEmptySuffix_shouldFailUnlessInPlace() {
    let mut config = Config::default();
    config.output.suffix = String::new();
    assert!(config.validate().is_err());

    config.output.in_place = true;
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_withPathSeparatorInSuffix_shouldFail() {
    let mut config = Config::default();
    config.output.suffix = "a/b".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withOutOfRangeRatio_shouldFail() {
    let mut config = Config::default();
    config.encoding.utf16_control_ratio = 0.0;
    assert!(config.validate().is_err());

    config.encoding.utf16_control_ratio = 1.5;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withZeroPreviewLines_shouldFail() {
    let mut config = Config::default();
    config.preview.max_lines = 0;
    assert!(config.validate().is_err());
}
