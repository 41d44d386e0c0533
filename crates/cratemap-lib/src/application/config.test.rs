use super::*;
use std::io::Write;

#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert!(config.package_name.is_empty());
    assert!(config.version.is_empty());
    assert_eq!(config.max_depth, 3);
    assert!(config.filter_substring.is_empty());
    assert_eq!(config.registry_url, "https://crates.io/api/v1");
    assert!(!config.test_mode);
    assert_eq!(config.output_file, PathBuf::from("graph.png"));
    assert_eq!(config.net_timeout, 30);
    assert!(!config.order_bounded);
}

#[test]
fn test_merge_takes_non_default_values() {
    let base = AppConfig::default();
    let other = AppConfig {
        package_name: "serde".to_string(),
        version: "1.0.200".to_string(),
        max_depth: 5,
        test_mode: true,
        ..AppConfig::default()
    };

    let merged = base.merge_with(other);

    assert_eq!(merged.package_name, "serde");
    assert_eq!(merged.version, "1.0.200");
    assert_eq!(merged.max_depth, 5);
    assert!(merged.test_mode);
    // Untouched fields keep their defaults
    assert_eq!(merged.net_timeout, 30);
}

#[test]
fn test_merge_defaults_do_not_override() {
    let base = AppConfig {
        package_name: "tokio".to_string(),
        max_depth: 7,
        ..AppConfig::default()
    };

    let merged = base.merge_with(AppConfig::default());

    assert_eq!(merged.package_name, "tokio");
    assert_eq!(merged.max_depth, 7);
}

#[test]
fn test_validate_requires_package_name() {
    let config = AppConfig {
        version: "1.0".to_string(),
        ..AppConfig::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
    assert!(err.to_string().contains("package_name"));
}

#[test]
fn test_validate_requires_version() {
    let config = AppConfig {
        package_name: "serde".to_string(),
        ..AppConfig::default()
    };

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("version"));
}

#[test]
fn test_validate_accepts_complete_config() {
    let config = AppConfig {
        package_name: "serde".to_string(),
        version: "1.0.200".to_string(),
        ..AppConfig::default()
    };

    assert!(config.validate().is_ok());
}

#[test]
fn test_from_file_reads_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
package_name = "serde"
version = "1.0.200"
max_depth = 1
filter_substring = "derive"
test_mode = true
"#
    )
    .unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();

    assert_eq!(config.package_name, "serde");
    assert_eq!(config.version, "1.0.200");
    assert_eq!(config.max_depth, 1);
    assert_eq!(config.filter_substring, "derive");
    assert!(config.test_mode);
    // Unset keys fall back to defaults
    assert_eq!(config.net_timeout, 30);
}

#[test]
fn test_from_file_rejects_non_integer_depth() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "max_depth = \"three\"").unwrap();

    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ConfigFileParseError { .. }));
}

#[test]
fn test_from_file_missing_file_errors() {
    let err = AppConfig::from_file(Path::new("/nonexistent/cratemap.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ConfigFileError { .. }));
}

#[test]
fn test_to_logger_config_resolves_color_and_level() {
    let config = AppConfig {
        log_level: 3,
        color: ColorMode::Never,
        ..AppConfig::default()
    };
    let logger_config = config.to_logger_config();
    assert_eq!(logger_config.level, LogLevel::Debug);
    assert!(!logger_config.ansi);

    let config = AppConfig {
        color: ColorMode::Always,
        ..AppConfig::default()
    };
    assert!(config.to_logger_config().ansi);
}
