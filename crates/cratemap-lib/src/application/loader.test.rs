use super::*;
use std::io::Write;

#[test]
fn test_assemble_reads_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
package_name = "serde"
version = "1.0.200"
max_depth = 1
"#
    )
    .unwrap();

    let mut cli = Cli::default();
    cli.config = Some(file.path().to_path_buf());

    let config = CliConfig::assemble(cli).unwrap().app_config;

    assert_eq!(config.package_name, "serde");
    assert_eq!(config.version, "1.0.200");
    assert_eq!(config.max_depth, 1);
}

#[test]
fn test_cli_overrides_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
package_name = "serde"
version = "1.0.200"
max_depth = 1
"#
    )
    .unwrap();

    let mut cli = Cli::default();
    cli.config = Some(file.path().to_path_buf());
    cli.options.max_depth = 6;
    cli.options.version = "2.0.0".to_string();

    let config = CliConfig::assemble(cli).unwrap().app_config;

    // CLI-layer values replace file values; untouched file values survive
    assert_eq!(config.max_depth, 6);
    assert_eq!(config.version, "2.0.0");
    assert_eq!(config.package_name, "serde");
}

#[test]
fn test_missing_explicit_config_file_is_fatal() {
    let mut cli = Cli::default();
    cli.config = Some("/nonexistent/cratemap.toml".into());

    let err = CliConfig::assemble(cli).unwrap_err();
    assert!(matches!(err, ConfigError::ConfigFileError { .. }));
}

#[test]
fn test_assemble_without_file_keeps_cli_values() {
    let mut cli = Cli::default();
    cli.options.package_name = "tokio".to_string();
    cli.options.version = "1.50.0".to_string();

    let config = CliConfig::assemble(cli).unwrap().app_config;

    assert_eq!(config.package_name, "tokio");
    assert_eq!(config.version, "1.50.0");
    assert_eq!(config.max_depth, 3);
}
