use super::*;
use clap::Parser;

#[test]
fn test_parse_package_flags() {
    let cli = Cli::try_parse_from([
        "cratemap",
        "-p",
        "serde",
        "--package-version",
        "1.0.200",
        "-d",
        "2",
    ])
    .unwrap();

    assert_eq!(cli.options.package_name, "serde");
    assert_eq!(cli.options.version, "1.0.200");
    assert_eq!(cli.options.max_depth, 2);
    assert!(cli.command.is_none());
}

#[test]
fn test_parse_subcommands() {
    let cli = Cli::try_parse_from(["cratemap", "export"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Export)));

    let cli = Cli::try_parse_from(["cratemap", "order"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Order)));

    let cli = Cli::try_parse_from(["cratemap", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Version)));
}

#[test]
fn test_non_integer_depth_is_a_parse_error() {
    let result = Cli::try_parse_from(["cratemap", "--max-depth", "three"]);
    assert!(result.is_err());
}

#[test]
fn test_config_file_flag() {
    let cli = Cli::try_parse_from(["cratemap", "-c", "custom.toml"]).unwrap();
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("custom.toml"))
    );
}

#[test]
fn test_filter_and_output_flags() {
    let cli = Cli::try_parse_from([
        "cratemap",
        "-p",
        "tokio",
        "--package-version",
        "1.50.0",
        "-f",
        "win",
        "-o",
        "deps.png",
        "--order-bounded",
    ])
    .unwrap();

    assert_eq!(cli.options.filter_substring, "win");
    assert_eq!(cli.options.output_file, std::path::PathBuf::from("deps.png"));
    assert!(cli.options.order_bounded);
}

#[test]
fn test_requires_package() {
    assert!(Commands::Run.requires_package());
    assert!(Commands::Export.requires_package());
    assert!(Commands::Order.requires_package());
    assert!(!Commands::Version.requires_package());
}
