use super::*;

#[test]
fn test_package_key_round_trip() {
    let pkg = PackageRef::new("serde", "1.0.200");
    assert_eq!(pkg.key(), "serde@1.0.200");
    assert_eq!(PackageRef::from_key("serde@1.0.200"), pkg);
}

#[test]
fn test_package_key_without_separator() {
    let pkg = PackageRef::from_key("lonely");
    assert_eq!(pkg.name, "lonely");
    assert_eq!(pkg.version, "");
}

#[test]
fn test_package_display_matches_key() {
    let pkg = PackageRef::new("tokio", "1.50.0");
    assert_eq!(pkg.to_string(), pkg.key());
}

#[test]
fn test_dep_kind_deserializes_known_values() {
    let kind: DepKind = serde_json::from_str("\"dev\"").unwrap();
    assert_eq!(kind, DepKind::Dev);
    let kind: DepKind = serde_json::from_str("\"build\"").unwrap();
    assert_eq!(kind, DepKind::Build);
}

#[test]
fn test_dep_kind_unknown_value_maps_to_other() {
    let kind: DepKind = serde_json::from_str("\"weird-new-kind\"").unwrap();
    assert_eq!(kind, DepKind::Other);
}

#[test]
fn test_dep_kind_default_is_normal() {
    assert_eq!(DepKind::default(), DepKind::Normal);
}

#[test]
fn test_log_level_from_verbosity() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(9), LogLevel::Trace);
}

#[test]
fn test_log_format_from_str_aliases() {
    assert_eq!("plain".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert!("xml".parse::<LogFormat>().is_err());
}

#[test]
fn test_color_mode_from_str() {
    assert_eq!("auto".parse::<ColorMode>().unwrap(), ColorMode::Auto);
    assert_eq!("never".parse::<ColorMode>().unwrap(), ColorMode::Never);
}
