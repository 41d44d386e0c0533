use super::*;

fn env(no_color: Option<&str>, force_color: Option<&str>, clicolor: Option<&str>, ci: Option<&str>) -> EnvironmentConfig {
    EnvironmentConfig {
        no_color: no_color.map(String::from),
        force_color: force_color.map(String::from),
        clicolor: clicolor.map(String::from),
        ci: ci.map(String::from),
    }
}

#[test]
fn test_no_vars_leaves_mode_untouched() {
    let config = env(None, None, None, None);
    assert_eq!(config.apply_color_mode(ColorMode::Auto), ColorMode::Auto);
    assert_eq!(config.apply_color_mode(ColorMode::Always), ColorMode::Always);
}

#[test]
fn test_ci_disables_color() {
    let config = env(None, Some("1"), None, Some("true"));
    assert_eq!(config.apply_color_mode(ColorMode::Always), ColorMode::Never);
}

#[test]
fn test_no_color_disables() {
    let config = env(Some("1"), None, None, None);
    assert_eq!(config.apply_color_mode(ColorMode::Auto), ColorMode::Never);
}

#[test]
fn test_empty_no_color_is_ignored() {
    let config = env(Some(""), None, None, None);
    assert_eq!(config.apply_color_mode(ColorMode::Auto), ColorMode::Auto);
}

#[test]
fn test_force_color_wins_over_no_color() {
    let config = env(Some("1"), Some("1"), None, None);
    assert_eq!(config.apply_color_mode(ColorMode::Auto), ColorMode::Always);
}

#[test]
fn test_clicolor_zero_disables() {
    let config = env(None, None, Some("0"), None);
    assert_eq!(config.apply_color_mode(ColorMode::Auto), ColorMode::Never);
}
