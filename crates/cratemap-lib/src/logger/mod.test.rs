use super::*;

#[test]
fn test_filter_directives_contain_level_and_http_noise_guard() {
    let directives = filter_directives(LogLevel::Debug);
    assert!(directives.contains("cratemap=debug"));
    assert!(directives.contains("reqwest=warn"));
    assert!(directives.ends_with("debug"));
}

#[test]
fn test_filter_directives_error_level() {
    let directives = filter_directives(LogLevel::Error);
    assert!(directives.starts_with("cratemap=error"));
}

#[test]
fn test_init_twice_reports_already_initialized() {
    let config = LoggerConfig {
        level: LogLevel::Error,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
        ansi: false,
    };

    // First call may win or lose the race with nothing else; either way
    // the second call must observe an initialized logger.
    let _ = Logger::init(config.clone());
    assert!(Logger::is_initialized());
    assert!(matches!(
        Logger::init(config),
        Err(LoggerError::AlreadyInitialized)
    ));
    assert!(Logger::global().is_some());
}
