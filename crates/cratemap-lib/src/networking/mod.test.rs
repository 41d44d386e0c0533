use super::*;

#[test]
fn test_default_config_carries_user_agent() {
    let config = NetworkingConfig::default();
    assert!(config.user_agent.starts_with("cratemap/"));
    assert_eq!(config.timeout_seconds, 30);
}

#[tokio::test]
async fn test_networking_manager_creation() {
    let manager = NetworkingManager::new(NetworkingConfig::default());
    assert!(manager.is_ok(), "should build a client from defaults");
}

#[tokio::test]
async fn test_get_bytes_serves_repeat_from_cache() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/once")
        .with_status(200)
        .with_body("payload")
        .expect(1)
        .create_async()
        .await;

    let manager = NetworkingManager::new(NetworkingConfig::default()).unwrap();
    let url = format!("{}/once", server.url());

    let first = manager.get_bytes(&url).await.unwrap();
    let second = manager.get_bytes(&url).await.unwrap();

    assert_eq!(first, b"payload".to_vec());
    assert_eq!(second, first);
    assert_eq!(manager.cached_responses().await, 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_bytes_maps_error_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/missing")
        .with_status(404)
        .create_async()
        .await;

    let manager = NetworkingManager::new(NetworkingConfig::default()).unwrap();
    let url = format!("{}/missing", server.url());

    let err = manager.get_bytes(&url).await.unwrap_err();
    assert!(matches!(err, NetworkingError::HttpStatus { status: 404, .. }));
    assert_eq!(manager.cached_responses().await, 0);
}

#[tokio::test]
async fn test_get_bytes_retries_429_until_exhausted() {
    let mut server = mockito::Server::new_async().await;
    let limited = server
        .mock("GET", "/flaky")
        .with_status(429)
        .expect(3) // initial attempt plus two retries
        .create_async()
        .await;

    let config = NetworkingConfig {
        backoff: BackoffConfig {
            initial: std::time::Duration::from_millis(10),
            multiplier: 2,
            max_retries: 2,
        },
        ..NetworkingConfig::default()
    };
    let manager = NetworkingManager::new(config).unwrap();
    let url = format!("{}/flaky", server.url());

    let err = manager.get_bytes(&url).await.unwrap_err();
    assert!(matches!(err, NetworkingError::RateLimited { retries: 2, .. }));
    limited.assert_async().await;
}
