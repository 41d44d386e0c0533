use super::*;

#[tokio::test]
async fn test_empty_cache() {
    let cache = FetchCache::new();
    assert!(cache.is_empty().await);
    assert_eq!(cache.len().await, 0);
    assert!(cache.get("https://example.invalid/a").await.is_none());
}

#[tokio::test]
async fn test_put_then_get() {
    let cache = FetchCache::new();
    cache.put("url-a".to_string(), b"body-a".to_vec()).await;

    assert_eq!(cache.get("url-a").await, Some(b"body-a".to_vec()));
    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn test_put_overwrites() {
    let cache = FetchCache::new();
    cache.put("url".to_string(), b"old".to_vec()).await;
    cache.put("url".to_string(), b"new".to_vec()).await;

    assert_eq!(cache.get("url").await, Some(b"new".to_vec()));
    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn test_remove_and_clear() {
    let cache = FetchCache::new();
    cache.put("a".to_string(), vec![1]).await;
    cache.put("b".to_string(), vec![2]).await;

    cache.remove("a").await;
    assert!(cache.get("a").await.is_none());
    assert_eq!(cache.len().await, 1);

    cache.clear().await;
    assert!(cache.is_empty().await);
}
