use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory response cache keyed by URL
///
/// A published version's dependency list never changes, so entries live
/// for the whole process. Both traversals hit the same cache, which is
/// what absorbs their duplicated fetch work.
pub struct FetchCache {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl FetchCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Get a cached response body
    pub async fn get(&self, url: &str) -> Option<Vec<u8>> {
        let entries = self.entries.read().await;
        entries.get(url).cloned()
    }

    /// Store a response body
    pub async fn put(&self, url: String, body: Vec<u8>) {
        let mut entries = self.entries.write().await;
        entries.insert(url, body);
    }

    /// Remove a cached entry
    pub async fn remove(&self, url: &str) {
        let mut entries = self.entries.write().await;
        entries.remove(url);
    }

    /// Clear all cached entries
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
    }

    /// Number of cached entries
    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.len()
    }

    /// Check if the cache is empty
    pub async fn is_empty(&self) -> bool {
        let entries = self.entries.read().await;
        entries.is_empty()
    }
}

impl Default for FetchCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    include!("cache.test.rs");
}
