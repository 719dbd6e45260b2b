use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;

/// Audio cache value: assembled audio plus the content type it was served
/// with, so a hit can be returned without re-resolving the backend.
#[derive(Clone)]
pub struct CachedAudio {
    pub audio: Vec<u8>,
    pub content_type: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CacheStats {
    pub entries: u64,
    pub sample_keys: Vec<String>,
}

/// Process-wide insert-only cache. No TTL and no eviction beyond an explicit
/// clear; nothing survives a restart, so growth is bounded by process
/// lifetime. Concurrent identical-key writes are last-write-wins, which is
/// fine because a key always maps to the same computed value.
pub struct CacheStore<V: Clone + Send + Sync + 'static> {
    name: &'static str,
    inner: Cache<String, V>,
}

impl<V: Clone + Send + Sync + 'static> CacheStore<V> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: Cache::builder().build(),
        }
    }

    pub async fn get(&self, key: &str) -> Option<V> {
        self.inner.get(key).await
    }

    pub async fn insert(&self, key: String, value: V) {
        self.inner.insert(key, value).await;
    }

    pub async fn clear(&self) {
        self.inner.invalidate_all();
        self.inner.run_pending_tasks().await;
        tracing::info!(cache = self.name, "cache cleared");
    }

    pub async fn entry_count(&self) -> u64 {
        self.inner.run_pending_tasks().await;
        self.inner.entry_count()
    }

    /// Size plus up to 10 sample keys, for /cache/stats.
    pub async fn stats(&self) -> CacheStats {
        self.inner.run_pending_tasks().await;
        let sample_keys = self
            .inner
            .iter()
            .take(10)
            .map(|(key, _)| (*key).clone())
            .collect();
        CacheStats {
            entries: self.inner.entry_count(),
            sample_keys,
        }
    }
}

/// The two process-wide caches, independently addressed; clearing one never
/// touches the other except through the explicit clear-both endpoint.
pub struct Caches {
    pub translation: Arc<CacheStore<String>>,
    pub audio: Arc<CacheStore<CachedAudio>>,
}

impl Caches {
    pub fn new() -> Self {
        Self {
            translation: Arc::new(CacheStore::new("translation")),
            audio: Arc::new(CacheStore::new("audio")),
        }
    }
}

impl Default for Caches {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let cache: CacheStore<String> = CacheStore::new("test");
        cache.insert("k".to_string(), "v".to_string()).await;
        assert_eq!(cache.get("k").await, Some("v".to_string()));
        assert_eq!(cache.get("missing").await, None);
    }

    #[tokio::test]
    async fn clear_empties_the_store() {
        let cache: CacheStore<String> = CacheStore::new("test");
        for i in 0..5 {
            cache.insert(format!("k{i}"), "v".to_string()).await;
        }
        assert_eq!(cache.entry_count().await, 5);
        cache.clear().await;
        assert_eq!(cache.entry_count().await, 0);
        assert_eq!(cache.get("k0").await, None);
    }

    #[tokio::test]
    async fn stats_samples_at_most_ten_keys() {
        let cache: CacheStore<String> = CacheStore::new("test");
        for i in 0..25 {
            cache.insert(format!("k{i}"), "v".to_string()).await;
        }
        let stats = cache.stats().await;
        assert_eq!(stats.entries, 25);
        assert_eq!(stats.sample_keys.len(), 10);
    }

    #[tokio::test]
    async fn caches_are_independent() {
        let caches = Caches::new();
        caches.translation.insert("k".to_string(), "v".to_string()).await;
        assert_eq!(caches.translation.entry_count().await, 1);
        assert_eq!(caches.audio.entry_count().await, 0);
    }
}
