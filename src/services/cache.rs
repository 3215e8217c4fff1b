//! Process-local response cache with a fixed time-to-live.
//!
//! Entries are keyed by the full call parameters and only ever leave the map
//! by expiring. Concurrent writers for the same key race; the last one wins.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

struct StoredEntry {
    value: Value,
    expires_at: Instant,
}

#[derive(Clone)]
pub struct ResponseCache {
    entries: Arc<RwLock<HashMap<String, StoredEntry>>>,
    ttl: Duration,
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Returns the cached value if present and still fresh.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let expired = {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if Instant::now() < entry.expires_at => {
                    log::debug!("Cache hit for {}", key);
                    return serde_json::from_value(entry.value.clone()).ok();
                }
                Some(_) => true,
                None => false,
            }
        };

        if expired {
            log::debug!("Cache entry for {} expired", key);
            self.remove(key).await;
        }
        None
    }

    pub async fn put<T: Serialize>(&self, key: &str, value: &T) {
        let value = match serde_json::to_value(value) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Skipping cache write for {}: {}", key, e);
                return;
            }
        };
        let entry = StoredEntry {
            value,
            expires_at: Instant::now() + self.ttl,
        };
        self.entries.write().await.insert(key.to_string(), entry);
    }

    pub async fn remove(&self, key: &str) {
        self.entries.write().await.remove(key);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Joins cache key parts with `_`, e.g. `flight_Mumbai_Delhi_2024-02-15`.
pub fn cache_key(prefix: &str, parts: &[&str]) -> String {
    let mut key = prefix.to_string();
    for part in parts {
        key.push('_');
        key.push_str(part);
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn test_put_then_get() {
        let cache = ResponseCache::default();
        cache.put("bus_Mumbai_Delhi", &vec![1, 2, 3]).await;

        let hit: Option<Vec<i32>> = cache.get("bus_Mumbai_Delhi").await;
        assert_eq!(hit, Some(vec![1, 2, 3]));

        let miss: Option<Vec<i32>> = cache.get("bus_Delhi_Mumbai").await;
        assert!(miss.is_none());
    }

    #[actix_rt::test]
    async fn test_expired_entries_are_dropped() {
        let cache = ResponseCache::new(Duration::ZERO);
        cache.put("key", &"value").await;
        assert_eq!(cache.len().await, 1);

        let value: Option<String> = cache.get("key").await;
        assert!(value.is_none());
        assert!(cache.is_empty().await);
    }

    #[test]
    fn test_cache_key() {
        assert_eq!(
            cache_key("hotel", &["Goa", "2024-02-15", "2024-02-20", "2", "1"]),
            "hotel_Goa_2024-02-15_2024-02-20_2_1"
        );
    }

    #[test]
    fn test_last_writer_wins() {
        tokio_test::block_on(async {
            let cache = ResponseCache::default();
            cache.put("k", &1).await;
            cache.put("k", &2).await;
            assert_eq!(cache.get::<i32>("k").await, Some(2));
        });
    }
}
