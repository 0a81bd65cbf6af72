//! In-memory response cache with TTL and a hard capacity cap.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use kenteken_core::domain::{Plate, VehicleData};
use kenteken_core::ports::VehicleCache;

/// Response cache configuration.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long a merged result stays fresh.
    pub ttl: Duration,
    /// Hard cap on stored entries.
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(24 * 60 * 60),
            capacity: 1000,
        }
    }
}

impl CacheConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ttl: std::env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.ttl),
            capacity: std::env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.capacity),
        }
    }
}

struct Entry {
    value: VehicleData,
    inserted_at: Instant,
}

/// In-memory plate -> merged-result cache using a HashMap behind an async
/// RwLock.
///
/// Eviction is expire-then-oldest-first, not LRU: a cleanup pass on every
/// put first drops entries past TTL, then drops the oldest-inserted
/// entries until at or under capacity. Recency of access does not protect
/// an entry, only recency of insertion does. Reads leave stale entries in
/// place; the next put sweeps them out.
pub struct InMemoryVehicleCache {
    store: RwLock<HashMap<String, Entry>>,
    config: CacheConfig,
}

impl InMemoryVehicleCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Number of stored entries, stale ones included.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    fn cleanup(store: &mut HashMap<String, Entry>, config: &CacheConfig) {
        store.retain(|_, entry| entry.inserted_at.elapsed() < config.ttl);

        if store.len() > config.capacity {
            let mut by_age: Vec<(String, Instant)> = store
                .iter()
                .map(|(key, entry)| (key.clone(), entry.inserted_at))
                .collect();
            by_age.sort_by_key(|(_, inserted_at)| *inserted_at);

            let excess = store.len() - config.capacity;
            for (key, _) in by_age.into_iter().take(excess) {
                store.remove(&key);
                tracing::debug!(key = %key, "evicted oldest cache entry");
            }
        }
    }
}

#[async_trait]
impl VehicleCache for InMemoryVehicleCache {
    async fn get(&self, plate: &Plate) -> Option<VehicleData> {
        let store = self.store.read().await;
        let entry = store.get(plate.as_str())?;

        // Lazy expiry: stale entries are a miss but stay put until the
        // next cleanup pass takes a write lock anyway.
        if entry.inserted_at.elapsed() >= self.config.ttl {
            return None;
        }

        Some(entry.value.clone())
    }

    async fn put(&self, plate: &Plate, data: VehicleData) {
        let mut store = self.store.write().await;
        store.insert(
            plate.as_str().to_string(),
            Entry {
                value: data,
                inserted_at: Instant::now(),
            },
        );
        Self::cleanup(&mut store, &self.config);
    }

    async fn clear(&self) {
        self.store.write().await.clear();
    }
}
