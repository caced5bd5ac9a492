use std::fmt;
use std::time::Duration;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tokio::sync::broadcast;
use tokio::time::Instant;

use super::errors::ClientResult;

/// How many cache notifications a slow watcher may fall behind by
const EVENT_CAPACITY: usize = 64;

/// Ordered segments identifying a cached query, e.g. `["tasks", "pending"]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Returns true when `prefix` matches the leading segments of this key
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl<const N: usize> From<[&str; N]> for QueryKey {
    fn from(segments: [&str; N]) -> Self {
        Self::new(segments)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// Something changed in the cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEvent {
    /// New data was written under this exact key
    Updated(QueryKey),
    /// Every key starting with this prefix is now stale
    Invalidated(QueryKey),
}

#[derive(Debug, Clone)]
struct CacheEntry {
    data: Value,
    updated_at: Instant,
    invalidated: bool,
}

impl CacheEntry {
    fn fresh(data: Value) -> Self {
        Self {
            data,
            updated_at: Instant::now(),
            invalidated: false,
        }
    }
}

/// Last known payload per query key
///
/// Payloads are kept as JSON so one cache serves every resource type.
/// Writers notify subscribers through [`QueryCache::subscribe`].
#[derive(Debug)]
pub struct QueryCache {
    entries: DashMap<QueryKey, CacheEntry>,
    events: broadcast::Sender<CacheEvent>,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryCache {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            entries: DashMap::new(),
            events,
        }
    }

    /// Receives every subsequent [`CacheEvent`]
    pub fn subscribe(&self) -> broadcast::Receiver<CacheEvent> {
        self.events.subscribe()
    }

    /// Cached data under `key`, decoded as `T`
    ///
    /// Data that no longer decodes as `T` is treated as absent.
    pub fn get<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let entry = self.entries.get(key)?;
        match serde_json::from_value(entry.data.clone()) {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::warn!(%key, error = %e, "cached data has an unexpected shape");
                None
            }
        }
    }

    /// Replaces the data under `key`
    pub fn set<T: Serialize>(&self, key: &QueryKey, data: &T) -> ClientResult<()> {
        let value = serde_json::to_value(data)?;
        self.entries.insert(key.clone(), CacheEntry::fresh(value));
        self.notify(CacheEvent::Updated(key.clone()));
        Ok(())
    }

    /// Computes new data from the current data (if any) and stores it
    ///
    /// The read and the write happen under the same shard lock.
    pub fn update<T, F>(&self, key: &QueryKey, change: F) -> ClientResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(Option<T>) -> T,
    {
        let next = match self.entries.entry(key.clone()) {
            Entry::Occupied(mut occupied) => {
                let current = serde_json::from_value(occupied.get().data.clone()).ok();
                let next = change(current);
                occupied.insert(CacheEntry::fresh(serde_json::to_value(&next)?));
                next
            }
            Entry::Vacant(vacant) => {
                let next = change(None);
                vacant.insert(CacheEntry::fresh(serde_json::to_value(&next)?));
                next
            }
        };

        self.notify(CacheEvent::Updated(key.clone()));
        Ok(next)
    }

    /// Returns true when `key` holds data younger than `stale_time` that
    /// has not been invalidated
    pub fn is_fresh(&self, key: &QueryKey, stale_time: Duration) -> bool {
        self.entries
            .get(key)
            .map(|entry| !entry.invalidated && entry.updated_at.elapsed() < stale_time)
            .unwrap_or(false)
    }

    /// Marks every key starting with `prefix` stale; returns how many
    pub fn invalidate(&self, prefix: &QueryKey) -> usize {
        let mut count = 0;
        for mut entry in self.entries.iter_mut() {
            if entry.key().starts_with(prefix) {
                entry.value_mut().invalidated = true;
                count += 1;
            }
        }

        tracing::debug!(%prefix, count, "queries invalidated");
        self.notify(CacheEvent::Invalidated(prefix.clone()));
        count
    }

    /// Edits the data under `key` in place when it is cached
    ///
    /// `change` returns whether it changed anything; only then is the entry
    /// rewritten and subscribers notified. Returns false when nothing was
    /// cached, the payload has another shape, or `change` declined.
    pub fn modify<T, F>(&self, key: &QueryKey, change: F) -> ClientResult<bool>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut T) -> bool,
    {
        {
            let Some(mut entry) = self.entries.get_mut(key) else {
                return Ok(false);
            };
            let Ok(mut data) = serde_json::from_value::<T>(entry.data.clone()) else {
                return Ok(false);
            };
            if !change(&mut data) {
                return Ok(false);
            }
            *entry = CacheEntry::fresh(serde_json::to_value(&data)?);
        }

        self.notify(CacheEvent::Updated(key.clone()));
        Ok(true)
    }

    fn notify(&self, event: CacheEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }
}
