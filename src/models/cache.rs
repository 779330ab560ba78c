//! Expiring response cache.
//!
//! Entries live for a fixed interval. A background reaper wakes once per
//! interval and drops everything at or past its expiry; lookups never check
//! expiry themselves, so an entry may be served for up to one extra interval.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, trace, warn};

/// Smallest interval the reaper will tick at.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Clone)]
pub struct CacheEntry {
    pub data: Vec<u8>,
    pub created_at: Instant,
}

type Entries = Arc<Mutex<HashMap<String, CacheEntry>>>;

/// Key/value store whose entries are reaped `interval` after insertion.
///
/// One mutex guards the whole map, reaper sweeps included. That serializes
/// every access, which is fine for a shell-sized working set.
pub struct Cache {
    entries: Entries,
    interval: Duration,
    shutdown: Arc<Notify>,
    reaper: Mutex<Option<JoinHandle<()>>>,
}

impl Cache {
    /// Creates an empty cache and starts its reaper on the current tokio runtime.
    ///
    /// Panics if called outside a runtime, like `tokio::spawn`.
    pub fn new(interval: Duration) -> Self {
        let interval = if interval < MIN_INTERVAL {
            warn!("Cache interval {:?} too small, using {:?}", interval, MIN_INTERVAL);
            MIN_INTERVAL
        } else {
            interval
        };

        let entries: Entries = Arc::new(Mutex::new(HashMap::new()));
        let shutdown = Arc::new(Notify::new());

        let handle = tokio::spawn(Self::reap_loop(
            Arc::clone(&entries),
            interval,
            Arc::clone(&shutdown),
        ));

        Self {
            entries,
            interval,
            shutdown,
            reaper: Mutex::new(Some(handle)),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Inserts or replaces `key`, stamping it with the current time.
    pub fn add(&self, key: impl Into<String>, data: impl Into<Vec<u8>>) {
        let entry = CacheEntry {
            data: data.into(),
            created_at: Instant::now(),
        };
        lock(&self.entries).insert(key.into(), entry);
    }

    /// Returns the stored bytes for `key`, whether or not they are past due.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        lock(&self.entries).get(key).map(|entry| entry.data.clone())
    }

    /// Stops the reaper and waits for it to exit. Further calls are no-ops.
    ///
    /// Entries already cached stay readable but are no longer reaped.
    pub async fn close(&self) {
        let handle = lock(&self.reaper).take();
        if let Some(handle) = handle {
            // notify_one stores a permit, so a reaper mid-sweep still sees it.
            self.shutdown.notify_one();
            if let Err(e) = handle.await {
                warn!("Cache reaper exited abnormally: {}", e);
            }
        }
    }

    async fn reap_loop(entries: Entries, interval: Duration, shutdown: Arc<Notify>) {
        debug!("Cache reaper started with interval {:?}", interval);
        let mut ticker = time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown.notified() => break,
                now = ticker.tick() => {
                    let removed = reap(&mut lock(&entries), interval, now);
                    if removed > 0 {
                        trace!("Cache reaper removed {} expired entries", removed);
                    }
                }
            }
        }
        debug!("Cache reaper stopped");
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        let handle = self
            .reaper
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            handle.abort();
        }
    }
}

/// Removes every entry whose `created_at + interval` is at or before `now`.
fn reap(entries: &mut HashMap<String, CacheEntry>, interval: Duration, now: Instant) -> usize {
    let before = entries.len();
    entries.retain(|_, entry| now.saturating_duration_since(entry.created_at) < interval);
    before - entries.len()
}

// Every mutation replaces a whole entry, so a poisoned map is still consistent.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
