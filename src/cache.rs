use std::{
    collections::HashMap,
    future::Future,
    time::{Duration, Instant},
};

use tokio::sync::Mutex;

use crate::{
    errors::AppError,
    models::{Platform, leaderboard::LeaderboardEntry},
};

struct CacheSlot {
    entries: Vec<LeaderboardEntry>,
    expires_at: Instant,
}

/// Time-bounded leaderboard cache, one slot per platform. Read-through only:
/// writers never invalidate it, a slot simply ages out after the TTL. Built
/// once at startup and carried in `AppState`; a restart is a full miss.
pub struct LeaderboardCache {
    ttl: Duration,
    slots: Mutex<HashMap<Platform, CacheSlot>>,
}

impl LeaderboardCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Serve a fresh slot verbatim, or run `refresh` and replace the slot.
    /// Concurrent misses may each run their own refresh; the query is cheap
    /// and the window short, so no single-flight dedup is attempted.
    pub async fn get_or_refresh<F, Fut>(
        &self,
        platform: Platform,
        refresh: F,
    ) -> Result<Vec<LeaderboardEntry>, AppError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<LeaderboardEntry>, AppError>>,
    {
        {
            let slots = self.slots.lock().await;
            if let Some(slot) = slots.get(&platform) {
                if slot.expires_at > Instant::now() {
                    return Ok(slot.entries.clone());
                }
            }
        }

        let entries = refresh().await?;

        let mut slots = self.slots.lock().await;
        slots.insert(
            platform,
            CacheSlot {
                entries: entries.clone(),
                expires_at: Instant::now() + self.ttl,
            },
        );

        Ok(entries)
    }
}
