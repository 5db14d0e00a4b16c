//! Per-championship write serialization.
//!
//! Fixture replacement and standings recomputation are read-modify-replace sequences over a
//! whole championship. Two of them interleaving on the same championship could persist a table
//! computed from stale match data, so every writer acquires the championship's guard first.
//! Different championships never contend.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Registry of one async mutex per championship.
///
/// Cheap to clone; clones share the same registry. Entries nobody holds or waits on are
/// pruned on the next acquisition, so the registry only tracks championships being written.
#[derive(Clone, Default)]
pub struct ChampionshipLocks {
    locks: Arc<Mutex<HashMap<i32, Arc<AsyncMutex<()>>>>>,
}

impl ChampionshipLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until no other writer holds the championship and returns its guard.
    ///
    /// The guard releases the championship when dropped.
    pub async fn acquire(&self, championship_id: i32) -> OwnedMutexGuard<()> {
        let lock = {
            // The registry mutex is only held for the map lookup, never across an await.
            let mut locks = match self.locks.lock() {
                Ok(locks) => locks,
                Err(poisoned) => poisoned.into_inner(),
            };

            // Guards and waiters own a clone, so a count of 1 means the entry is idle
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);

            locks
                .entry(championship_id)
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };

        lock.lock_owned().await
    }
}
