//! In-memory visit store.
//!
//! Visits are keyed by the opaque id carried in the visitor's cookie. Nothing
//! is persisted; a restart forgets every visit, which only means visitors
//! land back on a blank form. The store holds at most a fixed number of
//! visits: creating one past the cap evicts the least recently seen. Idle
//! visits are evicted by [`VisitStore::sweep`], which [`VisitStore::run_sweeper`]
//! calls on an interval until shutdown.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock, watch};
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::visit::Visit;

/// Default cap on live visits.
pub const DEFAULT_MAX_VISITS: usize = 10_000;

struct Entry {
    visit: Arc<Mutex<Visit>>,
    last_seen: Instant,
}

/// Shared map of live visits.
#[derive(Clone)]
pub struct VisitStore {
    visits: Arc<RwLock<HashMap<Uuid, Entry>>>,
    max_visits: usize,
}

impl Default for VisitStore {
    fn default() -> Self {
        Self::bounded(DEFAULT_MAX_VISITS)
    }
}

impl VisitStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding at most `max_visits` visits (at least one).
    #[must_use]
    pub fn bounded(max_visits: usize) -> Self {
        Self {
            visits: Arc::new(RwLock::new(HashMap::new())),
            max_visits: max_visits.max(1),
        }
    }

    pub fn max_visits(&self) -> usize {
        self.max_visits
    }

    /// Look up the visit for `id`, creating it if the id is absent or
    /// unknown. Returns the visit and whether it was newly created.
    ///
    /// Touching a visit resets its idle clock. Creating a visit when the
    /// store is full evicts the least recently seen one.
    pub async fn checkout(&self, id: Option<Uuid>) -> (Arc<Mutex<Visit>>, bool) {
        let now = Instant::now();
        let mut visits = self.visits.write().await;

        if let Some(entry) = id.and_then(|id| visits.get_mut(&id)) {
            entry.last_seen = now;
            return (Arc::clone(&entry.visit), false);
        }

        while visits.len() >= self.max_visits {
            let Some(oldest) = visits
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| *id)
            else {
                break;
            };
            visits.remove(&oldest);
            debug!(visit = %oldest, "store full, evicted least recently seen visit");
        }

        let id = Uuid::new_v4();
        let visit = Arc::new(Mutex::new(Visit::new(id)));
        visits.insert(
            id,
            Entry {
                visit: Arc::clone(&visit),
                last_seen: now,
            },
        );
        (visit, true)
    }

    /// Remove visits idle for longer than `max_idle`. Returns how many were
    /// removed.
    pub async fn sweep(&self, max_idle: Duration) -> usize {
        let now = Instant::now();
        let mut visits = self.visits.write().await;
        let before = visits.len();
        visits.retain(|_, entry| now.saturating_duration_since(entry.last_seen) <= max_idle);
        before.saturating_sub(visits.len())
    }

    /// Sweep idle visits every `every` until `shutdown` flips or its sender
    /// is dropped.
    pub async fn run_sweeper(
        self,
        max_idle: Duration,
        every: Duration,
        mut shutdown: watch::Receiver<bool>,
    ) {
        let mut interval = tokio::time::interval(every.max(Duration::from_millis(1)));
        info!(
            idle_secs = max_idle.as_secs(),
            interval_secs = every.as_secs(),
            "visit sweeper started"
        );

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let removed = self.sweep(max_idle).await;
                    if removed > 0 {
                        let remaining = self.len().await;
                        debug!(removed, remaining, "evicted idle visits");
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("visit sweeper shutting down");
                        return;
                    }
                }
            }
        }
    }

    pub async fn len(&self) -> usize {
        self.visits.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.visits.read().await.is_empty()
    }
}

impl std::fmt::Debug for VisitStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisitStore")
            .field("max_visits", &self.max_visits)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::route::Route;

    #[tokio::test]
    async fn checkout_without_id_creates_visit() {
        let store = VisitStore::new();
        let (_, created) = store.checkout(None).await;
        assert!(created);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn checkout_with_known_id_returns_same_visit() {
        let store = VisitStore::new();
        let (visit, _) = store.checkout(None).await;
        let id = visit.lock().await.id();
        visit.lock().await.navigate(Route::Compliance);

        let (again, created) = store.checkout(Some(id)).await;
        assert!(!created);
        assert_eq!(again.lock().await.route(), Route::Compliance);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn unknown_id_gets_a_fresh_visit() {
        let store = VisitStore::new();
        let stale = Uuid::new_v4();
        let (visit, created) = store.checkout(Some(stale)).await;
        assert!(created);
        assert_ne!(visit.lock().await.id(), stale);
    }

    #[tokio::test(start_paused = true)]
    async fn sweep_evicts_only_idle_visits() {
        let store = VisitStore::new();
        let (old, _) = store.checkout(None).await;
        let old_id = old.lock().await.id();

        tokio::time::advance(Duration::from_secs(120)).await;
        let (fresh, _) = store.checkout(None).await;
        let fresh_id = fresh.lock().await.id();

        let removed = store.sweep(Duration::from_secs(60)).await;
        assert_eq!(removed, 1);
        assert_eq!(store.len().await, 1);

        let (_, created) = store.checkout(Some(fresh_id)).await;
        assert!(!created);
        let (_, created) = store.checkout(Some(old_id)).await;
        assert!(created);
    }

    #[tokio::test(start_paused = true)]
    async fn checkout_refreshes_idle_clock() {
        let store = VisitStore::new();
        let (visit, _) = store.checkout(None).await;
        let id = visit.lock().await.id();

        tokio::time::advance(Duration::from_secs(50)).await;
        store.checkout(Some(id)).await;
        tokio::time::advance(Duration::from_secs(50)).await;

        assert_eq!(store.sweep(Duration::from_secs(60)).await, 0);
        assert!(!store.is_empty().await);
    }

    #[tokio::test(start_paused = true)]
    async fn full_store_evicts_least_recently_seen() {
        let store = VisitStore::bounded(2);
        let (a, _) = store.checkout(None).await;
        let a = a.lock().await.id();
        tokio::time::advance(Duration::from_secs(1)).await;
        let (b, _) = store.checkout(None).await;
        let b = b.lock().await.id();
        tokio::time::advance(Duration::from_secs(1)).await;

        // Touch `a` so `b` becomes the oldest.
        store.checkout(Some(a)).await;
        tokio::time::advance(Duration::from_secs(1)).await;

        let (_, created) = store.checkout(None).await;
        assert!(created);
        assert_eq!(store.len().await, 2);

        assert!(!store.checkout(Some(a)).await.1);
        assert_eq!(store.len().await, 2);
        let (_, recreated) = store.checkout(Some(b)).await;
        assert!(recreated);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn cookieless_flood_stays_within_cap() {
        let store = VisitStore::bounded(50);
        for _ in 0..500 {
            store.checkout(None).await;
        }
        assert_eq!(store.len().await, 50);
    }

    #[tokio::test(start_paused = true)]
    async fn sweeper_evicts_idle_visits_and_stops_on_shutdown() {
        let store = VisitStore::new();
        let (idle, _) = store.checkout(None).await;
        let idle_id = idle.lock().await.id();

        let (tx, rx) = watch::channel(false);
        let worker = tokio::spawn(store.clone().run_sweeper(
            Duration::from_secs(60),
            Duration::from_secs(10),
            rx,
        ));

        tokio::time::sleep(Duration::from_secs(50)).await;
        let (fresh, _) = store.checkout(None).await;
        let fresh_id = fresh.lock().await.id();
        tokio::time::sleep(Duration::from_secs(25)).await;

        assert_eq!(store.len().await, 1);
        assert!(!store.checkout(Some(fresh_id)).await.1);
        assert!(store.checkout(Some(idle_id)).await.1);

        tx.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(1), worker)
            .await
            .expect("sweeper should stop on shutdown")
            .unwrap();
    }
}
