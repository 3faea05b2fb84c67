//! Debounced search cycles.
//!
//! Each text change spawns one abortable task that sleeps through the debounce
//! period, reports that filtering started, sleeps through the simulated
//! latency, filters, and reports the result. At most one task is live: a new
//! change aborts the previous one before spawning.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use futures_util::future::{AbortHandle, Abortable};
use tokio::sync::mpsc;

use sieve_types::{Generation, ItemList, ResultSet, SearchTiming};

pub(crate) const SEARCH_EVENT_CHANNEL_CAPACITY: usize = 64;

/// Progress reports sent from a cycle task back to the [`crate::App`].
#[derive(Debug)]
pub(crate) enum SearchEvent {
    /// The debounce period elapsed uncancelled.
    FilterStarted(Generation),
    /// Filtering finished.
    Completed {
        generation: Generation,
        results: ResultSet,
    },
}

/// Counters observable after the owning [`crate::App`] is gone.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    filter_passes: Arc<AtomicU64>,
}

impl SearchStats {
    /// Number of filter scans actually executed by cycle tasks.
    #[must_use]
    pub fn filter_passes(&self) -> u64 {
        self.filter_passes.load(Ordering::Acquire)
    }

    fn record_pass(&self) {
        self.filter_passes.fetch_add(1, Ordering::AcqRel);
    }
}

/// Handle to the single live cycle task.
#[derive(Debug)]
pub(crate) struct ActiveCycle {
    generation: Generation,
    abort_handle: AbortHandle,
}

impl ActiveCycle {
    pub(crate) fn spawn(
        generation: Generation,
        term: String,
        items: ItemList,
        timing: SearchTiming,
        tx: mpsc::Sender<SearchEvent>,
        stats: SearchStats,
    ) -> Self {
        let (abort_handle, abort_registration) = AbortHandle::new_pair();

        let task = async move {
            tokio::time::sleep(timing.debounce).await;
            if tx.send(SearchEvent::FilterStarted(generation)).await.is_err() {
                return;
            }

            tokio::time::sleep(timing.latency).await;
            let results = ResultSet::compute(items, &term);
            stats.record_pass();
            tracing::debug!(%generation, term = %term, matches = results.len(), "Search cycle filtered");

            let _ = tx.send(SearchEvent::Completed { generation, results }).await;
        };

        tokio::spawn(async move {
            let _ = Abortable::new(task, abort_registration).await;
        });

        Self {
            generation,
            abort_handle,
        }
    }

    pub(crate) fn generation(&self) -> Generation {
        self.generation
    }

    pub(crate) fn abort(&self) {
        self.abort_handle.abort();
    }
}
