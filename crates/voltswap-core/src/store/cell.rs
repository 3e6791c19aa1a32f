// ── Reactive snapshot cells ──
//
// Whole-snapshot replacement storage with push-based change
// notification via `watch` channels. Every write replaces the snapshot
// atomically -- readers never observe a torn mix of old and new fields,
// and `watch`'s internal lock keeps the swap-and-notify sequence from
// interleaving with another writer.

use std::sync::Arc;

use tokio::sync::watch;

use crate::error::SyncError;

/// Reactive cell holding the latest known collection of one entity.
///
/// Beside the snapshot sits a diagnostic: `last_error` is set when the
/// snapshot was forced to its neutral (empty) value by a failed fetch
/// and cleared by the next successful replace. Callers that need to
/// distinguish "genuinely empty" from "failed" read it; callers that
/// only render the snapshot never have to.
pub(crate) struct ListStore<T> {
    snapshot: watch::Sender<Arc<Vec<Arc<T>>>>,
    last_error: watch::Sender<Option<SyncError>>,
}

impl<T: Send + Sync + 'static> ListStore<T> {
    pub(crate) fn new() -> Self {
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));
        let (last_error, _) = watch::channel(None);
        Self {
            snapshot,
            last_error,
        }
    }

    /// Replace the snapshot with fresh data and clear the diagnostic.
    pub(crate) fn replace(&self, items: Vec<T>) -> Arc<Vec<Arc<T>>> {
        let snap: Arc<Vec<Arc<T>>> = Arc::new(items.into_iter().map(Arc::new).collect());
        // `send_replace` updates unconditionally, even with zero receivers.
        self.snapshot.send_replace(Arc::clone(&snap));
        self.last_error.send_replace(None);
        snap
    }

    /// Force the neutral (empty) snapshot and record why.
    pub(crate) fn reset(&self, err: SyncError) -> Arc<Vec<Arc<T>>> {
        let snap: Arc<Vec<Arc<T>>> = Arc::new(Vec::new());
        self.snapshot.send_replace(Arc::clone(&snap));
        self.last_error.send_replace(Some(err));
        snap
    }

    /// Wait-free read of the current snapshot (cheap `Arc` clone).
    pub(crate) fn snapshot(&self) -> Arc<Vec<Arc<T>>> {
        self.snapshot.borrow().clone()
    }

    /// Subscribe to snapshot replacements.
    pub(crate) fn subscribe(&self) -> watch::Receiver<Arc<Vec<Arc<T>>>> {
        self.snapshot.subscribe()
    }

    /// The diagnostic behind the current snapshot, if it is a failure
    /// fallback.
    pub(crate) fn last_error(&self) -> Option<SyncError> {
        self.last_error.borrow().clone()
    }
}

/// Reactive cell holding a single optional selection (e.g. the
/// currently viewed station, the signed-in profile). Neutral value is
/// `None`.
pub(crate) struct SelectionStore<T> {
    snapshot: watch::Sender<Option<Arc<T>>>,
    last_error: watch::Sender<Option<SyncError>>,
}

impl<T: Send + Sync + 'static> SelectionStore<T> {
    pub(crate) fn new() -> Self {
        let (snapshot, _) = watch::channel(None);
        let (last_error, _) = watch::channel(None);
        Self {
            snapshot,
            last_error,
        }
    }

    /// Replace the selection and clear the diagnostic.
    pub(crate) fn replace(&self, value: T) -> Arc<T> {
        let arc = Arc::new(value);
        self.snapshot.send_replace(Some(Arc::clone(&arc)));
        self.last_error.send_replace(None);
        arc
    }

    /// Force the neutral (`None`) snapshot and record why.
    pub(crate) fn reset(&self, err: SyncError) {
        self.snapshot.send_replace(None);
        self.last_error.send_replace(Some(err));
    }

    pub(crate) fn snapshot(&self) -> Option<Arc<T>> {
        self.snapshot.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Option<Arc<T>>> {
        self.snapshot.subscribe()
    }

    pub(crate) fn last_error(&self) -> Option<SyncError> {
        self.last_error.borrow().clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn boom() -> SyncError {
        SyncError::Status {
            status: 500,
            message: "boom".into(),
        }
    }

    #[test]
    fn replace_swaps_the_whole_snapshot() {
        let store: ListStore<String> = ListStore::new();
        assert!(store.snapshot().is_empty());

        store.replace(vec!["a".into(), "b".into()]);
        let snap = store.snapshot();
        assert_eq!(snap.len(), 2);
        assert_eq!(*snap[0], "a");

        store.replace(vec!["c".into()]);
        let snap = store.snapshot();
        assert_eq!(snap.len(), 1);
        assert_eq!(*snap[0], "c");
    }

    #[test]
    fn reset_records_the_diagnostic() {
        let store: ListStore<String> = ListStore::new();
        store.replace(vec!["a".into()]);
        assert!(store.last_error().is_none());

        store.reset(boom());
        assert!(store.snapshot().is_empty());
        assert_eq!(store.last_error(), Some(boom()));
    }

    #[test]
    fn successful_replace_clears_the_diagnostic() {
        let store: ListStore<String> = ListStore::new();
        store.reset(boom());
        assert!(store.last_error().is_some());

        store.replace(Vec::new());
        // An empty-but-successful fetch is distinguishable from a failure.
        assert!(store.snapshot().is_empty());
        assert!(store.last_error().is_none());
    }

    #[test]
    fn subscribers_see_every_replacement() {
        let store: ListStore<u32> = ListStore::new();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.replace(vec![1, 2, 3]);
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 3);

        store.reset(boom());
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_empty());
    }

    #[test]
    fn dropped_subscriber_does_not_break_writers() {
        let store: ListStore<u32> = ListStore::new();
        let rx = store.subscribe();
        drop(rx);

        // Writes still land with zero receivers.
        store.replace(vec![7]);
        assert_eq!(store.snapshot().len(), 1);
    }

    #[test]
    fn selection_replace_and_reset() {
        let store: SelectionStore<String> = SelectionStore::new();
        assert!(store.snapshot().is_none());

        store.replace("chosen".into());
        assert_eq!(*store.snapshot().unwrap(), "chosen");
        assert!(store.last_error().is_none());

        store.reset(boom());
        assert!(store.snapshot().is_none());
        assert_eq!(store.last_error(), Some(boom()));
    }
}
