// ── Reactive snapshot streams ──
//
// Subscription handles for consuming store changes. The handle owns
// the registration: dropping it is the unsubscribe, so a consumer that
// has gone away can no longer be notified.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// A subscription to one store's snapshot.
///
/// Provides point-in-time snapshot access and reactive change
/// notification via the `changed()` method or by converting to a
/// `Stream`. Generic over the snapshot type so list and selection
/// stores share it.
pub struct SnapshotStream<S: Clone + Send + Sync + 'static> {
    current: S,
    receiver: watch::Receiver<S>,
}

impl<S: Clone + Send + Sync + 'static> SnapshotStream<S> {
    pub(crate) fn new(receiver: watch::Receiver<S>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// The snapshot captured at subscription time.
    pub fn current(&self) -> &S {
        &self.current
    }

    /// The latest snapshot (may have changed since subscription).
    pub fn latest(&self) -> S {
        self.receiver.borrow().clone()
    }

    /// Wait for the next replacement, returning the new snapshot.
    /// Returns `None` once the owning store has been dropped.
    pub async fn changed(&mut self) -> Option<S> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }

    /// Convert into a `Stream` for use with `StreamExt` combinators.
    pub fn into_stream(self) -> SnapshotWatchStream<S> {
        SnapshotWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
///
/// Yields a new snapshot each time the underlying store is replaced.
pub struct SnapshotWatchStream<S: Clone + Send + Sync + 'static> {
    inner: WatchStream<S>,
}

impl<S: Clone + Send + Sync + 'static> Stream for SnapshotWatchStream<S> {
    type Item = S;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        // WatchStream is Unpin when the item type is Unpin; snapshots
        // are Arc-based and always Unpin.
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
