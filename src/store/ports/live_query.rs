//! Consumer-owned handle for a live query subscription.

use crate::store::domain::Snapshot;
use tokio::sync::watch;

/// Cancellable view of the latest result-set snapshot.
///
/// The store keeps the sending half and overwrites the held snapshot on
/// every change, so a slow consumer only ever sees the newest one. Closing
/// the handle, or dropping it, releases the subscription; the store prunes
/// it before its next push.
#[derive(Debug)]
pub struct LiveQuery {
    receiver: Option<watch::Receiver<Snapshot>>,
}

impl LiveQuery {
    /// Wraps the receiving half of a store subscription channel.
    ///
    /// The snapshot currently held by the channel is delivered first.
    #[must_use]
    pub fn new(mut receiver: watch::Receiver<Snapshot>) -> Self {
        receiver.mark_changed();
        Self {
            receiver: Some(receiver),
        }
    }

    /// Waits until a snapshot newer than the last one taken is available
    /// and returns it.
    ///
    /// Returns `None` once the query is closed or the store ended it.
    pub async fn next_snapshot(&mut self) -> Option<Snapshot> {
        let receiver = self.receiver.as_mut()?;
        receiver.changed().await.ok()?;
        Some(receiver.borrow_and_update().clone())
    }

    /// Takes the newest snapshot if it has not been taken yet.
    pub fn try_next_snapshot(&mut self) -> Option<Snapshot> {
        let receiver = self.receiver.as_mut()?;
        if receiver.has_changed().ok()? {
            Some(receiver.borrow_and_update().clone())
        } else {
            None
        }
    }

    /// Closes the subscription. Calling this more than once has no effect.
    pub fn close(&mut self) {
        self.receiver = None;
    }

    /// Returns `true` once the subscription has been closed by either side.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.receiver
            .as_ref()
            .is_none_or(|receiver| receiver.has_changed().is_err())
    }
}
