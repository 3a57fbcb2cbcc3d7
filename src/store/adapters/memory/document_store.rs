//! In-memory document store with live query fan-out.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::watch;
use tracing::debug;

use crate::store::{
    domain::{Document, DocumentId, FieldFilter, Fields, Snapshot},
    ports::{DocumentStore, LiveQuery, StoreError, StoreResult},
};

type Collections = HashMap<String, BTreeMap<DocumentId, Fields>>;

/// Thread-safe in-memory document store.
///
/// Every successful write replaces the snapshot held for each open live
/// query whose result set the write touched. Snapshot order follows
/// document identifier order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    collections: Collections,
    subscribers: Vec<Subscriber>,
    write_rejection: Option<StoreError>,
}

#[derive(Debug)]
struct Subscriber {
    collection: String,
    filter: FieldFilter,
    sender: watch::Sender<Snapshot>,
}

impl InMemoryDocumentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent create, update and delete fail with `error`.
    ///
    /// Live queries stay open and keep delivering snapshots.
    ///
    /// # Errors
    ///
    /// Returns a backend error when lock acquisition fails.
    pub fn reject_writes(&self, error: StoreError) -> StoreResult<()> {
        self.write_state()?.write_rejection = Some(error);
        Ok(())
    }

    /// Clears a rejection installed by [`Self::reject_writes`].
    ///
    /// # Errors
    ///
    /// Returns a backend error when lock acquisition fails.
    pub fn accept_writes(&self) -> StoreResult<()> {
        self.write_state()?.write_rejection = None;
        Ok(())
    }

    /// Returns the number of live queries that are still open.
    ///
    /// Closed subscriptions are pruned as a side effect.
    ///
    /// # Errors
    ///
    /// Returns a backend error when lock acquisition fails.
    pub fn active_subscriptions(&self) -> StoreResult<usize> {
        let mut state = self.write_state()?;
        state
            .subscribers
            .retain(|subscriber| !subscriber.sender.is_closed());
        Ok(state.subscribers.len())
    }

    /// Returns every document currently stored in `collection`.
    ///
    /// # Errors
    ///
    /// Returns a backend error when lock acquisition fails.
    pub fn documents(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let state = self.read_state()?;
        let documents = state
            .collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
                    .collect()
            })
            .unwrap_or_default();
        Ok(documents)
    }

    fn read_state(&self) -> StoreResult<RwLockReadGuard<'_, InMemoryStoreState>> {
        self.state
            .read()
            .map_err(|err| StoreError::backend(std::io::Error::other(err.to_string())))
    }

    fn write_state(&self) -> StoreResult<RwLockWriteGuard<'_, InMemoryStoreState>> {
        self.state
            .write()
            .map_err(|err| StoreError::backend(std::io::Error::other(err.to_string())))
    }
}

impl InMemoryStoreState {
    fn ensure_writable(&self) -> StoreResult<()> {
        self.write_rejection.clone().map_or(Ok(()), Err)
    }

    /// Replaces the snapshot of every open query affected by a change from
    /// `before` to `after`, dropping subscribers whose handle is gone.
    fn publish(&mut self, collection: &str, before: Option<&Fields>, after: Option<&Fields>) {
        let Self {
            collections,
            subscribers,
            ..
        } = self;
        subscribers.retain(|subscriber| {
            if subscriber.sender.is_closed() {
                return false;
            }
            if subscriber.collection != collection {
                return true;
            }
            let touches = |fields: Option<&Fields>| {
                fields.is_some_and(|candidate| subscriber.filter.matches(candidate))
            };
            if !touches(before) && !touches(after) {
                return true;
            }
            let snapshot = matching_snapshot(collections, collection, &subscriber.filter);
            subscriber.sender.send(snapshot).is_ok()
        });
    }
}

fn matching_snapshot(collections: &Collections, collection: &str, filter: &FieldFilter) -> Snapshot {
    collections
        .get(collection)
        .map(|documents| {
            documents
                .iter()
                .filter(|(_, fields)| filter.matches(fields))
                .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
                .collect()
        })
        .unwrap_or_default()
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn create(&self, collection: &str, fields: Fields) -> StoreResult<DocumentId> {
        let mut state = self.write_state()?;
        state.ensure_writable()?;

        let id = DocumentId::generate();
        state
            .collections
            .entry(collection.to_owned())
            .or_default()
            .insert(id.clone(), fields.clone());
        state.publish(collection, None, Some(&fields));
        debug!(collection, document_id = %id, "document created");
        Ok(id)
    }

    async fn update(&self, collection: &str, id: &DocumentId, fields: Fields) -> StoreResult<()> {
        let mut state = self.write_state()?;
        state.ensure_writable()?;

        let document = state
            .collections
            .get_mut(collection)
            .and_then(|documents| documents.get_mut(id))
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_owned(),
                id: id.clone(),
            })?;
        let before = document.clone();
        document.extend(fields);
        let after = document.clone();

        state.publish(collection, Some(&before), Some(&after));
        debug!(collection, document_id = %id, "document updated");
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &DocumentId) -> StoreResult<()> {
        let mut state = self.write_state()?;
        state.ensure_writable()?;

        let removed = state
            .collections
            .get_mut(collection)
            .and_then(|documents| documents.remove(id));
        if let Some(before) = removed {
            state.publish(collection, Some(&before), None);
            debug!(collection, document_id = %id, "document deleted");
        }
        Ok(())
    }

    async fn subscribe(&self, collection: &str, filter: FieldFilter) -> StoreResult<LiveQuery> {
        let mut state = self.write_state()?;
        let initial = matching_snapshot(&state.collections, collection, &filter);
        let (sender, receiver) = watch::channel(initial);
        debug!(collection, field = filter.field(), "live query opened");

        state.subscribers.push(Subscriber {
            collection: collection.to_owned(),
            filter,
            sender,
        });
        Ok(LiveQuery::new(receiver))
    }
}
