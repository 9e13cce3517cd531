use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use engrave_store::EntryStore;
use engrave_types::{CallerId, EntryId};

use crate::error::UploadResult;
use crate::transport::LedgerTransport;
use crate::types::Confirmation;

/// In-process transport over an [`EntryStore`].
///
/// For tests, local demos, and embedding: every submission is applied to
/// the store synchronously and confirmed immediately, with a monotonically
/// increasing position standing in for the ledger's ordering.
pub struct DirectTransport {
    store: Arc<dyn EntryStore>,
    caller: CallerId,
    position: AtomicU64,
}

impl DirectTransport {
    pub fn new(store: Arc<dyn EntryStore>, caller: CallerId) -> Self {
        Self {
            store,
            caller,
            position: AtomicU64::new(0),
        }
    }

    /// The principal submissions are attributed to.
    pub fn caller(&self) -> &CallerId {
        &self.caller
    }
}

#[async_trait]
impl LedgerTransport for DirectTransport {
    async fn submit_append(&self, id: EntryId, segment: &[u8]) -> UploadResult<Confirmation> {
        self.store.append(&self.caller, id, segment)?;
        Ok(Confirmation {
            position: self.position.fetch_add(1, Ordering::SeqCst),
        })
    }

    async fn claimed(&self, id: EntryId) -> UploadResult<bool> {
        Ok(self.store.claimed(id)?)
    }
}

#[cfg(test)]
mod tests {
    use engrave_store::{InMemoryEntryStore, StoreError};

    use super::*;
    use crate::error::UploadError;

    fn caller(label: &str) -> CallerId {
        CallerId::new(label).unwrap()
    }

    #[tokio::test]
    async fn submissions_apply_to_store_in_order() {
        let store = Arc::new(InMemoryEntryStore::permissive());
        let transport = DirectTransport::new(store.clone(), caller("owner"));
        let id = EntryId::new(1);

        let first = transport.submit_append(id, b"abc").await.unwrap();
        let second = transport.submit_append(id, b"def").await.unwrap();
        assert!(first.position < second.position);
        assert_eq!(store.read(id).unwrap(), b"abcdef");
    }

    #[tokio::test]
    async fn claimed_probe_reflects_store() {
        let store = Arc::new(InMemoryEntryStore::permissive());
        let transport = DirectTransport::new(store.clone(), caller("owner"));
        let id = EntryId::new(7);

        assert!(!transport.claimed(id).await.unwrap());
        store.claim(&caller("owner"), id).unwrap();
        assert!(transport.claimed(id).await.unwrap());
    }

    #[tokio::test]
    async fn store_rejection_passes_through() {
        let store = Arc::new(InMemoryEntryStore::permissive());
        let transport = DirectTransport::new(store.clone(), caller("owner"));
        let id = EntryId::new(1);

        store.append(&caller("owner"), id, b"x").unwrap();
        store.freeze(&caller("owner"), id).unwrap();

        let err = transport.submit_append(id, b"y").await.unwrap_err();
        assert!(matches!(err, UploadError::Store(StoreError::Frozen(_))));
    }
}
