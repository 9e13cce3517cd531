use async_trait::async_trait;
use engrave_types::EntryId;

use crate::error::UploadResult;
use crate::types::Confirmation;

/// Submission interface to the ledger execution environment.
///
/// The environment guarantees total ordering of operations submitted by
/// the same caller against the same id, and enforces its own hard
/// per-write size ceiling. `submit_append` resolves only once the append
/// is durably applied (or definitively rejected); a stuck submission is
/// the environment's timeout to raise, surfaced here as a transport error.
#[async_trait]
pub trait LedgerTransport: Send + Sync {
    /// Submit one append and wait for its confirmation.
    async fn submit_append(&self, id: EntryId, segment: &[u8]) -> UploadResult<Confirmation>;

    /// Whether the id is already claimed (permanently owned).
    async fn claimed(&self, id: EntryId) -> UploadResult<bool>;
}

#[async_trait]
impl<T: LedgerTransport + ?Sized> LedgerTransport for std::sync::Arc<T> {
    async fn submit_append(&self, id: EntryId, segment: &[u8]) -> UploadResult<Confirmation> {
        (**self).submit_append(id, segment).await
    }

    async fn claimed(&self, id: EntryId) -> UploadResult<bool> {
        (**self).claimed(id).await
    }
}
