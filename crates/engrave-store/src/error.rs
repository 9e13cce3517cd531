use engrave_types::{CallerId, EntryId};

/// Errors from entry store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Mutation attempted after the entry was frozen.
    #[error("entry {0} is frozen and can no longer be mutated")]
    Frozen(EntryId),

    /// Freeze attempted on an entry with an empty buffer.
    #[error("entry {0} has an empty buffer; nothing to freeze")]
    EmptyPayload(EntryId),

    /// Claim attempted on an already-claimed id.
    #[error("entry {0} is already claimed")]
    AlreadyClaimed(EntryId),

    /// The caller does not hold the privileged-caller capability.
    #[error("caller {caller} is not privileged to {operation} entry {id}")]
    Unauthorized {
        caller: CallerId,
        operation: &'static str,
        id: EntryId,
    },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
