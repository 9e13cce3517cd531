use engrave_types::{CallerId, EntryId};

use crate::error::StoreResult;

/// Ledger entry store.
///
/// All implementations must satisfy these invariants:
/// - A frozen entry never accepts another append or clear.
/// - A claimed id can never be claimed again.
/// - The buffer only grows by concatenation (append) or resets to empty
///   (clear); no partial mutation.
/// - The first operation touching a fresh id sees the zero-value entry:
///   empty buffer, unfrozen, unclaimed. There is no explicit create and
///   no delete.
/// - Operations against one id are applied in submission order; the
///   surrounding execution environment serializes them.
/// - Mutating operations consult the injected access policy and fail
///   `Unauthorized` without touching state when the caller lacks the
///   privileged-caller capability.
pub trait EntryStore: Send + Sync {
    /// Concatenate `bytes` onto the entry's buffer, creating the entry if
    /// absent. Fails `Frozen` once the entry has been frozen.
    fn append(&self, caller: &CallerId, id: EntryId, bytes: &[u8]) -> StoreResult<()>;

    /// Reset the entry's buffer to empty. Fails `Frozen` once the entry
    /// has been frozen.
    fn clear(&self, caller: &CallerId, id: EntryId) -> StoreResult<()>;

    /// Make the entry's buffer permanently immutable.
    ///
    /// Fails `EmptyPayload` when there is nothing to freeze, and `Frozen`
    /// when the entry is already frozen (frozen is terminal for mutation,
    /// freeze included).
    fn freeze(&self, caller: &CallerId, id: EntryId) -> StoreResult<()>;

    /// Permanently assign the id. Fails `AlreadyClaimed` on a second
    /// claim. Legal on a never-touched id: the buffer stays empty.
    ///
    /// The store does not require the entry to be frozen first; sequencing
    /// freeze before claim is caller discipline, not a store rule.
    fn claim(&self, caller: &CallerId, id: EntryId) -> StoreResult<()>;

    /// The entry's buffer, verbatim. Empty for absent ids. Unrestricted.
    fn read(&self, id: EntryId) -> StoreResult<Vec<u8>>;

    /// Whether any operation has ever created this entry.
    fn exists(&self, id: EntryId) -> StoreResult<bool>;

    /// Whether the entry is frozen. Absent entries report `false`.
    fn frozen(&self, id: EntryId) -> StoreResult<bool>;

    /// Whether the id has been claimed. Absent entries report `false`.
    fn claimed(&self, id: EntryId) -> StoreResult<bool>;
}
