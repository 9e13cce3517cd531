use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use engrave_types::{CallerId, EntryId};
use tracing::debug;

use crate::entry::Entry;
use crate::error::{StoreError, StoreResult};
use crate::policy::{AccessPolicy, AllowAll};
use crate::traits::EntryStore;

/// In-memory, HashMap-based entry store.
///
/// Intended for tests, local demos, and embedding. Entries are held behind
/// a `RwLock`; the lock also gives the "one mutating operation per id at a
/// time" discipline the contract assumes. Absent ids behave as the
/// zero-value entry, so no operation ever faults on a missing key.
pub struct InMemoryEntryStore {
    policy: Box<dyn AccessPolicy>,
    entries: RwLock<HashMap<EntryId, Entry>>,
}

impl InMemoryEntryStore {
    /// Create an empty store guarded by the given access policy.
    pub fn new(policy: impl AccessPolicy + 'static) -> Self {
        Self {
            policy: Box::new(policy),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Create an empty store with no access restriction.
    pub fn permissive() -> Self {
        Self::new(AllowAll)
    }

    /// Number of entries ever touched.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no entry has ever been touched.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Total buffered bytes across all entries.
    pub fn total_bytes(&self) -> u64 {
        self.entries
            .read()
            .expect("lock poisoned")
            .values()
            .map(|entry| entry.buffer.len() as u64)
            .sum()
    }

    /// Copy of the full state, sorted by id. This is the persisted state
    /// layout: a mapping from identifier to (buffer, frozen, claimed).
    pub fn snapshot(&self) -> BTreeMap<EntryId, Entry> {
        self.entries
            .read()
            .expect("lock poisoned")
            .iter()
            .map(|(id, entry)| (*id, entry.clone()))
            .collect()
    }

    /// Rebuild a store from a snapshot.
    pub fn restore(policy: impl AccessPolicy + 'static, state: BTreeMap<EntryId, Entry>) -> Self {
        Self {
            policy: Box::new(policy),
            entries: RwLock::new(state.into_iter().collect()),
        }
    }

    fn authorize(
        &self,
        caller: &CallerId,
        operation: &'static str,
        id: EntryId,
    ) -> StoreResult<()> {
        if self.policy.is_privileged(caller) {
            Ok(())
        } else {
            Err(StoreError::Unauthorized {
                caller: caller.clone(),
                operation,
                id,
            })
        }
    }
}

impl EntryStore for InMemoryEntryStore {
    fn append(&self, caller: &CallerId, id: EntryId, bytes: &[u8]) -> StoreResult<()> {
        self.authorize(caller, "append", id)?;
        let mut entries = self.entries.write().expect("lock poisoned");
        let entry = entries.entry(id).or_default();
        if entry.frozen {
            return Err(StoreError::Frozen(id));
        }
        entry.buffer.extend_from_slice(bytes);
        debug!(%id, appended = bytes.len(), total = entry.buffer.len(), "append");
        Ok(())
    }

    fn clear(&self, caller: &CallerId, id: EntryId) -> StoreResult<()> {
        self.authorize(caller, "clear", id)?;
        let mut entries = self.entries.write().expect("lock poisoned");
        let entry = entries.entry(id).or_default();
        if entry.frozen {
            return Err(StoreError::Frozen(id));
        }
        entry.buffer.clear();
        debug!(%id, "clear");
        Ok(())
    }

    fn freeze(&self, caller: &CallerId, id: EntryId) -> StoreResult<()> {
        self.authorize(caller, "freeze", id)?;
        let mut entries = self.entries.write().expect("lock poisoned");
        // A failed freeze leaves no trace: an unseen id is not created.
        let Some(entry) = entries.get_mut(&id) else {
            return Err(StoreError::EmptyPayload(id));
        };
        if entry.frozen {
            return Err(StoreError::Frozen(id));
        }
        if entry.buffer.is_empty() {
            return Err(StoreError::EmptyPayload(id));
        }
        entry.frozen = true;
        debug!(%id, bytes = entry.buffer.len(), "freeze");
        Ok(())
    }

    fn claim(&self, caller: &CallerId, id: EntryId) -> StoreResult<()> {
        self.authorize(caller, "claim", id)?;
        let mut entries = self.entries.write().expect("lock poisoned");
        let entry = entries.entry(id).or_default();
        if entry.claimed {
            return Err(StoreError::AlreadyClaimed(id));
        }
        entry.claimed = true;
        debug!(%id, "claim");
        Ok(())
    }

    fn read(&self, id: EntryId) -> StoreResult<Vec<u8>> {
        let entries = self.entries.read().expect("lock poisoned");
        Ok(entries.get(&id).map(|e| e.buffer.clone()).unwrap_or_default())
    }

    fn exists(&self, id: EntryId) -> StoreResult<bool> {
        let entries = self.entries.read().expect("lock poisoned");
        Ok(entries.contains_key(&id))
    }

    fn frozen(&self, id: EntryId) -> StoreResult<bool> {
        let entries = self.entries.read().expect("lock poisoned");
        Ok(entries.get(&id).is_some_and(|e| e.frozen))
    }

    fn claimed(&self, id: EntryId) -> StoreResult<bool> {
        let entries = self.entries.read().expect("lock poisoned");
        Ok(entries.get(&id).is_some_and(|e| e.claimed))
    }
}

impl std::fmt::Debug for InMemoryEntryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryEntryStore")
            .field("entry_count", &self.len())
            .finish()
    }
}
