use serde::{Deserialize, Serialize};

/// The per-id record: an append-only byte buffer plus two one-way flags.
///
/// Both flags are monotonic false→true and never reset. The buffer only
/// ever grows by concatenation or is reset to empty wholesale; there is no
/// partial or random-offset mutation. `Entry` derives serde so the whole
/// store state (id → entry) can be persisted as the state layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Accumulated payload bytes.
    pub buffer: Vec<u8>,
    /// Buffer is immutable once set.
    pub frozen: bool,
    /// Id is permanently assigned once set.
    pub claimed: bool,
}

impl Entry {
    /// The zero-value entry a fresh id implicitly starts from.
    pub fn empty() -> Self {
        Self::default()
    }
}
