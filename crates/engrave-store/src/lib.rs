//! Ledger entry store for engrave.
//!
//! This crate is the lifecycle heart of engrave. Each entry is an
//! append-only byte buffer keyed by [`EntryId`] with two one-way flags:
//!
//! - **frozen** — once set, the buffer is immutable; append and clear fail
//!   forever after.
//! - **claimed** — once set, the id is permanently assigned and can never
//!   be claimed again.
//!
//! Entries come into being implicitly: the first operation touching a
//! fresh id sees an empty, unfrozen, unclaimed entry. There is no delete.
//!
//! # Provided
//!
//! - [`Entry`] — the per-id record (buffer, frozen, claimed)
//! - [`EntryStore`] — the operation trait boundary
//! - [`InMemoryEntryStore`] — `HashMap`-based store for tests, local demos,
//!   and embedding, with snapshot/restore for the persisted state layout
//! - [`AccessPolicy`] — the privileged-caller predicate, with
//!   [`SingleOwner`] and [`AllowAll`] implementations

pub mod entry;
pub mod error;
pub mod memory;
pub mod policy;
pub mod traits;

pub use entry::Entry;
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryEntryStore;
pub use policy::{AccessPolicy, AllowAll, SingleOwner};
pub use traits::EntryStore;

// Re-export key types
pub use engrave_types::{CallerId, EntryId};
