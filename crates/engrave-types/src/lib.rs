//! Foundation types for engrave.
//!
//! This crate provides the identifier and principal types used throughout
//! the engrave system. Every other engrave crate depends on `engrave-types`.
//!
//! # Key Types
//!
//! - [`EntryId`] — Numeric identifier for a ledger entry; never reused once claimed
//! - [`CallerId`] — Opaque submitter principal judged by the access policy

pub mod caller;
pub mod entry_id;
pub mod error;

pub use caller::CallerId;
pub use entry_id::EntryId;
pub use error::TypeError;
