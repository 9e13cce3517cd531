//! Chunked upload driver for engrave.
//!
//! A ledger write carries at most a bounded number of bytes, so a large
//! payload (megabytes of encoded metadata) has to travel as an ordered
//! sequence of appends. This crate splits a payload into segments, submits
//! them strictly one at a time, and waits for each confirmation before the
//! next submission — append is concatenation, so submission order IS the
//! assembled buffer.
//!
//! The driver never retries and never rolls back. A failed segment aborts
//! the remaining sequence and surfaces the confirmed count so the caller
//! can resume from a precise cursor or clear and restart. Freezing the
//! finished entry is the caller's separate step.

pub mod direct;
pub mod driver;
pub mod error;
pub mod segment;
pub mod transport;
pub mod types;

pub use direct::DirectTransport;
pub use driver::UploadDriver;
pub use error::{UploadError, UploadResult};
pub use segment::{segment_count, SegmentPlan};
pub use transport::LedgerTransport;
pub use types::{Confirmation, UploadConfig, UploadReport, DEFAULT_SEGMENT_SIZE};

// Re-export key types
pub use engrave_types::{CallerId, EntryId};
