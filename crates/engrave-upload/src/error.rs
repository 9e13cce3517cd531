use engrave_store::StoreError;
use engrave_types::EntryId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    /// The target id is already claimed; the upload would mutate a
    /// permanently-owned slot. Raised before any write when the
    /// guard-existing policy is on.
    #[error("entry {0} is already claimed; refusing to upload into it")]
    DuplicateTarget(EntryId),

    /// Segment size must be positive.
    #[error("segment size must be positive")]
    InvalidSegmentSize,

    /// A segment submission failed after earlier segments were confirmed.
    /// `confirmed` is the number of durably applied segments, so it is
    /// also the index of the next segment to submit on resume.
    #[error(
        "upload to entry {id} stopped after {confirmed} of {total} segments: {reason}"
    )]
    PartialUpload {
        id: EntryId,
        confirmed: usize,
        total: usize,
        reason: String,
    },

    /// The execution environment rejected a submission or its
    /// confirmation channel timed out.
    #[error("transport error: {0}")]
    Transport(String),

    /// Store-level failure surfaced through the direct transport.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

pub type UploadResult<T> = Result<T, UploadError>;
