use engrave_types::EntryId;
use tracing::{debug, info};

use crate::error::{UploadError, UploadResult};
use crate::segment::SegmentPlan;
use crate::transport::LedgerTransport;
use crate::types::{UploadConfig, UploadReport};

/// Drives a payload into an entry's buffer as an ordered append sequence.
///
/// Submission is strictly sequential: segment `i+1` is not submitted until
/// segment `i` is confirmed. Appends concatenate, so any reordering would
/// be visible in the assembled buffer; no parallel dispatch ever happens
/// for one id.
///
/// The driver is fail-fast and stateless across runs. It retries nothing
/// and rolls back nothing: a failed segment aborts the run with the
/// confirmed count, and the caller decides between [`UploadDriver::resume`]
/// from that cursor or a compensating store clear plus restart. The driver
/// also never freezes — finalization is the caller's separate step.
pub struct UploadDriver<T: LedgerTransport> {
    transport: T,
    config: UploadConfig,
}

impl<T: LedgerTransport> UploadDriver<T> {
    /// Create a driver with the default configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, UploadConfig::default())
    }

    pub fn with_config(transport: T, config: UploadConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// Upload the full payload from its first segment.
    ///
    /// On success the entry's buffer equals `payload` byte-for-byte,
    /// provided it was empty when the run started.
    pub async fn upload(&self, id: EntryId, payload: &[u8]) -> UploadResult<UploadReport> {
        self.drive(id, payload, 0).await
    }

    /// Re-drive the plan starting at `from_segment`, skipping segments an
    /// earlier run already confirmed. The caller computes the cursor from
    /// the store's current buffer length (a partial run confirms only
    /// whole segments, so `read(id).len() / segment_size` is exact).
    pub async fn resume(
        &self,
        id: EntryId,
        payload: &[u8],
        from_segment: usize,
    ) -> UploadResult<UploadReport> {
        self.drive(id, payload, from_segment).await
    }

    async fn drive(
        &self,
        id: EntryId,
        payload: &[u8],
        from_segment: usize,
    ) -> UploadResult<UploadReport> {
        if self.config.guard_existing && self.transport.claimed(id).await? {
            return Err(UploadError::DuplicateTarget(id));
        }

        let mut plan = SegmentPlan::new(payload, self.config.segment_size)?;
        let total = plan.total();
        plan.skip_to(from_segment);
        debug!(
            %id,
            payload_bytes = payload.len(),
            segment_size = self.config.segment_size,
            total_segments = total,
            from_segment,
            "starting upload"
        );

        let mut segments_submitted = 0usize;
        let mut bytes_sent = 0u64;
        for (index, segment) in plan {
            match self.transport.submit_append(id, segment).await {
                Ok(confirmation) => {
                    info!(
                        %id,
                        segment = index + 1,
                        of = total,
                        bytes = segment.len(),
                        position = confirmation.position,
                        "segment confirmed"
                    );
                    segments_submitted += 1;
                    bytes_sent += segment.len() as u64;
                }
                Err(err) => {
                    // Fail fast: nothing after the failed segment is
                    // submitted, and confirmed segments stay in place.
                    return Err(UploadError::PartialUpload {
                        id,
                        confirmed: index,
                        total,
                        reason: err.to_string(),
                    });
                }
            }
        }

        Ok(UploadReport {
            id,
            total_segments: total,
            segments_submitted,
            bytes_sent,
            segment_size: self.config.segment_size,
        })
    }
}
