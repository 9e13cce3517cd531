use engrave_types::EntryId;

/// Default segment size in bytes: a conservative constant below typical
/// ledger per-write ceilings, carried over from the original operational
/// scripts. Always caller-overridable.
pub const DEFAULT_SEGMENT_SIZE: usize = 14_000;

/// Acknowledgment that a submitted operation was durably applied, in
/// submission order, for the target id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Confirmation {
    /// Ledger-assigned position of the applied operation.
    pub position: u64,
}

/// Upload policy knobs.
#[derive(Clone, Debug)]
pub struct UploadConfig {
    /// Maximum bytes per submitted segment. Must be positive and at or
    /// below the execution environment's hard per-write ceiling.
    pub segment_size: usize,
    /// When `true`, probe the target before the first write and refuse to
    /// upload into an already-claimed id.
    pub guard_existing: bool,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            segment_size: DEFAULT_SEGMENT_SIZE,
            guard_existing: true,
        }
    }
}

/// What one driver run actually did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadReport {
    pub id: EntryId,
    /// Segments the full payload splits into.
    pub total_segments: usize,
    /// Segments submitted and confirmed by this run (fewer than
    /// `total_segments` for a resume that started mid-payload).
    pub segments_submitted: usize,
    /// Bytes confirmed by this run.
    pub bytes_sent: u64,
    /// The segment size the run was driven with.
    pub segment_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = UploadConfig::default();
        assert_eq!(config.segment_size, DEFAULT_SEGMENT_SIZE);
        assert!(config.guard_existing);
    }

    #[test]
    fn confirmation_carries_position() {
        let c = Confirmation { position: 3 };
        assert_eq!(c.position, 3);
    }
}
