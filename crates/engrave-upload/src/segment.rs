use crate::error::{UploadError, UploadResult};

/// Number of segments a payload of `payload_len` bytes splits into at
/// `segment_size` bytes per segment. Zero for an empty payload.
pub fn segment_count(payload_len: usize, segment_size: usize) -> usize {
    payload_len.div_ceil(segment_size)
}

/// Deterministic split of a payload into ordered, bounded segments.
///
/// Segment `i` is `payload[i*size .. min((i+1)*size, len)]`: every segment
/// except possibly the last has exactly `segment_size` bytes. The plan is
/// a lazy, finite, non-restartable iterator — consuming it advances a
/// cursor that never moves backwards.
#[derive(Debug)]
pub struct SegmentPlan<'a> {
    payload: &'a [u8],
    segment_size: usize,
    next_index: usize,
}

impl<'a> SegmentPlan<'a> {
    pub fn new(payload: &'a [u8], segment_size: usize) -> UploadResult<Self> {
        if segment_size == 0 {
            return Err(UploadError::InvalidSegmentSize);
        }
        Ok(Self {
            payload,
            segment_size,
            next_index: 0,
        })
    }

    /// Total number of segments in the full payload.
    pub fn total(&self) -> usize {
        segment_count(self.payload.len(), self.segment_size)
    }

    /// Index of the next segment the iterator will yield.
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Advance the cursor to `index`, skipping already-confirmed segments
    /// when resuming a partial upload. Capped at the end of the plan; the
    /// cursor never moves backwards.
    pub fn skip_to(&mut self, index: usize) {
        self.next_index = self.next_index.max(index.min(self.total()));
    }
}

impl<'a> Iterator for SegmentPlan<'a> {
    type Item = (usize, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_index >= self.total() {
            return None;
        }
        let index = self.next_index;
        let start = index * self.segment_size;
        let end = (start + self.segment_size).min(self.payload.len());
        self.next_index += 1;
        Some((index, &self.payload[start..end]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total() - self.next_index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SegmentPlan<'_> {}
