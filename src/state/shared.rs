use parking_lot::Mutex;

use super::reassembler::{ReassemblyStats, SegmentOutcome, StreamReassembler};
use crate::config::{ConfigError, ReassemblerConfig};
use crate::segment::Segment;

/// Each call holds the lock for its whole duration. Share it with `Arc`.
#[derive(Debug, Default)]
pub struct Reassembler {
    inner: Mutex<StreamReassembler>,
}

impl Reassembler {
    /// `None` lets the first segment fix the stream start.
    pub fn new(initial_offset: Option<u32>) -> Self {
        Self {
            inner: Mutex::new(StreamReassembler::new(initial_offset)),
        }
    }

    pub fn with_config(config: ReassemblerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: Mutex::new(StreamReassembler::with_config(config)?),
        })
    }

    pub fn add_segment(&self, offset: u32, payload: impl Into<Vec<u8>>) -> SegmentOutcome {
        let payload = payload.into();
        self.inner.lock().add_segment(offset, payload)
    }

    pub fn submit(&self, segment: Segment) -> SegmentOutcome {
        self.inner.lock().add_segment(segment.offset, segment.payload)
    }

    pub fn flush(&self) -> usize {
        self.inner.lock().flush()
    }

    pub fn byte_stream(&self) -> Vec<u8> {
        self.inner.lock().stream().to_vec()
    }

    /// Runs `f` over the delivered bytes without copying them.
    pub fn with_byte_stream<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(self.inner.lock().stream())
    }

    pub fn stream_len(&self) -> usize {
        self.inner.lock().stream().len()
    }

    pub fn expected_offset(&self) -> Option<u32> {
        self.inner.lock().expected_offset()
    }

    pub fn pending_intervals(&self) -> Vec<(u32, usize)> {
        self.inner.lock().pending_intervals()
    }

    pub fn buffered_bytes(&self) -> usize {
        self.inner.lock().buffered_bytes()
    }

    pub fn stats(&self) -> ReassemblyStats {
        self.inner.lock().stats()
    }

    pub fn into_inner(self) -> StreamReassembler {
        self.inner.into_inner()
    }
}
