use tracing::{debug, warn};

use super::pending::PendingStore;
use super::sequence::{unwrap_offset, wire_offset};
use crate::config::{ConfigError, ReassemblerConfig};
use crate::segment::Interval;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentOutcome {
    Buffered,
    Stale,
    Empty,
    RejectedCapacity,
    RejectedWindow,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReassemblyStats {
    pub segments_received: u64,
    pub segments_buffered: u64,
    pub segments_stale: u64,
    pub segments_empty: u64,
    pub segments_rejected: u64,
    pub bytes_delivered: u64,
    pub intervals_merged: u64,
    pub stale_intervals_dropped: u64,
}

/// Positions are 64-bit offsets from the first stream byte; `base` is that
/// byte's wire offset.
#[derive(Debug)]
pub struct StreamReassembler {
    config: ReassemblerConfig,
    base: Option<u32>,
    cursor: u64,
    pending: PendingStore,
    stream: Vec<u8>,
    stats: ReassemblyStats,
}

impl Default for StreamReassembler {
    fn default() -> Self {
        Self::new(None)
    }
}

impl StreamReassembler {
    pub fn new(initial_offset: Option<u32>) -> Self {
        Self::from_parts(ReassemblerConfig {
            initial_offset,
            ..ReassemblerConfig::default()
        })
    }

    pub fn with_config(config: ReassemblerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: ReassemblerConfig) -> Self {
        Self {
            config,
            base: config.initial_offset,
            cursor: 0,
            pending: PendingStore::new(),
            stream: Vec::new(),
            stats: ReassemblyStats::default(),
        }
    }

    pub fn add_segment(&mut self, offset: u32, mut payload: Vec<u8>) -> SegmentOutcome {
        self.stats.segments_received += 1;

        let base = match self.base {
            Some(base) => base,
            None => {
                debug!(offset, "stream start taken from first segment");
                self.base = Some(offset);
                offset
            }
        };

        if payload.is_empty() {
            self.stats.segments_empty += 1;
            return SegmentOutcome::Empty;
        }

        let len = payload.len();
        let cursor = self.cursor as i64;
        let start = unwrap_offset(self.cursor, wire_offset(base, self.cursor), offset);
        let end = start + len as i64;

        if end <= cursor {
            self.stats.segments_stale += 1;
            debug!(offset, len, "stale segment dropped");
            return SegmentOutcome::Stale;
        }

        if let Some(window) = self.config.max_window
            && start - cursor > i64::from(window)
        {
            self.stats.segments_rejected += 1;
            warn!(offset, len, window, "segment beyond receive window");
            return SegmentOutcome::RejectedWindow;
        }

        // Bytes before the first stream position can never be delivered.
        let start = if start < 0 {
            payload.drain(..start.unsigned_abs() as usize);
            0
        } else {
            start as u64
        };
        let end = start + payload.len() as u64;

        if start > self.cursor && !self.has_room_for(start, end) {
            self.stats.segments_rejected += 1;
            warn!(
                offset,
                len,
                buffered = self.pending.buffered_bytes(),
                intervals = self.pending.len(),
                "pending store full, segment rejected"
            );
            return SegmentOutcome::RejectedCapacity;
        }

        let merges = self.pending.insert(Interval::new(start, payload));
        self.stats.intervals_merged += merges as u64;
        self.stats.segments_buffered += 1;
        SegmentOutcome::Buffered
    }

    pub fn flush(&mut self) -> usize {
        let before = self.stream.len();
        let mut stale = 0u64;

        while let Some(front) = self.pending.front() {
            if front.start > self.cursor {
                break;
            }
            let Some(interval) = self.pending.pop_front() else {
                break;
            };

            let skip = (self.cursor - interval.start) as usize;
            if skip >= interval.len() {
                stale += 1;
                continue;
            }

            let fresh = &interval.data[skip..];
            self.stream.extend_from_slice(fresh);
            self.cursor += fresh.len() as u64;
        }

        let delivered = self.stream.len() - before;
        self.stats.bytes_delivered += delivered as u64;
        self.stats.stale_intervals_dropped += stale;

        if delivered > 0 || stale > 0 {
            debug!(
                delivered,
                stale,
                pending = self.pending.len(),
                "flushed pending data"
            );
        }
        delivered
    }

    pub fn stream(&self) -> &[u8] {
        &self.stream
    }

    pub fn expected_offset(&self) -> Option<u32> {
        self.base.map(|base| wire_offset(base, self.cursor))
    }

    /// Buffered ranges as `(wire offset, length)`, lowest first.
    pub fn pending_intervals(&self) -> Vec<(u32, usize)> {
        let Some(base) = self.base else {
            return Vec::new();
        };
        self.pending
            .intervals()
            .map(|interval| (wire_offset(base, interval.start), interval.len()))
            .collect()
    }

    pub fn buffered_bytes(&self) -> usize {
        self.pending.buffered_bytes()
    }

    pub fn stats(&self) -> ReassemblyStats {
        self.stats
    }

    fn has_room_for(&self, start: u64, end: u64) -> bool {
        if let Some(max) = self.config.max_buffered_bytes
            && self.pending.buffered_bytes() + self.pending.uncovered_bytes(start, end) > max
        {
            return false;
        }
        if let Some(max) = self.config.max_intervals
            && self.pending.len() >= max
            && !self.pending.would_touch(start, end)
        {
            return false;
        }
        true
    }
}
