use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_buffered_bytes must be non-zero when set")]
    ZeroBufferLimit,
    #[error("max_intervals must be non-zero when set")]
    ZeroIntervalLimit,
    #[error("max_window must be non-zero when set")]
    ZeroWindow,
}

/// Tuning for a [`Reassembler`](crate::Reassembler).
///
/// Every limit defaults to `None`, which leaves buffering unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReassemblerConfig {
    /// Offset of the first stream byte. `None` lets the first segment,
    /// empty or not, define it.
    pub initial_offset: Option<u32>,
    /// Upper bound on bytes held in the pending store.
    pub max_buffered_bytes: Option<usize>,
    /// Upper bound on disjoint pending intervals.
    pub max_intervals: Option<usize>,
    /// Furthest distance past the cursor a segment may start.
    pub max_window: Option<u32>,
}

impl ReassemblerConfig {
    pub fn with_initial_offset(offset: u32) -> Self {
        Self {
            initial_offset: Some(offset),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_buffered_bytes == Some(0) {
            return Err(ConfigError::ZeroBufferLimit);
        }
        if self.max_intervals == Some(0) {
            return Err(ConfigError::ZeroIntervalLimit);
        }
        if self.max_window == Some(0) {
            return Err(ConfigError::ZeroWindow);
        }
        Ok(())
    }
}
