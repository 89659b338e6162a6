pub mod config;
pub mod segment;
pub mod state;

pub use config::{ConfigError, ReassemblerConfig};
pub use segment::{Interval, Segment};
pub use state::{PendingStore, Reassembler, ReassemblyStats, SegmentOutcome, StreamReassembler};
