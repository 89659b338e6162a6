pub mod pending;
pub mod reassembler;
pub mod sequence;
pub mod shared;

pub use pending::PendingStore;
pub use reassembler::{ReassemblyStats, SegmentOutcome, StreamReassembler};
pub use shared::Reassembler;
