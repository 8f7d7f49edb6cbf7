//! Plugin implementations for the supported dialects
//!
//! Each plugin implements the core traits (database, detector, parser,
//! generator) for one Mermaid dialect. The orchestrator wires them together.

pub mod er;
pub mod orchestrator;
pub mod sequence;

pub use er::*;
pub use orchestrator::*;
pub use sequence::*;
