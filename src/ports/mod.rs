//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the task core and an external
//! system (time, the backing data source). Implementations live in
//! `src/adapters/`.

pub mod clock;
pub mod source;

pub use clock::Clock;
pub use source::{Snapshot, SourceError, TaskSource};
