//! Small data structures shared between puzzle days.

pub mod grid;
pub mod queue;

pub use grid::{GridError, WrappingGrid};
pub use queue::{CharQueue, QueueError};
