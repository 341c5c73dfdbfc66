//! Core containers.
//!
//! - [`Queue`]: generic FIFO queue
//! - [`State`]: holder of one record value, updated by partial patches
//! - [`UpdateHistory`]: bounded log of the updates a `State` has applied
//!
//! Everything here is synchronous and exclusively owned.

mod history;
mod queue;
mod state;

pub use history::{UpdateHistory, UpdateRecord};
pub use queue::Queue;
pub use state::{State, DEFAULT_HISTORY_LIMIT};
