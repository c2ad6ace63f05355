/*!
 * Scheduler Module
 * Scheduling policies and the simulation engine
 */

pub mod arena;
pub mod engine;
pub mod policies;
pub mod traits;
pub mod types;

// Re-export public API
pub use arena::{RunState, Slot};
pub use engine::simulate;
pub use traits::Discipline;
pub use types::{Policy, TimeQuantum};
