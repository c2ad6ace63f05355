/*!
 * Core Module
 * Shared types, errors, and limits
 */

pub mod errors;
pub mod limits;
pub mod types;

pub use errors::{SchedError, SchedResult};
pub use limits::SimulationConfig;
pub use types::{Priority, ProcessIndex, Ticks};
