/*!
 * Process Module
 * Process registry and boundary validation
 */

pub mod registry;
pub mod table;
pub mod types;
mod validation;

// Re-export for convenience
pub use registry::ProcessRegistry;
pub use table::ProcessTable;
pub use types::{Process, ProcessSpec};
