/*!
 * Simulation Module
 * Request handling, results, and reports
 */

pub mod report;
pub mod request;
pub mod result;

pub use report::{ProcessOutcome, SimulationReport};
pub use request::SimulationRequest;
pub use result::{DispatchEvent, SimulationResult, Slice};
