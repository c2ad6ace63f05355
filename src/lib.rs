/*!
 * CPU Scheduling Simulator
 * Discrete-time single-processor simulation of FCFS, Priority, Round Robin,
 * and SRTF scheduling, with turnaround and waiting time derivation
 */

pub mod core;
pub mod metrics;
pub mod monitoring;
pub mod process;
pub mod scheduler;
pub mod simulation;

// Re-exports
pub use crate::core::{SchedError, SchedResult, SimulationConfig, Ticks};
pub use metrics::{calculate_metrics, Metrics, MetricsSummary};
pub use monitoring::init_tracing;
pub use process::{Process, ProcessRegistry, ProcessSpec, ProcessTable};
pub use scheduler::{simulate, Policy, TimeQuantum};
pub use simulation::{
    DispatchEvent, ProcessOutcome, SimulationReport, SimulationRequest, SimulationResult, Slice,
};
