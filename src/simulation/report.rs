/*!
 * Simulation Report
 * Serializable per-process rows and summary for the result formatter
 */

use super::result::{DispatchEvent, SimulationResult, Slice};
use crate::core::types::{Priority, Ticks};
use crate::metrics::MetricsSummary;
use crate::process::ProcessRegistry;
use crate::scheduler::{Policy, TimeQuantum};
use serde::Serialize;

/// Timing of one process, in caller order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessOutcome {
    pub id: String,
    pub arrival: Ticks,
    pub burst: Ticks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    pub completion: Ticks,
    pub turnaround: i64,
    pub waiting: i64,
}

/// Everything a formatter needs to render a run
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub policy: Policy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_quantum: Option<TimeQuantum>,
    pub gantt: Vec<DispatchEvent>,
    pub slices: Vec<Slice>,
    pub processes: Vec<ProcessOutcome>,
    pub summary: MetricsSummary,
}

impl SimulationReport {
    pub fn new(registry: &ProcessRegistry, result: &SimulationResult) -> Self {
        let processes = registry
            .iter()
            .enumerate()
            .map(|(i, p)| ProcessOutcome {
                id: p.id.clone(),
                arrival: p.arrival,
                burst: p.burst,
                priority: p.priority,
                completion: result.completion[i],
                turnaround: result.metrics.turnaround[i],
                waiting: result.metrics.waiting[i],
            })
            .collect();

        Self {
            policy: result.policy,
            time_quantum: result.policy.time_quantum(),
            gantt: result.gantt.clone(),
            slices: result.slices(),
            processes,
            summary: MetricsSummary::new(
                registry.processes(),
                &result.completion,
                &result.metrics,
            ),
        }
    }

    pub fn outcome(&self, id: &str) -> Option<&ProcessOutcome> {
        self.processes.iter().find(|p| p.id == id)
    }
}
