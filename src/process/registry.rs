/*!
 * Process Registry
 * Order-preserving, validated set of processes for one simulation run
 */

use super::table::ProcessTable;
use super::types::Process;
use super::validation::{validate_priorities, validate_processes, validate_spec};
use crate::core::errors::SchedResult;
use crate::core::limits::SimulationConfig;
use crate::core::types::{ProcessIndex, Ticks};
use serde::Serialize;
use std::ops::Index;

/// Validated processes in caller order
///
/// Insertion order is significant: several policies break ties by list position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProcessRegistry {
    processes: Vec<Process>,
}

impl ProcessRegistry {
    /// Validate processes against the default limits
    pub fn new(processes: Vec<Process>) -> SchedResult<Self> {
        Self::with_config(processes, &SimulationConfig::default())
    }

    /// Validate processes against explicit limits
    pub fn with_config(processes: Vec<Process>, config: &SimulationConfig) -> SchedResult<Self> {
        validate_processes(&processes, config)?;
        Ok(Self { processes })
    }

    /// Validate a raw table, reporting the first offending field
    pub fn from_table(table: &ProcessTable, config: &SimulationConfig) -> SchedResult<Self> {
        let processes = table
            .iter()
            .map(|(id, spec)| validate_spec(id, spec))
            .collect::<SchedResult<Vec<_>>>()?;
        Self::with_config(processes, config)
    }

    /// Reject registries that cannot be run under priority scheduling
    pub fn require_priorities(&self) -> SchedResult<()> {
        validate_priorities(&self.processes)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Always false for a constructed registry
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    #[inline]
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    pub fn position(&self, id: &str) -> Option<ProcessIndex> {
        self.processes.iter().position(|p| p.id == id)
    }

    /// Sum of all bursts
    pub fn total_burst(&self) -> Ticks {
        self.processes.iter().map(|p| p.burst).sum()
    }

    pub fn first_arrival(&self) -> Ticks {
        self.processes.iter().map(|p| p.arrival).min().unwrap_or(0)
    }
}

impl Index<ProcessIndex> for ProcessRegistry {
    type Output = Process;

    fn index(&self, index: ProcessIndex) -> &Self::Output {
        &self.processes[index]
    }
}

impl<'a> IntoIterator for &'a ProcessRegistry {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.processes.iter()
    }
}
