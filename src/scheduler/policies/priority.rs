/*!
 * Priority Scheduling (non-preemptive)
 */

use super::{stable_order_by, Arrivals};
use crate::core::types::{Priority, ProcessIndex, Ticks};
use crate::process::Process;
use crate::scheduler::arena::{RunState, Slot};
use crate::scheduler::traits::Discipline;
use std::collections::BTreeSet;

/// Runs the ready process with the lowest priority value to completion
///
/// Working order is `(arrival, priority)`; among equal priorities the first
/// ready slot in that order wins.
#[derive(Debug, Default)]
pub struct PriorityFirst {
    arrivals: Arrivals,
    ready: BTreeSet<(Priority, Slot)>,
}

impl PriorityFirst {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn rank(process: &Process) -> Priority {
        // Unreachable through the public entry points, which require priorities
        process.priority.unwrap_or(Priority::MAX)
    }
}

impl Discipline for PriorityFirst {
    fn order(&self, processes: &[Process]) -> Vec<ProcessIndex> {
        stable_order_by(processes, |p| (p.arrival, Self::rank(p)))
    }

    fn admit(&mut self, state: &RunState<'_>) {
        for &slot in self.arrivals.take(state) {
            self.ready.insert((Self::rank(state.process(slot)), slot));
        }
    }

    fn select(&mut self, _state: &RunState<'_>) -> Option<Slot> {
        self.ready.pop_first().map(|(_, slot)| slot)
    }

    fn slice(&self, state: &RunState<'_>, slot: Slot) -> Ticks {
        state.remaining(slot)
    }
}
