/*!
 * First-Come-First-Serve
 */

use super::stable_order_by;
use crate::core::types::{ProcessIndex, Ticks};
use crate::process::Process;
use crate::scheduler::arena::{RunState, Slot};
use crate::scheduler::traits::Discipline;

/// Runs processes to completion in arrival order
#[derive(Debug, Default)]
pub struct Fcfs {
    next: Slot,
}

impl Fcfs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Discipline for Fcfs {
    fn order(&self, processes: &[Process]) -> Vec<ProcessIndex> {
        stable_order_by(processes, |p| p.arrival)
    }

    fn select(&mut self, state: &RunState<'_>) -> Option<Slot> {
        while self.next < state.len() && state.is_finished(self.next) {
            self.next += 1;
        }

        // Later slots cannot be ready before this one has arrived
        (self.next < state.len() && state.has_arrived(self.next)).then_some(self.next)
    }

    fn slice(&self, state: &RunState<'_>, slot: Slot) -> Ticks {
        state.remaining(slot)
    }
}
