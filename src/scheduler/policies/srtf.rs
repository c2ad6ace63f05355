/*!
 * Shortest Remaining Time First
 */

use super::{stable_order_by, Arrivals};
use crate::core::types::{ProcessIndex, Ticks};
use crate::process::Process;
use crate::scheduler::arena::{RunState, Slot};
use crate::scheduler::traits::Discipline;
use std::collections::BTreeSet;

/// Preemptive shortest-remaining-time, re-evaluated every tick
///
/// Ready slots are kept ordered by `(remaining, slot)`, so ties go to the
/// earliest slot in arrival order.
#[derive(Debug, Default)]
pub struct ShortestRemaining {
    arrivals: Arrivals,
    ready: BTreeSet<(Ticks, Slot)>,
}

impl ShortestRemaining {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Discipline for ShortestRemaining {
    fn order(&self, processes: &[Process]) -> Vec<ProcessIndex> {
        stable_order_by(processes, |p| p.arrival)
    }

    fn admit(&mut self, state: &RunState<'_>) {
        for &slot in self.arrivals.take(state) {
            self.ready.insert((state.remaining(slot), slot));
        }
    }

    fn select(&mut self, _state: &RunState<'_>) -> Option<Slot> {
        self.ready.pop_first().map(|(_, slot)| slot)
    }

    fn slice(&self, _state: &RunState<'_>, _slot: Slot) -> Ticks {
        1
    }

    fn preempted(&mut self, state: &RunState<'_>, slot: Slot) {
        self.ready.insert((state.remaining(slot), slot));
    }
}
