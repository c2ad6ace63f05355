/*!
 * Round Robin
 */

use super::Arrivals;
use crate::core::types::Ticks;
use crate::scheduler::arena::{RunState, Slot};
use crate::scheduler::traits::Discipline;
use crate::scheduler::types::TimeQuantum;
use std::collections::VecDeque;

/// FIFO ready queue with a fixed quantum, in caller order
///
/// After a slice, processes that arrived meanwhile are queued before the
/// preempted process is put back at the tail.
#[derive(Debug)]
pub struct RoundRobin {
    quantum: TimeQuantum,
    arrivals: Arrivals,
    queue: VecDeque<Slot>,
}

impl RoundRobin {
    pub fn new(quantum: TimeQuantum, len: usize) -> Self {
        Self {
            quantum,
            arrivals: Arrivals::default(),
            queue: VecDeque::with_capacity(len),
        }
    }
}

impl Discipline for RoundRobin {
    /// Queue newcomers; a batch arriving together is queued in caller order
    fn admit(&mut self, state: &RunState<'_>) {
        let arrived = self.arrivals.take(state);
        if arrived.is_empty() {
            return;
        }
        let mut batch = arrived.to_vec();
        batch.sort_unstable();
        self.queue.extend(batch);
    }

    fn select(&mut self, _state: &RunState<'_>) -> Option<Slot> {
        self.queue.pop_front()
    }

    fn slice(&self, state: &RunState<'_>, slot: Slot) -> Ticks {
        self.quantum.ticks().min(state.remaining(slot))
    }

    fn preempted(&mut self, state: &RunState<'_>, slot: Slot) {
        self.admit(state);
        self.queue.push_back(slot);
    }
}
