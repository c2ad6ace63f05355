/*!
 * Scheduling Disciplines
 * One `Discipline` implementation per policy variant
 */

mod fcfs;
mod priority;
mod round_robin;
mod srtf;

pub use fcfs::Fcfs;
pub use priority::PriorityFirst;
pub use round_robin::RoundRobin;
pub use srtf::ShortestRemaining;

use crate::core::types::ProcessIndex;
use crate::process::Process;
use crate::scheduler::arena::{RunState, Slot};

/// Caller indices stably sorted by `key`; equal keys keep caller order
pub(super) fn stable_order_by<K, F>(processes: &[Process], key: F) -> Vec<ProcessIndex>
where
    K: Ord,
    F: Fn(&Process) -> K,
{
    let mut order: Vec<ProcessIndex> = (0..processes.len()).collect();
    order.sort_by_key(|&i| key(&processes[i]));
    order
}

/// Cursor over [`RunState::arrival_order`] that hands out each slot once
///
/// Time only moves forward, so every call resumes where the last one stopped.
#[derive(Debug, Default)]
pub(super) struct Arrivals {
    next: usize,
}

impl Arrivals {
    /// Slots that arrived since the previous call, in arrival order
    pub(super) fn take<'s>(&mut self, state: &'s RunState<'_>) -> &'s [Slot] {
        let order = state.arrival_order();
        let start = self.next;
        while self.next < order.len() && state.has_arrived(order[self.next]) {
            self.next += 1;
        }
        &order[start..self.next]
    }
}
