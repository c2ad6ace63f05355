/*!
 * Run State
 * Per-call working state for one simulation, indexed by slot
 */

use crate::core::types::{ProcessIndex, Ticks};
use crate::process::Process;
use crate::simulation::DispatchEvent;
use tracing::{debug, trace};

/// Position of a process in a discipline's working order
pub type Slot = usize;

/// Mutable state owned by a single simulation call
///
/// All invariants on dispatch live here: a slot never runs before its
/// arrival and never receives more than its remaining burst.
pub struct RunState<'a> {
    processes: Vec<&'a Process>,
    order: Vec<ProcessIndex>,
    by_arrival: Vec<Slot>,
    remaining: Vec<Ticks>,
    completion: Vec<Option<Ticks>>,
    completed: usize,
    time: Ticks,
    gantt: Vec<DispatchEvent>,
}

impl<'a> RunState<'a> {
    /// `order` maps each slot to an index in `processes`
    pub(super) fn new(processes: &'a [Process], order: Vec<ProcessIndex>) -> Self {
        debug_assert_eq!(order.len(), processes.len());

        let working: Vec<&Process> = order.iter().map(|&i| &processes[i]).collect();
        let remaining = working.iter().map(|p| p.burst).collect();
        let len = working.len();

        let mut by_arrival: Vec<Slot> = (0..len).collect();
        by_arrival.sort_by_key(|&slot| working[slot].arrival);

        Self {
            processes: working,
            order,
            by_arrival,
            remaining,
            completion: vec![None; len],
            completed: 0,
            time: 0,
            gantt: Vec::new(),
        }
    }

    #[inline(always)]
    pub fn now(&self) -> Ticks {
        self.time
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    #[inline]
    pub fn process(&self, slot: Slot) -> &Process {
        self.processes[slot]
    }

    #[inline]
    pub fn remaining(&self, slot: Slot) -> Ticks {
        self.remaining[slot]
    }

    #[inline]
    pub fn has_arrived(&self, slot: Slot) -> bool {
        self.processes[slot].arrival <= self.time
    }

    #[inline]
    pub fn is_finished(&self, slot: Slot) -> bool {
        self.remaining[slot] == 0
    }

    /// Arrived and not yet finished
    #[inline]
    pub fn is_ready(&self, slot: Slot) -> bool {
        self.has_arrived(slot) && !self.is_finished(slot)
    }

    /// Every slot sorted by arrival, equal arrivals in slot order
    #[inline]
    pub fn arrival_order(&self) -> &[Slot] {
        &self.by_arrival
    }

    #[inline]
    pub fn all_finished(&self) -> bool {
        self.completed == self.len()
    }

    /// Earliest arrival still in the future
    pub fn next_arrival(&self) -> Option<Ticks> {
        let pending = self.by_arrival.partition_point(|&slot| self.has_arrived(slot));
        self.by_arrival
            .get(pending)
            .map(|&slot| self.processes[slot].arrival)
    }

    /// Jump an idle processor forward to the next arrival
    ///
    /// Equivalent to ticking one unit at a time, since nothing can become
    /// ready in between. Returns false when no arrival is pending.
    pub(super) fn idle_until_next_arrival(&mut self) -> bool {
        match self.next_arrival() {
            Some(arrival) => {
                trace!(from = self.time, to = arrival, "processor idle");
                self.time = arrival;
                true
            }
            None => false,
        }
    }

    /// Run `slot` for up to `slice` ticks starting now
    ///
    /// The slice is clamped to `1..=remaining`. Returns the ticks consumed.
    pub(super) fn dispatch(&mut self, slot: Slot, slice: Ticks) -> Ticks {
        debug_assert!(self.is_ready(slot), "dispatch of slot {} that is not ready", slot);

        let ran = slice.clamp(1, self.remaining[slot]);
        let process = self.processes[slot];

        debug!(
            process = %process.id,
            start = self.time,
            duration = ran,
            "dispatch"
        );

        self.gantt.push(DispatchEvent {
            process: process.id.clone(),
            start: self.time,
            duration: ran,
        });

        self.time += ran;
        self.remaining[slot] -= ran;

        if self.remaining[slot] == 0 {
            self.completion[slot] = Some(self.time);
            self.completed += 1;
        }

        ran
    }

    /// Dispatch trace and completion times in the caller's original order
    pub(super) fn finish(self) -> (Vec<DispatchEvent>, Vec<Ticks>) {
        let mut completion = vec![0; self.len()];
        for (slot, &index) in self.order.iter().enumerate() {
            completion[index] = self.completion[slot].unwrap_or(0);
        }
        (self.gantt, completion)
    }
}
