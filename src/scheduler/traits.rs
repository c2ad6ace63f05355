/*!
 * Scheduler Traits
 * The seam between the shared simulation loop and each policy
 */

use super::arena::{RunState, Slot};
use crate::core::types::{ProcessIndex, Ticks};
use crate::process::Process;

/// One scheduling discipline driven by the simulation loop
///
/// The loop owns time, remaining burst, and the trace. A discipline only
/// decides who runs next and for how long; arrival gating, burst clamping,
/// and termination are enforced by the loop.
pub trait Discipline {
    /// Working list order, as indices into the caller's process list
    ///
    /// Slots handed to the other methods are positions in this order.
    fn order(&self, processes: &[Process]) -> Vec<ProcessIndex> {
        (0..processes.len()).collect()
    }

    /// Observe newly arrived processes at a decision point
    fn admit(&mut self, _state: &RunState<'_>) {}

    /// Pick the next slot to run, or `None` if nothing is ready
    fn select(&mut self, state: &RunState<'_>) -> Option<Slot>;

    /// Requested run length for the selected slot
    fn slice(&self, state: &RunState<'_>, slot: Slot) -> Ticks;

    /// The selected slot ran its slice and still has work left
    fn preempted(&mut self, _state: &RunState<'_>, _slot: Slot) {}
}
