/*!
 * Simulation Engine
 * Single loop shared by every scheduling discipline
 */

use super::arena::RunState;
use super::policies::{Fcfs, PriorityFirst, RoundRobin, ShortestRemaining};
use super::traits::Discipline;
use super::types::Policy;
use crate::core::errors::SchedResult;
use crate::metrics::calculate_metrics;
use crate::process::ProcessRegistry;
use crate::simulation::SimulationResult;
use tracing::{info, info_span};
use uuid::Uuid;

/// Simulate `registry` under `policy`
///
/// Policy-specific requirements (priorities for priority scheduling) are
/// checked here; everything else was validated when the registry was built.
/// Once checks pass the run itself cannot fail.
pub fn simulate(registry: &ProcessRegistry, policy: Policy) -> SchedResult<SimulationResult> {
    if policy == Policy::Priority {
        registry.require_priorities()?;
    }

    let span = info_span!(
        "simulation",
        run_id = %Uuid::new_v4(),
        policy = policy.as_str()
    );
    let _guard = span.enter();

    info!(processes = registry.len(), policy = %policy, "Simulation started");

    let result = match policy {
        Policy::Fcfs => run(Fcfs::new(), registry, policy),
        Policy::Priority => run(PriorityFirst::new(), registry, policy),
        Policy::RoundRobin(quantum) => {
            run(RoundRobin::new(quantum, registry.len()), registry, policy)
        }
        Policy::Srtf => run(ShortestRemaining::new(), registry, policy),
    };

    info!(
        dispatches = result.gantt.len(),
        makespan = result.makespan(),
        total_waiting = result.metrics.total_waiting(),
        "Simulation finished"
    );

    Ok(result)
}

/// Drive one discipline until every process has received its full burst
///
/// Each iteration either dispatches a slice, which strictly reduces total
/// remaining burst, or jumps time to a pending arrival.
pub(crate) fn run<D: Discipline>(
    mut discipline: D,
    registry: &ProcessRegistry,
    policy: Policy,
) -> SimulationResult {
    let processes = registry.processes();
    let order = discipline.order(processes);
    let mut state = RunState::new(processes, order);

    while !state.all_finished() {
        discipline.admit(&state);

        let Some(slot) = discipline.select(&state) else {
            // Declining ready work with no arrival pending would spin forever
            let advanced = state.idle_until_next_arrival();
            debug_assert!(advanced, "{} stalled at tick {}", policy, state.now());
            if !advanced {
                break;
            }
            continue;
        };

        let slice = discipline.slice(&state, slot);
        state.dispatch(slot, slice);

        if !state.is_finished(slot) {
            discipline.preempted(&state, slot);
        }
    }

    let (gantt, completion) = state.finish();
    let metrics = calculate_metrics(processes, &completion);

    SimulationResult {
        policy,
        gantt,
        completion,
        metrics,
    }
}
