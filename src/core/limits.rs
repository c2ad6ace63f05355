/*!
 * Simulation Limits and Configuration
 *
 * Bounds applied at the input boundary so that no accepted workload can
 * drive the engine into an unbounded run.
 */

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::types::Ticks;

/// Default simulated-time horizon (1M ticks)
/// SRTF records one dispatch event per tick, so this also bounds trace size
pub const DEFAULT_MAX_HORIZON: Ticks = 1_000_000;

/// Default maximum number of processes per run
pub const DEFAULT_MAX_PROCESSES: usize = 10_000;

/// Largest accepted Round Robin quantum
pub const MAX_TIME_QUANTUM: Ticks = DEFAULT_MAX_HORIZON;

/// Environment override for the horizon
pub const ENV_MAX_HORIZON: &str = "SCHED_MAX_HORIZON";

/// Environment override for the process cap
pub const ENV_MAX_PROCESSES: &str = "SCHED_MAX_PROCESSES";

/// Per-run limits checked before the engine is invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Latest completion time any accepted workload may reach
    pub max_horizon: Ticks,
    pub max_processes: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_horizon: DEFAULT_MAX_HORIZON,
            max_processes: DEFAULT_MAX_PROCESSES,
        }
    }
}

impl SimulationConfig {
    /// Defaults overridden by `SCHED_MAX_HORIZON` / `SCHED_MAX_PROCESSES`
    ///
    /// Unparseable or zero values are ignored.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_horizon: read_env(ENV_MAX_HORIZON).unwrap_or(defaults.max_horizon),
            max_processes: read_env(ENV_MAX_PROCESSES)
                .map(|v| v as usize)
                .unwrap_or(defaults.max_processes),
        }
    }

    #[must_use]
    pub fn with_max_horizon(mut self, max_horizon: Ticks) -> Self {
        self.max_horizon = max_horizon;
        self
    }

    #[must_use]
    pub fn with_max_processes(mut self, max_processes: usize) -> Self {
        self.max_processes = max_processes;
        self
    }
}

fn read_env(key: &str) -> Option<u64> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Some(value),
        _ => {
            warn!(key = key, value = %raw, "Ignoring invalid limit override");
            None
        }
    }
}
