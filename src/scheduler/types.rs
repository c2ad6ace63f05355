/*!
 * Scheduler Types
 * Policy variants and time quantum
 */

use crate::core::errors::{SchedError, SchedResult};
use crate::core::limits::MAX_TIME_QUANTUM;
use crate::core::types::Ticks;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Round Robin time slice, in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Ticks);

impl TimeQuantum {
    /// Create a quantum, rejecting non-positive or oversized values
    pub fn new(ticks: i64) -> SchedResult<Self> {
        if ticks <= 0 {
            return Err(SchedError::invalid(
                "time_quantum",
                format!("must be positive, got {}", ticks),
            ));
        }
        if ticks as u64 > MAX_TIME_QUANTUM {
            return Err(SchedError::invalid(
                "time_quantum",
                format!("must not exceed {}, got {}", MAX_TIME_QUANTUM, ticks),
            ));
        }
        Ok(Self(ticks as Ticks))
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Ticks {
        self.0
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = i64::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// Scheduling policy
///
/// Closed set of variants run through one simulation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// First-come-first-serve, non-preemptive
    Fcfs,
    /// Lowest priority value first, non-preemptive
    Priority,
    /// FIFO ready queue with a fixed time slice
    RoundRobin(TimeQuantum),
    /// Shortest remaining time first, re-evaluated every tick
    Srtf,
}

impl Policy {
    /// Resolve a policy by name
    ///
    /// Accepts short names (`fcfs`, `rr`), snake case, and the display labels
    /// (`Round Robin`, `Shortest Remaining Time First`), case-insensitively.
    /// `quantum` is required for Round Robin and ignored otherwise.
    pub fn parse(name: &str, quantum: Option<i64>) -> SchedResult<Self> {
        let normalized: String = name
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "fcfs" | "first_come_first_serve" | "first_come_first_served" => Ok(Self::Fcfs),
            "priority" | "prio" | "priority_scheduling" => Ok(Self::Priority),
            "round_robin" | "roundrobin" | "rr" => {
                let ticks = quantum.ok_or_else(|| {
                    SchedError::invalid("time_quantum", "required by round robin")
                })?;
                Ok(Self::RoundRobin(TimeQuantum::new(ticks)?))
            }
            "srtf" | "shortest_remaining_time_first" => Ok(Self::Srtf),
            _ => Err(SchedError::UnsupportedPolicy(name.to_string())),
        }
    }

    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Priority => "priority",
            Self::RoundRobin(_) => "round_robin",
            Self::Srtf => "srtf",
        }
    }

    /// Whether a running process can lose the processor before finishing
    #[inline]
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin(_) | Self::Srtf)
    }

    #[inline]
    pub const fn time_quantum(&self) -> Option<TimeQuantum> {
        match self {
            Self::RoundRobin(quantum) => Some(*quantum),
            _ => None,
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoundRobin(quantum) => write!(f, "round_robin(q={})", quantum.ticks()),
            other => f.write_str(other.as_str()),
        }
    }
}

impl Serialize for Policy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
