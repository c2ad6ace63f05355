/*!
 * Process Types
 * Input records for a simulation run
 */

use crate::core::types::{Priority, Ticks};
use serde::{Deserialize, Serialize};

/// Process attributes as supplied by the caller, before validation
///
/// Fields are wide signed integers so that out-of-range values reach
/// validation and are reported against the field that carried them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessSpec {
    pub arrival: i64,
    pub burst: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

impl ProcessSpec {
    #[inline]
    #[must_use]
    pub const fn new(arrival: i64, burst: i64) -> Self {
        Self {
            arrival,
            burst,
            priority: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// A validated, immutable process record
///
/// `arrival >= 0` holds by construction; `burst > 0` and id uniqueness are
/// enforced when the record enters a [`ProcessRegistry`](super::ProcessRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Display label, unique within a run
    pub id: String,
    pub arrival: Ticks,
    pub burst: Ticks,
    /// Lower value means higher priority
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl Process {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, arrival: Ticks, burst: Ticks) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Earliest possible completion: arrival plus full burst
    #[inline(always)]
    #[must_use]
    pub const fn earliest_completion(&self) -> Ticks {
        self.arrival + self.burst
    }
}
