/*!
 * Simulation Request
 * Boundary between callers and the engine: parse, validate, run
 */

use super::report::SimulationReport;
use crate::core::errors::{SchedError, SchedResult};
use crate::core::limits::SimulationConfig;
use crate::process::table::{decode_integer, RawTable};
use crate::process::{ProcessRegistry, ProcessTable};
use crate::scheduler::{simulate, Policy};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// A caller's request: policy name, optional quantum, ordered process table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationRequest {
    pub policy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_quantum: Option<i64>,
    pub processes: ProcessTable,
}

impl SimulationRequest {
    pub fn new(policy: impl Into<String>, processes: ProcessTable) -> Self {
        Self {
            policy: policy.into(),
            time_quantum: None,
            processes,
        }
    }

    #[must_use]
    pub fn with_time_quantum(mut self, quantum: i64) -> Self {
        self.time_quantum = Some(quantum);
        self
    }

    /// Parse a JSON request
    ///
    /// Wrongly typed fields are reported by path (`policy`, `time_quantum`,
    /// `processes.<id>.<attribute>`); anything else unreadable is `request`.
    pub fn from_json(json: &str) -> SchedResult<Self> {
        serde_json::from_str::<RawRequest>(json)
            .map_err(malformed)?
            .decode()
    }

    /// Same as [`from_json`](Self::from_json) for an already parsed document
    pub fn from_value(value: Value) -> SchedResult<Self> {
        serde_json::from_value::<RawRequest>(value)
            .map_err(malformed)?
            .decode()
    }

    /// Resolve the policy, then validate the process table
    ///
    /// The policy is checked first so an unknown name is reported without
    /// looking at the workload.
    pub fn validate(&self, config: &SimulationConfig) -> SchedResult<(ProcessRegistry, Policy)> {
        let policy = Policy::parse(&self.policy, self.time_quantum)?;
        let registry = ProcessRegistry::from_table(&self.processes, config)?;
        Ok((registry, policy))
    }

    /// Validate and simulate, producing a report in caller order
    pub fn run(&self, config: &SimulationConfig) -> SchedResult<SimulationReport> {
        self.try_run(config).map_err(|e| {
            warn!(error = %e, "Rejected simulation request");
            e
        })
    }

    fn try_run(&self, config: &SimulationConfig) -> SchedResult<SimulationReport> {
        let (registry, policy) = self.validate(config)?;
        let result = simulate(&registry, policy)?;
        Ok(SimulationReport::new(&registry, &result))
    }
}

/// Request whose field types are checked after parsing
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRequest {
    policy: Value,
    #[serde(default)]
    time_quantum: Option<Value>,
    processes: RawTable,
}

impl RawRequest {
    fn decode(self) -> SchedResult<SimulationRequest> {
        let policy = match self.policy {
            Value::String(name) => name,
            other => {
                return Err(SchedError::invalid(
                    "policy",
                    format!("expected a policy name, got {}", other),
                ))
            }
        };

        let time_quantum = match self.time_quantum {
            None | Some(Value::Null) => None,
            Some(value) => Some(decode_integer("time_quantum", &value)?),
        };

        Ok(SimulationRequest {
            policy,
            time_quantum,
            processes: self.processes.decode()?,
        })
    }
}

fn malformed(err: serde_json::Error) -> SchedError {
    SchedError::invalid("request", err.to_string())
}
