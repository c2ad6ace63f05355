/*!
 * Process Input Validation
 * Boundary checks run before any policy sees the workload
 */

use super::types::{Process, ProcessSpec};
use crate::core::errors::{SchedError, SchedResult};
use crate::core::limits::SimulationConfig;
use crate::core::types::{Priority, Ticks};
use std::collections::HashSet;

/// Convert one raw table entry into a validated record
pub(super) fn validate_spec(id: &str, spec: &ProcessSpec) -> SchedResult<Process> {
    validate_id(id)?;

    if spec.arrival < 0 {
        return Err(SchedError::invalid(
            field(id, "arrival"),
            format!("must be non-negative, got {}", spec.arrival),
        ));
    }

    if spec.burst <= 0 {
        return Err(SchedError::invalid(
            field(id, "burst"),
            format!("must be positive, got {}", spec.burst),
        ));
    }

    let priority = match spec.priority {
        Some(raw) => Some(Priority::try_from(raw).map_err(|_| {
            SchedError::invalid(
                field(id, "priority"),
                format!(
                    "must lie within {}..={}, got {}",
                    Priority::MIN,
                    Priority::MAX,
                    raw
                ),
            )
        })?),
        None => None,
    };

    Ok(Process {
        id: id.to_string(),
        arrival: spec.arrival as Ticks,
        burst: spec.burst as Ticks,
        priority,
    })
}

/// Whole-workload checks: non-empty, unique ids, positive bursts, bounded horizon
pub(super) fn validate_processes(
    processes: &[Process],
    config: &SimulationConfig,
) -> SchedResult<()> {
    if processes.is_empty() {
        return Err(SchedError::invalid(
            "processes",
            "at least one process is required",
        ));
    }

    if processes.len() > config.max_processes {
        return Err(SchedError::invalid(
            "processes",
            format!(
                "{} processes exceeds the limit of {}",
                processes.len(),
                config.max_processes
            ),
        ));
    }

    let mut seen = HashSet::with_capacity(processes.len());
    for process in processes {
        validate_id(&process.id)?;
        if !seen.insert(process.id.as_str()) {
            return Err(SchedError::invalid(
                format!("processes.{}", process.id),
                "duplicate process id",
            ));
        }
        if process.burst == 0 {
            return Err(SchedError::invalid(
                field(&process.id, "burst"),
                "must be positive, got 0",
            ));
        }
    }

    validate_horizon(processes, config.max_horizon)
}

/// Every process must carry a priority for priority scheduling
pub(super) fn validate_priorities(processes: &[Process]) -> SchedResult<()> {
    match processes.iter().find(|p| p.priority.is_none()) {
        Some(process) => Err(SchedError::invalid(
            field(&process.id, "priority"),
            "required by priority scheduling",
        )),
        None => Ok(()),
    }
}

fn validate_id(id: &str) -> SchedResult<()> {
    if id.trim().is_empty() {
        return Err(SchedError::invalid(
            "processes",
            "process id cannot be empty",
        ));
    }
    Ok(())
}

/// The processor is never idle while work is pending, so no run can finish
/// later than the last arrival plus the total demand.
fn validate_horizon(processes: &[Process], max_horizon: Ticks) -> SchedResult<()> {
    let last_arrival = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
    let worst_case = processes
        .iter()
        .try_fold(last_arrival, |acc, p| acc.checked_add(p.burst));

    match worst_case {
        Some(horizon) if horizon <= max_horizon => Ok(()),
        Some(horizon) => Err(SchedError::invalid(
            "horizon",
            format!(
                "workload may run until tick {}, beyond the limit of {}",
                horizon, max_horizon
            ),
        )),
        None => Err(SchedError::invalid(
            "horizon",
            "arrival plus total burst overflows",
        )),
    }
}

/// Dotted path of one process attribute, as reported in `InvalidInput`
#[inline]
pub(super) fn field(id: &str, name: &str) -> String {
    format!("processes.{}.{}", id, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_rejects_negative_arrival() {
        let err = validate_spec("P1", &ProcessSpec::new(-1, 3)).unwrap_err();
        assert_eq!(err.field(), Some("processes.P1.arrival"));
    }

    #[test]
    fn test_spec_rejects_zero_burst() {
        let err = validate_spec("P1", &ProcessSpec::new(0, 0)).unwrap_err();
        assert_eq!(err.field(), Some("processes.P1.burst"));
    }

    #[test]
    fn test_spec_rejects_priority_out_of_range() {
        let spec = ProcessSpec::new(0, 1).with_priority(i64::from(i32::MAX) + 1);
        let err = validate_spec("P1", &spec).unwrap_err();
        assert_eq!(err.field(), Some("processes.P1.priority"));
    }

    #[test]
    fn test_spec_rejects_blank_id() {
        assert!(validate_spec("  ", &ProcessSpec::new(0, 1)).is_err());
    }

    #[test]
    fn test_duplicate_ids() {
        let processes = vec![Process::new("A", 0, 1), Process::new("A", 1, 1)];
        let err = validate_processes(&processes, &SimulationConfig::default()).unwrap_err();
        assert_eq!(err.field(), Some("processes.A"));
    }

    #[test]
    fn test_horizon_limit() {
        let processes = vec![Process::new("A", 90, 5), Process::new("B", 0, 10)];
        let config = SimulationConfig::default().with_max_horizon(100);
        let err = validate_processes(&processes, &config).unwrap_err();
        assert_eq!(err.field(), Some("horizon"));

        let config = SimulationConfig::default().with_max_horizon(105);
        assert!(validate_processes(&processes, &config).is_ok());
    }

    #[test]
    fn test_horizon_overflow() {
        let processes = vec![Process::new("A", u64::MAX, 5)];
        let err = validate_processes(&processes, &SimulationConfig::default()).unwrap_err();
        assert_eq!(err.field(), Some("horizon"));
    }

    #[test]
    fn test_missing_priority() {
        let processes = vec![
            Process::new("A", 0, 1).with_priority(1),
            Process::new("B", 0, 1),
        ];
        let err = validate_priorities(&processes).unwrap_err();
        assert_eq!(err.field(), Some("processes.B.priority"));
    }
}
