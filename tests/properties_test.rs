/*!
 * Scheduling Property Tests
 * Invariants that must hold for every valid workload
 */

use cpu_sched_sim::{simulate, Policy, Process, ProcessRegistry, SimulationResult, TimeQuantum};
use proptest::prelude::*;
use std::collections::{HashMap, VecDeque};

fn workload() -> impl Strategy<Value = Vec<Process>> {
    prop::collection::vec((0u64..20, 1u64..10, -5i32..5), 1..8).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| {
                Process::new(format!("P{}", i), arrival, burst).with_priority(priority)
            })
            .collect()
    })
}

fn all_policies(quantum: i64) -> Vec<Policy> {
    vec![
        Policy::Fcfs,
        Policy::Priority,
        Policy::RoundRobin(TimeQuantum::new(quantum).unwrap()),
        Policy::Srtf,
    ]
}

fn run(processes: &[Process], policy: Policy) -> SimulationResult {
    let registry = ProcessRegistry::new(processes.to_vec()).unwrap();
    simulate(&registry, policy).unwrap()
}

proptest! {
    #[test]
    fn completion_never_precedes_arrival_plus_burst(processes in workload(), q in 1i64..6) {
        for policy in all_policies(q) {
            let result = run(&processes, policy);
            for (process, &done) in processes.iter().zip(&result.completion) {
                prop_assert!(done >= process.earliest_completion(), "{} {:?}", policy, process);
            }
        }
    }

    #[test]
    fn waiting_time_is_never_negative(processes in workload(), q in 1i64..6) {
        for policy in all_policies(q) {
            let result = run(&processes, policy);
            prop_assert!(result.metrics.waiting.iter().all(|&w| w >= 0), "{}", policy);
        }
    }

    #[test]
    fn every_process_receives_exactly_its_burst(processes in workload(), q in 1i64..6) {
        for policy in all_policies(q) {
            let result = run(&processes, policy);
            for process in &processes {
                prop_assert_eq!(result.service_time(&process.id), process.burst);
            }
        }
    }

    #[test]
    fn dispatches_respect_arrival_and_never_overlap(processes in workload(), q in 1i64..6) {
        let arrivals: HashMap<&str, u64> =
            processes.iter().map(|p| (p.id.as_str(), p.arrival)).collect();

        for policy in all_policies(q) {
            let result = run(&processes, policy);
            let mut busy_until = 0;
            for event in &result.gantt {
                prop_assert!(event.duration > 0);
                prop_assert!(event.start >= arrivals[event.process.as_str()]);
                prop_assert!(event.start >= busy_until);
                busy_until = event.end();
            }
        }
    }

    #[test]
    fn fcfs_preserves_arrival_order(processes in workload()) {
        let result = run(&processes, Policy::Fcfs);
        for a in &processes {
            for b in &processes {
                if a.arrival < b.arrival {
                    prop_assert!(result.first_dispatch(&a.id) <= result.first_dispatch(&b.id));
                }
            }
        }
    }

    #[test]
    fn non_preemptive_policies_dispatch_once(processes in workload()) {
        for policy in [Policy::Fcfs, Policy::Priority] {
            let result = run(&processes, policy);
            prop_assert_eq!(result.gantt.len(), processes.len());
        }
    }

    #[test]
    fn srtf_waits_no_longer_than_fcfs(processes in workload()) {
        let srtf = run(&processes, Policy::Srtf);
        let fcfs = run(&processes, Policy::Fcfs);
        prop_assert!(srtf.metrics.total_waiting() <= fcfs.metrics.total_waiting());
    }

    #[test]
    fn round_robin_bounded_waiting(processes in workload(), q in 1i64..6) {
        let quantum = TimeQuantum::new(q).unwrap();
        let result = run(&processes, Policy::RoundRobin(quantum));
        let bound = (processes.len() as u64 - 1) * quantum.ticks();

        for process in &processes {
            let mut previous_end: Option<u64> = None;
            for event in result.gantt.iter().filter(|e| e.process == process.id) {
                prop_assert!(event.duration <= quantum.ticks());
                if let Some(end) = previous_end {
                    prop_assert!(event.start - end <= bound, "{} waited {}", process.id, event.start - end);
                }
                previous_end = Some(event.end());
            }
        }
    }

    #[test]
    fn engine_matches_tick_by_tick_model(processes in workload(), q in 1i64..6) {
        let quantum = TimeQuantum::new(q).unwrap();
        let cases = [
            (Policy::Fcfs, reference::fcfs(&processes)),
            (Policy::Priority, reference::priority(&processes)),
            (Policy::RoundRobin(quantum), reference::round_robin(&processes, quantum.ticks())),
            (Policy::Srtf, reference::srtf(&processes)),
        ];

        for (policy, (gantt, completion)) in cases {
            let result = run(&processes, policy);
            let starts: Vec<(String, u64)> =
                result.gantt.iter().map(|e| (e.process.clone(), e.start)).collect();
            prop_assert_eq!(starts, gantt, "{}", policy);
            prop_assert_eq!(&result.completion, &completion, "{}", policy);
        }
    }
}

/// Direct unit-step simulations, one routine per policy
mod reference {
    use super::*;

    type Trace = (Vec<(String, u64)>, Vec<u64>);

    fn sorted_by<K: Ord>(processes: &[Process], key: impl Fn(&Process) -> K) -> Vec<usize> {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| key(&processes[i]));
        order
    }

    pub fn fcfs(processes: &[Process]) -> Trace {
        let mut gantt = Vec::new();
        let mut completion = vec![0; processes.len()];
        let mut time: u64 = 0;

        for i in sorted_by(processes, |p| p.arrival) {
            let p = &processes[i];
            time = time.max(p.arrival);
            gantt.push((p.id.clone(), time));
            time += p.burst;
            completion[i] = time;
        }
        (gantt, completion)
    }

    pub fn priority(processes: &[Process]) -> Trace {
        let order = sorted_by(processes, |p| (p.arrival, p.priority));
        let mut visited = vec![false; processes.len()];
        let mut gantt = Vec::new();
        let mut completion = vec![0; processes.len()];
        let mut time: u64 = 0;
        let mut done = 0;

        while done < processes.len() {
            let mut pick: Option<usize> = None;
            for &i in &order {
                if visited[i] || processes[i].arrival > time {
                    continue;
                }
                if pick.map_or(true, |j| processes[i].priority < processes[j].priority) {
                    pick = Some(i);
                }
            }
            let Some(i) = pick else {
                time += 1;
                continue;
            };
            gantt.push((processes[i].id.clone(), time));
            time += processes[i].burst;
            completion[i] = time;
            visited[i] = true;
            done += 1;
        }
        (gantt, completion)
    }

    pub fn round_robin(processes: &[Process], quantum: u64) -> Trace {
        let n = processes.len();
        let mut remaining: Vec<u64> = processes.iter().map(|p| p.burst).collect();
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut gantt = Vec::new();
        let mut completion = vec![0; n];
        let mut time: u64 = 0;

        let admit = |queue: &mut VecDeque<usize>, remaining: &[u64], time: u64, skip: Option<usize>| {
            for i in 0..n {
                if Some(i) != skip
                    && processes[i].arrival <= time
                    && remaining[i] > 0
                    && !queue.contains(&i)
                {
                    queue.push_back(i);
                }
            }
        };

        while remaining.iter().any(|&r| r > 0) {
            admit(&mut queue, &remaining, time, None);
            let Some(i) = queue.pop_front() else {
                time += 1;
                continue;
            };
            gantt.push((processes[i].id.clone(), time));
            let ran = remaining[i].min(quantum);
            time += ran;
            remaining[i] -= ran;
            if remaining[i] == 0 {
                completion[i] = time;
            } else {
                admit(&mut queue, &remaining, time, Some(i));
                queue.push_back(i);
            }
        }
        (gantt, completion)
    }

    pub fn srtf(processes: &[Process]) -> Trace {
        let order = sorted_by(processes, |p| p.arrival);
        let mut remaining: Vec<u64> = processes.iter().map(|p| p.burst).collect();
        let mut gantt = Vec::new();
        let mut completion = vec![0; processes.len()];
        let mut time: u64 = 0;
        let mut done = 0;

        while done < processes.len() {
            let mut pick: Option<usize> = None;
            for &i in &order {
                if processes[i].arrival <= time
                    && remaining[i] > 0
                    && pick.map_or(true, |j| remaining[i] < remaining[j])
                {
                    pick = Some(i);
                }
            }
            let Some(i) = pick else {
                time += 1;
                continue;
            };
            gantt.push((processes[i].id.clone(), time));
            remaining[i] -= 1;
            time += 1;
            if remaining[i] == 0 {
                completion[i] = time;
                done += 1;
            }
        }
        (gantt, completion)
    }
}
