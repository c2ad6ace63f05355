/*!
 * Core Types
 * Common types used across the simulator
 */

/// Discrete simulated time, in ticks since the start of a run
pub type Ticks = u64;

/// Scheduling priority (lower value is more important)
pub type Priority = i32;

/// Position of a process in the caller's input order
pub type ProcessIndex = usize;
