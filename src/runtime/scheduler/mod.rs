//! Two-task cooperative scheduler
//!
//! Each round gives task 0 and then task 1 a turn. A turn runs the task until
//! it blocks on `rcv` or halts. The run ends when both tasks have halted, when
//! both are blocked with empty queues (deadlock), or when one has halted and
//! the other is blocked with an empty queue (starved).
//!
//! `Starved` deliberately departs from a loop that only stops on "both halted"
//! or "both blocked": a task blocked forever behind a halted partner would
//! otherwise keep the loop spinning.

pub mod queue;
pub mod task;

pub use queue::MessageQueue;
pub use task::{Task, TaskId, TaskState};

use serde::Serialize;
use std::fmt;
use tracing::{debug, info, trace};

use crate::util::config::DEFAULT_QUEUE_CAPACITY;
use crate::vm::errors::{VMError, VMResult};
use crate::vm::executor::{execute, ExecResult};
use crate::vm::instructions::{fetch, Instruction};

/// Scheduler configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Maximum pending messages per task queue.
    pub queue_capacity: usize,
    /// Total instruction budget across both tasks; `None` is unbounded.
    pub max_steps: Option<u64>,
    /// Emit one trace event per executed instruction.
    pub trace_execution: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            max_steps: None,
            trace_execution: false,
        }
    }
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "lowercase")]
pub enum Termination {
    /// Both tasks halted.
    Completed,
    /// Both tasks blocked on `rcv` with empty queues.
    Deadlock,
    /// `task` is blocked with an empty queue and its partner has halted.
    Starved { task: TaskId },
}

impl fmt::Display for Termination {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Termination::Completed => write!(f, "both tasks halted"),
            Termination::Deadlock => write!(f, "deadlock"),
            Termination::Starved { task } => write!(f, "{} starved", task),
        }
    }
}

/// Result of a complete run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Why the run stopped.
    pub termination: Termination,
    /// Values sent by each task, indexed by task id.
    pub sent: [u64; 2],
    /// Instructions executed across both tasks.
    pub steps: u64,
    /// Scheduling rounds taken.
    pub rounds: u64,
}

impl RunReport {
    /// Values sent by task 1, the run's answer.
    #[inline]
    pub fn answer(&self) -> u64 {
        self.sent[TaskId::SECOND.inner()]
    }
}

/// Drives two tasks over a shared program.
#[derive(Debug)]
pub struct Scheduler<'p> {
    program: &'p [Instruction],
    config: SchedulerConfig,
    steps: u64,
}

impl<'p> Scheduler<'p> {
    /// Create a scheduler with default configuration.
    pub fn new(program: &'p [Instruction]) -> Self {
        Self::with_config(program, SchedulerConfig::default())
    }

    /// Create a scheduler with custom configuration.
    pub fn with_config(
        program: &'p [Instruction],
        config: SchedulerConfig,
    ) -> Self {
        Self {
            program,
            config,
            steps: 0,
        }
    }

    /// Create the task pair sized for this scheduler's configuration.
    pub fn spawn_tasks(&self) -> [Task; 2] {
        Task::pair(self.config.queue_capacity)
    }

    /// Alternate both tasks until they halt, deadlock or starve.
    pub fn run_until_quiescent(
        &mut self,
        tasks: &mut [Task; 2],
    ) -> VMResult<RunReport> {
        let mut rounds: u64 = 0;

        let termination = loop {
            rounds += 1;
            for idx in 0..2 {
                let [first, second] = &mut *tasks;
                let (current, other) = if idx == 0 {
                    (first, second)
                } else {
                    (second, first)
                };
                if current.state == TaskState::Halted {
                    continue;
                }
                current.state = self.run_task(current, &mut other.queue)?;
                debug!(
                    "{} yielded as {:?} at ip {} (round {})",
                    current.id, current.state, current.ip, rounds
                );
            }

            if let Some(termination) = check_termination(tasks) {
                break termination;
            }
        };

        let report = RunReport {
            termination,
            sent: [tasks[0].sent, tasks[1].sent],
            steps: self.steps,
            rounds,
        };
        info!(
            "run finished: {} after {} rounds, {} steps, sent {:?}",
            report.termination, report.rounds, report.steps, report.sent
        );
        Ok(report)
    }

    /// Run one task until it blocks or halts.
    fn run_task(
        &mut self,
        task: &mut Task,
        other_queue: &mut MessageQueue,
    ) -> VMResult<TaskState> {
        task.state = TaskState::Running;
        loop {
            let instr = match fetch(self.program, task.ip) {
                Some(instr) => instr,
                None => return Ok(TaskState::Halted),
            };
            if let Some(limit) = self.config.max_steps {
                if self.steps >= limit {
                    return Err(VMError::StepLimitExceeded { limit });
                }
            }
            if self.config.trace_execution {
                trace!("{} [{:3}] {}", task.id, task.ip, instr);
            }

            match execute(task, other_queue, self.program)? {
                ExecResult::Continue => self.steps += 1,
                ExecResult::Blocked => return Ok(TaskState::Blocked),
                ExecResult::Halted => {
                    self.steps += 1;
                    return Ok(TaskState::Halted);
                }
            }
        }
    }
}

/// Decide whether the run is over after both tasks had their turn.
fn check_termination(tasks: &[Task; 2]) -> Option<Termination> {
    let [first, second] = tasks;
    match (first.state, second.state) {
        (TaskState::Halted, TaskState::Halted) => Some(Termination::Completed),
        _ if first.is_starving() && second.is_starving() => Some(Termination::Deadlock),
        (TaskState::Halted, _) if second.is_starving() => {
            Some(Termination::Starved { task: second.id })
        }
        (_, TaskState::Halted) if first.is_starving() => {
            Some(Termination::Starved { task: first.id })
        }
        _ => None,
    }
}

/// Run two fresh tasks over `program` and return task 1's sent count.
pub fn run_until_quiescent(
    mut tasks: [Task; 2],
    program: &[Instruction],
) -> VMResult<u64> {
    let config = SchedulerConfig {
        queue_capacity: tasks[0].queue.capacity(),
        ..SchedulerConfig::default()
    };
    let report = Scheduler::with_config(program, config).run_until_quiescent(&mut tasks)?;
    Ok(report.answer())
}

#[cfg(test)]
mod tests;
