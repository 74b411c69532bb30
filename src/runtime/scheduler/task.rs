//! Task definitions for the scheduler.
//!
//! A task is one independent execution of the shared program: its own
//! register file, instruction pointer, inbound queue and sent counter.

use serde::Serialize;

use super::queue::MessageQueue;
use crate::vm::registers::{Register, RegisterFile};

/// Task identifier. Exactly two tasks exist: 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(pub usize);

impl TaskId {
    /// The task scheduled first in every round.
    pub const FIRST: TaskId = TaskId(0);
    /// The task scheduled second; its sent count is the run's result.
    pub const SECOND: TaskId = TaskId(1);

    /// Get the inner value.
    #[inline]
    pub fn inner(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// Task state, as last observed by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Task has not had a turn yet.
    Ready,
    /// Task currently has the turn.
    Running,
    /// Task yielded on `rcv` with an empty queue.
    Blocked,
    /// Task's pointer left the program. Permanent.
    Halted,
}

/// A task executing the shared program.
#[derive(Debug, Clone)]
pub struct Task {
    /// Task id (0 or 1).
    pub id: TaskId,
    /// Register file.
    pub registers: RegisterFile,
    /// Pointer to the next instruction; may leave the program (halt).
    pub ip: i64,
    /// Inbound messages.
    pub queue: MessageQueue,
    /// Number of values this task has delivered to its partner.
    pub sent: u64,
    /// Scheduler-observed state.
    pub state: TaskState,
}

impl Task {
    /// Create a task with the identity register seeded with its id.
    pub fn new(
        id: TaskId,
        queue_capacity: usize,
    ) -> Self {
        let mut registers = RegisterFile::new();
        registers.write(Register::IDENTITY, id.0 as i64);

        Self {
            id,
            registers,
            ip: 0,
            queue: MessageQueue::new(id, queue_capacity),
            sent: 0,
            state: TaskState::Ready,
        }
    }

    /// Create both tasks of a run.
    pub fn pair(queue_capacity: usize) -> [Task; 2] {
        [
            Task::new(TaskId::FIRST, queue_capacity),
            Task::new(TaskId::SECOND, queue_capacity),
        ]
    }

    /// Whether the task is blocked and nothing is waiting in its queue.
    #[inline]
    pub fn is_starving(&self) -> bool {
        self.state == TaskState::Blocked && self.queue.is_empty()
    }
}
