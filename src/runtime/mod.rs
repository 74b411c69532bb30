//! Runtime: task state and the two-task scheduler

pub mod scheduler;

pub use scheduler::{
    run_until_quiescent, MessageQueue, RunReport, Scheduler, SchedulerConfig, Task, TaskId,
    TaskState, Termination,
};
