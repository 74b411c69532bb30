//! Scheduler 单元测试

pub mod task;
