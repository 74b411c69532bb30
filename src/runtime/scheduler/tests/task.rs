//! Task 单元测试

use crate::runtime::scheduler::{Task, TaskId, TaskState};
use crate::vm::registers::Register;

#[cfg(test)]
mod task_id_tests {
    use super::*;

    #[test]
    fn test_task_id_constants() {
        assert_eq!(TaskId::FIRST.inner(), 0);
        assert_eq!(TaskId::SECOND.inner(), 1);
    }

    #[test]
    fn test_task_id_display() {
        assert_eq!(format!("{}", TaskId(1)), "Task(1)");
    }
}

#[cfg(test)]
mod task_tests {
    use super::*;

    #[test]
    fn test_pair_seeds_identity_register() {
        let tasks = Task::pair(8);
        for (idx, task) in tasks.iter().enumerate() {
            assert_eq!(task.id, TaskId(idx));
            assert_eq!(task.registers.read(Register::IDENTITY), idx as i64);
            assert_eq!(task.ip, 0);
            assert_eq!(task.sent, 0);
            assert_eq!(task.state, TaskState::Ready);
            assert!(task.queue.is_empty());
            assert_eq!(task.queue.capacity(), 8);
        }
    }

    #[test]
    fn test_other_registers_start_at_zero() {
        let task = Task::new(TaskId(1), 8);
        for c in 'a'..='z' {
            let reg = Register::from_char(c).unwrap();
            let expected = if reg == Register::IDENTITY { 1 } else { 0 };
            assert_eq!(task.registers.read(reg), expected);
        }
    }

    #[test]
    fn test_starving_requires_block_and_empty_queue() {
        let mut task = Task::new(TaskId(0), 8);
        assert!(!task.is_starving());

        task.state = TaskState::Blocked;
        assert!(task.is_starving());

        task.queue.push(1).unwrap();
        assert!(!task.is_starving());
    }
}
