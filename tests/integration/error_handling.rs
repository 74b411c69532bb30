//! Error handling integration tests
//!
//! Fatal errors abort the run and surface a descriptive message.

use duet::vm::VMError;
use duet::{recover, run, run_file, run_with_config, SchedulerConfig};
use std::path::Path;

#[test]
fn test_unknown_opcode_handling() {
    let err = run("set a 1\nnop\n").unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("Failed to load program"));
    assert!(message.contains("2:1: unknown opcode `nop`"));
}

#[test]
fn test_missing_operand_handling() {
    assert!(run("set a\n").is_err());
}

#[test]
fn test_division_by_zero_handling() {
    let err = run("mod a 0\n").unwrap_err();
    assert_eq!(
        err.downcast_ref::<VMError>(),
        Some(&VMError::DivisionByZero { ip: 0 })
    );
    assert!(format!("{:#}", err).starts_with("Execution aborted"));
}

#[test]
fn test_queue_overflow_handling() {
    let config = SchedulerConfig {
        queue_capacity: 5,
        ..SchedulerConfig::default()
    };
    let source = "set i 6\nsnd i\nadd i -1\njgz i -2\nrcv a\n";
    let err = run_with_config(source, &config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<VMError>(),
        Some(VMError::QueueOverflow { capacity: 5, .. })
    ));
}

#[test]
fn test_step_limit_handling() {
    let config = SchedulerConfig {
        max_steps: Some(1_000),
        ..SchedulerConfig::default()
    };
    let err = run_with_config("jgz 1 0\n", &config).unwrap_err();
    assert_eq!(
        err.downcast_ref::<VMError>(),
        Some(&VMError::StepLimitExceeded { limit: 1_000 })
    );

    assert!(recover("jgz 1 0\n", Some(10)).is_err());
}

#[test]
fn test_missing_file_handling() {
    let err = run_file(Path::new("/definitely/not/here.duet")).unwrap_err();
    assert!(err.to_string().contains("Failed to read file"));
}
