//! Execution integration tests
//!
//! Whole programs through the public entry points.

use duet::runtime::{Scheduler, Termination};
use duet::{disassemble, recover, run, run_file, run_with_config, SchedulerConfig};
use std::io::Write;

const CLASSIC: &str = "snd 1\nsnd 2\nsnd p\nrcv a\nrcv b\nrcv c\nrcv d\n";

const SAMPLE: &str = "set a 1
add a 2
mul a a
mod a 5
snd a
set a 0
rcv b
jgz a -1
set a 1
jgz a -2
";

/// Counts down from 10 * (p + 1), sending every value, then drains its
/// queue until the partner goes quiet.
const COUNTDOWN: &str = "set i 10
add p 1
mul i p
snd i
add i -1
jgz i -2
rcv a
jgz 1 -1
";

#[test]
fn test_classic_program_answer() {
    assert_eq!(run(CLASSIC).unwrap(), 3);
}

#[test]
fn test_sample_program_answer() {
    assert_eq!(run(SAMPLE).unwrap(), 1);
}

#[test]
fn test_halting_program_answer() {
    assert_eq!(run("jgz 1 1\n").unwrap(), 0);
    assert_eq!(run("set a 1\nadd a 2\n").unwrap(), 0);
}

#[test]
fn test_countdown_program_report() {
    let report = run_with_config(COUNTDOWN, &SchedulerConfig::default()).unwrap();
    assert_eq!(report.sent, [10, 20]);
    assert_eq!(report.termination, Termination::Deadlock);
}

#[test]
fn test_tab_separated_source() {
    assert_eq!(run("snd\t1\nsnd\t2\nsnd\tp\nrcv\ta\nrcv\tb\nrcv\tc\nrcv\td").unwrap(), 3);
}

#[test]
fn test_run_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CLASSIC.as_bytes()).unwrap();
    assert_eq!(run_file(file.path()).unwrap(), 3);
}

#[test]
fn test_scheduler_api_exposes_task_state() {
    let program = duet::frontend::load(CLASSIC).unwrap();
    let mut scheduler = Scheduler::new(&program);
    let mut tasks = scheduler.spawn_tasks();
    let report = scheduler.run_until_quiescent(&mut tasks).unwrap();

    assert_eq!(report.answer(), tasks[1].sent);
    assert!(tasks.iter().all(|t| t.queue.is_empty()));
}

#[test]
fn test_sound_mode() {
    assert_eq!(recover(SAMPLE, None).unwrap(), Some(4));
    assert_eq!(recover("set a 1\n", None).unwrap(), None);
}

#[test]
fn test_disassemble() {
    let listing = disassemble("snd  a\njgz\ta -1\n").unwrap();
    assert_eq!(listing, "[  0] snd a\n[  1] jgz a -1\n");
}
