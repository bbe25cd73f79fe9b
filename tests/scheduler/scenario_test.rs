/*!
 * End-to-End Scheduler Scenarios
 * Single ticks against fixed capability tables
 */

use pretty_assertions::assert_eq;
use terminal_os_kernel::process::DispatchState;
use terminal_os_kernel::{capabilities, Pid, Process, TaskManager, WorkloadCharacterization};

fn compute_bound(total_work: f64) -> Process {
    let workload = WorkloadCharacterization::default()
        .with_need("computing", 1.0)
        .unwrap();
    Process::builder("compute_bound", total_work)
        .characterization(workload)
        .build()
        .unwrap()
}

#[test]
fn test_fast_hardware_completes_in_one_tick() {
    let mut tm = TaskManager::new();
    let pid = tm.enqueue(compute_bound(1.0), 0).unwrap();

    let report = tm.tick(0.5, &capabilities([("computing", 2.0)])).unwrap();

    assert_eq!(report.attempted, 1);
    assert_eq!(report.completed, vec![pid]);
    assert!(tm.process(pid).is_none());
    assert!(tm.is_empty());
}

#[test]
fn test_missing_capability_never_progresses() {
    let mut tm = TaskManager::new();
    let pid = tm.enqueue(compute_bound(1.0), 0).unwrap();
    let offered = capabilities([("graphics", 2.0)]);

    for _ in 0..50 {
        let report = tm.tick(0.5, &offered).unwrap();
        // Attempted every tick, progress never made
        assert_eq!(report.attempted, 1);
        assert!(report.completed.is_empty());
    }

    let process = tm.process(pid).unwrap();
    assert_eq!(process.current_work(), 0.0);
    assert!(!process.is_completed());
    assert_eq!(tm.stats().dispatched, 50);
}

#[test]
fn test_dependent_runs_on_following_tick() {
    let mut tm = TaskManager::new();
    let offered = capabilities([("computing", 1.0)]);

    let a = tm.enqueue(compute_bound(1.0), 0).unwrap();
    let b = tm
        .enqueue(
            Process::builder("b", 1.0)
                .characterization(
                    WorkloadCharacterization::default()
                        .with_need("computing", 1.0)
                        .unwrap(),
                )
                .depends_on(a)
                .build()
                .unwrap(),
            0,
        )
        .unwrap();

    let first = tm.tick(1.0, &offered).unwrap();
    assert_eq!(first.attempted, 1);
    assert_eq!(first.completed, vec![a]);
    assert_eq!(first.readied, vec![b]);
    assert_eq!(tm.dispatch_state(b), Some(DispatchState::Ready));
    assert_eq!(tm.process(b).unwrap().current_work(), 0.0);

    let second = tm.tick(1.0, &offered).unwrap();
    assert_eq!(second.completed, vec![b]);
    assert!(tm.is_empty());
}

#[test]
fn test_unresolvable_dependency_reports_livelock() {
    let mut tm = TaskManager::new();
    let pid = tm
        .enqueue(
            Process::builder("orphan", 1.0)
                .depends_on(Pid::new(999))
                .build()
                .unwrap(),
            0,
        )
        .unwrap();

    let report = tm.tick(1.0, &capabilities([("computing", 1.0)])).unwrap();

    assert_eq!(report.attempted, 0);
    assert!(report.livelock);
    assert_eq!(tm.stats().livelock_ticks, 1);
    assert_eq!(tm.dispatch_state(pid), Some(DispatchState::Stalled));
}

#[test]
fn test_cycle_stalls_forever() {
    let mut tm = TaskManager::new();
    // PIDs are issued from 1 upwards, so each side can name the other
    let a = tm
        .enqueue(
            Process::builder("a", 1.0).depends_on(Pid::new(2)).build().unwrap(),
            0,
        )
        .unwrap();
    let b = tm
        .enqueue(Process::builder("b", 1.0).depends_on(a).build().unwrap(), 0)
        .unwrap();
    assert_eq!(b, Pid::new(2));

    for _ in 0..5 {
        let report = tm.tick(1.0, &capabilities([("computing", 1.0)])).unwrap();
        assert!(report.livelock);
    }
    assert_eq!(tm.len(), 2);
    assert_eq!(tm.stats().livelock_ticks, 5);
}

#[test]
fn test_overflowing_modifier_completes_without_stalling_tick() {
    let mut tm = TaskManager::new();
    let plain = tm
        .enqueue(Process::builder("plain", 10.0).build().unwrap(), 0)
        .unwrap();
    let hot = tm
        .enqueue(
            Process::builder("hot", 5.0)
                .characterization(
                    WorkloadCharacterization::default()
                        .with_need("computing", 1e-200)
                        .unwrap(),
                )
                .build()
                .unwrap(),
            0,
        )
        .unwrap();
    let later = tm
        .enqueue(Process::builder("later", 10.0).build().unwrap(), 1)
        .unwrap();
    let offered = capabilities([("computing", 1e200)]);

    let first = tm.tick(1.0, &offered).unwrap();
    assert_eq!(first.attempted, 3);
    assert_eq!(first.completed, vec![hot]);

    for _ in 0..2 {
        tm.tick(1.0, &offered).unwrap();
    }

    assert_eq!(tm.stats().ticks, 3);
    assert_eq!(tm.process(plain).unwrap().current_work(), 3.0);
    assert_eq!(tm.process(later).unwrap().current_work(), 3.0);
}
