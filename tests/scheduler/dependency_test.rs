/*!
 * Dependency Resolution Tests
 * Stall/ready transitions and conclude ordering
 */

use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use terminal_os_kernel::process::DispatchState;
use terminal_os_kernel::{Capabilities, Pid, Process, TaskManager};

fn job(name: &str, work: f64) -> Process {
    Process::builder(name, work).build().unwrap()
}

#[test]
fn test_stalled_until_every_dependency_concludes() {
    let mut tm = TaskManager::new();
    // Staggered totals so exactly one dependency concludes per tick
    let deps: Vec<Pid> = [1.0, 2.0, 3.0]
        .into_iter()
        .enumerate()
        .map(|(i, work)| tm.enqueue(job(&format!("dep{i}"), work), 1).unwrap())
        .collect();
    let waiting = tm
        .enqueue(
            Process::builder("waiting", 1.0)
                .depends_on_all(deps.iter().copied())
                .build()
                .unwrap(),
            0,
        )
        .unwrap();

    for remaining in [2, 1] {
        tm.tick(1.0, &Capabilities::default()).unwrap();
        assert_eq!(tm.dispatch_state(waiting), Some(DispatchState::Stalled));
        assert_eq!(tm.process(waiting).unwrap().dependencies().len(), remaining);
        assert!(!tm.queue(0).unwrap().is_ready(waiting));
    }

    let report = tm.tick(1.0, &Capabilities::default()).unwrap();
    assert_eq!(report.completed, vec![deps[2]]);
    assert_eq!(report.readied, vec![waiting]);
    assert_eq!(tm.dispatch_state(waiting), Some(DispatchState::Ready));
    assert!(!tm.queue(0).unwrap().is_stalled(waiting));
}

#[test]
fn test_dependent_in_later_bucket_runs_same_tick() {
    let mut tm = TaskManager::new();
    let a = tm.enqueue(job("a", 1.0), 0).unwrap();
    let b = tm
        .enqueue(Process::builder("b", 1.0).depends_on(a).build().unwrap(), 3)
        .unwrap();

    let report = tm.tick(1.0, &Capabilities::default()).unwrap();

    assert_eq!(report.attempted, 2);
    assert_eq!(report.completed, vec![a, b]);
    assert!(tm.is_empty());
}

#[test]
fn test_conclude_hooks_fire_once_in_order_before_dependents_ready() {
    let log = Arc::new(Mutex::new(Vec::<String>::new()));
    let mut tm = TaskManager::new();

    let mut builder = Process::builder("producer", 2.0);
    for i in 0..3 {
        let sink = Arc::clone(&log);
        builder = builder.on_conclude(move || sink.lock().push(format!("conclude{i}")));
    }
    let sink = Arc::clone(&log);
    builder = builder.on_update(move |progress| {
        sink.lock()
            .push(format!("update {}/{}", progress.current, progress.total))
    });
    let producer = tm.enqueue(builder.build().unwrap(), 0).unwrap();

    let sink = Arc::clone(&log);
    tm.enqueue(
        Process::builder("consumer", 1.0)
            .depends_on(producer)
            .on_start(move || sink.lock().push("consumer start".into()))
            .build()
            .unwrap(),
        0,
    )
    .unwrap();

    for _ in 0..4 {
        tm.tick(1.0, &Capabilities::default()).unwrap();
    }

    assert_eq!(
        *log.lock(),
        vec![
            "update 1/2",
            "update 2/2",
            "conclude0",
            "conclude1",
            "conclude2",
            "consumer start",
        ]
    );
}

#[test]
fn test_dependency_on_finished_process_is_ignored() {
    let mut tm = TaskManager::new();
    let a = tm.enqueue(job("a", 0.5), 0).unwrap();
    tm.tick(1.0, &Capabilities::default()).unwrap();
    assert!(tm.process(a).is_none());

    let b = tm
        .enqueue(Process::builder("b", 1.0).depends_on(a).build().unwrap(), 0)
        .unwrap();
    assert_eq!(tm.dispatch_state(b), Some(DispatchState::Ready));
    assert!(tm.dependents_of(a).is_empty());
}

#[test]
fn test_dependency_on_later_enqueue_resolves() {
    let mut tm = TaskManager::new();
    // Nothing has been issued yet, so the first PID is still pending
    let waiting = tm
        .enqueue(
            Process::builder("waiting", 1.0)
                .depends_on(Pid::new(2))
                .build()
                .unwrap(),
            0,
        )
        .unwrap();
    let late = tm.enqueue(job("late", 1.0), 0).unwrap();
    assert_eq!(late, Pid::new(2));

    let report = tm.tick(1.0, &Capabilities::default()).unwrap();
    assert_eq!(report.completed, vec![late]);
    assert_eq!(report.readied, vec![waiting]);
}

#[test]
fn test_graph_is_drained_on_completion() {
    let mut tm = TaskManager::new();
    let a = tm.enqueue(job("a", 1.0), 0).unwrap();
    for name in ["b", "c"] {
        tm.enqueue(Process::builder(name, 1.0).depends_on(a).build().unwrap(), 0)
            .unwrap();
    }
    assert_eq!(tm.graph().edge_count(), 2);

    tm.tick(1.0, &Capabilities::default()).unwrap();
    assert!(tm.graph().is_empty());
}

#[test]
fn test_dependency_added_before_enqueue_stalls() {
    let mut tm = TaskManager::new();
    let a = tm.enqueue(job("a", 1.0), 0).unwrap();

    let mut waiting = job("waiting", 1.0);
    waiting.add_dependency(a);
    assert!(waiting.has_unmet_dependencies());
    let waiting = tm.enqueue(waiting, 0).unwrap();

    assert_eq!(tm.dispatch_state(waiting), Some(DispatchState::Stalled));
    assert_eq!(tm.dependents_of(a), &[waiting]);

    let report = tm.tick(1.0, &Capabilities::default()).unwrap();
    assert_eq!(report.readied, vec![waiting]);
    assert_eq!(tm.dispatch_state(waiting), Some(DispatchState::Ready));

    let report = tm.tick(1.0, &Capabilities::default()).unwrap();
    assert_eq!(report.completed, vec![waiting]);
}
