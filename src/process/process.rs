/*!
 * Process
 * A unit of schedulable work with progress accounting and lifecycle hooks
 */

use super::hooks::ProcessHooks;
use super::types::{ProcessState, WorkProgress};
use super::workload::WorkloadCharacterization;
use crate::core::errors::ProcessError;
use crate::core::types::Pid;
use smartstring::alias::String as SmartString;
use std::collections::BTreeSet;

/// A single process running on the simulated OS
///
/// Dependencies are held as PIDs: a process never owns the processes it
/// waits on. Once enqueued, a process is owned by the task manager until it
/// completes and is evicted.
#[derive(Debug)]
pub struct Process {
    pid: Option<Pid>,
    name: SmartString,
    total_work: f64,
    current_work: f64,
    state: ProcessState,
    dependencies: BTreeSet<Pid>,
    characterization: WorkloadCharacterization,
    hooks: ProcessHooks,
}

impl Process {
    /// Start building a process needing `total_work` units
    pub fn builder(name: &str, total_work: f64) -> ProcessBuilder {
        ProcessBuilder::new(name, total_work)
    }

    /// PID assigned at enqueue, if any
    #[inline]
    pub fn pid(&self) -> Option<Pid> {
        self.pid
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn total_work(&self) -> f64 {
        self.total_work
    }

    #[inline]
    pub fn current_work(&self) -> f64 {
        self.current_work
    }

    #[inline]
    pub fn state(&self) -> ProcessState {
        self.state
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.state.is_completed()
    }

    /// PIDs this process still waits on
    #[inline]
    pub fn dependencies(&self) -> &BTreeSet<Pid> {
        &self.dependencies
    }

    /// Whether any dependency is still pending
    #[inline]
    pub fn has_unmet_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }

    #[inline]
    pub fn characterization(&self) -> &WorkloadCharacterization {
        &self.characterization
    }

    /// Conclude callbacks not yet fired
    #[inline]
    pub fn pending_conclude_hooks(&self) -> usize {
        self.hooks.pending_conclude()
    }

    /// Wait on another process before running
    pub fn add_dependency(&mut self, pid: Pid) {
        self.dependencies.insert(pid);
    }

    /// Register another conclude callback, fired after those already registered
    pub fn on_conclude<F>(&mut self, hook: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.hooks.push_conclude(Box::new(hook));
    }

    /// Apply `units` of work, returning whether the process just completed
    ///
    /// The first call fires the start hook (whatever `units` is), every call
    /// fires the update hook, and the call that brings the accumulated work
    /// to the total fires every conclude hook in registration order.
    pub fn apply_work(&mut self, units: f64) -> Result<bool, ProcessError> {
        if self.state.is_completed() {
            return Err(ProcessError::AlreadyCompleted(self.name.to_string()));
        }
        if !(units.is_finite() && units >= 0.0) {
            return Err(ProcessError::InvalidWork(units));
        }

        if self.state == ProcessState::NotStarted {
            self.state = ProcessState::Running;
            self.hooks.fire_start();
        }

        self.current_work += units;
        self.hooks.fire_update(WorkProgress {
            current: self.current_work,
            total: self.total_work,
            delta: units,
        });

        if self.current_work >= self.total_work {
            self.state = ProcessState::Completed;
            self.hooks.fire_conclude();
            return Ok(true);
        }

        Ok(false)
    }

    pub(crate) fn assign_pid(&mut self, pid: Pid) {
        debug_assert!(self.pid.is_none(), "process '{}' enqueued twice", self.name);
        self.pid = Some(pid);
    }

    /// Drop a concluded dependency, returning whether it was pending
    pub(crate) fn resolve_dependency(&mut self, pid: Pid) -> bool {
        self.dependencies.remove(&pid)
    }

    pub(crate) fn retain_dependencies<F>(&mut self, keep: F)
    where
        F: FnMut(&Pid) -> bool,
    {
        self.dependencies.retain(keep);
    }
}

/// Builder for [`Process`]
pub struct ProcessBuilder {
    name: SmartString,
    total_work: f64,
    dependencies: BTreeSet<Pid>,
    characterization: WorkloadCharacterization,
    hooks: ProcessHooks,
}

impl ProcessBuilder {
    fn new(name: &str, total_work: f64) -> Self {
        Self {
            name: SmartString::from(name),
            total_work,
            dependencies: BTreeSet::new(),
            characterization: WorkloadCharacterization::default(),
            hooks: ProcessHooks::new(),
        }
    }

    pub fn characterization(mut self, characterization: WorkloadCharacterization) -> Self {
        self.characterization = characterization;
        self
    }

    pub fn depends_on(mut self, pid: Pid) -> Self {
        self.dependencies.insert(pid);
        self
    }

    pub fn depends_on_all<I>(mut self, pids: I) -> Self
    where
        I: IntoIterator<Item = Pid>,
    {
        self.dependencies.extend(pids);
        self
    }

    pub fn on_start<F>(mut self, hook: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.hooks.set_start(Box::new(hook));
        self
    }

    pub fn on_update<F>(mut self, hook: F) -> Self
    where
        F: FnMut(WorkProgress) + Send + 'static,
    {
        self.hooks.set_update(Box::new(hook));
        self
    }

    /// Append a conclude callback; callbacks fire in the order added
    pub fn on_conclude<F>(mut self, hook: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.hooks.push_conclude(Box::new(hook));
        self
    }

    /// Finish the process; total work must be finite and non-negative
    pub fn build(self) -> Result<Process, ProcessError> {
        if !(self.total_work.is_finite() && self.total_work >= 0.0) {
            return Err(ProcessError::InvalidWork(self.total_work));
        }

        Ok(Process {
            pid: None,
            name: self.name,
            total_work: self.total_work,
            current_work: 0.0,
            state: ProcessState::NotStarted,
            dependencies: self.dependencies,
            characterization: self.characterization,
            hooks: self.hooks,
        })
    }
}
