/*!
 * Process Hooks
 * Producer callbacks fired as a process receives work
 */

use super::types::WorkProgress;
use std::fmt;

/// Fired once, on the first application of work
pub type StartHook = Box<dyn FnOnce() + Send>;

/// Fired on every application of work
pub type UpdateHook = Box<dyn FnMut(WorkProgress) + Send>;

/// Fired once, when the process completes
pub type ConcludeHook = Box<dyn FnOnce() + Send>;

/// The lifecycle callbacks registered by a process's producer
#[derive(Default)]
pub struct ProcessHooks {
    on_start: Option<StartHook>,
    on_update: Option<UpdateHook>,
    on_conclude: Vec<ConcludeHook>,
}

impl ProcessHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_start(&mut self, hook: StartHook) {
        self.on_start = Some(hook);
    }

    pub(crate) fn set_update(&mut self, hook: UpdateHook) {
        self.on_update = Some(hook);
    }

    pub(crate) fn push_conclude(&mut self, hook: ConcludeHook) {
        self.on_conclude.push(hook);
    }

    /// Number of conclude callbacks still pending
    pub fn pending_conclude(&self) -> usize {
        self.on_conclude.len()
    }

    pub(crate) fn fire_start(&mut self) {
        if let Some(hook) = self.on_start.take() {
            hook();
        }
    }

    pub(crate) fn fire_update(&mut self, progress: WorkProgress) {
        if let Some(hook) = self.on_update.as_mut() {
            hook(progress);
        }
    }

    /// Fire every conclude callback in registration order, consuming them
    pub(crate) fn fire_conclude(&mut self) {
        for hook in self.on_conclude.drain(..) {
            hook();
        }
    }
}

impl fmt::Debug for ProcessHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessHooks")
            .field("on_start", &self.on_start.is_some())
            .field("on_update", &self.on_update.is_some())
            .field("on_conclude", &self.on_conclude.len())
            .finish()
    }
}
