/*!
 * Scheduler Entry Types
 * Internal bookkeeping for processes owned by the task manager
 */

use crate::core::types::Priority;
use crate::process::Process;

/// A live process and the priority bucket it was filed under
#[derive(Debug)]
pub(super) struct Entry {
    pub process: Process,
    pub priority: Priority,
}

impl Entry {
    pub fn new(process: Process, priority: Priority) -> Self {
        Self { process, priority }
    }
}
