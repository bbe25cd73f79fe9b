/*!
 * ID Generation
 * Monotonic process ID issuing owned by a single task manager
 */

use super::limits::FIRST_PID;
use super::types::Pid;

/// Monotonic PID generator
///
/// Process IDs are never handed out twice. Each task manager owns its own
/// generator, so constructing a new manager is the only way to restart
/// numbering.
#[derive(Debug, Clone)]
pub struct PidGenerator {
    first: u32,
    next: u32,
}

impl PidGenerator {
    /// Create new generator starting at given value
    #[inline]
    pub const fn new(first: u32) -> Self {
        Self { first, next: first }
    }

    /// Issue the next PID, or `None` once the ID space is exhausted
    #[inline]
    pub fn next(&mut self) -> Option<Pid> {
        let pid = Pid::new(self.next);
        self.next = self.next.checked_add(1)?;
        Some(pid)
    }

    /// Whether `pid` has already been handed out by this generator
    #[inline]
    pub fn was_issued(&self, pid: Pid) -> bool {
        (self.first..self.next).contains(&pid.as_u32())
    }

    /// Number of PIDs issued so far
    #[inline]
    pub fn issued(&self) -> u32 {
        self.next - self.first
    }
}

impl Default for PidGenerator {
    fn default() -> Self {
        Self::new(FIRST_PID)
    }
}
