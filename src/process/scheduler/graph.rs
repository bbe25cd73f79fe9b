/*!
 * Dependency Graph
 * Reverse adjacency from a dependency to the processes waiting on it
 */

use crate::core::types::Pid;
use ahash::HashMap;

/// Dependency → dependents, each list in registration order
///
/// Walked when a dependency concludes instead of attaching relay closures
/// to every process.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    dependents: HashMap<Pid, Vec<Pid>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `dependent` waits on `dependency`
    pub fn add_edge(&mut self, dependency: Pid, dependent: Pid) {
        self.dependents.entry(dependency).or_default().push(dependent);
    }

    /// Processes waiting on `dependency`, in registration order
    pub fn dependents_of(&self, dependency: Pid) -> &[Pid] {
        self.dependents
            .get(&dependency)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Detach and return the dependents of a concluded process
    pub fn take_dependents(&mut self, dependency: Pid) -> Vec<Pid> {
        self.dependents.remove(&dependency).unwrap_or_default()
    }

    pub fn edge_count(&self) -> usize {
        self.dependents.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.dependents.is_empty()
    }
}
