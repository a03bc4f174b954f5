// Snapshot management for reverse execution

use crate::interpreter::cursor::Cursor;
use crate::interpreter::engine::Mode;
use crate::memory::grid::ProgramGrid;
use crate::memory::stack::OperandStack;
use crate::memory::value::Value;
use std::mem;
use std::rc::Rc;

/// Snapshot of execution state
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub grid: Rc<ProgramGrid>, // Shared with neighbouring snapshots until `p` writes
    pub stack: OperandStack,
    pub cursor: Cursor,
    pub mode: Mode,
    pub halted: bool,
    pub steps: usize,
    pub output_len: usize, // Bytes of output written when the snapshot was taken
}

impl Snapshot {
    /// Estimate the memory usage of this snapshot in bytes, excluding the grid
    pub fn estimated_size(&self) -> usize {
        mem::size_of::<Snapshot>() + self.stack.len() * mem::size_of::<Value>()
    }
}

/// Estimated size of one grid copy
fn grid_size(grid: &ProgramGrid) -> usize {
    grid.width() * grid.height() * mem::size_of::<Value>()
}

/// Manages execution history for reverse execution
#[derive(Debug)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot to history
    ///
    /// A grid is only charged to the budget the first time it appears;
    /// snapshots between two `p` writes share one copy.
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), String> {
        let snapshot_size = self.charge_for(&snapshot);

        if self.current_memory + snapshot_size > self.max_memory {
            return Err(format!(
                "Snapshot memory limit exceeded: {} + {} > {}",
                self.current_memory, snapshot_size, self.max_memory
            ));
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Drop every snapshot from index `len` on, releasing their memory
    pub fn truncate(&mut self, len: usize) {
        while self.snapshots.len() > len {
            let Some(snapshot) = self.snapshots.pop() else {
                break;
            };
            let released = self.charge_for(&snapshot);
            self.current_memory = self.current_memory.saturating_sub(released);
        }
    }

    /// Bytes charged for `snapshot` when it follows the current last snapshot
    fn charge_for(&self, snapshot: &Snapshot) -> usize {
        let shares_grid = self
            .snapshots
            .last()
            .is_some_and(|prev| Rc::ptr_eq(&prev.grid, &snapshot.grid));

        if shares_grid {
            snapshot.estimated_size()
        } else {
            snapshot.estimated_size() + grid_size(&snapshot.grid)
        }
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Get max memory limit
    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(grid: &Rc<ProgramGrid>, stack_depth: usize) -> Snapshot {
        Snapshot {
            grid: Rc::clone(grid),
            stack: (0..stack_depth as Value).collect(),
            cursor: Cursor::new(),
            mode: Mode::Normal,
            halted: false,
            steps: 0,
            output_len: 0,
        }
    }

    #[test]
    fn test_shared_grid_charged_once() {
        let grid = Rc::new(ProgramGrid::blank());
        let mut manager = SnapshotManager::new(usize::MAX);

        manager.push(snapshot(&grid, 0)).unwrap();
        let after_first = manager.memory_usage();
        manager.push(snapshot(&grid, 0)).unwrap();
        let second = manager.memory_usage() - after_first;

        assert!(after_first >= grid_size(&grid));
        assert!(second < grid_size(&grid));
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_new_grid_charged_again() {
        let grid = Rc::new(ProgramGrid::blank());
        let other = Rc::new(ProgramGrid::blank());
        let mut manager = SnapshotManager::new(usize::MAX);

        manager.push(snapshot(&grid, 0)).unwrap();
        let after_first = manager.memory_usage();
        manager.push(snapshot(&other, 0)).unwrap();

        assert!(manager.memory_usage() - after_first >= grid_size(&other));
    }

    #[test]
    fn test_limit_rejects_snapshot() {
        let grid = Rc::new(ProgramGrid::blank());
        let mut manager = SnapshotManager::new(16);

        assert!(manager.push(snapshot(&grid, 4)).is_err());
        assert!(manager.is_empty());
        assert_eq!(manager.memory_usage(), 0);
        assert_eq!(manager.memory_limit(), 16);
    }

    #[test]
    fn test_truncate_releases_memory() {
        let grid = Rc::new(ProgramGrid::blank());
        let rewritten = Rc::new(ProgramGrid::blank());
        let mut manager = SnapshotManager::new(usize::MAX);

        manager.push(snapshot(&grid, 0)).unwrap();
        manager.push(snapshot(&grid, 2)).unwrap();
        let kept = manager.memory_usage();
        manager.push(snapshot(&rewritten, 5)).unwrap();
        manager.push(snapshot(&rewritten, 1)).unwrap();

        manager.truncate(2);
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.memory_usage(), kept);

        manager.truncate(5);
        assert_eq!(manager.len(), 2);

        manager.truncate(0);
        assert!(manager.is_empty());
        assert_eq!(manager.memory_usage(), 0);
    }

    #[test]
    fn test_get_by_index() {
        let grid = Rc::new(ProgramGrid::blank());
        let mut manager = SnapshotManager::new(usize::MAX);
        manager.push(snapshot(&grid, 1)).unwrap();
        manager.push(snapshot(&grid, 3)).unwrap();

        assert_eq!(manager.get(1).map(|s| s.stack.len()), Some(3));
        assert!(manager.get(2).is_none());
    }
}
