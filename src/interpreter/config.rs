// Interpreter configuration

use super::constants::DEFAULT_SNAPSHOT_LIMIT;

/// Per-instance interpreter settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Write a trace line per step and honour `=` grid dumps
    pub debug: bool,

    /// Capture a snapshot after every step for time-travel navigation
    pub record_history: bool,

    /// Upper bound on estimated snapshot memory, in bytes
    pub snapshot_limit: usize,

    /// Fail with `StepLimitExceeded` after this many steps without halting
    pub max_steps: Option<usize>,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            debug: false,
            record_history: false,
            snapshot_limit: DEFAULT_SNAPSHOT_LIMIT,
            max_steps: None,
        }
    }
}
