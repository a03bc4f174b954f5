//! Runtime error types for the Befunge-93 interpreter
//!
//! This module defines [`RuntimeError`], which represents all errors that can occur
//! during program execution. Most of the machine is total by construction (stack
//! underflow yields 0, unknown cells are no-ops), so the list is short.
//!
//! All runtime errors are fatal - they halt execution and are reported by the driver.

use super::instruction::ArithOp;
use crate::memory::grid::Position;
use std::io;
use thiserror::Error;

/// Runtime errors that can occur during execution
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Division or modulo with a zero divisor
    #[error("{} by zero at {position}", operation_name(.operation))]
    DivisionByZero {
        operation: ArithOp,
        position: Position,
    },

    /// Reading input or writing output failed
    #[error("I/O failure at {position}: {source}")]
    Io {
        position: Position,
        #[source]
        source: io::Error,
    },

    /// The configured step budget ran out before the program halted
    #[error("step limit of {limit} exceeded without reaching '@'")]
    StepLimitExceeded { limit: usize },

    /// Snapshot history limit exceeded
    #[error("snapshot memory limit exceeded: {current} bytes used, limit is {limit}")]
    SnapshotLimitExceeded { current: usize, limit: usize },

    /// History navigation failed (already at either end, or nothing recorded)
    #[error("{message}")]
    History { message: String },
}

fn operation_name(op: &ArithOp) -> &'static str {
    match op {
        ArithOp::Mod => "Modulo",
        _ => "Division",
    }
}

impl RuntimeError {
    /// Grid position of the faulting instruction, where one applies
    pub fn position(&self) -> Option<Position> {
        match self {
            RuntimeError::DivisionByZero { position, .. } => Some(*position),
            RuntimeError::Io { position, .. } => Some(*position),
            RuntimeError::StepLimitExceeded { .. }
            | RuntimeError::SnapshotLimitExceeded { .. }
            | RuntimeError::History { .. } => None,
        }
    }

    pub(crate) fn history(message: impl Into<String>) -> Self {
        RuntimeError::History {
            message: message.into(),
        }
    }
}
