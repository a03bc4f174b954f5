//! Befunge-93 execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: the [`engine::Interpreter`] and its step function
//! - [`instruction`]: decoding of grid cells into instructions
//! - [`cursor`]: instruction pointer with toroidal movement
//! - [`random`]: injectable randomness for `?`
//! - [`io`]: input, output and diagnostic streams
//! - [`config`]: per-instance settings
//! - [`errors`]: Runtime error types
//!
//! # Execution Model
//!
//! Each call to [`engine::Interpreter::step`] reads the cell under the cursor,
//! executes it (or pushes it, in string mode), and advances the cursor one
//! cell. When history recording is enabled, a snapshot is taken after every
//! step to enable time-travel debugging.

pub mod config;
pub mod constants;
pub mod cursor;
pub mod engine;
pub mod errors;
pub mod instruction;
pub mod io;
pub mod random;
