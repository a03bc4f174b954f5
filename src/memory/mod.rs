//! Memory model for the Befunge-93 interpreter
//!
//! This module provides the machine's storage:
//! - [`value`]: the integer [`value::Value`] type and the char/code conversions
//! - [`grid`]: the fixed 80×25 program grid, which is also addressable memory
//! - [`stack`]: the underflow-safe operand stack
//!
//! # Toroidal Addressing
//!
//! Grid reads and writes take in-bounds coordinates. Callers holding arbitrary
//! integers (the `g` and `p` instructions) map them with [`grid::ProgramGrid::wrap`]
//! first, so addressing wraps the same way the cursor does:
//! ```text
//! (x, y)  →  (x mod 80, y mod 25)
//! ```

pub mod grid;
pub mod stack;
pub mod value;
