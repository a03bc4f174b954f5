//! # Introduction
//!
//! fungetty runs Befunge-93 programs: an 80×25 grid of characters executed by
//! a cursor that travels the grid in four directions, wraps at the edges, and
//! keeps its data on a single integer stack. Programs can rewrite their own
//! grid with `p` and read it back with `g`.
//!
//! Runs can be recorded: the interpreter then captures a snapshot after every
//! step, and the history is navigated forward and backward through a terminal
//! UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → ProgramGrid → Interpreter::step (loop) → Output
//!                                   ↓
//!                               Snapshots → TUI
//! ```
//!
//! 1. [`memory`]: the machine's storage: the [`memory::grid::ProgramGrid`],
//!    the underflow-safe [`memory::stack::OperandStack`], and the
//!    character/value conversions.
//! 2. [`interpreter`]: cursor movement, instruction decoding and dispatch,
//!    I/O ports and the injectable randomness behind `?`.
//! 3. [`snapshot`]: snapshot history with a configurable memory limit.
//! 4. [`ui`]: ratatui-based viewer; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use fungetty::interpreter::config::InterpreterConfig;
//! use fungetty::interpreter::engine::Interpreter;
//! use fungetty::interpreter::io::BufferedIo;
//! use fungetty::memory::grid::ProgramGrid;
//!
//! let grid = ProgramGrid::load("642*+.@");
//! let mut vm = Interpreter::new(grid, BufferedIo::default(), InterpreterConfig::default());
//! vm.run().unwrap();
//! assert_eq!(vm.io().output(), "14");
//! ```

pub mod interpreter;
pub mod memory;
pub mod snapshot;
pub mod ui;
