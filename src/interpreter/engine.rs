// Execution engine for the Befunge-93 interpreter

use crate::interpreter::config::InterpreterConfig;
use crate::interpreter::cursor::{Cursor, Direction};
use crate::interpreter::errors::RuntimeError;
use crate::interpreter::instruction::{ArithOp, Instruction};
use crate::interpreter::io::{parse_lenient_integer, IoPort, StdIo};
use crate::interpreter::random::{DirectionSource, RngDirections};
use crate::memory::grid::{Position, ProgramGrid};
use crate::memory::stack::OperandStack;
use crate::memory::value::{char_to_value, value_to_char_lossy, Value};
use crate::snapshot::{Snapshot, SnapshotManager};
use rustc_hash::FxHashMap;
use std::io;
use std::rc::Rc;

const QUOTE: Value = b'"' as Value;

/// How characters under the cursor are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Every cell except `"` is pushed as its character code
    String,
}

/// Result of a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Halt,
}

/// Execution statistics for one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellProfile {
    /// Times the cell was executed
    pub hits: u64,
    /// Step count at the first execution (1-based)
    pub first_step: usize,
}

/// The Befunge-93 virtual machine
pub struct Interpreter<Io: IoPort = StdIo> {
    /// Program grid, copy-on-write so snapshots can share it
    grid: Rc<ProgramGrid>,

    /// Grid as loaded, for highlighting self-modified cells
    original_grid: Rc<ProgramGrid>,

    stack: OperandStack,
    cursor: Cursor,
    mode: Mode,

    /// Input, output and diagnostic streams
    io: Io,

    /// Randomness for `?`
    directions: Box<dyn DirectionSource>,

    config: InterpreterConfig,

    /// Snapshot manager for reverse execution
    snapshot_manager: SnapshotManager,

    /// Current position in execution history (for stepping backward/forward)
    history_position: usize,

    /// Whether `@` has been executed
    halted: bool,

    /// Number of steps executed
    steps: usize,

    /// Bytes written to the output stream
    output_len: usize,

    /// Execution statistics per cell over the recorded run
    profile: FxHashMap<Position, CellProfile>,
}

impl<Io: IoPort> Interpreter<Io> {
    /// Create an interpreter for a loaded grid
    pub fn new(grid: ProgramGrid, io: Io, config: InterpreterConfig) -> Self {
        let grid = Rc::new(grid);
        Interpreter {
            original_grid: Rc::clone(&grid),
            grid,
            stack: OperandStack::new(),
            cursor: Cursor::new(),
            mode: Mode::Normal,
            io,
            directions: Box::new(RngDirections::from_entropy()),
            snapshot_manager: SnapshotManager::new(config.snapshot_limit),
            config,
            history_position: 0,
            halted: false,
            steps: 0,
            output_len: 0,
            profile: FxHashMap::default(),
        }
    }

    /// Replace the source of randomness used by `?`
    pub fn with_directions(mut self, source: impl DirectionSource + 'static) -> Self {
        self.directions = Box::new(source);
        self
    }

    /// Run the program until it halts
    ///
    /// Output is flushed whether or not the run succeeds.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        let result = self.run_to_halt();
        let flushed = self.io.flush().map_err(|source| RuntimeError::Io {
            position: self.cursor.position,
            source,
        });

        match &result {
            Ok(()) => tracing::info!(steps = self.steps, "program halted"),
            Err(e) => tracing::warn!(steps = self.steps, error = %e, "execution stopped"),
        }

        result.and(flushed)
    }

    fn run_to_halt(&mut self) -> Result<(), RuntimeError> {
        loop {
            if let Some(limit) = self.config.max_steps {
                if self.steps >= limit && !self.halted {
                    return Err(RuntimeError::StepLimitExceeded { limit });
                }
            }

            if self.step()? == StepOutcome::Halt {
                return Ok(());
            }
        }
    }

    /// Execute one instruction cycle
    ///
    /// Once the program has halted, further calls return
    /// [`StepOutcome::Halt`] without touching any state.
    ///
    /// When recording, the cycle is followed by a snapshot. Stepping from an
    /// earlier point in the history first discards every snapshot after it,
    /// along with the output those snapshots wrote.
    pub fn step(&mut self) -> Result<StepOutcome, RuntimeError> {
        if self.halted {
            return Ok(StepOutcome::Halt);
        }

        if self.config.record_history {
            self.discard_future();
            if self.snapshot_manager.is_empty() {
                self.take_snapshot()?;
            }
        }

        let outcome = self.cycle()?;

        if self.config.record_history {
            self.take_snapshot()?;
        }
        Ok(outcome)
    }

    fn cycle(&mut self) -> Result<StepOutcome, RuntimeError> {
        let position = self.cursor.position;
        let cell = self.grid.at(position);
        self.steps += 1;
        let steps = self.steps;
        self.profile
            .entry(position)
            .and_modify(|p| p.hits += 1)
            .or_insert(CellProfile {
                hits: 1,
                first_step: steps,
            });

        if self.config.debug {
            self.trace(cell)?;
        }

        if self.mode == Mode::String && cell != QUOTE {
            self.stack.push(cell);
        } else if self.execute(Instruction::decode(cell), position)? == StepOutcome::Halt {
            self.halted = true;
            return Ok(StepOutcome::Halt);
        }

        self.cursor.advance();
        Ok(StepOutcome::Continue)
    }

    /// Dispatch a decoded instruction
    fn execute(
        &mut self,
        instruction: Instruction,
        position: Position,
    ) -> Result<StepOutcome, RuntimeError> {
        match instruction {
            Instruction::Go(direction) => self.cursor.set_direction(direction),
            Instruction::HorizontalIf => {
                let flag = self.stack.pop();
                self.cursor.branch(flag, Direction::Right, Direction::Left);
            }
            Instruction::VerticalIf => {
                let flag = self.stack.pop();
                self.cursor.branch(flag, Direction::Down, Direction::Up);
            }
            Instruction::Random => self.cursor.random_direction(self.directions.as_mut()),
            Instruction::Bridge => self.cursor.advance(),
            Instruction::Halt => return Ok(StepOutcome::Halt),

            Instruction::Digit(d) => self.stack.push(Value::from(d)),
            Instruction::ToggleString => {
                self.mode = match self.mode {
                    Mode::Normal => Mode::String,
                    Mode::String => Mode::Normal,
                };
            }

            Instruction::InputNumber => {
                let line = self.io.read_line().map_err(|e| io_error(e, position))?;
                let value = line.as_deref().map_or(0, parse_lenient_integer);
                self.stack.push(value);
            }
            Instruction::InputChar => {
                let c = self.io.read_char().map_err(|e| io_error(e, position))?;
                self.stack.push(c.map_or(-1, char_to_value));
            }
            Instruction::OutputNumber => {
                let text = self.stack.pop().to_string();
                self.emit(&text, position)?;
            }
            Instruction::OutputChar => {
                let c = value_to_char_lossy(self.stack.pop());
                self.emit(c.encode_utf8(&mut [0u8; 4]), position)?;
            }

            Instruction::Arith(op) => self.arith(op, position)?,
            Instruction::Greater => {
                let y = self.stack.pop();
                let x = self.stack.pop();
                self.stack.push(Value::from(x > y));
            }
            Instruction::Not => {
                // Equality-to-one test, not boolean negation: 5 yields 1
                let x = self.stack.pop();
                self.stack.push(if x == 1 { 0 } else { 1 });
            }

            Instruction::Duplicate => {
                let top = self.stack.peek();
                self.stack.push(top);
            }
            Instruction::Swap => {
                let a = self.stack.pop();
                let b = self.stack.pop();
                self.stack.push(a);
                self.stack.push(b);
            }
            Instruction::Pop => self.stack.discard(),

            Instruction::Get => {
                let y = self.stack.pop();
                let x = self.stack.pop();
                let value = self.grid.at(ProgramGrid::wrap(x, y));
                self.stack.push(value);
            }
            Instruction::Put => {
                let y = self.stack.pop();
                let x = self.stack.pop();
                let value = self.stack.pop();
                let target = ProgramGrid::wrap(x, y);
                Rc::make_mut(&mut self.grid).write(target.x, target.y, value);
            }

            Instruction::DumpGrid => {
                if self.config.debug {
                    let dump = self.grid_dump();
                    self.io
                        .write_diagnostic(&dump)
                        .map_err(|e| io_error(e, position))?;
                }
            }

            Instruction::Nop => {}
        }

        Ok(StepOutcome::Continue)
    }

    /// Pop `y`, pop `x`, push `x op y`
    fn arith(&mut self, op: ArithOp, position: Position) -> Result<(), RuntimeError> {
        let y = self.stack.pop();
        let x = self.stack.pop();

        let result = match op {
            ArithOp::Add => x.wrapping_add(y),
            ArithOp::Sub => x.wrapping_sub(y),
            ArithOp::Mul => x.wrapping_mul(y),
            ArithOp::Div | ArithOp::Mod if y == 0 => {
                tracing::error!(%position, op = %op.symbol(), "division by zero");
                return Err(RuntimeError::DivisionByZero {
                    operation: op,
                    position,
                });
            }
            ArithOp::Div => x.wrapping_div(y),
            ArithOp::Mod => x.wrapping_rem(y),
        };

        self.stack.push(result);
        Ok(())
    }

    fn emit(&mut self, text: &str, position: Position) -> Result<(), RuntimeError> {
        self.io
            .write_output(text)
            .map_err(|e| io_error(e, position))?;
        self.output_len += text.len();
        Ok(())
    }

    /// Write the per-step debug line
    fn trace(&mut self, cell: Value) -> Result<(), RuntimeError> {
        let stack = self
            .stack
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let line = format!(
            "pos: {} mnemonic: {} dir: {} stack: {}\n",
            self.cursor.position,
            value_to_char_lossy(cell),
            self.cursor.direction,
            stack
        );
        self.io
            .write_diagnostic(&line)
            .map_err(|e| io_error(e, self.cursor.position))
    }

    /// Grid rows for the `=` dump, each marked with a trailing `-`
    fn grid_dump(&self) -> String {
        let rows: Vec<String> = (0..self.grid.height())
            .map(|y| self.grid.row_text(y))
            .collect();
        let mut dump = rows.join("-\n");
        dump.push('\n');
        dump
    }

    /// Take a snapshot of the current execution state
    fn take_snapshot(&mut self) -> Result<(), RuntimeError> {
        let snapshot = Snapshot {
            grid: Rc::clone(&self.grid),
            stack: self.stack.clone(),
            cursor: self.cursor,
            mode: self.mode,
            halted: self.halted,
            steps: self.steps,
            output_len: self.output_len,
        };

        self.snapshot_manager.push(snapshot).map_err(|message| {
            tracing::warn!(%message, "snapshot history full");
            RuntimeError::SnapshotLimitExceeded {
                current: self.snapshot_manager.memory_usage(),
                limit: self.snapshot_manager.memory_limit(),
            }
        })?;

        self.history_position = self.snapshot_manager.len() - 1;
        Ok(())
    }

    /// Drop recorded history after the current position
    fn discard_future(&mut self) {
        let keep = self.history_position + 1;
        let recorded = self.snapshot_manager.len();
        if keep >= recorded {
            return;
        }

        tracing::debug!(keep, dropped = recorded - keep, "discarding recorded future");
        self.snapshot_manager.truncate(keep);
        self.io.truncate_output(self.output_len);

        let steps = self.steps;
        self.profile.retain(|_, p| p.first_step <= steps);
    }

    /// Restore execution state from a snapshot
    fn restore_snapshot(&mut self, index: usize) -> Result<(), RuntimeError> {
        let snapshot = self
            .snapshot_manager
            .get(index)
            .cloned()
            .ok_or_else(|| RuntimeError::history("Snapshot not found in history"))?;

        self.grid = snapshot.grid;
        self.stack = snapshot.stack;
        self.cursor = snapshot.cursor;
        self.mode = snapshot.mode;
        self.halted = snapshot.halted;
        self.steps = snapshot.steps;
        self.output_len = snapshot.output_len;
        self.history_position = index;
        Ok(())
    }

    /// Step backward in execution (restore previous snapshot)
    pub fn step_backward(&mut self) -> Result<(), RuntimeError> {
        if self.history_position == 0 {
            return Err(RuntimeError::history("Already at the beginning of execution"));
        }
        self.restore_snapshot(self.history_position - 1)
    }

    /// Step forward in execution (restore the next recorded snapshot)
    ///
    /// This only replays history; it never executes new instructions.
    pub fn step_forward(&mut self) -> Result<(), RuntimeError> {
        if self.history_position + 1 >= self.snapshot_manager.len() {
            return Err(RuntimeError::history(
                "No more snapshots available (execution finished)",
            ));
        }
        self.restore_snapshot(self.history_position + 1)
    }

    /// Rewind to the beginning of execution history
    pub fn rewind_to_start(&mut self) -> Result<(), RuntimeError> {
        if self.snapshot_manager.is_empty() {
            return Err(RuntimeError::history("No snapshots available"));
        }
        self.restore_snapshot(0)
    }

    /// Jump to the last recorded snapshot
    pub fn jump_to_end(&mut self) -> Result<(), RuntimeError> {
        match self.snapshot_manager.len() {
            0 => Err(RuntimeError::history("No snapshots available")),
            n => self.restore_snapshot(n - 1),
        }
    }

    // ========== Getter methods for UI ==========

    /// Get the program grid
    pub fn grid(&self) -> &ProgramGrid {
        &self.grid
    }

    /// Get the grid as it was loaded
    pub fn original_grid(&self) -> &ProgramGrid {
        &self.original_grid
    }

    /// Get a reference to the operand stack
    pub fn stack(&self) -> &OperandStack {
        &self.stack
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Check if execution has halted
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Number of steps executed
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Output written up to the current point in history
    ///
    /// Empty for ports that do not capture output.
    pub fn visible_output(&self) -> &str {
        let captured = self.io.captured_output().unwrap_or("");
        captured.get(..self.output_len).unwrap_or(captured)
    }

    /// Per-cell execution statistics for the recorded run
    pub fn profile(&self) -> &FxHashMap<Position, CellProfile> {
        &self.profile
    }

    /// Get the current history position
    pub fn history_position(&self) -> usize {
        self.history_position
    }

    /// Get the total number of snapshots
    pub fn total_snapshots(&self) -> usize {
        self.snapshot_manager.len()
    }

    pub fn io(&self) -> &Io {
        &self.io
    }
}

fn io_error(source: io::Error, position: Position) -> RuntimeError {
    RuntimeError::Io { position, source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::io::BufferedIo;
    use crate::interpreter::random::ScriptedDirections;

    fn interpreter(program: &str) -> Interpreter<BufferedIo> {
        interpreter_with_input(program, "")
    }

    fn interpreter_with_input(program: &str, input: &str) -> Interpreter<BufferedIo> {
        Interpreter::new(
            ProgramGrid::load(program),
            BufferedIo::new(input),
            InterpreterConfig::default(),
        )
    }

    fn stack_of(interp: &Interpreter<BufferedIo>) -> Vec<Value> {
        interp.stack().iter().copied().collect()
    }

    /// Step until the cursor has executed `n` cells
    fn step_n(interp: &mut Interpreter<BufferedIo>, n: usize) {
        for _ in 0..n {
            interp.step().unwrap();
        }
    }

    #[test]
    fn test_digits_and_addition() {
        let mut interp = interpreter("34+@");
        interp.run().unwrap();
        assert_eq!(stack_of(&interp), vec![7]);
    }

    #[test]
    fn test_operand_order() {
        let mut interp = interpreter("92-@");
        interp.run().unwrap();
        assert_eq!(stack_of(&interp), vec![7]);

        let mut interp = interpreter("72/@");
        interp.run().unwrap();
        assert_eq!(stack_of(&interp), vec![3]);

        let mut interp = interpreter("73%@");
        interp.run().unwrap();
        assert_eq!(stack_of(&interp), vec![1]);
    }

    #[test]
    fn test_division_truncates() {
        // 0 - 7 = -7, then -7 / 2
        let mut interp = interpreter("07-2/@");
        interp.run().unwrap();
        assert_eq!(stack_of(&interp), vec![-3]);
    }

    #[test]
    fn test_division_by_zero_faults() {
        let mut interp = interpreter("50/@");
        let err = interp.run().unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::DivisionByZero {
                operation: ArithOp::Div,
                position: Position { x: 2, y: 0 },
            }
        ));
    }

    #[test]
    fn test_modulo_by_zero_faults() {
        let mut interp = interpreter("50%@");
        assert!(matches!(
            interp.run(),
            Err(RuntimeError::DivisionByZero {
                operation: ArithOp::Mod,
                ..
            })
        ));
    }

    #[test]
    fn test_greater_than() {
        let mut interp = interpreter("52`25`@");
        interp.run().unwrap();
        assert_eq!(stack_of(&interp), vec![1, 0]);
    }

    #[test]
    fn test_not_is_equality_to_one() {
        let mut interp = interpreter("1!0!5!@");
        interp.run().unwrap();
        assert_eq!(stack_of(&interp), vec![0, 1, 1]);
    }

    #[test]
    fn test_duplicate_on_empty_stack() {
        let mut interp = interpreter(":@");
        interp.run().unwrap();
        assert_eq!(stack_of(&interp), vec![0]);
    }

    #[test]
    fn test_swap() {
        let mut interp = interpreter("12\\@");
        interp.run().unwrap();
        assert_eq!(stack_of(&interp), vec![2, 1]);

        let mut interp = interpreter("7\\@");
        interp.run().unwrap();
        assert_eq!(stack_of(&interp), vec![7, 0]);
    }

    #[test]
    fn test_pop_discards() {
        let mut interp = interpreter("12$$$@");
        interp.run().unwrap();
        assert!(interp.stack().is_empty());
    }

    #[test]
    fn test_horizontal_if() {
        // Nonzero turns left and wraps to the `@` at column 79
        let mut program = String::from("1_@");
        program.push_str(&" ".repeat(76));
        program.push('@');
        let mut interp = interpreter(&program);
        step_n(&mut interp, 2);
        assert_eq!(interp.cursor().direction, Direction::Left);
        assert_eq!(interp.cursor().position, Position::new(0, 0));

        let mut interp = interpreter("0_@");
        step_n(&mut interp, 2);
        assert_eq!(interp.cursor().direction, Direction::Right);
    }

    #[test]
    fn test_vertical_if() {
        let mut interp = interpreter("0|");
        step_n(&mut interp, 2);
        assert_eq!(interp.cursor().direction, Direction::Down);
        assert_eq!(interp.cursor().position, Position::new(1, 1));

        let mut interp = interpreter("3|");
        step_n(&mut interp, 2);
        assert_eq!(interp.cursor().direction, Direction::Up);
        assert_eq!(interp.cursor().position, Position::new(1, 24));
    }

    #[test]
    fn test_bridge_skips_one_cell() {
        let mut interp = interpreter("#57@");
        step_n(&mut interp, 1);
        assert_eq!(interp.cursor().position, Position::new(2, 0));
        interp.run().unwrap();
        assert_eq!(stack_of(&interp), vec![7]);
    }

    #[test]
    fn test_random_direction_is_injectable() {
        let mut interp =
            interpreter("?").with_directions(ScriptedDirections::new(vec![Direction::Down]));
        step_n(&mut interp, 1);
        assert_eq!(interp.cursor().direction, Direction::Down);
        assert_eq!(interp.cursor().position, Position::new(0, 1));
    }

    #[test]
    fn test_string_mode_pushes_codes() {
        let mut interp = interpreter("\"a b\"@");
        interp.run().unwrap();
        assert_eq!(stack_of(&interp), vec![97, 32, 98]);
        assert_eq!(interp.mode(), Mode::Normal);
    }

    #[test]
    fn test_string_mode_ignores_instructions() {
        let mut interp = interpreter("\"@1\"@");
        interp.run().unwrap();
        assert_eq!(stack_of(&interp), vec!['@' as Value, '1' as Value]);
    }

    #[test]
    fn test_output_number_and_char() {
        let mut interp = interpreter("55*.\"!\",@");
        interp.run().unwrap();
        assert_eq!(interp.io().output(), "25!");
    }

    #[test]
    fn test_output_invalid_code_is_replacement() {
        let mut interp = interpreter("01-,@");
        interp.run().unwrap();
        assert_eq!(interp.io().output(), "\u{FFFD}");
    }

    #[test]
    fn test_input_number() {
        let mut interp = interpreter_with_input("&&+.@", "20\n22\n");
        interp.run().unwrap();
        assert_eq!(interp.io().output(), "42");
    }

    #[test]
    fn test_input_number_malformed_and_eof() {
        let mut interp = interpreter_with_input("&&@", "abc\n");
        interp.run().unwrap();
        assert_eq!(stack_of(&interp), vec![0, 0]);
    }

    #[test]
    fn test_input_char() {
        let mut interp = interpreter_with_input("~~~@", "hé");
        interp.run().unwrap();
        assert_eq!(stack_of(&interp), vec![104, 0xE9, -1]);
    }

    #[test]
    fn test_get_reads_grid() {
        let mut interp = interpreter("10g@");
        interp.run().unwrap();
        assert_eq!(stack_of(&interp), vec!['0' as Value]);
    }

    #[test]
    fn test_put_modifies_program() {
        // 8 * 8 = 64 ('@') written at (6, 0) over the `5`, which then halts
        let mut interp = interpreter("88*60p5");
        interp.run().unwrap();
        assert_eq!(interp.grid().read(6, 0), '@' as Value);
        assert_eq!(interp.original_grid().read(6, 0), '5' as Value);
        assert!(interp.stack().is_empty());
        assert!(interp.is_halted());
    }

    #[test]
    fn test_put_wraps_coordinates() {
        // v = 9, x = 0 - 1 = -1, y = 0 - 1 = -1 -> (79, 24)
        let mut interp = interpreter("901-01-p@");
        interp.run().unwrap();
        assert_eq!(interp.grid().read(79, 24), 9);
    }

    #[test]
    fn test_halt_stops_without_advancing() {
        let mut interp = interpreter("@");
        assert_eq!(interp.step().unwrap(), StepOutcome::Halt);
        assert!(interp.is_halted());
        assert_eq!(interp.cursor().position, Position::new(0, 0));
        assert_eq!(interp.step().unwrap(), StepOutcome::Halt);
        assert_eq!(interp.steps(), 1);
    }

    #[test]
    fn test_step_limit() {
        let mut interp = Interpreter::new(
            ProgramGrid::load(">"),
            BufferedIo::default(),
            InterpreterConfig {
                max_steps: Some(10),
                ..InterpreterConfig::default()
            },
        );
        assert!(matches!(
            interp.run(),
            Err(RuntimeError::StepLimitExceeded { limit: 10 })
        ));
        assert_eq!(interp.steps(), 10);
    }

    #[test]
    fn test_debug_trace_format() {
        let mut interp = Interpreter::new(
            ProgramGrid::load("12@"),
            BufferedIo::default(),
            InterpreterConfig {
                debug: true,
                ..InterpreterConfig::default()
            },
        );
        interp.run().unwrap();
        let lines: Vec<&str> = interp.io().diagnostics().lines().collect();
        assert_eq!(
            lines,
            vec![
                "pos: (0 , 0) mnemonic: 1 dir: right stack: ",
                "pos: (1 , 0) mnemonic: 2 dir: right stack: 1",
                "pos: (2 , 0) mnemonic: @ dir: right stack: 1,2",
            ]
        );
    }

    #[test]
    fn test_dump_grid_only_in_debug() {
        let mut interp = interpreter("=@");
        interp.run().unwrap();
        assert_eq!(interp.io().diagnostics(), "");

        let mut interp = Interpreter::new(
            ProgramGrid::load("=@"),
            BufferedIo::default(),
            InterpreterConfig {
                debug: true,
                ..InterpreterConfig::default()
            },
        );
        interp.run().unwrap();
        let diagnostics = interp.io().diagnostics();
        let dump_lines: Vec<&str> = diagnostics
            .lines()
            .filter(|l| !l.starts_with("pos: "))
            .collect();
        assert_eq!(dump_lines.len(), 25);
        assert!(dump_lines[0].starts_with("=@"));
        assert!(dump_lines[0].ends_with('-'));
        assert!(!dump_lines[24].ends_with('-'));
    }

    #[test]
    fn test_profile_counts_cells() {
        let mut interp = interpreter("#@@");
        interp.run().unwrap();
        let hits = |x| interp.profile().get(&Position::new(x, 0)).map(|p| p.hits);
        assert_eq!(hits(0), Some(1));
        assert_eq!(hits(1), None);
        assert_eq!(hits(2), Some(1));
        assert_eq!(interp.profile()[&Position::new(2, 0)].first_step, 2);
    }

    #[test]
    fn test_profile_accumulates_hits() {
        // The `^` on the second row sends the cursor back to `>` each lap
        let mut interp = interpreter("5>:.1-:v\n ^     _@");
        interp.run().unwrap();
        let entry = interp.profile()[&Position::new(1, 0)];
        assert_eq!(entry.first_step, 2);
        assert_eq!(entry.hits, 5);
    }
}
