// fungetty: Time-Travel Befunge-93 Interpreter with Grid Visualization

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use fungetty::interpreter::config::InterpreterConfig;
use fungetty::interpreter::constants::{DEFAULT_RECORDING_STEPS, DEFAULT_SNAPSHOT_LIMIT};
use fungetty::interpreter::engine::Interpreter;
use fungetty::interpreter::io::{BufferedIo, IoPort, StdIo};
use fungetty::interpreter::random::RngDirections;
use fungetty::memory::grid::ProgramGrid;
use fungetty::ui::App;

/// Exit status when the program file cannot be read
const EXIT_FILE_NOT_FOUND: i32 = 1;

/// Exit status when execution stops on a runtime error
const EXIT_RUNTIME_ERROR: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "fungetty", version)]
#[command(about = "Befunge-93 interpreter with a time-travel viewer", long_about = None)]
struct Cli {
    /// Trace every step and enable `=` grid dumps on stderr
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Record the run and browse it in the terminal viewer
    #[arg(long)]
    tui: bool,

    /// Input fed to `&` and `~` when recording for the viewer
    #[arg(long, value_name = "FILE", requires = "tui")]
    input: Option<PathBuf>,

    /// Stop after this many steps
    #[arg(long, value_name = "N")]
    max_steps: Option<usize>,

    /// Snapshot history budget in bytes
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_SNAPSHOT_LIMIT)]
    snapshot_limit: usize,

    /// Seed for `?`, making runs reproducible
    #[arg(long)]
    seed: Option<u64>,

    /// Befunge-93 program file
    program: PathBuf,
}

impl Cli {
    fn config(&self) -> InterpreterConfig {
        InterpreterConfig {
            debug: self.debug,
            record_history: self.tui,
            snapshot_limit: self.snapshot_limit,
            max_steps: if self.tui {
                Some(self.max_steps.unwrap_or(DEFAULT_RECORDING_STEPS))
            } else {
                self.max_steps
            },
        }
    }

    fn interpreter<Io: IoPort>(&self, grid: ProgramGrid, io: Io) -> Interpreter<Io> {
        let interpreter = Interpreter::new(grid, io, self.config());
        match self.seed {
            Some(seed) => interpreter.with_directions(RngDirections::seeded(seed)),
            None => interpreter,
        }
    }
}

/// Read a file, exiting with a "file not found" message on failure
fn read_or_exit(path: &Path) -> Vec<u8> {
    match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "cannot read file");
            eprintln!("fungetty: file not found: {}", path.display());
            process::exit(EXIT_FILE_NOT_FOUND);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let source = String::from_utf8_lossy(&read_or_exit(&cli.program)).into_owned();
    let grid = ProgramGrid::load(&source);
    tracing::debug!(program = %cli.program.display(), "program loaded");

    if cli.tui {
        run_viewer(&cli, grid)
    } else {
        run_plain(&cli, grid)
    }
}

/// Run against the process streams
fn run_plain(cli: &Cli, grid: ProgramGrid) -> Result<(), Box<dyn std::error::Error>> {
    let mut interpreter = cli.interpreter(grid, StdIo::stdio());

    if let Err(e) = interpreter.run() {
        if let Some(position) = e.position() {
            tracing::debug!(%position, "fault location");
        }
        eprintln!("fungetty: {}", e);
        process::exit(EXIT_RUNTIME_ERROR);
    }

    Ok(())
}

/// Record the run, then browse it in the TUI
fn run_viewer(cli: &Cli, grid: ProgramGrid) -> Result<(), Box<dyn std::error::Error>> {
    let input = cli.input.as_deref().map(read_or_exit).unwrap_or_default();
    let mut interpreter = cli.interpreter(grid, BufferedIo::new(input));

    // Run execution to build history
    eprintln!("Recording execution...");
    let stopped_early = match interpreter.run() {
        Ok(()) => {
            eprintln!("Execution completed successfully.");
            eprintln!("Total snapshots: {}", interpreter.total_snapshots());
            false
        }
        Err(e) => {
            eprintln!("Runtime error: {}", e);
            eprintln!("Entering TUI with partial execution history...");
            true
        }
    };

    // Rewind to the beginning for TUI
    if let Err(e) = interpreter.rewind_to_start() {
        eprintln!("Warning: Failed to rewind to start: {}", e);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(interpreter, stopped_early);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
