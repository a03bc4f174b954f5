// Constants for the Befunge-93 interpreter

/// Number of columns in the program grid
pub const GRID_WIDTH: usize = 80;

/// Number of rows in the program grid
pub const GRID_HEIGHT: usize = 25;

/// Default snapshot history budget (256 MiB)
pub const DEFAULT_SNAPSHOT_LIMIT: usize = 256 * 1024 * 1024;

/// Default step budget when recording a run for the viewer
pub const DEFAULT_RECORDING_STEPS: usize = 100_000;
