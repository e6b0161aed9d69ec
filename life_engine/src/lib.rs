// life_engine - Conway's Game of Life core: grid, transition rule, and the
// pointer-edit layer. No GUI dependency; the presentation layer talks to
// `Engine` only.

pub mod color;
pub mod engine;
pub mod grid;
pub mod paint;
pub mod patterns;

pub use color::{ColorParseError, DEFAULT_LIVE_COLOR, Rgb};
pub use engine::{
    DEFAULT_CELL_SIZE, DEFAULT_STEP_INTERVAL_MS, Engine, MAX_CELL_SIZE, MAX_STEP_INTERVAL_MS,
    MIN_CELL_SIZE, MIN_STEP_INTERVAL_MS,
};
pub use grid::Grid;
pub use paint::{PaintState, PointerButton, pixel_to_cell};
pub use patterns::{PATTERNS, Pattern};
