// engine.rs - owns the grid, the paint state, and the simulation parameters

use std::time::Duration;

use crate::color::{ColorParseError, DEFAULT_LIVE_COLOR, Rgb};
use crate::grid::Grid;
use crate::paint::{PaintState, PointerButton, pixel_to_cell};
use crate::patterns::Pattern;

pub const MIN_CELL_SIZE: u32 = 1;
pub const MAX_CELL_SIZE: u32 = 50;
pub const DEFAULT_CELL_SIZE: u32 = 10;

pub const MIN_STEP_INTERVAL_MS: u64 = 1;
pub const MAX_STEP_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_STEP_INTERVAL_MS: u64 = 1000;

/// Simulation controller. Event handlers get a reference to this instead of
/// sharing mutable fields, and every grid write goes through its
/// bounds-checked entry points.
pub struct Engine {
    canvas_width: u32,
    canvas_height: u32,
    cell_size: u32,
    step_interval: Duration,
    live_color: Rgb,
    paused: bool,
    generation: u64,
    grid: Grid,
    paint: PaintState,
}

impl Engine {
    /// Engine over a fixed canvas, starting unpaused with a random grid.
    pub fn new(canvas_width: u32, canvas_height: u32) -> Self {
        let cell_size = DEFAULT_CELL_SIZE;
        let grid = Grid::random(
            (canvas_width / cell_size) as usize,
            (canvas_height / cell_size) as usize,
        );
        Self {
            canvas_width,
            canvas_height,
            cell_size,
            step_interval: Duration::from_millis(DEFAULT_STEP_INTERVAL_MS),
            live_color: DEFAULT_LIVE_COLOR,
            paused: false,
            generation: 0,
            grid,
            paint: PaintState::Idle,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn step_interval(&self) -> Duration {
        self.step_interval
    }

    pub fn live_color(&self) -> Rgb {
        self.live_color
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }

    /// Advance one generation and swap in the new grid.
    pub fn step(&mut self) {
        self.grid = self.grid.step();
        self.generation += 1;
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Fresh random grid at the current dimensions.
    pub fn randomize(&mut self) {
        self.grid = Grid::random(self.grid.width(), self.grid.height());
        self.generation = 0;
    }

    /// Change the cell size and reallocate the grid from the canvas
    /// dimensions. Resize implies reinitialize: the previous pattern is not
    /// preserved.
    pub fn set_cell_size(&mut self, size: u32) {
        let size = size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);
        if size == self.cell_size {
            return;
        }
        self.cell_size = size;
        self.grid = Grid::random(
            (self.canvas_width / size) as usize,
            (self.canvas_height / size) as usize,
        );
        self.generation = 0;
        log::debug!(
            "resized to {}x{} cells at {size}px",
            self.grid.width(),
            self.grid.height()
        );
    }

    pub fn set_step_interval_ms(&mut self, ms: u64) {
        self.step_interval =
            Duration::from_millis(ms.clamp(MIN_STEP_INTERVAL_MS, MAX_STEP_INTERVAL_MS));
    }

    /// Adopt a new live-cell color from hex input. On parse failure the
    /// previous color stays active and the error is returned to the caller.
    pub fn set_live_color_hex(&mut self, hex: &str) -> Result<(), ColorParseError> {
        self.live_color = Rgb::from_hex(hex)?;
        Ok(())
    }

    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        pattern.stamp_centered(&mut self.grid);
        self.generation = 0;
    }

    /// Bounds-checked cell write; out-of-range is a no-op.
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) -> bool {
        self.grid.set(x, y, alive)
    }

    /// Button press: enter the matching paint state and apply one write, so
    /// a click with no movement still edits the hovered cell.
    pub fn pointer_down(&mut self, button: PointerButton, px: u32, py: u32) {
        self.paint = self.paint.press(button);
        self.paint_at(px, py);
    }

    /// Pointer movement: writes the brush value while drawing or erasing,
    /// does nothing while idle.
    pub fn pointer_moved(&mut self, px: u32, py: u32) {
        self.paint_at(px, py);
    }

    /// Button release: exits the matching paint state only.
    pub fn pointer_up(&mut self, button: PointerButton) {
        self.paint = self.paint.release(button);
    }

    fn paint_at(&mut self, px: u32, py: u32) {
        if let Some(alive) = self.paint.brush() {
            let (x, y) = pixel_to_cell(px, py, self.cell_size);
            self.grid.set(x, y, alive);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Engine {
        // 100x80 canvas at the default 10px cell size: a 10x8 grid.
        Engine::new(100, 80)
    }

    #[test]
    fn new_engine_dimensions_follow_canvas_division() {
        let engine = engine();
        assert_eq!(engine.grid().width(), 10);
        assert_eq!(engine.grid().height(), 8);
        assert_eq!(engine.cell_size(), DEFAULT_CELL_SIZE);
        assert!(!engine.paused());
    }

    #[test]
    fn step_bumps_generation_and_keeps_dimensions() {
        let mut engine = engine();
        engine.step();
        engine.step();
        assert_eq!(engine.generation(), 2);
        assert_eq!(engine.grid().width(), 10);
        assert_eq!(engine.grid().height(), 8);
    }

    #[test]
    fn clear_empties_grid_and_resets_generation() {
        let mut engine = engine();
        engine.step();
        engine.clear();
        assert_eq!(engine.grid().live_count(), 0);
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn cell_size_change_rederives_dimensions() {
        let mut engine = engine();
        engine.set_cell_size(7);
        // 100/7 = 14, 80/7 = 11, truncating.
        assert_eq!(engine.grid().width(), 14);
        assert_eq!(engine.grid().height(), 11);
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn cell_size_change_discards_previous_pattern() {
        let mut engine = engine();
        engine.clear();
        engine.set_cell_size(20);
        engine.set_cell_size(10);
        // Two random refills of 80 cells each; all-dead twice in a row is
        // beyond plausible.
        assert!(engine.grid().live_count() > 0);
    }

    #[test]
    fn cell_size_is_clamped() {
        let mut engine = engine();
        engine.set_cell_size(0);
        assert_eq!(engine.cell_size(), MIN_CELL_SIZE);
        engine.set_cell_size(99);
        assert_eq!(engine.cell_size(), MAX_CELL_SIZE);
        assert_eq!(engine.grid().width(), 2);
        assert_eq!(engine.grid().height(), 1);
    }

    #[test]
    fn unchanged_cell_size_keeps_the_grid() {
        let mut engine = engine();
        engine.clear();
        engine.set_cell_size(engine.cell_size());
        assert_eq!(engine.grid().live_count(), 0);
    }

    #[test]
    fn step_interval_is_clamped() {
        let mut engine = engine();
        engine.set_step_interval_ms(0);
        assert_eq!(engine.step_interval(), Duration::from_millis(1));
        engine.set_step_interval_ms(5000);
        assert_eq!(engine.step_interval(), Duration::from_millis(1000));
        engine.set_step_interval_ms(250);
        assert_eq!(engine.step_interval(), Duration::from_millis(250));
    }

    #[test]
    fn invalid_hex_keeps_previous_color() {
        let mut engine = engine();
        assert!(engine.set_live_color_hex("#AA00FF").is_ok());
        assert!(engine.set_live_color_hex("oops").is_err());
        assert!(engine.set_live_color_hex("").is_err());
        assert_eq!(engine.live_color(), Rgb::new(0xAA, 0x00, 0xFF));
    }

    #[test]
    fn click_applies_exactly_one_write() {
        let mut engine = engine();
        engine.clear();
        engine.pointer_down(PointerButton::Primary, 25, 35);
        engine.pointer_up(PointerButton::Primary);
        assert_eq!(engine.grid().live_count(), 1);
        assert!(engine.grid().is_alive(2, 3));
    }

    #[test]
    fn drag_paints_every_hovered_cell() {
        let mut engine = engine();
        engine.clear();
        engine.pointer_down(PointerButton::Primary, 5, 5);
        engine.pointer_moved(15, 5);
        engine.pointer_moved(25, 5);
        engine.pointer_up(PointerButton::Primary);
        engine.pointer_moved(35, 5);
        assert_eq!(engine.grid().live_count(), 3);
        assert!(engine.grid().is_alive(0, 0));
        assert!(engine.grid().is_alive(1, 0));
        assert!(engine.grid().is_alive(2, 0));
        assert!(!engine.grid().is_alive(3, 0));
    }

    #[test]
    fn secondary_drag_erases() {
        let mut engine = engine();
        engine.clear();
        engine.set_cell(1, 0, true);
        engine.set_cell(2, 0, true);
        engine.pointer_down(PointerButton::Secondary, 15, 5);
        engine.pointer_moved(25, 5);
        engine.pointer_up(PointerButton::Secondary);
        assert_eq!(engine.grid().live_count(), 0);
    }

    #[test]
    fn moves_while_idle_write_nothing() {
        let mut engine = engine();
        engine.clear();
        engine.pointer_moved(5, 5);
        assert_eq!(engine.grid().live_count(), 0);
    }

    #[test]
    fn out_of_canvas_pointer_is_a_no_op() {
        let mut engine = engine();
        engine.clear();
        engine.pointer_down(PointerButton::Primary, 5000, 5000);
        engine.pointer_moved(u32::MAX, u32::MAX);
        engine.pointer_up(PointerButton::Primary);
        assert_eq!(engine.grid().live_count(), 0);
    }

    #[test]
    fn pattern_application_resets_generation() {
        let mut engine = engine();
        engine.step();
        engine.apply_pattern(&crate::patterns::PATTERNS[1]);
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.grid().live_count(), 3);
    }
}
