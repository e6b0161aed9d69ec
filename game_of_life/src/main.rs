// main.rs - Game of Life desktop app: window setup and app state

use eframe::egui;
use std::time::Instant;

mod ui;

use life_engine::Engine;

// Fixed canvas size in pixels; grid dimensions are derived from it and the
// configured cell size.
pub const CANVAS_WIDTH: u32 = 1200;
pub const CANVAS_HEIGHT: u32 = 760;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1224.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(|_cc| Box::new(LifeApp::default())),
    )
}

pub struct LifeApp {
    pub engine: Engine,
    pub last_update: Instant,
    pub hex_input: String,
    pub selected_pattern: usize,
}

impl Default for LifeApp {
    fn default() -> Self {
        Self {
            engine: Engine::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            last_update: Instant::now(),
            hex_input: "36454F".to_owned(),
            selected_pattern: 0,
        }
    }
}
