// ui.rs - egui event wiring: controls, canvas painting, pointer forwarding

use eframe::egui;
use egui::{Color32, Rect, Vec2};
use std::time::Instant;

use crate::{CANVAS_HEIGHT, CANVAS_WIDTH, LifeApp};
use life_engine::{
    MAX_CELL_SIZE, MAX_STEP_INTERVAL_MS, MIN_CELL_SIZE, MIN_STEP_INTERVAL_MS, PATTERNS,
    PointerButton, Rgb,
};

const BG_COLOR: Color32 = Color32::BLACK;

fn to_color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-step when running and the interval has elapsed
        if !self.engine.paused() && self.last_update.elapsed() >= self.engine.step_interval() {
            self.engine.step();
            self.last_update = Instant::now();
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.engine.paused() {
                    "▶ Play"
                } else {
                    "⏸ Pause"
                };
                if ui.button(button_text).clicked() {
                    self.engine.toggle_paused();
                    if !self.engine.paused() {
                        self.last_update = Instant::now();
                    }
                }

                if ui.button("⏹ Clear").clicked() {
                    self.engine.clear();
                }

                if ui.button("🎲 Randomize").clicked() {
                    self.engine.randomize();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.engine.set_paused(true);
                    self.engine.apply_pattern(&PATTERNS[self.selected_pattern]);
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.engine.generation()));
            });

            ui.separator();

            // Simulation parameters
            ui.horizontal(|ui| {
                ui.label("Step interval:");
                let mut interval_ms = self.engine.step_interval().as_millis() as u64;
                if ui
                    .add(
                        egui::Slider::new(
                            &mut interval_ms,
                            MIN_STEP_INTERVAL_MS..=MAX_STEP_INTERVAL_MS,
                        )
                        .suffix(" ms"),
                    )
                    .changed()
                {
                    self.engine.set_step_interval_ms(interval_ms);
                }

                ui.separator();

                ui.label("Cell size:");
                let mut cell_size = self.engine.cell_size();
                if ui
                    .add(
                        egui::Slider::new(&mut cell_size, MIN_CELL_SIZE..=MAX_CELL_SIZE)
                            .suffix(" px"),
                    )
                    .changed()
                {
                    self.engine.set_cell_size(cell_size);
                }

                ui.separator();

                // Hex color entry; invalid input keeps the previous color
                ui.label("Live color:");
                let response =
                    ui.add(egui::TextEdit::singleline(&mut self.hex_input).desired_width(70.0));
                if response.changed() {
                    if let Err(err) = self.engine.set_live_color_hex(&self.hex_input) {
                        log::debug!("ignoring color input {:?}: {err}", self.hex_input);
                    }
                }
                let (swatch, _) = ui.allocate_exact_size(Vec2::splat(14.0), egui::Sense::hover());
                ui.painter()
                    .rect_filled(swatch, 2.0, to_color32(self.engine.live_color()));
            });

            ui.separator();

            ui.label("Left-drag draws cells, right-drag erases. Editing works while running.");

            ui.separator();

            // Canvas
            let canvas_size = Vec2::new(CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32);
            let (response, painter) =
                ui.allocate_painter(canvas_size, egui::Sense::click_and_drag());
            let canvas_rect = response.rect;

            painter.rect_filled(canvas_rect, 0.0, BG_COLOR);

            let cell_size = self.engine.cell_size() as f32;
            let live_color = to_color32(self.engine.live_color());
            let grid = self.engine.grid();
            for y in 0..grid.height() {
                for x in 0..grid.width() {
                    if grid.is_alive(x, y) {
                        let min = canvas_rect.min
                            + Vec2::new(x as f32 * cell_size, y as f32 * cell_size);
                        let rect = Rect::from_min_size(min, Vec2::splat(cell_size));
                        painter.rect_filled(rect, 0.0, live_color);
                    }
                }
            }

            // Forward pointer edges and the hovered position to the engine.
            // Positions outside the canvas are dropped; releases always go
            // through so a drag that leaves the window still ends.
            let (primary_pressed, secondary_pressed, primary_released, secondary_released, pos) =
                ui.input(|i| {
                    (
                        i.pointer.button_pressed(egui::PointerButton::Primary),
                        i.pointer.button_pressed(egui::PointerButton::Secondary),
                        i.pointer.button_released(egui::PointerButton::Primary),
                        i.pointer.button_released(egui::PointerButton::Secondary),
                        i.pointer.interact_pos(),
                    )
                });

            if let Some(pos) = pos {
                if canvas_rect.contains(pos) {
                    let px = (pos.x - canvas_rect.min.x) as u32;
                    let py = (pos.y - canvas_rect.min.y) as u32;
                    if primary_pressed {
                        self.engine.pointer_down(PointerButton::Primary, px, py);
                    }
                    if secondary_pressed {
                        self.engine.pointer_down(PointerButton::Secondary, px, py);
                    }
                    self.engine.pointer_moved(px, py);
                }
            }
            if primary_released {
                self.engine.pointer_up(PointerButton::Primary);
            }
            if secondary_released {
                self.engine.pointer_up(PointerButton::Secondary);
            }

            ui.separator();

            // Statistics
            let grid = self.engine.grid();
            let total = grid.width() * grid.height();
            let live = grid.live_count();
            ui.horizontal(|ui| {
                ui.label(format!("Grid: {}x{}", grid.width(), grid.height()));
                ui.label(format!("Live cells: {live}"));
                ui.label(format!("Dead cells: {}", total - live));
            });
        });

        // Keep the animation smooth while running
        if !self.engine.paused() {
            ctx.request_repaint();
        }
    }
}
