//! doodle-rs - Random Drawing Generator
//!
//! Scatters randomly generated geometric figures over a user-defined
//! coordinate region: lines, circles, rectangles, triangles, parabolas
//! and trapezoids. A density slider pulls shape placement toward the
//! center of the region; shape sizes stay uniform regardless.
//!
//! The window is a thin shell: parameters go in on the left, the
//! generated drawing comes out on the canvas. All generation lives in
//! the `doodle_rs` library crate.

use eframe::egui;
use rand::rngs::ThreadRng;

mod render;
mod settings;

use doodle_rs::{Drawing, InputParameters, ShapeGenerator};
use render::Canvas;
use settings::AppSettings;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting doodle-rs");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_title("doodle-rs"),
        ..Default::default()
    };

    eframe::run_native(
        "doodle-rs",
        options,
        Box::new(|cc| Ok(Box::new(DoodleApp::new(cc)))),
    )
}

/// Main application state
struct DoodleApp {
    params: InputParameters,
    generator: ShapeGenerator<ThreadRng>,
    drawing: Drawing,
    canvas: Canvas,
    status: String,
}

impl DoodleApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let stored = AppSettings::load().to_params();
        let params = match stored.validate() {
            Ok(()) => stored,
            Err(e) => {
                log::warn!("Stored parameters invalid ({}), using defaults", e);
                InputParameters::default()
            }
        };

        Self {
            params,
            generator: ShapeGenerator::new(),
            drawing: Drawing::empty(params.viewport()),
            canvas: Canvas::new(),
            status: "Ready.".to_string(),
        }
    }

    /// Validate the current parameters and produce a fresh drawing
    fn generate(&mut self) {
        match self.params.validate() {
            Ok(()) => {
                let drawing = self.generator.generate(&self.params);
                self.status = format!("Generated shapes: {}", drawing.len());
                self.drawing = drawing;
            }
            Err(e) => {
                log::warn!("Rejected generation request: {}", e);
                self.status = e.to_string();
            }
        }
    }

    /// Drop all shapes but keep the current region's grid visible
    fn clear(&mut self) {
        self.drawing = Drawing::empty(self.drawing.viewport());
        self.status = "Drawing cleared.".to_string();
        log::info!("Drawing cleared");
    }
}

/// A drag field with its label to the right
fn count_row(ui: &mut egui::Ui, label: &str, value: &mut u32) {
    ui.horizontal(|ui| {
        ui.add(egui::DragValue::new(value).speed(1.0).range(0.0..=1000.0));
        ui.label(label);
    });
}

fn coord_row(ui: &mut egui::Ui, label: &str, value: &mut f64) {
    ui.horizontal(|ui| {
        ui.add(egui::DragValue::new(value).speed(10.0));
        ui.label(label);
    });
}

impl eframe::App for DoodleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top panel
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("doodle-rs");
                ui.separator();

                if ui.button("Generate").clicked() {
                    self.generate();
                }
                if ui.button("Clear").clicked() {
                    self.clear();
                }

                ui.separator();
                ui.label(&self.status);
            });
        });

        // Parameter panel
        egui::SidePanel::left("params_panel")
            .min_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Shapes");
                ui.separator();

                count_row(ui, "Lines", &mut self.params.line_count);
                count_row(ui, "Circles", &mut self.params.circle_count);
                count_row(ui, "Rectangles", &mut self.params.rectangle_count);
                count_row(ui, "Triangles", &mut self.params.triangle_count);
                count_row(ui, "Parabolas", &mut self.params.parabola_count);
                count_row(ui, "Trapezoids", &mut self.params.trapezoid_count);

                ui.separator();
                ui.heading("Region");
                ui.separator();

                coord_row(ui, "Min X", &mut self.params.min_x);
                coord_row(ui, "Max X", &mut self.params.max_x);
                coord_row(ui, "Min Y", &mut self.params.min_y);
                coord_row(ui, "Max Y", &mut self.params.max_y);

                ui.separator();
                ui.heading("Distribution");
                ui.separator();

                ui.add(
                    egui::Slider::new(&mut self.params.density, 0.0..=1.0)
                        .text("Density"),
                );
                ui.horizontal(|ui| {
                    ui.add(
                        egui::DragValue::new(&mut self.params.grid_step)
                            .speed(1.0)
                            .range(0.0..=10_000.0),
                    );
                    ui.label("Grid step");
                });

                ui.separator();

                // Display settings
                ui.collapsing("Display", |ui| {
                    ui.add(
                        egui::Slider::new(&mut self.canvas.settings.stroke_width, 0.5..=5.0)
                            .text("Line width"),
                    );
                    ui.checkbox(&mut self.canvas.settings.show_grid, "Show grid");
                });
            });

        // Main canvas
        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas.show(ui, &self.drawing, None);

            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                ui.horizontal(|ui| {
                    ui.small(format!("Shapes: {}", self.drawing.len()));
                    ui.separator();
                    let vp = self.drawing.viewport();
                    ui.small(format!("Region: {:.0} x {:.0}", vp.width(), vp.height()));
                });
            });
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        AppSettings::from_params(&self.params).save();
        log::info!("Saved settings on exit");
    }
}
