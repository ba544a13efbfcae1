use eframe::egui::{self, Context};
use log::debug;

pub mod config;
mod fps;
pub mod particle;
mod render;
pub mod sim;

use config::EffectConfig;
use fps::FpsCounter;
use sim::Simulation;

/// Drives the effect: owns the simulation and the frame loop. One `update`
/// call is one tick.
pub struct DriftApp {
    config: EffectConfig,
    sim: Simulation,
    fps: FpsCounter,
    show_fps: bool,
}

impl DriftApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: EffectConfig, show_fps: bool) -> Self {
        Self {
            config: config.sanitized(),
            sim: Simulation::new(),
            fps: FpsCounter::new(),
            show_fps,
        }
    }
}

impl eframe::App for DriftApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
                let painter = ui.painter_at(rect);

                // Resize discards and regenerates the whole batch. The first
                // frame takes this path too: the simulation starts empty with
                // zero bounds.
                let size = rect.size();
                if size != self.sim.bounds && size.x > 0.0 && size.y > 0.0 {
                    debug!(
                        "surface {}x{}, spawning {} particles",
                        size.x, size.y, self.config.particle_count
                    );
                    let mut rng = rand::thread_rng();
                    self.sim.initialize(&mut rng, size, &self.config);
                }

                match ui.input(|input| input.pointer.hover_pos()) {
                    Some(pos) if rect.contains(pos) => {
                        self.sim.set_pointer((pos - rect.min).to_pos2());
                    }
                    _ => self.sim.clear_pointer(),
                }

                // Paint the state as it stands, then advance it: the visible
                // frame lags one step behind the newest input sample.
                render::draw_swarm(&painter, rect, &self.sim, &self.config);
                self.sim.step(&self.config);

                if self.show_fps {
                    self.fps.update(ctx);
                    if let Some(text) = self.fps.display_text() {
                        painter.text(
                            rect.left_top() + egui::vec2(10.0, 10.0),
                            egui::Align2::LEFT_TOP,
                            text,
                            egui::FontId::proportional(13.0),
                            egui::Color32::from_gray(240),
                        );
                    }
                }
            });

        // The effect runs for the lifetime of the window.
        ctx.request_repaint();
    }
}
