use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use log::info;

use glyphdrift::app::DriftApp;
use glyphdrift::app::config::EffectConfig;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON file overriding the built-in effect constants (partial files are fine).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the particle count from the config.
    #[arg(long)]
    particles: Option<usize>,
    /// Show a frame-rate readout in the corner.
    #[arg(long)]
    show_fps: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EffectConfig::load(path)?,
        None => EffectConfig::default(),
    };
    if let Some(count) = args.particles {
        config.particle_count = count;
    }
    let config = config.sanitized();
    info!(
        "starting swarm: {} particles, connection distance {}, repulsion radius {}",
        config.particle_count, config.connection_distance, config.repulsion_radius
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    let show_fps = args.show_fps;
    eframe::run_native(
        "glyphdrift",
        options,
        Box::new(move |cc| Ok(Box::new(DriftApp::new(cc, config, show_fps)))),
    )
    .map_err(|error| anyhow!("could not create rendering surface: {error}"))
}
