use eframe::egui::{Pos2, Vec2};
use rand::Rng;

use super::config::EffectConfig;
use super::particle::Particle;

/// The whole mutable state of the effect: the particle batch, the latest
/// pointer sample, and the surface size the batch was spawned for.
#[derive(Default)]
pub struct Simulation {
    pub particles: Vec<Particle>,
    pub pointer: Option<Pos2>,
    pub bounds: Vec2,
}

impl Simulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the current batch and spawns a fresh one for the given
    /// surface size. Runs once at startup and again on every resize; the
    /// count stays `config.particle_count` until the next call.
    pub fn initialize(&mut self, rng: &mut impl Rng, bounds: Vec2, config: &EffectConfig) {
        self.bounds = bounds;
        self.particles = (0..config.particle_count)
            .map(|_| Particle::spawn(rng, bounds, config))
            .collect();
    }

    /// Advances every particle one frame against the current pointer sample.
    pub fn step(&mut self, config: &EffectConfig) {
        for particle in &mut self.particles {
            particle.step(self.pointer, self.bounds, config);
        }
    }

    pub fn set_pointer(&mut self, pos: Pos2) {
        self.pointer = Some(pos);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }
}
