use eframe::egui::{Pos2, Vec2, pos2, vec2};
use rand::Rng;

use super::config::EffectConfig;

// Below this the pointer sits on the particle and the push direction is
// undefined; skip repulsion for the frame rather than divide by zero.
const ZERO_DISTANCE: f32 = 1e-4;

/// One drifting glyph of the swarm. Size, glyph, and opacity are fixed at
/// spawn; position and velocity change every frame.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Pos2,
    pub vel: Vec2,
    pub size: f32,
    pub glyph: String,
    pub opacity: f32,
}

impl Particle {
    pub fn spawn(rng: &mut impl Rng, bounds: Vec2, config: &EffectConfig) -> Self {
        let half_speed = config.particle_speed * 0.5;
        Self {
            pos: pos2(rng.gen_range(0.0..bounds.x), rng.gen_range(0.0..bounds.y)),
            vel: vec2(
                rng.gen_range(-half_speed..=half_speed),
                rng.gen_range(-half_speed..=half_speed),
            ),
            size: rng.gen_range(config.min_size..=config.max_size),
            glyph: config.glyphs[rng.gen_range(0..config.glyphs.len())].clone(),
            opacity: rng.gen_range(config.min_opacity..=config.max_opacity),
        }
    }

    /// Advances one frame: drift, bounce off the surface edges, then yield to
    /// pointer repulsion when a pointer is present.
    pub fn step(&mut self, pointer: Option<Pos2>, bounds: Vec2, config: &EffectConfig) {
        self.pos += self.vel;

        // Hard reflect, one axis at a time. The position may overshoot the
        // edge by one frame's velocity before the flip takes effect.
        if self.pos.x < 0.0 || self.pos.x > bounds.x {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > bounds.y {
            self.vel.y = -self.vel.y;
        }

        let Some(pointer) = pointer else { return };
        let delta = pointer - self.pos;
        let distance = delta.length();
        if distance >= config.repulsion_radius || distance <= ZERO_DISTANCE {
            return;
        }

        // Linear falloff: full push with the pointer on top of the particle,
        // none at the radius. Displaces position directly, not velocity, so
        // the push vanishes the moment the pointer leaves.
        let direction = delta / distance;
        let force = (config.repulsion_radius - distance) / config.repulsion_radius;
        self.pos -= direction * force * config.repulsion_strength;
    }
}
