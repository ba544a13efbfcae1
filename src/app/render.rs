use eframe::egui::{Align2, Color32, FontId, Painter, Rect, Stroke};

use super::config::EffectConfig;
use super::sim::Simulation;

const BACKDROP: Color32 = Color32::from_rgb(19, 23, 29);

/// Stroke alpha of a connection line, `None` once the pair is at or past the
/// cutoff. Fades linearly from 0.2 at zero distance to transparent at the
/// cutoff.
pub(super) fn connection_alpha(distance: f32, cutoff: f32) -> Option<f32> {
    if cutoff <= 0.0 || distance >= cutoff {
        return None;
    }
    Some((1.0 - distance / cutoff) * 0.2)
}

pub(super) fn glyph_color(opacity: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(226, 232, 236, (opacity.clamp(0.0, 1.0) * 255.0) as u8)
}

fn connection_stroke(alpha: f32, color: [u8; 3]) -> Stroke {
    Stroke::new(
        1.0,
        Color32::from_rgba_unmultiplied(color[0], color[1], color[2], (alpha * 255.0) as u8),
    )
}

/// Paints one full frame: clear, glyph pass, then the connection pass over
/// every distinct pair. Particle opacity rides in each call's color, so one
/// draw can never bleed alpha into the next.
pub(super) fn draw_swarm(painter: &Painter, rect: Rect, sim: &Simulation, config: &EffectConfig) {
    painter.rect_filled(rect, 0.0, BACKDROP);

    for particle in &sim.particles {
        painter.text(
            rect.min + particle.pos.to_vec2(),
            Align2::CENTER_CENTER,
            &particle.glyph,
            FontId::proportional(particle.size),
            glyph_color(particle.opacity),
        );
    }

    for i in 0..sim.particles.len() {
        for j in (i + 1)..sim.particles.len() {
            let a = sim.particles[i].pos;
            let b = sim.particles[j].pos;
            let Some(alpha) = connection_alpha((a - b).length(), config.connection_distance)
            else {
                continue;
            };
            painter.line_segment(
                [rect.min + a.to_vec2(), rect.min + b.to_vec2()],
                connection_stroke(alpha, config.line_color),
            );
        }
    }
}
