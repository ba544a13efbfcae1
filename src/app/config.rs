use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

fn default_glyphs() -> Vec<String> {
    ["★", "☆", "❄", "♥", "♪", "☁"].map(str::to_owned).to_vec()
}

/// Constants of the effect, resolved once at startup (CLI > file > defaults).
/// Nothing here changes while the effect runs.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    pub particle_count: usize,
    /// Pairs closer than this are joined by a fading line.
    pub connection_distance: f32,
    /// Pointer pushes particles away inside this distance.
    pub repulsion_radius: f32,
    pub repulsion_strength: f32,
    /// Velocity components are drawn from [-speed/2, +speed/2] at spawn.
    pub particle_speed: f32,
    pub min_size: f32,
    pub max_size: f32,
    pub min_opacity: f32,
    pub max_opacity: f32,
    pub glyphs: Vec<String>,
    pub line_color: [u8; 3],
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            particle_count: 60,
            connection_distance: 150.0,
            repulsion_radius: 250.0,
            repulsion_strength: 2.0,
            particle_speed: 0.5,
            min_size: 10.0,
            max_size: 25.0,
            min_opacity: 0.1,
            max_opacity: 0.4,
            glyphs: default_glyphs(),
            line_color: [13, 148, 136],
        }
    }
}

impl EffectConfig {
    /// Reads a JSON config file. Missing fields keep their defaults, so a
    /// file naming a single constant is a valid override.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("invalid effect config in {}", path.display()))?;
        Ok(config)
    }

    /// Clamps degenerate values into usable ranges instead of erroring; a bad
    /// config is not worth halting a background effect over.
    pub fn sanitized(mut self) -> Self {
        self.particle_count = self.particle_count.max(1);
        self.connection_distance = self.connection_distance.max(0.0);
        self.repulsion_radius = self.repulsion_radius.max(0.0);
        self.repulsion_strength = self.repulsion_strength.max(0.0);
        self.particle_speed = self.particle_speed.max(0.0);

        self.min_size = self.min_size.max(1.0);
        self.max_size = self.max_size.max(1.0);
        if self.max_size < self.min_size {
            std::mem::swap(&mut self.min_size, &mut self.max_size);
        }

        self.min_opacity = self.min_opacity.clamp(0.0, 1.0);
        self.max_opacity = self.max_opacity.clamp(0.0, 1.0);
        if self.max_opacity < self.min_opacity {
            std::mem::swap(&mut self.min_opacity, &mut self.max_opacity);
        }

        if self.glyphs.is_empty() {
            self.glyphs = default_glyphs();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_effect() {
        let config = EffectConfig::default();
        assert_eq!(config.particle_count, 60);
        assert_eq!(config.connection_distance, 150.0);
        assert_eq!(config.repulsion_radius, 250.0);
        assert_eq!(config.repulsion_strength, 2.0);
        assert_eq!(config.particle_speed, 0.5);
        assert_eq!((config.min_size, config.max_size), (10.0, 25.0));
        assert_eq!((config.min_opacity, config.max_opacity), (0.1, 0.4));
        assert_eq!(config.glyphs.len(), 6);
        assert_eq!(config.line_color, [13, 148, 136]);
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config: EffectConfig =
            serde_json::from_str(r#"{"particle_count": 12, "repulsion_radius": 90.0}"#).unwrap();
        assert_eq!(config.particle_count, 12);
        assert_eq!(config.repulsion_radius, 90.0);
        assert_eq!(config.connection_distance, 150.0);
        assert_eq!(config.glyphs, default_glyphs());
    }

    #[test]
    fn sanitize_repairs_degenerate_values() {
        let config = EffectConfig {
            particle_count: 0,
            particle_speed: -1.0,
            min_size: 30.0,
            max_size: 12.0,
            min_opacity: 0.9,
            max_opacity: 0.2,
            glyphs: Vec::new(),
            ..EffectConfig::default()
        }
        .sanitized();

        assert_eq!(config.particle_count, 1);
        assert_eq!(config.particle_speed, 0.0);
        assert!(config.min_size <= config.max_size);
        assert!(config.min_opacity <= config.max_opacity);
        assert!(!config.glyphs.is_empty());
    }

    #[test]
    fn load_reports_the_offending_path() {
        let error = EffectConfig::load(Path::new("/no/such/effect.json")).unwrap_err();
        assert!(format!("{error:#}").contains("/no/such/effect.json"));
    }
}
