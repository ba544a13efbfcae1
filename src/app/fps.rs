use std::collections::VecDeque;

use eframe::egui::Context;

const SAMPLE_WINDOW: usize = 180;

/// Rolling frame-rate readout for the optional overlay.
pub(super) struct FpsCounter {
    current: f32,
    samples: VecDeque<f32>,
}

impl FpsCounter {
    pub(super) fn new() -> Self {
        Self {
            current: 0.0,
            samples: VecDeque::with_capacity(SAMPLE_WINDOW),
        }
    }

    pub(super) fn update(&mut self, ctx: &Context) {
        self.record(ctx.input(|input| input.stable_dt));
    }

    fn record(&mut self, dt: f32) {
        if dt <= f32::EPSILON {
            return;
        }
        self.current = (1.0 / dt).clamp(0.0, 1000.0);
        self.samples.push_back(self.current);
        while self.samples.len() > SAMPLE_WINDOW {
            self.samples.pop_front();
        }
    }

    pub(super) fn display_text(&self) -> Option<String> {
        if self.samples.is_empty() {
            return None;
        }
        let average = self.samples.iter().sum::<f32>() / self.samples.len() as f32;
        Some(format!("FPS {:.0} | avg {average:.1}", self.current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_text_before_the_first_sample() {
        assert_eq!(FpsCounter::new().display_text(), None);
    }

    #[test]
    fn zero_dt_frames_are_ignored() {
        let mut fps = FpsCounter::new();
        fps.record(0.0);
        assert_eq!(fps.display_text(), None);
    }

    #[test]
    fn tracks_current_and_average() {
        let mut fps = FpsCounter::new();
        fps.record(1.0 / 60.0);
        fps.record(1.0 / 30.0);
        assert!((fps.current - 30.0).abs() < 0.5);
        let text = fps.display_text().unwrap();
        assert!(text.starts_with("FPS 30"));
        assert!(text.contains("avg 45"));
    }

    #[test]
    fn sample_window_stays_bounded() {
        let mut fps = FpsCounter::new();
        for _ in 0..(SAMPLE_WINDOW + 40) {
            fps.record(1.0 / 60.0);
        }
        assert_eq!(fps.samples.len(), SAMPLE_WINDOW);
    }
}
