//! Waveform visualization component
//!
//! Decorative bar waveform. While active (recording or analyzing) every bar
//! jumps to a random height a few times per second; inactive bars sit flat.
//! No audio is sampled.

use crate::ui::theme::Theme;
use egui::{Color32, Pos2, Rect, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of bars drawn
pub const BAR_COUNT: usize = 40;
/// Height of an inactive bar in points
pub const IDLE_BAR_HEIGHT: f32 = 8.0;
/// Random heights of active bars fall within this range
pub const ACTIVE_BAR_RANGE: std::ops::Range<f32> = 10.0..40.0;
/// Seconds between two random redraws of the bar heights
pub const RESHUFFLE_INTERVAL: f64 = 0.15;

const BAR_WIDTH: f32 = 3.0;
const BAR_GAP: f32 = 4.0;

/// Bar heights of one waveform
pub struct WaveformBars {
    heights: Vec<f32>,
    active: bool,
    last_shuffle: Option<f64>,
    rng: StdRng,
}

impl Default for WaveformBars {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveformBars {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Bars driven by a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            heights: vec![IDLE_BAR_HEIGHT; BAR_COUNT],
            active: false,
            last_shuffle: None,
            rng,
        }
    }

    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance to `time` (seconds). Returns true when the heights changed.
    pub fn update(&mut self, active: bool, time: f64) -> bool {
        if !active {
            let changed = self.active;
            if changed {
                self.heights.fill(IDLE_BAR_HEIGHT);
            }
            self.active = false;
            self.last_shuffle = None;
            return changed;
        }

        let due = match self.last_shuffle {
            Some(last) => time - last >= RESHUFFLE_INTERVAL,
            None => true,
        };
        self.active = true;
        if !due {
            return false;
        }

        for height in &mut self.heights {
            *height = self.rng.gen_range(ACTIVE_BAR_RANGE);
        }
        self.last_shuffle = Some(time);
        true
    }
}

/// Waveform visualization component
pub struct Waveform<'a> {
    bars: &'a WaveformBars,
    theme: &'a Theme,
    height: f32,
    scale: f32,
}

impl<'a> Waveform<'a> {
    pub fn new(bars: &'a WaveformBars, theme: &'a Theme) -> Self {
        Self {
            bars,
            theme,
            height: 80.0,
            scale: 1.0,
        }
    }

    /// Set the height of the waveform display
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Scale bar sizes (the hero uses a larger waveform)
    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Show the waveform and return the response
    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let desired_size = Vec2::new(ui.available_width(), self.height);
        let (rect, response) = ui.allocate_exact_size(desired_size, egui::Sense::hover());

        if ui.is_rect_visible(rect) {
            self.draw_bars(ui, rect);
        }

        response
    }

    fn draw_bars(&self, ui: &egui::Ui, rect: Rect) {
        let painter = ui.painter();
        let time = ui.input(|i| i.time);

        let bar_width = BAR_WIDTH * self.scale;
        let step = (BAR_WIDTH + BAR_GAP) * self.scale;
        let total_width = step * BAR_COUNT as f32 - BAR_GAP * self.scale;
        let left = rect.center().x - total_width / 2.0;
        let center_y = rect.center().y;
        let max_height = rect.height();

        for (i, height) in self.bars.heights().iter().enumerate() {
            let x = left + i as f32 * step;
            let h = (height * self.scale).min(max_height);
            let bar_rect = Rect::from_center_size(
                Pos2::new(x + bar_width / 2.0, center_y),
                Vec2::new(bar_width, h),
            );
            painter.rect_filled(bar_rect, bar_width / 2.0, self.bar_color(i, time));
        }
    }

    /// Bar color; active bars pulse with a per-bar phase offset
    fn bar_color(&self, index: usize, time: f64) -> Color32 {
        if !self.bars.is_active() {
            return self.theme.waveform_inactive;
        }

        let phase = time * std::f64::consts::TAU + index as f64 * 0.05 * std::f64::consts::TAU;
        let pulse = (phase.sin() * 0.25 + 0.75) as f32;
        self.theme.waveform_active.gamma_multiply(pulse)
    }
}
