//! Analysis status and verdict cards

use crate::detection::DetectionResult;
use crate::ui::content::SECURITY_ALERT;
use crate::ui::theme::Theme;
use egui::{Frame, Id, Margin, Rect, RichText, Sense, Stroke, Ui, Vec2};

/// Seconds the confidence bar takes to grow to its value
const CONFIDENCE_GROW_SECS: f32 = 1.0;

/// Filled fraction of the confidence bar this pass
///
/// The bar grows from zero whenever it appears after being hidden on the
/// previous pass, and slides between successive values while it stays up.
fn bar_fraction(ctx: &egui::Context, id: Id, target: f32) -> f32 {
    let pass = ctx.cumulative_pass_nr();
    let (generation, continued) = ctx.data_mut(|d| {
        let last_pass = d.get_temp::<u64>(id.with("last_pass"));
        let mut generation = d.get_temp::<u64>(id.with("generation")).unwrap_or(0);
        let continued = last_pass.is_some_and(|last| last + 1 >= pass);
        if !continued {
            generation += 1;
            d.insert_temp(id.with("generation"), generation);
        }
        d.insert_temp(id.with("last_pass"), pass);
        (generation, continued)
    });

    let anim_id = id.with(generation);
    if !continued {
        ctx.animate_value_with_time(anim_id, 0.0, CONFIDENCE_GROW_SECS);
    }
    ctx.animate_value_with_time(anim_id, target, CONFIDENCE_GROW_SECS)
}

/// Card shown while the simulated analysis runs
pub struct AnalysisStatus<'a> {
    theme: &'a Theme,
}

impl<'a> AnalysisStatus<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn show(&self, ui: &mut Ui) {
        let time = ui.input(|i| i.time);
        let pulse = ((time * 2.0).sin() * 0.15 + 0.85) as f32;

        Frame::none()
            .fill(self.theme.analyzing_fill.gamma_multiply(pulse))
            .stroke(Stroke::new(1.0, self.theme.analyzing_border))
            .rounding(self.theme.card_rounding)
            .inner_margin(Margin::same(24.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(
                            RichText::new("Analyzing audio for deepfake signatures...")
                                .size(18.0)
                                .strong()
                                .color(self.theme.accent),
                        );
                    });
                });

                ui.add_space(12.0);
                let (rect, _) =
                    ui.allocate_exact_size(Vec2::new(ui.available_width(), 8.0), Sense::hover());
                let painter = ui.painter();
                painter.rect_filled(rect, 4.0, self.theme.analyzing_border.gamma_multiply(0.3));
                painter.rect_filled(rect, 4.0, self.theme.accent_strong.gamma_multiply(pulse));
            });

        ui.ctx().request_repaint();
    }
}

/// Verdict card with confidence bar
pub struct ResultCard<'a> {
    result: &'a DetectionResult,
    theme: &'a Theme,
}

impl<'a> ResultCard<'a> {
    pub fn new(result: &'a DetectionResult, theme: &'a Theme) -> Self {
        Self { result, theme }
    }

    pub fn show(&self, ui: &mut Ui) {
        let is_deepfake = self.result.verdict.is_deepfake();
        let (fill, border) = if is_deepfake {
            (self.theme.danger_fill, self.theme.danger_border)
        } else {
            (self.theme.success_fill, self.theme.success_border)
        };
        let color = self.theme.verdict_color(is_deepfake);

        Frame::none()
            .fill(fill)
            .stroke(Stroke::new(1.0, border))
            .rounding(self.theme.card_rounding)
            .inner_margin(Margin::same(24.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    let icon = if is_deepfake { "⚠" } else { "✔" };
                    ui.label(RichText::new(icon).size(32.0).color(color));
                    ui.label(
                        RichText::new(self.result.verdict.headline())
                            .size(24.0)
                            .strong()
                            .color(color),
                    );

                    ui.add_space(self.theme.spacing);
                    let label_color = if self.theme.is_dark() {
                        self.theme.text_secondary
                    } else {
                        self.theme.text_muted
                    };
                    ui.label(RichText::new("Confidence Level").color(label_color));
                    self.confidence_bar(ui, color);
                    ui.label(
                        RichText::new(format!("{}%", self.result.confidence_percent()))
                            .size(20.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );

                    if is_deepfake {
                        ui.add_space(self.theme.spacing);
                        self.security_alert(ui);
                    }
                });
            });
    }

    fn confidence_bar(&self, ui: &mut Ui, color: egui::Color32) {
        let (rect, _) =
            ui.allocate_exact_size(Vec2::new(ui.available_width(), 16.0), Sense::hover());

        let id = ui.make_persistent_id("confidence_bar");
        let grow = bar_fraction(ui.ctx(), id, self.result.confidence);

        let painter = ui.painter();
        let track = if self.theme.is_dark() {
            egui::Color32::from_black_alpha(60)
        } else {
            self.theme.card_border
        };
        painter.rect_filled(rect, 8.0, track);

        let filled = Rect::from_min_size(rect.min, Vec2::new(rect.width() * grow, rect.height()));
        painter.rect_filled(filled, 8.0, color);
    }

    fn security_alert(&self, ui: &mut Ui) {
        Frame::none()
            .fill(self.theme.danger_fill.gamma_multiply(0.8))
            .stroke(Stroke::new(1.0, self.theme.danger_border))
            .rounding(self.theme.button_rounding)
            .inner_margin(Margin::same(16.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new("🛡").color(self.theme.danger));
                    ui.label(
                        RichText::new("Security Alert")
                            .strong()
                            .color(self.theme.danger),
                    );
                });
                ui.label(
                    RichText::new(SECURITY_ALERT)
                        .size(13.0)
                        .color(self.theme.danger.gamma_multiply(0.9)),
                );
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pass_at(ctx: &egui::Context, time: f64, show: bool) -> Option<f32> {
        let mut fraction = None;
        let input = egui::RawInput {
            time: Some(time),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            if show {
                fraction = Some(bar_fraction(ctx, Id::new("bar"), 0.8));
            }
        });
        fraction
    }

    #[test]
    fn test_bar_grows_from_zero() {
        let ctx = egui::Context::default();
        assert_eq!(pass_at(&ctx, 0.0, true), Some(0.0));

        let mid = pass_at(&ctx, 0.5, true).unwrap();
        assert!(mid > 0.0 && mid < 0.8, "halfway value {}", mid);

        let done = pass_at(&ctx, 2.0, true).unwrap();
        assert!((done - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_bar_regrows_after_being_hidden() {
        let ctx = egui::Context::default();
        pass_at(&ctx, 0.0, true);
        pass_at(&ctx, 2.0, true);
        assert_eq!(pass_at(&ctx, 3.0, false), None);
        assert_eq!(pass_at(&ctx, 3.1, true), Some(0.0));
    }
}
