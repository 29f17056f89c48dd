//! Call-to-action button with a press/ripple animation
//!
//! A click starts a short animation: the button shrinks slightly, a ripple
//! expands from the center and fades, and (primary variant) a lightning glyph
//! flashes on the left.

use crate::ui::theme::Theme;
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Ui, Vec2};

/// Length of the click animation in seconds
pub const RIPPLE_DURATION: f64 = 0.3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

/// Progress of the click animation in [0, 1), or `None` once finished
pub fn ripple_progress(clicked_at: Option<f64>, now: f64) -> Option<f32> {
    let elapsed = now - clicked_at?;
    if (0.0..RIPPLE_DURATION).contains(&elapsed) {
        Some((elapsed / RIPPLE_DURATION) as f32)
    } else {
        None
    }
}

pub struct InteractiveButton<'a> {
    label: &'a str,
    theme: &'a Theme,
    variant: ButtonVariant,
}

impl<'a> InteractiveButton<'a> {
    pub fn new(label: &'a str, theme: &'a Theme) -> Self {
        Self {
            label,
            theme,
            variant: ButtonVariant::Primary,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn show(self, ui: &mut Ui) -> egui::Response {
        let (padding, font_size, fill_a, fill_b) = match self.variant {
            ButtonVariant::Primary => (
                Vec2::new(32.0, 16.0),
                18.0,
                self.theme.upload_button,
                self.theme.brand_secondary,
            ),
            ButtonVariant::Secondary => (
                Vec2::new(24.0, 12.0),
                16.0,
                Color32::from_rgb(71, 85, 105),
                Color32::from_rgb(51, 65, 85),
            ),
        };

        let font = FontId::proportional(font_size);
        let galley = ui
            .painter()
            .layout_no_wrap(self.label.to_string(), font.clone(), Color32::WHITE);
        let arrow_space = 28.0;
        let size = galley.size() + padding * 2.0 + Vec2::new(arrow_space, 0.0);

        let (rect, mut response) = ui.allocate_exact_size(size, Sense::click());
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, true, self.label)
        });

        let id = response.id.with("clicked_at");
        let now = ui.input(|i| i.time);
        if response.clicked() {
            ui.ctx().data_mut(|d| d.insert_temp(id, now));
        }
        let clicked_at = ui.ctx().data(|d| d.get_temp::<f64>(id));
        let ripple = ripple_progress(clicked_at, now);
        if ripple.is_some() {
            ui.ctx().request_repaint();
        }

        if ui.is_rect_visible(rect) {
            let hover = ui
                .ctx()
                .animate_bool_with_time(response.id.with("hover"), response.hovered(), 0.3);
            let press = if ripple.is_some() { 0.95 } else { 1.0 + 0.05 * hover };
            let body = Rect::from_center_size(rect.center(), rect.size() * press);
            let painter = ui.painter_at(rect.expand(8.0));

            // Shadow, then a two-tone body standing in for the gradient
            painter.rect_filled(
                body.translate(Vec2::new(0.0, 4.0)),
                self.theme.button_rounding,
                fill_a.gamma_multiply(0.25 * (0.5 + hover)),
            );
            let darken = 1.0 - 0.15 * hover;
            painter.rect_filled(body, self.theme.button_rounding, fill_a.gamma_multiply(darken));
            let right_half = Rect::from_min_max(Pos2::new(body.center().x, body.top()), body.max);
            painter.rect_filled(
                right_half,
                egui::Rounding {
                    ne: self.theme.button_rounding.ne,
                    se: self.theme.button_rounding.se,
                    ..Default::default()
                },
                fill_b.gamma_multiply(darken),
            );

            if let Some(t) = ripple {
                let radius = body.width().max(body.height()) * 0.75 * t;
                painter.circle_filled(
                    body.center(),
                    radius,
                    Color32::from_white_alpha((50.0 * (1.0 - t)) as u8),
                );
                if self.variant == ButtonVariant::Primary {
                    painter.text(
                        Pos2::new(body.left() + 12.0, body.center().y),
                        Align2::LEFT_CENTER,
                        "⚡",
                        FontId::proportional(14.0 + 2.0 * t),
                        Color32::WHITE.gamma_multiply(1.0 - t),
                    );
                }
            }

            let text_pos = Pos2::new(body.left() + padding.x, body.center().y - galley.size().y / 2.0);
            painter.galley(text_pos, galley, Color32::WHITE);

            let arrow_shift = if ripple.is_some() { 8.0 } else { 4.0 * hover };
            painter.text(
                Pos2::new(body.right() - padding.x - 4.0 + arrow_shift, body.center().y),
                Align2::RIGHT_CENTER,
                "→",
                font,
                Color32::WHITE,
            );
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ripple_not_started() {
        assert_eq!(ripple_progress(None, 10.0), None);
    }

    #[test]
    fn test_ripple_progresses_then_ends() {
        assert_eq!(ripple_progress(Some(1.0), 1.0), Some(0.0));
        let mid = ripple_progress(Some(1.0), 1.15).unwrap();
        assert!((mid - 0.5).abs() < 1e-3);
        assert_eq!(ripple_progress(Some(1.0), 1.0 + RIPPLE_DURATION), None);
        assert_eq!(ripple_progress(Some(1.0), 5.0), None);
    }

    #[test]
    fn test_ripple_ignores_clock_going_backwards() {
        assert_eq!(ripple_progress(Some(2.0), 1.0), None);
    }
}
