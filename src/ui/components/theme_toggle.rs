//! Theme toggle button
//!
//! Round button showing a moon in dark mode and a sun in light mode. The two
//! glyphs cross-fade when the mode flips.

use crate::ui::theme::{Theme, ThemeMode};
use egui::{Align2, FontId, Sense, Stroke, Vec2};

/// Accessible label of the toggle
pub const TOGGLE_THEME_LABEL: &str = "Toggle theme";

/// Button diameter
const SIZE: f32 = 48.0;

/// Sun/moon toggle for the theme controller
pub struct ThemeToggle<'a> {
    mode: &'a mut ThemeMode,
    theme: &'a Theme,
}

impl<'a> ThemeToggle<'a> {
    pub fn new(mode: &'a mut ThemeMode, theme: &'a Theme) -> Self {
        Self { mode, theme }
    }

    /// Show the toggle; flips the mode when clicked
    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, mut response) = ui.allocate_exact_size(Vec2::splat(SIZE), Sense::click());
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, true, TOGGLE_THEME_LABEL)
        });

        if response.clicked() {
            self.mode.toggle();
            tracing::debug!("[UI] Theme switched to {}", self.mode);
            response.mark_changed();
        }

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let hover = ui
                .ctx()
                .animate_bool_with_time(response.id.with("hover"), response.hovered(), 0.2);
            let radius = SIZE / 2.0 * (1.0 + 0.1 * hover);

            let fill = if response.hovered() {
                self.theme.toggle_fill.gamma_multiply(0.85)
            } else {
                self.theme.toggle_fill
            };
            painter.circle(
                rect.center(),
                radius,
                fill,
                Stroke::new(1.0, self.theme.card_border),
            );

            // 1.0 = moon fully shown, 0.0 = sun fully shown
            let dark = ui
                .ctx()
                .animate_bool_with_time(response.id.with("mode"), self.mode.is_dark(), 0.3);
            let font = FontId::proportional(SIZE * 0.45);

            if dark > 0.0 {
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    "🌙",
                    font.clone(),
                    self.theme.toggle_icon.gamma_multiply(dark),
                );
            }
            if dark < 1.0 {
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    "☀",
                    font,
                    self.theme.toggle_icon.gamma_multiply(1.0 - dark),
                );
            }
        }

        response.on_hover_text("Switch between dark and light mode")
    }
}
