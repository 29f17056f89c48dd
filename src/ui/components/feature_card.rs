//! Feature card component

use crate::ui::content::Feature;
use crate::ui::theme::Theme;
use egui::{Frame, Margin, RichText, Stroke, Ui};

/// Card in the features grid; highlighted cards use the accent palette
pub struct FeatureCard<'a> {
    feature: &'a Feature,
    theme: &'a Theme,
    width: f32,
}

impl<'a> FeatureCard<'a> {
    pub fn new(feature: &'a Feature, theme: &'a Theme) -> Self {
        Self {
            feature,
            theme,
            width: 280.0,
        }
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn show(self, ui: &mut Ui) -> egui::Response {
        let id = ui.make_persistent_id(("feature_card", self.feature.title));
        let was_hovered = ui.ctx().data(|d| d.get_temp::<bool>(id)).unwrap_or(false);
        let hover = ui.ctx().animate_bool_with_time(id, was_hovered, 0.3);

        let (fill, border, icon_fill, icon_color) = if self.feature.highlight {
            (
                self.theme.highlight_fill,
                self.theme.highlight_border,
                self.theme.icon_highlight_fill,
                self.theme.accent,
            )
        } else {
            let border = if was_hovered {
                self.theme.drop_border_hover
            } else {
                self.theme.card_border
            };
            (
                self.theme.card_fill,
                border,
                self.theme.icon_fill,
                self.theme.text_muted,
            )
        };

        let response = Frame::none()
            .fill(fill)
            .stroke(Stroke::new(1.0 + hover, border))
            .rounding(self.theme.card_rounding)
            .inner_margin(Margin::same(24.0 - 2.0 * hover))
            .outer_margin(Margin::same(2.0 * (1.0 - hover)))
            .show(ui, |ui| {
                ui.set_width(self.width - 48.0);

                Frame::none()
                    .fill(icon_fill)
                    .rounding(self.theme.button_rounding)
                    .inner_margin(Margin::same(12.0))
                    .show(ui, |ui| {
                        ui.label(RichText::new(self.feature.icon).size(22.0).color(icon_color));
                    });

                ui.add_space(self.theme.spacing);
                ui.label(
                    RichText::new(self.feature.title)
                        .size(18.0)
                        .strong()
                        .color(self.theme.text_primary),
                );
                ui.add_space(4.0);
                ui.label(
                    RichText::new(self.feature.description)
                        .size(14.0)
                        .color(self.theme.text_muted),
                );
            })
            .response;

        let hovered = response.hovered();
        if hovered != was_hovered {
            ui.ctx().data_mut(|d| d.insert_temp(id, hovered));
            ui.ctx().request_repaint();
        }

        response
    }
}
