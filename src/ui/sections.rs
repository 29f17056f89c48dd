//! Landing page sections
//!
//! Stateless layout for the hero, features, pipeline and footer. The
//! detection section body is the recording panel, owned by the app.

use crate::ui::components::{FeatureCard, InteractiveButton, Waveform, WaveformBars};
use crate::ui::content::{self, FEATURES, PIPELINE_STEPS};
use crate::ui::theme::Theme;
use egui::text::LayoutJob;
use egui::{Align, Color32, FontId, Frame, Layout, Margin, RichText, TextFormat, Ui, Vec2};

/// Widest the page content grows
pub const CONTENT_WIDTH: f32 = 1000.0;

/// Centered, width-limited column
pub fn centered_column<R>(ui: &mut Ui, max_width: f32, add: impl FnOnce(&mut Ui) -> R) -> R {
    let width = ui.available_width().min(max_width);
    let margin = ((ui.available_width() - width) / 2.0).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_width(width);
            add(ui)
        })
        .inner
    })
    .inner
}

/// Section title with a short paragraph
pub fn section_header(ui: &mut Ui, theme: &Theme, title: &str, copy: &str) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(title)
                .size(34.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.add_space(theme.spacing);
        ui.set_max_width(640.0);
        ui.label(RichText::new(copy).size(17.0).color(theme.text_muted));
    });
    ui.add_space(theme.spacing_lg + 16.0);
}

/// Hero banner. Returns true when the call-to-action was clicked.
pub fn hero(ui: &mut Ui, theme: &Theme, bars: &WaveformBars) -> bool {
    let mut cta_clicked = false;

    ui.add_space(theme.spacing_lg * 2.0);
    ui.vertical_centered(|ui| {
        // Brand
        ui.horizontal(|ui| {
            let brand_width = 300.0;
            ui.add_space(((ui.available_width() - brand_width) / 2.0).max(0.0));
            Frame::none()
                .fill(theme.upload_button)
                .rounding(16.0)
                .inner_margin(Margin::same(12.0))
                .show(ui, |ui| {
                    ui.label(RichText::new("🛡").size(28.0).color(Color32::WHITE));
                });
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(content::BRAND)
                        .size(28.0)
                        .strong()
                        .color(theme.accent),
                );
                ui.label(
                    RichText::new(content::BRAND_TAGLINE)
                        .size(13.0)
                        .color(theme.text_muted),
                );
            });
        });

        ui.add_space(theme.spacing_lg);
        ui.label(headline(theme));
        ui.add_space(theme.spacing + 8.0);

        ui.set_max_width(760.0);
        ui.label(
            RichText::new(content::HERO_COPY)
                .size(19.0)
                .color(theme.text_secondary),
        );
        ui.add_space(theme.spacing_lg + 16.0);

        Waveform::new(bars, theme).height(90.0).scale(1.5).show(ui);
        ui.add_space(theme.spacing_lg);

        badges(ui, theme);
        ui.add_space(theme.spacing_lg + 16.0);

        cta_clicked = InteractiveButton::new(content::HERO_CTA, theme)
            .show(ui)
            .clicked();
    });
    ui.add_space(theme.spacing_lg * 2.0);

    cta_clicked
}

fn headline(theme: &Theme) -> LayoutJob {
    let size = 52.0;
    let plain = TextFormat {
        font_id: FontId::proportional(size),
        color: theme.text_primary,
        ..Default::default()
    };
    let highlight = TextFormat {
        font_id: FontId::proportional(size),
        color: theme.accent,
        ..Default::default()
    };

    let mut job = LayoutJob::default();
    job.halign = Align::Center;
    job.append(content::HERO_TITLE_LEAD, 0.0, plain.clone());
    job.append(content::HERO_TITLE_HIGHLIGHT, 12.0, highlight);
    job.append(content::HERO_TITLE_TAIL, 12.0, plain);
    job
}

fn badges(ui: &mut Ui, theme: &Theme) {
    let badge_width = 170.0;
    let gap = theme.spacing_lg;
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - 2.0 * badge_width - gap) / 2.0).max(0.0));
        ui.spacing_mut().item_spacing.x = gap;
        badge(ui, "●", "Live Monitoring", theme.success, theme);
        badge(ui, "⚡", "AI-Powered", theme.accent, theme);
    });
}

fn badge(ui: &mut Ui, icon: &str, text: &str, icon_color: Color32, theme: &Theme) {
    ui.horizontal(|ui| {
        let pulse = ((ui.input(|i| i.time) * 3.0).sin() * 0.3 + 0.7) as f32;
        ui.label(RichText::new(icon).color(icon_color.gamma_multiply(pulse)));
        ui.label(RichText::new(text).size(14.0).color(theme.text_muted));
    });
}

/// "Advanced Protection Features" grid
pub fn features(ui: &mut Ui, theme: &Theme) {
    section_header(ui, theme, content::FEATURES_TITLE, content::FEATURES_COPY);

    let gap = theme.spacing_lg - 8.0;
    let available = ui.available_width();
    let columns = if available >= 900.0 {
        3
    } else if available >= 600.0 {
        2
    } else {
        1
    };
    let card_width = (available - gap * (columns - 1) as f32) / columns as f32;

    for row in FEATURES.chunks(columns) {
        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = gap;
            for feature in row {
                FeatureCard::new(feature, theme).width(card_width).show(ui);
            }
        });
        ui.add_space(gap);
    }
}

/// "How It Works" row of numbered steps
pub fn pipeline(ui: &mut Ui, theme: &Theme) {
    section_header(ui, theme, content::PIPELINE_TITLE, content::PIPELINE_COPY);

    let arrow_width = 32.0;
    let count = PIPELINE_STEPS.len();
    let step_width =
        (ui.available_width() - arrow_width * (count - 1) as f32) / count as f32;

    ui.horizontal_top(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for (i, step) in PIPELINE_STEPS.iter().enumerate() {
            ui.allocate_ui_with_layout(
                Vec2::new(step_width, 0.0),
                Layout::top_down(Align::Center),
                |ui| {
                    ui.set_width(step_width);
                    Frame::none()
                        .fill(theme.upload_button)
                        .rounding(40.0)
                        .inner_margin(Margin::symmetric(22.0, 24.0))
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(step.step)
                                    .size(22.0)
                                    .strong()
                                    .color(Color32::WHITE),
                            );
                        });
                    ui.add_space(theme.spacing);
                    ui.label(
                        RichText::new(step.title)
                            .size(18.0)
                            .strong()
                            .color(theme.text_primary),
                    );
                    ui.label(
                        RichText::new(step.description)
                            .size(14.0)
                            .color(theme.text_muted),
                    );
                },
            );

            if i + 1 < count {
                ui.allocate_ui_with_layout(
                    Vec2::new(arrow_width, 80.0),
                    Layout::centered_and_justified(egui::Direction::TopDown),
                    |ui| {
                        ui.label(RichText::new("→").size(24.0).color(theme.accent));
                    },
                );
            }
        }
    });
}

/// Page footer
pub fn footer(ui: &mut Ui, theme: &Theme) {
    Frame::none()
        .fill(theme.bg_section)
        .stroke(theme.card_stroke())
        .inner_margin(Margin::symmetric(theme.spacing, theme.spacing_lg + 16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.horizontal(|ui| {
                    ui.add_space(((ui.available_width() - 120.0) / 2.0).max(0.0));
                    ui.label(RichText::new("🛡").size(22.0).color(theme.accent));
                    ui.label(
                        RichText::new(content::BRAND)
                            .size(20.0)
                            .strong()
                            .color(theme.text_primary),
                    );
                });
                ui.add_space(theme.spacing_sm);
                ui.label(RichText::new(content::FOOTER_COPYRIGHT).color(theme.text_muted));
                ui.label(
                    RichText::new(content::FOOTER_STACK)
                        .size(13.0)
                        .color(theme.text_muted.gamma_multiply(0.8)),
                );
            });
        });
}

/// Full-width band with the section background
pub fn band<R>(ui: &mut Ui, theme: &Theme, add: impl FnOnce(&mut Ui) -> R) -> R {
    Frame::none()
        .fill(theme.bg_section)
        .inner_margin(Margin::symmetric(theme.spacing, theme.spacing_lg * 2.5))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            centered_column(ui, CONTENT_WIDTH, add)
        })
        .inner
}
