//! Theme and styling for the HAVDEF UI
//!
//! The theme controller is a single [`ThemeMode`] flag. Every component reads
//! the [`Theme`] palette derived from it, so flipping the flag restyles the
//! whole page in one frame.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Vec2, Visuals};

/// Dark/light theme flag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// The other mode
    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "dark"),
            ThemeMode::Light => write!(f, "light"),
        }
    }
}

/// Application palette for one theme mode
#[derive(Clone, Debug)]
pub struct Theme {
    /// Mode this palette was built for
    pub mode: ThemeMode,

    /// Page and section backgrounds
    pub bg_page: Color32,
    pub bg_section: Color32,

    /// Cards and panels
    pub card_fill: Color32,
    pub card_border: Color32,

    /// Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    /// Brand accents (blue, purple)
    pub accent: Color32,
    pub accent_strong: Color32,
    pub brand_secondary: Color32,

    /// Verdict colors
    pub danger: Color32,
    pub danger_fill: Color32,
    pub danger_border: Color32,
    pub success: Color32,
    pub success_fill: Color32,
    pub success_border: Color32,

    /// Analysis status card
    pub analyzing_fill: Color32,
    pub analyzing_border: Color32,

    /// Highlighted feature card
    pub highlight_fill: Color32,
    pub highlight_border: Color32,
    pub icon_fill: Color32,
    pub icon_highlight_fill: Color32,

    /// Waveform bars
    pub waveform_active: Color32,
    pub waveform_inactive: Color32,
    pub waveform_well: Color32,

    /// Drop zone
    pub drop_border: Color32,
    pub drop_border_hover: Color32,
    pub drop_active_border: Color32,
    pub drop_active_fill: Color32,

    /// Theme toggle button
    pub toggle_fill: Color32,
    pub toggle_icon: Color32,

    /// Action buttons (same in both modes)
    pub record_button: Color32,
    pub upload_button: Color32,
    pub stop_button: Color32,

    /// Border radius for buttons
    pub button_rounding: Rounding,
    /// Border radius for cards/panels
    pub card_rounding: Rounding,

    /// Standard spacing
    pub spacing: f32,
    /// Large spacing
    pub spacing_lg: f32,
    /// Small spacing
    pub spacing_sm: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Palette for a mode
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Create a dark theme
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,

            bg_page: Color32::from_rgb(2, 6, 23),     // Slate 950
            bg_section: Color32::from_rgb(15, 23, 42), // Slate 900

            card_fill: Color32::from_rgb(22, 31, 52),
            card_border: Color32::from_rgb(51, 65, 85), // Slate 700

            text_primary: Color32::WHITE,
            text_secondary: Color32::from_rgb(209, 213, 219), // Gray 300
            text_muted: Color32::from_rgb(156, 163, 175),     // Gray 400

            accent: Color32::from_rgb(96, 165, 250),        // Blue 400
            accent_strong: Color32::from_rgb(59, 130, 246), // Blue 500
            brand_secondary: Color32::from_rgb(147, 51, 234), // Purple 600

            danger: Color32::from_rgb(248, 113, 113), // Red 400
            danger_fill: Color32::from_rgb(60, 20, 24),
            danger_border: Color32::from_rgb(153, 27, 27),
            success: Color32::from_rgb(74, 222, 128), // Green 400
            success_fill: Color32::from_rgb(14, 48, 30),
            success_border: Color32::from_rgb(21, 128, 61),

            analyzing_fill: Color32::from_rgb(23, 37, 84),
            analyzing_border: Color32::from_rgb(29, 78, 216),

            highlight_fill: Color32::from_rgb(26, 43, 92),
            highlight_border: Color32::from_rgb(59, 130, 246),
            icon_fill: Color32::from_rgb(30, 41, 59), // Slate 800
            icon_highlight_fill: Color32::from_rgb(30, 58, 138),

            waveform_active: Color32::from_rgb(96, 165, 250),
            waveform_inactive: Color32::from_rgb(75, 85, 99), // Gray 600
            waveform_well: Color32::from_rgb(10, 14, 28),

            drop_border: Color32::from_rgb(71, 85, 105), // Slate 600
            drop_border_hover: Color32::from_rgb(100, 116, 139),
            drop_active_border: Color32::from_rgb(96, 165, 250),
            drop_active_fill: Color32::from_rgb(20, 35, 75),

            toggle_fill: Color32::from_rgb(30, 41, 59),
            toggle_icon: Color32::from_rgb(250, 204, 21), // Yellow 400

            record_button: Color32::from_rgb(239, 68, 68),
            upload_button: Color32::from_rgb(59, 130, 246),
            stop_button: Color32::from_rgb(107, 114, 128),

            button_rounding: Rounding::same(12.0),
            card_rounding: Rounding::same(16.0),

            spacing: 16.0,
            spacing_lg: 32.0,
            spacing_sm: 8.0,
        }
    }

    /// Create a light theme
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,

            bg_page: Color32::from_rgb(249, 250, 251),     // Gray 50
            bg_section: Color32::from_rgb(243, 244, 246), // Gray 100

            card_fill: Color32::from_rgb(255, 255, 255),
            card_border: Color32::from_rgb(229, 231, 235), // Gray 200

            text_primary: Color32::from_rgb(17, 24, 39),   // Gray 900
            text_secondary: Color32::from_rgb(75, 85, 99), // Gray 600
            text_muted: Color32::from_rgb(107, 114, 128),  // Gray 500

            accent: Color32::from_rgb(37, 99, 235),        // Blue 600
            accent_strong: Color32::from_rgb(29, 78, 216), // Blue 700
            brand_secondary: Color32::from_rgb(126, 34, 206),

            danger: Color32::from_rgb(220, 38, 38), // Red 600
            danger_fill: Color32::from_rgb(254, 242, 242),
            danger_border: Color32::from_rgb(254, 202, 202),
            success: Color32::from_rgb(22, 163, 74), // Green 600
            success_fill: Color32::from_rgb(240, 253, 244),
            success_border: Color32::from_rgb(187, 247, 208),

            analyzing_fill: Color32::from_rgb(239, 246, 255),
            analyzing_border: Color32::from_rgb(191, 219, 254),

            highlight_fill: Color32::from_rgb(239, 246, 255),
            highlight_border: Color32::from_rgb(191, 219, 254),
            icon_fill: Color32::from_rgb(243, 244, 246),
            icon_highlight_fill: Color32::from_rgb(219, 234, 254),

            waveform_active: Color32::from_rgb(59, 130, 246),
            waveform_inactive: Color32::from_rgb(156, 163, 175), // Gray 400
            waveform_well: Color32::from_rgb(237, 239, 242),

            drop_border: Color32::from_rgb(209, 213, 219), // Gray 300
            drop_border_hover: Color32::from_rgb(156, 163, 175),
            drop_active_border: Color32::from_rgb(59, 130, 246),
            drop_active_fill: Color32::from_rgb(239, 246, 255),

            toggle_fill: Color32::WHITE,
            toggle_icon: Color32::from_rgb(71, 85, 105), // Slate 600

            record_button: Color32::from_rgb(239, 68, 68),
            upload_button: Color32::from_rgb(59, 130, 246),
            stop_button: Color32::from_rgb(107, 114, 128),

            button_rounding: Rounding::same(12.0),
            card_rounding: Rounding::same(16.0),

            spacing: 16.0,
            spacing_lg: 32.0,
            spacing_sm: 8.0,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Apply this theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark() {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        // Panel backgrounds
        visuals.panel_fill = self.bg_page;
        visuals.window_fill = self.card_fill;
        visuals.extreme_bg_color = self.bg_section;

        // Widget colors
        visuals.widgets.noninteractive.bg_fill = self.card_fill;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_muted);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.card_border);

        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_secondary);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.text_primary);

        // Text selection
        visuals.selection.bg_fill = self.accent.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        visuals.hyperlink_color = self.accent;
        visuals.window_rounding = self.card_rounding;
        visuals.window_stroke = Stroke::new(1.0, self.card_border);

        ctx.set_visuals(visuals);

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = Vec2::splat(self.spacing_sm);
        style.spacing.window_margin = egui::Margin::same(self.spacing);
        style.spacing.button_padding = Vec2::new(self.spacing + 8.0, 12.0);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            FontId::new(32.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            FontId::new(15.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Monospace,
            FontId::new(14.0, FontFamily::Monospace),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            FontId::new(16.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            FontId::new(12.0, FontFamily::Proportional),
        );

        ctx.set_style(style);
    }

    /// Card outline stroke
    pub fn card_stroke(&self) -> Stroke {
        Stroke::new(1.0, self.card_border)
    }

    /// Verdict color for a deepfake/authentic result
    pub fn verdict_color(&self, is_deepfake: bool) -> Color32 {
        if is_deepfake {
            self.danger
        } else {
            self.success
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mut mode = ThemeMode::default();
        assert!(mode.is_dark());
        mode.toggle();
        assert_eq!(mode, ThemeMode::Light);
        mode.toggle();
        assert_eq!(mode, ThemeMode::Dark);
    }

    #[test]
    fn test_for_mode_matches_flag() {
        assert!(Theme::for_mode(ThemeMode::Dark).is_dark());
        assert!(!Theme::for_mode(ThemeMode::Light).is_dark());
        assert_eq!(ThemeMode::from_dark(false), ThemeMode::Light);
    }

    #[test]
    fn test_mode_dependent_colors_flip_together() {
        let dark = Theme::dark();
        let light = Theme::light();

        let pairs = [
            (dark.bg_page, light.bg_page),
            (dark.card_fill, light.card_fill),
            (dark.card_border, light.card_border),
            (dark.text_primary, light.text_primary),
            (dark.text_secondary, light.text_secondary),
            (dark.accent, light.accent),
            (dark.danger, light.danger),
            (dark.success, light.success),
            (dark.waveform_inactive, light.waveform_inactive),
            (dark.drop_border, light.drop_border),
            (dark.toggle_fill, light.toggle_fill),
            (dark.toggle_icon, light.toggle_icon),
            (dark.highlight_fill, light.highlight_fill),
        ];
        for (i, (d, l)) in pairs.iter().enumerate() {
            assert_ne!(d, l, "color #{} does not change with the theme", i);
        }
    }

    #[test]
    fn test_dark_background_darker_than_light() {
        let luma = |c: Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;
        assert!(luma(Theme::dark().bg_page) < luma(Theme::light().bg_page));
        assert!(luma(Theme::dark().text_primary) > luma(Theme::light().text_primary));
    }

    #[test]
    fn test_action_buttons_shared() {
        let dark = Theme::dark();
        let light = Theme::light();
        assert_eq!(dark.record_button, light.record_button);
        assert_eq!(dark.upload_button, light.upload_button);
    }
}
