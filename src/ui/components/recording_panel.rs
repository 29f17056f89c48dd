//! Recording interface panel
//!
//! Renders the voice analysis widget from a [`RecordingSession`]: waveform,
//! duration counter, action buttons, drop zone, uploaded file row, analysis
//! status and result. The panel never mutates the session itself; it returns
//! the action the user asked for and the app applies it.

use crate::session::{format_duration, RecordingSession};
use crate::ui::components::result_card::{AnalysisStatus, ResultCard};
use crate::ui::components::waveform::{Waveform, WaveformBars};
use crate::ui::theme::Theme;
use egui::{Button, Color32, Frame, Margin, RichText, Sense, Stroke, Ui, Vec2};

/// Action requested through the panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAction {
    StartRecording,
    StopRecording,
    /// Open the file picker (upload button or drop zone click)
    OpenPicker,
    ClearFile,
}

pub struct RecordingPanel<'a> {
    session: &'a RecordingSession,
    theme: &'a Theme,
    bars: &'a WaveformBars,
    notice: Option<&'a str>,
}

impl<'a> RecordingPanel<'a> {
    pub fn new(session: &'a RecordingSession, bars: &'a WaveformBars, theme: &'a Theme) -> Self {
        Self {
            session,
            theme,
            bars,
            notice: None,
        }
    }

    /// Message shown under the buttons, e.g. a failed recording start
    pub fn notice(mut self, notice: Option<&'a str>) -> Self {
        self.notice = notice;
        self
    }

    /// Show the panel and return the action clicked this frame, if any
    pub fn show(self, ui: &mut Ui) -> Option<PanelAction> {
        let mut action = None;

        Frame::none()
            .fill(self.theme.card_fill)
            .stroke(self.theme.card_stroke())
            .rounding(self.theme.card_rounding)
            .inner_margin(Margin::same(32.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("Voice Analysis")
                            .size(24.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );
                    ui.add_space(self.theme.spacing_lg - 8.0);

                    self.waveform_well(ui);

                    if self.session.shows_duration() {
                        ui.add_space(self.theme.spacing);
                        ui.label(
                            RichText::new(format_duration(self.session.duration_secs()))
                                .monospace()
                                .size(30.0)
                                .strong()
                                .color(self.theme.accent),
                        );
                    }

                    ui.add_space(self.theme.spacing_lg - 8.0);
                    action = action.or(self.controls(ui));

                    if let Some(notice) = self.notice {
                        ui.add_space(self.theme.spacing_sm);
                        ui.label(RichText::new(notice).size(13.0).color(self.theme.danger));
                    }

                    ui.add_space(self.theme.spacing_lg - 8.0);
                    action = action.or(self.drop_zone(ui));

                    if self.session.uploaded_file().is_some() {
                        ui.add_space(self.theme.spacing);
                        action = action.or(self.uploaded_file_row(ui));
                    }
                });
            });

        if self.session.is_analyzing() {
            ui.add_space(self.theme.spacing_lg);
            AnalysisStatus::new(self.theme).show(ui);
        } else if let Some(result) = self.session.result() {
            ui.add_space(self.theme.spacing_lg);
            ResultCard::new(result, self.theme).show(ui);
        }

        action
    }

    fn waveform_well(&self, ui: &mut Ui) {
        let well_fill = if self.theme.is_dark() {
            Color32::from_black_alpha(50)
        } else {
            self.theme.waveform_well
        };
        Frame::none()
            .fill(well_fill)
            .stroke(Stroke::new(1.0, self.theme.card_border.gamma_multiply(0.6)))
            .rounding(self.theme.button_rounding)
            .show(ui, |ui| {
                Waveform::new(self.bars, self.theme).height(80.0).show(ui);
            });
    }

    fn controls(&self, ui: &mut Ui) -> Option<PanelAction> {
        let mut action = None;
        let enabled = !self.session.is_analyzing();

        // Center the row by measuring it once
        let button_size = Vec2::new(190.0, 46.0);
        let row_width = if self.session.is_recording() {
            button_size.x
        } else {
            button_size.x * 2.0 + self.theme.spacing
        };

        ui.allocate_ui(Vec2::new(row_width, button_size.y), |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = self.theme.spacing;

                if self.session.is_recording() {
                    let stop = self.action_button(
                        ui,
                        "⏹  Stop Recording",
                        "Stop Recording",
                        self.theme.stop_button,
                        button_size,
                        true,
                    );
                    if stop.clicked() {
                        action = Some(PanelAction::StopRecording);
                    }
                } else {
                    let start = self.action_button(
                        ui,
                        "🎤  Start Recording",
                        "Start Recording",
                        self.theme.record_button,
                        button_size,
                        enabled,
                    );
                    if start.clicked() {
                        action = Some(PanelAction::StartRecording);
                    }

                    let upload = self.action_button(
                        ui,
                        "⬆  Upload File",
                        "Upload File",
                        self.theme.upload_button,
                        button_size,
                        enabled,
                    );
                    if upload.clicked() {
                        action = Some(PanelAction::OpenPicker);
                    }
                }
            });
        });

        action
    }

    fn action_button(
        &self,
        ui: &mut Ui,
        text: &str,
        label: &'static str,
        fill: Color32,
        size: Vec2,
        enabled: bool,
    ) -> egui::Response {
        let button = Button::new(RichText::new(text).strong().color(Color32::WHITE))
            .fill(fill)
            .rounding(self.theme.button_rounding)
            .min_size(size);

        let response = ui
            .add_enabled(enabled, button)
            .on_disabled_hover_text("Analysis in progress");
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, enabled, label)
        });
        response
    }

    fn drop_zone(&self, ui: &mut Ui) -> Option<PanelAction> {
        let size = Vec2::new(ui.available_width(), 120.0);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, true, "Choose audio file")
        });

        if ui.is_rect_visible(rect) {
            let (border, fill) = if self.session.drag_over() {
                (self.theme.drop_active_border, self.theme.drop_active_fill)
            } else if response.hovered() {
                (self.theme.drop_border_hover, Color32::TRANSPARENT)
            } else {
                (self.theme.drop_border, Color32::TRANSPARENT)
            };

            let painter = ui.painter();
            painter.rect_filled(rect, self.theme.button_rounding, fill);
            dashed_outline(painter, rect.shrink(1.0), Stroke::new(2.0, border));

            let center = rect.center();
            let icon_color = if self.theme.is_dark() {
                self.theme.text_muted
            } else {
                self.theme.text_muted.gamma_multiply(0.9)
            };
            painter.text(
                center - Vec2::new(0.0, 28.0),
                egui::Align2::CENTER_CENTER,
                "🎵",
                egui::FontId::proportional(28.0),
                icon_color,
            );
            painter.text(
                center + Vec2::new(0.0, 6.0),
                egui::Align2::CENTER_CENTER,
                "Drag & drop audio files here",
                egui::FontId::proportional(16.0),
                self.theme.text_secondary,
            );
            painter.text(
                center + Vec2::new(0.0, 30.0),
                egui::Align2::CENTER_CENTER,
                "Supports MP3, WAV, FLAC formats",
                egui::FontId::proportional(13.0),
                self.theme.text_muted,
            );
        }

        let enabled = self.session.phase().accepts_new_input();
        (response.clicked() && enabled).then_some(PanelAction::OpenPicker)
    }

    fn uploaded_file_row(&self, ui: &mut Ui) -> Option<PanelAction> {
        let file = self.session.uploaded_file()?;
        let mut action = None;

        let fill = if self.theme.is_dark() {
            self.theme.icon_fill
        } else {
            self.theme.bg_section
        };
        Frame::none()
            .fill(fill)
            .stroke(self.theme.card_stroke())
            .rounding(8.0)
            .inner_margin(Margin::same(16.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new("🎵").color(self.theme.accent));
                    ui.label(
                        RichText::new(&file.name)
                            .strong()
                            .color(self.theme.text_primary),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let clear = ui.add(
                            Button::new(RichText::new("✖").color(self.theme.text_muted))
                                .frame(false),
                        );
                        clear.widget_info(|| {
                            egui::WidgetInfo::labeled(egui::WidgetType::Button, true, "Clear file")
                        });
                        if clear.clicked() {
                            action = Some(PanelAction::ClearFile);
                        }
                    });
                });
            });

        action
    }
}

/// Dashed rectangle outline
fn dashed_outline(painter: &egui::Painter, rect: egui::Rect, stroke: Stroke) {
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    painter.extend(egui::Shape::dashed_line(&corners, stroke, 8.0, 6.0));
}
