//! UI automation tests using egui_kittest and AccessKit
//!
//! These tests drive the real app and its components through the
//! accessibility tree, the same way a screen reader would.

use egui_kittest::kittest::Queryable;
use egui_kittest::Harness;
use havdef::audio::{SimulatedInput, UnavailableInput};
use havdef::config::{AppConfig, TimingConfig};
use havdef::intake::FilePicker;
use havdef::ui::components::{
    ButtonVariant, InteractiveButton, PanelAction, RecordingPanel, ThemeToggle, WaveformBars,
    TOGGLE_THEME_LABEL,
};
use havdef::ui::{HavdefApp, Theme, ThemeMode};
use havdef::{AudioFile, IntakeSource, Phase, RecordingSession, SimulatedDetector};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Tall enough that the whole page fits without scrolling
const PAGE_SIZE: egui::Vec2 = egui::Vec2::new(1100.0, 3200.0);

fn app_harness(app: HavdefApp) -> Harness<'static, HavdefApp> {
    Harness::builder()
        .with_size(PAGE_SIZE)
        .build_state(|ctx, app: &mut HavdefApp| app.ui(ctx), app)
}

/// Step a fixed number of frames; the hero waveform never stops animating
fn step_frames(harness: &mut Harness<'_, HavdefApp>, frames: usize) {
    for _ in 0..frames {
        harness.step();
    }
}

fn stub_dialog() -> Option<PathBuf> {
    Some(PathBuf::from("/recordings/suspicious_call.wav"))
}

fn instant_analysis_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.timing.analysis_delay_secs = 0;
    config.detection.seed = Some(42);
    config
}

#[test]
fn test_page_renders_main_sections() {
    let mut harness = app_harness(HavdefApp::from_config(&AppConfig::default(), None));
    step_frames(&mut harness, 3);

    harness.get_by_label("Advanced Protection Features");
    harness.get_by_label("Test the Detection System");
    harness.get_by_label("How It Works");
    harness.get_by_label("Voice Analysis");
    harness.get_by_label("Start Recording");
    harness.get_by_label("Upload File");
    harness.get_by_label(TOGGLE_THEME_LABEL);
}

#[test]
fn test_theme_toggle_switches_mode() {
    let mut harness = app_harness(HavdefApp::from_config(&AppConfig::default(), None));
    step_frames(&mut harness, 2);
    assert_eq!(harness.state().theme_mode(), ThemeMode::Dark);

    harness.get_by_label(TOGGLE_THEME_LABEL).click();
    step_frames(&mut harness, 2);
    assert_eq!(harness.state().theme_mode(), ThemeMode::Light);
    assert!(!harness.state().theme().is_dark(), "palette follows the flag");

    harness.get_by_label(TOGGLE_THEME_LABEL).click();
    step_frames(&mut harness, 2);
    assert_eq!(harness.state().theme_mode(), ThemeMode::Dark);
    assert!(harness.state().theme().is_dark());
}

#[test]
fn test_start_and_stop_recording() {
    let mut harness = app_harness(HavdefApp::from_config(&AppConfig::default(), None));
    step_frames(&mut harness, 2);

    harness.get_by_label("Start Recording").click();
    step_frames(&mut harness, 2);
    assert_eq!(harness.state().session().phase(), Phase::Recording);

    // The start/upload pair is replaced by the stop button
    harness.get_by_label("Stop Recording").click();
    step_frames(&mut harness, 2);
    assert_eq!(harness.state().session().phase(), Phase::Analyzing);
}

#[test]
fn test_upload_and_clear_resets_result() {
    let app = HavdefApp::from_config(&instant_analysis_config(), None)
        .with_picker(FilePicker::with_dialog(stub_dialog));
    let mut harness = app_harness(app);
    step_frames(&mut harness, 2);

    harness.get_by_label("Upload File").click();

    // The dialog reports back from its own thread
    let mut frames = 0;
    while harness.state().session().result().is_none() && frames < 200 {
        harness.step();
        std::thread::sleep(Duration::from_millis(5));
        frames += 1;
    }
    assert_eq!(harness.state().session().phase(), Phase::Result);
    assert_eq!(
        harness.state().session().uploaded_file().unwrap().name,
        "suspicious_call.wav"
    );
    harness.get_by_label("suspicious_call.wav");
    harness.get_by_label("Confidence Level");

    harness.get_by_label("Clear file").click();
    step_frames(&mut harness, 2);
    assert!(harness.state().session().result().is_none());
    assert!(harness.state().session().uploaded_file().is_none());
    assert_eq!(harness.state().session().phase(), Phase::Idle);
}

#[test]
fn test_dropped_audio_file_is_analyzed() {
    let mut harness = app_harness(HavdefApp::from_config(&instant_analysis_config(), None));
    step_frames(&mut harness, 2);

    harness.input_mut().dropped_files.push(egui::DroppedFile {
        name: "voicemail.mp3".to_string(),
        mime: "audio/mpeg".to_string(),
        ..Default::default()
    });
    step_frames(&mut harness, 3);

    let session = harness.state().session();
    assert_eq!(session.uploaded_file().unwrap().name, "voicemail.mp3");
    assert!(session.result().is_some());
}

#[test]
fn test_dropped_non_audio_file_is_ignored() {
    let mut harness = app_harness(HavdefApp::from_config(&AppConfig::default(), None));
    step_frames(&mut harness, 2);

    harness.input_mut().dropped_files.push(egui::DroppedFile {
        name: "invoice.pdf".to_string(),
        mime: "application/pdf".to_string(),
        ..Default::default()
    });
    step_frames(&mut harness, 2);

    let session = harness.state().session();
    assert!(session.uploaded_file().is_none());
    assert_eq!(session.phase(), Phase::Idle);
}

#[test]
fn test_hovering_file_highlights_drop_zone() {
    let mut harness = app_harness(HavdefApp::from_config(&AppConfig::default(), None));
    step_frames(&mut harness, 2);

    harness.input_mut().hovered_files.push(egui::HoveredFile {
        mime: "audio/wav".to_string(),
        ..Default::default()
    });
    harness.step();
    assert!(harness.state().session().drag_over());

    harness.input_mut().hovered_files.clear();
    harness.step();
    assert!(!harness.state().session().drag_over());
}

#[test]
fn test_microphone_failure_shows_notice() {
    let session = RecordingSession::new(
        TimingConfig::default(),
        Box::new(SimulatedDetector::seeded(1)),
        Box::new(UnavailableInput::new("no microphone")),
    );
    let app = HavdefApp::with_session(session, &AppConfig::default().ui, None);
    let mut harness = app_harness(app);
    step_frames(&mut harness, 2);

    harness.get_by_label("Start Recording").click();
    step_frames(&mut harness, 2);

    assert_eq!(harness.state().session().phase(), Phase::Idle);
    let notice = harness
        .state()
        .notice()
        .expect("notice after failed start")
        .to_string();
    assert!(notice.contains("Recording could not be started"));
    harness.get_by_label(&notice);
}

/// Test app for rendering components on their own
struct PanelTestApp {
    session: RecordingSession,
    bars: WaveformBars,
    theme: Theme,
    mode: ThemeMode,
    last_action: Option<PanelAction>,
}

impl PanelTestApp {
    fn new() -> Self {
        Self {
            session: RecordingSession::new(
                TimingConfig::default(),
                Box::new(SimulatedDetector::seeded(8)),
                Box::new(SimulatedInput::new()),
            ),
            bars: WaveformBars::seeded(8),
            theme: Theme::dark(),
            mode: ThemeMode::Dark,
            last_action: None,
        }
    }
}

fn panel_harness(app: PanelTestApp) -> Harness<'static, PanelTestApp> {
    Harness::builder()
        .with_size(egui::Vec2::new(720.0, 1000.0))
        .build_state(
            |ctx, app: &mut PanelTestApp| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ThemeToggle::new(&mut app.mode, &app.theme).show(ui);
                    if let Some(action) =
                        RecordingPanel::new(&app.session, &app.bars, &app.theme).show(ui)
                    {
                        app.last_action = Some(action);
                    }
                });
            },
            app,
        )
}

#[test]
fn test_panel_reports_actions_without_mutating() {
    let mut harness = panel_harness(PanelTestApp::new());
    harness.run();

    harness.get_by_label("Start Recording").click();
    harness.run();
    assert_eq!(harness.state().last_action, Some(PanelAction::StartRecording));
    assert_eq!(harness.state().session.phase(), Phase::Idle);

    harness.get_by_label("Choose audio file").click();
    harness.run();
    assert_eq!(harness.state().last_action, Some(PanelAction::OpenPicker));
}

#[test]
fn test_panel_shows_duration_while_recording() {
    let mut app = PanelTestApp::new();
    let t0 = Instant::now() - Duration::from_secs(3);
    app.session.start_recording(t0).unwrap();
    app.session.tick(t0 + Duration::from_secs(3));

    let mut harness = panel_harness(app);
    harness.step();

    harness.get_by_label("00:03");
    harness.get_by_label("Stop Recording");
    assert!(harness.query_by_label("Start Recording").is_none());
}

#[test]
fn test_panel_shows_verdict() {
    let mut app = PanelTestApp::new();
    let t0 = Instant::now();
    let file = AudioFile::new("call.wav", Some("audio/wav".to_string()));
    app.session.submit_file(t0, file, IntakeSource::Picker);
    app.session.tick(t0 + Duration::from_secs(3));
    let verdict = app.session.result().unwrap().verdict;

    let mut harness = panel_harness(app);
    harness.step();

    harness.get_by_label(verdict.headline());
    harness.get_by_label("call.wav");
}

#[test]
fn test_cta_variants_report_clicks() {
    let theme = Theme::light();
    let mut harness = Harness::builder()
        .with_size(egui::Vec2::new(600.0, 300.0))
        .build_state(
            move |ctx, clicks: &mut Vec<ButtonVariant>| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    for (label, variant) in [
                        ("Try it", ButtonVariant::Primary),
                        ("Learn more", ButtonVariant::Secondary),
                    ] {
                        if InteractiveButton::new(label, &theme)
                            .variant(variant)
                            .show(ui)
                            .clicked()
                        {
                            clicks.push(variant);
                        }
                    }
                });
            },
            Vec::new(),
        );
    harness.step();

    harness.get_by_label("Learn more").click();
    harness.step();
    harness.get_by_label("Try it").click();
    harness.step();

    assert_eq!(
        harness.state().as_slice(),
        &[ButtonVariant::Secondary, ButtonVariant::Primary]
    );
}
