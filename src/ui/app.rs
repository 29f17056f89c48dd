//! Main HAVDEF application struct and eframe integration

use crate::config::{AppConfig, UiConfig};
use crate::intake::{hovered_is_audio, AudioFile, FilePicker, IntakeSource};
use crate::script::{AssertionContext, AssertionResult, Script, ScriptCommand, ScriptRunner};
use crate::session::{RecordingSession, RejectReason, SessionEvent};
use crate::ui::components::waveform::RESHUFFLE_INTERVAL;
use crate::ui::components::{PanelAction, RecordingPanel, ThemeToggle, WaveformBars};
use crate::ui::content;
use crate::ui::sections::{self, centered_column, CONTENT_WIDTH};
use crate::ui::theme::{Theme, ThemeMode};
use egui::{Align, Align2, CentralPanel, Frame, Id, Order, ScrollArea, Vec2};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Width of the detection section column
const DETECTION_WIDTH: f32 = 720.0;

const PICKER_OPEN_NOTICE: &str = "Choose a file or close the file dialog before recording";

/// Main HAVDEF application
pub struct HavdefApp {
    /// Whether the first frame has run
    initialized: bool,
    session: RecordingSession,
    /// Theme controller flag
    theme_mode: ThemeMode,
    /// Palette for `theme_mode`
    theme: Theme,
    /// Mode last pushed into egui's style
    applied_mode: Option<ThemeMode>,
    hero_wave: WaveformBars,
    panel_wave: WaveformBars,
    picker: FilePicker,
    /// Error shown under the recording buttons
    notice: Option<String>,
    /// Set by the hero CTA, consumed when the detection section is laid out
    scroll_to_detection: bool,
    script_runner: Option<ScriptRunner>,
    /// Exit code requested by the script
    pending_exit: Option<i32>,
    /// Final exit code once the script has finished
    exit_code: Option<i32>,
}

impl HavdefApp {
    /// Create the app for eframe
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig, script: Option<Script>) -> Self {
        let mut app = Self::from_config(config, script);
        app.sync_theme(&cc.egui_ctx);
        app
    }

    /// Create the app from configuration, with a simulated session
    pub fn from_config(config: &AppConfig, script: Option<Script>) -> Self {
        Self::with_session(RecordingSession::simulated(config), &config.ui, script)
    }

    /// Create the app around an existing session
    pub fn with_session(
        session: RecordingSession,
        ui_config: &UiConfig,
        script: Option<Script>,
    ) -> Self {
        let theme_mode = ThemeMode::from_dark(ui_config.start_dark);

        Self {
            initialized: false,
            session,
            theme_mode,
            theme: Theme::for_mode(theme_mode),
            applied_mode: None,
            hero_wave: WaveformBars::new(),
            panel_wave: WaveformBars::new(),
            picker: FilePicker::new(),
            notice: None,
            scroll_to_detection: false,
            script_runner: script.map(ScriptRunner::new),
            pending_exit: None,
            exit_code: None,
        }
    }

    /// Replace the file picker (e.g. with a stub dialog)
    pub fn with_picker(mut self, picker: FilePicker) -> Self {
        self.picker = picker;
        self
    }

    // === Accessors ===

    pub fn session(&self) -> &RecordingSession {
        &self.session
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Message currently shown under the recording buttons
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker.is_open()
    }

    /// Exit code requested by a finished script
    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    /// Run one frame: apply input, advance timers and draw
    pub fn ui(&mut self, ctx: &egui::Context) {
        let now = Instant::now();

        self.initialize(now);
        self.sync_theme(ctx);
        self.poll_picker(now);
        self.handle_file_drops(ctx, now);
        self.process_script_commands(ctx, now);

        let events = self.session.tick(now);
        self.handle_events(&events);

        let time = ctx.input(|i| i.time);
        self.hero_wave.update(true, time);
        self.panel_wave.update(self.session.phase().is_busy(), time);

        self.render(ctx, now);
        self.schedule_repaint(ctx, now);
    }

    /// Called on the first frame
    fn initialize(&mut self, now: Instant) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        if let Some(ref mut runner) = self.script_runner {
            runner.start(now);
        }

        info!("[UI] HAVDEF initialized ({} theme)", self.theme_mode);
    }

    /// Rebuild and apply the palette when the theme flag changed
    fn sync_theme(&mut self, ctx: &egui::Context) {
        if self.applied_mode == Some(self.theme_mode) {
            return;
        }
        self.theme = Theme::for_mode(self.theme_mode);
        self.theme.apply(ctx);
        self.applied_mode = Some(self.theme_mode);
        debug!("[UI] Applied {} theme", self.theme_mode);
    }

    fn poll_picker(&mut self, now: Instant) {
        if let Some(path) = self.picker.poll() {
            self.submit_path(now, path);
        }
    }

    fn submit_path(&mut self, now: Instant, path: PathBuf) {
        let file = AudioFile::from_path(path);
        let events = self.session.submit_file(now, file, IntakeSource::Picker);
        self.handle_events(&events);
    }

    /// Track hovering files and take in the first dropped one
    fn handle_file_drops(&mut self, ctx: &egui::Context, now: Instant) {
        let (hovered, dropped) = ctx.input(|i| {
            (
                i.raw.hovered_files.clone(),
                i.raw.dropped_files.first().cloned(),
            )
        });

        // Highlight unless the hovered files are known not to be audio
        let drag_over = hovered
            .iter()
            .any(|file| file.path.is_none() || hovered_is_audio(file));
        if drag_over != self.session.drag_over() {
            self.session.set_drag_over(drag_over);
        }

        if let Some(file) = dropped {
            self.session.set_drag_over(false);
            let events =
                self.session
                    .submit_file(now, AudioFile::from_dropped(&file), IntakeSource::DragDrop);
            self.handle_events(&events);
        }
    }

    fn apply_action(&mut self, action: PanelAction, now: Instant) {
        match action {
            PanelAction::StartRecording => self.start_recording(now),
            PanelAction::StopRecording => {
                let events = self.session.stop_recording(now);
                self.handle_events(&events);
            }
            PanelAction::OpenPicker => self.open_picker(),
            PanelAction::ClearFile => {
                let events = self.session.clear_file();
                self.handle_events(&events);
            }
        }
    }

    fn start_recording(&mut self, now: Instant) {
        if self.picker.is_open() {
            debug!("[UI] File dialog open, not starting a recording");
            self.notice = Some(PICKER_OPEN_NOTICE.to_string());
            return;
        }
        match self.session.start_recording(now) {
            Ok(events) => self.handle_events(&events),
            Err(e) => {
                warn!("[UI] {}", e);
                self.notice = Some(e.user_message());
            }
        }
    }

    fn open_picker(&mut self) {
        if !self.session.phase().accepts_new_input() {
            debug!("[UI] {} in progress, not opening file dialog", self.session.phase());
            return;
        }
        if let Err(e) = self.picker.open() {
            warn!("[UI] {}", e);
            self.notice = Some(e.user_message());
        }
    }

    fn handle_events(&mut self, events: &[SessionEvent]) {
        for event in events {
            match event {
                SessionEvent::RecordingStarted | SessionEvent::AnalysisStarted { .. } => {
                    self.notice = None;
                }
                SessionEvent::DurationTick(secs) => debug!("[SESSION] {}s recorded", secs),
                SessionEvent::FileRejected {
                    name,
                    reason: RejectReason::Busy,
                } => {
                    self.notice = Some(format!(
                        "{} was not analyzed because a recording or analysis is in progress",
                        name
                    ));
                }
                _ => {}
            }
        }
    }

    /// Execute the script actions that became due
    fn process_script_commands(&mut self, ctx: &egui::Context, now: Instant) {
        let mut steps = Vec::new();
        if let Some(ref mut runner) = self.script_runner {
            while let Some(step) = runner.poll(now) {
                steps.push(step);
            }
        }

        for step in steps {
            if let Some(command) = step.command {
                self.execute_script_command(command, now);
            }

            if let Some(ref assertion) = step.assertion {
                // Let due timers fire first so the assertion sees this instant
                let events = self.session.tick(now);
                self.handle_events(&events);

                let context = self.assertion_context();
                if let Some(ref mut runner) = self.script_runner {
                    let result = runner.check_assertion(assertion, &context);
                    if matches!(result, AssertionResult::Failed(_)) && self.pending_exit == Some(0) {
                        self.pending_exit = Some(1);
                    }
                }
            }
        }

        if let Some(ref runner) = self.script_runner {
            if runner.is_completed() && self.exit_code.is_none() {
                if let Some(code) = self.pending_exit.take() {
                    info!("{}", runner.summary(now));
                    let final_code = if runner.passed() { code } else { 1 };
                    info!("[SCRIPT] Exiting with code {}", final_code);
                    self.exit_code = Some(final_code);
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            }
        }
    }

    fn execute_script_command(&mut self, command: ScriptCommand, now: Instant) {
        info!("[SCRIPT] Executing: {:?}", command);
        match command {
            ScriptCommand::StartRecording => self.apply_action(PanelAction::StartRecording, now),
            ScriptCommand::StopRecording => self.apply_action(PanelAction::StopRecording, now),
            ScriptCommand::UploadFile(path) => self.submit_path(now, path),
            ScriptCommand::DropFile { name, mime } => {
                let mime = mime.or_else(|| {
                    crate::intake::guess_mime(std::path::Path::new(&name)).map(str::to_string)
                });
                let file = AudioFile::new(name, mime);
                let events = self.session.submit_file(now, file, IntakeSource::DragDrop);
                self.handle_events(&events);
            }
            ScriptCommand::ClearFile => self.apply_action(PanelAction::ClearFile, now),
            ScriptCommand::ToggleTheme => self.theme_mode.toggle(),
            ScriptCommand::Exit { code } => self.pending_exit = Some(code),
        }
    }

    fn assertion_context(&self) -> AssertionContext {
        AssertionContext {
            phase: self.session.phase(),
            has_result: self.session.result().is_some(),
            has_file: self.session.uploaded_file().is_some(),
            is_dark: self.theme_mode.is_dark(),
            duration_secs: self.session.duration_secs(),
        }
    }

    fn render(&mut self, ctx: &egui::Context, now: Instant) {
        let theme = &self.theme;
        let mut cta_clicked = false;
        let mut action = None;
        let scroll_to_detection = std::mem::take(&mut self.scroll_to_detection);

        CentralPanel::default()
            .frame(Frame::none().fill(theme.bg_page))
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        cta_clicked = centered_column(ui, CONTENT_WIDTH, |ui| {
                            sections::hero(ui, theme, &self.hero_wave)
                        });

                        sections::band(ui, theme, |ui| sections::features(ui, theme));

                        ui.add_space(theme.spacing_lg * 2.5);
                        if scroll_to_detection {
                            ui.scroll_to_cursor(Some(Align::TOP));
                        }
                        action = centered_column(ui, DETECTION_WIDTH, |ui| {
                            sections::section_header(
                                ui,
                                theme,
                                content::DETECTION_TITLE,
                                content::DETECTION_COPY,
                            );
                            RecordingPanel::new(&self.session, &self.panel_wave, theme)
                                .notice(self.notice.as_deref())
                                .show(ui)
                        });
                        ui.add_space(theme.spacing_lg * 2.5);

                        sections::band(ui, theme, |ui| sections::pipeline(ui, theme));
                        sections::footer(ui, theme);
                    });
            });

        egui::Area::new(Id::new("theme_toggle"))
            .order(Order::Foreground)
            .anchor(Align2::RIGHT_TOP, Vec2::new(-24.0, 24.0))
            .show(ctx, |ui| {
                let response = ThemeToggle::new(&mut self.theme_mode, &self.theme).show(ui);
                if response.clicked() {
                    ctx.request_repaint();
                }
            });

        if cta_clicked {
            debug!("[UI] Scrolling to detection section");
            self.scroll_to_detection = true;
            ctx.request_repaint();
        }
        if let Some(action) = action {
            debug!("[UI] Panel action: {:?}", action);
            self.apply_action(action, now);
            ctx.request_repaint();
        }
    }

    /// Wake up for the next waveform reshuffle or session deadline
    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        if self.picker.is_open() {
            ctx.request_repaint();
            return;
        }

        let script_deadline = self
            .script_runner
            .as_ref()
            .and_then(|runner| runner.next_deadline(now));

        let mut wait = Duration::from_secs_f64(RESHUFFLE_INTERVAL);
        for deadline in [self.session.next_deadline(now), script_deadline]
            .into_iter()
            .flatten()
        {
            wait = wait.min(deadline);
        }
        ctx.request_repaint_after(wait);
    }
}

impl eframe::App for HavdefApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);

        if let Some(code) = self.exit_code {
            std::process::exit(code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Phase;

    fn script(toml_str: &str) -> Script {
        Script::from_toml_str(toml_str).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let app = HavdefApp::from_config(&AppConfig::default(), None);
        assert_eq!(app.session().phase(), Phase::Idle);
        assert!(app.theme_mode().is_dark());
        assert!(app.notice().is_none());
        assert!(app.exit_code().is_none());
    }

    #[test]
    fn test_light_start() {
        let mut config = AppConfig::default();
        config.ui.start_dark = false;
        let app = HavdefApp::from_config(&config, None);
        assert_eq!(app.theme_mode(), ThemeMode::Light);
        assert!(!app.theme().is_dark());
    }

    #[test]
    fn test_script_commands_drive_session() {
        let mut app = HavdefApp::from_config(&AppConfig::default(), None);
        let now = Instant::now();

        app.execute_script_command(ScriptCommand::StartRecording, now);
        assert_eq!(app.session().phase(), Phase::Recording);

        app.execute_script_command(ScriptCommand::StopRecording, now + Duration::from_secs(1));
        assert_eq!(app.session().phase(), Phase::Analyzing);

        app.execute_script_command(ScriptCommand::ToggleTheme, now);
        assert_eq!(app.theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn test_script_drop_file_guesses_mime() {
        let mut app = HavdefApp::from_config(&AppConfig::default(), None);
        let now = Instant::now();

        app.execute_script_command(
            ScriptCommand::DropFile {
                name: "notes.txt".to_string(),
                mime: None,
            },
            now,
        );
        assert_eq!(app.session().phase(), Phase::Idle);
        assert!(app.session().uploaded_file().is_none());

        app.execute_script_command(
            ScriptCommand::DropFile {
                name: "call.wav".to_string(),
                mime: None,
            },
            now,
        );
        assert_eq!(app.session().phase(), Phase::Analyzing);
        assert_eq!(app.session().uploaded_file().unwrap().name, "call.wav");
    }

    fn slow_dialog() -> Option<PathBuf> {
        std::thread::sleep(Duration::from_millis(50));
        Some(PathBuf::from("/recordings/late.wav"))
    }

    #[test]
    fn test_recording_blocked_while_picker_open() {
        let mut app = HavdefApp::from_config(&AppConfig::default(), None)
            .with_picker(FilePicker::with_dialog(slow_dialog));
        let now = Instant::now();

        app.apply_action(PanelAction::OpenPicker, now);
        assert!(app.is_picker_open());

        app.apply_action(PanelAction::StartRecording, now);
        assert_eq!(app.session().phase(), Phase::Idle);
        assert_eq!(app.notice(), Some(PICKER_OPEN_NOTICE));

        let deadline = Instant::now() + Duration::from_secs(5);
        while app.is_picker_open() && Instant::now() < deadline {
            app.poll_picker(now);
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(!app.is_picker_open());
        assert_eq!(app.session().uploaded_file().unwrap().name, "late.wav");
        assert_eq!(app.session().phase(), Phase::Analyzing);
        assert!(app.notice().is_none(), "accepted file clears the notice");
    }

    #[test]
    fn test_file_arriving_while_busy_sets_notice() {
        let mut app = HavdefApp::from_config(&AppConfig::default(), None);
        let now = Instant::now();

        app.apply_action(PanelAction::StartRecording, now);
        assert_eq!(app.session().phase(), Phase::Recording);

        app.submit_path(now, PathBuf::from("/recordings/late.wav"));
        assert_eq!(app.session().phase(), Phase::Recording);
        assert!(app.session().uploaded_file().is_none());
        let notice = app.notice().unwrap();
        assert!(notice.contains("late.wav"), "notice names the file: {}", notice);
    }

    #[test]
    fn test_failed_assertion_turns_exit_code_into_failure() {
        let ctx = egui::Context::default();
        let mut app = HavdefApp::from_config(
            &AppConfig::default(),
            Some(script(
                r#"
                [script]
                name = "Failing"

                [[actions]]
                time_ms = 0
                action = { type = "log", message = "nothing recorded yet" }
                assert = { type = "is_recording" }

                [[actions]]
                time_ms = 0
                action = { type = "exit", code = 0 }
                "#,
            )),
        );

        let now = Instant::now();
        app.initialize(now);
        app.process_script_commands(&ctx, now);
        assert_eq!(app.exit_code(), Some(1));
    }

    #[test]
    fn test_passing_script_keeps_exit_code() {
        let ctx = egui::Context::default();
        let mut app = HavdefApp::from_config(
            &AppConfig::default(),
            Some(script(
                r#"
                [script]
                name = "Passing"

                [[actions]]
                time_ms = 0
                action = { type = "start_recording" }
                assert = { type = "is_recording" }

                [[actions]]
                time_ms = 0
                action = { type = "exit", code = 7 }
                "#,
            )),
        );

        let now = Instant::now();
        app.initialize(now);
        app.process_script_commands(&ctx, now);
        assert_eq!(app.exit_code(), Some(7));
    }
}
