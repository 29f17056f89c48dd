//! Recording session state machine
//!
//! The session drives the demo's fixed sequence:
//!
//! ```text
//! Idle ──start──▶ Recording ──stop / time limit──▶ Analyzing ──delay──▶ Result
//!  ▲                                                 ▲                   │
//!  │                                   file intake ──┘ (from Idle/Result)│
//!  └──────────────────────────── clear file ─────────────────────────────┘
//! ```
//!
//! Every operation takes the current `Instant`, so the timers can be driven
//! by simulated time. The UI calls [`RecordingSession::tick`] once per frame.

use crate::audio::{InputBackend, SimulatedInput};
use crate::config::{AppConfig, TimingConfig};
use crate::detection::{AnalysisOrigin, DetectionResult, Detector, SimulatedDetector};
use crate::error::Result;
use crate::intake::{AudioFile, IntakeSource};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Session phase
///
/// A single enum, so recording and analyzing can never be true together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing in progress
    #[default]
    Idle,
    /// Simulated microphone recording
    Recording,
    /// Simulated analysis running
    Analyzing,
    /// Verdict available
    Result,
}

impl Phase {
    /// Check if currently recording
    pub fn is_recording(&self) -> bool {
        matches!(self, Phase::Recording)
    }

    /// Check if analysis is running
    pub fn is_analyzing(&self) -> bool {
        matches!(self, Phase::Analyzing)
    }

    /// Check if idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Phase::Idle)
    }

    /// Check if recording or analyzing
    pub fn is_busy(&self) -> bool {
        self.is_recording() || self.is_analyzing()
    }

    /// Check if a new recording or file may be started from this phase
    pub fn accepts_new_input(&self) -> bool {
        matches!(self, Phase::Idle | Phase::Result)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "Idle"),
            Phase::Recording => write!(f, "Recording"),
            Phase::Analyzing => write!(f, "Analyzing"),
            Phase::Result => write!(f, "Result"),
        }
    }
}

/// Why a recording ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The user pressed stop
    Manual,
    /// The recording limit elapsed
    TimeLimit,
}

/// Why a file was not taken in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// Dropped file without an `audio/*` MIME type
    NotAudio,
    /// A recording or analysis is already in progress
    Busy,
}

/// Notifications produced by session transitions
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    RecordingStarted,
    /// Whole seconds recorded so far
    DurationTick(u32),
    RecordingStopped {
        reason: StopReason,
        duration_secs: u32,
    },
    AnalysisStarted {
        origin: AnalysisOrigin,
    },
    AnalysisCompleted(DetectionResult),
    FileRejected {
        name: String,
        reason: RejectReason,
    },
    /// Uploaded file and result discarded
    Cleared,
}

/// State of the recording/upload widget
pub struct RecordingSession {
    phase: Phase,
    duration_secs: u32,
    uploaded_file: Option<AudioFile>,
    result: Option<DetectionResult>,
    drag_over: bool,
    recording_started: Option<Instant>,
    analysis_started: Option<Instant>,
    origin: Option<AnalysisOrigin>,
    timing: TimingConfig,
    detector: Box<dyn Detector>,
    input: Box<dyn InputBackend>,
}

impl RecordingSession {
    /// Create a session with explicit collaborators
    pub fn new(
        timing: TimingConfig,
        detector: Box<dyn Detector>,
        input: Box<dyn InputBackend>,
    ) -> Self {
        Self {
            phase: Phase::Idle,
            duration_secs: 0,
            uploaded_file: None,
            result: None,
            drag_over: false,
            recording_started: None,
            analysis_started: None,
            origin: None,
            timing,
            detector,
            input,
        }
    }

    /// Create a fully simulated session from configuration
    pub fn simulated(config: &AppConfig) -> Self {
        Self::new(
            config.timing.clone(),
            Box::new(SimulatedDetector::new(&config.detection)),
            Box::new(SimulatedInput::new()),
        )
    }

    // === Accessors ===

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_recording(&self) -> bool {
        self.phase.is_recording()
    }

    pub fn is_analyzing(&self) -> bool {
        self.phase.is_analyzing()
    }

    /// Whole seconds of the current (or last) recording
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// Check if the duration counter should be shown
    pub fn shows_duration(&self) -> bool {
        self.is_recording() || self.duration_secs > 0
    }

    pub fn uploaded_file(&self) -> Option<&AudioFile> {
        self.uploaded_file.as_ref()
    }

    /// Verdict of the last completed analysis
    pub fn result(&self) -> Option<&DetectionResult> {
        self.result.as_ref()
    }

    pub fn drag_over(&self) -> bool {
        self.drag_over
    }

    pub fn set_drag_over(&mut self, drag_over: bool) {
        self.drag_over = drag_over;
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// Time until the next timer fires, for repaint scheduling
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        match self.phase {
            Phase::Recording => {
                let started = self.recording_started?;
                let next_tick = started + Duration::from_secs(u64::from(self.duration_secs) + 1);
                let limit = started + self.timing.recording_limit();
                Some(next_tick.min(limit).saturating_duration_since(now))
            }
            Phase::Analyzing => {
                let started = self.analysis_started?;
                Some((started + self.timing.analysis_delay()).saturating_duration_since(now))
            }
            Phase::Idle | Phase::Result => None,
        }
    }

    // === Transitions ===

    /// Start a simulated recording
    ///
    /// Ignored while recording or analyzing. When the input backend fails the
    /// error is logged, the session stays idle and the error is returned.
    pub fn start_recording(&mut self, now: Instant) -> Result<Vec<SessionEvent>> {
        if !self.phase.accepts_new_input() {
            debug!("[SESSION] {} in progress, ignoring start request", self.phase);
            return Ok(Vec::new());
        }

        self.result = None;
        self.uploaded_file = None;
        self.duration_secs = 0;

        if let Err(e) = self.input.begin() {
            error!("[SESSION] Recording failed: {}", e);
            self.phase = Phase::Idle;
            self.recording_started = None;
            return Err(e);
        }

        self.phase = Phase::Recording;
        self.recording_started = Some(now);
        info!(
            "[SESSION] Recording started (auto-stop after {}s)",
            self.timing.recording_limit_secs
        );

        Ok(vec![SessionEvent::RecordingStarted])
    }

    /// Stop the recording early and start the analysis
    pub fn stop_recording(&mut self, now: Instant) -> Vec<SessionEvent> {
        if !self.is_recording() {
            debug!("[SESSION] Not recording, ignoring stop request");
            return Vec::new();
        }

        let mut events = Vec::new();
        self.update_duration(now, &mut events);
        self.finish_recording(now, StopReason::Manual, &mut events);
        events
    }

    /// Hand a file to the session
    ///
    /// Dropped files must carry an `audio/*` MIME type; files from the picker
    /// are not checked. Accepted files skip recording and go straight to
    /// analysis.
    pub fn submit_file(
        &mut self,
        now: Instant,
        file: AudioFile,
        source: IntakeSource,
    ) -> Vec<SessionEvent> {
        if source == IntakeSource::DragDrop && !file.is_audio() {
            info!(
                "[INTAKE] Ignoring dropped file '{}' ({})",
                file.name,
                file.mime.as_deref().unwrap_or("unknown type")
            );
            return vec![SessionEvent::FileRejected {
                name: file.name,
                reason: RejectReason::NotAudio,
            }];
        }

        if !self.phase.accepts_new_input() {
            debug!(
                "[INTAKE] {} in progress, ignoring file '{}'",
                self.phase, file.name
            );
            return vec![SessionEvent::FileRejected {
                name: file.name,
                reason: RejectReason::Busy,
            }];
        }

        info!("[INTAKE] Accepted '{}' via {}", file.name, source);
        self.uploaded_file = Some(file.clone());
        self.result = None;

        let mut events = Vec::new();
        self.begin_analysis(now, AnalysisOrigin::File(file), &mut events);
        events
    }

    /// Discard the uploaded file and any result
    ///
    /// A running analysis is cancelled and the session returns to idle.
    pub fn clear_file(&mut self) -> Vec<SessionEvent> {
        if matches!(self.phase, Phase::Analyzing | Phase::Result) {
            if self.is_analyzing() {
                debug!("[SESSION] Cancelling analysis");
            }
            self.phase = Phase::Idle;
            self.analysis_started = None;
            self.origin = None;
        }

        self.uploaded_file = None;
        self.result = None;
        info!("[SESSION] File cleared");
        vec![SessionEvent::Cleared]
    }

    /// Advance the timers to `now`
    ///
    /// Transitions that became due are applied in order, so a single late
    /// tick can carry the session from recording all the way to a result.
    pub fn tick(&mut self, now: Instant) -> Vec<SessionEvent> {
        let mut events = Vec::new();

        if self.is_recording() {
            self.update_duration(now, &mut events);
            if let Some(started) = self.recording_started {
                let limit_at = started + self.timing.recording_limit();
                if now >= limit_at {
                    self.finish_recording(limit_at, StopReason::TimeLimit, &mut events);
                }
            }
        }

        if self.is_analyzing() {
            if let Some(started) = self.analysis_started {
                if now >= started + self.timing.analysis_delay() {
                    self.complete_analysis(&mut events);
                }
            }
        }

        events
    }

    fn update_duration(&mut self, now: Instant, events: &mut Vec<SessionEvent>) {
        let Some(started) = self.recording_started else {
            return;
        };

        let elapsed = now.saturating_duration_since(started).as_secs();
        let secs = elapsed.min(self.timing.recording_limit().as_secs()) as u32;
        if secs > self.duration_secs {
            self.duration_secs = secs;
            events.push(SessionEvent::DurationTick(secs));
        }
    }

    fn finish_recording(&mut self, at: Instant, reason: StopReason, events: &mut Vec<SessionEvent>) {
        self.input.end();
        self.recording_started = None;

        info!(
            "[SESSION] Recording stopped ({:?}) after {}s",
            reason, self.duration_secs
        );
        events.push(SessionEvent::RecordingStopped {
            reason,
            duration_secs: self.duration_secs,
        });

        let origin = AnalysisOrigin::Recording {
            duration_secs: self.duration_secs,
        };
        self.begin_analysis(at, origin, events);
    }

    fn begin_analysis(&mut self, at: Instant, origin: AnalysisOrigin, events: &mut Vec<SessionEvent>) {
        info!("[SESSION] Analyzing {}", origin);
        self.phase = Phase::Analyzing;
        self.analysis_started = Some(at);
        self.origin = Some(origin.clone());
        events.push(SessionEvent::AnalysisStarted { origin });
    }

    fn complete_analysis(&mut self, events: &mut Vec<SessionEvent>) {
        let origin = self
            .origin
            .take()
            .unwrap_or(AnalysisOrigin::Recording { duration_secs: self.duration_secs });
        let result = self.detector.analyze(&origin);

        info!(
            "[SESSION] Verdict: {} ({}% confidence)",
            result.verdict,
            result.confidence_percent()
        );
        self.result = Some(result);
        self.phase = Phase::Result;
        self.analysis_started = None;
        events.push(SessionEvent::AnalysisCompleted(result));
    }
}

/// Format whole seconds as `MM:SS`
pub fn format_duration(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
