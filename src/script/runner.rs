//! Script runner
//!
//! Schedules the actions of a [`Script`] against the app clock and checks
//! their assertions.

use super::{ActionType, Assertion, Script};
use crate::session::Phase;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Commands the runner hands to the app
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    StartRecording,
    StopRecording,
    UploadFile(PathBuf),
    DropFile { name: String, mime: Option<String> },
    ClearFile,
    ToggleTheme,
    Exit { code: i32 },
}

/// One due action: the command to apply (log actions have none) and the
/// assertion to check afterwards
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptStep {
    pub command: Option<ScriptCommand>,
    pub assertion: Option<Assertion>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssertionResult {
    Passed,
    Failed(String),
}

/// Snapshot of the app state an assertion is checked against
#[derive(Debug, Clone, Copy)]
pub struct AssertionContext {
    pub phase: Phase,
    pub has_result: bool,
    pub has_file: bool,
    pub is_dark: bool,
    pub duration_secs: u32,
}

/// Runs a script against the app
pub struct ScriptRunner {
    script: Script,
    start_time: Option<Instant>,
    next_action: usize,
    completed: bool,
    passed: bool,
}

impl ScriptRunner {
    pub fn new(script: Script) -> Self {
        info!("[SCRIPT] Loaded script: {}", script.script.name);
        if !script.script.description.is_empty() {
            info!("[SCRIPT] Description: {}", script.script.description);
        }
        info!("[SCRIPT] Total actions: {}", script.actions.len());

        Self {
            script,
            start_time: None,
            next_action: 0,
            completed: false,
            passed: true,
        }
    }

    /// Start the clock (called on the first frame; later calls are no-ops)
    pub fn start(&mut self, now: Instant) {
        if self.start_time.is_none() {
            self.start_time = Some(now);
            info!("[SCRIPT] Started: {}", self.script.script.name);
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether every assertion so far passed
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Time since the script started
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.start_time
            .map(|t| now.saturating_duration_since(t))
            .unwrap_or(Duration::ZERO)
    }

    /// Time until the next action is due
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        if self.completed {
            return None;
        }
        let start = self.start_time?;
        let action = self.script.actions.get(self.next_action)?;
        Some((start + action.delay()).saturating_duration_since(now))
    }

    /// Next due action, if any
    ///
    /// Call repeatedly until it returns `None` to drain every action that
    /// became due since the last frame.
    pub fn poll(&mut self, now: Instant) -> Option<ScriptStep> {
        if self.completed {
            return None;
        }

        let start = self.start_time?;
        let Some(action) = self.script.actions.get(self.next_action) else {
            self.completed = true;
            return None;
        };

        if now.saturating_duration_since(start) < action.delay() {
            return None;
        }

        debug!(
            "[SCRIPT] Executing action at {}ms: {:?}",
            action.time_ms, action.action
        );
        let step = ScriptStep {
            command: Self::command_for(&action.action),
            assertion: action.assert.clone(),
        };

        self.next_action += 1;
        if self.next_action >= self.script.actions.len() {
            self.completed = true;
        }

        Some(step)
    }

    fn command_for(action: &ActionType) -> Option<ScriptCommand> {
        let command = match action {
            ActionType::StartRecording => ScriptCommand::StartRecording,
            ActionType::StopRecording => ScriptCommand::StopRecording,
            ActionType::UploadFile { path } => ScriptCommand::UploadFile(path.clone()),
            ActionType::DropFile { name, mime } => ScriptCommand::DropFile {
                name: name.clone(),
                mime: mime.clone(),
            },
            ActionType::ClearFile => ScriptCommand::ClearFile,
            ActionType::ToggleTheme => ScriptCommand::ToggleTheme,
            ActionType::Exit { code } => ScriptCommand::Exit { code: *code },
            ActionType::Log { message } => {
                info!("[SCRIPT] Log: {}", message);
                return None;
            }
        };
        Some(command)
    }

    /// Check an assertion; a failure marks the whole run as failed
    pub fn check_assertion(
        &mut self,
        assertion: &Assertion,
        context: &AssertionContext,
    ) -> AssertionResult {
        let check = |ok: bool, what: &str| {
            if ok {
                AssertionResult::Passed
            } else {
                AssertionResult::Failed(format!("expected {}, phase is {}", what, context.phase))
            }
        };

        let result = match assertion {
            Assertion::IsIdle => check(context.phase.is_idle(), "Idle"),
            Assertion::IsRecording => check(context.phase.is_recording(), "Recording"),
            Assertion::IsAnalyzing => check(context.phase.is_analyzing(), "Analyzing"),
            Assertion::HasResult => check(context.has_result, "a result"),
            Assertion::NoResult => check(!context.has_result, "no result"),
            Assertion::HasFile => check(context.has_file, "an uploaded file"),
            Assertion::IsDark => check(context.is_dark, "the dark theme"),
            Assertion::IsLight => check(!context.is_dark, "the light theme"),
            Assertion::DurationAtLeast { secs } => {
                if context.duration_secs >= *secs {
                    AssertionResult::Passed
                } else {
                    AssertionResult::Failed(format!(
                        "expected at least {}s recorded, got {}s",
                        secs, context.duration_secs
                    ))
                }
            }
        };

        match &result {
            AssertionResult::Passed => info!("[SCRIPT] PASS: {:?}", assertion),
            AssertionResult::Failed(reason) => {
                error!("[SCRIPT] FAIL: {:?} - {}", assertion, reason);
                self.passed = false;
            }
        }

        result
    }

    /// One-line outcome for the log
    pub fn summary(&self, now: Instant) -> String {
        let status = if self.passed { "PASSED" } else { "FAILED" };
        format!(
            "[SCRIPT] '{}' {}: executed {} actions in {:?}",
            self.script.script.name,
            status,
            self.next_action,
            self.elapsed(now)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script() -> Script {
        Script::from_toml_str(
            r#"
            [script]
            name = "Runner"

            [[actions]]
            time_ms = 100
            action = { type = "start_recording" }
            assert = { type = "is_recording" }

            [[actions]]
            time_ms = 100
            action = { type = "log", message = "same frame" }

            [[actions]]
            time_ms = 1000
            action = { type = "exit", code = 3 }
            "#,
        )
        .unwrap()
    }

    fn context(phase: Phase) -> AssertionContext {
        AssertionContext {
            phase,
            has_result: false,
            has_file: false,
            is_dark: true,
            duration_secs: 0,
        }
    }

    #[test]
    fn test_nothing_before_start() {
        let mut runner = ScriptRunner::new(script());
        assert_eq!(runner.poll(Instant::now()), None);
        assert!(!runner.is_completed());
    }

    #[test]
    fn test_actions_fire_on_schedule() {
        let mut runner = ScriptRunner::new(script());
        let t0 = Instant::now();
        runner.start(t0);

        assert_eq!(runner.poll(t0 + Duration::from_millis(50)), None);
        assert_eq!(
            runner.next_deadline(t0 + Duration::from_millis(50)),
            Some(Duration::from_millis(50))
        );

        let at = t0 + Duration::from_millis(150);
        let first = runner.poll(at).unwrap();
        assert_eq!(first.command, Some(ScriptCommand::StartRecording));
        assert_eq!(first.assertion, Some(Assertion::IsRecording));

        // Log actions run inline and carry no command
        let second = runner.poll(at).unwrap();
        assert_eq!(second.command, None);
        assert_eq!(runner.poll(at), None);

        let last = runner.poll(t0 + Duration::from_secs(2)).unwrap();
        assert_eq!(last.command, Some(ScriptCommand::Exit { code: 3 }));
        assert!(runner.is_completed());
        assert_eq!(runner.poll(t0 + Duration::from_secs(3)), None);
        assert_eq!(runner.next_deadline(t0 + Duration::from_secs(3)), None);
    }

    #[test]
    fn test_failed_assertion_fails_run() {
        let mut runner = ScriptRunner::new(script());
        assert!(runner.passed());

        let ok = runner.check_assertion(&Assertion::IsIdle, &context(Phase::Idle));
        assert_eq!(ok, AssertionResult::Passed);
        assert!(runner.passed());

        let failed = runner.check_assertion(&Assertion::IsAnalyzing, &context(Phase::Idle));
        assert!(matches!(failed, AssertionResult::Failed(_)));
        assert!(!runner.passed());

        // Later passes do not clear a failure
        runner.check_assertion(&Assertion::IsDark, &context(Phase::Idle));
        assert!(!runner.passed());
        assert!(runner.summary(Instant::now()).contains("FAILED"));
    }

    #[test]
    fn test_duration_and_theme_assertions() {
        let mut runner = ScriptRunner::new(script());
        let mut ctx = context(Phase::Recording);
        ctx.duration_secs = 3;
        ctx.is_dark = false;

        assert_eq!(
            runner.check_assertion(&Assertion::DurationAtLeast { secs: 3 }, &ctx),
            AssertionResult::Passed
        );
        assert_eq!(
            runner.check_assertion(&Assertion::IsLight, &ctx),
            AssertionResult::Passed
        );
        assert!(matches!(
            runner.check_assertion(&Assertion::DurationAtLeast { secs: 4 }, &ctx),
            AssertionResult::Failed(_)
        ));
    }
}
