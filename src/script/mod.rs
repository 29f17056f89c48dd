//! Scripted UI runs
//!
//! A script is a TOML file of timed actions that drive the running app
//! without user input, each optionally followed by an assertion on the
//! session state. Used for demos and unattended smoke runs.

mod runner;

pub use runner::{AssertionContext, AssertionResult, ScriptCommand, ScriptRunner, ScriptStep};

use crate::error::{HavdefError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A script loaded from a TOML file
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    /// Script metadata
    pub script: ScriptMetadata,
    /// Timed actions, ordered by time
    pub actions: Vec<ScriptAction>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptMetadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A single action with timing
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptAction {
    /// Milliseconds after the script starts
    pub time_ms: u64,
    pub action: ActionType,
    /// Checked right after the action ran
    #[serde(default)]
    pub assert: Option<Assertion>,
}

/// Actions a script can perform
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionType {
    /// Press "Start Recording"
    StartRecording,
    /// Press "Stop Recording"
    StopRecording,
    /// Submit a file as if chosen in the picker
    UploadFile { path: PathBuf },
    /// Submit a file as if dropped on the window
    DropFile {
        name: String,
        #[serde(default)]
        mime: Option<String>,
    },
    /// Press the clear button on the uploaded file
    ClearFile,
    ToggleTheme,
    /// Exit the application
    Exit {
        #[serde(default)]
        code: i32,
    },
    /// Write a message to the log
    Log { message: String },
}

/// Conditions checked after an action
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Assertion {
    IsIdle,
    IsRecording,
    IsAnalyzing,
    HasResult,
    NoResult,
    HasFile,
    IsDark,
    IsLight,
    /// Recording counter shows at least this many seconds
    DurationAtLeast { secs: u32 },
}

impl Script {
    /// Load a script from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            HavdefError::Script(format!("failed to read '{}': {}", path.display(), e))
        })?;

        Self::from_toml_str(&content).map_err(|e| match e {
            HavdefError::Script(msg) => {
                HavdefError::Script(format!("'{}': {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Parse and validate a script from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let script: Script =
            toml::from_str(content).map_err(|e| HavdefError::Script(e.to_string()))?;
        script.validate()?;
        Ok(script)
    }

    /// Validate the script
    fn validate(&self) -> Result<()> {
        if self.actions.is_empty() {
            return Err(HavdefError::Script(
                "script must have at least one action".to_string(),
            ));
        }

        let mut last_time = 0;
        for action in &self.actions {
            if action.time_ms < last_time {
                return Err(HavdefError::Script(format!(
                    "actions must be ordered by time, found {}ms after {}ms",
                    action.time_ms, last_time
                )));
            }
            last_time = action.time_ms;
        }

        let has_exit = self
            .actions
            .iter()
            .any(|a| matches!(a.action, ActionType::Exit { .. }));
        if !has_exit {
            return Err(HavdefError::Script(
                "script must have an exit action".to_string(),
            ));
        }

        Ok(())
    }
}

impl ScriptAction {
    /// Offset from the script start
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.time_ms)
    }
}
