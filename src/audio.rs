//! Audio input backends
//!
//! The session asks its backend to begin and end a capture. No audio is
//! actually captured; the backend exists so that a failing microphone can be
//! modelled and so a real device can be plugged in later.

use crate::error::{HavdefError, Result};
use tracing::debug;

/// Something that can capture audio for the recording session
pub trait InputBackend {
    /// Begin capturing
    fn begin(&mut self) -> Result<()>;
    /// Stop capturing
    fn end(&mut self);
}

/// Backend that pretends to capture and always succeeds
#[derive(Debug, Default)]
pub struct SimulatedInput {
    active: bool,
}

impl SimulatedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a capture is in progress
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl InputBackend for SimulatedInput {
    fn begin(&mut self) -> Result<()> {
        self.active = true;
        debug!("[AUDIO] Simulated capture started");
        Ok(())
    }

    fn end(&mut self) {
        if self.active {
            debug!("[AUDIO] Simulated capture stopped");
        }
        self.active = false;
    }
}

/// Backend whose capture never starts, e.g. no microphone permission
#[derive(Debug, Clone)]
pub struct UnavailableInput {
    reason: String,
}

impl UnavailableInput {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl InputBackend for UnavailableInput {
    fn begin(&mut self) -> Result<()> {
        Err(HavdefError::RecordingStart(self.reason.clone()))
    }

    fn end(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_input_toggles() {
        let mut input = SimulatedInput::new();
        assert!(!input.is_active());
        input.begin().unwrap();
        assert!(input.is_active());
        input.end();
        assert!(!input.is_active());
    }

    #[test]
    fn test_unavailable_input_fails() {
        let mut input = UnavailableInput::new("microphone permission denied");
        let err = input.begin().unwrap_err();
        assert!(matches!(err, HavdefError::RecordingStart(_)));
        assert!(err.to_string().contains("permission denied"));
    }
}
