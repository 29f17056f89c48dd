//! HAVDEF: Hindi Audio-Visual Deepfake Defense
//!
//! Desktop demo of a voice deepfake detector. A recording session walks
//! through a fixed idle, recording, analyzing and result sequence driven by
//! timers; the verdict comes from a pluggable [`Detector`], which ships as a
//! random simulation.

pub mod audio;
pub mod config;
pub mod detection;
pub mod error;
pub mod intake;
pub mod script;
pub mod session;
pub mod ui;

pub use config::AppConfig;
pub use detection::{DetectionResult, Detector, SimulatedDetector, Verdict};
pub use error::{HavdefError, Result};
pub use intake::{AudioFile, IntakeSource};
pub use session::{format_duration, Phase, RecordingSession, SessionEvent};
