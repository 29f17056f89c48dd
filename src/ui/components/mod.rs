//! UI components

pub mod feature_card;
pub mod interactive_button;
pub mod recording_panel;
pub mod result_card;
pub mod theme_toggle;
pub mod waveform;

pub use feature_card::FeatureCard;
pub use interactive_button::{ButtonVariant, InteractiveButton};
pub use recording_panel::{PanelAction, RecordingPanel};
pub use result_card::{AnalysisStatus, ResultCard};
pub use theme_toggle::{ThemeToggle, TOGGLE_THEME_LABEL};
pub use waveform::{Waveform, WaveformBars};
