//! Error types for the HAVDEF application

use thiserror::Error;

/// HAVDEF application errors
#[derive(Error, Debug, Clone)]
pub enum HavdefError {
    /// The input backend refused to begin a recording
    #[error("Recording start error: {0}")]
    RecordingStart(String),

    /// A file could not be taken in for analysis
    #[error("File intake error: {0}")]
    FileIntake(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid or unreadable UI script
    #[error("Script error: {0}")]
    Script(String),

    /// File system I/O error
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for HavdefError {
    fn from(e: std::io::Error) -> Self {
        HavdefError::Io(e.to_string())
    }
}

impl HavdefError {
    /// Check if this error is recoverable
    ///
    /// Recoverable errors leave the session usable; the user can simply
    /// try the action again.
    pub fn is_recoverable(&self) -> bool {
        match self {
            HavdefError::RecordingStart(_) => true,
            HavdefError::FileIntake(_) => true,
            // Startup inputs, nothing to retry from inside the UI
            HavdefError::Config(_) => false,
            HavdefError::Script(_) => false,
            HavdefError::Io(_) => false,
        }
    }

    /// Get a user-friendly description of the error
    pub fn user_message(&self) -> String {
        match self {
            HavdefError::RecordingStart(_) => {
                "Recording could not be started. Please try again.".to_string()
            }
            HavdefError::FileIntake(_) => "The selected file could not be used.".to_string(),
            HavdefError::Config(_) => "Configuration error. Please check settings.".to_string(),
            HavdefError::Script(_) => "The UI script is invalid.".to_string(),
            HavdefError::Io(_) => "File system error occurred.".to_string(),
        }
    }
}

/// Result type alias for HAVDEF operations
pub type Result<T> = std::result::Result<T, HavdefError>;
