//! Audio file intake
//!
//! Files reach the session either through the native file picker or by being
//! dropped on the window. Only the name and MIME type are looked at; the
//! content is never read.

mod picker;

pub use picker::FilePicker;

use std::path::{Path, PathBuf};

/// Extensions offered by the picker's "Audio" filter
pub const AUDIO_EXTENSIONS: &[&str] = &[
    "mp3", "wav", "flac", "ogg", "oga", "opus", "m4a", "aac", "weba", "aif", "aiff", "mid",
    "midi", "wma", "amr",
];

/// How a file was handed to the session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntakeSource {
    /// Chosen in the file picker (no type check)
    Picker,
    /// Dropped on the window (audio MIME types only)
    DragDrop,
}

impl std::fmt::Display for IntakeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeSource::Picker => write!(f, "picker"),
            IntakeSource::DragDrop => write!(f, "drag-drop"),
        }
    }
}

/// Reference to a user-chosen file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioFile {
    /// Display name (file name without directories)
    pub name: String,
    /// Location on disk, when the platform provided one
    pub path: Option<PathBuf>,
    /// MIME type, supplied by the platform or guessed from the extension
    pub mime: Option<String>,
}

impl AudioFile {
    pub fn new(name: impl Into<String>, mime: Option<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            mime,
        }
    }

    /// Describe a file on disk
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime = guess_mime(&path).map(str::to_string);

        Self {
            name,
            path: Some(path),
            mime,
        }
    }

    /// Describe a file dropped on the window
    pub fn from_dropped(file: &egui::DroppedFile) -> Self {
        let mut audio = match &file.path {
            Some(path) => Self::from_path(path.clone()),
            None => Self::new(file.name.clone(), guess_mime(Path::new(&file.name)).map(str::to_string)),
        };

        if !file.name.is_empty() {
            audio.name = file.name.clone();
        }
        // Web backends report a real MIME type; native ones leave it empty
        if !file.mime.is_empty() {
            audio.mime = Some(file.mime.clone());
        }

        audio
    }

    /// Check if the MIME type is `audio/*`
    pub fn is_audio(&self) -> bool {
        self.mime
            .as_deref()
            .is_some_and(|mime| mime.starts_with("audio/"))
    }
}

/// Check if a file hovering over the window looks like audio
pub fn hovered_is_audio(file: &egui::HoveredFile) -> bool {
    if file.mime.starts_with("audio/") {
        return true;
    }
    file.path
        .as_deref()
        .and_then(guess_mime)
        .is_some_and(|mime| mime.starts_with("audio/"))
}

/// Guess a MIME type from a file extension
pub fn guess_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "flac" => "audio/flac",
        "ogg" | "oga" => "audio/ogg",
        "opus" => "audio/opus",
        "m4a" => "audio/mp4",
        "aac" => "audio/aac",
        "weba" => "audio/webm",
        "aif" | "aiff" => "audio/aiff",
        "mid" | "midi" => "audio/midi",
        "wma" => "audio/x-ms-wma",
        "amr" => "audio/amr",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "txt" => "text/plain",
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => return None,
    };
    Some(mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_guesses_mime() {
        let file = AudioFile::from_path("/tmp/calls/suspect.MP3");
        assert_eq!(file.name, "suspect.MP3");
        assert_eq!(file.mime.as_deref(), Some("audio/mpeg"));
        assert!(file.is_audio());
    }

    #[test]
    fn test_non_audio_files() {
        assert!(!AudioFile::from_path("notes.txt").is_audio());
        assert!(!AudioFile::from_path("clip.mp4").is_audio());
        assert!(!AudioFile::from_path("no_extension").is_audio());
    }

    #[test]
    fn test_every_filter_extension_is_audio() {
        for ext in AUDIO_EXTENSIONS {
            let file = AudioFile::from_path(format!("sample.{}", ext));
            assert!(file.is_audio(), "extension {} should map to audio/*", ext);
        }
    }

    #[test]
    fn test_dropped_file_prefers_platform_mime() {
        let dropped = egui::DroppedFile {
            name: "voice".to_string(),
            mime: "audio/ogg".to_string(),
            ..Default::default()
        };
        let file = AudioFile::from_dropped(&dropped);
        assert_eq!(file.name, "voice");
        assert!(file.is_audio());
    }

    #[test]
    fn test_dropped_file_from_path() {
        let dropped = egui::DroppedFile {
            path: Some(PathBuf::from("/home/user/report.pdf")),
            ..Default::default()
        };
        let file = AudioFile::from_dropped(&dropped);
        assert_eq!(file.name, "report.pdf");
        assert_eq!(file.mime.as_deref(), Some("application/pdf"));
        assert!(!file.is_audio());
    }

    #[test]
    fn test_hovered_audio_detection() {
        let hovered = egui::HoveredFile {
            path: Some(PathBuf::from("take1.wav")),
            ..Default::default()
        };
        assert!(hovered_is_audio(&hovered));

        let hovered = egui::HoveredFile {
            path: Some(PathBuf::from("take1.doc")),
            ..Default::default()
        };
        assert!(!hovered_is_audio(&hovered));
    }
}
