//! Native file picker
//!
//! The dialog blocks, so it runs on a worker thread and reports the chosen
//! path back over a channel that the UI polls every frame.

use super::AUDIO_EXTENSIONS;
use crate::error::{HavdefError, Result};
use crossbeam_channel::{bounded, Receiver, TryRecvError};
use std::path::PathBuf;
use std::thread;
use tracing::{debug, warn};

type DialogFn = fn() -> Option<PathBuf>;

/// Non-blocking wrapper around the native open-file dialog
pub struct FilePicker {
    dialog: DialogFn,
    pending: Option<Receiver<Option<PathBuf>>>,
}

impl Default for FilePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl FilePicker {
    /// Create a picker backed by the native dialog
    pub fn new() -> Self {
        Self::with_dialog(native_dialog)
    }

    /// Create a picker backed by a custom dialog function
    pub fn with_dialog(dialog: DialogFn) -> Self {
        Self {
            dialog,
            pending: None,
        }
    }

    /// Check if a dialog is currently open
    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Open the dialog. Returns `Ok(false)` when one is already open.
    pub fn open(&mut self) -> Result<bool> {
        if self.pending.is_some() {
            debug!("[INTAKE] File dialog already open, ignoring request");
            return Ok(false);
        }

        let (tx, rx) = bounded(1);
        let dialog = self.dialog;

        // macOS only allows dialogs on the main thread
        if cfg!(target_os = "macos") {
            let _ = tx.send(dialog());
        } else {
            thread::Builder::new()
                .name("file-picker".to_string())
                .spawn(move || {
                    let _ = tx.send(dialog());
                })
                .map_err(|e| HavdefError::FileIntake(format!("failed to open file dialog: {}", e)))?;
        }

        self.pending = Some(rx);
        Ok(true)
    }

    /// Poll for the dialog outcome
    ///
    /// Returns the chosen path once; `None` while the dialog is open, after it
    /// was cancelled, or when no dialog was opened.
    pub fn poll(&mut self) -> Option<PathBuf> {
        let rx = self.pending.as_ref()?;
        match rx.try_recv() {
            Ok(picked) => {
                self.pending = None;
                if picked.is_none() {
                    debug!("[INTAKE] File dialog cancelled");
                }
                picked
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                warn!("[INTAKE] File dialog thread exited without a result");
                self.pending = None;
                None
            }
        }
    }
}

fn native_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select an audio file")
        .add_filter("Audio", AUDIO_EXTENSIONS)
        .add_filter("All files", &["*"])
        .pick_file()
}
