//! HAVDEF user interface
//!
//! Immediate-mode egui front end: a single scrolling landing page with the
//! recording panel in the middle and a floating theme toggle.

pub mod app;
pub mod components;
pub mod content;
pub mod sections;
pub mod theme;

pub use app::HavdefApp;
pub use theme::{Theme, ThemeMode};

use crate::config::AppConfig;
use crate::script::Script;

/// Open the main window and run until it is closed
pub fn run(config: AppConfig, script: Option<Script>) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("HAVDEF - Voice Deepfake Detection")
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([480.0, 600.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "havdef",
        options,
        Box::new(move |cc| Ok(Box::new(HavdefApp::new(cc, &config, script)))),
    )
}
