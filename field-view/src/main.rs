//! Application entry point for the point-field background.
//!
//! This binary sets up logging and eframe/egui and delegates building and
//! drawing the field to [`Viewer`].

mod surface;
mod viewer;

use field_core::config::Options;
use tracing_subscriber::EnvFilter;
use viewer::Viewer;

const WINDOW_WIDTH: f32 = 1280.0;
const WINDOW_HEIGHT: f32 = 720.0;

/// Starts the native eframe application.
///
/// Logging is filtered through `RUST_LOG` (default `info`). The field
/// itself is sized on the first frame, after the window has its real size.
///
/// ### Returns
/// - `Ok(())` once the window is closed.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(width = WINDOW_WIDTH, height = WINDOW_HEIGHT, "opening viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Point Field")
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "Point Field",
        options,
        Box::new(|_cc| Ok(Box::new(Viewer::new(Options::default())))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}
