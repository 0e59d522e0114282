//! Full-window point-field background built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the [`Field`] and implements
//! [`eframe::App`] to feed it pointer movement and draw it every frame.

use eframe::App;
use field_core::{FieldError, config::Options, field::Field, surface::Surface};

use crate::surface::{EguiSurface, screen_to_surface};

/// Main application state.
///
/// The field is built on the first frame, sized after the central panel it
/// is drawn into. Each egui frame after that:
/// 1. The last pointer movement of the frame, if any, moves the field's
///    pointer point.
/// 2. [`Field::frame`] clears and redraws the central panel through an
///    [`EguiSurface`], then requests a repaint so the animation keeps going.
///
/// If the panel cannot host a field, the error is logged, the window is
/// closed and no further frame is requested.
pub struct Viewer {
    field: Option<Field>,
    options: Options,
    rng: rand::rngs::ThreadRng,
}

impl Viewer {
    pub fn new(options: Options) -> Self {
        Self {
            field: None,
            options,
            rng: rand::rng(),
        }
    }

    /// Returns the field, building it for `surface` on first use.
    fn ensure_field(&mut self, surface: &impl Surface) -> Result<&mut Field, FieldError> {
        let field = match self.field.take() {
            Some(field) => field,
            None => Field::for_surface(surface, &self.options, &mut self.rng)?,
        };
        Ok(self.field.insert(field))
    }
}

/// Applies the most recent `PointerMoved` among `events` to `field`.
///
/// Earlier moves in the same frame are superseded. `origin` is the screen
/// position of the surface's top-left corner.
fn track_pointer(field: &mut Field, events: &[egui::Event], origin: egui::Pos2) {
    let latest = events.iter().rev().find_map(|e| match e {
        egui::Event::PointerMoved(pos) => Some(*pos),
        _ => None,
    });

    if let Some(pos) = latest {
        let p = screen_to_surface(origin, pos);
        tracing::trace!(x = p.x, y = p.y, "pointer moved");
        field.update_pointer_position(p.x, p.y);
    }
}

impl App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let painter = ui.painter_at(rect);
                let mut surface = EguiSurface::new(&painter, rect);

                let field = match self.ensure_field(&surface) {
                    Ok(field) => field,
                    Err(e) => {
                        tracing::error!("cannot start the point field: {e}");
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        return;
                    }
                };

                ctx.input(|i| track_pointer(field, &i.events, rect.min));
                field.frame(&mut surface, &mut || ctx.request_repaint());
            });
    }
}
