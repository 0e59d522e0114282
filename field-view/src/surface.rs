//! [`Surface`] implementation on top of an [`egui::Painter`].

use egui::{Color32, Painter, Pos2, Rect, Stroke};
use field_core::surface::{Rgb, Surface, SurfaceSize};
use glam::DVec2;

/// Converts a surface-space position to egui screen space.
///
/// The surface origin sits at `origin`, the top-left corner of the panel
/// the field is drawn into.
pub fn surface_to_screen(origin: Pos2, p: DVec2) -> Pos2 {
    egui::pos2(origin.x + p.x as f32, origin.y + p.y as f32)
}

/// Converts an egui screen-space position back to surface space.
pub fn screen_to_surface(origin: Pos2, p: Pos2) -> DVec2 {
    DVec2::new((p.x - origin.x) as f64, (p.y - origin.y) as f64)
}

pub fn to_color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

/// A drawing surface covering `rect`, painted through `painter`.
///
/// Path segments are buffered between [`Surface::begin_path`] and
/// [`Surface::stroke`], then emitted as egui line segments with the stroke
/// active at that moment.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
    fill: Color32,
    stroke: Stroke,
    path: Vec<[Pos2; 2]>,
    cursor: Option<Pos2>,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self {
            painter,
            rect,
            fill: Color32::WHITE,
            stroke: Stroke::new(1.0, Color32::BLACK),
            path: Vec::with_capacity(256),
            cursor: None,
        }
    }

    fn to_screen(&self, p: DVec2) -> Pos2 {
        surface_to_screen(self.rect.min, p)
    }
}

impl Surface for EguiSurface<'_> {
    fn size(&self) -> SurfaceSize {
        SurfaceSize::new(
            self.rect.width().round() as u32,
            self.rect.height().round() as u32,
        )
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.fill = to_color32(color);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let min = self.to_screen(DVec2::new(x, y));
        let area = Rect::from_min_size(min, egui::vec2(width as f32, height as f32));
        self.painter.rect_filled(area, 0.0, self.fill);
    }

    fn set_stroke_color(&mut self, color: Rgb) {
        self.stroke.color = to_color32(color);
    }

    fn set_line_width(&mut self, width: f32) {
        self.stroke.width = width;
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.cursor = None;
    }

    fn move_to(&mut self, pos: DVec2) {
        self.cursor = Some(self.to_screen(pos));
    }

    fn line_to(&mut self, pos: DVec2) {
        let to = self.to_screen(pos);
        if let Some(from) = self.cursor {
            self.path.push([from, to]);
        }
        self.cursor = Some(to);
    }

    fn stroke(&mut self) {
        for &segment in &self.path {
            self.painter.line_segment(segment, self.stroke);
        }
    }
}
