//! The 2-D drawing surface a [`crate::field::Field`] renders onto.
//!
//! [`Surface`] mirrors the small subset of a canvas-style immediate-mode
//! context the field needs: a filled clear, a stroke style and a single
//! path of line segments. Hosts implement it over their own painter;
//! [`RecordingSurface`] is an in-memory implementation for headless use.

use glam::DVec2;

/// An opaque 8-bit RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a colour from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: (hex >> 16) as u8,
            g: (hex >> 8) as u8,
            b: hex as u8,
        }
    }
}

/// Surface dimensions in whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Centre of the surface in surface coordinates.
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}

/// A canvas-like drawing context.
///
/// Coordinates are in surface space: the origin is the top-left corner and
/// one unit is one pixel. The size may change between frames when the host
/// is resized.
pub trait Surface {
    /// Current dimensions of the surface.
    fn size(&self) -> SurfaceSize;

    /// Sets the colour used by [`Surface::clear_rect`].
    fn set_fill_color(&mut self, color: Rgb);

    /// Resets a rectangle of the surface to the fill colour.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Sets the colour used by [`Surface::stroke`].
    fn set_stroke_color(&mut self, color: Rgb);

    /// Sets the line width used by [`Surface::stroke`].
    fn set_line_width(&mut self, width: f32);

    /// Discards the current path and starts an empty one.
    fn begin_path(&mut self);

    /// Starts a new sub-path at `pos`.
    fn move_to(&mut self, pos: DVec2);

    /// Adds a segment from the current position to `pos`.
    fn line_to(&mut self, pos: DVec2);

    /// Strokes the current path with the current stroke style.
    fn stroke(&mut self);
}

/// A single call made against a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    SetFillColor(Rgb),
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    SetStrokeColor(Rgb),
    SetLineWidth(f32),
    BeginPath,
    MoveTo(DVec2),
    LineTo(DVec2),
    Stroke,
}

/// A [`Surface`] that records every call instead of drawing.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: SurfaceSize,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    /// Changes the reported size, as a host would on resize.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    /// All commands recorded so far, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Forgets all recorded commands.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Returns every segment that was part of a stroked path.
    ///
    /// A path is stroked as often as [`DrawCommand::Stroke`] is seen after
    /// its [`DrawCommand::BeginPath`], so its segments may appear repeatedly.
    pub fn stroked_segments(&self) -> Vec<[DVec2; 2]> {
        let mut stroked = Vec::new();
        let mut path: Vec<[DVec2; 2]> = Vec::new();
        let mut cursor: Option<DVec2> = None;

        for cmd in &self.commands {
            match *cmd {
                DrawCommand::BeginPath => {
                    path.clear();
                    cursor = None;
                }
                DrawCommand::MoveTo(pos) => cursor = Some(pos),
                DrawCommand::LineTo(pos) => {
                    if let Some(from) = cursor {
                        path.push([from, pos]);
                    }
                    cursor = Some(pos);
                }
                DrawCommand::Stroke => stroked.extend_from_slice(&path),
                _ => {}
            }
        }
        stroked
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::SetFillColor(color));
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn set_stroke_color(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::SetStrokeColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.commands.push(DrawCommand::SetLineWidth(width));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, pos: DVec2) {
        self.commands.push(DrawCommand::MoveTo(pos));
    }

    fn line_to(&mut self, pos: DVec2) {
        self.commands.push(DrawCommand::LineTo(pos));
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_from_hex_splits_channels() {
        assert_eq!(Rgb::from_hex(0x336699), Rgb::new(0x33, 0x66, 0x99));
        assert_eq!(Rgb::from_hex(0x000000), Rgb::new(0, 0, 0));
    }

    #[test]
    fn surface_size_center_and_emptiness() {
        let size = SurfaceSize::new(101, 40);
        assert_eq!(size.center(), DVec2::new(50.5, 20.0));
        assert!(!size.is_empty());

        assert!(SurfaceSize::new(0, 40).is_empty());
        assert!(SurfaceSize::new(40, 0).is_empty());
    }

    #[test]
    fn stroked_segments_only_counts_stroked_paths() {
        let mut s = RecordingSurface::new(SurfaceSize::new(10, 10));

        // Path that is never stroked.
        s.begin_path();
        s.move_to(DVec2::new(0.0, 0.0));
        s.line_to(DVec2::new(1.0, 1.0));

        // Path with two disjoint sub-paths, stroked once.
        s.begin_path();
        s.move_to(DVec2::new(0.0, 0.0));
        s.line_to(DVec2::new(2.0, 0.0));
        s.move_to(DVec2::new(5.0, 5.0));
        s.line_to(DVec2::new(5.0, 6.0));
        s.stroke();

        let segs = s.stroked_segments();
        assert_eq!(
            segs,
            vec![
                [DVec2::new(0.0, 0.0), DVec2::new(2.0, 0.0)],
                [DVec2::new(5.0, 5.0), DVec2::new(5.0, 6.0)],
            ]
        );
    }

    #[test]
    fn line_to_without_move_to_adds_no_segment() {
        let mut s = RecordingSurface::new(SurfaceSize::new(10, 10));
        s.begin_path();
        s.line_to(DVec2::new(3.0, 3.0));
        s.line_to(DVec2::new(4.0, 3.0));
        s.stroke();

        assert_eq!(
            s.stroked_segments(),
            vec![[DVec2::new(3.0, 3.0), DVec2::new(4.0, 3.0)]]
        );
    }

    #[test]
    fn reset_and_resize() {
        let mut s = RecordingSurface::new(SurfaceSize::new(10, 10));
        s.begin_path();
        assert_eq!(s.commands().len(), 1);

        s.reset();
        assert!(s.commands().is_empty());

        s.resize(SurfaceSize::new(30, 20));
        assert_eq!(s.size(), SurfaceSize::new(30, 20));
    }
}
