//! The point field: construction, per-pair influence and rendering.
//!
//! One animation tick looks like:
//! 1. [`Field::clear_surface`] — wipe the surface and set the line style.
//! 2. [`Field::render`] — visit every ordered pair of points, adding a
//!    connection to the path when the pair is close and letting the first
//!    point pull on the second through [`influence`].
//! 3. The host is asked for the next frame ([`Field::frame`]).
//!
//! Pointer movement reaches the field through
//! [`Field::update_pointer_position`] between ticks.

use glam::DVec2;
use rand::Rng;
use tracing::{debug, info, trace};

use crate::{
    config::{
        ANCHOR_MASS, BACKGROUND_COLOR, FREE_MASS_RANGE, INFLUENCE_DAMPING, LINE_COLOR, LINE_WIDTH,
        LINK_DISTANCE, Options, POINT_SPACING,
    },
    error::FieldError,
    point::Point,
    schedule::FrameScheduler,
    surface::{Surface, SurfaceSize},
    types::PointId,
};

/// Default number of free points for a surface.
///
/// Grows with how far the surface is from square: `|height - width|`
/// divided by [`POINT_SPACING`], rounded down. A square surface gets no
/// free points at all.
pub fn optimal_point_count(size: SurfaceSize) -> usize {
    (size.height.abs_diff(size.width) / POINT_SPACING) as usize
}

/// Scatters `count` free points over the surface and appends the pointer
/// and the anchor.
///
/// Free points get integer coordinates in `[0, width) × [0, height)` and
/// an integer mass from [`FREE_MASS_RANGE`]. The pointer and the fixed
/// anchor (mass [`ANCHOR_MASS`]) both start at the surface centre, in that
/// order, after all free points.
///
/// ### Errors
/// [`FieldError::InvalidSurface`] if either dimension is zero.
pub fn generate_points(
    count: usize,
    size: SurfaceSize,
    rng: &mut impl Rng,
) -> Result<Vec<Point>, FieldError> {
    if size.is_empty() {
        return Err(FieldError::InvalidSurface {
            width: size.width,
            height: size.height,
        });
    }

    let mut points = Vec::with_capacity(count + 2);

    for _ in 0..count {
        let x = rng.random_range(0..size.width);
        let y = rng.random_range(0..size.height);
        let mass = rng.random_range(FREE_MASS_RANGE);
        points.push(Point::free(DVec2::new(x as f64, y as f64), mass as f64));
    }

    let center = size.center();
    points.push(Point::pointer(center));
    points.push(Point::fixed(center, ANCHOR_MASS));

    Ok(points)
}

/// Lets `source` pull `target` towards itself.
///
/// Unless `source` is the pointer (which exerts nothing):
///
/// 1. `target`'s velocity gains the unit vector pointing at `source`.
/// 2. `target` then moves by its *updated* velocity scaled by
///    `target.mass / r² / INFLUENCE_DAMPING`.
///
/// Coincident points use `r = 1`: the direction is zero, but a moving
/// target still drifts along its own velocity. Only free targets react,
/// see [`Point::move_by`].
pub fn influence(source: &Point, target: &mut Point) {
    if source.is_pointer() {
        return;
    }

    let d = source.pos - target.pos;
    let mut r = d.x.hypot(d.y);
    if r == 0.0 {
        r = 1.0;
    }

    target.accelerate(d / r);

    let acc = target.mass / (r * r) / INFLUENCE_DAMPING;
    let step = target.vel * acc;
    target.move_by(step);
}

/// The full set of points animated on one surface.
///
/// Owns every point exclusively. Points are never added or removed after
/// construction; they only move.
#[derive(Clone, Debug)]
pub struct Field {
    points: Vec<Point>,
    pointer: Option<PointId>,
}

impl Field {
    /// Builds a field of random free points plus the pointer and anchor.
    ///
    /// ### Parameters
    /// - `size` - Dimensions of the surface the field will be drawn on.
    /// - `options` - Explicit free point count, if any; otherwise
    ///   [`optimal_point_count`] is used.
    /// - `rng` - Source of positions and masses. Pass a seeded generator
    ///   for a reproducible field.
    ///
    /// ### Errors
    /// [`FieldError::InvalidSurface`] if either dimension is zero.
    pub fn new(
        size: SurfaceSize,
        options: &Options,
        rng: &mut impl Rng,
    ) -> Result<Self, FieldError> {
        let count = match options.count_points {
            Some(n) => n.get(),
            None => {
                let n = optimal_point_count(size);
                debug!(count = n, "derived free point count from surface size");
                n
            }
        };

        let field = Self::from_points(generate_points(count, size, rng)?);
        info!(
            free_points = count,
            width = size.width,
            height = size.height,
            "point field created"
        );
        Ok(field)
    }

    /// Same as [`Field::new`], sized after an existing surface.
    pub fn for_surface(
        surface: &impl Surface,
        options: &Options,
        rng: &mut impl Rng,
    ) -> Result<Self, FieldError> {
        Self::new(surface.size(), options, rng)
    }

    /// Wraps an explicit list of points.
    ///
    /// The first pointer point in the list, if any, is the one driven by
    /// [`Field::update_pointer_position`].
    pub fn from_points(points: Vec<Point>) -> Self {
        let pointer = points.iter().position(Point::is_pointer);
        Self { points, pointer }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn pointer(&self) -> Option<&Point> {
        self.pointer.map(|id| &self.points[id])
    }

    /// Moves the pointer point to `(x, y)` in surface coordinates.
    ///
    /// Hosts call this from their pointer-moved events. The new position
    /// is picked up by the next [`Field::draw`].
    pub fn update_pointer_position(&mut self, x: f64, y: f64) {
        if let Some(id) = self.pointer {
            self.points[id].track(DVec2::new(x, y));
        }
    }

    /// Draws one frame and asks `scheduler` for the next one.
    pub fn frame(&mut self, surface: &mut impl Surface, scheduler: &mut impl FrameScheduler) {
        self.draw(surface);
        scheduler.request_next_frame();
    }

    /// Clears the surface, then renders and advances every point.
    pub fn draw(&mut self, surface: &mut impl Surface) {
        self.clear_surface(surface);
        self.render(surface);
    }

    /// Fills the whole surface with the background colour and sets the
    /// connection line style.
    pub fn clear_surface(&self, surface: &mut impl Surface) {
        let size = surface.size();

        surface.set_fill_color(BACKGROUND_COLOR);
        surface.clear_rect(0.0, 0.0, size.width as f64, size.height as f64);

        surface.set_stroke_color(LINE_COLOR);
        surface.set_line_width(LINE_WIDTH);
    }

    /// Draws connections and applies influence for every ordered pair.
    ///
    /// The pairs are the full cross product of the points, self-pairs
    /// included, so each unordered pair is visited twice and influence
    /// compounds within one call. A point paired with itself may draw a
    /// degenerate connection but is never pulled by itself. A connection is added for a pair when
    /// `first.distance_to(second) < LINK_DISTANCE`, using positions from
    /// before that pair's influence. The accumulated path is stroked once.
    pub fn render(&mut self, surface: &mut impl Surface) {
        let n = self.points.len();
        let mut segments = 0usize;

        surface.begin_path();

        for i in 0..n {
            for j in 0..n {
                // Copy: `i == j` would otherwise alias the mutable target.
                let first = self.points[i];
                let second = &mut self.points[j];

                if first.distance_to(second) < LINK_DISTANCE {
                    surface.move_to(first.pos);
                    surface.line_to(second.pos);
                    segments += 1;
                }

                if i != j {
                    influence(&first, second);
                }
            }
        }

        surface.stroke();
        trace!(points = n, segments, "field rendered");
    }
}
