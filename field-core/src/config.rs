use std::num::NonZeroUsize;
use std::ops::Range;

use crate::surface::Rgb;

/// Connections are drawn between points strictly closer than this.
pub const LINK_DISTANCE: f64 = 200.0;

/// Offset subtracted from every distance measured by the pointer point.
pub const POINTER_MYOPIA: f64 = 50.0;

/// Mass of the fixed anchor point.
pub const ANCHOR_MASS: f64 = 20.0;

/// Integer masses handed out to free points (upper bound exclusive).
pub const FREE_MASS_RANGE: Range<u32> = 1..10;

/// Divisor applied to `mass / r²` when computing the per-pair acceleration.
pub const INFLUENCE_DAMPING: f64 = 10_000.0;

/// Pixels of `|height - width|` per free point in the default point count.
pub const POINT_SPACING: u32 = 40;

pub const LINE_COLOR: Rgb = Rgb::from_hex(0x333333);
pub const LINE_WIDTH: f32 = 0.9;
pub const BACKGROUND_COLOR: Rgb = Rgb::from_hex(0xffffff);

/// Construction options for a [`crate::field::Field`].
///
/// When `count_points` is `None` the number of free points is derived from
/// the surface with [`crate::field::optimal_point_count`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub count_points: Option<NonZeroUsize>,
}

impl Options {
    pub fn with_count(count: NonZeroUsize) -> Self {
        Self {
            count_points: Some(count),
        }
    }
}
