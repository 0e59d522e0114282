use glam::DVec2;

use crate::config::POINTER_MYOPIA;

/// What a [`Point`] is and, therefore, how it reacts to the simulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointKind {
    /// Moves freely under the influence of other points.
    Free,
    /// Follows the pointing device; never moved by the simulator.
    Pointer,
    /// Immovable anchor with a fixed mass.
    Fixed,
}

/// A single point of the field.
///
/// Positions are in surface coordinates. Only [`PointKind::Free`] points
/// respond to [`Point::move_by`] and [`Point::accelerate`]; the pointer is
/// positioned exclusively through [`Point::track`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub pos: DVec2,
    pub vel: DVec2,
    pub mass: f64,
    pub kind: PointKind,
}

impl Point {
    pub fn free(pos: DVec2, mass: f64) -> Self {
        Self::at_rest(pos, mass, PointKind::Free)
    }

    /// The pointer point is massless.
    pub fn pointer(pos: DVec2) -> Self {
        Self::at_rest(pos, 0.0, PointKind::Pointer)
    }

    pub fn fixed(pos: DVec2, mass: f64) -> Self {
        Self::at_rest(pos, mass, PointKind::Fixed)
    }

    fn at_rest(pos: DVec2, mass: f64, kind: PointKind) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
            mass,
            kind,
        }
    }

    #[inline]
    pub fn is_pointer(&self) -> bool {
        self.kind == PointKind::Pointer
    }

    /// Shifts the position by `delta`. No-op unless the point is free.
    #[inline]
    pub fn move_by(&mut self, delta: DVec2) {
        match self.kind {
            PointKind::Free => self.pos += delta,
            PointKind::Pointer | PointKind::Fixed => {}
        }
    }

    /// Adds `delta` to the velocity. No-op unless the point is free.
    #[inline]
    pub fn accelerate(&mut self, delta: DVec2) {
        match self.kind {
            PointKind::Free => self.vel += delta,
            PointKind::Pointer | PointKind::Fixed => {}
        }
    }

    /// Moves the pointer to an absolute position reported by the host.
    ///
    /// Velocity is left untouched. Has no effect on other kinds of points.
    pub fn track(&mut self, pos: DVec2) {
        if self.is_pointer() {
            self.pos = pos;
        }
    }

    /// Distance from this point to `other`, as perceived by this point.
    ///
    /// The pointer is short-sighted: it sees everything
    /// [`POINTER_MYOPIA`] closer than it is, but never closer than zero.
    /// The measure is therefore only symmetric between non-pointer points.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.pos.x - self.pos.x;
        let dy = other.pos.y - self.pos.y;
        let d = (dx * dx + dy * dy).sqrt();

        match self.kind {
            PointKind::Pointer => (d - POINTER_MYOPIA).max(0.0),
            PointKind::Free | PointKind::Fixed => d,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_kinds_at(pos: DVec2) -> [Point; 3] {
        [
            Point::free(pos, 3.0),
            Point::pointer(pos),
            Point::fixed(pos, 20.0),
        ]
    }

    #[test]
    fn constructors_start_at_rest() {
        let pos = DVec2::new(4.0, -2.0);
        for p in all_kinds_at(pos) {
            assert_eq!(p.pos, pos);
            assert_eq!(p.vel, DVec2::ZERO);
        }
        assert_eq!(Point::pointer(pos).mass, 0.0);
        assert_eq!(Point::fixed(pos, 20.0).mass, 20.0);
    }

    #[test]
    fn free_point_moves_and_accelerates() {
        let mut p = Point::free(DVec2::new(1.0, 1.0), 5.0);

        p.move_by(DVec2::new(2.0, -3.0));
        p.accelerate(DVec2::new(0.5, 0.25));
        p.accelerate(DVec2::new(0.5, 0.25));

        assert_eq!(p.pos, DVec2::new(3.0, -2.0));
        assert_eq!(p.vel, DVec2::new(1.0, 0.5));
    }

    #[test]
    fn pointer_and_fixed_ignore_movement() {
        let deltas = [
            DVec2::new(1.0, 0.0),
            DVec2::new(-250.0, 13.5),
            DVec2::new(1e9, -1e9),
        ];

        for original in [
            Point::pointer(DVec2::new(10.0, 10.0)),
            Point::fixed(DVec2::new(10.0, 10.0), 20.0),
        ] {
            let mut p = original;
            for d in deltas {
                p.move_by(d);
                p.accelerate(d);
            }
            assert_eq!(p, original, "{:?} should be immovable", original.kind);
        }
    }

    #[test]
    fn track_only_moves_the_pointer() {
        let target = DVec2::new(320.0, 240.0);

        let mut pointer = Point::pointer(DVec2::ZERO);
        pointer.track(target);
        assert_eq!(pointer.pos, target);
        assert_eq!(pointer.vel, DVec2::ZERO);

        let mut free = Point::free(DVec2::ZERO, 2.0);
        let mut fixed = Point::fixed(DVec2::ZERO, 20.0);
        free.track(target);
        fixed.track(target);
        assert_eq!(free.pos, DVec2::ZERO);
        assert_eq!(fixed.pos, DVec2::ZERO);
    }

    #[test]
    fn distance_is_euclidean_and_symmetric_without_pointer() {
        let a = Point::free(DVec2::new(0.0, 0.0), 1.0);
        let b = Point::fixed(DVec2::new(3.0, 4.0), 20.0);
        let c = Point::free(DVec2::new(-7.5, 12.25), 9.0);

        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
        assert_eq!(a.distance_to(&c), c.distance_to(&a));
        assert_eq!(b.distance_to(&c), c.distance_to(&b));
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn pointer_distance_subtracts_myopia_and_clamps() {
        let pointer = Point::pointer(DVec2::ZERO);

        let far = Point::free(DVec2::new(POINTER_MYOPIA + 30.0, 0.0), 1.0);
        assert_eq!(pointer.distance_to(&far), 30.0);

        let near = Point::free(DVec2::new(0.0, POINTER_MYOPIA / 2.0), 1.0);
        assert_eq!(pointer.distance_to(&near), 0.0);

        let edge = Point::fixed(DVec2::new(0.0, POINTER_MYOPIA), 20.0);
        assert_eq!(pointer.distance_to(&edge), 0.0);

        // Other points still see the pointer at its true distance.
        assert_eq!(far.distance_to(&pointer), POINTER_MYOPIA + 30.0);
    }

    #[test]
    fn pointer_distance_is_never_negative() {
        let pointer = Point::pointer(DVec2::new(100.0, 100.0));
        for i in 0..50 {
            let t = i as f64 * 7.3;
            let p = Point::free(DVec2::new(100.0 + t, 100.0 - t / 2.0), 1.0);
            let d = pointer.distance_to(&p);
            let euclid = Point::free(pointer.pos, 1.0).distance_to(&p);
            assert!(d >= 0.0);
            assert_eq!(d, (euclid - POINTER_MYOPIA).max(0.0));
        }
    }
}
