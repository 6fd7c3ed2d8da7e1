//! Integer 2D points and the coordinate transforms shared by every shape.

use std::ops::{Add, Mul, Neg, Sub};

use serde::Serialize;

/// A point (or offset) with integer coordinates.
///
/// Transforms may move a point to negative values or past the edge of any
/// image. All arithmetic saturates at the `i32` range instead of
/// overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this point by `by`.
    pub fn translate(self, by: Point) -> Point {
        self + by
    }

    /// Scale this point about `origin` by an integer factor.
    ///
    /// Computes `origin + (self - origin) * factor`. The factor is an
    /// integer so the result is exact: 0 collapses onto `origin`, 1 is the
    /// identity and negative factors mirror through `origin`.
    pub fn scale(self, origin: Point, factor: i32) -> Point {
        origin + (self - origin) * factor
    }

    /// Rotate this point about `origin` by `degrees`.
    ///
    /// Uses screen coordinates (y grows downward), so positive angles turn
    /// clockwise on screen. Quarter turns are exact; other angles are
    /// computed in floating point and rounded to the nearest integer.
    pub fn rotate(self, origin: Point, degrees: i32) -> Point {
        let d = self - origin;
        let rotated = match degrees.rem_euclid(360) {
            0 => d,
            90 => Point::new(d.y.saturating_neg(), d.x),
            180 => -d,
            270 => Point::new(d.y, d.x.saturating_neg()),
            deg => {
                let (sin, cos) = (deg as f64).to_radians().sin_cos();
                let x = d.x as f64 * cos - d.y as f64 * sin;
                let y = d.x as f64 * sin + d.y as f64 * cos;
                Point::new(x.round() as i32, y.round() as i32)
            }
        };
        origin + rotated
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl Mul<i32> for Point {
    type Output = Point;

    fn mul(self, rhs: i32) -> Point {
        Point::new(self.x.saturating_mul(rhs), self.y.saturating_mul(rhs))
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(self.x.saturating_neg(), self.y.saturating_neg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate() {
        assert_eq!(Point::new(1, 2).translate(Point::new(10, -5)), Point::new(11, -3));
    }

    #[test]
    fn test_scale_boundary_factors() {
        let origin = Point::new(10, 10);
        let p = Point::new(13, 8);

        assert_eq!(p.scale(origin, 0), origin);
        assert_eq!(p.scale(origin, 1), p);
        assert_eq!(p.scale(origin, 2), Point::new(16, 6));
        assert_eq!(p.scale(origin, -1), Point::new(7, 12));
    }

    #[test]
    fn test_scale_about_zero() {
        assert_eq!(Point::new(3, 4).scale(Point::ORIGIN, 3), Point::new(9, 12));
    }

    #[test]
    fn test_rotate_quarter_turns() {
        let origin = Point::new(5, 5);
        let p = Point::new(8, 5);

        assert_eq!(p.rotate(origin, 0), p);
        assert_eq!(p.rotate(origin, 90), Point::new(5, 8));
        assert_eq!(p.rotate(origin, 180), Point::new(2, 5));
        assert_eq!(p.rotate(origin, 270), Point::new(5, 2));
        assert_eq!(p.rotate(origin, 360), p);
        assert_eq!(p.rotate(origin, -90), Point::new(5, 2));
        assert_eq!(p.rotate(origin, 450), Point::new(5, 8));
    }

    #[test]
    fn test_rotate_full_circle_has_no_drift() {
        let origin = Point::new(-3, 7);
        let mut p = Point::new(100, -41);
        for _ in 0..8 {
            p = p.rotate(origin, 90);
        }
        assert_eq!(p, Point::new(100, -41));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let far = Point::new(100_000, -100_000);
        assert_eq!(far.scale(Point::ORIGIN, 100_000), Point::new(i32::MAX, i32::MIN));
        assert_eq!(Point::new(i32::MAX, 0).translate(Point::new(1, 0)), Point::new(i32::MAX, 0));
        assert_eq!(-Point::new(i32::MIN, 3), Point::new(i32::MAX, -3));
        assert_eq!(
            Point::new(0, i32::MIN).rotate(Point::ORIGIN, 90),
            Point::new(i32::MAX, 0)
        );
    }

    #[test]
    fn test_rotate_arbitrary_angle_rounds() {
        // (10, 0) turned 45 degrees lands on (7.07, 7.07).
        assert_eq!(Point::new(10, 0).rotate(Point::ORIGIN, 45), Point::new(7, 7));
        // (10, 0) turned 30 degrees lands on (8.66, 5.0).
        assert_eq!(Point::new(10, 0).rotate(Point::ORIGIN, 30), Point::new(9, 5));
    }
}
