//! Drawing primitives used by the shape renderer.
//!
//! Every primitive clips to the image: pixels that fall outside are
//! dropped rather than reported.

use crate::types::{Colour, Point};

use super::Image;

impl Image {
    /// Draw a one-pixel line from `a` to `b` (both ends inclusive).
    ///
    /// Uses Bresenham's algorithm. Segments reaching far outside the image
    /// are first clipped to a margin around it, so the step count stays
    /// proportional to the image size.
    pub fn draw_line(&mut self, a: Point, b: Point, colour: Colour) {
        let Some((a, b)) = self.clip_segment(a, b) else {
            return;
        };

        let (x1, y1) = (b.x as i64, b.y as i64);
        let (mut x, mut y) = (a.x as i64, a.y as i64);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x as i32, y as i32, colour);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw a filled, axis-aligned ellipse.
    ///
    /// A pixel at offset `(dx, dy)` from the centre is painted when
    /// `(dx * ry)^2 + (dy * rx)^2 <= (rx * ry)^2`. Negative radii are
    /// treated as their absolute value; a zero radius degenerates to a line.
    pub fn draw_ellipse(&mut self, center: Point, radius: Point, colour: Colour) {
        let rx = radius.x.unsigned_abs() as i64;
        let ry = radius.y.unsigned_abs() as i64;
        // Radii up to 2^31 square to about 2^124, which fits in i128.
        let (rx2, ry2) = (rx as i128, ry as i128);
        let limit = (rx2 * ry2) * (rx2 * ry2);

        let y0 = (center.y as i64 - ry).max(0);
        let y1 = (center.y as i64 + ry).min(self.height() as i64 - 1);
        let x0 = (center.x as i64 - rx).max(0);
        let x1 = (center.x as i64 + rx).min(self.width() as i64 - 1);

        for y in y0..=y1 {
            let dy = (y - center.y as i64) as i128;
            for x in x0..=x1 {
                let dx = (x - center.x as i64) as i128;
                if (dx * ry2) * (dx * ry2) + (dy * rx2) * (dy * rx2) <= limit {
                    self.plot(x as i32, y as i32, colour);
                }
            }
        }
    }

    /// Draw a filled polygon using the even-odd rule.
    ///
    /// Scanlines are sampled at integer rows with half-open edges, then the
    /// outline is stroked so that pixels on the boundary are always painted.
    pub fn draw_polygon(&mut self, points: &[Point], colour: Colour) {
        let Some(first) = points.first() else {
            return;
        };

        let min_y = points.iter().map(|p| p.y).min().unwrap_or(first.y).max(0);
        let max_y = points
            .iter()
            .map(|p| p.y)
            .max()
            .unwrap_or(first.y)
            .min(self.height() as i32 - 1);

        let n = points.len();
        let mut crossings: Vec<f64> = Vec::with_capacity(n);

        for y in min_y..=max_y {
            crossings.clear();

            for i in 0..n {
                let a = points[i];
                let b = points[(i + 1) % n];
                if (a.y <= y && b.y > y) || (b.y <= y && a.y > y) {
                    let t = (y as f64 - a.y as f64) / (b.y as f64 - a.y as f64);
                    crossings.push(a.x as f64 + t * (b.x as f64 - a.x as f64));
                }
            }

            crossings.sort_by(|a, b| a.total_cmp(b));
            for pair in crossings.chunks_exact(2) {
                let start = pair[0].ceil() as i32;
                let end = pair[1].floor() as i32;
                for x in start.max(0)..=end.min(self.width() as i32 - 1) {
                    self.plot(x, y, colour);
                }
            }
        }

        for i in 0..n {
            self.draw_line(points[i], points[(i + 1) % n], colour);
        }
    }

    /// Clip `a`-`b` to the image grown by its larger side on every edge.
    ///
    /// Segments already inside that box come back unchanged. Others are
    /// cut with Liang-Barsky and their new ends rounded to the grid.
    /// Returns `None` when the segment misses the box entirely.
    fn clip_segment(&self, a: Point, b: Point) -> Option<(Point, Point)> {
        let margin = self.width().max(self.height()) as i64;
        let (lo_x, hi_x) = (-margin, self.width() as i64 + margin);
        let (lo_y, hi_y) = (-margin, self.height() as i64 + margin);

        let inside = |p: Point| {
            (lo_x..=hi_x).contains(&(p.x as i64)) && (lo_y..=hi_y).contains(&(p.y as i64))
        };
        if inside(a) && inside(b) {
            return Some((a, b));
        }

        let (x0, y0) = (a.x as f64, a.y as f64);
        let (dx, dy) = (b.x as f64 - x0, b.y as f64 - y0);
        let (mut t0, mut t1) = (0.0_f64, 1.0_f64);

        let edges = [
            (-dx, x0 - lo_x as f64),
            (dx, hi_x as f64 - x0),
            (-dy, y0 - lo_y as f64),
            (dy, hi_y as f64 - y0),
        ];
        for (p, q) in edges {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }

        let at = |t: f64| Point::new((x0 + t * dx).round() as i32, (y0 + t * dy).round() as i32);
        Some((at(t0), at(t1)))
    }
}
