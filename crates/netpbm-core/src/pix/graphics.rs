//! Graphics rendering functions
//!
//! This module provides functions for drawing shapes on images:
//! - Lines
//! - Boxes (outline and filled)
//! - Circles (disk test and bounded filled circle)
//! - Triangles and polygons (outline and scanline fill)
//! - Sierpinski triangles
//!
//! The point-list generators describe outlines without a buffer. The
//! renderers visit the same pixels but only walk the part of each shape
//! that can reach the image, so far-away coordinates cost nothing. Every
//! primitive clips to the image: points outside the buffer are skipped and
//! no primitive fails.
//! Colors are written through [`Pix::set_pixel_clipped`], which adapts
//! the [`Pixel`] to the buffer kind.

use super::{Pix, Pixel};
use crate::point::Point;

// =============================================================================
// Point list generation helpers
// =============================================================================

/// Generate the points of a line from `p1` to `p2`, both endpoints included.
///
/// Uses DDA stepping: the step count is the larger of `|dx|` and `|dy|`,
/// both coordinates are interpolated linearly and each visited position is
/// truncated toward zero. Coincident endpoints yield a single point.
pub fn generate_line_pts(p1: Point, p2: Point) -> Vec<Point> {
    let dx = i64::from(p2.x) - i64::from(p1.x);
    let dy = i64::from(p2.y) - i64::from(p1.y);
    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        return vec![p1];
    }

    (0..=steps).map(|i| dda_point(p1, dx, dy, steps, i)).collect()
}

/// Position of DDA step `i` on the line from `p1` by `(dx, dy)`.
fn dda_point(p1: Point, dx: i64, dy: i64, steps: i64, i: i64) -> Point {
    // Interpolate from the origin each step; the last step lands on p2 exactly.
    let (t, n) = (i as f64, steps as f64);
    let x = f64::from(p1.x) + dx as f64 * t / n;
    let y = f64::from(p1.y) + dy as f64 * t / n;
    Point::new(x as i32, y as i32)
}

/// Steps of a DDA axis whose truncated coordinate can fall in `0..size`.
///
/// The axis starts at `start` and moves `delta` over `steps` steps. The
/// range is widened by one step on each side; callers still clip each
/// point. Returns `None` when no step can land inside.
fn clip_steps(start: i32, delta: i64, steps: i64, size: u32) -> Option<(i64, i64)> {
    let start = f64::from(start);
    let size = f64::from(size);
    if delta == 0 {
        return (start > -1.0 && start < size).then_some((0, steps));
    }
    // trunc(v) lies in 0..size iff -1 < v < size
    let n = steps as f64;
    let a = (-1.0 - start) * n / delta as f64;
    let b = (size - start) * n / delta as f64;
    let lo = (a.min(b).floor() as i64).saturating_sub(1).max(0);
    let hi = (a.max(b).ceil() as i64).saturating_add(1).min(steps);
    (lo <= hi).then_some((lo, hi))
}

/// Generate the outline of a box anchored at `origin` (top-left).
///
/// The four segments join the corners `(x, y)`, `(x + w, y)`,
/// `(x + w, y + h)` and `(x, y + h)`.
pub fn generate_box_pts(origin: Point, width: i32, height: i32) -> Vec<Point> {
    let top_right = origin.offset(width, 0);
    let bottom_left = origin.offset(0, height);
    let bottom_right = origin.offset(width, height);
    generate_polyline_pts(&[origin, top_right, bottom_right, bottom_left], true)
}

/// Generate the points of a polyline connecting the vertices.
///
/// If `close` is true, the last vertex is connected to the first.
pub fn generate_polyline_pts(vertices: &[Point], close: bool) -> Vec<Point> {
    let mut pts = Vec::new();
    match vertices {
        [] => {}
        [only] => pts.push(*only),
        _ => {
            for pair in vertices.windows(2) {
                pts.extend(generate_line_pts(pair[0], pair[1]));
            }
            if close {
                pts.extend(generate_line_pts(vertices[vertices.len() - 1], vertices[0]));
            }
        }
    }
    pts
}

/// Generate every offset point of a disk around `center`.
///
/// A point `(center.x + dx, center.y + dy)` with `dx, dy` in
/// `-radius..=radius` is included iff `dx² + dy² <= radius²`.
pub fn generate_disk_pts(center: Point, radius: i32) -> Vec<Point> {
    let mut pts = Vec::new();
    if radius < 0 {
        return pts;
    }
    let r2 = i64::from(radius) * i64::from(radius);
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if i64::from(dx) * i64::from(dx) + i64::from(dy) * i64::from(dy) <= r2 {
                pts.push(center.offset(dx, dy));
            }
        }
    }
    pts
}

/// X coordinate of the edge `a`-`b` on scanline `y` (linear interpolation).
///
/// The caller guarantees `a.y != b.y`.
fn edge_x(a: Point, b: Point, y: i32) -> f64 {
    let (ax, ay) = (f64::from(a.x), f64::from(a.y));
    ax + (f64::from(b.x) - ax) * (f64::from(y) - ay) / (f64::from(b.y) - ay)
}

// =============================================================================
// Pix rendering implementations
// =============================================================================

impl Pix {
    /// Render a point list onto the image.
    ///
    /// Points outside the image bounds are clipped. Returns the number of
    /// points actually written.
    pub fn render_pts(&mut self, pts: &[Point], pixel: Pixel) -> usize {
        pts.iter()
            .filter(|p| self.set_pixel_clipped(p.x, p.y, pixel))
            .count()
    }

    /// Fill columns `x0..=x1` of scanline `y`, clipped to the image.
    fn fill_span(&mut self, y: i32, x0: i32, x1: i32, pixel: Pixel) {
        if y < 0 || y >= self.height as i32 || x1 < 0 || x0 >= self.width as i32 {
            return;
        }
        let x0 = x0.max(0) as u32;
        let x1 = x1.min(self.width as i32 - 1) as u32;
        for x in x0..=x1 {
            self.set_pixel_unchecked(x, y as u32, pixel);
        }
    }

    /// Render a line from `p1` to `p2`.
    ///
    /// Sets the pixels of [`generate_line_pts`], but only the steps that
    /// can reach the image are visited.
    pub fn render_line(&mut self, p1: Point, p2: Point, pixel: Pixel) {
        let dx = i64::from(p2.x) - i64::from(p1.x);
        let dy = i64::from(p2.y) - i64::from(p1.y);
        let steps = dx.abs().max(dy.abs());
        if steps == 0 {
            self.set_pixel_clipped(p1.x, p1.y, pixel);
            return;
        }
        let Some((x_lo, x_hi)) = clip_steps(p1.x, dx, steps, self.width) else {
            return;
        };
        let Some((y_lo, y_hi)) = clip_steps(p1.y, dy, steps, self.height) else {
            return;
        };
        for i in x_lo.max(y_lo)..=x_hi.min(y_hi) {
            let p = dda_point(p1, dx, dy, steps, i);
            self.set_pixel_clipped(p.x, p.y, pixel);
        }
    }

    /// Render the segments joining `vertices`, closing the loop.
    fn render_closed_polyline(&mut self, vertices: &[Point], pixel: Pixel) {
        match vertices {
            [] => {}
            [only] => {
                self.set_pixel_clipped(only.x, only.y, pixel);
            }
            _ => {
                for pair in vertices.windows(2) {
                    self.render_line(pair[0], pair[1], pixel);
                }
                self.render_line(vertices[vertices.len() - 1], vertices[0], pixel);
            }
        }
    }

    /// Render a box (rectangle outline) with top-left corner `origin`.
    ///
    /// Sets the pixels of [`generate_box_pts`].
    pub fn render_box(&mut self, origin: Point, width: i32, height: i32, pixel: Pixel) {
        let corners = [
            origin,
            origin.offset(width, 0),
            origin.offset(width, height),
            origin.offset(0, height),
        ];
        self.render_closed_polyline(&corners, pixel);
    }

    /// Fill the half-open rectangle `[x, x + width) × [y, y + height)`.
    pub fn render_filled_box(&mut self, origin: Point, width: i32, height: i32, pixel: Pixel) {
        if width <= 0 {
            return;
        }
        let x_end = origin.x.saturating_add(width) - 1;
        let y_start = origin.y.max(0);
        let y_end = origin.y.saturating_add(height).min(self.height as i32);
        for y in y_start..y_end {
            self.fill_span(y, origin.x, x_end, pixel);
        }
    }

    /// Set every pixel of the clipped box `center ± radius` whose squared
    /// distance to `center` is at most `max_d2`.
    fn fill_disk(&mut self, center: Point, radius: i32, max_d2: u64, pixel: Pixel) {
        let r = i64::from(radius);
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));
        let x0 = (cx - r).max(0);
        let x1 = (cx + r).min(i64::from(self.width) - 1);
        let y0 = (cy - r).max(0);
        let y1 = (cy + r).min(i64::from(self.height) - 1);
        for y in y0..=y1 {
            let dy2 = (y - cy).unsigned_abs().pow(2);
            for x in x0..=x1 {
                if (x - cx).unsigned_abs().pow(2) + dy2 <= max_d2 {
                    self.set_pixel_unchecked(x as u32, y as u32, pixel);
                }
            }
        }
    }

    /// Render a circle around `center`.
    ///
    /// Every offset within the bounding square whose squared distance is at
    /// most `radius²` is set, so the result is a solid disk: the pixels of
    /// [`generate_disk_pts`]. Only the clipped bounding box is scanned.
    pub fn render_circle(&mut self, center: Point, radius: i32, pixel: Pixel) {
        if radius < 0 {
            return;
        }
        let r = u64::from(radius.unsigned_abs());
        self.fill_disk(center, radius, r * r, pixel);
    }

    /// Render a filled circle: every pixel whose Euclidean distance to
    /// `center`, truncated to an integer, is at most `radius`.
    ///
    /// Only the clipped bounding box of the circle is scanned.
    pub fn render_filled_circle(&mut self, center: Point, radius: i32, pixel: Pixel) {
        if radius < 0 {
            return;
        }
        // floor(sqrt(d2)) <= r  <=>  d2 < (r + 1)²
        let r = u64::from(radius.unsigned_abs());
        self.fill_disk(center, radius, (r + 1) * (r + 1) - 1, pixel);
    }

    /// Render a triangle outline.
    pub fn render_triangle(&mut self, p1: Point, p2: Point, p3: Point, pixel: Pixel) {
        self.render_closed_polyline(&[p1, p2, p3], pixel);
    }

    /// Render a filled triangle.
    ///
    /// Vertices are sorted by y. Each scanline from the top vertex to the
    /// bottom vertex is bounded by the long edge (top to bottom) and by the
    /// short edge on its side of the middle vertex (top to middle above it,
    /// middle to bottom from it downward). Horizontal edges are never
    /// interpolated. The span `trunc(min)..=trunc(max)` is filled.
    pub fn render_filled_triangle(&mut self, p1: Point, p2: Point, p3: Point, pixel: Pixel) {
        let mut v = [p1, p2, p3];
        v.sort_by_key(|p| p.y);
        let [top, mid, bottom] = v;

        if top.y == bottom.y {
            let x0 = top.x.min(mid.x).min(bottom.x);
            let x1 = top.x.max(mid.x).max(bottom.x);
            self.fill_span(top.y, x0, x1, pixel);
            return;
        }

        let y_start = top.y.max(0);
        let y_end = bottom.y.min(self.height as i32 - 1);
        for y in y_start..=y_end {
            let x_long = edge_x(top, bottom, y);
            let x_short = if y < mid.y {
                edge_x(top, mid, y)
            } else if mid.y < bottom.y {
                edge_x(mid, bottom, y)
            } else {
                f64::from(mid.x)
            };
            let (xa, xb) = if x_long <= x_short {
                (x_long, x_short)
            } else {
                (x_short, x_long)
            };
            self.fill_span(y, xa as i32, xb as i32, pixel);
        }
    }

    /// Render a closed polygon outline.
    pub fn render_polygon(&mut self, vertices: &[Point], pixel: Pixel) {
        self.render_closed_polyline(vertices, pixel);
    }

    /// Render a filled polygon using the even-odd rule.
    ///
    /// Intersections are recomputed for every scanline from the full edge
    /// list. An edge contributes to scanline `y` iff
    /// `min(a.y, b.y) <= y < max(a.y, b.y)`; intersections are sorted and
    /// the columns `ceil(xa)..=floor(xb)` of each consecutive pair are
    /// filled. Fewer than three vertices draw nothing.
    pub fn render_filled_polygon(&mut self, vertices: &[Point], pixel: Pixel) {
        if vertices.len() < 3 {
            return;
        }
        let (min_y, max_y) = vertices
            .iter()
            .fold((i32::MAX, i32::MIN), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));
        let y_start = min_y.max(0);
        let y_end = max_y.min(self.height as i32 - 1);

        let n = vertices.len();
        let mut xs: Vec<f64> = Vec::with_capacity(n);
        for y in y_start..=y_end {
            xs.clear();
            for i in 0..n {
                let a = vertices[i];
                let b = vertices[(i + 1) % n];
                if a.y.min(b.y) <= y && y < a.y.max(b.y) {
                    xs.push(edge_x(a, b, y));
                }
            }
            xs.sort_by(f64::total_cmp);
            for pair in xs.chunks_exact(2) {
                self.fill_span(y, pair[0].ceil() as i32, pair[1].floor() as i32, pixel);
            }
        }
    }

    /// Render a Sierpinski triangle of the given recursion depth.
    ///
    /// `start` is the left end of the base and `width` the base length; the
    /// apex sits `width·√3/2` rows above the base. Depth 0 draws one filled
    /// triangle. Each deeper level recurses into the three half-width corner
    /// triangles only. The inverted centre triangle is not a fourth
    /// recursive call: it is traced as an outline, since filling it would
    /// close the hole that makes the pattern. Above depth 0 a `width` wider
    /// than the image is clamped to it.
    ///
    /// The number of triangles grows as `3^depth`.
    pub fn render_sierpinski(&mut self, depth: u32, start: Point, width: i32, pixel: Pixel) {
        log::trace!(
            "render_sierpinski: depth={}, start=({}, {}), width={}",
            depth,
            start.x,
            start.y,
            width
        );
        if depth == 0 || width == 0 {
            let apex = start.offset(width / 2, -triangle_height(width));
            self.render_filled_triangle(start, start.offset(width, 0), apex, pixel);
            return;
        }

        let width = width.min(self.width as i32);
        let left = start;
        let right = start.offset(width, 0);
        let apex = start.offset(width / 2, -triangle_height(width));
        let half = width / 2;

        let base_mid = left.midpoint(right);
        let left_mid = left.midpoint(apex);
        let right_mid = right.midpoint(apex);

        self.render_sierpinski(depth - 1, left, half, pixel);
        self.render_sierpinski(depth - 1, base_mid, half, pixel);
        self.render_sierpinski(depth - 1, left_mid, half, pixel);
        self.render_triangle(base_mid, right_mid, left_mid, pixel);
    }
}

/// Height of an equilateral triangle with base `width`, truncated.
fn triangle_height(width: i32) -> i32 {
    (f64::from(width) * 3f64.sqrt() / 2.0) as i32
}
