//! Integer points in image coordinates
//!
//! `x` grows to the right from the leftmost column, `y` grows downward from
//! the topmost scanline. Points are not bounds-checked: drawing primitives
//! clip whatever falls outside the buffer.

/// An integer `(x, y)` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return this point translated by `(dx, dy)`, saturating at the
    /// `i32` range.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Integer midpoint between two points (truncating division).
    pub const fn midpoint(self, other: Point) -> Self {
        Self {
            x: ((self.x as i64 + other.x as i64) / 2) as i32,
            y: ((self.y as i64 + other.y as i64) / 2) as i32,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_truncates() {
        let m = Point::new(0, 0).midpoint(Point::new(5, -3));
        assert_eq!(m, Point::new(2, -1));
    }

    #[test]
    fn test_tuple_conversion() {
        let p: Point = (3, 4).into();
        assert_eq!(p.offset(1, -1), Point::new(4, 3));
        assert_eq!(<(i32, i32)>::from(p), (3, 4));
    }

    #[test]
    fn test_far_coordinates_do_not_overflow() {
        let p = Point::new(i32::MAX - 1, i32::MIN + 1);
        assert_eq!(p.offset(4, -4), Point::new(i32::MAX, i32::MIN));
        let m = Point::new(i32::MAX, i32::MAX).midpoint(Point::new(i32::MAX - 2, 1));
        assert_eq!(m, Point::new(i32::MAX - 1, i32::MAX / 2 + 1));
        let m = Point::new(i32::MIN, 0).midpoint(Point::new(i32::MAX, 0));
        assert_eq!(m, Point::new(0, 0));
    }
}
