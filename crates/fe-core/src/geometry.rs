//! Pixel geometry on the playfield image

use serde::{Deserialize, Serialize};

/// Pixel position (origin top-left, y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Straight line between two points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Euclidean length in pixels
    pub fn length(&self) -> f64 {
        let dx = (self.end.x - self.start.x) as f64;
        let dy = (self.end.y - self.start.y) as f64;
        dx.hypot(dy)
    }
}

/// Direction arrow: a shaft plus a triangular head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrow {
    pub line: Segment,
    pub head: [Point; 3],
}

impl Arrow {
    pub const fn new(line: Segment, head: [Point; 3]) -> Self {
        Self { line, head }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_length() {
        let seg = Segment::new(Point::new(0, 0), Point::new(3, 4));
        assert!((seg.length() - 5.0).abs() < 1e-9);
    }
}
