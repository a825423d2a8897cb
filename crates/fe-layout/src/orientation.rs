//! Orientation: turn the diagram so the parking lot sits at the bottom

use fe_core::{Point, Section};
use serde::{Deserialize, Serialize};

/// Counter-clockwise rotation of the whole image, canvas expanded to fit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    None,
    Ccw90,
    Ccw180,
    Ccw270,
}

impl Rotation {
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::None => 0,
            Rotation::Ccw90 => 90,
            Rotation::Ccw180 => 180,
            Rotation::Ccw270 => 270,
        }
    }

    /// Where pixel `p` of a `width`×`height` image lands after rotation
    pub fn rotate_point(self, p: Point, width: u32, height: u32) -> Point {
        let w = width as i32 - 1;
        let h = height as i32 - 1;
        match self {
            Rotation::None => p,
            Rotation::Ccw90 => Point::new(p.y, w - p.x),
            Rotation::Ccw180 => Point::new(w - p.x, h - p.y),
            Rotation::Ccw270 => Point::new(h - p.y, p.x),
        }
    }
}

/// Rotation that brings the parking section to the bottom edge
pub fn rotation_for(parking_section: Section) -> Rotation {
    match parking_section {
        Section::Bottom => Rotation::None,
        Section::Right => Rotation::Ccw270,
        Section::Top => Rotation::Ccw180,
        Section::Left => Rotation::Ccw90,
    }
}
