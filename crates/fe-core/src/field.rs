//! Field vocabulary: sections, slots, colours, rows, direction, tosses

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four straight segments of the track boundary.
///
/// Declaration order is the fixed enumeration order Top, Right, Bottom, Left,
/// which is also the clockwise order around the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Section {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Section {
    /// All sections in enumeration order
    pub const ALL: [Section; 4] = [Section::Top, Section::Right, Section::Bottom, Section::Left];

    /// Index for table lookups (0..4)
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Next section in clockwise order (Left wraps to Top)
    pub fn clockwise_next(self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    /// Sections starting here and continuing clockwise
    pub fn clockwise_from(self) -> [Section; 4] {
        let start = self.index();
        std::array::from_fn(|i| Section::ALL[(start + i) % Section::ALL.len()])
    }

    pub fn name(self) -> &'static str {
        match self {
            Section::Top => "Top",
            Section::Right => "Right",
            Section::Bottom => "Bottom",
            Section::Left => "Left",
        }
    }

    /// Name with the toss pair that selects this section, e.g. "Right (Heads & Tails)"
    pub fn toss_label(self) -> &'static str {
        match self {
            Section::Top => "Top (Heads & Heads)",
            Section::Right => "Right (Heads & Tails)",
            Section::Left => "Left (Tails & Heads)",
            Section::Bottom => "Bottom (Tails & Tails)",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pillar position within a section, in clockwise order p1 → p2 → p3
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Slot {
    P1 = 0,
    P2 = 1,
    P3 = 2,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::P1, Slot::P2, Slot::P3];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slot::P1 => "p1",
            Slot::P2 => "p2",
            Slot::P3 => "p3",
        };
        f.write_str(name)
    }
}

/// Driving direction around the track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Clockwise, Direction::CounterClockwise];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Direction::Clockwise => 0,
            Direction::CounterClockwise => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Clockwise => f.write_str("Clockwise"),
            Direction::CounterClockwise => f.write_str("Counter-Clockwise"),
        }
    }
}

/// Traffic sign (pillar) colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PillarColor {
    Red,
    Green,
}

impl fmt::Display for PillarColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PillarColor::Red => f.write_str("Red"),
            PillarColor::Green => f.write_str("Green"),
        }
    }
}

/// Lane a card designates for its pillar.
///
/// This is the card's own tag; the parking section may still force a pillar
/// onto the inner lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Row {
    Inner,
    Outer,
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Row::Inner => f.write_str("Inner"),
            Row::Outer => f.write_str("Outer"),
        }
    }
}

/// Outcome of a single coin toss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Toss {
    Heads,
    Tails,
}

impl fmt::Display for Toss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Toss::Heads => f.write_str("Heads"),
            Toss::Tails => f.write_str("Tails"),
        }
    }
}
