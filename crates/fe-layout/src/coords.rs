//! Static playfield geometry (pixels on a 2134×2134 playfield image)
//!
//! Tables are indexed by `Section::index()` and `Slot::index()`, so every
//! lookup is total.

use fe_core::{Arrow, Direction, Point, Section, Segment, Slot};

/// Pillar disc radius
pub const PILLAR_RADIUS: u32 = 25;
/// Distance between the two parking lot lines
pub const PARKING_WIDTH: i32 = 160;
/// Length of each parking lot line
pub const PARKING_LENGTH: i32 = 100;
/// Side length of the playfield image the tables are measured on
pub const FIELD_SIZE: u32 = 2134;

const fn pt(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

const fn seg(a: (i32, i32), b: (i32, i32)) -> Segment {
    Segment::new(pt(a.0, a.1), pt(b.0, b.1))
}

const fn arrow(a: (i32, i32), b: (i32, i32), head: [(i32, i32); 3]) -> Arrow {
    Arrow::new(
        seg(a, b),
        [
            pt(head[0].0, head[0].1),
            pt(head[1].0, head[1].1),
            pt(head[2].0, head[2].1),
        ],
    )
}

/// Outer-lane pillar centres, p1..p3 in clockwise order
static PILLARS_OUTWARD: [[Point; 3]; 4] = [
    [pt(710, 320), pt(1025, 320), pt(1345, 320)],
    [pt(1725, 710), pt(1725, 1025), pt(1725, 1345)],
    [pt(1345, 1725), pt(1025, 1725), pt(710, 1725)],
    [pt(320, 1345), pt(320, 1025), pt(320, 710)],
];

/// Inner-lane pillar centres
static PILLARS_INWARD: [[Point; 3]; 4] = [
    [pt(710, 450), pt(1025, 450), pt(1345, 450)],
    [pt(1600, 710), pt(1600, 1025), pt(1600, 1345)],
    [pt(1345, 1600), pt(1025, 1600), pt(710, 1600)],
    [pt(450, 1345), pt(450, 1025), pt(450, 710)],
];

static PARKING_LINES: [[Segment; 2]; 4] = [
    [
        seg((710, 70), (710, 70 + PARKING_LENGTH)),
        seg((710 + PARKING_WIDTH, 70), (710 + PARKING_WIDTH, 70 + PARKING_LENGTH)),
    ],
    [
        seg((1975, 710), (1975 - PARKING_LENGTH, 710)),
        seg((1975, 710 + PARKING_WIDTH), (1975 - PARKING_LENGTH, 710 + PARKING_WIDTH)),
    ],
    [
        seg((1340, 1975), (1340, 1975 - PARKING_LENGTH)),
        seg((1340 - PARKING_WIDTH, 1975), (1340 - PARKING_WIDTH, 1975 - PARKING_LENGTH)),
    ],
    [
        seg((70, 1340), (70 + PARKING_LENGTH, 1340)),
        seg((70, 1340 - PARKING_WIDTH), (70 + PARKING_LENGTH, 1340 - PARKING_WIDTH)),
    ],
];

/// One arrow per section (Top, Right, Bottom, Left) for each direction
static ARROWS: [[Arrow; 4]; 2] = [
    // Clockwise
    [
        arrow((850, 385), (1200, 385), [(1200, 365), (1240, 385), (1200, 405)]),
        arrow((1665, 850), (1665, 1200), [(1645, 1200), (1665, 1240), (1685, 1200)]),
        arrow((1200, 1665), (850, 1665), [(850, 1645), (810, 1665), (850, 1685)]),
        arrow((385, 1200), (385, 850), [(365, 850), (385, 810), (405, 850)]),
    ],
    // Counter-clockwise
    [
        arrow((1200, 385), (850, 385), [(850, 365), (810, 385), (850, 405)]),
        arrow((1665, 1200), (1665, 850), [(1645, 850), (1665, 810), (1685, 850)]),
        arrow((850, 1665), (1200, 1665), [(1200, 1645), (1240, 1665), (1200, 1685)]),
        arrow((385, 850), (385, 1200), [(365, 1200), (385, 1240), (405, 1200)]),
    ],
];

/// Pillar centre for a slot on the inner or outer lane
pub fn pillar_center(section: Section, slot: Slot, inward: bool) -> Point {
    let table = if inward {
        &PILLARS_INWARD
    } else {
        &PILLARS_OUTWARD
    };
    table[section.index()][slot.index()]
}

/// The two parallel parking lot lines of a section
pub fn parking_lines(section: Section) -> [Segment; 2] {
    PARKING_LINES[section.index()]
}

/// Direction arrows, Top/Right/Bottom/Left
pub fn direction_arrows(direction: Direction) -> [Arrow; 4] {
    ARROWS[direction.index()]
}
