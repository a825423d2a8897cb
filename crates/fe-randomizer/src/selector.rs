//! Two coin tosses → one track section

use fe_core::{Section, Toss};
use serde::{Deserialize, Serialize};

use crate::random::RandomSource;

/// Fixed toss table. Left and Right are deliberately not mirror images:
/// Heads/Tails is Right, Tails/Heads is Left.
pub fn select_section(first: Toss, second: Toss) -> Section {
    match (first, second) {
        (Toss::Heads, Toss::Heads) => Section::Top,
        (Toss::Heads, Toss::Tails) => Section::Right,
        (Toss::Tails, Toss::Heads) => Section::Left,
        (Toss::Tails, Toss::Tails) => Section::Bottom,
    }
}

/// Section drawn from two tosses, with the tosses kept for narration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDraw {
    pub section: Section,
    pub tosses: [Toss; 2],
}

/// Toss twice and select a section
pub fn draw_section<R: RandomSource + ?Sized>(source: &mut R) -> SectionDraw {
    let first = source.toss_coin();
    let second = source.toss_coin();
    SectionDraw {
        section: select_section(first, second),
        tosses: [first, second],
    }
}
