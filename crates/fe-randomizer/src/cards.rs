//! Card catalogue
//!
//! Each of the 36 cards places one or two pillars inside a section. The table
//! is pure data and is never modified after startup.

use std::fmt;

use fe_core::{FieldError, PillarColor, Row, Slot};
use serde::{Deserialize, Serialize};

use PillarColor::{Green, Red};
use Row::{Inner, Outer};
use Slot::{P1, P2, P3};

/// Number of cards in the deck
pub const CARD_COUNT: u8 = 36;

/// Card id in `1..=36`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CardId(u8);

impl CardId {
    /// Single green pillar, outer row, slot p2
    pub const GREEN_SINGLE_SIGN: CardId = CardId(9);
    /// Single red pillar, outer row, slot p2
    pub const RED_SINGLE_SIGN: CardId = CardId(10);

    /// Create a card id, rejecting anything outside `1..=36`
    pub fn new(id: u8) -> Result<Self, FieldError> {
        if (1..=CARD_COUNT).contains(&id) {
            Ok(Self(id))
        } else {
            Err(FieldError::InvalidCardId(id))
        }
    }

    /// Every card id in ascending order
    pub fn all() -> impl Iterator<Item = CardId> {
        (1..=CARD_COUNT).map(CardId)
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Is this one of the two cards that may carry the single traffic sign?
    pub fn is_single_sign(self) -> bool {
        self == Self::GREEN_SINGLE_SIGN || self == Self::RED_SINGLE_SIGN
    }

    #[inline]
    fn table_index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<u8> for CardId {
    type Error = FieldError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<CardId> for u8 {
    fn from(id: CardId) -> u8 {
        id.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One pillar as authored on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarSpec {
    pub slot: Slot,
    pub color: PillarColor,
    pub row: Row,
}

const fn pillar(slot: Slot, color: PillarColor, row: Row) -> PillarSpec {
    PillarSpec { slot, color, row }
}

static CARD_LAYOUTS: [&[PillarSpec]; CARD_COUNT as usize] = [
    // 1–12: single pillar
    &[pillar(P3, Green, Inner)],
    &[pillar(P3, Red, Inner)],
    &[pillar(P2, Green, Inner)],
    &[pillar(P2, Red, Inner)],
    &[pillar(P1, Green, Inner)],
    &[pillar(P1, Red, Inner)],
    &[pillar(P3, Green, Outer)],
    &[pillar(P3, Red, Outer)],
    &[pillar(P2, Green, Outer)],
    &[pillar(P2, Red, Outer)],
    &[pillar(P1, Green, Inner)],
    &[pillar(P1, Red, Inner)],
    // 13–18: outer p3 + inner p1
    &[pillar(P3, Green, Outer), pillar(P1, Green, Inner)],
    &[pillar(P3, Green, Outer), pillar(P1, Red, Inner)],
    &[pillar(P3, Red, Outer), pillar(P1, Green, Inner)],
    &[pillar(P3, Green, Outer), pillar(P1, Red, Inner)],
    &[pillar(P3, Red, Outer), pillar(P1, Green, Inner)],
    &[pillar(P3, Red, Outer), pillar(P1, Red, Inner)],
    // 19–24: inner p3 + outer p1
    &[pillar(P3, Green, Inner), pillar(P1, Green, Outer)],
    &[pillar(P3, Green, Inner), pillar(P1, Red, Outer)],
    &[pillar(P3, Red, Inner), pillar(P1, Green, Outer)],
    &[pillar(P3, Green, Inner), pillar(P1, Red, Outer)],
    &[pillar(P3, Red, Inner), pillar(P1, Green, Outer)],
    &[pillar(P3, Red, Inner), pillar(P1, Red, Outer)],
    // 25–30: both inner
    &[pillar(P3, Green, Inner), pillar(P1, Green, Inner)],
    &[pillar(P3, Green, Inner), pillar(P1, Red, Inner)],
    &[pillar(P3, Red, Inner), pillar(P1, Green, Inner)],
    &[pillar(P3, Green, Inner), pillar(P1, Red, Inner)],
    &[pillar(P3, Red, Inner), pillar(P1, Green, Inner)],
    &[pillar(P3, Red, Inner), pillar(P1, Red, Inner)],
    // 31–36: both outer
    &[pillar(P3, Green, Outer), pillar(P1, Green, Outer)],
    &[pillar(P3, Green, Outer), pillar(P1, Red, Outer)],
    &[pillar(P3, Red, Outer), pillar(P1, Green, Outer)],
    &[pillar(P3, Green, Outer), pillar(P1, Red, Outer)],
    &[pillar(P3, Red, Outer), pillar(P1, Green, Outer)],
    &[pillar(P3, Red, Outer), pillar(P1, Red, Outer)],
];

/// Read-only view of the card catalogue
#[derive(Debug, Clone, Copy)]
pub struct CardTable {
    layouts: &'static [&'static [PillarSpec]; CARD_COUNT as usize],
}

impl CardTable {
    /// The official 2025 card set
    pub fn standard() -> Self {
        Self {
            layouts: &CARD_LAYOUTS,
        }
    }

    /// Pillars authored on a card, in card order
    pub fn pillars(&self, id: CardId) -> &'static [PillarSpec] {
        self.layouts[id.table_index()]
    }

    /// Iterate `(id, pillars)` over the whole catalogue
    pub fn iter(&self) -> impl Iterator<Item = (CardId, &'static [PillarSpec])> + '_ {
        CardId::all().map(|id| (id, self.pillars(id)))
    }
}

impl Default for CardTable {
    fn default() -> Self {
        Self::standard()
    }
}
