//! Configuration → concrete field geometry

use fe_core::{Arrow, Direction, PillarColor, Point, Row, Section, Segment, Slot};
use fe_randomizer::{CardId, CardTable, Configuration};
use serde::{Deserialize, Serialize};

use crate::coords::{direction_arrows, parking_lines, pillar_center};

/// Lane decision for one pillar.
///
/// The parking override wins over the card's own row tag: every pillar in
/// the parking section sits on the inner lane.
#[inline]
pub fn is_inward(card_row: Row, hosts_parking: bool) -> bool {
    hosts_parking || card_row == Row::Inner
}

/// A pillar resolved to its final position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarPlacement {
    pub section: Section,
    pub slot: Slot,
    pub color: PillarColor,
    pub inward: bool,
    /// Card the pillar came from
    pub card: CardId,
    pub center: Point,
}

/// Parking lot outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingLot {
    pub section: Section,
    pub lines: [Segment; 2],
}

/// Everything the renderer draws for one configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLayout {
    pub direction: Direction,
    pub arrows: [Arrow; 4],
    pub parking: ParkingLot,
    /// Sections in Top, Right, Bottom, Left order; pillars in card order
    pub pillars: Vec<PillarPlacement>,
}

impl FieldLayout {
    /// Placements inside one section
    pub fn pillars_in(&self, section: Section) -> impl Iterator<Item = &PillarPlacement> {
        self.pillars.iter().filter(move |p| p.section == section)
    }
}

/// Project a configuration onto the playfield. Pure: the same
/// configuration always yields the same layout.
pub fn project(config: &Configuration, cards: &CardTable) -> FieldLayout {
    let parking_section = config.parking_section();

    let mut pillars = Vec::with_capacity(Section::ALL.len() * 2);
    for section in Section::ALL {
        let card = config.card_for(section);
        let hosts_parking = section == parking_section;

        for spec in cards.pillars(card) {
            let inward = is_inward(spec.row, hosts_parking);
            pillars.push(PillarPlacement {
                section,
                slot: spec.slot,
                color: spec.color,
                inward,
                card,
                center: pillar_center(section, spec.slot, inward),
            });
        }
    }
    log::debug!("Projected {} pillars", pillars.len());

    FieldLayout {
        direction: config.direction(),
        arrows: direction_arrows(config.direction()),
        parking: ParkingLot {
            section: parking_section,
            lines: parking_lines(parking_section),
        },
        pillars,
    }
}
