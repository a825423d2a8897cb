//! Obstacle challenge draw
//!
//! A draw fixes the driving direction, the section holding the single
//! traffic sign, one card for every other section and the parking lot
//! section. The result is immutable once built.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use fe_core::{Direction, FieldError, FieldResult, Section, Toss};
use serde::Serialize;

use crate::cards::{CardId, CardTable};
use crate::random::RandomSource;
use crate::selector::draw_section;

/// One obstacle challenge field configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    direction: Direction,
    single_sign_section: Section,
    single_sign_card: CardId,
    other_sections_layout: BTreeMap<Section, CardId>,
    parking_section: Section,
}

impl Configuration {
    /// Build a configuration from explicit parts.
    ///
    /// Fails unless the single-sign card is 9 or 10, the other sections
    /// are exactly the three sections besides `single_sign_section`, and no
    /// card is used twice.
    pub fn new(
        direction: Direction,
        single_sign_section: Section,
        single_sign_card: CardId,
        other_sections_layout: impl IntoIterator<Item = (Section, CardId)>,
        parking_section: Section,
    ) -> FieldResult<Self> {
        if !single_sign_card.is_single_sign() {
            return Err(FieldError::InvalidSingleSignCard(single_sign_card.get()));
        }

        let mut layout = BTreeMap::new();
        let mut used_cards = BTreeSet::from([single_sign_card]);
        for (section, card) in other_sections_layout {
            if section == single_sign_section || layout.insert(section, card).is_some() {
                return Err(FieldError::DuplicateSection(section));
            }
            if !used_cards.insert(card) {
                return Err(FieldError::DuplicateCard(card.get()));
            }
        }

        if let Some(missing) = Section::ALL
            .into_iter()
            .find(|&s| s != single_sign_section && !layout.contains_key(&s))
        {
            return Err(FieldError::MissingSection(missing));
        }

        Ok(Self {
            direction,
            single_sign_section,
            single_sign_card,
            other_sections_layout: layout,
            parking_section,
        })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn single_sign_section(&self) -> Section {
        self.single_sign_section
    }

    pub fn single_sign_card(&self) -> CardId {
        self.single_sign_card
    }

    /// Cards of the three sections without the single sign
    pub fn other_sections_layout(&self) -> &BTreeMap<Section, CardId> {
        &self.other_sections_layout
    }

    pub fn parking_section(&self) -> Section {
        self.parking_section
    }

    /// Card placed in `section`
    pub fn card_for(&self, section: Section) -> CardId {
        if section == self.single_sign_section {
            self.single_sign_card
        } else {
            // every non-single section is present once construction succeeded
            self.other_sections_layout[&section]
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = CardTable::standard();
        let sign_color = table
            .pillars(self.single_sign_card)
            .first()
            .map(|p| p.color.to_string())
            .unwrap_or_default();

        writeln!(f, "Driving direction: {}", self.direction)?;
        writeln!(
            f,
            "Single sign section: {}",
            self.single_sign_section.toss_label()
        )?;
        writeln!(
            f,
            "Single sign: {} (card {})",
            sign_color, self.single_sign_card
        )?;
        for (section, card) in &self.other_sections_layout {
            writeln!(f, "  {section}: card {card}")?;
        }
        write!(f, "Parking lot: {}", self.parking_section.toss_label())
    }
}

/// Draw a complete obstacle challenge configuration.
///
/// Order of draws: direction, single-sign section (two tosses), single-sign
/// colour (one toss), deck shuffle, parking section (two tosses).
pub fn generate_obstacle<R: RandomSource + ?Sized>(source: &mut R) -> Configuration {
    let direction = source.choose_direction();
    log::debug!("Driving direction: {direction}");

    let single = draw_section(source);
    log::debug!(
        "Single sign section tosses: {}, {} -> {}",
        single.tosses[0],
        single.tosses[1],
        single.section.toss_label()
    );

    let color_toss = source.toss_coin();
    let single_sign_card = match color_toss {
        Toss::Heads => CardId::GREEN_SINGLE_SIGN,
        Toss::Tails => CardId::RED_SINGLE_SIGN,
    };
    log::debug!("Single sign colour toss: {color_toss} -> card {single_sign_card}");

    let mut deck: Vec<CardId> = CardId::all().filter(|&id| id != single_sign_card).collect();
    source.shuffle_cards(&mut deck);

    // Global order with the single-sign section removed, not clockwise from it.
    // Cards come off the end of the shuffled deck.
    let other_sections_layout: BTreeMap<Section, CardId> = Section::ALL
        .into_iter()
        .filter(|&s| s != single.section)
        .zip(deck.iter().rev().copied())
        .collect();
    for (section, card) in &other_sections_layout {
        log::debug!("Section {section} gets card {card}");
    }
    log::debug!(
        "{} cards left unused",
        deck.len() - other_sections_layout.len()
    );

    let parking = draw_section(source);
    log::debug!(
        "Parking lot tosses: {}, {} -> {}",
        parking.tosses[0],
        parking.tosses[1],
        parking.section.toss_label()
    );

    let config = Configuration {
        direction,
        single_sign_section: single.section,
        single_sign_card,
        other_sections_layout,
        parking_section: parking.section,
    };
    log::info!(
        "Obstacle draw: {} / single sign {} in {} / parking {}",
        config.direction,
        config.single_sign_card,
        config.single_sign_section,
        config.parking_section
    );
    config
}
