//! Open challenge draw: direction, starting section, corridor widths, start zone

use std::fmt;

use fe_core::{Direction, FieldError, FieldResult, Section, Toss};
use serde::{Deserialize, Serialize};

use crate::random::RandomSource;
use crate::selector::draw_section;

/// Width of the corridor between outer wall and inner wall of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CorridorWidth {
    Wide,
    Narrow,
}

impl From<Toss> for CorridorWidth {
    fn from(toss: Toss) -> Self {
        match toss {
            Toss::Heads => CorridorWidth::Wide,
            Toss::Tails => CorridorWidth::Narrow,
        }
    }
}

impl fmt::Display for CorridorWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorridorWidth::Wide => f.write_str("Wide"),
            CorridorWidth::Narrow => f.write_str("Narrow"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corridor {
    pub section: Section,
    pub width: CorridorWidth,
}

/// Starting zone inside the starting section, `1..=6`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StartZone(u8);

impl StartZone {
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for StartZone {
    type Error = FieldError;

    fn try_from(face: u8) -> Result<Self, Self::Error> {
        if (1..=6).contains(&face) {
            Ok(Self(face))
        } else {
            Err(FieldError::InvalidDieFace(face))
        }
    }
}

impl From<StartZone> for u8 {
    fn from(zone: StartZone) -> u8 {
        zone.0
    }
}

/// One open challenge field configuration
///
/// Corridors always start at the starting section and run clockwise, so
/// every section has exactly one width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OpenRecord")]
pub struct OpenConfiguration {
    direction: Direction,
    starting_section: Section,
    corridors: [Corridor; 4],
    start_zone: StartZone,
}

/// Serialized shape, checked before it becomes an [`OpenConfiguration`]
#[derive(Deserialize)]
struct OpenRecord {
    direction: Direction,
    starting_section: Section,
    corridors: [Corridor; 4],
    start_zone: StartZone,
}

impl TryFrom<OpenRecord> for OpenConfiguration {
    type Error = FieldError;

    fn try_from(record: OpenRecord) -> Result<Self, Self::Error> {
        let expected = record.starting_section.clockwise_from();
        for (corridor, section) in record.corridors.iter().zip(expected) {
            if corridor.section != section {
                return Err(FieldError::CorridorOutOfOrder {
                    expected: section,
                    found: corridor.section,
                });
            }
        }
        Ok(Self::new(
            record.direction,
            record.starting_section,
            record.corridors.map(|c| c.width),
            record.start_zone,
        ))
    }
}

impl OpenConfiguration {
    /// Build from the widths in clockwise order starting at `starting_section`
    pub fn new(
        direction: Direction,
        starting_section: Section,
        widths: [CorridorWidth; 4],
        start_zone: StartZone,
    ) -> Self {
        let sections = starting_section.clockwise_from();
        let corridors = [0, 1, 2, 3].map(|i| Corridor {
            section: sections[i],
            width: widths[i],
        });
        Self {
            direction,
            starting_section,
            corridors,
            start_zone,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn starting_section(&self) -> Section {
        self.starting_section
    }

    /// Starting section first, then clockwise
    pub fn corridors(&self) -> &[Corridor; 4] {
        &self.corridors
    }

    pub fn start_zone(&self) -> StartZone {
        self.start_zone
    }

    pub fn corridor_for(&self, section: Section) -> CorridorWidth {
        let offset = (section.index() + 4 - self.starting_section.index()) % 4;
        self.corridors[offset].width
    }
}

impl fmt::Display for OpenConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const ROLES: [&str; 4] = [
            "Starting section",
            "Next clockwise section",
            "Opposite section",
            "Final clockwise section",
        ];

        writeln!(f, "Driving direction: {}", self.direction)?;
        writeln!(f, "Starting section: {}", self.starting_section.toss_label())?;
        for (role, corridor) in ROLES.iter().zip(&self.corridors) {
            writeln!(f, "  {role} ({}): {}", corridor.section, corridor.width)?;
        }
        write!(f, "Starting zone: {}", self.start_zone.get())
    }
}

/// Draw an open challenge configuration.
///
/// Fails only if the source rolls a die face outside `1..=6`.
pub fn generate_open<R: RandomSource + ?Sized>(source: &mut R) -> FieldResult<OpenConfiguration> {
    let direction = source.choose_direction();
    log::debug!("Driving direction: {direction}");

    let start = draw_section(source);
    log::debug!(
        "Starting section tosses: {}, {} -> {}",
        start.tosses[0],
        start.tosses[1],
        start.section.toss_label()
    );

    let widths = start.section.clockwise_from().map(|section| {
        let toss = source.toss_coin();
        log::debug!("Corridor toss for {section}: {toss}");
        CorridorWidth::from(toss)
    });

    let start_zone = StartZone::try_from(source.roll_die())?;
    log::debug!("Starting zone roll: {}", start_zone.get());

    log::info!(
        "Open draw: {} / start {} zone {}",
        direction,
        start.section,
        start_zone.get()
    );
    Ok(OpenConfiguration::new(
        direction,
        start.section,
        widths,
        start_zone,
    ))
}
