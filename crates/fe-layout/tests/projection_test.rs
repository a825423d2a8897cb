//! Layout projection tests
//!
//! Verifies:
//! - the parking override forces inner-lane pillars
//! - projection is pure
//! - the reference scenario lands on the expected coordinates
//! - rotation always brings the parking lot to the bottom edge

use fe_core::{Direction, PillarColor, Point, Section, Slot};
use fe_layout::{FIELD_SIZE, Rotation, pillar_center, project, rotation_for};
use fe_randomizer::{CardId, CardTable, Configuration, SeededRandom, generate_obstacle};

fn card(n: u8) -> CardId {
    CardId::new(n).unwrap()
}

fn reference_config() -> Configuration {
    Configuration::new(
        Direction::Clockwise,
        Section::Top,
        card(9),
        [
            (Section::Right, card(1)),
            (Section::Bottom, card(2)),
            (Section::Left, card(3)),
        ],
        Section::Top,
    )
    .unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════════
// SCENARIOS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_reference_scenario() {
    let layout = project(&reference_config(), &CardTable::standard());

    let top: Vec<_> = layout.pillars_in(Section::Top).collect();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].slot, Slot::P2);
    assert_eq!(top[0].color, PillarColor::Green);
    assert!(top[0].inward, "outer card 9 forced inward by parking");
    assert_eq!(top[0].center, Point::new(1025, 450));

    let right: Vec<_> = layout.pillars_in(Section::Right).collect();
    assert_eq!(right.len(), 1);
    assert_eq!(right[0].slot, Slot::P3);
    assert_eq!(right[0].color, PillarColor::Green);
    assert!(right[0].inward);
    assert_eq!(right[0].center, pillar_center(Section::Right, Slot::P3, true));
    assert_eq!(right[0].center, Point::new(1600, 1345));

    let bottom: Vec<_> = layout.pillars_in(Section::Bottom).collect();
    assert_eq!(bottom[0].color, PillarColor::Red);
    assert_eq!(bottom[0].center, Point::new(710, 1600));

    assert_eq!(layout.parking.section, Section::Top);
    assert_eq!(rotation_for(layout.parking.section).degrees(), 180);
}

#[test]
fn test_outer_card_stays_outer_away_from_parking() {
    let config = Configuration::new(
        Direction::CounterClockwise,
        Section::Right,
        card(10),
        [
            (Section::Top, card(31)),
            (Section::Bottom, card(13)),
            (Section::Left, card(25)),
        ],
        Section::Left,
    )
    .unwrap();
    let layout = project(&config, &CardTable::standard());

    let right: Vec<_> = layout.pillars_in(Section::Right).collect();
    assert!(!right[0].inward);
    assert_eq!(right[0].center, Point::new(1725, 1025));

    assert!(layout.pillars_in(Section::Top).all(|p| !p.inward));

    let bottom: Vec<_> = layout.pillars_in(Section::Bottom).collect();
    assert_eq!(bottom.len(), 2);
    assert!(!bottom[0].inward, "card 13 p3 is outer");
    assert!(bottom[1].inward, "card 13 p1 is inner");

    assert_eq!(layout.direction, Direction::CounterClockwise);
    assert_eq!(layout.arrows[0].line.start, Point::new(1200, 385));
}

#[test]
fn test_parking_right_rotates_270_not_90() {
    assert_eq!(rotation_for(Section::Right), Rotation::Ccw270);
    assert_eq!(rotation_for(Section::Right).degrees(), 270);
}

// ═══════════════════════════════════════════════════════════════════════════════
// PROPERTIES OVER RANDOM DRAWS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_parking_section_pillars_always_inward() {
    let cards = CardTable::standard();
    for seed in 0..1_000 {
        let config = generate_obstacle(&mut SeededRandom::from_seed(seed));
        let layout = project(&config, &cards);
        for pillar in layout.pillars_in(config.parking_section()) {
            assert!(pillar.inward, "seed {seed}: {pillar:?}");
            assert_eq!(pillar.center, pillar_center(pillar.section, pillar.slot, true));
        }
    }
}

#[test]
fn test_every_card_pillar_projected() {
    let cards = CardTable::standard();
    for seed in 0..500 {
        let config = generate_obstacle(&mut SeededRandom::from_seed(seed));
        let layout = project(&config, &cards);
        let expected: usize = Section::ALL
            .iter()
            .map(|&s| cards.pillars(config.card_for(s)).len())
            .sum();
        assert_eq!(layout.pillars.len(), expected, "seed {seed}");
    }
}

#[test]
fn test_projection_is_pure() {
    let cards = CardTable::standard();
    for seed in 0..100 {
        let config = generate_obstacle(&mut SeededRandom::from_seed(seed));
        assert_eq!(project(&config, &cards), project(&config, &cards));
    }
}

#[test]
fn test_rotation_puts_parking_at_bottom() {
    let cards = CardTable::standard();
    let half = FIELD_SIZE as i32 / 2;
    for seed in 0..200 {
        let config = generate_obstacle(&mut SeededRandom::from_seed(seed));
        let layout = project(&config, &cards);
        let rotation = rotation_for(layout.parking.section);

        for line in layout.parking.lines {
            for p in [line.start, line.end] {
                let q = rotation.rotate_point(p, FIELD_SIZE, FIELD_SIZE);
                assert!(q.y > half, "seed {seed}: {p:?} -> {q:?}");
            }
        }
    }
}
