//! Drives a [`TurnsSound`] session through approaches to one or more turns the way
//! the router would, one distance update at a time.

use super::{GuidanceState, TurnsSound};
use crate::config::TurnsSoundConfig;
use crate::model::notification::NotificationSettings;
use crate::model::phrase::PhraseTable;
use crate::model::turn::{TurnDirection, TurnItem};
use crate::model::unit::LengthUnit;
use crate::model::TurnsSoundError;
use indoc::indoc;

fn session(unit: LengthUnit, locale: &str) -> TurnsSound {
    let mut turns_sound = TurnsSound::default();
    turns_sound.enable(true);
    turns_sound
        .set_length_units(unit)
        .expect("test invariant failed");
    turns_sound
        .set_locale_with_json(locale)
        .expect("test invariant failed");
    turns_sound.reset();
    turns_sound
}

fn sound(turns_sound: &mut TurnsSound, turn: &TurnItem, distance_meters: f64) -> Vec<String> {
    turns_sound
        .generate_turn_sound(turn, distance_meters)
        .expect("test invariant failed")
}

#[test]
fn test_turns_sound_meters() {
    let locale = indoc! {r#"
        {
            "in_600_meters": "In 600 meters.",
            "make_a_right_turn": "Make a right turn."
        }
    "#};
    let mut turns_sound = session(LengthUnit::Meters, locale);
    turns_sound.set_speed_meters_per_second(30.0);
    let turn = TurnItem::new(5, TurnDirection::TurnRight);

    assert!(sound(&mut turns_sound, &turn, 1000.0).is_empty());
    assert!(sound(&mut turns_sound, &turn, 700.0).is_empty());

    // 20s at 30m/s is 600m, plus 100m to start speaking ahead of time
    assert_eq!(
        sound(&mut turns_sound, &turn, 699.0),
        vec!["In 600 meters. Make a right turn."]
    );
    assert!(sound(&mut turns_sound, &turn, 650.0).is_empty());

    turns_sound.set_speed_meters_per_second(32.0);
    assert!(sound(&mut turns_sound, &turn, 150.0).is_empty());
    assert!(sound(&mut turns_sound, &turn, 100.0).is_empty());
    assert_eq!(
        sound(&mut turns_sound, &turn, 99.0),
        vec!["Make a right turn."]
    );
    assert!(sound(&mut turns_sound, &turn, 99.0).is_empty());
    assert!(sound(&mut turns_sound, &turn, 50.0).is_empty());
    assert!(sound(&mut turns_sound, &turn, 0.0).is_empty());

    assert!(turns_sound.is_enabled());
    let state = turns_sound.state();
    assert_eq!(state, GuidanceState::Done { turn_index: 5 });
    assert!(state.advance_fired() && state.imminent_fired());
}

#[test]
fn test_turns_sound_meters_two_turns() {
    let locale = indoc! {r#"
        {
            "in_700_meters": "In 700 meters.",
            "make_a_sharp_right_turn": "Make a sharp right turn.",
            "enter_the_roundabout": "Enter the roundabout."
        }
    "#};
    let mut turns_sound = session(LengthUnit::Meters, locale);
    turns_sound.set_speed_meters_per_second(35.0);
    let first = TurnItem::new(5, TurnDirection::TurnSharpRight);

    assert!(sound(&mut turns_sound, &first, 800.0).is_empty());
    assert_eq!(
        sound(&mut turns_sound, &first, 700.0),
        vec!["In 700 meters. Make a sharp right turn."]
    );
    turns_sound.set_speed_meters_per_second(32.0);
    assert!(sound(&mut turns_sound, &first, 150.0).is_empty());
    assert_eq!(
        sound(&mut turns_sound, &first, 99.0),
        vec!["Make a sharp right turn."]
    );
    turns_sound.set_speed_meters_per_second(10.0);
    assert!(sound(&mut turns_sound, &first, 0.0).is_empty());

    // the second turn follows right after the first, no advance notification for it
    let second = TurnItem::new(
        11,
        TurnDirection::EnterRoundabout {
            exit_number: Some(2),
        },
    );
    assert!(sound(&mut turns_sound, &second, 60.0).is_empty());
    assert_eq!(
        turns_sound.state(),
        GuidanceState::AdvanceFired { turn_index: 11 }
    );
    assert_eq!(
        sound(&mut turns_sound, &second, 40.0),
        vec!["Enter the roundabout."]
    );
    assert!(sound(&mut turns_sound, &second, 10.0).is_empty());

    assert!(turns_sound.is_enabled());
}

#[test]
fn test_turns_sound_feet() {
    let locale = indoc! {r#"
        {
            "in_2000_feet": "In 2000 feet.",
            "enter_the_roundabout": "Enter the roundabout."
        }
    "#};
    let mut turns_sound = session(LengthUnit::Feet, locale);
    turns_sound.set_speed_meters_per_second(30.0);
    let turn = TurnItem::new(
        7,
        TurnDirection::EnterRoundabout {
            exit_number: Some(3),
        },
    );

    assert!(sound(&mut turns_sound, &turn, 1000.0).is_empty());
    // 600m of lead plus 100m to start speaking, although 2000 feet is what gets spoken
    assert!(sound(&mut turns_sound, &turn, 700.0).is_empty());
    assert_eq!(
        sound(&mut turns_sound, &turn, 699.0),
        vec!["In 2000 feet. Enter the roundabout."]
    );
    assert!(sound(&mut turns_sound, &turn, 650.0).is_empty());
    assert!(sound(&mut turns_sound, &turn, 150.0).is_empty());
    assert!(sound(&mut turns_sound, &turn, 100.0).is_empty());

    // the imminent threshold is in meters whatever unit is spoken
    assert_eq!(
        sound(&mut turns_sound, &turn, 99.0),
        vec!["Enter the roundabout."]
    );
    assert!(sound(&mut turns_sound, &turn, 99.0).is_empty());
    assert!(sound(&mut turns_sound, &turn, 50.0).is_empty());
    assert!(sound(&mut turns_sound, &turn, 0.0).is_empty());

    assert!(turns_sound.is_enabled());
}

#[test]
fn test_disabled_session_is_silent() {
    let locale = r#"{"in_600_meters": "In 600 meters.", "make_a_left_turn": "Make a left turn."}"#;
    let mut turns_sound = session(LengthUnit::Meters, locale);
    turns_sound.set_speed_meters_per_second(30.0);
    turns_sound.enable(false);
    let turn = TurnItem::new(2, TurnDirection::TurnLeft);

    for distance in [1000.0, 699.0, 300.0, 99.0, 10.0, 0.0] {
        assert!(sound(&mut turns_sound, &turn, distance).is_empty());
    }
    assert_eq!(turns_sound.state(), GuidanceState::Idle);

    // re-enabled after a reset, the turn is approached from scratch
    turns_sound.reset();
    turns_sound.enable(true);
    assert_eq!(
        sound(&mut turns_sound, &turn, 650.0),
        vec!["In 600 meters. Make a left turn."]
    );
}

#[test]
fn test_reset_only_on_index_change() {
    let locale = r#"{"in_600_meters": "In 600 meters.", "make_a_left_turn": "Make a left turn."}"#;
    let mut turns_sound = session(LengthUnit::Meters, locale);
    turns_sound.set_speed_meters_per_second(30.0);
    let turn = TurnItem::new(3, TurnDirection::TurnLeft);

    assert_eq!(sound(&mut turns_sound, &turn, 650.0).len(), 1);
    // moving away from the turn does not re-arm the advance notification
    assert!(sound(&mut turns_sound, &turn, 5000.0).is_empty());
    assert!(sound(&mut turns_sound, &turn, 650.0).is_empty());

    // a new index re-arms both notifications, even for the same maneuver kind
    let next = TurnItem::new(4, TurnDirection::TurnLeft);
    assert_eq!(
        turns_sound.state(),
        GuidanceState::AdvanceFired { turn_index: 3 }
    );
    assert_eq!(
        sound(&mut turns_sound, &next, 650.0),
        vec!["In 600 meters. Make a left turn."]
    );
    assert_eq!(
        sound(&mut turns_sound, &next, 50.0),
        vec!["Make a left turn."]
    );
}

#[test]
fn test_at_most_one_notification_of_each_kind_per_turn() {
    let locale = indoc! {r#"
        {
            "in_200_meters": "In 200 meters.",
            "in_300_meters": "In 300 meters.",
            "in_400_meters": "In 400 meters.",
            "in_500_meters": "In 500 meters.",
            "in_600_meters": "In 600 meters.",
            "in_700_meters": "In 700 meters.",
            "make_a_left_turn": "Make a left turn.",
            "make_a_right_turn": "Make a right turn.",
            "make_a_u_turn": "Make a U-turn."
        }
    "#};
    let mut turns_sound = session(LengthUnit::Meters, locale);
    let phrases = PhraseTable::from_json_str(locale).expect("test invariant failed");
    let route = [
        TurnItem::new(0, TurnDirection::TurnLeft),
        TurnItem::new(1, TurnDirection::TurnRight),
        TurnItem::new(2, TurnDirection::UTurn),
    ];
    let speeds = [8.0, 14.0, 22.0, 31.0, 36.0];

    for (turn, leg_length) in route.iter().zip([1200.0, 400.0, 90.0]) {
        let mut announced = vec![];
        let mut distance: f64 = leg_length;
        let mut step = 0;
        while distance >= 0.0 {
            turns_sound.set_speed_meters_per_second(speeds[step % speeds.len()]);
            announced.extend(sound(&mut turns_sound, turn, distance));
            distance -= 7.5;
            step += 1;
        }
        let maneuver = phrases
            .imminent_notification(&turn.direction)
            .expect("test invariant failed")
            .expect("test invariant failed");
        let imminent = announced.iter().filter(|n| **n == maneuver).count();
        let advance = announced.len() - imminent;
        assert!(advance <= 1, "turn {}: {announced:?}", turn.index);
        assert_eq!(imminent, 1, "turn {}: {announced:?}", turn.index);
    }
}

#[test]
fn test_unconfigured_session_fails() {
    let mut turns_sound = TurnsSound::default();
    turns_sound.enable(true);
    let turn = TurnItem::new(0, TurnDirection::GoStraight);
    let result = turns_sound.generate_turn_sound(&turn, 300.0);
    assert!(matches!(result, Err(TurnsSoundError::ConfigurationError(_))));
    assert_eq!(turns_sound.state(), GuidanceState::Idle);
}

#[test]
fn test_invalid_settings_cannot_be_activated() {
    let invalid = [
        NotificationSettings::new(
            20.0,
            200,
            700,
            vec![100, 300, 200, 700],
            LengthUnit::Meters,
        ),
        NotificationSettings::new(20.0, 700, 200, vec![100, 200, 700], LengthUnit::Meters),
        NotificationSettings::new(20.0, 200, 700, vec![100, 200, 700], LengthUnit::Undefined),
    ];
    for meters in invalid {
        let config = TurnsSoundConfig {
            meters,
            ..Default::default()
        };
        let mut turns_sound = TurnsSound::new(config).expect("test invariant failed");
        turns_sound
            .set_length_units(LengthUnit::Feet)
            .expect("test invariant failed");
        let result = turns_sound.set_length_units(LengthUnit::Meters);
        assert!(matches!(result, Err(TurnsSoundError::ConfigurationError(_))));
        assert_eq!(turns_sound.length_units(), LengthUnit::Feet);
    }

    let mut turns_sound = TurnsSound::default();
    let result = turns_sound.set_length_units(LengthUnit::Undefined);
    assert!(matches!(result, Err(TurnsSoundError::ConfigurationError(_))));
}

#[test]
fn test_missing_maneuver_phrase_is_consumed() {
    let locale = r#"{"in_600_meters": "In 600 meters."}"#;
    let mut turns_sound = session(LengthUnit::Meters, locale);
    turns_sound.set_speed_meters_per_second(30.0);
    let turn = TurnItem::new(9, TurnDirection::TurnSlightLeft);

    assert!(sound(&mut turns_sound, &turn, 650.0).is_empty());
    assert_eq!(
        turns_sound.state(),
        GuidanceState::AdvanceFired { turn_index: 9 }
    );
    assert!(sound(&mut turns_sound, &turn, 50.0).is_empty());
    assert_eq!(turns_sound.state(), GuidanceState::Done { turn_index: 9 });
}

#[test]
fn test_spoken_distance_never_exceeds_remaining_distance() {
    let locale = indoc! {r#"
        {
            "in_200_meters": "In 200 meters.",
            "in_600_meters": "In 600 meters.",
            "make_a_right_turn": "Make a right turn."
        }
    "#};
    let mut turns_sound = session(LengthUnit::Meters, locale);
    turns_sound.set_speed_meters_per_second(30.0);
    let turn = TurnItem::new(1, TurnDirection::TurnRight);
    // first reported well inside the advance range
    assert_eq!(
        sound(&mut turns_sound, &turn, 180.0),
        vec!["In 200 meters. Make a right turn."]
    );
}

#[test]
fn test_low_speed_uses_min_distance() {
    let locale = r#"{"in_200_meters": "In 200 meters.", "go_straight": "Go straight."}"#;
    let mut turns_sound = session(LengthUnit::Meters, locale);
    turns_sound.set_speed_meters_per_second(0.0);
    let turn = TurnItem::new(1, TurnDirection::GoStraight);

    // 200m min notification distance plus the 10m imminent floor
    assert!(sound(&mut turns_sound, &turn, 210.0).is_empty());
    assert_eq!(
        sound(&mut turns_sound, &turn, 209.0),
        vec!["In 200 meters. Go straight."]
    );
    assert!(sound(&mut turns_sound, &turn, 20.0).is_empty());
    assert_eq!(sound(&mut turns_sound, &turn, 5.0), vec!["Go straight."]);
    assert!(sound(&mut turns_sound, &turn, 0.0).is_empty());

    // a negative speed counts as standing still
    turns_sound.set_speed_meters_per_second(-3.0);
    let next = TurnItem::new(2, TurnDirection::GoStraight);
    assert_eq!(sound(&mut turns_sound, &next, 5.0), vec!["Go straight."]);
}

#[test]
fn test_imminent_spoken_before_any_speed_is_reported() {
    let locale = r#"{"in_200_meters": "In 200 meters.", "make_a_right_turn": "Make a right turn."}"#;
    let mut turns_sound = session(LengthUnit::Meters, locale);
    let turn = TurnItem::new(4, TurnDirection::TurnRight);

    let spoken: Vec<(f64, Vec<String>)> = [500.0, 199.0, 80.0, 30.0, 5.0, 0.0]
        .into_iter()
        .map(|distance| (distance, sound(&mut turns_sound, &turn, distance)))
        .collect();
    assert_eq!(
        spoken,
        vec![
            (500.0, vec![]),
            (199.0, vec![String::from("In 200 meters. Make a right turn.")]),
            (80.0, vec![]),
            (30.0, vec![]),
            (5.0, vec![String::from("Make a right turn.")]),
            (0.0, vec![]),
        ]
    );
    assert_eq!(turns_sound.state(), GuidanceState::Done { turn_index: 4 });
}

#[test]
fn test_default_session_matches_default_config() {
    let from_config =
        TurnsSound::new(TurnsSoundConfig::default()).expect("test invariant failed");
    let default = TurnsSound::default();
    assert_eq!(default.is_enabled(), from_config.is_enabled());
    assert_eq!(default.length_units(), from_config.length_units());
    assert_eq!(default.speed(), from_config.speed());
    assert_eq!(default.state(), from_config.state());
    assert_eq!(default.state(), GuidanceState::Idle);
}

#[test]
fn test_switching_units_mid_session() {
    let locale = indoc! {r#"
        {
            "in_600_meters": "In 600 meters.",
            "in_2000_feet": "In 2000 feet.",
            "make_a_left_turn": "Make a left turn."
        }
    "#};
    let mut turns_sound = session(LengthUnit::Meters, locale);
    turns_sound.set_speed_meters_per_second(30.0);
    let first = TurnItem::new(1, TurnDirection::TurnLeft);
    assert_eq!(
        sound(&mut turns_sound, &first, 690.0),
        vec!["In 600 meters. Make a left turn."]
    );
    turns_sound
        .set_length_units(LengthUnit::Feet)
        .expect("test invariant failed");
    let second = TurnItem::new(2, TurnDirection::TurnLeft);
    assert_eq!(
        sound(&mut turns_sound, &second, 690.0),
        vec!["In 2000 feet. Make a left turn."]
    );
}
