use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the maneuver a traveler performs at a turn. roundabout maneuvers carry the exit
/// number when the router knows it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurnDirection {
    NoTurn,
    GoStraight,
    TurnRight,
    TurnSharpRight,
    TurnSlightRight,
    TurnLeft,
    TurnSharpLeft,
    TurnSlightLeft,
    UTurn,
    TakeTheExit,
    EnterRoundabout {
        #[serde(default)]
        exit_number: Option<u32>,
    },
    LeaveRoundabout {
        #[serde(default)]
        exit_number: Option<u32>,
    },
    StayOnRoundabout,
    StartAtEndOfStreet,
    ReachedYourDestination,
}

impl TurnDirection {
    /// key of the locale phrase naming this maneuver. maneuvers which are
    /// never spoken have no key.
    pub fn text_id(&self) -> Option<&'static str> {
        use TurnDirection as T;
        match self {
            T::GoStraight => Some("go_straight"),
            T::TurnRight => Some("make_a_right_turn"),
            T::TurnSharpRight => Some("make_a_sharp_right_turn"),
            T::TurnSlightRight => Some("make_a_slight_right_turn"),
            T::TurnLeft => Some("make_a_left_turn"),
            T::TurnSharpLeft => Some("make_a_sharp_left_turn"),
            T::TurnSlightLeft => Some("make_a_slight_left_turn"),
            T::UTurn => Some("make_a_u_turn"),
            T::TakeTheExit => Some("take_the_exit"),
            T::EnterRoundabout { .. } => Some("enter_the_roundabout"),
            T::LeaveRoundabout { .. } => Some("leave_the_roundabout"),
            T::ReachedYourDestination => Some("you_have_reached_the_destination"),
            T::NoTurn | T::StayOnRoundabout | T::StartAtEndOfStreet => None,
        }
    }

    pub fn exit_number(&self) -> Option<u32> {
        match self {
            TurnDirection::EnterRoundabout { exit_number }
            | TurnDirection::LeaveRoundabout { exit_number } => *exit_number,
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        use TurnDirection as T;
        match self {
            T::NoTurn => "no_turn",
            T::GoStraight => "go_straight",
            T::TurnRight => "turn_right",
            T::TurnSharpRight => "turn_sharp_right",
            T::TurnSlightRight => "turn_slight_right",
            T::TurnLeft => "turn_left",
            T::TurnSharpLeft => "turn_sharp_left",
            T::TurnSlightLeft => "turn_slight_left",
            T::UTurn => "u_turn",
            T::TakeTheExit => "take_the_exit",
            T::EnterRoundabout { .. } => "enter_roundabout",
            T::LeaveRoundabout { .. } => "leave_roundabout",
            T::StayOnRoundabout => "stay_on_roundabout",
            T::StartAtEndOfStreet => "start_at_end_of_street",
            T::ReachedYourDestination => "reached_your_destination",
        }
    }

    /// builds a direction from its snake_case name, as used in flat row formats
    /// where the roundabout exit lives in its own column. the exit number is
    /// ignored for non-roundabout maneuvers.
    pub fn from_name(name: &str, exit_number: Option<u32>) -> Result<TurnDirection, String> {
        use TurnDirection as T;
        let direction = match name.trim() {
            "no_turn" => T::NoTurn,
            "go_straight" => T::GoStraight,
            "turn_right" => T::TurnRight,
            "turn_sharp_right" => T::TurnSharpRight,
            "turn_slight_right" => T::TurnSlightRight,
            "turn_left" => T::TurnLeft,
            "turn_sharp_left" => T::TurnSharpLeft,
            "turn_slight_left" => T::TurnSlightLeft,
            "u_turn" => T::UTurn,
            "take_the_exit" => T::TakeTheExit,
            "enter_roundabout" => T::EnterRoundabout { exit_number },
            "leave_roundabout" => T::LeaveRoundabout { exit_number },
            "stay_on_roundabout" => T::StayOnRoundabout,
            "start_at_end_of_street" => T::StartAtEndOfStreet,
            "reached_your_destination" => T::ReachedYourDestination,
            other => return Err(format!("unknown turn direction '{other}'")),
        };
        Ok(direction)
    }
}

impl Display for TurnDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.exit_number() {
            Some(exit) => write!(f, "{} (exit {exit})", self.name()),
            None => write!(f, "{}", self.name()),
        }
    }
}
