use crate::model::TurnsSoundError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use uom::si::f64::{Length, Velocity};
use uom::si::{length, velocity};

/// unit system used for spoken distances. `Undefined` marks a session which has not
/// been configured yet and is never valid for announcing.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    Meters,
    Feet,
    #[default]
    Undefined,
}

impl LengthUnit {
    pub fn is_defined(&self) -> bool {
        !matches!(self, LengthUnit::Undefined)
    }

    /// interprets a raw value in this unit as a length
    pub fn to_uom(&self, value: f64) -> Result<Length, TurnsSoundError> {
        match self {
            LengthUnit::Meters => Ok(Length::new::<length::meter>(value)),
            LengthUnit::Feet => Ok(Length::new::<length::foot>(value)),
            LengthUnit::Undefined => Err(undefined_unit_error()),
        }
    }

    /// expresses a length as a raw value in this unit
    pub fn from_uom(&self, value: Length) -> Result<f64, TurnsSoundError> {
        match self {
            LengthUnit::Meters => Ok(value.get::<length::meter>()),
            LengthUnit::Feet => Ok(value.get::<length::foot>()),
            LengthUnit::Undefined => Err(undefined_unit_error()),
        }
    }

    /// expresses a speed as a raw value in this unit per second
    pub fn velocity_from_uom(&self, value: Velocity) -> Result<f64, TurnsSoundError> {
        match self {
            LengthUnit::Meters => Ok(value.get::<velocity::meter_per_second>()),
            LengthUnit::Feet => Ok(value.get::<velocity::foot_per_second>()),
            LengthUnit::Undefined => Err(undefined_unit_error()),
        }
    }

    /// the unit name as it appears in distance phrase keys, such as `in_600_meters`
    pub fn phrase_suffix(&self) -> Option<&'static str> {
        match self {
            LengthUnit::Meters => Some("meters"),
            LengthUnit::Feet => Some("feet"),
            LengthUnit::Undefined => None,
        }
    }
}

fn undefined_unit_error() -> TurnsSoundError {
    TurnsSoundError::ConfigurationError(String::from(
        "length unit is undefined, select meters or feet first",
    ))
}

impl Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LengthUnit::Meters => "meters",
            LengthUnit::Feet => "feet",
            LengthUnit::Undefined => "undefined",
        };
        write!(f, "{s}")
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "meters" | "meter" | "m" => Ok(LengthUnit::Meters),
            "feet" | "foot" | "ft" => Ok(LengthUnit::Feet),
            "undefined" => Ok(LengthUnit::Undefined),
            other => Err(format!("unknown length unit '{other}'")),
        }
    }
}
