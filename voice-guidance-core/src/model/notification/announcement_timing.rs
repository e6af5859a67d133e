use crate::model::TurnsSoundError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uom::si::f64::{Length, Velocity};
use uom::si::{length::meter, velocity::meter_per_second};

/// distances, in meters regardless of the spoken unit system, which account for
/// the time the speech engine needs to start up and speak.
///
/// - `start_before_seconds`: an announcement is started this far ahead of where it
///   should be heard, kept between `min_start_before_meters` and `max_start_before_meters`.
///   this same distance is where the imminent notification of a turn is spoken, so the
///   min keeps it reachable when the traveler is stopped.
/// - `min_distance_to_announce_meters`: a turn first seen closer than this is too near
///   for an advance notification; only the imminent one is spoken.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AnnouncementTiming {
    #[serde(default = "AnnouncementTiming::default_start_before_seconds")]
    pub start_before_seconds: f64,
    #[serde(default = "AnnouncementTiming::default_min_start_before_meters")]
    pub min_start_before_meters: f64,
    #[serde(default = "AnnouncementTiming::default_max_start_before_meters")]
    pub max_start_before_meters: f64,
    #[serde(default = "AnnouncementTiming::default_min_distance_to_announce_meters")]
    pub min_distance_to_announce_meters: f64,
}

impl AnnouncementTiming {
    pub fn default_start_before_seconds() -> f64 {
        5.0
    }
    pub fn default_min_start_before_meters() -> f64 {
        10.0
    }
    pub fn default_max_start_before_meters() -> f64 {
        100.0
    }
    pub fn default_min_distance_to_announce_meters() -> f64 {
        100.0
    }

    pub fn validate(&self) -> Result<(), TurnsSoundError> {
        let fields = [
            ("start_before_seconds", self.start_before_seconds),
            ("min_start_before_meters", self.min_start_before_meters),
            ("max_start_before_meters", self.max_start_before_meters),
            (
                "min_distance_to_announce_meters",
                self.min_distance_to_announce_meters,
            ),
        ];
        if let Some((name, value)) = fields
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(TurnsSoundError::ConfigurationError(format!(
                "announcement timing '{name}' must be a non-negative number, found {value}"
            )));
        }
        if self.min_start_before_meters > self.max_start_before_meters {
            return Err(TurnsSoundError::ConfigurationError(format!(
                "announcement timing min start before {}m is greater than max start before {}m",
                self.min_start_before_meters, self.max_start_before_meters
            )));
        }
        Ok(())
    }

    /// distance to the turn below which the imminent notification is spoken
    pub fn imminent_distance(&self, speed: Velocity) -> Length {
        let meters = speed.get::<meter_per_second>() * self.start_before_seconds;
        Length::new::<meter>(
            meters
                .min(self.max_start_before_meters)
                .max(self.min_start_before_meters),
        )
    }

    pub fn min_distance_to_announce(&self) -> Length {
        Length::new::<meter>(self.min_distance_to_announce_meters)
    }
}

impl Default for AnnouncementTiming {
    fn default() -> Self {
        Self {
            start_before_seconds: Self::default_start_before_seconds(),
            min_start_before_meters: Self::default_min_start_before_meters(),
            max_start_before_meters: Self::default_max_start_before_meters(),
            min_distance_to_announce_meters: Self::default_min_distance_to_announce_meters(),
        }
    }
}
