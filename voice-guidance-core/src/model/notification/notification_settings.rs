use crate::model::{unit::LengthUnit, TurnsSoundError};
use itertools::Itertools;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uom::si::f64::{Length, Velocity};
use uom::si::{length::meter, velocity::meter_per_second};

/// timing thresholds for the advance notification of a turn, expressed in a single
/// unit system.
///
/// the advance notification is spoken roughly `notification_time_seconds` before the
/// traveler reaches the turn, at a distance rounded to one of `sounded_distances_units`
/// so that the spoken number is a round one ("in 600 meters"), and never closer than
/// `min_notification_distance_units` nor farther than `max_notification_distance_units`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NotificationSettings {
    /// seconds before the turn at which the advance notification should be heard
    pub notification_time_seconds: f64,
    pub min_notification_distance_units: u32,
    pub max_notification_distance_units: u32,
    /// ascending distances which may be spoken in a notification
    pub sounded_distances_units: Vec<u32>,
    pub length_unit: LengthUnit,
}

impl NotificationSettings {
    pub fn new(
        notification_time_seconds: f64,
        min_notification_distance_units: u32,
        max_notification_distance_units: u32,
        sounded_distances_units: Vec<u32>,
        length_unit: LengthUnit,
    ) -> Self {
        Self {
            notification_time_seconds,
            min_notification_distance_units,
            max_notification_distance_units,
            sounded_distances_units,
            length_unit,
        }
    }

    pub fn default_meters() -> Self {
        Self::new(
            20.0,
            200,
            700,
            vec![100, 200, 300, 400, 500, 600, 700],
            LengthUnit::Meters,
        )
    }

    pub fn default_feet() -> Self {
        Self::new(
            20.0,
            500,
            2000,
            vec![200, 400, 600, 800, 1000, 1500, 2000],
            LengthUnit::Feet,
        )
    }

    /// checks the settings, naming the first rule which is broken
    pub fn validate(&self) -> Result<(), TurnsSoundError> {
        if !self.length_unit.is_defined() {
            return Err(TurnsSoundError::ConfigurationError(String::from(
                "notification settings have an undefined length unit",
            )));
        }
        if self.sounded_distances_units.is_empty() {
            return Err(TurnsSoundError::ConfigurationError(String::from(
                "notification settings have no sounded distances",
            )));
        }
        if let Some((prev, next)) = self
            .sounded_distances_units
            .iter()
            .tuple_windows()
            .find(|(prev, next)| prev >= next)
        {
            return Err(TurnsSoundError::ConfigurationError(format!(
                "sounded distances must be strictly increasing, found {prev} followed by {next}"
            )));
        }
        if self.min_notification_distance_units > self.max_notification_distance_units {
            return Err(TurnsSoundError::ConfigurationError(format!(
                "min notification distance {} is greater than max notification distance {}",
                self.min_notification_distance_units, self.max_notification_distance_units
            )));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn convert_speed_to_units(&self, speed: Velocity) -> Result<f64, TurnsSoundError> {
        self.length_unit.velocity_from_uom(speed)
    }

    pub fn convert_units_to_meters(&self, distance_units: f64) -> Result<Length, TurnsSoundError> {
        self.length_unit.to_uom(distance_units)
    }

    pub fn convert_meters_to_units(&self, distance: Length) -> Result<f64, TurnsSoundError> {
        self.length_unit.from_uom(distance)
    }

    /// the smallest sounded distance which is not less than `distance_units`. distances
    /// beyond the ladder round down to its largest entry.
    pub fn round_to_preset(&self, distance_units: f64) -> Result<u32, TurnsSoundError> {
        self.validate()?;
        self.round_validated(distance_units)
    }

    /// distance at which the advance notification should be spoken when traveling
    /// at `speed_units_per_second`.
    pub fn compute_turn_distance(
        &self,
        speed_units_per_second: f64,
    ) -> Result<u32, TurnsSoundError> {
        self.validate()?;
        let turn_distance = speed_units_per_second * self.notification_time_seconds;
        let rounded = self.round_validated(turn_distance)?;
        Ok(rounded.clamp(
            self.min_notification_distance_units,
            self.max_notification_distance_units,
        ))
    }

    /// distance from the turn, in meters, at which the advance notification should be
    /// heard when traveling at `speed`. unlike [`NotificationSettings::compute_turn_distance`]
    /// this is not rounded to a sounded distance, so it triggers the notification while
    /// the spoken number stays a round one.
    pub fn compute_turn_lead_distance(&self, speed: Velocity) -> Result<Length, TurnsSoundError> {
        self.validate()?;
        let min = self.convert_units_to_meters(f64::from(self.min_notification_distance_units))?;
        let max = self.convert_units_to_meters(f64::from(self.max_notification_distance_units))?;
        let lead = speed.get::<meter_per_second>() * self.notification_time_seconds;
        Ok(Length::new::<meter>(
            lead.max(min.get::<meter>()).min(max.get::<meter>()),
        ))
    }

    fn round_validated(&self, distance_units: f64) -> Result<u32, TurnsSoundError> {
        self.sounded_distances_units
            .iter()
            .find(|sounded| distance_units <= f64::from(**sounded))
            .or_else(|| self.sounded_distances_units.last())
            .copied()
            .ok_or_else(|| {
                TurnsSoundError::ConfigurationError(String::from(
                    "notification settings have no sounded distances",
                ))
            })
    }
}
