use crate::model::{
    notification::{AnnouncementTiming, NotificationSettings},
    unit::LengthUnit,
    TurnsSoundError,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// notification settings for each supported unit system along with the
/// unit-independent announcement timing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TurnsSoundConfig {
    #[serde(default = "NotificationSettings::default_meters")]
    pub meters: NotificationSettings,
    #[serde(default = "NotificationSettings::default_feet")]
    pub feet: NotificationSettings,
    #[serde(default)]
    pub timing: AnnouncementTiming,
}

impl TurnsSoundConfig {
    /// the settings used when announcing in `unit`
    pub fn settings_for(&self, unit: LengthUnit) -> Result<&NotificationSettings, TurnsSoundError> {
        let settings = match unit {
            LengthUnit::Meters => &self.meters,
            LengthUnit::Feet => &self.feet,
            LengthUnit::Undefined => {
                return Err(TurnsSoundError::ConfigurationError(String::from(
                    "no notification settings exist for an undefined length unit",
                )))
            }
        };
        if settings.length_unit != unit {
            return Err(TurnsSoundError::ConfigurationError(format!(
                "notification settings configured for {unit} are expressed in {}",
                settings.length_unit
            )));
        }
        Ok(settings)
    }
}

impl Default for TurnsSoundConfig {
    fn default() -> Self {
        Self {
            meters: NotificationSettings::default_meters(),
            feet: NotificationSettings::default_feet(),
            timing: AnnouncementTiming::default(),
        }
    }
}
