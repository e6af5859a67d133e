use super::{GuidanceAppConfig, GuidanceAppError};
use crate::app::replay::{replay_ops, ReplayOutput, ReplayRecord};
use std::path::Path;
use voice_guidance_core::algorithm::turns_sound::TurnsSound;
use voice_guidance_core::model::unit::LengthUnit;

/// a voice guidance session built from a configuration file, along with the
/// means to replay recorded traces through it.
pub struct GuidanceApp {
    pub turns_sound: TurnsSound,
}

impl GuidanceApp {
    pub fn set_length_unit(&mut self, unit: LengthUnit) -> Result<(), GuidanceAppError> {
        self.turns_sound.set_length_units(unit)?;
        Ok(())
    }

    /// replays a CSV trace file, returning the rows which produced notifications
    pub fn replay(&mut self, trace_file: &Path) -> Result<Vec<ReplayOutput>, GuidanceAppError> {
        let records = replay_ops::read_trace(trace_file)?;
        log::info!("replaying {} trace rows from {trace_file:?}", records.len());
        replay_ops::replay_records(&mut self.turns_sound, &records)
    }

    pub fn replay_records(
        &mut self,
        records: &[ReplayRecord],
    ) -> Result<Vec<ReplayOutput>, GuidanceAppError> {
        replay_ops::replay_records(&mut self.turns_sound, records)
    }
}

impl TryFrom<&GuidanceAppConfig> for GuidanceApp {
    type Error = GuidanceAppError;

    fn try_from(config: &GuidanceAppConfig) -> Result<Self, Self::Error> {
        let locale_json = std::fs::read_to_string(&config.locale_file).map_err(|e| {
            GuidanceAppError::ConfigurationError(format!(
                "failed to read locale file '{}': {e}",
                config.locale_file
            ))
        })?;

        let mut turns_sound = TurnsSound::new(config.turns_sound.clone())?;
        turns_sound.set_length_units(config.length_unit)?;
        turns_sound.set_locale_with_json(&locale_json)?;
        turns_sound.enable(config.enabled);
        turns_sound.reset();

        Ok(GuidanceApp { turns_sound })
    }
}

impl TryFrom<&Path> for GuidanceApp {
    type Error = GuidanceAppError;

    fn try_from(config_file: &Path) -> Result<Self, Self::Error> {
        let config = GuidanceAppConfig::from_file(config_file)?;
        GuidanceApp::try_from(&config)
    }
}
