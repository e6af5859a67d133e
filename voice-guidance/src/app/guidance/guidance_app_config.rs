use super::GuidanceAppError;
use config::Config;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use voice_guidance_core::{config::TurnsSoundConfig, model::unit::LengthUnit};

/// top-level configuration file of a voice guidance application.
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GuidanceAppConfig {
    /// whether turns are announced at all
    #[serde(default = "GuidanceAppConfig::default_enabled")]
    pub enabled: bool,
    /// unit system used for spoken distances
    #[serde(default = "GuidanceAppConfig::default_length_unit")]
    pub length_unit: LengthUnit,
    /// JSON file of phrase id to phrase text. relative paths are resolved
    /// against the directory of the configuration file.
    pub locale_file: String,
    #[serde(default)]
    pub turns_sound: TurnsSoundConfig,
}

impl GuidanceAppConfig {
    pub fn default_enabled() -> bool {
        true
    }

    pub fn default_length_unit() -> LengthUnit {
        LengthUnit::Meters
    }

    /// reads a configuration file in any format supported by the `config` crate,
    /// chosen from the file extension.
    pub fn from_file(config_file: &Path) -> Result<GuidanceAppConfig, GuidanceAppError> {
        let filename = config_file.to_str().ok_or_else(|| {
            GuidanceAppError::ConfigurationError(format!(
                "configuration path {config_file:?} is not valid unicode"
            ))
        })?;
        let mut config: GuidanceAppConfig = Config::builder()
            .add_source(config::File::with_name(filename))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| {
                GuidanceAppError::ConfigurationError(format!(
                    "failed to read config file '{filename}': {e}"
                ))
            })?;
        if let Some(parent) = config_file.parent() {
            config.locale_file = config
                .resolve_locale_file(parent)
                .to_string_lossy()
                .to_string();
        }
        log::debug!("guidance configuration read from {filename}: {config:?}");
        Ok(config)
    }

    pub fn resolve_locale_file(&self, base_dir: &Path) -> PathBuf {
        let locale_file = PathBuf::from(&self.locale_file);
        if locale_file.is_absolute() {
            locale_file
        } else {
            base_dir.join(locale_file)
        }
    }
}
