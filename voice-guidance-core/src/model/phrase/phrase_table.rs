use crate::model::{turn::TurnDirection, unit::LengthUnit, TurnsSoundError};
use std::collections::HashMap;

/// locale text for announcements, keyed by semantic phrase ids such as
/// `in_600_meters` or `make_a_right_turn`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhraseTable {
    phrases: HashMap<String, String>,
}

impl PhraseTable {
    pub fn new(phrases: HashMap<String, String>) -> Self {
        Self { phrases }
    }

    /// reads a flat JSON object of phrase id to phrase text
    pub fn from_json_str(json: &str) -> Result<Self, TurnsSoundError> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(|e| {
            TurnsSoundError::LocaleLoadError(format!("locale is not valid JSON: {e}"))
        })?;
        PhraseTable::try_from(&value)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.phrases.get(key).map(String::as_str)
    }

    pub fn distance_key(distance_units: u32, unit: LengthUnit) -> Option<String> {
        unit.phrase_suffix()
            .map(|suffix| format!("in_{distance_units}_{suffix}"))
    }

    pub fn exit_key(exit_number: u32) -> String {
        format!("take_the_{exit_number}_exit")
    }

    pub fn distance_phrase(&self, distance_units: u32, unit: LengthUnit) -> Option<&str> {
        Self::distance_key(distance_units, unit).and_then(|key| self.get(&key))
    }

    /// text naming the maneuver, or None for maneuvers which are never spoken.
    /// roundabout maneuvers are followed by the exit phrase when the locale has one.
    pub fn maneuver_phrase(
        &self,
        direction: &TurnDirection,
    ) -> Result<Option<String>, TurnsSoundError> {
        let Some(text_id) = direction.text_id() else {
            return Ok(None);
        };
        let maneuver = self
            .get(text_id)
            .ok_or_else(|| TurnsSoundError::MissingPhraseError(text_id.to_string()))?;
        let exit = direction
            .exit_number()
            .and_then(|exit_number| self.get(&Self::exit_key(exit_number)));
        match exit {
            Some(exit) => Ok(Some(format!("{maneuver} {exit}"))),
            None => Ok(Some(maneuver.to_string())),
        }
    }

    /// "<distance> <maneuver>", or the maneuver alone when the locale has no phrase
    /// for the distance.
    pub fn advance_notification(
        &self,
        direction: &TurnDirection,
        distance_units: u32,
        unit: LengthUnit,
    ) -> Result<Option<String>, TurnsSoundError> {
        let Some(maneuver) = self.maneuver_phrase(direction)? else {
            return Ok(None);
        };
        match self.distance_phrase(distance_units, unit) {
            Some(distance) => Ok(Some(format!("{distance} {maneuver}"))),
            None => {
                log::debug!(
                    "locale has no phrase for {distance_units} {unit}, announcing maneuver only"
                );
                Ok(Some(maneuver))
            }
        }
    }

    pub fn imminent_notification(
        &self,
        direction: &TurnDirection,
    ) -> Result<Option<String>, TurnsSoundError> {
        self.maneuver_phrase(direction)
    }
}

impl TryFrom<&serde_json::Value> for PhraseTable {
    type Error = TurnsSoundError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        let obj = value.as_object().ok_or_else(|| {
            TurnsSoundError::LocaleLoadError(String::from("locale must be a JSON object"))
        })?;
        let phrases = obj
            .iter()
            .map(|(key, phrase)| match phrase.as_str() {
                Some(text) => Ok((key.clone(), text.to_string())),
                None => Err(TurnsSoundError::LocaleLoadError(format!(
                    "phrase '{key}' is not a string: {phrase}"
                ))),
            })
            .collect::<Result<HashMap<_, _>, _>>()?;
        Ok(PhraseTable::new(phrases))
    }
}
