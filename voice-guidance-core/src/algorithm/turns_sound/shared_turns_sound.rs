use super::{GuidanceState, TurnsSound};
use crate::model::{phrase::PhraseTable, turn::TurnItem, unit::LengthUnit, TurnsSoundError};
use std::sync::{Arc, Mutex, MutexGuard};

/// a [`TurnsSound`] session which may be driven from several threads. every
/// operation holds the session lock for its whole duration, so a locale or unit
/// change is never observed half-applied by [`SharedTurnsSound::generate_turn_sound`].
#[derive(Debug, Clone, Default)]
pub struct SharedTurnsSound {
    session: Arc<Mutex<TurnsSound>>,
}

impl SharedTurnsSound {
    pub fn new(turns_sound: TurnsSound) -> Self {
        Self {
            session: Arc::new(Mutex::new(turns_sound)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, TurnsSound>, TurnsSoundError> {
        self.session.lock().map_err(|e| {
            TurnsSoundError::InternalError(format!("voice guidance session lock poisoned: {e}"))
        })
    }

    pub fn generate_turn_sound(
        &self,
        turn: &TurnItem,
        distance_to_turn_meters: f64,
    ) -> Result<Vec<String>, TurnsSoundError> {
        self.lock()?.generate_turn_sound(turn, distance_to_turn_meters)
    }

    pub fn enable(&self, enabled: bool) -> Result<(), TurnsSoundError> {
        self.lock()?.enable(enabled);
        Ok(())
    }

    pub fn is_enabled(&self) -> Result<bool, TurnsSoundError> {
        Ok(self.lock()?.is_enabled())
    }

    pub fn set_speed_meters_per_second(&self, speed: f64) -> Result<(), TurnsSoundError> {
        self.lock()?.set_speed_meters_per_second(speed);
        Ok(())
    }

    pub fn set_length_units(&self, unit: LengthUnit) -> Result<(), TurnsSoundError> {
        self.lock()?.set_length_units(unit)
    }

    pub fn set_locale_with_json(&self, json: &str) -> Result<(), TurnsSoundError> {
        // parse outside the lock, only the swap needs exclusive access
        let phrases = PhraseTable::from_json_str(json)?;
        self.lock()?.set_locale(phrases);
        Ok(())
    }

    pub fn reset(&self) -> Result<(), TurnsSoundError> {
        self.lock()?.reset();
        Ok(())
    }

    pub fn state(&self) -> Result<GuidanceState, TurnsSoundError> {
        Ok(self.lock()?.state())
    }
}
