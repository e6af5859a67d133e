use super::GuidanceState;
use crate::config::TurnsSoundConfig;
use crate::model::{
    notification::NotificationSettings,
    phrase::PhraseTable,
    turn::TurnItem,
    unit::LengthUnit,
    TurnsSoundError,
};
use uom::si::f64::{Length, Velocity};
use uom::si::{length::meter, velocity::meter_per_second};

/// a voice guidance session. fed the distance to the upcoming turn on every
/// position update, it decides whether the turn should be announced now.
///
/// each turn receives at most two notifications:
///   - an advance notification naming the distance and the maneuver, spoken once
///     the traveler is within the distance computed by the active
///     [`NotificationSettings`] for the current speed
///   - an imminent notification naming the maneuver alone, spoken right before
///     the turn
///
/// the notification progress is cleared whenever the router reports a turn with a
/// different index than the one being tracked.
#[derive(Debug, Clone)]
pub struct TurnsSound {
    enabled: bool,
    config: TurnsSoundConfig,
    length_unit: LengthUnit,
    speed: Velocity,
    state: GuidanceState,
    phrases: PhraseTable,
}

impl TurnsSound {
    /// builds a disabled session with no unit system and an empty locale.
    pub fn new(config: TurnsSoundConfig) -> Result<TurnsSound, TurnsSoundError> {
        config.timing.validate()?;
        Ok(TurnsSound::with_config(config))
    }

    fn with_config(config: TurnsSoundConfig) -> TurnsSound {
        TurnsSound {
            enabled: false,
            config,
            length_unit: LengthUnit::Undefined,
            speed: Velocity::new::<meter_per_second>(0.0),
            state: GuidanceState::Idle,
            phrases: PhraseTable::default(),
        }
    }

    pub fn enable(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_speed_meters_per_second(&mut self, speed_meters_per_second: f64) {
        let speed = if speed_meters_per_second >= 0.0 && speed_meters_per_second.is_finite() {
            speed_meters_per_second
        } else {
            log::warn!("ignoring invalid speed {speed_meters_per_second} m/s, using 0 m/s");
            0.0
        };
        self.speed = Velocity::new::<meter_per_second>(speed);
    }

    pub fn speed(&self) -> Velocity {
        self.speed
    }

    /// activates the notification settings for `unit`. on failure the previously
    /// active unit system stays in use.
    pub fn set_length_units(&mut self, unit: LengthUnit) -> Result<(), TurnsSoundError> {
        self.config.settings_for(unit)?.validate()?;
        log::info!("voice guidance distances set to {unit}");
        self.length_unit = unit;
        Ok(())
    }

    pub fn length_units(&self) -> LengthUnit {
        self.length_unit
    }

    /// replaces the locale with phrases read from a flat JSON object. on failure
    /// the previous locale stays in use.
    pub fn set_locale_with_json(&mut self, json: &str) -> Result<(), TurnsSoundError> {
        let phrases = PhraseTable::from_json_str(json)?;
        self.set_locale(phrases);
        Ok(())
    }

    pub fn set_locale(&mut self, phrases: PhraseTable) {
        if phrases.is_empty() {
            log::warn!("voice guidance locale has no phrases, turns will not be announced");
        } else {
            log::info!("voice guidance locale loaded with {} phrases", phrases.len());
        }
        self.phrases = phrases;
    }

    /// forgets the tracked turn. enabled flag, unit system and locale are kept.
    pub fn reset(&mut self) {
        self.state = GuidanceState::Idle;
    }

    pub fn state(&self) -> GuidanceState {
        self.state
    }

    /// the notifications to speak, in order, now that the traveler is
    /// `distance_to_turn_meters` away from `turn`.
    ///
    /// returns an empty list while disabled. fails with a configuration error,
    /// leaving the session untouched, when no unit system is active.
    pub fn generate_turn_sound(
        &mut self,
        turn: &TurnItem,
        distance_to_turn_meters: f64,
    ) -> Result<Vec<String>, TurnsSoundError> {
        if !self.enabled {
            return Ok(vec![]);
        }

        let settings = self.active_settings()?;
        let distance = Length::new::<meter>(distance_to_turn_meters.max(0.0));
        let speed_units = settings.convert_speed_to_units(self.speed)?;
        let turn_distance_units = settings.compute_turn_distance(speed_units)?;
        let distance_units = settings.convert_meters_to_units(distance)?;
        let sounded_distance_units =
            settings.round_to_preset(distance_units.min(f64::from(turn_distance_units)))?;
        let imminent_distance = self.config.timing.imminent_distance(self.speed);
        // the spoken number is rounded, the trigger is not
        let start_advance_distance =
            settings.compute_turn_lead_distance(self.speed)? + imminent_distance;

        let newly_tracked = self.track(turn.index);
        let mut notifications = vec![];

        if let GuidanceState::Approaching { turn_index } = self.state {
            if newly_tracked && distance < self.config.timing.min_distance_to_announce() {
                // the previous turn was just passed, there is no time for the advance notification
                log::debug!(
                    "turn {turn_index} first seen {:.0}m ahead, skipping advance notification",
                    distance.get::<meter>()
                );
                self.state = GuidanceState::AdvanceFired { turn_index };
            } else if distance < start_advance_distance {
                let notification = self.phrases.advance_notification(
                    &turn.direction,
                    sounded_distance_units,
                    self.length_unit,
                );
                push_notification(turn, notification, &mut notifications);
                log::debug!(
                    "turn {turn_index} advance notification at {:.0}m",
                    distance.get::<meter>()
                );
                self.state = GuidanceState::AdvanceFired { turn_index };
                return Ok(notifications);
            } else {
                return Ok(notifications);
            }
        }

        if let GuidanceState::AdvanceFired { turn_index } = self.state {
            if distance < imminent_distance {
                let notification = self.phrases.imminent_notification(&turn.direction);
                push_notification(turn, notification, &mut notifications);
                log::debug!(
                    "turn {turn_index} imminent notification at {:.0}m",
                    distance.get::<meter>()
                );
                self.state = GuidanceState::Done { turn_index };
            }
        }

        Ok(notifications)
    }

    fn active_settings(&self) -> Result<&NotificationSettings, TurnsSoundError> {
        self.config.settings_for(self.length_unit)
    }

    /// starts tracking `turn_index` if it is not the tracked turn already.
    /// returns true when tracking started with this call.
    fn track(&mut self, turn_index: u32) -> bool {
        if self.state.turn_index() == Some(turn_index) {
            return false;
        }
        log::debug!("approaching turn {turn_index}");
        self.state = GuidanceState::Approaching { turn_index };
        true
    }
}

impl Default for TurnsSound {
    fn default() -> Self {
        TurnsSound::with_config(TurnsSoundConfig::default())
    }
}

fn push_notification(
    turn: &TurnItem,
    notification: Result<Option<String>, TurnsSoundError>,
    notifications: &mut Vec<String>,
) {
    match notification {
        Ok(Some(text)) => notifications.push(text),
        Ok(None) => log::debug!("turn {} ({}) is not announced", turn.index, turn.direction),
        Err(e) => log::warn!("skipping notification for turn {}: {e}", turn.index),
    }
}
