use serde::Serialize;

/// progress of the notifications for the turn currently being approached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GuidanceState {
    /// no turn is tracked
    #[default]
    Idle,
    /// tracking a turn, nothing has been announced for it
    Approaching { turn_index: u32 },
    /// the advance notification was spoken, or skipped because the turn was
    /// first seen too close to announce it
    AdvanceFired { turn_index: u32 },
    /// the imminent notification was spoken, nothing more is said for this turn
    Done { turn_index: u32 },
}

impl GuidanceState {
    pub fn turn_index(&self) -> Option<u32> {
        match self {
            GuidanceState::Idle => None,
            GuidanceState::Approaching { turn_index }
            | GuidanceState::AdvanceFired { turn_index }
            | GuidanceState::Done { turn_index } => Some(*turn_index),
        }
    }

    pub fn advance_fired(&self) -> bool {
        matches!(
            self,
            GuidanceState::AdvanceFired { .. } | GuidanceState::Done { .. }
        )
    }

    pub fn imminent_fired(&self) -> bool {
        matches!(self, GuidanceState::Done { .. })
    }
}
