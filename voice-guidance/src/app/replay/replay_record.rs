use crate::app::guidance::GuidanceAppError;
use serde::{Deserialize, Serialize};
use voice_guidance_core::model::turn::{TurnDirection, TurnItem};

/// a row of a recorded trace: the upcoming turn and the distance to it at one
/// position update. an empty speed keeps the speed of the previous row.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReplayRecord {
    pub turn_index: u32,
    pub direction: String,
    pub exit_number: Option<u32>,
    pub distance_meters: f64,
    pub speed_meters_per_second: Option<f64>,
}

impl ReplayRecord {
    pub fn turn_item(&self) -> Result<TurnItem, GuidanceAppError> {
        let direction = TurnDirection::from_name(&self.direction, self.exit_number)
            .map_err(GuidanceAppError::TraceError)?;
        Ok(TurnItem::new(self.turn_index, direction))
    }
}
