use super::TurnDirection;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// an upcoming maneuver as reported by the router. `index` is the position of the
/// maneuver along the route and identifies it while it is being approached.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
pub struct TurnItem {
    pub index: u32,
    pub direction: TurnDirection,
}

impl TurnItem {
    pub fn new(index: u32, direction: TurnDirection) -> Self {
        Self { index, direction }
    }
}
