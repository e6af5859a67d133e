use serde::Serialize;

/// notifications spoken at one row of a replayed trace
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReplayOutput {
    /// zero-based row of the trace, header excluded
    pub row: usize,
    pub turn_index: u32,
    pub distance_meters: f64,
    pub notifications: Vec<String>,
}
