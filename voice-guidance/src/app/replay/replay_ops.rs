use super::{ReplayOutput, ReplayRecord};
use crate::app::guidance::GuidanceAppError;
use std::path::Path;
use voice_guidance_core::algorithm::turns_sound::TurnsSound;

/// reads a CSV trace with a header row
pub fn read_trace(trace_file: &Path) -> Result<Vec<ReplayRecord>, GuidanceAppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(trace_file)
        .map_err(|e| {
            GuidanceAppError::TraceError(format!("failed to open trace {trace_file:?}: {e}"))
        })?;
    reader
        .deserialize::<ReplayRecord>()
        .enumerate()
        .map(|(row, record)| {
            record.map_err(|e| {
                GuidanceAppError::TraceError(format!(
                    "failed to read row {row} of trace {trace_file:?}: {e}"
                ))
            })
        })
        .collect()
}

/// feeds each record to the session in order, keeping the rows where something
/// was announced.
pub fn replay_records(
    turns_sound: &mut TurnsSound,
    records: &[ReplayRecord],
) -> Result<Vec<ReplayOutput>, GuidanceAppError> {
    let mut outputs = vec![];
    for (row, record) in records.iter().enumerate() {
        if let Some(speed) = record.speed_meters_per_second {
            turns_sound.set_speed_meters_per_second(speed);
        }
        let turn = record.turn_item()?;
        let notifications = turns_sound.generate_turn_sound(&turn, record.distance_meters)?;
        if !notifications.is_empty() {
            outputs.push(ReplayOutput {
                row,
                turn_index: turn.index,
                distance_meters: record.distance_meters,
                notifications,
            });
        }
    }
    Ok(outputs)
}
