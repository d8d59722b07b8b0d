//! Tabular report of the workout log.

use crate::models::{UserProfile, WorkoutEntry};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write report row: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to finish report: {0}")]
    Flush(#[from] csv::IntoInnerError<csv::Writer<Vec<u8>>>),
}

const HEADER: [&str; 8] = [
    "name",
    "registration_id",
    "category",
    "exercise",
    "duration_minutes",
    "calories",
    "date",
    "time",
];

pub fn render_csv<'a>(
    entries: impl IntoIterator<Item = &'a WorkoutEntry>,
    profile: Option<&UserProfile>,
) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;

    let name = profile.map(|p| p.name.as_str()).unwrap_or_default();
    let registration_id = profile.map(|p| p.registration_id.as_str()).unwrap_or_default();

    let mut rows = 0usize;
    for entry in entries {
        let calories = entry
            .calories()
            .map(|kcal| format!("{kcal:.1}"))
            .unwrap_or_default();
        let duration = entry.duration_minutes().to_string();
        let date = entry.timestamp().format("%Y-%m-%d").to_string();
        let time = entry.timestamp().format("%H:%M:%S").to_string();
        writer.write_record([
            name,
            registration_id,
            entry.category().label(),
            entry.exercise(),
            duration.as_str(),
            calories.as_str(),
            date.as_str(),
            time.as_str(),
        ])?;
        rows += 1;
    }

    let bytes = writer.into_inner()?;
    debug!(rows, bytes = bytes.len(), "workout report generated");
    Ok(bytes)
}
