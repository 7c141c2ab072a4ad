//! Comparison table handler
//!
//! Serves a static CSV summary as JSON rows. No core logic; the only
//! subtlety is keeping "file missing" and "file unreadable" distinct.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use axum::extract::State;
use axum::Json;
use serde_json::{Map, Value};

use crate::{AppError, AppResult, AppState};

/// GET /get_comparison_data
pub async fn get_comparison_data(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Map<String, Value>>>> {
    let rows = load_comparison_csv(&state.config.comparison_csv)?;
    Ok(Json(rows))
}

/// Read the comparison CSV into one JSON object per row, headers as keys.
pub fn load_comparison_csv(path: &Path) -> Result<Vec<Map<String, Value>>, AppError> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            AppError::NotFound("Comparison data CSV missing.".to_string())
        } else {
            AppError::Internal(e.to_string())
        }
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let headers = reader
        .headers()
        .map_err(|e| AppError::Internal(e.to_string()))?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| AppError::Internal(e.to_string()))?;
        let mut row = Map::new();
        for (header, cell) in headers.iter().zip(record.iter()) {
            row.insert(header.to_string(), parse_cell(cell));
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Re-type a CSV cell: integers and floats become JSON numbers, blanks
/// become null, everything else stays a string.
fn parse_cell(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        if let Some(num) = serde_json::Number::from_f64(f) {
            return Value::Number(num);
        }
    }
    Value::String(trimmed.to_string())
}
