//! CSV export mechanics.
//!
//! The collaborator that runs the charts decides what goes into an export;
//! this module only assembles fitness-over-iteration series into a
//! comma-separated table and writes finished blobs to disk.

use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::{BufWriter, Write as IoWrite};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OnionError, OnionResult};

/// One labeled fitness trace, indexed by iteration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FitnessSeries {
    /// Legend label for the trace.
    pub label: String,
    /// Fitness value per recorded iteration.
    pub data: Vec<f64>,
}

impl FitnessSeries {
    /// Create a new series.
    #[must_use]
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data,
        }
    }
}

/// Assemble fitness series into a CSV table.
///
/// Header is `iteration` followed by one column per series label; one row
/// per iteration index up to the longest series, with blank cells where a
/// shorter series has no value.
#[must_use]
pub fn series_to_csv(series: &[FitnessSeries]) -> String {
    let mut out = String::from("iteration");
    for s in series {
        let _ = write!(out, ",{}", s.label);
    }
    out.push('\n');

    let rows = series.iter().map(|s| s.data.len()).max().unwrap_or(0);
    for row in 0..rows {
        let _ = write!(out, "{row}");
        for s in series {
            match s.data.get(row) {
                Some(value) => {
                    let _ = write!(out, ",{value}");
                }
                None => out.push(','),
            }
        }
        out.push('\n');
    }

    out
}

/// Write an already-assembled CSV blob to a file.
///
/// # Errors
///
/// Returns error if file creation, writing, or flushing fails.
pub fn save_csv<P: AsRef<Path>>(content: &str, path: P) -> OnionResult<()> {
    let file = File::create(path.as_ref())
        .map_err(|e| OnionError::io(format!("failed to create file: {e}")))?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(content.as_bytes())
        .map_err(|e| OnionError::io(format!("write failed: {e}")))?;
    writer
        .flush()
        .map_err(|e| OnionError::io(format!("flush failed: {e}")))?;

    Ok(())
}
