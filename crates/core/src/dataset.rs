//! Dataset loading and filtering.
//!
//! This module reads a city's CSV export into a [`TripTable`], deriving the
//! month/weekday/hour fields from each start time and applying the active
//! month/day filters. Loads are all-or-nothing: one unparseable record
//! fails the whole load, so callers never see a partial table.

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDateTime, Timelike};
use log::{debug, info};

use crate::error::{Error, Result};
use crate::filters::{City, FilterSelection};
use crate::records::{RawTrip, TripRecord, TripTable};

/// Timestamp layout used by every city export.
const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Columns every city export must carry.
const REQUIRED_COLUMNS: [&str; 5] = [
    "Start Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];

/// Demographic column present only for cities that track subscriber gender.
pub const GENDER_COLUMN: &str = "Gender";
/// Demographic column present only for cities that track subscriber birth year.
pub const BIRTH_YEAR_COLUMN: &str = "Birth Year";

/// Resolves the dataset file for a city under the data directory.
pub fn dataset_path(data_dir: &str, city: City) -> PathBuf {
    Path::new(data_dir).join(city.file_name())
}

/// Loads a city's trips, derives time parts, and applies the selection's
/// month/day filters.
///
/// Every record's start time is parsed before filtering, so a malformed
/// timestamp anywhere in the file fails the load even when the row would
/// have been filtered out.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the dataset file is absent, and
/// [`Error::InvalidData`] for a missing required column or any record that
/// fails to parse. Both leave the session restartable.
pub fn load_trips(data_dir: &str, selection: &FilterSelection) -> Result<TripTable> {
    let path = dataset_path(data_dir, selection.city);
    debug!("Dataset path: `{}`", path.display());

    if !path.exists() {
        return Err(Error::not_found(
            selection.city.display_name(),
            path.display().to_string(),
        ));
    }

    let mut reader = csv::Reader::from_path(&path).map_err(|e| csv_error(&path, e))?;

    let header_record = reader.headers().map_err(|e| csv_error(&path, e))?.clone();
    let headers: Vec<String> = header_record.iter().map(str::to_string).collect();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(Error::invalid_data(
                path.display().to_string(),
                format!("missing required column `{column}`"),
            ));
        }
    }

    let has_gender = headers.iter().any(|header| header == GENDER_COLUMN);
    let has_birth_year = headers.iter().any(|header| header == BIRTH_YEAR_COLUMN);

    let mut total_records = 0usize;
    let mut rows = Vec::new();

    for (index, result) in reader.records().enumerate() {
        // Header is line 1, so records start at line 2
        let line = index + 2;
        let record = result.map_err(|e| csv_error(&path, e))?;

        let parsed: RawTrip = record.deserialize(Some(&header_record)).map_err(|e| {
            Error::invalid_data(path.display().to_string(), format!("line {line}: {e}"))
        })?;

        let start_time = NaiveDateTime::parse_from_str(&parsed.start_time, START_TIME_FORMAT)
            .map_err(|e| {
                Error::invalid_data(
                    path.display().to_string(),
                    format!(
                        "line {line}: unparseable start time `{}`: {e}",
                        parsed.start_time
                    ),
                )
            })?;

        total_records += 1;

        let trip = TripRecord {
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
            start_time,
            duration_secs: parsed.trip_duration,
            start_station: parsed.start_station,
            end_station: parsed.end_station,
            user_type: parsed.user_type,
            gender: parsed.gender,
            birth_year: parsed.birth_year.map(|year| year as i32),
            raw: record.iter().map(str::to_string).collect(),
        };

        if let Some(month) = selection.month {
            if trip.month != month.number() {
                continue;
            }
        }

        if let Some(day) = selection.day {
            if trip.weekday != day {
                continue;
            }
        }

        rows.push(trip);
    }

    info!(
        "Loaded {} trips from `{}`, {} after filtering",
        total_records,
        path.display(),
        rows.len()
    );

    Ok(TripTable {
        headers,
        rows,
        has_gender,
        has_birth_year,
    })
}

fn csv_error(path: &Path, original: csv::Error) -> Error {
    if original.is_io_error() {
        match original.into_kind() {
            csv::ErrorKind::Io(io) => {
                Error::io_error("dataset", path.display().to_string(), io)
            }
            _ => unreachable!(), // is_io_error guarantees the Io kind
        }
    } else {
        Error::invalid_data(path.display().to_string(), original.to_string())
    }
}
