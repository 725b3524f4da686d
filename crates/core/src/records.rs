//! Trip record and table types.
//!
//! A [`TripTable`] is the immutable-after-load product of the dataset
//! loader: parsed rows with their derived time parts, the original column
//! headers, and flags for the demographic columns that only some city
//! exports carry.

use chrono::{NaiveDateTime, Weekday};
use serde::Deserialize;

/// Number of rows shown per page of the raw-data view.
pub const RAW_DATA_PAGE_SIZE: usize = 5;

/// User type carrying optional demographic attributes.
pub const SUBSCRIBER_USER_TYPE: &str = "Subscriber";

/// One dataset row as it appears on disk, resolved by header name.
///
/// `Gender` and `Birth Year` default to `None` when the column is absent
/// entirely; empty cells also read as `None`.
#[derive(Debug, Deserialize)]
pub(crate) struct RawTrip {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub start_station: Option<String>,
    #[serde(rename = "End Station")]
    pub end_station: Option<String>,
    #[serde(rename = "User Type")]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

/// One bicycle rental event, parsed and enriched with derived time parts.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    /// Trip duration in seconds. Always present in the exports.
    pub duration_secs: f64,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    /// Subscriber-only attribute; `None` where untracked or unset.
    pub gender: Option<String>,
    /// Subscriber-only attribute; `None` where untracked or unset.
    pub birth_year: Option<i32>,
    /// 1-based month derived from `start_time` at load.
    pub month: u32,
    /// Weekday derived from `start_time` at load.
    pub weekday: Weekday,
    /// Hour of day (0-23) derived from `start_time` at load.
    pub hour: u32,
    /// Original CSV cells in file column order, kept for the raw-data view.
    pub raw: Vec<String>,
}

impl TripRecord {
    pub fn is_subscriber(&self) -> bool {
        matches!(&self.user_type, Some(user_type) if user_type == SUBSCRIBER_USER_TYPE)
    }
}

/// An ordered collection of trips sharing one schema.
///
/// Invariant: every row satisfies the month/day predicate the table was
/// loaded under.
#[derive(Debug, Clone, Default)]
pub struct TripTable {
    /// Original column headers, in file order.
    pub headers: Vec<String>,
    pub rows: Vec<TripRecord>,
    /// Whether the source file carries a `Gender` column.
    pub has_gender: bool,
    /// Whether the source file carries a `Birth Year` column.
    pub has_birth_year: bool,
}

impl TripTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Fixed-size pages of rows for the raw-data view.
    pub fn pages(&self) -> std::slice::Chunks<'_, TripRecord> {
        self.rows.chunks(RAW_DATA_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn trip(hour: u32) -> TripRecord {
        let start_time = NaiveDate::from_ymd_opt(2017, 6, 5)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        TripRecord {
            start_time,
            duration_secs: 600.0,
            start_station: None,
            end_station: None,
            user_type: Some("Customer".to_string()),
            gender: None,
            birth_year: None,
            month: 6,
            weekday: Weekday::Mon,
            hour,
            raw: vec![],
        }
    }

    #[test]
    fn test_pages_chunk_by_five() {
        let table = TripTable {
            headers: vec![],
            rows: (0..12).map(|i| trip(i % 24)).collect(),
            has_gender: false,
            has_birth_year: false,
        };

        let pages: Vec<_> = table.pages().collect();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].len(), 5);
        assert_eq!(pages[1].len(), 5);
        assert_eq!(pages[2].len(), 2);
    }

    #[test]
    fn test_pages_of_empty_table() {
        let table = TripTable::default();
        assert!(table.is_empty());
        assert_eq!(table.pages().count(), 0);
    }

    #[test]
    fn test_is_subscriber() {
        let mut record = trip(8);
        assert!(!record.is_subscriber());

        record.user_type = Some(SUBSCRIBER_USER_TYPE.to_string());
        assert!(record.is_subscriber());

        record.user_type = None;
        assert!(!record.is_subscriber());
    }
}
