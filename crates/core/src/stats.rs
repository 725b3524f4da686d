//! Aggregation over a filtered trip table.
//!
//! Each statistic is computed fresh from the table on every call and
//! returned as a plain struct; nothing here touches the terminal. All
//! "most popular" computations use the same stable mode: counts are
//! accumulated in insertion order and ties keep the value that appeared
//! first in the table's row order.

use indexmap::IndexMap;

use crate::records::TripTable;

/// Warning shown when no subscriber gender data exists for a selection.
pub const GENDER_WARNING: &str =
    "Subscriber gender data missing/unavailable for your selection";
/// Warning shown when no subscriber birth year data exists for a selection.
pub const BIRTH_YEAR_WARNING: &str =
    "Subscriber birth year data missing/unavailable for your selection";

/// Label used for subscriber rows with no recorded gender.
pub const UNKNOWN_GENDER: &str = "Unknown";

/// Percentage of `part` in `total`, zero-guarded.
pub fn pct(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}

/// Most frequent value in `values`; ties keep the value seen first.
fn stable_mode<I>(values: I) -> Option<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut best: Option<(String, usize)> = None;
    for (value, count) in counts {
        let replace = match &best {
            Some((_, best_count)) => count > *best_count,
            None => true,
        };
        if replace {
            best = Some((value, count));
        }
    }

    best
}

/// Ride count for a single hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourCount {
    pub hour: u32,
    pub rides: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RideStats {
    pub total_rides: usize,
    /// Hour with the most rides; `None` for an empty table.
    pub busiest_hour: Option<HourCount>,
    /// Hour with the fewest rides among hours that saw any; `None` for an
    /// empty table.
    pub quietest_hour: Option<HourCount>,
}

/// Counts rides and finds the busiest and quietest hours of the day.
///
/// Ties resolve to the lowest hour number: the histogram is scanned in
/// ascending hour order and only a strictly better count replaces the
/// current pick.
pub fn compute_ride_stats(table: &TripTable) -> RideStats {
    let mut by_hour = [0usize; 24];
    for trip in &table.rows {
        by_hour[trip.hour as usize] += 1;
    }

    let mut busiest: Option<HourCount> = None;
    let mut quietest: Option<HourCount> = None;

    for (hour, &rides) in by_hour.iter().enumerate() {
        if rides == 0 {
            continue;
        }
        let hour = hour as u32;

        if busiest.map_or(true, |current| rides > current.rides) {
            busiest = Some(HourCount { hour, rides });
        }
        if quietest.map_or(true, |current| rides < current.rides) {
            quietest = Some(HourCount { hour, rides });
        }
    }

    RideStats {
        total_rides: table.len(),
        busiest_hour: busiest,
        quietest_hour: quietest,
    }
}

/// A station (or route) with its ride count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationCount {
    pub name: String,
    pub rides: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    /// Stable mode of non-null start stations.
    pub popular_start: Option<StationCount>,
    /// Stable mode of non-null end stations.
    pub popular_end: Option<StationCount>,
    /// Stable mode of `"<start> to <end>"` pairs where both sides are
    /// non-null.
    pub popular_route: Option<StationCount>,
}

pub fn compute_station_stats(table: &TripTable) -> StationStats {
    let into_count = |(name, rides)| StationCount { name, rides };

    let popular_start = stable_mode(
        table
            .rows
            .iter()
            .filter_map(|trip| trip.start_station.clone()),
    )
    .map(into_count);

    let popular_end =
        stable_mode(table.rows.iter().filter_map(|trip| trip.end_station.clone())).map(into_count);

    // Row-wise pairing: a route only counts when the same row has both ends
    let popular_route = stable_mode(table.rows.iter().filter_map(|trip| {
        match (&trip.start_station, &trip.end_station) {
            (Some(start), Some(end)) => Some(format!("{start} to {end}")),
            _ => None,
        }
    }))
    .map(into_count);

    StationStats {
        popular_start,
        popular_end,
        popular_route,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub total_secs: f64,
    pub mean_secs: f64,
}

/// Sum and arithmetic mean of trip durations; `None` for an empty table.
pub fn compute_duration_stats(table: &TripTable) -> Option<DurationStats> {
    if table.is_empty() {
        return None;
    }

    let total_secs: f64 = table.rows.iter().map(|trip| trip.duration_secs).sum();

    Some(DurationStats {
        total_secs,
        mean_secs: total_secs / table.len() as f64,
    })
}

/// Renders a duration in seconds as `<H>h <M>m <S>s`, no field omitted.
///
/// Negative inputs format identically to their absolute value.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.abs().trunc() as u64;

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    format!("{hours}h {minutes}m {secs}s")
}

/// Ride count for one user-type value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCount {
    pub user_type: String,
    pub rides: usize,
}

/// Rider count for one gender label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderCount {
    pub gender: String,
    pub riders: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderBreakdown {
    /// Total subscriber rows; the denominator for gender percentages.
    pub subscriber_total: usize,
    /// Counts per gender label in descending count order, nulls under
    /// [`UNKNOWN_GENDER`].
    pub counts: Vec<GenderCount>,
}

/// A birth year annotated with the rider's age as of `current_year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearStat {
    pub year: i32,
    pub current_age: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: YearStat,
    pub latest: YearStat,
    pub most_common: YearStat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub total_rides: usize,
    /// Counts per user-type value in descending count order; ties keep
    /// first-encountered order.
    pub user_types: Vec<TypeCount>,
    /// `None` when the schema has no gender column or the selection has no
    /// subscriber rows; renderers show [`GENDER_WARNING`] instead.
    pub gender: Option<GenderBreakdown>,
    /// `None` when the schema has no birth year column or no subscriber row
    /// carries one; renderers show [`BIRTH_YEAR_WARNING`] instead.
    pub birth_years: Option<BirthYearStats>,
}

/// Computes the user-type, gender, and birth-year breakdowns.
///
/// `current_year` feeds the age annotations on the birth-year stats.
pub fn compute_user_stats(table: &TripTable, current_year: i32) -> UserStats {
    let mut type_counts: IndexMap<String, usize> = IndexMap::new();
    for trip in &table.rows {
        if let Some(user_type) = &trip.user_type {
            *type_counts.entry(user_type.clone()).or_insert(0) += 1;
        }
    }

    let mut user_types: Vec<TypeCount> = type_counts
        .into_iter()
        .map(|(user_type, rides)| TypeCount { user_type, rides })
        .collect();
    // Stable sort: equal counts keep first-encountered order
    user_types.sort_by(|a, b| b.rides.cmp(&a.rides));

    let gender = if table.has_gender {
        compute_gender_breakdown(table)
    } else {
        None
    };

    let birth_years = if table.has_birth_year {
        compute_birth_year_stats(table, current_year)
    } else {
        None
    };

    UserStats {
        total_rides: table.len(),
        user_types,
        gender,
        birth_years,
    }
}

fn compute_gender_breakdown(table: &TripTable) -> Option<GenderBreakdown> {
    let mut subscriber_total = 0usize;
    let mut gender_counts: IndexMap<String, usize> = IndexMap::new();

    for trip in &table.rows {
        if !trip.is_subscriber() {
            continue;
        }
        subscriber_total += 1;

        let label = trip
            .gender
            .clone()
            .unwrap_or_else(|| UNKNOWN_GENDER.to_string());
        *gender_counts.entry(label).or_insert(0) += 1;
    }

    if subscriber_total == 0 {
        return None;
    }

    let mut counts: Vec<GenderCount> = gender_counts
        .into_iter()
        .map(|(gender, riders)| GenderCount { gender, riders })
        .collect();
    counts.sort_by(|a, b| b.riders.cmp(&a.riders));

    Some(GenderBreakdown {
        subscriber_total,
        counts,
    })
}

fn compute_birth_year_stats(table: &TripTable, current_year: i32) -> Option<BirthYearStats> {
    let mut earliest: Option<i32> = None;
    let mut latest: Option<i32> = None;
    let mut year_counts: IndexMap<i32, usize> = IndexMap::new();

    for trip in &table.rows {
        if !trip.is_subscriber() {
            continue;
        }
        let Some(year) = trip.birth_year else {
            continue;
        };

        earliest = Some(earliest.map_or(year, |current| current.min(year)));
        latest = Some(latest.map_or(year, |current| current.max(year)));
        *year_counts.entry(year).or_insert(0) += 1;
    }

    let mut most_common: Option<(i32, usize)> = None;
    for (year, count) in year_counts {
        let replace = match most_common {
            Some((_, best_count)) => count > best_count,
            None => true,
        };
        if replace {
            most_common = Some((year, count));
        }
    }

    let annotate = |year: i32| YearStat {
        year,
        current_age: current_year - year,
    };

    match (earliest, latest, most_common) {
        (Some(earliest), Some(latest), Some((most_common, _))) => Some(BirthYearStats {
            earliest: annotate(earliest),
            latest: annotate(latest),
            most_common: annotate(most_common),
        }),
        _ => None,
    }
}
