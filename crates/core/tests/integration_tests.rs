//! Integration tests for bikeshare-core
//!
//! These tests verify that the core functionality works together correctly
//! by running complete load-and-aggregate sessions end-to-end.

use bikeshare_core::dataset::load_trips;
use bikeshare_core::error::Error;
use bikeshare_core::filters::{parse_day_filter, parse_month_filter, City, FilterSelection};
use bikeshare_core::stats::{
    compute_duration_stats, compute_ride_stats, compute_station_stats, compute_user_stats,
    format_duration,
};
use std::io::Write;
use tempfile::TempDir;

const NEW_YORK_CSV: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-01-02 08:05:00,2017-01-02 08:25:00,1200,Broadway,Wall St,Subscriber,Male,1980.0
2017-01-02 08:40:00,2017-01-02 08:50:00,600,Broadway,Wall St,Subscriber,Female,1992.0
2017-01-03 17:15:00,2017-01-03 17:45:00,1800,Wall St,Broadway,Customer,,
2017-02-06 08:20:00,2017-02-06 08:35:00,900,Broadway,Canal St,Subscriber,Female,1992.0
2017-06-09 22:05:00,2017-06-09 22:30:00,1500,Canal St,Broadway,Customer,,
";

fn write_new_york(dir: &TempDir) -> String {
    let path = dir.path().join("new_york_city.csv");
    let mut file = std::fs::File::create(path).unwrap();
    write!(file, "{NEW_YORK_CSV}").unwrap();
    dir.path().to_str().unwrap().to_string()
}

/// A full session: parse filters from user-style input, load, aggregate
#[test]
fn test_complete_report_session() {
    let dir = TempDir::new().unwrap();
    let data_dir = write_new_york(&dir);

    let selection = FilterSelection::new(
        City::parse("New York").unwrap(),
        parse_month_filter("all").unwrap(),
        parse_day_filter("all").unwrap(),
    );
    assert_eq!(
        selection.description(),
        "City: New York | Month: All | Day: All"
    );

    let table = load_trips(&data_dir, &selection).unwrap();
    assert_eq!(table.len(), 5);

    let rides = compute_ride_stats(&table);
    assert_eq!(rides.total_rides, 5);
    assert_eq!(rides.busiest_hour.unwrap().hour, 8);
    assert_eq!(rides.busiest_hour.unwrap().rides, 3);
    // 17 and 22 both saw one ride; the lower hour wins the tie
    assert_eq!(rides.quietest_hour.unwrap().hour, 17);

    let stations = compute_station_stats(&table);
    assert_eq!(stations.popular_start.unwrap().name, "Broadway");
    assert_eq!(stations.popular_end.unwrap().name, "Wall St");
    let route = stations.popular_route.unwrap();
    assert_eq!(route.name, "Broadway to Wall St");
    assert_eq!(route.rides, 2);

    let durations = compute_duration_stats(&table).unwrap();
    assert_eq!(durations.total_secs, 6000.0);
    assert_eq!(durations.mean_secs, 1200.0);
    assert_eq!(format_duration(durations.total_secs), "1h 40m 0s");

    let users = compute_user_stats(&table, 2017);
    assert_eq!(users.user_types[0].user_type, "Subscriber");
    assert_eq!(users.user_types[0].rides, 3);
    assert_eq!(users.user_types[1].rides, 2);

    let gender = users.gender.unwrap();
    assert_eq!(gender.subscriber_total, 3);
    assert_eq!(gender.counts[0].gender, "Female");

    let birth_years = users.birth_years.unwrap();
    assert_eq!(birth_years.earliest.year, 1980);
    assert_eq!(birth_years.earliest.current_age, 37);
    assert_eq!(birth_years.most_common.year, 1992);
}

/// Filtering by month restricts to matching rows; "all" is a no-op
#[test]
fn test_month_filter_against_unfiltered_load() {
    let dir = TempDir::new().unwrap();
    let data_dir = write_new_york(&dir);

    let unfiltered = load_trips(
        &data_dir,
        &FilterSelection::new(City::NewYork, None, None),
    )
    .unwrap();

    let filtered = load_trips(
        &data_dir,
        &FilterSelection::new(City::NewYork, parse_month_filter("january").unwrap(), None),
    )
    .unwrap();

    assert_eq!(unfiltered.len(), 5);
    assert_eq!(filtered.len(), 3);
    assert!(filtered.rows.iter().all(|trip| trip.month == 1));
    assert_eq!(filtered.rows, unfiltered.rows[..3]);
}

/// A missing dataset is a NotFound outcome and no aggregation runs
#[test]
fn test_missing_city_dataset_is_not_found() {
    let dir = TempDir::new().unwrap();
    let data_dir = write_new_york(&dir);

    let selection = FilterSelection::new(City::Chicago, None, None);
    let result = load_trips(&data_dir, &selection);

    match result {
        Err(error) => {
            assert!(matches!(error, Error::NotFound { .. }));
            assert!(error.is_recoverable_load_failure());
        }
        Ok(_) => panic!("expected NotFound for a missing dataset"),
    }
}

/// A filter combination matching nothing yields an empty table, and every
/// aggregator degrades to its explicit no-data result
#[test]
fn test_empty_selection_policy() {
    let dir = TempDir::new().unwrap();
    let data_dir = write_new_york(&dir);

    // No June rides happened on a Monday in the fixture
    let selection = FilterSelection::new(
        City::NewYork,
        parse_month_filter("june").unwrap(),
        parse_day_filter("monday").unwrap(),
    );
    let table = load_trips(&data_dir, &selection).unwrap();
    assert!(table.is_empty());

    let rides = compute_ride_stats(&table);
    assert_eq!(rides.total_rides, 0);
    assert_eq!(rides.busiest_hour, None);

    let stations = compute_station_stats(&table);
    assert_eq!(stations.popular_start, None);
    assert_eq!(stations.popular_route, None);

    assert_eq!(compute_duration_stats(&table), None);

    let users = compute_user_stats(&table, 2017);
    assert!(users.user_types.is_empty());
    assert_eq!(users.gender, None);
    assert_eq!(users.birth_years, None);
}
