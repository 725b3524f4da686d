//! Bikeshare Core Library
//!
//! This crate provides the core functionality for bikeshare, an interactive
//! terminal report generator over bicycle-share trip logs. It loads a
//! city's CSV dataset, applies optional month/day filters, and computes the
//! descriptive statistics the CLI renders.
//!
//! # Key Features
//!
//! - **Filter Model**: Validated city/month/day selections and their
//!   canonical display string
//! - **Dataset Loading**: All-or-nothing CSV parsing with derived
//!   month/weekday/hour fields per trip
//! - **Aggregation**: Ride, station, duration, and user statistics with a
//!   stable first-encountered mode tie-break
//! - **Pagination**: Fixed-size raw-data pages over the filtered table
//! - **Error Handling**: Distinct error types for invalid input, missing
//!   datasets, and malformed data
//!
//! # Examples
//!
//! Loading a filtered table and counting rides:
//!
//! ```no_run
//! use bikeshare_core::dataset::load_trips;
//! use bikeshare_core::filters::{City, FilterSelection};
//! use bikeshare_core::stats::compute_ride_stats;
//!
//! let selection = FilterSelection::new(City::Chicago, None, None);
//! let table = load_trips("./data", &selection)?;
//! let stats = compute_ride_stats(&table);
//! println!("{} rides", stats.total_rides);
//! # Ok::<(), bikeshare_core::error::Error>(())
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod filters;
pub mod records;
pub mod stats;
