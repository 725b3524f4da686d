//! Bikeshare CLI Library
//!
//! This crate provides the command-line interface for bikeshare, an
//! interactive report generator over bicycle-share trip logs. It handles
//! user interaction, report rendering, and the outer session loop around
//! the `bikeshare-core` pipeline.
//!
//! # Key Features
//!
//! - **Interactive Filter Selection**: Validated prompt loops for city,
//!   month, and day
//! - **Report Rendering**: Colored statistics sections with per-section
//!   calculation times
//! - **Raw-Data Pagination**: Five rows at a time, original columns only
//! - **Direct Mode**: One-shot reports from `--city/--month/--day` flags
//!   without prompts
//!
//! # Examples
//!
//! The CLI binary (`bks`) can be used in several ways:
//!
//! ```bash
//! # Interactive mode - prompts for city, month, and day
//! bks
//!
//! # Direct mode - one report, no prompts
//! bks --city chicago --month may --day friday
//!
//! # Point at a different dataset directory
//! bks --data-dir ~/bikeshare-data
//!
//! # Plain output for logs or pipes
//! bks --no-color --city washington
//! ```

pub mod cli_args;
pub mod prompts;
pub mod report;
