//! Report rendering.
//!
//! Everything the user sees after a successful load is produced here: the
//! filter header, the four statistics sections (each timing its own
//! computation), and the paginated raw-data view. Colors are carried by a
//! [`Palette`] passed down from `main` rather than process-wide state, so
//! `--no-color` is a plain construction-time switch.

use std::io::{stdout, Write};
use std::time::Instant;

use bikeshare_core::error::{Error, Result};
use bikeshare_core::filters::FilterSelection;
use bikeshare_core::records::{TripRecord, TripTable};
use bikeshare_core::stats::{
    compute_duration_stats, compute_ride_stats, compute_station_stats, compute_user_stats,
    format_duration, pct, BIRTH_YEAR_WARNING, GENDER_WARNING,
};
use chrono::{Datelike, Local};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{Clear, ClearType};
use itertools::Itertools;

use crate::prompts;

const BANNER_COLOR: Color = Color::Rgb { r: 94, g: 94, b: 255 };
const HEADING_COLOR: Color = Color::Rgb { r: 0, g: 195, b: 0 };
const TIMING_COLOR: Color = Color::Rgb { r: 173, g: 127, b: 168 };
const ERROR_COLOR: Color = Color::Rgb { r: 255, g: 0, b: 0 };
const WARNING_COLOR: Color = Color::Rgb { r: 128, g: 96, b: 0 };

/// Presentation policy for the report: colors on or off.
///
/// Constructed once from the `--no-color` flag and passed to every
/// renderer and prompt.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// Session banners (welcome, loading, end of session).
    pub fn banner(&self, text: &str) -> String {
        self.paint(text, BANNER_COLOR)
    }

    /// Section headings.
    pub fn heading(&self, text: &str) -> String {
        self.paint(text, HEADING_COLOR)
    }

    /// Calculation-time readouts.
    pub fn timing(&self, text: &str) -> String {
        self.paint(text, TIMING_COLOR)
    }

    /// Missing-data warnings.
    pub fn warning(&self, text: &str) -> String {
        self.paint(text, WARNING_COLOR)
    }

    /// Validation and load errors.
    pub fn error(&self, text: &str) -> String {
        self.paint(text, ERROR_COLOR)
    }
}

/// Clears the terminal and homes the cursor.
///
/// # Errors
///
/// Returns [`Error::Stdio`] if the terminal rejects the escape sequence.
pub fn clear_screen() -> Result<()> {
    let mut stdout = stdout();
    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0)).map_err(Error::Stdio)?;
    stdout.flush().map_err(Error::Stdio)?;
    Ok(())
}

/// Renders the full report for a loaded table: header plus the ride,
/// station, duration, and user sections.
pub fn render_report(table: &TripTable, selection: &FilterSelection, palette: &Palette) {
    render_header(selection);
    render_ride_stats(table, palette);
    render_station_stats(table, palette);
    render_duration_stats(table, palette);
    render_user_stats(table, palette);
}

fn render_header(selection: &FilterSelection) {
    let description = selection.description();
    println!("{description}");
    println!("{}", "-".repeat(description.chars().count()));
    println!();
}

fn render_timing(palette: &Palette, started: Instant) {
    println!();
    println!(
        "{}",
        palette.timing(&format!(
            "Calculation time: {:.3}s",
            started.elapsed().as_secs_f64()
        ))
    );
    println!();
}

fn render_ride_stats(table: &TripTable, palette: &Palette) {
    let started = Instant::now();

    println!("{}", palette.heading("Ride Count Statistics"));
    println!();

    let stats = compute_ride_stats(table);
    println!("Total Rides │ {}", with_thousands(stats.total_rides));
    println!();

    println!("Hours:");
    match (stats.busiest_hour, stats.quietest_hour) {
        (Some(busiest), Some(quietest)) => {
            println!(
                "Busiest     │ {:02}:00 ({} rides)",
                busiest.hour,
                with_thousands(busiest.rides)
            );
            println!(
                "Quietest    │ {:02}:00 ({} rides)",
                quietest.hour,
                with_thousands(quietest.rides)
            );
        }
        _ => println!("No ride data for this selection."),
    }

    render_timing(palette, started);
}

fn render_station_stats(table: &TripTable, palette: &Palette) {
    let started = Instant::now();

    println!("{}", palette.heading("Station Statistics"));
    println!();

    let stats = compute_station_stats(table);

    println!("Most Popular Stations:");
    match (&stats.popular_start, &stats.popular_end) {
        (Some(start), Some(end)) => {
            println!(
                "Start       │ {} ({} rides)",
                start.name,
                with_thousands(start.rides)
            );
            println!(
                "End         │ {} ({} rides)",
                end.name,
                with_thousands(end.rides)
            );
        }
        _ => println!("No station data for this selection."),
    }
    println!();

    println!("Most Popular Route:");
    match &stats.popular_route {
        Some(route) => println!("{} ({} rides)", route.name, with_thousands(route.rides)),
        None => println!("No route data for this selection."),
    }

    render_timing(palette, started);
}

fn render_duration_stats(table: &TripTable, palette: &Palette) {
    let started = Instant::now();

    println!("{}", palette.heading("Trip Duration Statistics"));
    println!();

    match compute_duration_stats(table) {
        Some(stats) => {
            println!("Total Time  │ {}", format_duration(stats.total_secs));
            println!("Average Time│ {}", format_duration(stats.mean_secs));
        }
        None => println!("No trip duration data for this selection."),
    }

    render_timing(palette, started);
}

fn render_user_stats(table: &TripTable, palette: &Palette) {
    let started = Instant::now();

    println!("{}", palette.heading("User Statistics"));
    println!();

    let stats = compute_user_stats(table, Local::now().year());

    println!("User Types:");
    if stats.user_types.is_empty() {
        println!("No user data for this selection.");
    } else {
        for type_count in &stats.user_types {
            println!(
                "{:<10}  │ {} ({:.1}%)",
                type_count.user_type,
                with_thousands(type_count.rides),
                pct(type_count.rides, stats.total_rides)
            );
        }
    }
    println!();

    match &stats.gender {
        Some(breakdown) => {
            println!("Subscriber gender:");
            for gender_count in &breakdown.counts {
                println!(
                    "{:<10}  │ {} ({:.0}%)",
                    gender_count.gender,
                    with_thousands(gender_count.riders),
                    pct(gender_count.riders, breakdown.subscriber_total)
                );
            }
            println!();
        }
        None => println!("{}", palette.warning(&format!("* {GENDER_WARNING}"))),
    }

    match &stats.birth_years {
        Some(birth_years) => {
            println!("Subscriber birth year:");
            println!(
                "Earliest    │ {} (current age: {})",
                birth_years.earliest.year, birth_years.earliest.current_age
            );
            println!(
                "Latest      │ {} (current age: {})",
                birth_years.latest.year, birth_years.latest.current_age
            );
            println!(
                "Most Common │ {} (current age: {})",
                birth_years.most_common.year, birth_years.most_common.current_age
            );
        }
        None => println!("{}", palette.warning(&format!("* {BIRTH_YEAR_WARNING}"))),
    }

    render_timing(palette, started);
}

/// Offers the raw-data view and pages through the filtered rows on demand.
///
/// Only the original source columns are shown; the derived month, weekday,
/// and hour fields never appear here.
///
/// # Errors
///
/// Returns an error if stdin closes mid-prompt or the terminal write
/// fails.
pub fn render_raw_data(
    table: &TripTable,
    selection: &FilterSelection,
    palette: &Palette,
) -> Result<()> {
    println!(
        "{}",
        palette.heading(&format!(
            "Raw data is available for your selection ({}).",
            selection.description()
        ))
    );
    println!();

    if table.is_empty() {
        println!("No rows to display.");
        return Ok(());
    }

    if !prompts::confirm(palette, "Would you like to view the raw data? [yes/no]: ")? {
        return Ok(());
    }

    let mut pages = table.pages().peekable();
    while let Some(page) = pages.next() {
        print_page(&table.headers, page);

        if pages.peek().is_some()
            && !prompts::confirm(palette, "\nWould you like to see 5 more rows? [yes/no]: ")?
        {
            break;
        }
    }

    Ok(())
}

/// Prints one page of raw rows as a width-aligned table under the original
/// headers.
fn print_page(headers: &[String], rows: &[TripRecord]) {
    let mut widths: Vec<usize> = headers.iter().map(|header| header.chars().count()).collect();
    for row in rows {
        for (column, cell) in row.raw.iter().enumerate() {
            if column < widths.len() {
                widths[column] = widths[column].max(cell.chars().count());
            }
        }
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, &width)| format!("{header:<width$}"))
        .join(" │ ");
    println!("{header_line}");
    println!("{}", "-".repeat(header_line.chars().count()));

    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(column, &width)| {
                let cell = row.raw.get(column).map(String::as_str).unwrap_or("");
                format!("{cell:<width$}")
            })
            .join(" │ ");
        println!("{line}");
    }
}

/// Formats a count with thousands separators, e.g. `1,234,567`.
pub fn with_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_thousands() {
        assert_eq!(with_thousands(0), "0");
        assert_eq!(with_thousands(999), "999");
        assert_eq!(with_thousands(1000), "1,000");
        assert_eq!(with_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_disabled_palette_is_plain() {
        let palette = Palette::new(false);
        assert_eq!(palette.heading("Ride Count Statistics"), "Ride Count Statistics");
        assert_eq!(palette.error("boom"), "boom");
    }

    #[test]
    fn test_enabled_palette_wraps_in_escape_codes() {
        let palette = Palette::new(true);
        let painted = palette.heading("Ride Count Statistics");
        assert!(painted.contains("Ride Count Statistics"));
        assert!(painted.starts_with('\u{1b}'));
    }
}
