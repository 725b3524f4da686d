//! Interactive prompt loops.
//!
//! Each prompt prints its question, reads a line from stdin, and validates
//! through the core parsers; invalid input prints a red error and asks
//! again. A closed stdin (zero-byte read) is an error rather than an
//! endless loop, so piped sessions terminate cleanly.

use std::io::{stdin, stdout, Write};

use bikeshare_core::error::{Error, Result};
use bikeshare_core::filters::{parse_day_filter, parse_month_filter, City, FilterSelection, Month};
use chrono::Weekday;

use crate::report::Palette;

fn read_trimmed_line() -> Result<String> {
    let mut input = String::new();
    let bytes_read = stdin().read_line(&mut input).map_err(Error::Stdio)?;

    if bytes_read == 0 {
        return Err(Error::Stdio(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "stdin closed",
        )));
    }

    Ok(input.trim().to_string())
}

/// Prompts for the full (city, month, day) selection.
///
/// # Errors
///
/// Returns an error only for stdin/stdout failures; validation failures
/// re-prompt.
pub fn prompt_filters(palette: &Palette) -> Result<FilterSelection> {
    let city = prompt_city(palette)?;
    let month = prompt_month(palette)?;
    let day = prompt_day(palette)?;

    Ok(FilterSelection::new(city, month, day))
}

fn prompt_city(palette: &Palette) -> Result<City> {
    loop {
        println!("Would you like to see data for Chicago, New York, or Washington?");
        let input = read_trimmed_line()?;
        println!();

        match City::parse(&input) {
            Ok(city) => return Ok(city),
            Err(Error::InvalidInput(message)) => {
                println!("{}", palette.error(&format!("Error: {message}")));
            }
            Err(other) => return Err(other),
        }
    }
}

fn prompt_month(palette: &Palette) -> Result<Option<Month>> {
    loop {
        println!("Which month? All, January, February, March, April, May, or June?");
        let input = read_trimmed_line()?;
        println!();

        match parse_month_filter(&input) {
            Ok(month) => return Ok(month),
            Err(Error::InvalidInput(message)) => {
                println!("{}", palette.error(&format!("Error: {message}")));
            }
            Err(other) => return Err(other),
        }
    }
}

fn prompt_day(palette: &Palette) -> Result<Option<Weekday>> {
    loop {
        println!(
            "Which day? All, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, or Sunday?"
        );
        let input = read_trimmed_line()?;
        println!();

        match parse_day_filter(&input) {
            Ok(day) => return Ok(day),
            Err(Error::InvalidInput(message)) => {
                println!("{}", palette.error(&format!("Error: {message}")));
            }
            Err(other) => return Err(other),
        }
    }
}

/// Asks a yes/no question until the answer is one of yes/y/no/n,
/// case-insensitively.
///
/// # Errors
///
/// Returns an error for stdin/stdout failures, including a closed stdin.
pub fn confirm(palette: &Palette, prompt: &str) -> Result<bool> {
    loop {
        print!("{prompt}");
        stdout().flush().map_err(Error::Stdio)?;

        let input = read_trimmed_line()?.to_lowercase();

        match input.as_str() {
            "yes" | "y" => return Ok(true),
            "no" | "n" => return Ok(false),
            _ => println!(
                "{}",
                palette.error("Error: Invalid input. Please enter \"yes\" or \"no\"")
            ),
        }
    }
}
