//! Filter model for a report session.
//!
//! A session is described by a [`FilterSelection`]: the city whose dataset
//! should be loaded, plus optional month and day restrictions. Values are
//! parsed from user input case-insensitively; anything outside the accepted
//! vocabulary is an [`Error::InvalidInput`] so prompt loops can re-ask.

use std::fmt::{Display, Formatter};

use chrono::Weekday;

use crate::error::{Error, Result};

/// One of the three cities with a known dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYork,
    Washington,
}

impl City {
    /// Parses a city from user input, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for anything other than the three
    /// known cities.
    pub fn parse(input: &str) -> Result<City> {
        match input.trim().to_lowercase().as_str() {
            "chicago" => Ok(City::Chicago),
            "new york" => Ok(City::NewYork),
            "washington" => Ok(City::Washington),
            _ => Err(Error::invalid_input(
                "Invalid city input. Please choose Chicago, New York, or Washington.",
            )),
        }
    }

    /// The dataset file name for this city, under the configured data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYork => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYork => "New York",
            City::Washington => "Washington",
        }
    }
}

impl Display for City {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.display_name())
    }
}

/// A month a dataset can be filtered to. Only the first half of the year is
/// covered by the source exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// 1-based month number, matching the derived month field on records.
    pub fn number(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
        }
    }
}

/// Parses a month filter from user input. `"all"` means no restriction.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for month names outside January-June.
pub fn parse_month_filter(input: &str) -> Result<Option<Month>> {
    let normalized = input.trim().to_lowercase();
    if normalized == "all" {
        return Ok(None);
    }

    Month::ALL
        .iter()
        .copied()
        .find(|month| month.name() == normalized)
        .map(Some)
        .ok_or_else(|| {
            Error::invalid_input("Invalid month option. Please choose All, or January through June.")
        })
}

/// Full lowercase weekday names, Monday first, for input validation and display.
const DAY_NAMES: [(&str, Weekday); 7] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

/// Parses a day filter from user input. `"all"` means no restriction.
///
/// Only full weekday names are accepted, case-insensitively.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for anything else.
pub fn parse_day_filter(input: &str) -> Result<Option<Weekday>> {
    let normalized = input.trim().to_lowercase();
    if normalized == "all" {
        return Ok(None);
    }

    DAY_NAMES
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, day)| Some(*day))
        .ok_or_else(|| {
            Error::invalid_input("Invalid day input. Please choose All, or a full weekday name.")
        })
}

/// Full lowercase name of a weekday.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// The (city, month, day) triple chosen for one session iteration.
///
/// Constructed once from validated input and never mutated; both the report
/// header and the raw-data banner format it through [`Self::description`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

impl FilterSelection {
    pub fn new(city: City, month: Option<Month>, day: Option<Weekday>) -> Self {
        Self { city, month, day }
    }

    /// Renders the active filters as
    /// `City: <Title> | Month: <Title-or-All> | Day: <Title-or-All>`.
    ///
    /// Deterministic: the same selection always formats to the same bytes.
    pub fn description(&self) -> String {
        let month_part = match self.month {
            Some(month) => title_case(month.name()),
            None => "All".to_string(),
        };
        let day_part = match self.day {
            Some(day) => title_case(day_name(day)),
            None => "All".to_string(),
        };

        format!(
            "City: {} | Month: {} | Day: {}",
            self.city.display_name(),
            month_part,
            day_part
        )
    }
}

/// Capitalizes the first letter of each whitespace-separated word.
pub fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_city_case_insensitive() {
        assert_eq!(City::parse("Chicago").unwrap(), City::Chicago);
        assert_eq!(City::parse("NEW YORK").unwrap(), City::NewYork);
        assert_eq!(City::parse("  washington  ").unwrap(), City::Washington);
    }

    #[test]
    fn test_parse_city_invalid() {
        let result = City::parse("boston");
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_parse_month_filter_all_is_none() {
        assert_eq!(parse_month_filter("all").unwrap(), None);
        assert_eq!(parse_month_filter("All").unwrap(), None);
    }

    #[test]
    fn test_parse_month_filter_names() {
        assert_eq!(parse_month_filter("january").unwrap(), Some(Month::January));
        assert_eq!(parse_month_filter("June").unwrap(), Some(Month::June));
        assert_eq!(parse_month_filter("MARCH").unwrap().unwrap().number(), 3);
    }

    #[test]
    fn test_parse_month_filter_rejects_unsupported_months() {
        // The exports only cover January through June
        assert!(parse_month_filter("july").is_err());
        assert!(parse_month_filter("december").is_err());
        assert!(parse_month_filter("1").is_err());
    }

    #[test]
    fn test_parse_day_filter() {
        assert_eq!(parse_day_filter("all").unwrap(), None);
        assert_eq!(parse_day_filter("Monday").unwrap(), Some(Weekday::Mon));
        assert_eq!(parse_day_filter("SUNDAY").unwrap(), Some(Weekday::Sun));
        assert!(parse_day_filter("mon").is_err());
        assert!(parse_day_filter("someday").is_err());
    }

    #[test]
    fn test_month_numbers() {
        assert_eq!(Month::January.number(), 1);
        assert_eq!(Month::June.number(), 6);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("january"), "January");
        assert_eq!(title_case("new york"), "New York");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_description_renders_all_and_titles() {
        let selection = FilterSelection::new(City::NewYork, None, None);
        assert_eq!(
            selection.description(),
            "City: New York | Month: All | Day: All"
        );

        let selection = FilterSelection::new(City::Chicago, Some(Month::May), Some(Weekday::Fri));
        assert_eq!(
            selection.description(),
            "City: Chicago | Month: May | Day: Friday"
        );
    }

    #[test]
    fn test_description_is_deterministic() {
        let selection =
            FilterSelection::new(City::Washington, Some(Month::March), Some(Weekday::Sun));
        assert_eq!(selection.description(), selection.description());
    }
}
