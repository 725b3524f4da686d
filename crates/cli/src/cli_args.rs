//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure and provides
//! validation for CLI arguments using the `clap` crate.

use bikeshare_core::error::{Error, Result};
use bikeshare_core::filters::{parse_day_filter, parse_month_filter, City, FilterSelection};
use clap::Parser;

/// Command-line arguments for the bikeshare CLI tool.
///
/// This structure defines all available command-line options for the `bks`
/// binary. By default the tool runs interactively, prompting for a city and
/// filters; passing `--city` switches to direct mode, which prints a single
/// report and exits.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use bikeshare_cli::cli_args::Args;
///
/// // Parse arguments from command line
/// let args = Args::parse();
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Directory containing the city dataset CSV files.
    ///
    /// If not provided, defaults to `./data`.
    #[arg(long, short = 'd')]
    pub data_dir: Option<String>,

    /// Disable colored output.
    #[arg(long, action)]
    pub no_color: bool,

    /// City to report on directly, skipping the interactive prompts.
    ///
    /// One of `chicago`, `new york`, or `washington` (case-insensitive).
    /// Direct mode prints one report and exits without the raw-data view
    /// or restart prompt.
    #[arg(long, short = 'c')]
    pub city: Option<String>,

    /// Month filter for direct mode.
    ///
    /// `all` or a month name from `january` through `june`. Requires
    /// `--city`; defaults to `all`.
    #[arg(long, short = 'm')]
    pub month: Option<String>,

    /// Day filter for direct mode.
    ///
    /// `all` or a full weekday name. Requires `--city`; defaults to `all`.
    #[arg(long)]
    pub day: Option<String>,
}

impl Args {
    /// Builds the filter selection for direct mode, if requested.
    ///
    /// Returns `None` when no direct-mode flags were given, meaning the
    /// session should prompt interactively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `--month` or `--day` is given
    /// without `--city`, or if any value is outside the accepted
    /// vocabulary.
    pub fn direct_selection(&self) -> Result<Option<FilterSelection>> {
        let Some(city) = &self.city else {
            if self.month.is_some() || self.day.is_some() {
                return Err(Error::invalid_input(
                    "--month and --day require --city to be set.",
                ));
            }
            return Ok(None);
        };

        let city = City::parse(city)?;
        let month = match &self.month {
            Some(month) => parse_month_filter(month)?,
            None => None,
        };
        let day = match &self.day {
            Some(day) => parse_day_filter(day)?,
            None => None,
        };

        Ok(Some(FilterSelection::new(city, month, day)))
    }
}
