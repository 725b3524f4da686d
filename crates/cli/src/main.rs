use std::process::ExitCode;

use bikeshare_core::error::Result;
use bikeshare_core::{config, dataset};
use clap::Parser;
use log::{debug, warn};

use bikeshare_cli::cli_args::Args;
use bikeshare_cli::prompts;
use bikeshare_cli::report::{self, Palette};

fn execute() -> Result<()> {
    let args = Args::parse();

    let palette = Palette::new(!args.no_color);
    let data_dir = config::get_data_dir(&args.data_dir);
    debug!("Data directory: `{data_dir}`");

    // Direct-mode flags are validated before anything is printed
    let direct = args.direct_selection()?;

    report::clear_screen()?;
    println!();
    println!("{}", palette.banner("Welcome to bikeshare analytics."));
    println!();

    loop {
        let selection = match direct {
            Some(selection) => selection,
            None => prompts::prompt_filters(&palette)?,
        };
        debug!("Filter selection: {}", selection.description());

        println!();
        println!("{}", palette.banner("Loading your selected data..."));
        println!();

        match dataset::load_trips(&data_dir, &selection) {
            Ok(table) => {
                report::render_report(&table, &selection, &palette);
                if direct.is_none() {
                    report::render_raw_data(&table, &selection, &palette)?;
                }
            }
            Err(error) if error.is_recoverable_load_failure() => {
                warn!("Load failed: {error}");
                println!("{}", palette.error(&format!("Error loading data: {error}")));
            }
            Err(error) => return Err(error),
        }

        println!();
        println!("{}", palette.banner("End of session"));
        println!();

        if direct.is_some() {
            break;
        }

        if !prompts::confirm(&palette, "Would you like to restart? [yes/no]: ")? {
            break;
        }
        println!("\n");
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
