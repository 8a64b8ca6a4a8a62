use std::io;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use shelter_cli::args::{EXIT_CONFIG, EXIT_USAGE, MatchArgs, USAGE_EXAMPLE, load_catalog};
use shelter_cli::{output, telemetry};
use shelter_matchcore::AdoptionEngine;

fn main() -> ExitCode {
    telemetry::init();

    let args = match MatchArgs::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            eprintln!("Expected three arguments: toys of candidate 1, toys of candidate 2, animal order.");
            eprintln!("{err}");
            eprintln!("{USAGE_EXAMPLE}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let catalog = match load_catalog(args.catalog.as_deref()) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    let report = AdoptionEngine::new(catalog).report(
        Some(args.first_toys.as_str()),
        Some(args.second_toys.as_str()),
        Some(args.animal_order.as_str()),
    );

    match output::emit_report(&report, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
