use std::io;
use std::process::ExitCode;

use clap::Parser;
use shelter_cli::args::{EXIT_CONFIG, MenuArgs, load_catalog};
use shelter_cli::menu::MenuSession;
use shelter_cli::telemetry;
use shelter_types::Roster;

fn main() -> ExitCode {
    let args = MenuArgs::parse();
    telemetry::init();

    let catalog = match load_catalog(args.catalog.as_deref()) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };
    let roster = Roster::default();

    let mut session = MenuSession::new(&catalog, &roster, io::stdin().lock(), io::stdout().lock());
    if let Err(err) = session.run() {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
