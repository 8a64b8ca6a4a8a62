use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use shelter_types::Catalog;

/// Positional arguments were missing or extra.
pub const EXIT_USAGE: u8 = 1;
/// The engine rejected the input lists.
pub const EXIT_INVALID_INPUT: u8 = 2;
/// A catalog override could not be loaded.
pub const EXIT_CONFIG: u8 = 3;

pub const USAGE_EXAMPLE: &str = "Example:\n  shelter 'RATO,BOLA' 'RATO,NOVELO' 'Rex,Fofo'";

#[derive(Parser, Debug)]
#[command(
    name = "shelter",
    version,
    about = "Place shelter animals with two candidates by toy preference",
    after_help = USAGE_EXAMPLE
)]
pub struct MatchArgs {
    #[arg(help = "Comma-separated toys of candidate 1")]
    pub first_toys: String,
    #[arg(help = "Comma-separated toys of candidate 2")]
    pub second_toys: String,
    #[arg(help = "Comma-separated animals, in processing order")]
    pub animal_order: String,
    #[arg(long, help = "JSON file overriding the reference catalog")]
    pub catalog: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(
    name = "shelter-menu",
    version,
    about = "Interactive adoption lookups against a fixed candidate roster"
)]
pub struct MenuArgs {
    #[arg(long, help = "JSON file overriding the reference catalog")]
    pub catalog: Option<PathBuf>,
}

/// Load the catalog override, or the built-in tables when none is given.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => {
            let catalog = Catalog::from_path(path)
                .with_context(|| format!("loading catalog {}", path.display()))?;
            tracing::info!(path = %path.display(), animals = catalog.valid_animals.len(), "Catalog override loaded");
            Ok(catalog)
        }
        None => Ok(Catalog::default()),
    }
}
