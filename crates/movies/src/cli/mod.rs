//! # CLI Behavior
//!
//! This is **one possible UI client** for movieapp, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and colors.
//!
//! For the overall architecture, see the library documentation of `movieapp`.
//!
//! ## Startup
//!
//! 1. Parse arguments (`setup`), install the log subscriber.
//! 2. Load [`MoviesConfig`] and apply the command-line overrides on top.
//! 3. Pick the store from the optional `STORE` argument (`alice.csv`, `bob.json`).
//!    Anything else is reported and the shared JSON database is used instead.
//! 4. Build the OMDb client when an API key is configured. Without a key, adding a
//!    movie asks for its year and rating instead.
//! 5. Hand over to the menu loop until `q` or end of input.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap, store selection, logging
//! - `menu`: The action loop and per-action input gathering
//! - `prompt`: Re-prompting line input over any `BufRead`/`Write`
//! - `render`: Colored output of messages, movies and stats

mod menu;
mod prompt;
mod render;
pub mod setup;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use menu::Menu;
use movieapp::api::{MovieApi, WebsitePaths};
use movieapp::config::{MoviesConfig, DEFAULT_STORE_FILENAME};
use movieapp::lookup::{MetadataLookup, OmdbClient};
use movieapp::store::csv::CsvStore;
use movieapp::store::json::JsonStore;
use movieapp::store::RecordStore;
use prompt::Prompter;
use setup::{Cli, StoreChoice, StoreFormat};
use std::io;
use tracing::info;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup::init_logging(cli.verbose);

    let mut config = MoviesConfig::load().context("Failed to load configuration")?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if cli.template.is_some() {
        config.template = cli.template;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }

    let choice = StoreChoice::parse(cli.store.as_deref());
    if let StoreChoice::Malformed(arg) = &choice {
        eprintln!(
            "{}",
            format!(
                "Ignoring store argument '{}': expected <username>.json or <username>.csv.",
                arg
            )
            .yellow()
        );
    }

    let (format, path) = choice.path_in(&config.data_dir, DEFAULT_STORE_FILENAME);
    info!(?format, path = %path.display(), "opening store");
    let store: Box<dyn RecordStore> = match format {
        StoreFormat::Json => Box::new(JsonStore::new(path)?),
        StoreFormat::Csv => Box::new(CsvStore::new(path)?),
    };

    let api = MovieApi::new(
        store,
        WebsitePaths {
            template: config.template.clone(),
            output: config.output.clone(),
        },
    );

    let client = match config.api_key() {
        Some(key) => Some(OmdbClient::with_base_url(key, config.omdb_url.clone())?),
        None => {
            info!("no OMDb API key configured, movies are added by hand");
            None
        }
    };
    let lookup = client.as_ref().map(|c| c as &dyn MetadataLookup);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    Menu::new(&api, lookup).run(&mut prompter)
}
