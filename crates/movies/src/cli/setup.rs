use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "movies",
    bin_name = "movies",
    version,
    about = "Keep track of the movies you have seen",
    long_about = None,
    after_help = "STORE picks the file and its format, e.g. `movies alice.csv` or `movies bob.json`.\nWithout it, data/movie_database.json is used.\n\nSet OMDB_API_KEY (or the older API_KEY) to look movies up on OMDb when adding them."
)]
pub struct Cli {
    /// Per-user store: <username>.json or <username>.csv
    pub store: Option<String>,

    /// Directory holding the store files
    #[arg(long, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// HTML template for website generation
    #[arg(long, value_name = "PATH", help_heading = "Options")]
    pub template: Option<PathBuf>,

    /// Where the generated website is written
    #[arg(long, value_name = "PATH", help_heading = "Options")]
    pub output: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFormat {
    Json,
    Csv,
}

/// What the `STORE` argument asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChoice {
    /// No argument: the shared JSON database.
    Default,
    User {
        username: String,
        format: StoreFormat,
    },
    /// Unusable argument, kept for the warning. Falls back to the default.
    Malformed(String),
}

impl StoreChoice {
    pub fn parse(arg: Option<&str>) -> Self {
        let Some(arg) = arg.map(str::trim) else {
            return StoreChoice::Default;
        };

        let Some((username, ext)) = arg.rsplit_once('.') else {
            return StoreChoice::Malformed(arg.to_string());
        };
        let format = match ext.to_ascii_lowercase().as_str() {
            "json" => StoreFormat::Json,
            "csv" => StoreFormat::Csv,
            _ => return StoreChoice::Malformed(arg.to_string()),
        };

        let valid_name = !username.is_empty()
            && !username.contains(['/', '\\'])
            && username != "."
            && username != "..";
        if !valid_name {
            return StoreChoice::Malformed(arg.to_string());
        }

        StoreChoice::User {
            username: username.to_string(),
            format,
        }
    }

    /// File this choice resolves to inside `data_dir`.
    pub fn path_in(&self, data_dir: &Path, default_file: &str) -> (StoreFormat, PathBuf) {
        match self {
            StoreChoice::User { username, format } => {
                let ext = match format {
                    StoreFormat::Json => "json",
                    StoreFormat::Csv => "csv",
                };
                (*format, data_dir.join(format!("{}.{}", username, ext)))
            }
            StoreChoice::Default | StoreChoice::Malformed(_) => {
                (StoreFormat::Json, data_dir.join(default_file))
            }
        }
    }
}

/// Log level for the number of `-v` flags. `RUST_LOG` wins when set.
pub fn log_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directive(verbose)));

    // A second init (tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
