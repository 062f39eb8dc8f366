//! # Movies CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file
//! loads `.env`, invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/movieapp/`: Library with the UI-agnostic collection logic and storage
//! - `crates/movies/`: This interactive client, depends on `movieapp`
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/movies/src/cli/)                         │
//! │  - clap arguments + store selection (setup.rs)              │
//! │  - menu loop and prompts (menu.rs, prompt.rs)               │
//! │  - colored output (render.rs)                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/movieapp/src/api.rs)                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors the library cannot recover from (an unwritable data directory, a bad
//! configuration file) end up here and are printed as `Error: ...` with exit code 1.

mod cli;

fn main() {
    // A missing .env is fine.
    dotenv::dotenv().ok();

    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
