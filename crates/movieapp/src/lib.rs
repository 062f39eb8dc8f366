//! # Movieapp Architecture
//!
//! Movieapp is a **UI-agnostic movie collection library**. The interactive menu in the
//! `movies` binary is one client of it; nothing in here knows about terminals.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (movies binary: cli/, wired by main.rs)          │
//! │  - Menu loop, prompts, colored output, exit codes           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Turns lookups into records, trims input                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Collection rules: duplicates, stats, sorting, filtering  │
//! │  - Returns CmdResult with an Outcome and messages           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait                                        │
//! │  - JsonStore / CsvStore (files), InMemoryStore (testing)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain arguments and returns `Result<CmdResult>`.
//! It never prints and never exits. Expected "negative" answers (unknown title,
//! duplicate, empty collection) are [`commands::Outcome`] values, not errors.
//!
//! ## Self-Healing Stores
//!
//! A store file that is missing, empty or unreadable is replaced by the one-movie
//! seed collection the first time it is touched. The heal is reported in the
//! command's messages so the UI can tell the user what happened.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each menu action
//! - [`store`]: Storage abstraction and the JSON/CSV/in-memory implementations
//! - [`model`]: `Movie` and `MovieUpdate`
//! - [`lookup`]: OMDb metadata lookup
//! - [`website`]: Static HTML rendering
//! - [`config`]: Layered configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod store;
pub mod website;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
