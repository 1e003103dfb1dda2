//! `pm-io` — fixture files and match output for the proxmatch matcher.
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`fixture`] | Agent/target CSV loaders and writers                        |
//! | [`output`]  | `MatchWriter` trait, `CsvMatchWriter`                       |
//! | [`error`]   | `FixtureError`, `FixtureResult<T>`                          |
//!
//! # Usage
//!
//! ```rust,ignore
//! use pm_io::{CsvMatchWriter, MatchWriter, load_agents_csv, load_targets_csv};
//!
//! let agents  = load_agents_csv(Path::new("agents.csv"))?;
//! let targets = load_targets_csv(Path::new("targets.csv"))?;
//! let matches = matcher.find_matches(&agents, &targets)?;
//!
//! let mut out = CsvMatchWriter::new(Path::new("matches.csv"))?;
//! out.write_matches(&matches)?;
//! out.finish()?;
//! ```

pub mod error;
pub mod fixture;
pub mod output;


pub use error::{FixtureError, FixtureResult};
pub use fixture::{
    load_agents_csv, load_agents_reader, load_targets_csv, load_targets_reader,
    write_agents_csv, write_agents_writer, write_targets_csv, write_targets_writer,
};
pub use output::{CsvMatchWriter, MatchWriter};
