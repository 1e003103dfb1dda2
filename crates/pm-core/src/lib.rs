//! `pm-core` — foundational types for the `proxmatch` driver/package matcher.
//!
//! This crate is a dependency of every other `pm-*` crate.  It intentionally
//! has no `pm-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`ids`]        | `AgentId`, `TargetId`                                  |
//! | [`point`]      | `Point`, squared/exact distance, the match predicate   |
//! | [`entity`]     | `Agent`, `Target`, `Priority`, `MatchResult`           |
//! | [`config`]     | `MatchConfig`                                          |
//! | [`rng`]        | `FixtureRng` (seeded, deterministic)                   |
//! | [`scenario`]   | `ScenarioSpec`, `Scenario`, `generate_scenario`        |
//! | [`error`]      | `PmError`, `PmResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod config;
pub mod entity;
pub mod error;
pub mod ids;
pub mod point;
pub mod rng;
pub mod scenario;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::MatchConfig;
pub use entity::{Agent, MatchResult, Priority, Target, validate_agents, validate_targets};
pub use error::{PmError, PmResult};
pub use ids::{AgentId, TargetId};
pub use point::{Point, proximity};
pub use rng::FixtureRng;
pub use scenario::{Cluster, Scenario, ScenarioSpec, generate_scenario};
