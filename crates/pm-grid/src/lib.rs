//! `pm-grid` — sparse uniform-grid spatial hash over targets.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`cell`]  | `CellKey`, floor-division cell mapping, 3×3 neighbourhood |
//! | [`index`] | `GridIndex` (build-once bucket map), `GridStats`          |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | Uses `rustc_hash::FxHashMap` for the cell map.           |

pub mod cell;
pub mod index;

#[cfg(test)]
mod tests;

pub use cell::{CellKey, NEIGHBOR_OFFSETS};
pub use index::{DEGENERATE_MIN_TARGETS, GridIndex, GridStats};
