//! `pm-match` — proximity matching between agents (drivers) and targets
//! (packages).
//!
//! # Pipeline
//!
//! ```text
//! validate(config, agents, targets)
//!   → GridIndex::build(targets, cell_size)            sequential, O(M)
//!   → for agent in agents:                            parallel with `parallel`
//!       for cell in 3×3 block around agent's cell:
//!         for target in bucket(cell):
//!           bbox pre-filter → exact test (< max_distance) → MatchResult
//!   → concatenate per-agent buffers in agent order     agent-major output
//! ```
//!
//! [`brute_force_matches`] computes the same relation by exhaustive
//! comparison; [`compare_matches`] checks the two agree.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs per-agent queries on Rayon's thread pool.         |
//! | `fx-hash`  | FxHash cell map in `pm-grid`.                          |
//!
//! The `parallel` tests only build with the feature on: run them with
//! `cargo test-all` (workspace alias) or `cargo test -p pm-match --features parallel`.
//!
//! # Quick-start
//!
//! ```rust
//! use pm_core::{Agent, MatchConfig, Priority, Target};
//! use pm_match::{ProximityMatcher, brute_force_matches, compare_matches};
//!
//! let agents  = vec![Agent::new(0, 0.0, 0.0)];
//! let targets = vec![Target::new(0, 30.0, 0.0, Priority::High)];
//!
//! let matcher = ProximityMatcher::new(MatchConfig::new(50.0))?;
//! let grid    = matcher.find_matches(&agents, &targets)?;
//! let oracle  = brute_force_matches(&agents, &targets, 50.0)?;
//! assert!(compare_matches(&oracle, &grid).is_equivalent());
//! assert_eq!(grid[0].distance, 30.0);
//! # Ok::<(), pm_core::PmError>(())
//! ```

pub mod compare;
pub mod matcher;
pub mod observer;
pub mod oracle;


pub use compare::{MatchComparison, compare_matches};
pub use matcher::ProximityMatcher;
pub use observer::{MatchObserver, NoopObserver};
pub use oracle::brute_force_matches;
