//! Exhaustive all-pairs reference matcher.
//!
//! O(N·M).  Exists to check [`ProximityMatcher`](crate::ProximityMatcher)
//! and to benchmark against; never needed in production.

use tracing::debug;

use pm_core::config::check_max_distance;
use pm_core::{Agent, MatchResult, PmResult, Target, proximity, validate_agents, validate_targets};

/// Every `(agent, target)` pair with distance strictly below
/// `max_distance`, in agent order then target input order.
///
/// Validates exactly like the grid matcher, so both fail on the same inputs.
pub fn brute_force_matches(
    agents:       &[Agent],
    targets:      &[Target],
    max_distance: f64,
) -> PmResult<Vec<MatchResult>> {
    check_max_distance(max_distance)?;
    validate_agents(agents)?;
    validate_targets(targets)?;

    let mut matches = Vec::new();
    for agent in agents {
        for target in targets {
            if let Some(distance) = proximity(agent.pos, target.pos, max_distance) {
                matches.push(MatchResult { agent_id: agent.id, target_id: target.id, distance });
            }
        }
    }

    debug!(
        pairs = agents.len().saturating_mul(targets.len()),
        matches = matches.len(),
        "brute-force matching complete"
    );
    Ok(matches)
}
