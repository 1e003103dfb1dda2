//! Run observer trait for progress reporting and timing.

use pm_core::AgentId;
use pm_grid::GridStats;

/// Callbacks invoked by
/// [`ProximityMatcher::find_matches_with`][crate::ProximityMatcher::find_matches_with].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers see results, they never
/// influence them.
///
/// # Example — timing the phases
///
/// ```rust,ignore
/// struct PhaseTimer { start: Instant, index_built: Option<Duration> }
///
/// impl MatchObserver for PhaseTimer {
///     fn on_index_built(&mut self, _stats: &GridStats) {
///         self.index_built = Some(self.start.elapsed());
///     }
/// }
/// ```
pub trait MatchObserver {
    /// Called once, after the grid is built and before any query runs.
    fn on_index_built(&mut self, _stats: &GridStats) {}

    /// Called once per agent, in input order, with that agent's match count.
    ///
    /// With the `parallel` feature this fires after all queries finish.
    fn on_agent_done(&mut self, _agent: AgentId, _matches: usize) {}

    /// Called once after the full match list is assembled.
    fn on_run_end(&mut self, _total_matches: usize) {}
}

/// A [`MatchObserver`] that does nothing.
pub struct NoopObserver;

impl MatchObserver for NoopObserver {}
