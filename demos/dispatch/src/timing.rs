//! Phase timer for the grid pipeline.

use std::time::{Duration, Instant};

use pm_core::AgentId;
use pm_grid::GridStats;
use pm_match::MatchObserver;

/// Records when the index finished building and how busy agents were.
pub struct PhaseTimer {
    start:         Instant,
    pub index:     Option<Duration>,
    pub stats:     Option<GridStats>,
    pub busiest:   Option<(AgentId, usize)>,
    pub unmatched: usize,
}

impl PhaseTimer {
    pub fn start() -> Self {
        Self {
            start:     Instant::now(),
            index:     None,
            stats:     None,
            busiest:   None,
            unmatched: 0,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl MatchObserver for PhaseTimer {
    fn on_index_built(&mut self, stats: &GridStats) {
        self.index = Some(self.start.elapsed());
        self.stats = Some(*stats);
    }

    fn on_agent_done(&mut self, agent: AgentId, matches: usize) {
        if matches == 0 {
            self.unmatched += 1;
        }
        if self.busiest.is_none_or(|(_, n)| matches > n) {
            self.busiest = Some((agent, matches));
        }
    }
}
