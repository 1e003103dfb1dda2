//! The grid-accelerated matcher.

use tracing::info;

use pm_core::{Agent, MatchConfig, MatchResult, PmError, PmResult, Target, proximity, validate_agents};
use pm_grid::GridIndex;

use crate::{MatchObserver, NoopObserver};

// ── ProximityMatcher ──────────────────────────────────────────────────────────

/// Finds every agent/target pair closer than `config.max_distance`.
///
/// The matcher holds only validated configuration (and, with the
/// `parallel` feature, an optional dedicated thread pool); each call builds
/// its own [`GridIndex`] and drops it on return.
///
/// # Output order
///
/// Agent-major: all matches of `agents[0]`, then `agents[1]`, and so on.
/// Within one agent, matches follow the 3×3 neighbourhood order of
/// [`pm_grid::NEIGHBOR_OFFSETS`], then each bucket's target input order.
/// The `parallel` feature does not change this order.
pub struct ProximityMatcher {
    config: MatchConfig,

    #[cfg(feature = "parallel")]
    pool: Option<rayon::ThreadPool>,
}

impl ProximityMatcher {
    /// Validate `config` and create a matcher.
    pub fn new(config: MatchConfig) -> PmResult<Self> {
        config.validate()?;

        #[cfg(feature = "parallel")]
        let pool = match config.num_threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| PmError::Config(format!("thread pool: {e}")))?,
            ),
            None => None,
        };

        Ok(Self {
            config,
            #[cfg(feature = "parallel")]
            pool,
        })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    // ── Batch API ─────────────────────────────────────────────────────────

    /// Match a whole batch.
    ///
    /// Validates every agent and target coordinate before building the
    /// index; on any error nothing is returned but the error.
    pub fn find_matches(&self, agents: &[Agent], targets: &[Target]) -> PmResult<Vec<MatchResult>> {
        self.find_matches_with(agents, targets, &mut NoopObserver)
    }

    /// Like [`find_matches`](Self::find_matches), reporting progress to
    /// `observer`.
    pub fn find_matches_with<O: MatchObserver>(
        &self,
        agents:   &[Agent],
        targets:  &[Target],
        observer: &mut O,
    ) -> PmResult<Vec<MatchResult>> {
        validate_agents(agents)?;
        let index = GridIndex::build(targets, self.config.effective_cell_size())?;
        self.query(agents, &index, observer)
    }

    /// Query a pre-built index for every agent.
    ///
    /// Fails with [`PmError::Config`] if the index cells are narrower than
    /// `max_distance`, since the 3×3 scan would then miss matches.
    pub fn query<O: MatchObserver>(
        &self,
        agents:   &[Agent],
        index:    &GridIndex<'_>,
        observer: &mut O,
    ) -> PmResult<Vec<MatchResult>> {
        self.check_index(index)?;
        validate_agents(agents)?;
        let max_distance = self.config.max_distance;

        observer.on_index_built(&index.stats());
        let matches = self.collect_matches(agents, index, observer);

        info!(
            agents = agents.len(),
            targets = index.target_count(),
            matches = matches.len(),
            max_distance,
            "proximity matching complete"
        );
        observer.on_run_end(matches.len());
        Ok(matches)
    }

    // ── Single-agent query ────────────────────────────────────────────────

    /// Append `agent`'s matches to `out`.
    ///
    /// Fails with [`PmError::Config`] under the same conditions as
    /// [`query`](Self::query), or with [`PmError::InputValidation`] if the
    /// agent's coordinates are not finite; `out` is untouched on error.
    pub fn match_agent(
        &self,
        agent: &Agent,
        index: &GridIndex<'_>,
        out:   &mut Vec<MatchResult>,
    ) -> PmResult<()> {
        self.check_index(index)?;
        validate_agents(std::slice::from_ref(agent))?;
        self.scan_agent(agent, index, out);
        Ok(())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Cells narrower than `max_distance` would let the 3×3 scan miss pairs.
    fn check_index(&self, index: &GridIndex<'_>) -> PmResult<()> {
        let max_distance = self.config.max_distance;
        if index.cell_size() < max_distance {
            return Err(PmError::Config(format!(
                "index cell_size {} is smaller than max_distance {max_distance}",
                index.cell_size()
            )));
        }
        Ok(())
    }

    /// Caller has already run `check_index` and validated `agent`.
    fn scan_agent(&self, agent: &Agent, index: &GridIndex<'_>, out: &mut Vec<MatchResult>) {
        let max_distance = self.config.max_distance;
        for target in index.neighbors(agent.pos) {
            // Cheap axis test before the multiply-add.
            if !target.pos.within_bbox(agent.pos, max_distance) {
                continue;
            }
            if let Some(distance) = proximity(agent.pos, target.pos, max_distance) {
                out.push(MatchResult { agent_id: agent.id, target_id: target.id, distance });
            }
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn collect_matches<O: MatchObserver>(
        &self,
        agents:   &[Agent],
        index:    &GridIndex<'_>,
        observer: &mut O,
    ) -> Vec<MatchResult> {
        let mut out = Vec::new();
        for agent in agents {
            let before = out.len();
            self.scan_agent(agent, index, &mut out);
            observer.on_agent_done(agent.id, out.len() - before);
        }
        out
    }

    /// Each agent fills its own buffer; Rayon's indexed `collect` keeps the
    /// buffers in agent order, so concatenation restores agent-major output
    /// without sorting.
    #[cfg(feature = "parallel")]
    fn collect_matches<O: MatchObserver>(
        &self,
        agents:   &[Agent],
        index:    &GridIndex<'_>,
        observer: &mut O,
    ) -> Vec<MatchResult> {
        use rayon::prelude::*;

        let run = || -> Vec<Vec<MatchResult>> {
            agents
                .par_iter()
                .map(|agent| {
                    let mut buf = Vec::new();
                    self.scan_agent(agent, index, &mut buf);
                    buf
                })
                .collect()
        };
        let buffers = match &self.pool {
            Some(pool) => pool.install(run),
            None       => run(),
        };

        let mut out = Vec::with_capacity(buffers.iter().map(Vec::len).sum());
        for (agent, buf) in agents.iter().zip(buffers) {
            observer.on_agent_done(agent.id, buf.len());
            out.extend(buf);
        }
        out
    }
}
