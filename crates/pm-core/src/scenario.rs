//! Synthetic agent/target scenarios for benchmarks and randomized tests.
//!
//! The generator takes any `rand::Rng`, so callers inject the randomness
//! source: a seeded [`FixtureRng`](crate::FixtureRng) for reproducible runs,
//! or a scripted RNG in tests.

use rand::Rng;

use crate::{Agent, Point, Priority, Target};

/// All targets placed on one coincident point — the degenerate density case
/// where every target lands in a single grid cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cluster {
    pub center: Point,
}

/// Shape of a generated scenario.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioSpec {
    pub agent_count:  usize,
    pub target_count: usize,
    /// Coordinates are integers drawn uniformly from `0..=extent`.
    pub extent:       u32,
    /// If set, targets ignore `extent` and sit on the cluster centre.
    pub cluster:      Option<Cluster>,
    /// Priority stamped on every generated target.
    pub priority:     Priority,
}

impl ScenarioSpec {
    /// Uniform scenario with `High` priority targets.
    pub fn uniform(agent_count: usize, target_count: usize, extent: u32) -> Self {
        Self {
            agent_count,
            target_count,
            extent,
            cluster: None,
            priority: Priority::High,
        }
    }

    pub fn clustered(mut self, center: Point) -> Self {
        self.cluster = Some(Cluster { center });
        self
    }
}

impl Default for ScenarioSpec {
    /// 2 000 drivers and 5 000 packages on a 1 000 × 1 000 square.
    fn default() -> Self {
        Self::uniform(2_000, 5_000, 1_000)
    }
}

/// A generated batch.  Agent ids are `0..agent_count`, target ids
/// `0..target_count`.
#[derive(Clone, Debug, Default)]
pub struct Scenario {
    pub agents:  Vec<Agent>,
    pub targets: Vec<Target>,
}

/// Generate a scenario from `spec`, drawing agents first, then targets.
pub fn generate_scenario<R: Rng>(spec: &ScenarioSpec, rng: &mut R) -> Scenario {
    let coord = |rng: &mut R| rng.gen_range(0..=spec.extent) as f64;

    let agents = (0..spec.agent_count as u64)
        .map(|i| {
            let x = coord(rng);
            let y = coord(rng);
            Agent::new(i, x, y)
        })
        .collect();

    let targets = (0..spec.target_count as u64)
        .map(|j| {
            let pos = match spec.cluster {
                Some(c) => c.center,
                None => {
                    let x = coord(rng);
                    let y = coord(rng);
                    Point::new(x, y)
                }
            };
            Target { id: j.into(), pos, priority: spec.priority }
        })
        .collect();

    Scenario { agents, targets }
}
