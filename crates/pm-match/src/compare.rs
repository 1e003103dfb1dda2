//! Set comparison of two match lists.
//!
//! The grid matcher and the oracle emit matches in different orders, so
//! they are compared as multisets of `(agent, target)` pairs.  Duplicate ids
//! in the input produce duplicate pairs; counting them keeps cardinality
//! part of the check.

use std::collections::HashMap;
use std::fmt;

use pm_core::{AgentId, MatchResult, TargetId};

type Pair = (AgentId, TargetId);

/// Difference between an expected and an actual match list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchComparison {
    pub expected_count: usize,
    pub actual_count:   usize,
    /// Pairs in `expected` but not in `actual`, sorted.
    pub missing:        Vec<Pair>,
    /// Pairs in `actual` but not in `expected`, sorted.
    pub unexpected:     Vec<Pair>,
}

impl MatchComparison {
    /// Same pairs with the same multiplicities.
    pub fn is_equivalent(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

impl fmt::Display for MatchComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} matches, got {} ({} missing, {} unexpected)",
            self.expected_count,
            self.actual_count,
            self.missing.len(),
            self.unexpected.len()
        )
    }
}

/// Compare `actual` against the reference list `expected`.
pub fn compare_matches(expected: &[MatchResult], actual: &[MatchResult]) -> MatchComparison {
    let mut balance: HashMap<Pair, i64> = HashMap::with_capacity(expected.len());
    for m in expected {
        *balance.entry(m.pair()).or_default() += 1;
    }
    for m in actual {
        *balance.entry(m.pair()).or_default() -= 1;
    }

    let mut missing = Vec::new();
    let mut unexpected = Vec::new();
    for (pair, n) in balance {
        if n > 0 {
            missing.extend(std::iter::repeat_n(pair, n as usize));
        } else if n < 0 {
            unexpected.extend(std::iter::repeat_n(pair, n.unsigned_abs() as usize));
        }
    }
    missing.sort_unstable();
    unexpected.sort_unstable();

    MatchComparison {
        expected_count: expected.len(),
        actual_count:   actual.len(),
        missing,
        unexpected,
    }
}
