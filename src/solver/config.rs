use serde::{Deserialize, Serialize};

use crate::core::{CACHE_PATHS, CONNECTIVITY_CHECK, DISTANCE_PRUNING, MAX_EXPANSIONS};

/// Knobs for a level solve. None of them change which plan is chosen, only
/// how fast it is found or when the search gives up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Skip branches whose lower-bound distance cannot beat the best path.
    pub distance_pruning: bool,
    /// Memoize single-path queries within one solve.
    pub cache_paths: bool,
    /// Fail fast when a target has no connection from the start at all.
    pub connectivity_check: bool,
    /// Cap on search node expansions per level.
    pub max_expansions: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            distance_pruning: DISTANCE_PRUNING,
            cache_paths: CACHE_PATHS,
            connectivity_check: CONNECTIVITY_CHECK,
            max_expansions: MAX_EXPANSIONS,
        }
    }
}

impl SolverConfig {
    /// Plain exhaustive search with no helpers.
    pub fn exhaustive() -> Self {
        SolverConfig {
            distance_pruning: false,
            cache_paths: false,
            connectivity_check: false,
            max_expansions: None,
        }
    }
}
