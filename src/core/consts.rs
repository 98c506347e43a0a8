pub const DISTANCE_PRUNING: bool = true;
pub const CACHE_PATHS: bool = true;
pub const CONNECTIVITY_CHECK: bool = true;
pub const MAX_EXPANSIONS: Option<usize> = None;
