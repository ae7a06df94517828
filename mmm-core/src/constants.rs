/// Workspace version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default carryover window for geometric adstock (periods).
pub const DEFAULT_GEOMETRIC_MAX_LAG: usize = 8;

/// Default carryover window for Weibull adstock (periods).
pub const DEFAULT_WEIBULL_MAX_LAG: usize = 12;

/// Relative tolerance on the budget equality constraint.
pub const BUDGET_SUM_TOLERANCE: f64 = 1e-6;

/// Default iteration cap for the budget optimizer.
pub const DEFAULT_OPTIMIZER_MAX_ITERATIONS: usize = 1000;

/// Default convergence tolerance for the budget optimizer
/// (total absolute allocation change between iterations).
pub const DEFAULT_OPTIMIZER_TOLERANCE: f64 = 1e-8;

/// Default number of posterior draws per chain.
pub const DEFAULT_DRAWS: usize = 2000;

/// Default number of tuning (warmup) iterations per chain.
pub const DEFAULT_TUNE: usize = 1000;

/// Default number of independent sampling chains.
pub const DEFAULT_CHAINS: usize = 4;
