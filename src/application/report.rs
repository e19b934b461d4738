// Per-strategy timing report, for diagnostics and tests only. Reports never feed back
// into program behavior.

use std::time::Duration;

/// Outcome of running one execution strategy over the full set of operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyReport {
    /// Strategy name as announced by the strategy itself.
    pub strategy: String,
    /// Wall-clock time the strategy took for all three operations.
    pub duration: Duration,
}
