//! Engine run metrics.
//!
//! Collected on every run (they are a handful of counters), surfaced only by
//! the verbose API and the CLI report.

use std::time::Duration;

/// Counters and timing for one matcher run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MatchMetrics {
    /// Elapsed time building the parse tree.
    pub duration: Duration,
    /// Named-rule invocations attempted, successful or not.
    pub rule_attempts: usize,
    /// Nodes in the final tree.
    pub nodes: usize,
    /// Deepest rule nesting reached.
    pub deepest: usize,
    /// Bytes consumed by the start rule.
    pub consumed: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunMetrics {
    /// Total elapsed time for the run.
    pub total: Duration,
    pub matching: MatchMetrics,
    /// Time spent in the evaluator.
    pub evaluation: Duration,
    /// The input exceeded `max_input_len` and was not matched.
    pub over_limit: bool,
}
