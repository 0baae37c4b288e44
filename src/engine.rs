//! Parsing and evaluation engine.
//!
//! Parsing an ingredient line is a two-stage pipeline over a grammar that is
//! compiled once:
//!
//! ```text
//! rules::get()  ──┐
//!                 │  compile_grammar          (grammar.rs)
//!                 │   - register every rule name
//!                 │   - resolve RuleRef names to RuleIds
//!                 └───────────────┬──────────
//!                                 │
//! input ──────────────────────────┼─ Grammar::parse_tree   (matcher.rs)
//!                                 │   - recursive descent, PEG semantics
//!                                 │   - ordered choice commits to first success
//!                                 v
//!                           ParseTree (named nodes + spans)
//!                                 │
//!                                 v
//!                           evaluate               (evaluate.rs)
//!                             - bottom-up, one handler per Action
//!                                 │
//!                                 v
//!                            ParseResult
//! ```
//!
//! ## Responsibilities by module
//!
//! - `grammar.rs`: the immutable, index-addressed rule registry.
//! - `matcher.rs`: matches the registry against an input and builds the tree.
//! - `evaluate.rs`: turns tree nodes into amounts, units and fragments.
//! - `metrics.rs`: timings and counters for verbose runs.
//!
//! ## Debugging
//!
//! Set `LARDER_DEBUG_RULES=1` to print rule matches and evaluated values.

#[path = "engine/evaluate.rs"]
mod evaluate;
#[path = "engine/grammar.rs"]
mod grammar;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/metrics.rs"]
mod metrics;

pub use evaluate::evaluate;
pub use grammar::{Grammar, compile_grammar};
pub use matcher::{ParseTree, parse_tree};
pub use metrics::{MatchMetrics, RunMetrics};

use crate::{Error, Options, ParseResult};
use std::time::Instant;

/// Environment variable enabling debug traces on stderr.
pub(crate) const DEBUG_ENV: &str = "LARDER_DEBUG_RULES";

pub(crate) fn debug_enabled() -> bool {
    std::env::var_os(DEBUG_ENV).is_some()
}

/// Output of [`run_with_metrics`]: the result plus what verbose callers need.
#[derive(Debug, Clone)]
pub(crate) struct RunResult {
    pub result: ParseResult,
    pub nodes: Vec<crate::NodeSummary>,
    pub metrics: RunMetrics,
}

/// Match and evaluate `text`, timing both stages.
///
/// Inputs longer than `options.max_input_len` skip the grammar entirely and
/// come back as quantity-less results.
pub(crate) fn run_with_metrics(
    grammar: &Grammar,
    text: &str,
    options: &Options,
    collect_nodes: bool,
) -> Result<RunResult, Error> {
    let total_start = Instant::now();

    if text.len() > options.max_input_len {
        if debug_enabled() {
            eprintln!("[limits] input of {} bytes exceeds max_input_len={}", text.len(), options.max_input_len);
        }
        let metrics = RunMetrics { total: total_start.elapsed(), over_limit: true, ..RunMetrics::default() };
        return Ok(RunResult { result: ParseResult::unparsed(text), nodes: Vec::new(), metrics });
    }

    let tree = grammar.parse_tree_with(text, options)?;
    let nodes = if collect_nodes { tree.summarize() } else { Vec::new() };

    let evaluation_start = Instant::now();
    let result = evaluate(&tree)?;
    let evaluation = evaluation_start.elapsed();

    let metrics = RunMetrics { total: total_start.elapsed(), matching: tree.metrics(), evaluation, over_limit: false };
    Ok(RunResult { result, nodes, metrics })
}
