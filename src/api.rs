use crate::engine::{self, Grammar, compile_grammar};
use crate::rules::units::{UnitSpec, UnitType};
use crate::Error;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

static DEFAULT_GRAMMAR: Lazy<Grammar> =
    Lazy::new(|| compile_grammar().unwrap_or_else(|err| panic!("built-in ingredient grammar is invalid: {err}")));

/// Options that bound parsing work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Inputs longer than this many bytes are not matched; they come back with
    /// no quantity and the trimmed input as ingredient.
    pub max_input_len: usize,
    /// Maximum nesting of rule invocations. Deeper invocations fail like any
    /// other PEG failure. Raised to 2 if lower.
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { max_input_len: 4096, max_depth: 64 }
    }
}

/// One amount, with its unit when the line gave one.
///
/// `unit` and `unit_type` are either both present or both absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityFragment {
    pub amount: f64,
    /// Canonical unit name, e.g. `"cup"` or `"fluid_ounce"`.
    pub unit: Option<String>,
    pub unit_type: Option<UnitType>,
}

impl QuantityFragment {
    /// A fragment with no unit ("3 eggs").
    pub fn bare(amount: f64) -> Self {
        Self { amount, unit: None, unit_type: None }
    }

    pub fn with_unit(amount: f64, unit: &UnitSpec) -> Self {
        Self { amount, unit: Some(unit.name.to_string()), unit_type: Some(unit.category) }
    }
}

/// Result from [`parse`] and [`parse_with`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Quantity fragments in source order, after multipart folding.
    pub quantity: Vec<QuantityFragment>,
    /// Ingredient text with a leading "of " removed and whitespace trimmed.
    pub ingredient: String,
}

impl ParseResult {
    /// The result for text the grammar was not run on.
    pub(crate) fn unparsed(text: &str) -> Self {
        Self { quantity: Vec::new(), ingredient: text.trim().to_string() }
    }
}

/// A compact node summary used in verbose traces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSummary {
    pub start: usize,
    pub end: usize,
    /// Nesting depth below the root (the root is 0).
    pub depth: usize,
    pub rule: String,
    pub preview: String,
}

/// Additional details returned by [`parse_verbose`] and [`parse_verbose_with`].
///
/// Meant for debugging and performance inspection without dumping the
/// matcher's internal state.
#[derive(Debug, Clone)]
pub struct ParseDetails {
    /// Total elapsed time.
    pub total: Duration,
    /// Time spent building the parse tree.
    pub matching: Duration,
    /// Time spent in the evaluator.
    pub evaluation: Duration,
    /// Named-rule invocations attempted by the matcher.
    pub rule_attempts: usize,
    /// Deepest rule nesting reached.
    pub deepest: usize,
    /// Parse tree in pre-order.
    pub nodes: Vec<NodeSummary>,
    /// The input exceeded `max_input_len` and was not matched.
    pub over_limit: bool,
}

/// Result from [`parse_verbose`] and [`parse_verbose_with`].
#[derive(Debug, Clone)]
pub struct ParseResultVerbose {
    pub text: String,
    pub result: ParseResult,
    pub elapsed: Duration,
    pub details: ParseDetails,
}

/// Parse an ingredient line with default [`Options`].
///
/// Never fails for any input: text that holds no quantity comes back with an
/// empty quantity list.
///
/// # Panics
///
/// Panics if the built-in grammar and lookup tables are inconsistent. Use
/// [`try_parse`] to receive that as an error instead.
///
/// # Example
/// ```
/// use larder::{UnitType, parse};
///
/// let out = parse("2 cups of flour");
/// assert_eq!(out.ingredient, "flour");
/// assert_eq!(out.quantity[0].amount, 2.0);
/// assert_eq!(out.quantity[0].unit.as_deref(), Some("cup"));
/// assert_eq!(out.quantity[0].unit_type, Some(UnitType::English));
/// ```
pub fn parse(text: &str) -> ParseResult {
    parse_with(text, &Options::default())
}

/// Parse `text` with the provided `options`. Panics like [`parse`].
pub fn parse_with(text: &str, options: &Options) -> ParseResult {
    try_parse_with(text, options).unwrap_or_else(|err| panic!("failed to parse {text:?}: {err}"))
}

/// Parse `text`, reporting grammar/table inconsistencies as errors.
pub fn try_parse(text: &str) -> Result<ParseResult, Error> {
    try_parse_with(text, &Options::default())
}

pub fn try_parse_with(text: &str, options: &Options) -> Result<ParseResult, Error> {
    Ok(engine::run_with_metrics(&DEFAULT_GRAMMAR, text, options, false)?.result)
}

pub fn parse_verbose(text: &str) -> ParseResultVerbose {
    parse_verbose_with(text, &Options::default())
}

/// Parse `text` with `options` and return timings and the flattened parse tree.
///
/// The default [`parse_with`] path does not allocate the tree summary. Panics
/// like [`parse`].
pub fn parse_verbose_with(text: &str, options: &Options) -> ParseResultVerbose {
    try_parse_verbose_with(text, options).unwrap_or_else(|err| panic!("failed to parse {text:?}: {err}"))
}

/// [`parse_verbose_with`], reporting grammar/table inconsistencies as errors.
pub fn try_parse_verbose_with(text: &str, options: &Options) -> Result<ParseResultVerbose, Error> {
    let run = engine::run_with_metrics(&DEFAULT_GRAMMAR, text, options, true)?;

    let details = ParseDetails {
        total: run.metrics.total,
        matching: run.metrics.matching.duration,
        evaluation: run.metrics.evaluation,
        rule_attempts: run.metrics.matching.rule_attempts,
        deepest: run.metrics.matching.deepest,
        nodes: run.nodes,
        over_limit: run.metrics.over_limit,
    };

    Ok(ParseResultVerbose { text: text.to_string(), result: run.result, elapsed: run.metrics.total, details })
}
