//! Error types.
//!
//! Ordinary input never produces an error: every string matches the grammar
//! and degrades to an empty quantity list at worst. The errors below indicate
//! defects in the rule set or lookup tables.

use thiserror::Error;

/// Construction-time failure while compiling a rule registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// A rule body refers to a rule name that is not defined.
    #[error("rule `{rule}` references undefined rule `{reference}`")]
    UndefinedRule { rule: &'static str, reference: &'static str },

    /// Two rules share the same name.
    #[error("rule `{0}` is defined more than once")]
    DuplicateRule(&'static str),

    /// The rule parsing starts from is not defined.
    #[error("start rule `{0}` is not defined")]
    MissingStartRule(&'static str),
}

/// Run-time inconsistency between the grammar and the evaluator's tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("written number `{0}` has no value in the number table")]
    UnknownWrittenNumber(String),

    #[error("fraction glyph `{0}` has no value in the fraction table")]
    UnknownFractionGlyph(String),

    #[error("rule `{0}` does not name a known unit")]
    UnknownUnit(&'static str),

    #[error("rule `{rule}` matched `{text}`, which is not a number")]
    InvalidNumber { rule: &'static str, text: String },

    #[error("rule `{rule}` is missing its `{operand}` operand")]
    MissingOperand { rule: &'static str, operand: &'static str },

    #[error("rule `{0}` produced no value")]
    NoValue(&'static str),

    /// The start rule did not match; the catch-all should make this impossible.
    #[error("start rule `{0}` did not match the input")]
    Unmatched(&'static str),
}

/// Any failure surfaced by the public API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
