extern crate self as larder;

use regex::Regex;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod rules;

pub use api::{
    NodeSummary, Options, ParseDetails, ParseResult, ParseResultVerbose, QuantityFragment, parse, parse_verbose,
    parse_verbose_with, parse_with, try_parse, try_parse_verbose_with, try_parse_with,
};
pub use engine::{Grammar, MatchMetrics, ParseTree, compile_grammar, evaluate, parse_tree};
pub use error::{Error, EvalError, GrammarError};
pub use rules::lookup::{fraction_glyph_value, written_number_value};
pub use rules::units::{UnitSpec, UnitType, unit_named, units};

// --- Internal types ---------------------------------------------------------

/// Index of a rule inside a compiled [`Grammar`].
pub(crate) type RuleId = usize;

/// A grammar expression.
///
/// `R` is the type used for references to other named rules: rule names
/// (`&'static str`) while the grammar is being declared, and `RuleId` indices
/// once the registry has been compiled. Anonymous sub-expressions never produce
/// parse nodes of their own; their matches are attached to the enclosing rule.
#[derive(Debug, Clone)]
pub(crate) enum Expr<R = &'static str> {
    /// Exact, case-sensitive text.
    Literal(&'static str),
    /// A single character accepted by the predicate.
    CharClass(fn(char) -> bool),
    /// A regular expression anchored at the current offset (patterns start with `^`).
    /// Stored as a static reference created by the `regex!` macro.
    Pattern(&'static Regex),
    /// All items, contiguously, in order.
    Sequence(Vec<Expr<R>>),
    /// First alternative that matches wins.
    OrderedChoice(Vec<Expr<R>>),
    ZeroOrMore(Box<Expr<R>>),
    Optional(Box<Expr<R>>),
    /// Succeeds without consuming input iff the inner expression fails here.
    NegativeLookahead(Box<Expr<R>>),
    /// Another named rule.
    RuleRef(R),
}

/// Semantic handler attached to a rule.
///
/// The evaluator dispatches on this tag; rules without an explicit action use
/// [`Action::PassThrough`]: a node with exactly one valued child takes that
/// child's value, otherwise it has no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    PassThrough,
    Integer,
    Decimal,
    DelimitedFraction,
    GlyphFraction,
    Fraction,
    MixedNumber,
    WrittenNumber,
    Amount,
    Unit,
    UnitQuantity,
    AmountWithConversion,
    AmountWithAttachedUnits,
    AmountWithMultiplier,
    AmountWithProperty,
    AmountImprecise,
    MultipartQuantity,
    AlternativeQuantity,
    Ingredient,
    Remainder,
    IngredientAddition,
}

/// A named grammar production as declared in `src/rules/**`.
#[derive(Debug, Clone)]
pub(crate) struct Rule {
    pub name: &'static str,
    pub body: Expr,
    pub action: Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Range {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}

/// A node of the parse tree: the named rule that matched, the consumed span
/// and the named rules matched inside it, in input order.
#[derive(Debug, Clone)]
pub struct ParseNode {
    pub(crate) rule: RuleId,
    pub(crate) rule_name: &'static str,
    pub(crate) range: Range,
    pub(crate) children: Vec<ParseNode>,
}

impl ParseNode {
    /// Name of the rule that produced this node.
    pub fn rule_name(&self) -> &'static str {
        self.rule_name
    }

    /// Start byte offset of the match.
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// End byte offset of the match (exclusive).
    pub fn end(&self) -> usize {
        self.range.end
    }

    pub fn children(&self) -> &[ParseNode] {
        &self.children
    }

    /// The slice of `input` this node matched.
    pub fn text<'t>(&self, input: &'t str) -> &'t str {
        input.get(self.range.start..self.range.end).unwrap_or("")
    }

    /// First direct child produced by the rule `name`.
    pub fn child(&self, name: &str) -> Option<&ParseNode> {
        self.children.iter().find(|c| c.rule_name == name)
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(ParseNode::size).sum::<usize>()
    }
}
