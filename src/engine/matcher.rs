//! Recursive-descent matcher.
//!
//! Walks the compiled rule graph against an input string with PEG semantics:
//!
//! - **Sequence**: every item must match, contiguously.
//! - **Ordered choice**: alternatives are tried at the same offset; the first
//!   success wins and later alternatives are never revisited.
//! - **Zero-or-more / optional**: greedy, never fail.
//! - **Negative lookahead**: succeeds, consuming nothing, iff the inner
//!   expression fails.
//!
//! Matching is anchored at the current offset; nothing is ever skipped.
//!
//! Only named rules produce `ParseNode`s. A failed attempt leaves no trace:
//! every expression that fails truncates the child list back to where it was.
//!
//! ```text
//! input: "2lb 4oz potatoes"
//!
//! ingredient_addition 0..16
//! ├─ multipart_quantity 0..8
//! │  ├─ quantity_fragment 0..3   "2lb"
//! │  ├─ break 3..4
//! │  ├─ quantity_fragment 4..7   "4oz"
//! │  └─ break 7..8
//! ├─ ingredient 8..16            "potatoes"
//! └─ catch_all 16..16
//! ```

use std::time::Instant;

use super::grammar::Grammar;
use super::metrics::MatchMetrics;
use super::debug_enabled;
use crate::{Error, EvalError, Expr, NodeSummary, Options, ParseNode, Range, RuleId};

/// Depth the start rule needs to reach its catch-all.
const MIN_DEPTH: usize = 2;

/// A parse tree together with the input and grammar it was built from.
#[derive(Debug, Clone)]
pub struct ParseTree<'a> {
    pub(crate) grammar: &'a Grammar,
    pub(crate) input: &'a str,
    pub(crate) root: ParseNode,
    pub(crate) metrics: MatchMetrics,
}

impl<'a> ParseTree<'a> {
    pub fn root(&self) -> &ParseNode {
        &self.root
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn grammar(&self) -> &'a Grammar {
        self.grammar
    }

    /// Matching statistics for this tree.
    pub fn metrics(&self) -> MatchMetrics {
        self.metrics
    }

    /// Flatten the tree in pre-order, skipping single-letter nodes.
    pub(crate) fn summarize(&self) -> Vec<NodeSummary> {
        let mut out = Vec::new();
        summarize_into(&self.root, self.input, 0, &mut out);
        out
    }
}

fn summarize_into(node: &ParseNode, input: &str, depth: usize, out: &mut Vec<NodeSummary>) {
    if node.rule_name == "letter" {
        return;
    }
    out.push(NodeSummary {
        start: node.range.start,
        end: node.range.end,
        depth,
        rule: node.rule_name.to_string(),
        preview: node.text(input).chars().take(80).collect(),
    });
    for child in &node.children {
        summarize_into(child, input, depth + 1, out);
    }
}

impl Grammar {
    /// Match `text` against the grammar with default [`Options`].
    ///
    /// The start rule ends in a catch-all, so this succeeds for every input;
    /// the error arm is only reachable with a defective grammar.
    pub fn parse_tree<'a>(&'a self, text: &'a str) -> Result<ParseTree<'a>, Error> {
        self.parse_tree_with(text, &Options::default())
    }

    /// Match `text` against the grammar, bounded by `options.max_depth`.
    pub fn parse_tree_with<'a>(&'a self, text: &'a str, options: &Options) -> Result<ParseTree<'a>, Error> {
        let started = Instant::now();
        let mut matcher = Matcher {
            grammar: self,
            input: text,
            max_depth: options.max_depth.max(MIN_DEPTH),
            debug: debug_enabled(),
            attempts: 0,
            deepest: 0,
        };

        let start = self.start();
        let root = matcher
            .match_rule(start, 0, 1)
            .ok_or_else(|| Error::from(EvalError::Unmatched(self.rule(start).name)))?;

        let metrics = MatchMetrics {
            duration: started.elapsed(),
            rule_attempts: matcher.attempts,
            nodes: root.size(),
            deepest: matcher.deepest,
            consumed: root.range.end,
        };
        Ok(ParseTree { grammar: self, input: text, root, metrics })
    }
}

/// Match `text` against `grammar`; see [`Grammar::parse_tree`].
pub fn parse_tree<'a>(grammar: &'a Grammar, text: &'a str) -> Result<ParseTree<'a>, Error> {
    grammar.parse_tree(text)
}

struct Matcher<'a> {
    grammar: &'a Grammar,
    input: &'a str,
    max_depth: usize,
    debug: bool,
    attempts: usize,
    deepest: usize,
}

impl<'a> Matcher<'a> {
    /// Match rule `id` at `pos`. `depth` counts nested rule invocations; past
    /// `max_depth` the rule simply fails.
    fn match_rule(&mut self, id: RuleId, pos: usize, depth: usize) -> Option<ParseNode> {
        let grammar = self.grammar;
        let rule = grammar.rule(id);

        if depth > self.max_depth {
            if self.debug {
                eprintln!("[rule:depth] name=\"{}\" pos={} depth={} exceeds max_depth", rule.name, pos, depth);
            }
            return None;
        }
        self.attempts += 1;
        self.deepest = self.deepest.max(depth);

        let mut children = Vec::new();
        let end = self.match_expr(&rule.body, pos, depth, &mut children)?;

        if self.debug && rule.name != "letter" {
            eprintln!(
                "[rule:match] name=\"{}\" span={}..{} text=\"{}\"",
                rule.name,
                pos,
                end,
                self.input.get(pos..end).unwrap_or("")
            );
        }

        Some(ParseNode { rule: id, rule_name: rule.name, range: Range { start: pos, end }, children })
    }

    /// Match `expr` at `pos`, appending named-rule nodes to `out`.
    ///
    /// Returns the end offset on success. On failure `out` is left exactly as
    /// it was on entry.
    fn match_expr(
        &mut self,
        expr: &'a Expr<RuleId>,
        pos: usize,
        depth: usize,
        out: &mut Vec<ParseNode>,
    ) -> Option<usize> {
        let rest = self.input.get(pos..)?;

        match expr {
            Expr::Literal(text) => rest.starts_with(text).then(|| pos + text.len()),
            Expr::CharClass(pred) => {
                let c = rest.chars().next()?;
                pred(c).then(|| pos + c.len_utf8())
            }
            Expr::Pattern(re) => re.find(rest).filter(|m| m.start() == 0).map(|m| pos + m.end()),
            Expr::Sequence(items) => {
                let mark = out.len();
                let mut cursor = pos;
                for item in items {
                    match self.match_expr(item, cursor, depth, out) {
                        Some(next) => cursor = next,
                        None => {
                            out.truncate(mark);
                            return None;
                        }
                    }
                }
                Some(cursor)
            }
            Expr::OrderedChoice(alts) => {
                for alt in alts {
                    let mark = out.len();
                    if let Some(end) = self.match_expr(alt, pos, depth, out) {
                        return Some(end);
                    }
                    out.truncate(mark);
                }
                None
            }
            Expr::ZeroOrMore(inner) => {
                let mut cursor = pos;
                loop {
                    let mark = out.len();
                    match self.match_expr(inner, cursor, depth, out) {
                        Some(next) if next > cursor => cursor = next,
                        // A failed or empty repetition ends the loop.
                        _ => {
                            out.truncate(mark);
                            break;
                        }
                    }
                }
                Some(cursor)
            }
            Expr::Optional(inner) => {
                let mark = out.len();
                match self.match_expr(inner, pos, depth, out) {
                    Some(end) => Some(end),
                    None => {
                        out.truncate(mark);
                        Some(pos)
                    }
                }
            }
            Expr::NegativeLookahead(inner) => {
                let mut scratch = Vec::new();
                match self.match_expr(inner, pos, depth, &mut scratch) {
                    Some(_) => None,
                    None => Some(pos),
                }
            }
            Expr::RuleRef(id) => {
                let node = self.match_rule(*id, pos, depth + 1)?;
                let end = node.range.end;
                out.push(node);
                Some(end)
            }
        }
    }
}
