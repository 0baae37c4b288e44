//! Semantic evaluation of parse trees.
//!
//! A bottom-up transform: every node is evaluated after its children, by the
//! handler selected from its rule's [`Action`]. Rules without a handler use
//! the pass-through fallback (exactly one valued child passes its value up;
//! anything else yields no value).
//!
//! ```text
//! integer "2" ─▶ Number(2) ─▶ amount ─▶ Measure(2, -)
//! pound "lb"  ─▶ Unit(pound) ─▶ english_unit ─▶ unit ─▶ Measure(1, pound)
//!                         amount_with_attached_units ─▶ Measure(2, pound)
//! ```
//!
//! Handlers never guess: a lookup that misses (a written number absent from
//! the number table, a unit rule absent from the taxonomy) means the grammar
//! and the tables have drifted apart, and evaluation fails with an
//! [`EvalError`].

use super::debug_enabled;
use super::grammar::Grammar;
use super::matcher::ParseTree;
use crate::rules::lookup::{fraction_glyph_value, written_number_value};
use crate::rules::units::{UnitSpec, unit_named};
use crate::{Action, EvalError, ParseNode, ParseResult, QuantityFragment};

/// An amount with an optional unit.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Measure {
    amount: f64,
    unit: Option<&'static UnitSpec>,
}

impl From<Measure> for QuantityFragment {
    fn from(m: Measure) -> Self {
        match m.unit {
            Some(unit) => QuantityFragment::with_unit(m.amount, unit),
            None => QuantityFragment::bare(m.amount),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Value {
    Number(f64),
    Unit(&'static UnitSpec),
    Measure(Measure),
    Measures(Vec<Measure>),
    Text(String),
    Addition(ParseResult),
}

#[derive(Debug)]
struct Child {
    rule: &'static str,
    value: Option<Value>,
}

/// Evaluate a parse tree of the ingredient grammar into a [`ParseResult`].
pub fn evaluate(tree: &ParseTree<'_>) -> Result<ParseResult, EvalError> {
    let evaluator = Evaluator { grammar: tree.grammar, input: tree.input, debug: debug_enabled() };
    match evaluator.eval(&tree.root)? {
        Some(Value::Addition(result)) => Ok(result),
        _ => Err(EvalError::NoValue(tree.root.rule_name)),
    }
}

struct Evaluator<'a> {
    grammar: &'a Grammar,
    input: &'a str,
    debug: bool,
}

impl Evaluator<'_> {
    fn eval(&self, node: &ParseNode) -> Result<Option<Value>, EvalError> {
        let children = node
            .children
            .iter()
            .map(|child| Ok(Child { rule: child.rule_name, value: self.eval(child)? }))
            .collect::<Result<Vec<_>, EvalError>>()?;

        let action = self.grammar.rule(node.rule).action;
        let value = self.apply(action, node, children)?;

        if self.debug {
            if let Some(value) = &value {
                eprintln!(
                    "[eval] rule=\"{}\" span={}..{} value={:?}",
                    node.rule_name, node.range.start, node.range.end, value
                );
            }
        }
        Ok(value)
    }

    fn apply(&self, action: Action, node: &ParseNode, children: Vec<Child>) -> Result<Option<Value>, EvalError> {
        let rule = node.rule_name;
        let text = node.text(self.input);

        let value = match action {
            Action::PassThrough => return Ok(pass_through(children)),
            Action::Integer | Action::Decimal => Value::Number(parse_number(rule, text)?),
            Action::DelimitedFraction => {
                let numerator = number(rule, &children, "integer")?;
                let denominator = number(rule, &children, "denominator")?;
                Value::Number(numerator / denominator)
            }
            Action::GlyphFraction => Value::Number(
                fraction_glyph_value(text).ok_or_else(|| EvalError::UnknownFractionGlyph(text.to_string()))?,
            ),
            Action::Fraction => {
                let (source, value) = first_number(rule, &children)?;
                // Only "n/d" fractions are rounded; glyphs keep their exact value.
                if source == "multicharacter_fraction" {
                    Value::Number(round_to_thousandths(value))
                } else {
                    Value::Number(value)
                }
            }
            Action::MixedNumber => {
                Value::Number(saturate(number(rule, &children, "integer")? + number(rule, &children, "fraction")?))
            }
            Action::WrittenNumber => Value::Number(
                written_number_value(text).ok_or_else(|| EvalError::UnknownWrittenNumber(text.to_string()))?,
            ),
            Action::Amount => {
                let (_, amount) = first_number(rule, &children)?;
                Value::Measure(Measure { amount, unit: None })
            }
            Action::Unit => Value::Unit(unit_named(rule).ok_or(EvalError::UnknownUnit(rule))?),
            Action::UnitQuantity => {
                let spec = children.iter().find_map(|c| match c.value {
                    Some(Value::Unit(spec)) => Some(spec),
                    _ => None,
                });
                let spec = spec.ok_or(EvalError::MissingOperand { rule, operand: "unit" })?;
                Value::Measure(Measure { amount: 1.0, unit: Some(spec) })
            }
            Action::AmountWithConversion | Action::AmountWithAttachedUnits => {
                // A parenthesized conversion, if present, is dropped.
                let amount = measure(rule, &children, "amount")?.amount;
                let unit = unit(rule, &children, "unit")?;
                Value::Measure(Measure { amount, unit: Some(unit) })
            }
            Action::AmountWithMultiplier => {
                let multiplier = measure(rule, &children, "amount")?.amount;
                let inner = measure(rule, &children, "parenthesized_quantity")?;
                Value::Measure(Measure { amount: saturate(inner.amount * multiplier), unit: inner.unit })
            }
            Action::AmountWithProperty => {
                let amount = measure(rule, &children, "amount")?.amount;
                Value::Measure(Measure { amount, unit: None })
            }
            Action::AmountImprecise => {
                let unit = unit(rule, &children, "imprecise_unit")?;
                Value::Measure(Measure { amount: 1.0, unit: Some(unit) })
            }
            Action::MultipartQuantity => {
                let fragments = children
                    .iter()
                    .filter(|c| c.rule == "quantity_fragment")
                    .map(|c| match c.value {
                        Some(Value::Measure(m)) => Ok(m),
                        _ => Err(EvalError::MissingOperand { rule, operand: "quantity_fragment" }),
                    })
                    .collect::<Result<Vec<_>, EvalError>>()?;
                Value::Measures(fold_multipart(fragments))
            }
            Action::AlternativeQuantity => return Ok(None),
            Action::Ingredient => Value::Text(clean_ingredient(text)),
            Action::Remainder => Value::Text(text.to_string()),
            Action::IngredientAddition => Value::Addition(assemble(rule, children)?),
        };

        Ok(Some(value))
    }
}

fn pass_through(children: Vec<Child>) -> Option<Value> {
    let mut valued = children.into_iter().filter_map(|c| c.value);
    match (valued.next(), valued.next()) {
        (Some(value), None) => Some(value),
        _ => None,
    }
}

fn assemble(rule: &'static str, children: Vec<Child>) -> Result<ParseResult, EvalError> {
    let mut quantity = None;
    let mut ingredient = None;
    let mut remainder = None;

    for child in children {
        match (child.rule, child.value) {
            ("multipart_quantity", Some(Value::Measures(measures))) => quantity = Some(measures),
            ("ingredient", Some(Value::Text(text))) => ingredient = Some(text),
            ("catch_all", Some(Value::Text(text))) => remainder = Some(text),
            _ => {}
        }
    }

    let quantity = quantity.ok_or(EvalError::MissingOperand { rule, operand: "multipart_quantity" })?;
    // Text no ingredient rule could claim ("(optional) salt") is still reported.
    let ingredient = match ingredient {
        Some(text) => text,
        None => remainder.map(|r| r.trim().to_string()).unwrap_or_default(),
    };

    Ok(ParseResult { quantity: quantity.into_iter().map(QuantityFragment::from).collect(), ingredient })
}

/// Accumulate fragments left to right. While the first accumulated fragment
/// has no unit it acts as a pending multiplier: the next fragment is scaled by
/// it and replaces the whole accumulator ("three 28 ounce cans" -> 84 ounce).
fn fold_multipart(fragments: Vec<Measure>) -> Vec<Measure> {
    let mut acc: Vec<Measure> = Vec::with_capacity(fragments.len());
    for mut fragment in fragments {
        if let Some(first) = acc.first() {
            if first.unit.is_none() {
                fragment.amount = saturate(fragment.amount * first.amount);
                acc.clear();
            }
        }
        acc.push(fragment);
    }
    acc
}

fn clean_ingredient(text: &str) -> String {
    text.strip_prefix("of ").unwrap_or(text).trim().to_string()
}

/// Round through the exact decimal expansion, ties to even: 1/16 -> 0.062.
fn round_to_thousandths(value: f64) -> f64 {
    format!("{value:.3}").parse().unwrap_or(value)
}

/// Products of several amounts can overflow; amounts stay finite.
fn saturate(value: f64) -> f64 {
    value.min(f64::MAX)
}

fn parse_number(rule: &'static str, text: &str) -> Result<f64, EvalError> {
    text.parse::<f64>().map(saturate).map_err(|_| EvalError::InvalidNumber { rule, text: text.to_string() })
}

fn operand<'c>(rule: &'static str, children: &'c [Child], name: &'static str) -> Result<&'c Value, EvalError> {
    children
        .iter()
        .find(|c| c.rule == name)
        .and_then(|c| c.value.as_ref())
        .ok_or(EvalError::MissingOperand { rule, operand: name })
}

fn number(rule: &'static str, children: &[Child], name: &'static str) -> Result<f64, EvalError> {
    match operand(rule, children, name)? {
        Value::Number(n) => Ok(*n),
        _ => Err(EvalError::MissingOperand { rule, operand: name }),
    }
}

/// The first child that evaluated to a number, with the rule that produced it.
fn first_number(rule: &'static str, children: &[Child]) -> Result<(&'static str, f64), EvalError> {
    children
        .iter()
        .find_map(|c| match c.value {
            Some(Value::Number(n)) => Some((c.rule, n)),
            _ => None,
        })
        .ok_or(EvalError::MissingOperand { rule, operand: "number" })
}

fn measure(rule: &'static str, children: &[Child], name: &'static str) -> Result<Measure, EvalError> {
    match operand(rule, children, name)? {
        Value::Measure(m) => Ok(*m),
        _ => Err(EvalError::MissingOperand { rule, operand: name }),
    }
}

fn unit(rule: &'static str, children: &[Child], name: &'static str) -> Result<&'static UnitSpec, EvalError> {
    match operand(rule, children, name)? {
        Value::Unit(spec) | Value::Measure(Measure { unit: Some(spec), .. }) => Ok(*spec),
        _ => Err(EvalError::MissingOperand { rule, operand: name }),
    }
}
