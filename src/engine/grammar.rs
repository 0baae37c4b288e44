//! Rule registry compilation.
//!
//! Rules refer to each other by name, and the references are cyclic in
//! places (`quantity` → `amount_with_multiplier` → `parenthesized_quantity` →
//! `amount_with_attached_units` → `unit`). Compilation therefore runs in two
//! phases:
//!
//! 1. **Register**: every rule name gets a `RuleId` (its index).
//! 2. **Resolve**: every `RuleRef(name)` in every body is replaced by the
//!    referenced `RuleId`.
//!
//! The result is an arena of rules addressed by index, immutable after
//! construction and safe to share between threads.
//!
//! ## Invariants
//!
//! - `RuleId` is an index into `Grammar::rules`.
//! - Every `RuleRef` in a compiled body names an existing rule; a dangling
//!   name aborts compilation, so no partial grammar is ever returned.

use std::collections::HashMap;

use crate::{Action, Expr, GrammarError, Rule, RuleId, rules};

/// A rule after name resolution.
#[derive(Debug)]
pub(crate) struct CompiledRule {
    pub name: &'static str,
    pub body: Expr<RuleId>,
    pub action: Action,
}

/// Compiled ingredient-line grammar.
///
/// Build one with [`compile_grammar`]; the crate-level `parse` functions use a
/// cached instance.
#[derive(Debug)]
pub struct Grammar {
    rules: Vec<CompiledRule>,
    by_name: HashMap<&'static str, RuleId>,
    start: RuleId,
}

impl Grammar {
    /// Compile `rules`, starting parses from the rule named `start`.
    pub(crate) fn compile(rules: Vec<Rule>, start: &'static str) -> Result<Self, GrammarError> {
        let mut by_name: HashMap<&'static str, RuleId> = HashMap::with_capacity(rules.len());
        for (id, rule) in rules.iter().enumerate() {
            if by_name.insert(rule.name, id).is_some() {
                return Err(GrammarError::DuplicateRule(rule.name));
            }
        }

        let compiled = rules
            .into_iter()
            .map(|rule| {
                let body = resolve(&rule.body, rule.name, &by_name)?;
                Ok(CompiledRule { name: rule.name, body, action: rule.action })
            })
            .collect::<Result<Vec<_>, GrammarError>>()?;

        let start = *by_name.get(start).ok_or(GrammarError::MissingStartRule(start))?;

        Ok(Grammar { rules: compiled, by_name, start })
    }

    pub(crate) fn rule(&self, id: RuleId) -> &CompiledRule {
        &self.rules[id]
    }

    pub(crate) fn start(&self) -> RuleId {
        self.start
    }

    /// Number of named rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Whether a rule called `name` exists.
    pub fn has_rule(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Rule names in declaration order.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.name)
    }
}

fn resolve(
    expr: &Expr,
    owner: &'static str,
    by_name: &HashMap<&'static str, RuleId>,
) -> Result<Expr<RuleId>, GrammarError> {
    let resolve_all = |items: &[Expr]| -> Result<Vec<Expr<RuleId>>, GrammarError> {
        items.iter().map(|item| resolve(item, owner, by_name)).collect()
    };

    Ok(match expr {
        Expr::Literal(text) => Expr::Literal(*text),
        Expr::CharClass(pred) => Expr::CharClass(*pred),
        Expr::Pattern(re) => Expr::Pattern(*re),
        Expr::Sequence(items) => Expr::Sequence(resolve_all(items)?),
        Expr::OrderedChoice(alts) => Expr::OrderedChoice(resolve_all(alts)?),
        Expr::ZeroOrMore(inner) => Expr::ZeroOrMore(Box::new(resolve(inner, owner, by_name)?)),
        Expr::Optional(inner) => Expr::Optional(Box::new(resolve(inner, owner, by_name)?)),
        Expr::NegativeLookahead(inner) => Expr::NegativeLookahead(Box::new(resolve(inner, owner, by_name)?)),
        Expr::RuleRef(name) => {
            let id = by_name.get(name).ok_or(GrammarError::UndefinedRule { rule: owner, reference: *name })?;
            Expr::RuleRef(*id)
        }
    })
}

/// Compile the built-in ingredient-line grammar.
///
/// Every call builds a fresh, behaviorally identical instance; callers that
/// parse repeatedly should keep one around (the crate-level `parse` functions
/// already do).
pub fn compile_grammar() -> Result<Grammar, GrammarError> {
    Grammar::compile(rules::get(), rules::START_RULE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_grammar_compiles() {
        let grammar = compile_grammar().unwrap();
        assert!(grammar.has_rule("ingredient_addition"));
        assert!(grammar.has_rule("fluid_ounce"));
        assert_eq!(grammar.rule(grammar.start()).name, "ingredient_addition");
        assert_eq!(grammar.rule_names().count(), grammar.rule_count());
    }

    #[test]
    fn mutual_recursion_resolves_by_index() {
        let rules = vec![
            rule! { name: "list", body: seq![lit!("("), many!(call!("item")), lit!(")")] },
            rule! { name: "item", body: choice![call!("list"), lit!("x")] },
        ];
        let grammar = Grammar::compile(rules, "list").unwrap();
        match &grammar.rule(1).body {
            Expr::OrderedChoice(alts) => assert!(matches!(alts[0], Expr::RuleRef(0))),
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn undefined_reference_aborts_compilation() {
        let rules = vec![rule! { name: "top", body: seq![call!("missing"), lit!("x")] }];
        let err = Grammar::compile(rules, "top").unwrap_err();
        assert_eq!(err, GrammarError::UndefinedRule { rule: "top", reference: "missing" });
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let rules = vec![rule! { name: "a", body: lit!("x") }, rule! { name: "a", body: lit!("y") }];
        assert_eq!(Grammar::compile(rules, "a").unwrap_err(), GrammarError::DuplicateRule("a"));
    }

    #[test]
    fn missing_start_rule_is_rejected() {
        let rules = vec![rule! { name: "a", body: lit!("x") }];
        assert_eq!(Grammar::compile(rules, "b").unwrap_err(), GrammarError::MissingStartRule("b"));
    }
}
