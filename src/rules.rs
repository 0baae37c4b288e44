//! The ingredient-line grammar.
//!
//! Rules are plain data (see `Rule` in `lib.rs`) declared with the macros in
//! `macros.rs` and grouped by concern. Nothing here matches text by itself:
//! [`get`] hands the full rule list to `engine::compile_grammar`, which
//! resolves the rule references into an index-addressed registry.
//!
//! Declaration order inside every ordered choice is significant and must not
//! be rearranged.

pub(crate) mod amount;
pub(crate) mod ingredient;
pub(crate) mod lookup;
pub(crate) mod predicates;
pub(crate) mod units;

#[cfg(test)]
mod tests;

use crate::Rule;

/// Rule every parse starts from.
pub(crate) const START_RULE: &str = "ingredient_addition";

/// All rules of the ingredient-line grammar.
pub(crate) fn get() -> Vec<Rule> {
    let mut rules = ingredient::rules();
    rules.extend(amount::rules());
    rules.extend(units::rules());
    rules
}
