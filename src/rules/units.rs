//! Unit taxonomy and the unit productions generated from it.
//!
//! Every unit belongs to exactly one [`UnitType`]. Its spellings are tried in
//! declared order, and the units of a category are tried in table order, so
//! both orders are part of the grammar. For example `calorie` must come before
//! `cup`: otherwise "30 cal" would commit to the "c" spelling of cup and then
//! fail the not-followed-by-letter check.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Expr, Rule};

/// Coarse classification attached to every recognized unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    English,
    Metric,
    /// Units without a standard conversion factor ("pinch", "handful").
    Imprecise,
}

impl UnitType {
    pub const ALL: [UnitType; 3] = [UnitType::English, UnitType::Metric, UnitType::Imprecise];

    pub fn as_str(self) -> &'static str {
        match self {
            UnitType::English => "english",
            UnitType::Metric => "metric",
            UnitType::Imprecise => "imprecise",
        }
    }

    /// Name of the grammar rule choosing among this category's units.
    pub(crate) fn rule_name(self) -> &'static str {
        match self {
            UnitType::English => "english_unit",
            UnitType::Metric => "metric_unit",
            UnitType::Imprecise => "imprecise_unit",
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSpec {
    /// Canonical name, reported in results and used as the rule name.
    pub name: &'static str,
    pub category: UnitType,
    /// Literal surface spellings in match priority order.
    pub spellings: &'static [&'static str],
    /// Set for compound units: `spellings` are qualifiers that must be
    /// followed by a break and then any spelling of this base unit.
    pub qualifies: Option<&'static str>,
}

const fn unit(name: &'static str, category: UnitType, spellings: &'static [&'static str]) -> UnitSpec {
    UnitSpec { name, category, spellings, qualifies: None }
}

static UNITS: &[UnitSpec] = &[
    // english
    unit("calorie", UnitType::English, &["calories", "calorie", "cal", "kilocalories", "kilocalorie", "kCal", "kcal"]),
    unit("cup", UnitType::English, &["cups", "cup(s)", "cup", "C.", "C", "c.", "c"]),
    UnitSpec {
        name: "fluid_ounce",
        category: UnitType::English,
        spellings: &["fluid", "fl.", "fl"],
        qualifies: Some("ounce"),
    },
    unit("gallon", UnitType::English, &["gallons.", "gallons", "gallon(s)", "gallon.", "gallon", "gal.", "gal"]),
    unit("ounce", UnitType::English, &["ounces", "ounce(s)", "ounce.", "ounce", "oz.", "oz"]),
    unit("pint", UnitType::English, &["pints", "pint(s)", "pint.", "pint", "pt.", "pt"]),
    unit("pound", UnitType::English, &["pounds", "pound(s)", "pound.", "pound", "lbs.", "lbs", "lb.", "lb", "#"]),
    unit("quart", UnitType::English, &["quarts", "quart(s)", "quart.", "quart", "qts.", "qts", "qt.", "qt"]),
    unit(
        "tablespoon",
        UnitType::English,
        &[
            "tablespoons",
            "tablespoon(s)",
            "tablespoon.",
            "tablespoon",
            "tbspns.",
            "tbspns",
            "Tbsp.",
            "Tbsp",
            "tbsp.",
            "tbsp",
            "TBS.",
            "TBS",
            "Tbs.",
            "Tbs",
            "tbs.",
            "tbs",
            "T.",
            "T",
        ],
    ),
    unit(
        "teaspoon",
        UnitType::English,
        &["teaspoons", "teaspoon(s)", "teaspoon", "teasps.", "teasps", "teasp.", "teasp", "tsp.", "tsp", "t.", "t"],
    ),
    // metric
    unit("gram", UnitType::Metric, &["grams", "gram(s)", "gram", "gr.", "gr", "G.", "G", "g.", "g"]),
    unit("joule", UnitType::Metric, &["joules", "joule(s)", "joule", "j"]),
    unit("kilogram", UnitType::Metric, &["kilograms", "kilogram(s)", "kilogram", "KG.", "KG", "Kg.", "Kg", "kg.", "kg"]),
    unit("kilojoule", UnitType::Metric, &["kilojoules", "kilojoule(s)", "kilojoule", "kJ", "kj"]),
    unit("liter", UnitType::Metric, &["liters", "liter(s)", "liter", "L.", "L", "l.", "l"]),
    unit("milligram", UnitType::Metric, &["milligrams", "milligram(s)", "milligram", "mgs.", "mgs", "mg.", "mg"]),
    unit("milliliter", UnitType::Metric, &["milliliters", "milliliter(s)", "milliliter", "mls.", "mls", "ml.", "ml"]),
    // imprecise
    unit("dash", UnitType::Imprecise, &["dashes", "dash"]),
    unit("handful", UnitType::Imprecise, &["handfuls", "handful"]),
    unit("pinch", UnitType::Imprecise, &["pinches", "pinch"]),
    unit("touch", UnitType::Imprecise, &["touches", "touch"]),
    unit("stick", UnitType::Imprecise, &["sticks", "stick(s)", "stick"]),
    unit("punnet", UnitType::Imprecise, &["punnetts", "punnett", "punnets", "punnet"]),
    unit("head", UnitType::Imprecise, &["heads", "head"]),
];

/// Every recognized unit, grouped by category in match priority order.
pub fn units() -> &'static [UnitSpec] {
    UNITS
}

/// Look up a unit by its canonical name.
pub fn unit_named(name: &str) -> Option<&'static UnitSpec> {
    UNITS.iter().find(|u| u.name == name)
}

fn spelling_choice(spellings: &'static [&'static str]) -> Expr {
    Expr::OrderedChoice(spellings.iter().map(|s| lit!(*s)).collect())
}

fn unit_rule(spec: &UnitSpec) -> Rule {
    let body = match spec.qualifies {
        Some(base) => seq![spelling_choice(spec.spellings), call!("break"), Expr::RuleRef(base)],
        None => spelling_choice(spec.spellings),
    };
    rule! { name: spec.name, body: body, action: Unit }
}

/// `unit`, one choice rule per category and one rule per unit.
pub(crate) fn rules() -> Vec<Rule> {
    let mut rules = vec![rule! {
        name: "unit",
        body: Expr::OrderedChoice(UnitType::ALL.iter().map(|c| Expr::RuleRef(c.rule_name())).collect()),
        action: UnitQuantity,
    }];

    for category in UnitType::ALL {
        let members = UNITS.iter().filter(|u| u.category == category).map(|u| Expr::RuleRef(u.name)).collect();
        rules.push(rule! { name: category.rule_name(), body: Expr::OrderedChoice(members) });
    }

    rules.extend(UNITS.iter().map(unit_rule));
    rules
}
