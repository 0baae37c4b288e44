//! Numeric amounts: decimals, mixed numbers, fractions, integers and
//! written numbers, plus the percentage token that must never be read as an
//! amount.

use crate::rules::lookup::{FRACTION_GLYPHS, WRITTEN_NUMBERS};
use crate::rules::predicates::{is_digit, is_fraction_slash};
use crate::{Expr, Rule};

fn rule_amount() -> Rule {
    rule! {
        name: "amount",
        body: choice![call!("float"), call!("mixed_number"), call!("fraction"), call!("integer"), call!("number")],
        action: Amount,
    }
}

/// "1.5", ".25"
fn rule_float() -> Rule {
    rule! {
        name: "float",
        body: seq![opt!(call!("integer")), lit!("."), call!("integer")],
        action: Decimal,
    }
}

/// "1 1/2", "1-1/2", "3-⅝"
fn rule_mixed_number() -> Rule {
    rule! {
        name: "mixed_number",
        body: seq![call!("integer"), call!("separator"), call!("fraction")],
        action: MixedNumber,
    }
}

fn rule_fraction() -> Rule {
    rule! {
        name: "fraction",
        body: choice![call!("multicharacter_fraction"), call!("unicode_fraction")],
        action: Fraction,
    }
}

/// "2/3" or "2⁄3"
fn rule_multicharacter_fraction() -> Rule {
    rule! {
        name: "multicharacter_fraction",
        body: seq![call!("integer"), class!(is_fraction_slash), call!("denominator")],
        action: DelimitedFraction,
    }
}

/// Like `integer` but never zero, so "1/0" is not a fraction.
fn rule_denominator() -> Rule {
    rule! {
        name: "denominator",
        body: seq![re!(r"^0*[1-9][0-9]{0,14}"), not!(class!(is_digit)), not!(lit!("%"))],
        action: Integer,
    }
}

/// Up to 15 digits not followed by "%"; "1%" belongs to the ingredient's
/// percentage. Longer digit runs are never amounts.
fn rule_integer() -> Rule {
    rule! {
        name: "integer",
        body: seq![re!(r"^[0-9]{1,15}"), not!(class!(is_digit)), not!(lit!("%"))],
        action: Integer,
    }
}

fn rule_unicode_fraction() -> Rule {
    rule! {
        name: "unicode_fraction",
        body: Expr::OrderedChoice(FRACTION_GLYPHS.iter().map(|(glyph, _)| lit!(*glyph)).collect()),
        action: GlyphFraction,
    }
}

/// A written number only counts when a break follows it ("a cup", not "apple").
fn rule_number() -> Rule {
    rule! {
        name: "number",
        body: seq![call!("written_number"), call!("break")],
    }
}

fn rule_written_number() -> Rule {
    rule! {
        name: "written_number",
        body: Expr::OrderedChoice(WRITTEN_NUMBERS.iter().map(|(word, _)| lit!(*word)).collect()),
        action: WrittenNumber,
    }
}

fn rule_percentage() -> Rule {
    rule! {
        name: "percentage",
        body: choice![re!(r"^100%"), re!(r"^[1-9][0-9]%"), re!(r"^[0-9]%")],
    }
}

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        rule_amount(),
        rule_float(),
        rule_mixed_number(),
        rule_fraction(),
        rule_multicharacter_fraction(),
        rule_denominator(),
        rule_integer(),
        rule_unicode_fraction(),
        rule_number(),
        rule_written_number(),
        rule_percentage(),
    ]
}
