//! Top-level structure of an ingredient line: the quantity forms, the
//! alternative quantity, the ingredient text and the lexical rules they share.

use crate::Rule;
use crate::rules::predicates::{is_letter, is_percentage_joiner, is_tab};

/// `multipart_quantity alternative_quantity? break? ingredient? catch_all`
///
/// The trailing catch-all makes this rule match any input.
fn rule_ingredient_addition() -> Rule {
    rule! {
        name: "ingredient_addition",
        body: seq![
            call!("multipart_quantity"),
            opt!(call!("alternative_quantity")),
            opt!(call!("break")),
            opt!(call!("ingredient")),
            call!("catch_all"),
        ],
        action: IngredientAddition,
    }
}

/// "2lb 4oz"
fn rule_multipart_quantity() -> Rule {
    rule! {
        name: "multipart_quantity",
        body: many!(seq![call!("quantity_fragment"), opt!(call!("break"))]),
        action: MultipartQuantity,
    }
}

fn rule_quantity_fragment() -> Rule {
    rule! {
        name: "quantity_fragment",
        body: choice![call!("quantity"), call!("amount")],
    }
}

/// "/ 2lb 4oz" after "1kg": the same quantity in another unit system.
fn rule_alternative_quantity() -> Rule {
    rule! {
        name: "alternative_quantity",
        body: seq![lit!("/"), opt!(call!("break")), call!("multipart_quantity")],
        action: AlternativeQuantity,
    }
}

fn rule_quantity() -> Rule {
    rule! {
        name: "quantity",
        body: choice![
            call!("amount_with_conversion"),
            call!("amount_with_attached_units"),
            call!("amount_with_multiplier"),
            call!("amount_with_property"),
            call!("amount_imprecise"),
        ],
    }
}

/// "4lb (900g)"
fn rule_amount_with_conversion() -> Rule {
    rule! {
        name: "amount_with_conversion",
        body: seq![
            call!("amount"),
            opt!(call!("break")),
            call!("unit"),
            not!(call!("letter")),
            call!("break"),
            call!("parenthesized_quantity"),
        ],
        action: AmountWithConversion,
    }
}

/// "1 kg", "12oz"
fn rule_amount_with_attached_units() -> Rule {
    rule! {
        name: "amount_with_attached_units",
        body: seq![call!("amount"), opt!(call!("break")), call!("unit"), not!(call!("letter"))],
        action: AmountWithAttachedUnits,
    }
}

/// "two (five ounce)"
fn rule_amount_with_multiplier() -> Rule {
    rule! {
        name: "amount_with_multiplier",
        body: seq![call!("amount"), opt!(call!("break")), call!("parenthesized_quantity")],
        action: AmountWithMultiplier,
    }
}

/// "four (thinly sliced)"
fn rule_amount_with_property() -> Rule {
    rule! {
        name: "amount_with_property",
        body: seq![call!("amount"), opt!(call!("break")), call!("parenthesized_property")],
        action: AmountWithProperty,
    }
}

/// "pinch"
fn rule_amount_imprecise() -> Rule {
    rule! {
        name: "amount_imprecise",
        body: seq![call!("imprecise_unit"), not!(call!("letter"))],
        action: AmountImprecise,
    }
}

fn rule_parenthesized_quantity() -> Rule {
    rule! {
        name: "parenthesized_quantity",
        body: seq![call!("open"), call!("amount_with_attached_units"), call!("close")],
    }
}

fn rule_parenthesized_property() -> Rule {
    rule! {
        name: "parenthesized_property",
        body: seq![
            call!("open"),
            opt!(call!("amount")),
            opt!(call!("break")),
            call!("word"),
            many!(seq![call!("break"), call!("word")]),
            call!("close"),
        ],
    }
}

/// Words to the end of input, or a leading percentage such as "1%-fat milk".
fn rule_ingredient() -> Rule {
    rule! {
        name: "ingredient",
        body: choice![
            seq![call!("word"), many!(seq![call!("break"), call!("word")]), call!("catch_all")],
            seq![
                call!("percentage"),
                class!(is_percentage_joiner),
                call!("word"),
                many!(seq![call!("break"), call!("word")]),
                call!("catch_all"),
            ],
        ],
        action: Ingredient,
    }
}

fn rule_break() -> Rule {
    rule! {
        name: "break",
        body: choice![lit!(" "), call!("comma"), call!("hyphen"), class!(is_tab)],
    }
}

fn rule_separator() -> Rule {
    rule! {
        name: "separator",
        body: choice![call!("break"), lit!("-")],
    }
}

fn rule_word() -> Rule {
    rule! {
        name: "word",
        body: seq![call!("letter"), many!(call!("letter"))],
    }
}

fn rule_letter() -> Rule {
    rule! { name: "letter", body: class!(is_letter) }
}

fn rule_open() -> Rule {
    rule! { name: "open", body: lit!("(") }
}

fn rule_close() -> Rule {
    rule! { name: "close", body: lit!(")") }
}

fn rule_comma() -> Rule {
    rule! { name: "comma", body: lit!(",") }
}

fn rule_hyphen() -> Rule {
    rule! { name: "hyphen", body: lit!("-") }
}

/// Everything that is left, newlines included.
fn rule_catch_all() -> Rule {
    rule! {
        name: "catch_all",
        body: re!(r"^(?s).*"),
        action: Remainder,
    }
}

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        rule_ingredient_addition(),
        rule_multipart_quantity(),
        rule_quantity_fragment(),
        rule_alternative_quantity(),
        rule_quantity(),
        rule_amount_with_conversion(),
        rule_amount_with_attached_units(),
        rule_amount_with_multiplier(),
        rule_amount_with_property(),
        rule_amount_imprecise(),
        rule_parenthesized_quantity(),
        rule_parenthesized_property(),
        rule_ingredient(),
        rule_break(),
        rule_separator(),
        rule_word(),
        rule_letter(),
        rule_open(),
        rule_close(),
        rule_comma(),
        rule_hyphen(),
        rule_catch_all(),
    ]
}
