//! Property tests: `parse` accepts any text and always returns a well-formed
//! result.

use larder::{Options, parse, parse_with, try_parse, unit_named};
use proptest::prelude::*;

/// Completely random text.
fn arbitrary_string() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..200).prop_map(|chars| chars.into_iter().collect())
}

/// Text assembled from the pieces real ingredient lines are made of.
fn ingredient_like_string() -> impl Strategy<Value = String> {
    let token = prop_oneof![
        "[0-9]{1,4}".prop_map(String::from),
        "[0-9]{1,2}/[0-9]{1,2}".prop_map(String::from),
        "[0-9]?\\.[0-9]{1,3}".prop_map(String::from),
        "[0-9]{1,3}%".prop_map(String::from),
        "[a-z]{1,8}".prop_map(String::from),
        prop::sample::select(vec![
            "a", "one", "twelve", "½", "⅝", "⁄", "cup", "cups", "c", "T", "tsp", "oz", "fl", "fluid", "lb", "#", "kg",
            "ml", "L.", "pinch", "heads", "of", "(", ")", "/", "-", ",", " ", "  ", "\t", "\n",
        ])
        .prop_map(String::from),
    ];
    prop::collection::vec(token, 0..24).prop_map(|parts| parts.concat())
}

/// Ingredient lines carrying digit runs far longer than any real amount.
fn long_digit_string() -> impl Strategy<Value = String> {
    let token = prop_oneof![
        "[0-9]{10,420}".prop_map(String::from),
        prop::sample::select(vec!["zero", "0", "a", "(", ")", "/", " ", "ounce", "cups", "beans", "1/2"])
            .prop_map(String::from),
    ];
    prop::collection::vec(token, 0..10).prop_map(|parts| parts.join(" "))
}

fn any_input() -> impl Strategy<Value = String> {
    prop_oneof![arbitrary_string(), ingredient_like_string(), long_digit_string()]
}

proptest! {
    #[test]
    fn parse_never_fails(input in any_input()) {
        prop_assert!(try_parse(&input).is_ok());
    }

    #[test]
    fn fragments_are_well_formed(input in any_input()) {
        let result = parse(&input);
        for fragment in &result.quantity {
            prop_assert!(fragment.amount.is_finite() && fragment.amount >= 0.0, "bad amount in {:?}", result);
            match (&fragment.unit, fragment.unit_type) {
                (Some(unit), Some(unit_type)) => {
                    let spec = unit_named(unit);
                    prop_assert!(spec.is_some(), "unknown unit {unit:?}");
                    prop_assert_eq!(spec.map(|s| s.category), Some(unit_type));
                }
                (None, None) => {}
                _ => prop_assert!(false, "unit and unit_type disagree in {:?}", result),
            }
        }
    }

    #[test]
    fn long_digit_runs_give_finite_amounts(input in long_digit_string()) {
        let result = parse(&input);
        for fragment in &result.quantity {
            prop_assert!(fragment.amount.is_finite() && fragment.amount >= 0.0, "bad amount in {:?}", result);
        }
        let json = serde_json::to_string(&result).unwrap();
        prop_assert!(!json.contains("\"amount\":null"), "{}", json);
    }

    #[test]
    fn ingredient_is_trimmed(input in any_input()) {
        let result = parse(&input);
        prop_assert_eq!(result.ingredient.trim(), result.ingredient.as_str());
    }

    #[test]
    fn parse_is_deterministic(input in ingredient_like_string()) {
        prop_assert_eq!(parse(&input), parse(&input));
    }

    #[test]
    fn over_long_input_has_no_quantity(input in ingredient_like_string()) {
        let options = Options { max_input_len: 4, ..Options::default() };
        let result = parse_with(&input, &options);
        if input.len() > 4 {
            prop_assert!(result.quantity.is_empty());
            prop_assert_eq!(result.ingredient, input.trim());
        }
    }

    #[test]
    fn tiny_depth_limit_still_parses(input in ingredient_like_string(), max_depth in 0usize..6) {
        let options = Options { max_depth, ..Options::default() };
        prop_assert!(larder::try_parse_with(&input, &options).is_ok());
    }
}
