use crate::{ParseResult, UnitType, parse, unit_named};

type Case = (&'static str, &'static [(f64, Option<&'static str>)], &'static str);

fn check(cases: &[Case]) {
    for (input, quantity, ingredient) in cases {
        let result = parse(input);
        assert_matches(input, &result, quantity, ingredient);
    }
}

fn assert_matches(input: &str, result: &ParseResult, quantity: &[(f64, Option<&str>)], ingredient: &str) {
    assert_eq!(result.ingredient, ingredient, "ingredient of {input:?} ({result:#?})");
    assert_eq!(result.quantity.len(), quantity.len(), "fragment count of {input:?} ({result:#?})");

    for (fragment, (amount, unit)) in result.quantity.iter().zip(quantity) {
        assert!((fragment.amount - amount).abs() < 1e-9, "amount of {input:?}: {} != {amount}", fragment.amount);
        assert_eq!(fragment.unit.as_deref(), *unit, "unit of {input:?}");
        let expected_type: Option<UnitType> = unit.and_then(unit_named).map(|u| u.category);
        assert_eq!(fragment.unit_type, expected_type, "unit type of {input:?}");
    }
}

#[test]
fn amounts() {
    check(&[
        ("1.0 cup flour", &[(1.0, Some("cup"))], "flour"),
        ("1.5 potatoes", &[(1.5, None)], "potatoes"),
        (".25 cups flour", &[(0.25, Some("cup"))], "flour"),
        (".5 potatoes", &[(0.5, None)], "potatoes"),
        ("12345 potatoes", &[(12345.0, None)], "potatoes"),
        ("1/2 potato", &[(0.5, None)], "potato"),
        ("1/2 cups flour", &[(0.5, Some("cup"))], "flour"),
        ("2/3 cup sugar", &[(0.667, Some("cup"))], "sugar"),
        ("1/16 teaspoon salt", &[(0.062, Some("teaspoon"))], "salt"),
        ("5/16 cup oats", &[(0.312, Some("cup"))], "oats"),
        ("1 1/16 cups flour", &[(1.062, Some("cup"))], "flour"),
        ("1⁄2 orange", &[(0.5, None)], "orange"),
        ("⅝ cup milk", &[(0.625, Some("cup"))], "milk"),
        ("1 1/2 potatoes", &[(1.5, None)], "potatoes"),
        ("1 1/2 cups flour", &[(1.5, Some("cup"))], "flour"),
        ("1 2/3 cups flour", &[(1.667, Some("cup"))], "flour"),
        ("1 2/3 cup(s) flour", &[(1.667, Some("cup"))], "flour"),
        ("1 2/3 C flour", &[(1.667, Some("cup"))], "flour"),
        ("1 2/3 C. flour", &[(1.667, Some("cup"))], "flour"),
        ("1-1/2 ounce vanilla ice cream", &[(1.5, Some("ounce"))], "vanilla ice cream"),
        ("1-½ ounce vanilla ice cream", &[(1.5, Some("ounce"))], "vanilla ice cream"),
        ("3-⅝ ounces, weight feta cheese, crumbled/diced", &[(3.625, Some("ounce"))], "weight feta cheese, crumbled/diced"),
        ("5 3/4 pinches potatoes", &[(5.75, Some("pinch"))], "potatoes"),
        ("one cup flour", &[(1.0, Some("cup"))], "flour"),
        ("a cup of flour", &[(1.0, Some("cup"))], "flour"),
    ]);
}

#[test]
fn unit_spellings() {
    check(&[
        ("12g potatoes", &[(12.0, Some("gram"))], "potatoes"),
        ("12 gram(s) potatoes", &[(12.0, Some("gram"))], "potatoes"),
        ("12gram(s) potatoes", &[(12.0, Some("gram"))], "potatoes"),
        ("12G. potatoes", &[(12.0, Some("gram"))], "potatoes"),
        ("12G potatoes", &[(12.0, Some("gram"))], "potatoes"),
        ("12oz tequila", &[(12.0, Some("ounce"))], "tequila"),
        ("6 tablespoons flour", &[(6.0, Some("tablespoon"))], "flour"),
        ("6 tablespoon(s) flour", &[(6.0, Some("tablespoon"))], "flour"),
        ("6 tbspns. flour", &[(6.0, Some("tablespoon"))], "flour"),
        ("6 Tbsp flour", &[(6.0, Some("tablespoon"))], "flour"),
        ("6 tbsp. flour", &[(6.0, Some("tablespoon"))], "flour"),
        ("6 TBS flour", &[(6.0, Some("tablespoon"))], "flour"),
        ("6 Tbs. flour", &[(6.0, Some("tablespoon"))], "flour"),
        ("6 teaspoons flour", &[(6.0, Some("teaspoon"))], "flour"),
        ("6 teasp. flour", &[(6.0, Some("teaspoon"))], "flour"),
        ("6 tsp flour", &[(6.0, Some("teaspoon"))], "flour"),
        ("6 t. flour", &[(6.0, Some("teaspoon"))], "flour"),
        ("6 t flour", &[(6.0, Some("teaspoon"))], "flour"),
        ("2 pound(s) potatoes", &[(2.0, Some("pound"))], "potatoes"),
        ("2 # potatoes", &[(2.0, Some("pound"))], "potatoes"),
        ("2 pound. potatoes", &[(2.0, Some("pound"))], "potatoes"),
        ("3 liter(s) hot vegetable stock", &[(3.0, Some("liter"))], "hot vegetable stock"),
        ("3 L. hot vegetable stock", &[(3.0, Some("liter"))], "hot vegetable stock"),
        ("3 pint. hot vegetable stock", &[(3.0, Some("pint"))], "hot vegetable stock"),
        ("3 quarts hot vegetable stock", &[(3.0, Some("quart"))], "hot vegetable stock"),
        ("20 gallons. bananas", &[(20.0, Some("gallon"))], "bananas"),
        ("20 gallon(s) bananas", &[(20.0, Some("gallon"))], "bananas"),
        ("30 cal", &[(30.0, Some("calorie"))], ""),
        ("2.5 kcal", &[(2.5, Some("calorie"))], ""),
        ("50 joule(s)", &[(50.0, Some("joule"))], ""),
        ("1 kJ", &[(1.0, Some("kilojoule"))], ""),
        ("3 kilojoule(s)", &[(3.0, Some("kilojoule"))], ""),
        ("5 mgs.", &[(5.0, Some("milligram"))], ""),
        ("5 g", &[(5.0, Some("gram"))], ""),
        ("1 fl oz rum", &[(1.0, Some("fluid_ounce"))], "rum"),
        ("2 fluid ounces cream", &[(2.0, Some("fluid_ounce"))], "cream"),
    ]);
}

#[test]
fn imprecise_units() {
    check(&[
        ("pinch salt", &[(1.0, Some("pinch"))], "salt"),
        ("stick cinnamon", &[(1.0, Some("stick"))], "cinnamon"),
        ("3 sticks cinnamon", &[(3.0, Some("stick"))], "cinnamon"),
        ("head lettuce", &[(1.0, Some("head"))], "lettuce"),
        ("4 heads lettuce", &[(4.0, Some("head"))], "lettuce"),
        ("punnet raspberries", &[(1.0, Some("punnet"))], "raspberries"),
        ("3 punnetts raspberries", &[(3.0, Some("punnet"))], "raspberries"),
        ("4 punnett raspberries", &[(4.0, Some("punnet"))], "raspberries"),
        ("dash of bitters", &[(1.0, Some("dash"))], "bitters"),
    ]);
}

#[test]
fn parenthesized_quantities() {
    check(&[
        ("12 (6-ounce) boneless skinless chicken breasts", &[(72.0, Some("ounce"))], "boneless skinless chicken breasts"),
        ("1 (28 ounce) can crushed tomatoes", &[(28.0, Some("ounce"))], "can crushed tomatoes"),
        ("2 (28 ounce) can crushed tomatoes", &[(56.0, Some("ounce"))], "can crushed tomatoes"),
        ("two (five ounce) can crushed tomatoes", &[(10.0, Some("ounce"))], "can crushed tomatoes"),
        ("4 (16 ounce) t-bone steaks, at room temperature", &[(64.0, Some("ounce"))], "t-bone steaks, at room temperature"),
        ("4lb (900g) potatoes", &[(4.0, Some("pound"))], "potatoes"),
        (
            "1 tablespoon (3 teaspoons) Sazon seasoning blend (recommended: Goya)",
            &[(1.0, Some("tablespoon"))],
            "Sazon seasoning blend (recommended: Goya)",
        ),
        ("6 (thinly sliced) bananas", &[(6.0, None)], "bananas"),
        ("6 (1/2 inch thick) slices Italian bread", &[(6.0, None)], "slices Italian bread"),
    ]);
}

#[test]
fn multipart_and_alternative_quantities() {
    check(&[
        ("2lb 4oz potatoes", &[(2.0, Some("pound")), (4.0, Some("ounce"))], "potatoes"),
        ("2lb 4oz (1kg) potatoes", &[(2.0, Some("pound")), (4.0, Some("ounce"))], "potatoes"),
        ("3 28 ounce cans of crushed tomatoes", &[(84.0, Some("ounce"))], "cans of crushed tomatoes"),
        ("one 28 ounce can crushed tomatoes", &[(28.0, Some("ounce"))], "can crushed tomatoes"),
        ("two five ounce can crushed tomatoes", &[(10.0, Some("ounce"))], "can crushed tomatoes"),
        ("1kg / 2lb 4oz potatoes", &[(1.0, Some("kilogram"))], "potatoes"),
        ("1 kilogram(s) / 2lb 4oz potatoes", &[(1.0, Some("kilogram"))], "potatoes"),
        ("1KG. / 2lb 4oz potatoes", &[(1.0, Some("kilogram"))], "potatoes"),
        ("1Kg / 2lb 4oz potatoes", &[(1.0, Some("kilogram"))], "potatoes"),
        ("750ml/1 pint 7fl oz hot vegetable stock", &[(750.0, Some("milliliter"))], "hot vegetable stock"),
        ("750 milliliter(s)/1 pint 7fl oz hot vegetable stock", &[(750.0, Some("milliliter"))], "hot vegetable stock"),
        ("750mls./1 pint 7fl oz hot vegetable stock", &[(750.0, Some("milliliter"))], "hot vegetable stock"),
    ]);
}

#[test]
fn ingredient_text() {
    check(&[
        ("apple", &[], "apple"),
        ("ground black pepper to taste", &[], "ground black pepper to taste"),
        ("1 egg", &[(1.0, None)], "egg"),
        ("2 eggs, beaten", &[(2.0, None)], "eggs, beaten"),
        ("1 clove garlic, minced", &[(1.0, None)], "clove garlic, minced"),
        ("1 garlic clove, sliced in 1/2", &[(1.0, None)], "garlic clove, sliced in 1/2"),
        ("2 cups of potatoes", &[(2.0, Some("cup"))], "potatoes"),
        ("16-ounce can of sliced pineapple", &[(16.0, Some("ounce"))], "can of sliced pineapple"),
        ("2 cups 1%-fat milk", &[(2.0, Some("cup"))], "1%-fat milk"),
        ("100% rye flour", &[], "100% rye flour"),
        ("", &[], ""),
        ("   ", &[], ""),
    ]);
}
