//! Value tables for written numbers and Unicode vulgar fractions.
//!
//! The ordered slices feed the grammar (their order is the match priority);
//! the maps serve the evaluator.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Written numbers in match priority order.
///
/// "a" precedes "an", so "an" can never be matched as a number: once "a"
/// commits, the required break after it fails on the "n".
pub(crate) const WRITTEN_NUMBERS: &[(&str, f64)] = &[
    ("a", 1.0),
    ("an", 1.0),
    ("zero", 0.0),
    ("one", 1.0),
    ("two", 2.0),
    ("three", 3.0),
    ("four", 4.0),
    ("five", 5.0),
    ("six", 6.0),
    ("seven", 7.0),
    ("eight", 8.0),
    ("nine", 9.0),
    ("ten", 10.0),
    ("eleven", 11.0),
    ("twelve", 12.0),
    ("thirteen", 13.0),
    ("fourteen", 14.0),
    ("fifteen", 15.0),
    ("sixteen", 16.0),
    ("seventeen", 17.0),
    ("eighteen", 18.0),
    ("nineteen", 19.0),
    ("twenty", 20.0),
    ("thirty", 30.0),
    ("forty", 40.0),
    ("fifty", 50.0),
    ("sixty", 60.0),
    ("seventy", 70.0),
    ("eighty", 80.0),
    ("ninety", 90.0),
];

/// Single-glyph vulgar fractions and their exact values.
pub(crate) const FRACTION_GLYPHS: &[(&str, f64)] = &[
    ("¼", 1.0 / 4.0),
    ("½", 1.0 / 2.0),
    ("¾", 3.0 / 4.0),
    ("⅐", 1.0 / 7.0),
    ("⅑", 1.0 / 9.0),
    ("⅒", 1.0 / 10.0),
    ("⅓", 1.0 / 3.0),
    ("⅔", 2.0 / 3.0),
    ("⅕", 1.0 / 5.0),
    ("⅖", 2.0 / 5.0),
    ("⅗", 3.0 / 5.0),
    ("⅘", 4.0 / 5.0),
    ("⅙", 1.0 / 6.0),
    ("⅚", 5.0 / 6.0),
    ("⅛", 1.0 / 8.0),
    ("⅜", 3.0 / 8.0),
    ("⅝", 5.0 / 8.0),
    ("⅞", 7.0 / 8.0),
];

static WRITTEN_NUMBER_MAP: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| WRITTEN_NUMBERS.iter().copied().collect());

static FRACTION_GLYPH_MAP: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| FRACTION_GLYPHS.iter().copied().collect());

/// Value of a written number word, e.g. `"twelve"` -> `12.0`. Case-sensitive.
pub fn written_number_value(word: &str) -> Option<f64> {
    WRITTEN_NUMBER_MAP.get(word).copied()
}

/// Value of a single vulgar-fraction glyph, e.g. `"⅝"` -> `0.625`.
pub fn fraction_glyph_value(glyph: &str) -> Option<f64> {
    FRACTION_GLYPH_MAP.get(glyph).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn written_numbers_resolve() {
        assert_eq!(written_number_value("a"), Some(1.0));
        assert_eq!(written_number_value("zero"), Some(0.0));
        assert_eq!(written_number_value("nineteen"), Some(19.0));
        assert_eq!(written_number_value("ninety"), Some(90.0));
        assert_eq!(written_number_value("Ninety"), None);
        assert_eq!(written_number_value("hundred"), None);
    }

    #[test]
    fn glyphs_keep_full_precision() {
        assert_eq!(fraction_glyph_value("⅝"), Some(0.625));
        assert_eq!(fraction_glyph_value("⅓"), Some(1.0 / 3.0));
        assert_eq!(fraction_glyph_value("1/3"), None);
    }

    #[test]
    fn tables_have_no_duplicate_keys() {
        assert_eq!(WRITTEN_NUMBER_MAP.len(), WRITTEN_NUMBERS.len());
        assert_eq!(FRACTION_GLYPH_MAP.len(), FRACTION_GLYPHS.len());
    }
}
