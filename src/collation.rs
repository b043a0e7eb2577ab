//! Locale-aware title comparison.
//!
//! Titles are ordered with the Unicode Collation Algorithm using the CLDR root
//! locale at tertiary strength, which is what a browser's `localeCompare`
//! does with no locale argument:
//!
//! - punctuation and symbols sort before digits, digits before letters
//! - letters outside Latin-1 (`Ł`, `Œ`, `Æ`) sort with their base letters
//! - accent differences outrank case differences; lowercase sorts first
//!
//! Digits compare character by character (`10 Apps < 9 Lives`).

use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Failed to load root collation data: {0}")]
pub struct CollationError(String);

/// Root-locale collator for example titles.
pub struct TitleCollator {
    collator: Collator,
}

impl TitleCollator {
    pub fn new() -> Result<Self, CollationError> {
        let collator = Collator::try_new(&Default::default(), CollatorOptions::new())
            .map_err(|e| CollationError(e.to_string()))?;
        Ok(Self { collator })
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut titles: Vec<&str>) -> Vec<&str> {
        let collator = TitleCollator::new().unwrap();
        titles.sort_by(|a, b| collator.compare(a, b));
        titles
    }

    #[test]
    fn case_does_not_split_the_alphabet() {
        assert_eq!(
            sorted(vec!["Banana", "apple", "Cherry"]),
            vec!["apple", "Banana", "Cherry"]
        );
    }

    #[test]
    fn lowercase_first_on_case_only_difference() {
        assert_eq!(sorted(vec!["Apple", "apple"]), vec!["apple", "Apple"]);
    }

    #[test]
    fn accents_sort_with_base_letter() {
        assert_eq!(
            sorted(vec!["fig", "éclair", "date"]),
            vec!["date", "éclair", "fig"]
        );
    }

    #[test]
    fn accent_difference_outranks_case_difference() {
        assert_eq!(
            sorted(vec!["résumé", "Resume", "resume"]),
            vec!["resume", "Resume", "résumé"]
        );
    }

    #[test]
    fn symbols_digits_and_non_latin1_letters() {
        assert_eq!(
            sorted(vec![
                "Zebra",
                "Łódź",
                "[WIP] Chess",
                "2048 Game",
                "~Tilde",
                "🚀 Rocket",
                "Apple",
                "Œuvre",
                "Ærø",
            ]),
            vec![
                "[WIP] Chess",
                "~Tilde",
                "🚀 Rocket",
                "2048 Game",
                "Ærø",
                "Apple",
                "Łódź",
                "Œuvre",
                "Zebra",
            ]
        );
    }

    #[test]
    fn prefix_sorts_first() {
        let collator = TitleCollator::new().unwrap();
        assert_eq!(collator.compare("Snake", "Snake Game"), Ordering::Less);
    }

    #[test]
    fn digits_compare_as_characters() {
        assert_eq!(sorted(vec!["9 Lives", "10 Apps"]), vec!["10 Apps", "9 Lives"]);
    }

    #[test]
    fn identical_strings_are_equal() {
        let collator = TitleCollator::new().unwrap();
        assert_eq!(collator.compare("Todo", "Todo"), Ordering::Equal);
    }
}
