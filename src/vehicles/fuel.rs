//! Guesses a vehicle's fuel type from its trade name.
//!
//! The registration dataset only carries the trade name, so the category is a
//! keyword heuristic: the lower-cased name is tested against each group in
//! [`KEYWORD_GROUPS`] in order and the first group with a matching keyword
//! wins. Names that match nothing are counted as gasoline.
//!
//! A keyword matches when it occurs at the start of a word, i.e. not directly
//! after a letter. Digits and punctuation may follow it ("ev6", "id.3",
//! "hybride"). Without the word-start rule "id" would match inside "hybrid"
//! and every hybrid would be counted as electric. The flip side is that
//! "BEV" suffixes do not count as electric.

use crate::types::fuel_category::FuelCategory;

/// Keyword groups in evaluation order. Earlier groups win on overlap, so
/// "Passat Diesel Hybrid" is a hybrid.
pub const KEYWORD_GROUPS: [(FuelCategory, &[&str]); 4] = [
    (
        FuelCategory::Electric,
        &["ev", "electric", "id", "e-tron", "mach-e"],
    ),
    (FuelCategory::Hybrid, &["hybrid", "phev", "plugin"]),
    (FuelCategory::Diesel, &["diesel"]),
    (FuelCategory::Hydrogen, &["waterstof"]),
];

pub const FALLBACK_CATEGORY: FuelCategory = FuelCategory::Gasoline;

/// Classifies a trade name.
///
/// # Examples
///
/// ```
/// use laadpaal::{classify, FuelCategory};
///
/// assert_eq!(classify("Model S EV"), FuelCategory::Electric);
/// assert_eq!(classify("Passat Diesel Hybrid"), FuelCategory::Hybrid);
/// assert_eq!(classify("Yaris"), FuelCategory::Gasoline);
/// ```
pub fn classify(name: &str) -> FuelCategory {
    let name = name.to_lowercase();
    KEYWORD_GROUPS
        .iter()
        .find(|(_, keywords)| {
            keywords
                .iter()
                .any(|keyword| contains_at_word_start(&name, keyword))
        })
        .map(|(category, _)| *category)
        .unwrap_or(FALLBACK_CATEGORY)
}

/// Like [`classify`], treating a missing name as no match.
pub fn classify_opt(name: Option<&str>) -> FuelCategory {
    name.map(classify).unwrap_or(FALLBACK_CATEGORY)
}

fn contains_at_word_start(haystack: &str, keyword: &str) -> bool {
    haystack.match_indices(keyword).any(|(start, _)| {
        haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |previous| !previous.is_alphabetic())
    })
}
