//! Category derivation from filename tokens.

use super::policy::{Category, CategoryRule};

/// Category used when no rule token appears in the name.
const DEFAULT_CATEGORY: Category = Category::Artistic;

/// Derives the category for a featured item from its file name.
///
/// Rules are checked in table order against the upper-cased name (substring
/// containment); the first hit wins. Total over any name string.
pub(super) fn derive_category(rules: &[CategoryRule], name: &str) -> Category {
    let upper = name.to_uppercase();
    rules
        .iter()
        .find(|rule| upper.contains(&rule.token.to_uppercase()))
        .map(|rule| rule.category)
        .unwrap_or(DEFAULT_CATEGORY)
}
