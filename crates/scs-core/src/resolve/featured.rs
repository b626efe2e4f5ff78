//! Featured collection: home-tagged records first, then generic art fallback.

use serde::Serialize;

use super::policy::{Category, CategoryRule, FeaturedRules};
use super::{category, title};
use crate::listing::FileRecord;

/// One item of the landing page gallery teaser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeaturedItem {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub image_url: String,
}

/// Builds the bounded featured collection from a listing.
///
/// Two disjoint groups, each in listing order: records whose upper-cased name
/// contains the home marker, then records whose name starts with the art
/// prefix and does NOT contain the marker. The concatenation is truncated to
/// `max_items`. Records with an empty name are skipped.
pub(super) fn featured_items(
    rules: &FeaturedRules,
    categories: &[CategoryRule],
    default_title: &str,
    listing: &[FileRecord],
) -> Vec<FeaturedItem> {
    let marker = rules.home_marker.to_uppercase();
    let art_prefix = rules.art_prefix.to_uppercase();

    let home_tagged = listing
        .iter()
        .filter(|r| !r.name.is_empty() && r.name.to_uppercase().contains(&marker));
    let art_fallback = listing.iter().filter(|r| {
        if r.name.is_empty() {
            return false;
        }
        let upper = r.name.to_uppercase();
        upper.starts_with(&art_prefix) && !upper.contains(&marker)
    });

    home_tagged
        .chain(art_fallback)
        .take(rules.max_items)
        .map(|r| FeaturedItem {
            id: r.id.clone(),
            title: title::derive_title(&r.name, default_title),
            category: category::derive_category(categories, &r.name),
            image_url: r.url.clone(),
        })
        .collect()
}
