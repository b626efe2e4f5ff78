//! Single-slot resolution from filename prefixes.

use serde::Serialize;

use super::policy::SlotRule;
use crate::listing::FileRecord;

/// A resolved page slot: the matched record's URL, or the rule's fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSlot {
    pub slot: String,
    pub url: String,
    /// True if a listing record claimed the slot (false = fallback URL).
    pub matched: bool,
}

/// Resolves every declared slot against the listing, in rule order.
///
/// Each slot independently binds the first record (listing order) whose
/// upper-cased name starts with the rule's prefix. A record whose name
/// matches several prefixes fills every slot it matches; records with an
/// empty name never match.
pub(super) fn resolve_slots(rules: &[SlotRule], listing: &[FileRecord]) -> Vec<ResolvedSlot> {
    rules
        .iter()
        .map(|rule| {
            let prefix = rule.prefix.to_uppercase();
            let hit = listing
                .iter()
                .find(|record| !record.name.is_empty() && record.name.to_uppercase().starts_with(&prefix));
            match hit {
                Some(record) => ResolvedSlot {
                    slot: rule.slot.clone(),
                    url: record.url.clone(),
                    matched: true,
                },
                None => ResolvedSlot {
                    slot: rule.slot.clone(),
                    url: rule.fallback_url.clone(),
                    matched: false,
                },
            }
        })
        .collect()
}
