//! Content resolution: filename conventions → page slots and featured items.
//!
//! A pure transform over an already-fetched listing; no I/O and no mutation
//! of the input. The matching policy (prefix tokens, home marker, category
//! tokens, fallbacks) is data, not code; see [`ResolverPolicy`].

mod category;
mod featured;
mod policy;
mod slots;
mod title;

pub use featured::FeaturedItem;
pub use policy::{Category, CategoryRule, FeaturedRules, ResolverPolicy, SlotRule};
pub use slots::ResolvedSlot;

use serde::Serialize;

use crate::listing::FileRecord;

/// Resolved site content: one entry per declared slot, in declaration order,
/// plus the bounded featured collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedContent {
    pub slots: Vec<ResolvedSlot>,
    pub featured: Vec<FeaturedItem>,
}

/// Resolves listings against a fixed policy.
#[derive(Debug, Clone)]
pub struct Resolver {
    policy: ResolverPolicy,
}

impl Resolver {
    pub fn new(policy: ResolverPolicy) -> Self {
        Self { policy }
    }

    /// Resolver with the studio's built-in naming conventions.
    pub fn with_defaults() -> Self {
        Self::new(ResolverPolicy::default())
    }

    pub fn policy(&self) -> &ResolverPolicy {
        &self.policy
    }

    /// Resolves a listing into slots and the featured collection.
    ///
    /// Deterministic and total: an empty listing yields every slot at its
    /// fallback URL and an empty featured collection, never an error.
    pub fn resolve(&self, listing: &[FileRecord]) -> ResolvedContent {
        ResolvedContent {
            slots: slots::resolve_slots(&self.policy.slots, listing),
            featured: featured::featured_items(
                &self.policy.featured,
                &self.policy.categories,
                &self.policy.default_title,
                listing,
            ),
        }
    }
}
