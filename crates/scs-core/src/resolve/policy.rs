//! Declarative matching policy: filename tokens → slots, groups, categories.
//!
//! The naming conventions are data rather than code so the matching rules stay
//! auditable and can be overridden from `config.toml`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed category set for featured items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Corporate,
    Portrait,
    Artistic,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Corporate => write!(f, "Corporate"),
            Category::Portrait => write!(f, "Portrait"),
            Category::Artistic => write!(f, "Artistic"),
        }
    }
}

/// Binds a filename prefix to a named page slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRule {
    /// Logical slot name (e.g. "hero").
    pub slot: String,
    /// Filename prefix that claims the slot, compared case-insensitively.
    pub prefix: String,
    /// URL used when no record matches.
    pub fallback_url: String,
}

/// Grouping rules for the landing page featured collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedRules {
    /// Substring marking a record as home-tagged (anywhere in the name).
    pub home_marker: String,
    /// Prefix for generic art records eligible as fallback.
    pub art_prefix: String,
    /// Upper bound on the featured collection.
    pub max_items: usize,
}

impl Default for FeaturedRules {
    fn default() -> Self {
        Self {
            home_marker: "_HOME".to_string(),
            art_prefix: "ART_".to_string(),
            max_items: 4,
        }
    }
}

/// One category rule; rules are checked in table order, first hit wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Token searched for anywhere in the upper-cased name.
    pub token: String,
    pub category: Category,
}

/// Full matching policy for the content resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverPolicy {
    /// Title used when a filename has no usable title segment.
    #[serde(default = "default_title")]
    pub default_title: String,
    /// Featured collection grouping rules.
    #[serde(default)]
    pub featured: FeaturedRules,
    /// Ordered slot rules; output preserves this order.
    #[serde(default = "default_slot_rules")]
    pub slots: Vec<SlotRule>,
    /// Ordered category rules; precedence is the table order.
    #[serde(default = "default_category_rules")]
    pub categories: Vec<CategoryRule>,
}

impl Default for ResolverPolicy {
    fn default() -> Self {
        Self {
            default_title: default_title(),
            featured: FeaturedRules::default(),
            slots: default_slot_rules(),
            categories: default_category_rules(),
        }
    }
}

fn default_title() -> String {
    "Untitled".to_string()
}

/// Studio slot conventions: cover/manifesto images plus the product pages.
fn default_slot_rules() -> Vec<SlotRule> {
    let rule = |slot: &str, prefix: &str, fallback: &str| SlotRule {
        slot: slot.to_string(),
        prefix: prefix.to_string(),
        fallback_url: fallback.to_string(),
    };
    vec![
        rule("hero", "CAPA_", "/images/defaults/hero.jpg"),
        rule("manifesto", "MANIFESTO_", "/images/defaults/manifesto.jpg"),
        rule("album", "ALBUM_", "/images/defaults/album.jpg"),
        rule("print", "PRINT_", "/images/defaults/print.jpg"),
    ]
}

fn default_category_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule {
            token: "CORP".to_string(),
            category: Category::Corporate,
        },
        CategoryRule {
            token: "PORT".to_string(),
            category: Category::Portrait,
        },
    ]
}
