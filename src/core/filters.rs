use std::sync::OnceLock;
use crate::models::{FilterDefinition, Listing};

/// Filters offered on the search screen
///
/// Each filter matches when any listing tag contains its target substring,
/// ignoring case.
pub fn default_filters() -> &'static [FilterDefinition] {
    static FILTERS: OnceLock<Vec<FilterDefinition>> = OnceLock::new();
    FILTERS.get_or_init(|| {
        vec![
            FilterDefinition::new("fenced", "Fenced yard", "fenced"),
            FilterDefinition::new("no-other-pets", "No other pets", "no other pets"),
            FilterDefinition::new("big-yard", "Big backyard", "big backyard"),
            FilterDefinition::new("wfh", "Works from home", "works from home"),
            FilterDefinition::new("kid-friendly", "Kid-friendly home", "kid-friendly"),
            FilterDefinition::new("dog-park", "Near dog park", "near dog park"),
        ]
    })
}

/// Active filter keys split into known definitions and unknown keys
#[derive(Debug, Clone, Default)]
pub struct ResolvedFilters<'a> {
    pub active: Vec<&'a FilterDefinition>,
    pub unknown: Vec<String>,
}

impl ResolvedFilters<'_> {
    pub fn applied_keys(&self) -> Vec<String> {
        self.active.iter().map(|f| f.key.clone()).collect()
    }
}

/// Look up active keys in the definition table
///
/// Unknown keys are kept aside and never exclude a listing. Duplicate keys
/// resolve to a single definition.
pub fn resolve_filters<'a, K>(
    definitions: &'a [FilterDefinition],
    keys: impl IntoIterator<Item = K>,
) -> ResolvedFilters<'a>
where
    K: AsRef<str>,
{
    let mut resolved = ResolvedFilters::default();

    for key in keys {
        let key = key.as_ref();
        match definitions.iter().find(|f| f.key == key) {
            Some(def) => {
                if !resolved.active.iter().any(|f| f.key == def.key) {
                    resolved.active.push(def);
                }
            }
            None => {
                if !resolved.unknown.iter().any(|k| k == key) {
                    resolved.unknown.push(key.to_string());
                }
            }
        }
    }

    resolved
}

/// Check if a listing satisfies every active filter (logical AND)
///
/// An empty filter list retains every listing.
#[inline]
pub fn matches_all_filters(listing: &Listing, filters: &[&FilterDefinition]) -> bool {
    filters.iter().all(|filter| filter.matches(listing))
}
