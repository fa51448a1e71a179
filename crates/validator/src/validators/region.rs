//! Region-code table for identity numbers
//!
//! The first two digits of a resident identity number name the top-level
//! administrative division that issued it. The table is immutable,
//! process-wide configuration data: constructed once (lazily), shared by
//! reference, never mutated — safe for any number of concurrent readers.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Top-level division prefixes per GB/T 2260, keyed by the two-digit
/// code an identity number starts with.
const DIVISIONS: &[(&str, &str)] = &[
    ("11", "Beijing"),
    ("12", "Tianjin"),
    ("13", "Hebei"),
    ("14", "Shanxi"),
    ("15", "Inner Mongolia"),
    ("21", "Liaoning"),
    ("22", "Jilin"),
    ("23", "Heilongjiang"),
    ("31", "Shanghai"),
    ("32", "Jiangsu"),
    ("33", "Zhejiang"),
    ("34", "Anhui"),
    ("35", "Fujian"),
    ("36", "Jiangxi"),
    ("37", "Shandong"),
    ("41", "Henan"),
    ("42", "Hubei"),
    ("43", "Hunan"),
    ("44", "Guangdong"),
    ("45", "Guangxi"),
    ("46", "Hainan"),
    ("50", "Chongqing"),
    ("51", "Sichuan"),
    ("52", "Guizhou"),
    ("53", "Yunnan"),
    ("54", "Tibet"),
    ("61", "Shaanxi"),
    ("62", "Gansu"),
    ("63", "Qinghai"),
    ("64", "Ningxia"),
    ("65", "Xinjiang"),
    ("71", "Taiwan"),
    ("81", "Hong Kong"),
    ("82", "Macau"),
    ("91", "Abroad"),
];

static BUILTIN: LazyLock<RegionTable> = LazyLock::new(|| RegionTable::from_pairs(DIVISIONS.iter().copied()));

/// Immutable mapping from a two-digit region prefix to the region name.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch_validator::validators::RegionTable;
///
/// let regions = RegionTable::builtin();
/// assert!(regions.contains("44"));
/// assert_eq!(regions.name("11"), Some("Beijing"));
/// assert!(!regions.contains("99"));
/// ```
#[derive(Debug, Clone)]
pub struct RegionTable {
    regions: HashMap<&'static str, &'static str>,
}

impl RegionTable {
    /// Returns the built-in table of standard division prefixes.
    ///
    /// Constructed on first use and shared for the lifetime of the
    /// process.
    #[must_use]
    pub fn builtin() -> &'static RegionTable {
        &BUILTIN
    }

    /// Builds a table from explicit `(prefix, name)` pairs.
    ///
    /// For callers whose deployment recognizes a different prefix set
    /// than the built-in one.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (&'static str, &'static str)>) -> Self {
        Self {
            regions: pairs.into_iter().collect(),
        }
    }

    /// Returns true if the two-digit prefix names a known region.
    #[must_use]
    pub fn contains(&self, prefix: &str) -> bool {
        self.regions.contains_key(prefix)
    }

    /// Looks up the region name for a prefix.
    #[must_use]
    pub fn name(&self, prefix: &str) -> Option<&'static str> {
        self.regions.get(prefix).copied()
    }

    /// Number of known prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_known_prefixes() {
        let regions = RegionTable::builtin();
        assert!(regions.contains("11"));
        assert!(regions.contains("44"));
        assert!(regions.contains("91"));
        assert_eq!(regions.name("44"), Some("Guangdong"));
    }

    #[test]
    fn builtin_rejects_unknown_prefixes() {
        let regions = RegionTable::builtin();
        assert!(!regions.contains("00"));
        assert!(!regions.contains("99"));
        assert!(!regions.contains("1"));
        assert!(!regions.contains("110"));
    }

    #[test]
    fn builtin_is_shared() {
        let a = RegionTable::builtin() as *const RegionTable;
        let b = RegionTable::builtin() as *const RegionTable;
        assert_eq!(a, b);
    }

    #[test]
    fn custom_table() {
        let table = RegionTable::from_pairs([("11", "Beijing")]);
        assert_eq!(table.len(), 1);
        assert!(table.contains("11"));
        assert!(!table.contains("44"));
    }
}
