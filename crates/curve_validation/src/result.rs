//! Classification result container.

use std::collections::{BTreeMap, BTreeSet};

use curve_core::config::ItemKind;

/// Outcome of classifying a set of requested names.
///
/// Every requested name lands in exactly one of the four buckets:
///
/// - `validated`: resolved to exactly one item of the expected kind
/// - `missing`: resolved to nothing
/// - `duplicated`: resolved to more than one item
/// - `unsupported`: resolved to exactly one item of another kind; the item
///   itself is kept
///
/// # Type Parameters
///
/// * `N` - Requested name type
/// * `T` - Validated item type
/// * `U` - Unsupported item type
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult<N: Ord, T, U> {
    expected: ItemKind,
    validated: BTreeMap<N, T>,
    missing: BTreeSet<N>,
    duplicated: BTreeSet<N>,
    unsupported: BTreeMap<N, U>,
}

impl<N: Ord, T, U> ValidationResult<N, T, U> {
    /// Empty result expecting items of `expected` kind.
    pub fn new(expected: ItemKind) -> Self {
        Self {
            expected,
            validated: BTreeMap::new(),
            missing: BTreeSet::new(),
            duplicated: BTreeSet::new(),
            unsupported: BTreeMap::new(),
        }
    }

    pub(crate) fn insert_validated(&mut self, name: N, item: T) {
        self.validated.insert(name, item);
    }

    pub(crate) fn insert_missing(&mut self, name: N) {
        self.missing.insert(name);
    }

    pub(crate) fn insert_duplicated(&mut self, name: N) {
        self.duplicated.insert(name);
    }

    pub(crate) fn insert_unsupported(&mut self, name: N, item: U) {
        self.unsupported.insert(name, item);
    }

    /// Kind the lookups were expected to produce.
    pub fn expected(&self) -> ItemKind {
        self.expected
    }

    /// Names that resolved to one item of the expected kind.
    pub fn validated(&self) -> &BTreeMap<N, T> {
        &self.validated
    }

    /// Validated items, ordered by name.
    pub fn validated_items(&self) -> impl Iterator<Item = &T> + '_ {
        self.validated.values()
    }

    /// Names that resolved to nothing.
    pub fn missing(&self) -> &BTreeSet<N> {
        &self.missing
    }

    /// Names that resolved to several items.
    pub fn duplicated(&self) -> &BTreeSet<N> {
        &self.duplicated
    }

    /// Names that resolved to one item of another kind, with that item.
    pub fn unsupported(&self) -> &BTreeMap<N, U> {
        &self.unsupported
    }

    /// Unsupported items, ordered by the name they were requested under.
    pub fn unsupported_items(&self) -> impl Iterator<Item = &U> + '_ {
        self.unsupported.values()
    }

    /// Number of names that were not validated.
    pub fn issue_count(&self) -> usize {
        self.missing.len() + self.duplicated.len() + self.unsupported.len()
    }

    /// Whether every requested name was validated.
    pub fn is_valid(&self) -> bool {
        self.issue_count() == 0
    }

    /// Number of distinct names classified.
    pub fn len(&self) -> usize {
        self.validated.len() + self.issue_count()
    }

    /// Whether nothing was requested.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every classified name, in order.
    pub fn names(&self) -> BTreeSet<&N> {
        self.validated
            .keys()
            .chain(self.missing.iter())
            .chain(self.duplicated.iter())
            .chain(self.unsupported.keys())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mut result: ValidationResult<String, u32, &str> =
            ValidationResult::new(ItemKind::CurveDefinition);
        assert!(result.is_empty());
        assert!(result.is_valid());

        result.insert_validated("A".to_string(), 1);
        result.insert_missing("B".to_string());
        result.insert_duplicated("C".to_string());
        result.insert_unsupported("D".to_string(), "wrong");

        assert_eq!(result.expected(), ItemKind::CurveDefinition);
        assert_eq!(result.len(), 4);
        assert_eq!(result.issue_count(), 3);
        assert!(!result.is_valid());
        assert_eq!(result.names().len(), 4);
        assert_eq!(result.unsupported_items().collect::<Vec<_>>(), vec![&"wrong"]);
    }
}
