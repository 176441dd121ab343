//! Jacobian building blocks.
//!
//! A building block maps curve names to the column range each curve's
//! parameters occupy in a shared sensitivity Jacobian.

use std::collections::BTreeMap;
use std::fmt;

/// Half-open column range `[start, start + size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockRange {
    /// First column
    pub start: usize,
    /// Number of columns
    pub size: usize,
}

impl BlockRange {
    /// Create a range.
    pub fn new(start: usize, size: usize) -> Self {
        Self { start, size }
    }

    /// One past the last column.
    pub fn end(&self) -> usize {
        self.start + self.size
    }

    /// Whether the two ranges share a column.
    ///
    /// ```
    /// use curve_core::bundle::BlockRange;
    ///
    /// assert!(BlockRange::new(0, 2).overlaps(&BlockRange::new(1, 1)));
    /// assert!(!BlockRange::new(0, 2).overlaps(&BlockRange::new(2, 1)));
    /// ```
    pub fn overlaps(&self, other: &BlockRange) -> bool {
        self.size > 0 && other.size > 0 && self.start < other.end() && other.start < self.end()
    }
}

impl fmt::Display for BlockRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.size)
    }
}

/// Dense Jacobian of curve parameters with respect to market quotes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JacobianMatrix {
    rows: Vec<Vec<f64>>,
}

impl JacobianMatrix {
    /// Build from rows; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let width = rows.first().map_or(0, Vec::len);
        rows.iter()
            .all(|row| row.len() == width)
            .then_some(Self { rows })
    }

    /// The `n x n` identity.
    pub fn identity(n: usize) -> Self {
        let rows = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
            .collect();
        Self { rows }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }
}

/// Column ranges for a set of curves.
///
/// # Examples
///
/// ```
/// use curve_core::bundle::{BlockRange, CurveBuildingBlock};
///
/// let block = CurveBuildingBlock::new()
///     .with_unit("USD-OIS", BlockRange::new(0, 1))
///     .with_unit("USD-3M", BlockRange::new(1, 1));
///
/// assert_eq!(block.range("USD-3M"), Some(BlockRange::new(1, 1)));
/// assert_eq!(block.parameter_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveBuildingBlock {
    unit_map: BTreeMap<String, BlockRange>,
}

impl CurveBuildingBlock {
    /// Create an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a unit map.
    pub fn from_unit_map(unit_map: BTreeMap<String, BlockRange>) -> Self {
        Self { unit_map }
    }

    /// Add (or replace) the range of a curve.
    pub fn with_unit(mut self, curve: impl Into<String>, range: BlockRange) -> Self {
        self.unit_map.insert(curve.into(), range);
        self
    }

    /// The unit map.
    pub fn unit_map(&self) -> &BTreeMap<String, BlockRange> {
        &self.unit_map
    }

    /// Range of a curve.
    pub fn range(&self, curve: &str) -> Option<BlockRange> {
        self.unit_map.get(curve).copied()
    }

    /// Total number of columns covered.
    pub fn parameter_count(&self) -> usize {
        self.unit_map.values().map(|r| r.size).sum()
    }
}

/// Building block and Jacobian for every curve of a build.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveBuildingBlockBundle {
    data: BTreeMap<String, (CurveBuildingBlock, JacobianMatrix)>,
}

impl CurveBuildingBlockBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the entry of a curve.
    pub fn add(&mut self, curve: impl Into<String>, block: CurveBuildingBlock, jacobian: JacobianMatrix) {
        self.data.insert(curve.into(), (block, jacobian));
    }

    /// Entry of a curve.
    pub fn get(&self, curve: &str) -> Option<&(CurveBuildingBlock, JacobianMatrix)> {
        self.data.get(curve)
    }

    /// Whether a curve has an entry.
    pub fn contains(&self, curve: &str) -> bool {
        self.data.contains_key(curve)
    }

    /// Entries ordered by curve name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &(CurveBuildingBlock, JacobianMatrix))> + '_ {
        self.data.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Range of every curve across the bundle.
    ///
    /// Each curve's own range is read from its own building block.
    pub fn unit_map(&self) -> BTreeMap<String, BlockRange> {
        self.data
            .iter()
            .filter_map(|(name, (block, _))| block.range(name).map(|r| (name.clone(), r)))
            .collect()
    }

    /// One past the highest column used.
    pub fn next_free_index(&self) -> usize {
        self.unit_map().values().map(BlockRange::end).max().unwrap_or(0)
    }

    /// Number of curves.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the bundle has no curves.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Range Tests
    // ========================================

    #[test]
    fn test_empty_range_never_overlaps() {
        assert!(!BlockRange::new(1, 0).overlaps(&BlockRange::new(0, 3)));
        assert!(BlockRange::new(2, 3).overlaps(&BlockRange::new(4, 1)));
        assert_eq!(BlockRange::new(2, 3).end(), 5);
        assert_eq!(BlockRange::new(2, 3).to_string(), "(2, 3)");
    }

    // ========================================
    // Jacobian Tests
    // ========================================

    #[test]
    fn test_identity() {
        let j = JacobianMatrix::identity(2);
        assert_eq!(j.rows(), 2);
        assert_eq!(j.cols(), 2);
        assert_eq!(j.get(0, 0), Some(1.0));
        assert_eq!(j.get(0, 1), Some(0.0));
        assert_eq!(j.get(2, 0), None);
        assert_eq!(JacobianMatrix::identity(1), JacobianMatrix::from_rows(vec![vec![1.0]]).unwrap());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(JacobianMatrix::from_rows(vec![vec![1.0, 0.0], vec![1.0]]).is_none());
    }

    // ========================================
    // Bundle Tests
    // ========================================

    #[test]
    fn test_bundle_unit_map_and_next_index() {
        let mut bundle = CurveBuildingBlockBundle::new();
        assert_eq!(bundle.next_free_index(), 0);

        let first = CurveBuildingBlock::new().with_unit("A", BlockRange::new(0, 1));
        bundle.add("A", first.clone(), JacobianMatrix::identity(1));
        let second = first.with_unit("B", BlockRange::new(1, 2));
        bundle.add("B", second, JacobianMatrix::identity(2));

        let units = bundle.unit_map();
        assert_eq!(units["A"], BlockRange::new(0, 1));
        assert_eq!(units["B"], BlockRange::new(1, 2));
        assert_eq!(bundle.next_free_index(), 3);
        assert_eq!(bundle.get("B").unwrap().0.parameter_count(), 3);
    }
}
