//! Jacobian block assignment for one build.
//!
//! Exogenous blocks are merged first, verbatim. New curves then take
//! consecutive ranges starting at the first column after every merged block.
//! Each new curve's building block carries the unit map as it stood once the
//! curve was placed: every merged unit, every earlier curve and itself.

use std::collections::BTreeMap;

use curve_core::bundle::{BlockRange, CurveBuildingBlock, CurveBuildingBlockBundle, JacobianMatrix};
use tracing::debug;

use crate::error::BuildError;

/// Running block assignment.
#[derive(Debug, Clone, Default)]
pub struct BlockAccumulator {
    bundle: CurveBuildingBlockBundle,
    unit_map: BTreeMap<String, BlockRange>,
    next_index: usize,
}

impl BlockAccumulator {
    /// Start with no columns used.
    pub fn new() -> Self {
        Self::default()
    }

    /// First column the next curve will take.
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Every unit placed so far.
    pub fn unit_map(&self) -> &BTreeMap<String, BlockRange> {
        &self.unit_map
    }

    /// Merge a previously built bundle.
    ///
    /// Entries are copied as they are. A unit already present with the same
    /// range is accepted; a unit whose range differs from the one recorded,
    /// or that overlaps another unit's range, is a collision.
    pub fn merge_exogenous(&mut self, bundle: &CurveBuildingBlockBundle) -> Result<(), BuildError> {
        for (curve, (block, jacobian)) in bundle.iter() {
            for (unit, range) in block.unit_map() {
                self.place(unit, *range)?;
            }
            self.bundle.add(curve, block.clone(), jacobian.clone());
        }
        Ok(())
    }

    /// Place a new curve of `size` columns after everything placed so far.
    pub fn append(
        &mut self,
        curve: &str,
        size: usize,
        jacobian: JacobianMatrix,
    ) -> Result<BlockRange, BuildError> {
        let range = BlockRange::new(self.next_index, size);
        if let Some(existing) = self.unit_map.get(curve) {
            return Err(BuildError::block_collision(curve, *existing, range));
        }
        self.place(curve, range)?;
        debug!(curve, start = range.start, size = range.size, "assigned block");
        let block = CurveBuildingBlock::from_unit_map(self.unit_map.clone());
        self.bundle.add(curve, block, jacobian);
        Ok(range)
    }

    /// The finished bundle.
    pub fn finish(self) -> CurveBuildingBlockBundle {
        self.bundle
    }

    fn place(&mut self, unit: &str, range: BlockRange) -> Result<(), BuildError> {
        if let Some(existing) = self.unit_map.get(unit) {
            if *existing == range {
                return Ok(());
            }
            return Err(BuildError::block_collision(unit, *existing, range));
        }
        if let Some(existing) = self.unit_map.values().find(|other| other.overlaps(&range)) {
            return Err(BuildError::block_collision(unit, *existing, range));
        }
        self.unit_map.insert(unit.to_string(), range);
        self.next_index = self.next_index.max(range.end());
        Ok(())
    }
}
