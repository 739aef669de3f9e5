//! Pointer-to-block hit testing.

use super::{Point, Projector};
use crate::model::Block;

/// Index of the topmost block whose projected bounds contain `point`.
///
/// Blocks are tried from last to first, so the one drawn last wins where
/// several overlap.
pub fn hit_test(blocks: &[Block], projector: &Projector, point: Point) -> Option<usize> {
    blocks
        .iter()
        .enumerate()
        .rev()
        .find(|(_, block)| projector.bounds(block.bounds()).contains(point))
        .map(|(i, _)| i)
}
