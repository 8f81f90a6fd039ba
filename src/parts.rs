//! Shared solid and metadata types

use csgrs::float_types::Real;
use csgrs::mesh::Mesh;

/// Per-polygon annotation payload carried in the csgrs metadata slot.
///
/// Only label geometry is colored; structural geometry (plate, pegs) carries
/// no metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PartAttributes {
    /// RGB, each channel in [0, 1]
    pub color: [Real; 3],
}

/// The solid type every builder in this crate produces and consumes.
pub type Solid = Mesh<PartAttributes>;

/// Returns `solid` with `color` applied to every polygon.
///
/// Re-applying the same color is a no-op, so callers may colorize per label
/// and again for a whole batch.
pub fn colorize(mut solid: Solid, color: [Real; 3]) -> Solid {
    let attributes = PartAttributes { color };
    for polygon in &mut solid.polygons {
        polygon.set_metadata(attributes.clone());
    }
    solid.metadata = Some(attributes);
    solid
}
