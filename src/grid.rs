//! Hole grid layout and cylinder generation

use crate::config::FitmentConfig;
use crate::parts::Solid;
use csgrs::float_types::Real;
use csgrs::mesh::Mesh;
use csgrs::traits::CSG;
use nalgebra::Point2;

/// Resolution of hole and peg cylinders
pub const CYLINDER_SEGMENTS: usize = 32;

/// One derived cell of the hole grid. Recomputed on every build, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    /// World position of the hole center in the plate plane
    pub center: Point2<Real>,
    /// Effective drilled diameter: `sizes[row].diameter + deltas[col]`
    pub diameter: Real,
}

/// Enumerates all N x M grid cells in row-major order (all columns of row 0,
/// then row 1, and so on).
pub fn grid_cells(config: &FitmentConfig) -> impl Iterator<Item = GridCell> + '_ {
    config.sizes.iter().enumerate().flat_map(move |(row, size)| {
        config.deltas.iter().enumerate().map(move |(col, &delta)| GridCell {
            row,
            col,
            center: Point2::new(
                (col as Real + 0.5) * config.spacing,
                (row as Real + 0.5) * config.spacing,
            ),
            diameter: size.diameter + delta,
        })
    })
}

/// Builds one through-hole cutter per grid cell: a cylinder spanning the full
/// plate thickness, centered on the cell.
///
/// Deliberately non-validating: degenerate inputs produce degenerate
/// cylinders. Callers wanting rejection run
/// [`FitmentConfig::validate`](crate::FitmentConfig::validate) first.
pub fn hole_grid(config: &FitmentConfig) -> Vec<Solid> {
    grid_cells(config)
        .map(|cell| {
            Mesh::cylinder(
                cell.diameter / 2.0,
                config.plate_thickness,
                CYLINDER_SEGMENTS,
                None,
            )
            .translate(cell.center.x, cell.center.y, 0.0)
        })
        .collect()
}
