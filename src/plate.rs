//! The perforated base plate

use crate::config::FitmentConfig;
use crate::grid;
use crate::parts::Solid;
use csgrs::float_types::Real;
use csgrs::sketch::Sketch;
use csgrs::traits::CSG;

/// Builds the base slab with every grid hole subtracted.
///
/// The slab is `(columns * spacing + margin)` wide and
/// `(rows * spacing + margin)` tall; the extra margin sits on the -x / -y
/// sides, under the row and column labels, so the grid's first cell starts at
/// the origin and every hole lands strictly inside the slab.
pub fn plate(config: &FitmentConfig) -> Solid {
    let grid_width = config.columns() as Real * config.spacing;
    let grid_height = config.rows() as Real * config.spacing;

    let slab: Solid = Sketch::rectangle(
        grid_width + config.margin,
        grid_height + config.margin,
        None,
    )
    .extrude(config.plate_thickness)
    .translate(-config.margin, -config.margin, 0.0);

    grid::hole_grid(config)
        .iter()
        .fold(slab, |plate, hole| plate.difference(hole))
}
