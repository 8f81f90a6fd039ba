//! Free-standing test pegs, one per nominal size

use crate::config::FitmentConfig;
use crate::grid::CYLINDER_SEGMENTS;
use crate::parts::Solid;
use crate::text::flat_text;
use csgrs::float_types::Real;
use csgrs::mesh::Mesh;
use csgrs::traits::CSG;

/// Builds the peg cylinders and their labels as two parallel sequences of
/// equal length, one entry per nominal size.
///
/// Pegs test nominal diameters only; the delta table plays no part here. They
/// stand in a column one grid unit to the left of the plate, each labeled on
/// its top face with the diameter to one decimal place.
pub fn peg_set(config: &FitmentConfig) -> (Vec<Solid>, Vec<Solid>) {
    let style = config.text_style();
    let mut cylinders = Vec::with_capacity(config.rows());
    let mut labels = Vec::with_capacity(config.rows());

    for (row, size) in config.sizes.iter().enumerate() {
        let y = (row as Real + 0.5) * config.spacing;
        cylinders.push(
            Mesh::cylinder(
                size.diameter / 2.0,
                config.peg_height,
                CYLINDER_SEGMENTS,
                None,
            )
            .translate(-config.spacing, y, 0.0),
        );
        labels.push(
            flat_text(
                &format!("{:.1}", size.diameter),
                config.text_depth,
                config.text_line_width,
                &style,
            )
            .translate(-config.spacing, y, config.peg_height),
        );
    }
    (cylinders, labels)
}
