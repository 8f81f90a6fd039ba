//! Row and column label layout for the plate

use crate::config::FitmentConfig;
use crate::parts::{Solid, colorize};
use crate::text::flat_text;
use csgrs::float_types::Real;
use csgrs::traits::CSG;

/// Formats a column delta with an explicit sign: `+0`, `+0.6`, `-0.2`.
///
/// Zero always renders as `+0` (negative zero folds to positive), marking the
/// nominal column.
pub fn format_delta(delta: Real) -> String {
    let delta = if delta == 0.0 { 0.0 } else { delta };
    if delta >= 0.0 {
        format!("+{delta}")
    } else {
        format!("{delta}")
    }
}

/// One nominal-size label per row, to the left of the grid, vertically
/// centered on the row and sitting on top of the plate.
pub fn row_labels(config: &FitmentConfig) -> Vec<Solid> {
    let style = config.text_style();
    config
        .sizes
        .iter()
        .enumerate()
        .map(|(row, size)| {
            flat_text(&size.label, config.text_depth, config.text_line_width, &style).translate(
                -config.margin / 4.0,
                (row as Real + 0.5) * config.spacing,
                config.plate_thickness,
            )
        })
        .collect()
}

/// One delta label per column, centered on the column at the grid's bottom
/// edge, on top of the plate.
pub fn column_labels(config: &FitmentConfig) -> Vec<Solid> {
    let style = config.text_style();
    config
        .deltas
        .iter()
        .enumerate()
        .map(|(col, &delta)| {
            flat_text(
                &format_delta(delta),
                config.text_depth,
                config.text_line_width,
                &style,
            )
            .translate(
                (col as Real + 0.5) * config.spacing,
                0.0,
                config.plate_thickness,
            )
        })
        .collect()
}

/// All plate annotation text as a single colorized solid.
pub fn plate_labels(config: &FitmentConfig) -> Solid {
    let combined = row_labels(config)
        .iter()
        .chain(column_labels(config).iter())
        .fold(Solid::new(), |acc, label| acc.union(label));
    colorize(combined, config.text_color)
}
