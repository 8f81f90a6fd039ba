//! Static configuration for the calibration artifact

use crate::errors::ConfigError;
use crate::text::TextStyle;
use csgrs::float_types::Real;

/// One grid row: a nominal hole/peg diameter plus the human-readable label
/// embossed next to that row (e.g. `6mm`, `1/4"`).
#[derive(Debug, Clone, PartialEq)]
pub struct NominalSize {
    /// Diameter in millimeters
    pub diameter: Real,
    /// Row label text
    pub label: String,
}

impl NominalSize {
    pub fn new(diameter: Real, label: impl Into<String>) -> Self {
        Self {
            diameter,
            label: label.into(),
        }
    }
}

/// Immutable description of the whole artifact. All lengths in millimeters.
///
/// Rows come from `sizes` (top to bottom by index), columns from `deltas`;
/// the hole at (row, col) is drilled at `sizes[row].diameter + deltas[col]`.
/// Pegs are built per row at the nominal diameter only.
#[derive(Debug, Clone, PartialEq)]
pub struct FitmentConfig {
    /// Nominal sizes, one per grid row
    pub sizes: Vec<NominalSize>,
    /// Signed offsets from nominal, one per grid column
    pub deltas: Vec<Real>,
    /// Center-to-center pitch of the hole grid
    pub spacing: Real,
    /// Plate thickness; holes go all the way through
    pub plate_thickness: Real,
    /// Glyph height of the label text
    pub text_height: Real,
    /// Extrusion depth of the label text above the surface it sits on
    pub text_depth: Real,
    /// Stroke width of the label text
    pub text_line_width: Real,
    /// Height of the free-standing pegs
    pub peg_height: Real,
    /// Extra plate material beyond the grid, on the labeled sides
    pub margin: Real,
    /// Annotation color for all label parts, RGB in [0, 1]
    pub text_color: [Real; 3],
}

impl Default for FitmentConfig {
    /// The reference artifact: nine common metric/imperial sizes against six
    /// deltas from -0.2 mm to +0.6 mm, on an 18 mm pitch.
    fn default() -> Self {
        Self {
            sizes: vec![
                NominalSize::new(6.0, "6mm"),
                NominalSize::new(6.35, "1/4\""),
                NominalSize::new(7.0, "7mm"),
                NominalSize::new(8.0, "8mm"),
                NominalSize::new(9.0, "9mm"),
                NominalSize::new(9.52, "3/8\""),
                NominalSize::new(10.0, "10mm"),
                NominalSize::new(12.0, "12mm"),
                NominalSize::new(12.7, "1/2\""),
            ],
            deltas: vec![-0.2, 0.0, 0.1, 0.2, 0.4, 0.6],
            spacing: 18.0,
            plate_thickness: 10.0,
            text_height: 1.5,
            text_depth: 0.8,
            text_line_width: 0.4,
            peg_height: 20.0,
            margin: 12.0,
            text_color: [1.0, 0.0, 0.0],
        }
    }
}

impl FitmentConfig {
    /// Rejects configurations that would produce degenerate geometry.
    ///
    /// Empty size/delta tables are allowed; they yield an empty grid rather
    /// than an error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("spacing", self.spacing),
            ("plate_thickness", self.plate_thickness),
            ("text_height", self.text_height),
            ("text_depth", self.text_depth),
            ("text_line_width", self.text_line_width),
            ("peg_height", self.peg_height),
        ];
        for (name, value) in scalars {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveParameter { name, value });
            }
        }
        if !(self.margin >= 0.0) {
            return Err(ConfigError::NegativeMargin {
                margin: self.margin,
            });
        }
        for size in &self.sizes {
            if !(size.diameter > 0.0) {
                return Err(ConfigError::NonPositiveDiameter {
                    label: size.label.clone(),
                    diameter: size.diameter,
                });
            }
            for &delta in &self.deltas {
                if !(size.diameter + delta > 0.0) {
                    return Err(ConfigError::DegenerateHole {
                        label: size.label.clone(),
                        diameter: size.diameter,
                        delta,
                    });
                }
            }
        }
        Ok(())
    }

    /// Number of grid rows
    pub fn rows(&self) -> usize {
        self.sizes.len()
    }

    /// Number of grid columns
    pub fn columns(&self) -> usize {
        self.deltas.len()
    }

    /// Text style shared by every label on the artifact
    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            glyph_height: self.text_height,
            color: self.text_color,
        }
    }
}
