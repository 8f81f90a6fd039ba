//! Final assembly of the four named artifact parts

use crate::config::FitmentConfig;
use crate::errors::ConfigError;
use crate::parts::{Solid, colorize};
use crate::{labels, pegs, plate};
use csgrs::traits::CSG;

/// A named output solid, tagged for downstream export organization.
#[derive(Debug, Clone)]
pub struct LabeledPart {
    pub name: &'static str,
    pub solid: Solid,
}

/// Builds the complete calibration artifact.
///
/// Returns exactly four parts, in order: `plate`, `plate_labels`,
/// `cylinders`, `cylinder_labels`. The computation is a pure function of
/// `config`; repeated invocations yield congruent geometry.
///
/// The only failure mode is a rejected configuration. Faults inside the
/// modeling kernel are not recovered and propagate as panics.
pub fn generate(config: &FitmentConfig) -> Result<Vec<LabeledPart>, ConfigError> {
    config.validate()?;

    let plate = plate::plate(config);
    let plate_labels = labels::plate_labels(config);

    let (peg_cylinders, peg_labels) = pegs::peg_set(config);
    let cylinders = peg_cylinders
        .iter()
        .fold(Solid::new(), |acc, cylinder| acc.union(cylinder));
    let cylinder_labels = colorize(
        peg_labels
            .iter()
            .fold(Solid::new(), |acc, label| acc.union(label)),
        config.text_color,
    );

    Ok(vec![
        LabeledPart {
            name: "plate",
            solid: plate,
        },
        LabeledPart {
            name: "plate_labels",
            solid: plate_labels,
        },
        LabeledPart {
            name: "cylinders",
            solid: cylinders,
        },
        LabeledPart {
            name: "cylinder_labels",
            solid: cylinder_labels,
        },
    ])
}
