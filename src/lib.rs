//! Generator for a parametric **press-fit calibration artifact**, built on
//! [csgrs](https://crates.io/crates/csgrs) solids.
//!
//! The artifact is a plate perforated with a grid of holes (nominal diameter
//! varies by row, a small signed delta by column) plus one free-standing peg
//! per nominal size, all annotated with embossed stroke-font labels. Printing
//! (or machining) the artifact and trying pegs against sockets tells you which
//! hole/peg combination gives the press fit you want on your process.
//!
//! The output of [`generate`] is four named solids:
//! - `plate`: the slab with every hole subtracted
//! - `plate_labels`: row (nominal size) and column (delta) text
//! - `cylinders`: the pegs, one per nominal size
//! - `cylinder_labels`: one diameter label per peg
//!
//! Everything is a pure function of an immutable [`FitmentConfig`];
//! `FitmentConfig::default()` reproduces the reference artifact
//! (9 sizes × 6 deltas, 18 mm pitch).

#![forbid(unsafe_code)]

pub mod assembly;
pub mod config;
pub mod errors;
pub mod glyphs;
pub mod grid;
pub mod labels;
pub mod parts;
pub mod pegs;
pub mod plate;
pub mod text;

pub use assembly::{LabeledPart, generate};
pub use config::{FitmentConfig, NominalSize};
pub use errors::ConfigError;
pub use parts::{PartAttributes, Solid, colorize};
