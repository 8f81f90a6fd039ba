//! Configuration validation errors

use csgrs::float_types::Real;

/// All the ways a [`FitmentConfig`](crate::FitmentConfig) can be rejected
/// before any geometry is built.
///
/// The geometric builders themselves never validate; malformed values reach
/// them only if the caller skips [`validate`](crate::FitmentConfig::validate).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A scalar parameter that must be strictly positive is not
    #[error("{name} must be positive, got {value}")]
    NonPositiveParameter { name: &'static str, value: Real },

    /// The plate margin is negative
    #[error("margin must be non-negative, got {margin}")]
    NegativeMargin { margin: Real },

    /// A row's nominal hole diameter is zero or negative
    #[error("nominal diameter for row {label:?} must be positive, got {diameter}")]
    NonPositiveDiameter { label: String, diameter: Real },

    /// A column delta drives some row's effective hole diameter to zero or below
    #[error("delta {delta} reduces row {label:?} ({diameter} mm nominal) to a non-positive bore")]
    DegenerateHole {
        label: String,
        diameter: Real,
        delta: Real,
    },
}
