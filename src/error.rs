use thiserror::Error;

/// Result type for fallible coordinate and vector operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by conversions and vector algebra.
///
/// All errors are raised at the call that detects the violation. Nothing is clamped or corrected
/// on the caller's behalf.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A spherical component lies outside its valid range.
    ///
    /// `value`, `min`, and `max` are always reported in radians (or the unit of length for the
    /// radius), regardless of the unit the caller supplied.
    #[error("the {component} must be in [{min}, {max}] but was {value}")]
    InvalidCoordinateRange {
        component: Component,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Two operands that must have the same number of elements did not.
    #[error("operands have mismatched dimensions ({left} vs. {right})")]
    DimensionMismatch { left: usize, right: usize },

    /// A direction was requested from a vector with no length.
    #[error("cannot derive a direction from a zero-length vector")]
    ZeroLength,
}

/// Names the component of a spherical triple that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Radius,
    PolarAngle,
    AzimuthAngle,
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Component::Radius => "radius",
            Component::PolarAngle => "polar angle",
            Component::AzimuthAngle => "azimuth angle",
        })
    }
}
