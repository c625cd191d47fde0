use super::coords::Envelope;
use thiserror::Error;

/// Result alias for fallible geometry operations
pub type GeomResult<T> = Result<T, GeometryError>;

/// Errors raised while parsing WKT or constructing geometries.
///
/// `MalformedWkt` means the input text is not well-formed WKT at all;
/// `InvalidGeometry` means the structure was readable but violates a
/// geometry invariant. The latter carries the path of the offending
/// member (type names and indices within parent sequences).
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("malformed WKT: {0}")]
    MalformedWkt(String),
    #[error("invalid geometry at {path}: {reason}")]
    InvalidGeometry { path: String, reason: String },
}

impl GeometryError {
    /// Shorthand for an invariant violation at the given path
    pub(crate) fn invalid(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Prefix the error path with the position of the offending member
    /// within its parent sequence. Malformed-input errors pass through
    /// unchanged.
    pub(crate) fn nested(self, parent: &str, index: usize) -> Self {
        match self {
            Self::InvalidGeometry { path, reason } => Self::InvalidGeometry {
                path: format!("{parent}[{index}]/{path}"),
                reason,
            },
            other => other,
        }
    }
}

/// Trait with common functionality for all geometric objects
pub trait GeometricObject {
    /// WKT representation of the object
    fn wkt(&self) -> String;

    /// Minimum axis-aligned bounding box, or None if the object holds
    /// no coordinates at all.
    fn envelope(&self) -> Option<Envelope>;
}

/// Macro to implement the Display trait for Geometric Object types
macro_rules! display_for_geom {
    ($type:ty) => {
        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "{}", self.wkt())
            }
        }
    };
}

pub(crate) use display_for_geom;
