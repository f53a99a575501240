use std::{error::Error, fmt, io};

/// The crate's result type.
pub type Result<T> = std::result::Result<T, BoundaryErr>;

/// Failures surfaced by the boundary engine and its ambient layers.
#[derive(Debug)]
pub enum BoundaryErr {
    /// A configuration value is out of its valid range, caught before any
    /// generation or training happens.
    InvalidConfig {
        field: &'static str,
        reason: String,
    },
    /// A width or height of zero reached a normalization step.
    ZeroExtent { what: &'static str },
    Io(io::Error),
    Json(serde_json::Error),
}

impl BoundaryErr {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for BoundaryErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryErr::InvalidConfig { field, reason } => {
                write!(f, "invalid config for {field}: {reason}")
            }
            BoundaryErr::ZeroExtent { what } => {
                write!(f, "cannot normalize by a zero {what}")
            }
            BoundaryErr::Io(e) => write!(f, "io error: {e}"),
            BoundaryErr::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl Error for BoundaryErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BoundaryErr::Io(e) => Some(e),
            BoundaryErr::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for BoundaryErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for BoundaryErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
