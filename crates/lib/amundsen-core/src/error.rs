use std::{error::Error, fmt};

use amundsen_models::schema::FIELD_ERROR;
use amundsen_models::{InvalidDirection, InvalidTableRef};
use serde_json::{Value, json};

/// Failure of a single catalog lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    InvalidArgument(InvalidTableRef),
    InvalidDirection(InvalidDirection),
    InvalidDepth(u32),
    Transport(String),
    Status { status: u16, url: String },
    Decode(String),
    /// The `error` value a catalog payload carried, kept verbatim.
    Upstream(Value),
}

impl CatalogError {
    /// True for caller mistakes caught before any request is sent.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_) | Self::InvalidDirection(_) | Self::InvalidDepth(_)
        )
    }

    /// Structured `{"error": ...}` form returned to agents.
    #[must_use]
    pub fn to_payload(&self) -> Value {
        match self {
            Self::Upstream(value) => json!({ FIELD_ERROR: value }),
            other => json!({ FIELD_ERROR: other.to_string() }),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(err) => write!(f, "{err}"),
            Self::InvalidDirection(err) => write!(f, "{err}"),
            Self::InvalidDepth(depth) => {
                write!(f, "Invalid depth {depth}. Must be at least 1")
            }
            Self::Transport(message) => write!(f, "catalog request failed: {message}"),
            Self::Status { status, url } => {
                write!(f, "catalog returned HTTP {status} for {url}")
            }
            Self::Decode(message) => write!(f, "catalog response was not JSON: {message}"),
            Self::Upstream(Value::String(message)) => f.write_str(message),
            Self::Upstream(value) => write!(f, "{value}"),
        }
    }
}

impl Error for CatalogError {}

impl From<InvalidTableRef> for CatalogError {
    fn from(err: InvalidTableRef) -> Self {
        Self::InvalidArgument(err)
    }
}

impl From<InvalidDirection> for CatalogError {
    fn from(err: InvalidDirection) -> Self {
        Self::InvalidDirection(err)
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_payload_is_preserved() {
        let upstream = json!({"code": 503, "message": "catalog down"});
        let err = CatalogError::Upstream(upstream.clone());
        assert_eq!(err.to_payload(), json!({ "error": upstream }));
    }

    #[test]
    fn validation_errors_are_classified() {
        let direction = CatalogError::from(InvalidDirection("sideways".to_string()));
        assert!(direction.is_validation());
        assert!(CatalogError::InvalidDepth(0).is_validation());
        assert!(!CatalogError::Transport("refused".to_string()).is_validation());
        assert_eq!(
            direction.to_payload(),
            json!({
                "error": "Invalid direction 'sideways'. Must be one of: both, upstream, downstream"
            })
        );
    }
}
