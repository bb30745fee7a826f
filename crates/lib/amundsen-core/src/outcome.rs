//! Tagged result of a catalog tool call.
//!
//! Agents need to tell "the catalog has nothing for this table" apart from
//! "the catalog call failed". `Outcome` keeps the two on separate variants and
//! serializes to the terse wire shapes agents already consume.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::CatalogError;

/// Why a lookup produced no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    NoDateRange,
    NoOwners,
    NoDashboards,
    NoLineage,
}

impl EmptyReason {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoDateRange => "table has no date range",
            Self::NoOwners => "the table has no owners",
            Self::NoDashboards => "table has no dashboard",
            Self::NoLineage => "Table has no lineage",
        }
    }
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Found(T),
    Empty(EmptyReason),
    Failed(CatalogError),
}

impl<T> Outcome<T> {
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    #[must_use]
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::Empty(_) | Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn and_then<U>(self, op: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Self::Found(value) => op(value),
            Self::Empty(reason) => Outcome::Empty(reason),
            Self::Failed(err) => Outcome::Failed(err),
        }
    }
}

impl<T> From<Result<T, CatalogError>> for Outcome<T> {
    fn from(result: Result<T, CatalogError>) -> Self {
        match result {
            Ok(value) => Self::Found(value),
            Err(err) => Self::Failed(err),
        }
    }
}

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Found(value) => value.serialize(serializer),
            Self::Empty(reason) => serializer.serialize_str(reason.message()),
            Self::Failed(err) => err.to_payload().serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_each_variant_to_its_wire_shape() {
        let found: Outcome<Vec<&str>> = Outcome::Found(vec!["alice"]);
        let empty: Outcome<Vec<&str>> = Outcome::Empty(EmptyReason::NoOwners);
        let failed: Outcome<Vec<&str>> =
            Outcome::Failed(CatalogError::Upstream(json!("HTTP Error 404: NOT FOUND")));

        assert_eq!(serde_json::to_value(&found).unwrap(), json!(["alice"]));
        assert_eq!(
            serde_json::to_value(&empty).unwrap(),
            json!("the table has no owners")
        );
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({"error": "HTTP Error 404: NOT FOUND"})
        );
    }

    #[test]
    fn and_then_short_circuits_failures() {
        let failed: Outcome<u32> = Err(CatalogError::Transport("refused".to_string())).into();
        let mut called = false;
        let next = failed.and_then(|value| {
            called = true;
            Outcome::Found(value + 1)
        });
        assert!(next.is_failed());
        assert!(!called);
    }
}
