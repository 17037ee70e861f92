//! Domain value objects: Variant and ProductKind.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! They hold NO capability logic. Everything the system knows about a
//! product line lives in `capabilities.rs`. This file's only job is to
//! define the types, their string representations, and their `FromStr`
//! parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `marker` arm and the `FromStr` arm here
//! 3. Add a line entry in `capabilities.rs`
//! 4. Done — nothing else changes

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Variant ──────────────────────────────────────────────────────────────────

/// The tag naming which concrete product set a factory produces.
///
/// Every product created by a single factory carries the same variant.
/// That guarantee is upheld purely by which concrete types each factory
/// instantiates — there is no runtime check, and none is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    One,
    Two,
}

impl Variant {
    /// All variants, in catalog order.
    pub const ALL: [Variant; 2] = [Variant::One, Variant::Two];

    /// The literal marker embedded in every product description of this
    /// variant ("A1", "B1", ... for `One`).
    pub const fn marker(&self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

impl FromStr for Variant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "one" => Ok(Self::One),
            "2" | "two" => Ok(Self::Two),
            other => Err(DomainError::UnknownVariant {
                given: other.to_string(),
            }),
        }
    }
}

// ── ProductKind ───────────────────────────────────────────────────────────────

/// One of the product types a factory knows how to create.
///
/// Used for display and catalog listings only; the creation surface itself
/// is the `ProductFactory` trait, one method per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    A,
    B,
    C,
    D,
}

impl ProductKind {
    /// All product kinds, in creation order.
    pub const ALL: [ProductKind; 4] = [
        ProductKind::A,
        ProductKind::B,
        ProductKind::C,
        ProductKind::D,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// The marker a product of this kind carries under the given variant,
    /// e.g. `B` + variant `1` → `"B1"`.
    pub fn marker(&self, variant: Variant) -> String {
        format!("{}{}", self.as_str(), variant.marker())
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            "c" => Ok(Self::C),
            "d" => Ok(Self::D),
            other => Err(DomainError::UnknownProductKind {
                given: other.to_string(),
            }),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_markers() {
        assert_eq!(Variant::One.marker(), "1");
        assert_eq!(Variant::Two.marker(), "2");
    }

    #[test]
    fn variant_parses_digits_and_words() {
        assert_eq!(Variant::from_str("1").unwrap(), Variant::One);
        assert_eq!(Variant::from_str("one").unwrap(), Variant::One);
        assert_eq!(Variant::from_str(" 2 ").unwrap(), Variant::Two);
        assert_eq!(Variant::from_str("TWO").unwrap(), Variant::Two);
    }

    #[test]
    fn variant_rejects_unknown_markers() {
        assert!(matches!(
            Variant::from_str("3"),
            Err(DomainError::UnknownVariant { .. })
        ));
        assert!(Variant::from_str("").is_err());
    }

    #[test]
    fn product_kind_parses_case_insensitively() {
        assert_eq!(ProductKind::from_str("a").unwrap(), ProductKind::A);
        assert_eq!(ProductKind::from_str("D").unwrap(), ProductKind::D);
        assert!(ProductKind::from_str("e").is_err());
    }

    #[test]
    fn product_kind_marker_combines_kind_and_variant() {
        assert_eq!(ProductKind::B.marker(Variant::One), "B1");
        assert_eq!(ProductKind::D.marker(Variant::Two), "D2");
    }

    #[test]
    fn display_matches_markers() {
        assert_eq!(Variant::One.to_string(), "1");
        assert_eq!(ProductKind::C.to_string(), "C");
    }
}
