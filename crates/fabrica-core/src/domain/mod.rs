// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Fabrica.
//!
//! This module contains pure values with ZERO external dependencies beyond
//! `thiserror` and `serde`. All object creation happens behind ports
//! (traits) defined in the application layer and implemented by
//! `fabrica-adapters`.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: All domain objects are `Copy` + `PartialEq`
//! - **Descriptive registry**: The line registry informs listings and
//!   resolution; it never enforces family membership — that guarantee is
//!   by construction inside each concrete factory
//!
// Public API - what the world sees
pub mod capabilities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use capabilities::{LINE_REGISTRY, LineDef, find_line, find_line_by_marker, known_markers};
pub use error::{DomainError, ErrorCategory};
pub use value_objects::{ProductKind, Variant};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn variant_parses_correctly() {
        assert_eq!(Variant::from_str("1").unwrap(), Variant::One);
        assert_eq!(Variant::from_str("ONE").unwrap(), Variant::One);
        assert!(Variant::from_str("3").is_err());
    }

    #[test]
    fn parsed_variant_resolves_in_registry() {
        // Anything the parser accepts must have a registry entry.
        for input in ["1", "2", "one", "two"] {
            let variant = Variant::from_str(input).unwrap();
            assert!(find_line(variant).is_some(), "no line for input {input}");
        }
    }

    #[test]
    fn registry_markers_round_trip_through_parser() {
        for def in LINE_REGISTRY {
            let reparsed = Variant::from_str(def.variant.marker()).unwrap();
            assert_eq!(reparsed, def.variant);
        }
    }

    #[test]
    fn product_kind_markers_match_description_tags() {
        // The marker is exactly the tag embedded in a concrete product's
        // description text, e.g. "The result of the product B1."
        assert_eq!(ProductKind::A.marker(Variant::One), "A1");
        assert_eq!(ProductKind::B.marker(Variant::Two), "B2");
        assert_eq!(ProductKind::C.marker(Variant::One), "C1");
        assert_eq!(ProductKind::D.marker(Variant::Two), "D2");
    }
}
