//! Product line registry.
//!
//! Each product line is described exactly once by its [`LineDef`]: the
//! variant tag, a human-readable title, and the set of product kinds the
//! line's factory can create. Listing and marker resolution are O(n) table
//! lookups over this registry.
//!
//! The registry is descriptive, not enforcing: family compatibility is
//! upheld by which concrete types each factory instantiates, never by a
//! runtime check against this table.
//!
//! # Adding a New Line
//!
//! 1. Add a variant to `Variant` in `value_objects.rs`
//! 2. Add one [`LineDef`] entry to [`LINE_REGISTRY`]
//! 3. Implement the factory and products in `fabrica-adapters`
//! 4. That's it — listing and resolution derive from the registry

use crate::domain::value_objects::{ProductKind, Variant};

// ── Line definitions ─────────────────────────────────────────────────────────

/// Describes one product line for catalog and resolution purposes.
#[derive(Debug, Clone, Copy)]
pub struct LineDef {
    /// The variant this line produces.
    pub variant: Variant,

    /// Short display title, e.g. "Product line 1".
    pub title: &'static str,

    /// One-sentence description shown by `fabrica list`.
    pub blurb: &'static str,

    /// Product kinds the line's factory creates.
    ///
    /// Every line covers the full kind set; the field exists so listings
    /// never hard-code it.
    pub products: &'static [ProductKind],
}

/// Single source of truth for the registered product lines.
///
/// Catalog order here is presentation order everywhere.
pub static LINE_REGISTRY: &[LineDef] = &[
    LineDef {
        variant: Variant::One,
        title: "Product line 1",
        blurb: "First concrete family: products A1, B1, C1, and D1",
        products: &ProductKind::ALL,
    },
    LineDef {
        variant: Variant::Two,
        title: "Product line 2",
        blurb: "Second concrete family: products A2, B2, C2, and D2",
        products: &ProductKind::ALL,
    },
];

// ── Registry lookup API ───────────────────────────────────────────────────────
//
// These functions are the ONLY entry points for catalog queries.
// Do not write `match` arms on variants elsewhere.

/// Find the definition for a specific variant.
///
/// Returns `None` only if the variant is not registered — a programming
/// error, not a user error. The `assert_registry_integrity` test catches it.
pub fn find_line(variant: Variant) -> Option<&'static LineDef> {
    LINE_REGISTRY.iter().find(|def| def.variant == variant)
}

/// Find the definition whose marker matches a user-supplied string.
///
/// Matching is by `Variant::marker()`, so `"1"` resolves line one. Word
/// forms (`"one"`) are the parser's job, not the registry's.
pub fn find_line_by_marker(marker: &str) -> Option<&'static LineDef> {
    LINE_REGISTRY
        .iter()
        .find(|def| def.variant.marker() == marker)
}

/// All registered markers, in catalog order.
///
/// Used to build "known lines are: ..." suggestions on resolution failure.
pub fn known_markers() -> Vec<&'static str> {
    LINE_REGISTRY.iter().map(|def| def.variant.marker()).collect()
}

// ── Registry integrity (checked in tests) ────────────────────────────────────

/// Assert that the registry is internally consistent.
///
/// Call this in a test; it panics with a clear message on any violation.
/// Catches registration errors at development time, not at user runtime.
#[doc(hidden)]
pub fn assert_registry_integrity() {
    // Every variant must be registered exactly once.
    for variant in Variant::ALL {
        let entries: Vec<_> = LINE_REGISTRY
            .iter()
            .filter(|def| def.variant == variant)
            .collect();
        assert_eq!(
            entries.len(),
            1,
            "Variant {:?} must have exactly one LineDef, found {}",
            variant,
            entries.len()
        );
    }

    for def in LINE_REGISTRY {
        // A line with no products cannot be demonstrated.
        assert!(
            !def.products.is_empty(),
            "Line {:?} registers no product kinds",
            def.variant
        );

        // No duplicate kinds within a line.
        for (i, kind) in def.products.iter().enumerate() {
            assert!(
                !def.products[..i].contains(kind),
                "Line {:?} registers product kind {:?} twice",
                def.variant,
                kind
            );
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_internally_consistent() {
        assert_registry_integrity();
    }

    #[test]
    fn every_variant_has_a_line() {
        for variant in Variant::ALL {
            assert!(find_line(variant).is_some(), "missing line for {variant:?}");
        }
    }

    #[test]
    fn lines_cover_all_product_kinds() {
        for def in LINE_REGISTRY {
            for kind in ProductKind::ALL {
                assert!(
                    def.products.contains(&kind),
                    "line {:?} misses product kind {:?}",
                    def.variant,
                    kind
                );
            }
        }
    }

    #[test]
    fn marker_lookup_resolves_registered_lines() {
        assert_eq!(find_line_by_marker("1").unwrap().variant, Variant::One);
        assert_eq!(find_line_by_marker("2").unwrap().variant, Variant::Two);
        assert!(find_line_by_marker("3").is_none());
    }

    #[test]
    fn known_markers_in_catalog_order() {
        assert_eq!(known_markers(), vec!["1", "2"]);
    }
}
