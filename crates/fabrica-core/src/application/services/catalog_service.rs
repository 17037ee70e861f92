//! Catalog Service - product line listing and resolution.
//!
//! Handles registry queries and marker resolution for the CLI.
//! Separated from ShowcaseService for single responsibility.

use serde::Serialize;

use crate::{
    application::ApplicationError,
    domain::{LINE_REGISTRY, Variant, known_markers},
    error::FabricaResult,
};

/// Information about one product line for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineInfo {
    pub marker: String,
    pub title: String,
    pub blurb: String,
    pub products: Vec<String>,
}

/// Service for catalog operations.
///
/// Stateless; every query reads the static line registry.
pub struct CatalogService;

impl CatalogService {
    /// Create a new catalog service.
    pub fn new() -> Self {
        Self
    }

    /// List all registered product lines in catalog order.
    pub fn list(&self) -> Vec<LineInfo> {
        LINE_REGISTRY
            .iter()
            .map(|def| LineInfo {
                marker: def.variant.marker().to_string(),
                title: def.title.to_string(),
                blurb: def.blurb.to_string(),
                products: def.products.iter().map(|p| p.to_string()).collect(),
            })
            .collect()
    }

    /// Resolve a user-supplied marker to its variant.
    ///
    /// Accepts whatever [`Variant`]'s parser accepts (`"1"`, `"one"`, ...)
    /// and verifies the result is registered. Unknown input yields a
    /// resolution error naming the known markers.
    pub fn resolve(&self, marker: &str) -> FabricaResult<Variant> {
        let variant: Variant = marker.parse()?;

        // Parser and registry are kept in sync by the domain tests; a miss
        // here means a line was parsed but never registered.
        crate::domain::find_line(variant)
            .map(|def| def.variant)
            .ok_or_else(|| {
                ApplicationError::LineResolution {
                    reason: format!(
                        "line '{}' is not registered (known: {})",
                        marker,
                        known_markers().join(", ")
                    ),
                }
                .into()
            })
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FabricaError;

    #[test]
    fn list_yields_one_entry_per_registered_line() {
        let catalog = CatalogService::new();
        let lines = catalog.list();
        assert_eq!(lines.len(), LINE_REGISTRY.len());
        assert_eq!(lines[0].marker, "1");
        assert_eq!(lines[1].marker, "2");
    }

    #[test]
    fn list_entries_name_all_four_products() {
        let catalog = CatalogService::new();
        for line in catalog.list() {
            assert_eq!(line.products, vec!["A", "B", "C", "D"]);
        }
    }

    #[test]
    fn resolve_accepts_digit_and_word_markers() {
        let catalog = CatalogService::new();
        assert_eq!(catalog.resolve("1").unwrap(), Variant::One);
        assert_eq!(catalog.resolve("two").unwrap(), Variant::Two);
    }

    #[test]
    fn resolve_rejects_unknown_marker_with_domain_error() {
        let catalog = CatalogService::new();
        let err = catalog.resolve("9").unwrap_err();
        assert!(matches!(err, FabricaError::Domain(_)));
    }

    #[test]
    fn line_info_serializes_for_machine_output() {
        let catalog = CatalogService::new();
        let json = serde_json::to_string(&catalog.list()).unwrap();
        assert!(json.contains("\"marker\":\"1\""));
        assert!(json.contains("Product line 2"));
    }
}
