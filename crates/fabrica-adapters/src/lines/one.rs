//! The first product line: `FactoryOne` and products A1 through D1.

use fabrica_core::{
    application::ports::{ProductA, ProductB, ProductC, ProductD, ProductFactory},
    domain::Variant,
};
use tracing::debug;

/// Factory for the first product line.
///
/// Every creator instantiates the matching variant-1 type while its
/// signature returns the abstract capability. That fixed mapping is what
/// keeps the family compatible.
pub struct FactoryOne;

impl FactoryOne {
    /// Create a new line-1 factory.
    pub fn new() -> Self {
        Self
    }
}

impl Default for FactoryOne {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductFactory for FactoryOne {
    fn variant(&self) -> Variant {
        Variant::One
    }

    fn create_product_a(&self) -> Box<dyn ProductA> {
        debug!("Creating product A1");
        Box::new(ProductA1)
    }

    fn create_product_b(&self) -> Box<dyn ProductB> {
        debug!("Creating product B1");
        Box::new(ProductB1)
    }

    fn create_product_c(&self) -> Box<dyn ProductC> {
        debug!("Creating product C1");
        Box::new(ProductC1)
    }

    fn create_product_d(&self) -> Box<dyn ProductD> {
        debug!("Creating product D1");
        Box::new(ProductD1)
    }
}

// ── Products ──────────────────────────────────────────────────────────────────

/// Variant-1 implementation of the A capability.
pub struct ProductA1;

impl ProductA for ProductA1 {
    fn describe(&self) -> String {
        "The result of the product A1.".to_string()
    }
}

/// Variant-1 implementation of the B capability.
///
/// A B1 works correctly with an A1; it nevertheless accepts any
/// [`ProductA`] instance, whatever line produced it.
pub struct ProductB1;

impl ProductB for ProductB1 {
    fn describe(&self) -> String {
        "The result of the product B1.".to_string()
    }

    fn collaborate(&self, partner: &dyn ProductA) -> String {
        format!(
            "The result of the B1 collaborating with the ({})",
            partner.describe()
        )
    }
}

/// Variant-1 implementation of the C capability.
pub struct ProductC1;

impl ProductC for ProductC1 {
    fn describe(&self) -> String {
        "The result of the product C1.".to_string()
    }
}

/// Variant-1 implementation of the D capability.
pub struct ProductD1;

impl ProductD for ProductD1 {
    fn describe(&self) -> String {
        "The result of the product D1.".to_string()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_reports_variant_one() {
        assert_eq!(FactoryOne::new().variant(), Variant::One);
    }

    #[test]
    fn every_product_carries_the_line_marker() {
        let factory = FactoryOne::new();
        assert!(factory.create_product_a().describe().contains("A1"));
        assert!(factory.create_product_b().describe().contains("B1"));
        assert!(factory.create_product_c().describe().contains("C1"));
        assert!(factory.create_product_d().describe().contains("D1"));
    }

    #[test]
    fn descriptions_are_idempotent() {
        let product = FactoryOne::new().create_product_c();
        assert_eq!(product.describe(), product.describe());
    }

    #[test]
    fn collaboration_embeds_the_partner_description() {
        let factory = FactoryOne::new();
        let a = factory.create_product_a();
        let b = factory.create_product_b();
        assert_eq!(
            b.collaborate(a.as_ref()),
            "The result of the B1 collaborating with the (The result of the product A1.)"
        );
    }

    #[test]
    fn collaboration_accepts_a_partner_from_another_line() {
        // Mismatched pairing is permitted; only the embedded text differs.
        let b = FactoryOne::new().create_product_b();
        let a2 = crate::lines::two::ProductA2;
        assert_eq!(
            b.collaborate(&a2),
            "The result of the B1 collaborating with the (The result of the product A2.)"
        );
    }
}
