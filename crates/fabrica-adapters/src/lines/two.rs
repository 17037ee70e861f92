//! The second product line: `FactoryTwo` and products A2 through D2.

use fabrica_core::{
    application::ports::{ProductA, ProductB, ProductC, ProductD, ProductFactory},
    domain::Variant,
};
use tracing::debug;

/// Factory for the second product line.
pub struct FactoryTwo;

impl FactoryTwo {
    /// Create a new line-2 factory.
    pub fn new() -> Self {
        Self
    }
}

impl Default for FactoryTwo {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductFactory for FactoryTwo {
    fn variant(&self) -> Variant {
        Variant::Two
    }

    fn create_product_a(&self) -> Box<dyn ProductA> {
        debug!("Creating product A2");
        Box::new(ProductA2)
    }

    fn create_product_b(&self) -> Box<dyn ProductB> {
        debug!("Creating product B2");
        Box::new(ProductB2)
    }

    fn create_product_c(&self) -> Box<dyn ProductC> {
        debug!("Creating product C2");
        Box::new(ProductC2)
    }

    fn create_product_d(&self) -> Box<dyn ProductD> {
        debug!("Creating product D2");
        Box::new(ProductD2)
    }
}

// ── Products ──────────────────────────────────────────────────────────────────

/// Variant-2 implementation of the A capability.
pub struct ProductA2;

impl ProductA for ProductA2 {
    fn describe(&self) -> String {
        "The result of the product A2.".to_string()
    }
}

/// Variant-2 implementation of the B capability.
///
/// Accepts any [`ProductA`] partner; pairing it with an A2 is convention,
/// not a requirement.
pub struct ProductB2;

impl ProductB for ProductB2 {
    fn describe(&self) -> String {
        "The result of the product B2.".to_string()
    }

    fn collaborate(&self, partner: &dyn ProductA) -> String {
        format!(
            "The result of the B2 collaborating with the ({})",
            partner.describe()
        )
    }
}

/// Variant-2 implementation of the C capability.
pub struct ProductC2;

impl ProductC for ProductC2 {
    fn describe(&self) -> String {
        "The result of the product C2.".to_string()
    }
}

/// Variant-2 implementation of the D capability.
pub struct ProductD2;

impl ProductD for ProductD2 {
    fn describe(&self) -> String {
        "The result of the product D2.".to_string()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
