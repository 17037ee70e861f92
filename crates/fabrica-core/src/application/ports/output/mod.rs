//! Driven (output) ports - implemented by the concrete product lines.
//!
//! These traits define what the application needs from a product family.
//! The `fabrica-adapters` crate provides the implementations, one module
//! per line.
//!
//! ## Design Notes
//!
//! - Every query is pure and total: a fixed description string, no inputs,
//!   no failure path
//! - [`ProductB::collaborate`] takes its partner as `&dyn ProductA` — any
//!   implementation is accepted, whatever line it came from. Pairing
//!   matching variants is a convention the factories uphold, not a
//!   constraint this interface checks
//! - `Send + Sync` so factories and products can cross thread boundaries

use crate::domain::Variant;

/// Capability of the first product in a family.
///
/// Implemented by:
/// - `fabrica_adapters::lines::one::ProductA1`
/// - `fabrica_adapters::lines::two::ProductA2`
#[cfg_attr(test, mockall::automock)]
pub trait ProductA: Send + Sync {
    /// Fixed, variant-tagged description of this product.
    fn describe(&self) -> String;
}

/// Capability of the second product in a family.
///
/// Besides its own description, a ProductB can combine itself with any
/// [`ProductA`]. A B1 works *correctly* with an A1 by convention, yet it
/// accepts an A2 just the same — the combination is textual and always
/// succeeds.
#[cfg_attr(test, mockall::automock)]
pub trait ProductB: Send + Sync {
    /// Fixed, variant-tagged description of this product.
    fn describe(&self) -> String;

    /// Combine this product's variant text with the partner's description.
    fn collaborate(&self, partner: &dyn ProductA) -> String;
}

/// Capability of the third product in a family.
#[cfg_attr(test, mockall::automock)]
pub trait ProductC: Send + Sync {
    /// Fixed, variant-tagged description of this product.
    fn describe(&self) -> String;
}

/// Capability of the fourth product in a family.
#[cfg_attr(test, mockall::automock)]
pub trait ProductD: Send + Sync {
    /// Fixed, variant-tagged description of this product.
    fn describe(&self) -> String;
}

/// Port for creating one complete product family.
///
/// Implemented by:
/// - `fabrica_adapters::lines::one::FactoryOne`
/// - `fabrica_adapters::lines::two::FactoryTwo`
///
/// Each creator returns the abstract capability, never a concrete type, so
/// callers stay decoupled from variant selection. A single factory yields
/// products of a single variant — that coupling is the whole point, and it
/// lives in the factory implementations, not here.
#[cfg_attr(test, mockall::automock)]
pub trait ProductFactory: Send + Sync {
    /// The variant every product from this factory carries.
    fn variant(&self) -> Variant;

    fn create_product_a(&self) -> Box<dyn ProductA>;

    fn create_product_b(&self) -> Box<dyn ProductB>;

    fn create_product_c(&self) -> Box<dyn ProductC>;

    fn create_product_d(&self) -> Box<dyn ProductD>;
}
