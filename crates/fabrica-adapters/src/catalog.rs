//! Built-in factory catalog.
//!
//! The single place that maps a [`Variant`] to its concrete factory. The
//! CLI never names `FactoryOne`/`FactoryTwo` directly; it resolves a
//! variant and asks here.

use fabrica_core::{application::ports::ProductFactory, domain::Variant};

use crate::lines::{FactoryOne, FactoryTwo};

/// The factory producing the given variant's family.
pub fn factory_for(variant: Variant) -> Box<dyn ProductFactory> {
    match variant {
        Variant::One => Box::new(FactoryOne::new()),
        Variant::Two => Box::new(FactoryTwo::new()),
    }
}

/// All built-in factories in catalog order.
pub fn all_factories() -> Vec<Box<dyn ProductFactory>> {
    Variant::ALL.into_iter().map(factory_for).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_for_matches_requested_variant() {
        for variant in Variant::ALL {
            assert_eq!(factory_for(variant).variant(), variant);
        }
    }

    #[test]
    fn all_factories_in_catalog_order() {
        let variants: Vec<_> = all_factories().iter().map(|f| f.variant()).collect();
        assert_eq!(variants, Variant::ALL.to_vec());
    }

    #[test]
    fn catalog_families_share_their_factory_variant() {
        // The family a factory yields is tagged with that factory's
        // variant across every product kind.
        for factory in all_factories() {
            let marker = factory.variant().marker();
            for text in [
                factory.create_product_a().describe(),
                factory.create_product_b().describe(),
                factory.create_product_c().describe(),
                factory.create_product_d().describe(),
            ] {
                assert!(text.contains(marker), "{text} lacks marker {marker}");
            }
        }
    }
}
