//! Showcase Service - the client routine.
//!
//! This service is the pattern's client: it works with factories and
//! products only through the abstract ports, so any factory can be passed
//! in without the routine changing. It coordinates the whole demonstration:
//! 1. Create one of each product through the factory
//! 2. Query ProductB on its own
//! 3. Have ProductB collaborate with ProductA
//! 4. Query ProductC and ProductD

use tracing::{debug, info, instrument};

use crate::{
    application::ports::ProductFactory,
    domain::Variant,
};

/// Runs one product family through its paces.
///
/// Holds the factory behind the port, never a concrete type. Which variant
/// comes out is entirely the factory's decision.
pub struct ShowcaseService {
    factory: Box<dyn ProductFactory>,
}

impl ShowcaseService {
    /// Create a new showcase around the given factory.
    pub fn new(factory: Box<dyn ProductFactory>) -> Self {
        Self { factory }
    }

    /// The variant the wrapped factory produces.
    pub fn variant(&self) -> Variant {
        self.factory.variant()
    }

    /// Exercise the full family once.
    ///
    /// Creates each product, then returns the four description strings in
    /// presentation order: B alone, B collaborating with A, C, D. Every
    /// operation is total, so the routine cannot fail.
    #[instrument(skip_all, fields(variant = %self.factory.variant()))]
    pub fn run(&self) -> Vec<String> {
        info!("Showcasing product line {}", self.factory.variant());

        let product_a = self.factory.create_product_a();
        let product_b = self.factory.create_product_b();
        let product_c = self.factory.create_product_c();
        let product_d = self.factory.create_product_d();
        debug!("Family created");

        let lines = vec![
            product_b.describe(),
            product_b.collaborate(product_a.as_ref()),
            product_c.describe(),
            product_d.describe(),
        ];

        info!(descriptions = lines.len(), "Showcase completed");
        lines
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::{
        MockProductA, MockProductB, MockProductC, MockProductD, MockProductFactory,
    };

    /// A mock factory whose products return canned, distinguishable text.
    fn stub_factory(variant: Variant) -> MockProductFactory {
        let mut factory = MockProductFactory::new();
        factory.expect_variant().return_const(variant);
        factory.expect_create_product_a().returning(|| {
            let mut a = MockProductA::new();
            a.expect_describe().return_const("a-text".to_string());
            Box::new(a)
        });
        factory.expect_create_product_b().returning(|| {
            let mut b = MockProductB::new();
            b.expect_describe().return_const("b-text".to_string());
            b.expect_collaborate()
                .returning(|partner| format!("b-with({})", partner.describe()));
            Box::new(b)
        });
        factory.expect_create_product_c().returning(|| {
            let mut c = MockProductC::new();
            c.expect_describe().return_const("c-text".to_string());
            Box::new(c)
        });
        factory.expect_create_product_d().returning(|| {
            let mut d = MockProductD::new();
            d.expect_describe().return_const("d-text".to_string());
            Box::new(d)
        });
        factory
    }

    #[test]
    fn run_returns_descriptions_in_presentation_order() {
        let service = ShowcaseService::new(Box::new(stub_factory(Variant::One)));
        let lines = service.run();
        assert_eq!(
            lines,
            vec!["b-text", "b-with(a-text)", "c-text", "d-text"]
        );
    }

    #[test]
    fn collaboration_receives_the_created_product_a() {
        // The partner handed to B must be the A from the same factory call;
        // the mock embeds the partner's text so we can observe it.
        let service = ShowcaseService::new(Box::new(stub_factory(Variant::Two)));
        let lines = service.run();
        assert_eq!(lines[1], "b-with(a-text)");
    }

    #[test]
    fn variant_is_reported_from_the_factory() {
        let service = ShowcaseService::new(Box::new(stub_factory(Variant::Two)));
        assert_eq!(service.variant(), Variant::Two);
    }

    #[test]
    fn run_is_repeatable() {
        // Products carry no state; running twice yields identical output.
        let service = ShowcaseService::new(Box::new(stub_factory(Variant::One)));
        assert_eq!(service.run(), service.run());
    }
}
