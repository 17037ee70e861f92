//! Concrete product lines for Fabrica.
//!
//! This crate implements the ports defined in
//! `fabrica-core::application::ports`. Each line module pairs one factory
//! with the product set it creates; the catalog module maps a variant to
//! its boxed factory.

pub mod catalog;
pub mod lines;

// Re-export commonly used adapters
pub use catalog::{all_factories, factory_for};
pub use lines::{FactoryOne, FactoryTwo};
