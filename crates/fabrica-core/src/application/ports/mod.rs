//! Application ports (traits) for the product lines.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `fabrica-adapters` implement
//! these.

pub mod output;

pub use output::{ProductA, ProductB, ProductC, ProductD, ProductFactory};
