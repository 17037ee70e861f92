//! The registered product lines, one module per variant.
//!
//! A line module contains one factory and the four concrete products it
//! creates. The factory is the only coupling point: family compatibility
//! exists because `FactoryOne` instantiates only `*1` types and
//! `FactoryTwo` only `*2` types, never because anything checks.

pub mod one;
pub mod two;

pub use one::FactoryOne;
pub use two::FactoryTwo;
