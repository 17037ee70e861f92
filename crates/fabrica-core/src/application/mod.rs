//! Application layer for Fabrica.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ShowcaseService, CatalogService)
//! - **Ports**: Interface definitions (traits) for the product families
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All domain values live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CatalogService,
    LineInfo, // DTO for line metadata
    ShowcaseService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ProductA, ProductB, ProductC, ProductD, ProductFactory};

pub use error::ApplicationError;
