//! Fabrica Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Fabrica
//! product-line demonstrator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          fabrica-cli (CLI)              │
//! │      (Implements Driving Ports)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ShowcaseService, CatalogService)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │   (ProductA..ProductD, ProductFactory)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     fabrica-adapters (Product lines)    │
//! │   (FactoryOne/ProductA1.., FactoryTwo)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Values)       │
//! │     (Variant, ProductKind, registry)    │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fabrica_core::application::{CatalogService, ShowcaseService};
//!
//! // 1. Resolve the requested line
//! let catalog = CatalogService::new();
//! let variant = catalog.resolve("1")?;
//!
//! // 2. Showcase it (with an injected factory adapter)
//! let service = ShowcaseService::new(factory);
//! for line in service.run() {
//!     println!("{line}");
//! }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogService, LineInfo, ShowcaseService,
        ports::{ProductA, ProductB, ProductC, ProductD, ProductFactory},
    };
    pub use crate::domain::{LineDef, ProductKind, Variant};
    pub use crate::error::{FabricaError, FabricaResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
