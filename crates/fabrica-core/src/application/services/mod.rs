//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the two
//! high-level use cases: "showcase a product family" and "query the line
//! catalog".

pub mod catalog_service;
pub mod showcase_service;

pub use catalog_service::{CatalogService, LineInfo};
pub use showcase_service::ShowcaseService;
