pub mod catalog;
pub mod comparison;
pub mod config;
pub mod error;
pub mod render;
pub mod report;
pub mod router;
pub mod telemetry;

pub use catalog::Catalog;
pub use router::catalog_router;
