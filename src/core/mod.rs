pub mod engine;
pub mod pricing;
pub mod types;
