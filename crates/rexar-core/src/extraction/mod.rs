//! Recursive extraction engine.

pub mod engine;

pub use engine::Extractor;
