//! Core data models for Eco-Track
//!
//! Emission amounts, per-category totals and the reduction strategy table.

pub mod category;
pub mod strategy;
pub mod tonnes;

pub use category::{normalize_category_name, CategoryTotal};
pub use strategy::{strategy_for, EmissionSource, FALLBACK_STRATEGY};
pub use tonnes::Tonnes;
