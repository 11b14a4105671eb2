//! Eco-Track - interactive emissions tracker
//!
//! This library provides the core functionality for the Eco-Track tool. It
//! accumulates emissions per category, sums them into a carbon footprint and
//! suggests a reduction strategy for the largest source.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Log settings resolution
//! - `console`: Interactive menu loop
//! - `display`: Terminal output formatting
//! - `error`: Custom error types
//! - `logging`: Diagnostic log stream on stderr
//! - `models`: Emission amounts, category totals, reduction strategies
//! - `services`: The emissions ledger
//!
//! # Example
//!
//! ```rust
//! use eco_track::services::EmissionsLedger;
//!
//! let mut ledger = EmissionsLedger::new();
//! ledger.add("transport", "10").unwrap();
//! ledger.add("electricity", "5").unwrap();
//! assert_eq!(ledger.total().value(), 15.0);
//! ```

pub mod config;
pub mod console;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use error::EcoTrackError;
