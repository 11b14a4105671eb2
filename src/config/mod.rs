//! Configuration module for Eco-Track
//!
//! This module provides configuration management including:
//! - Log filter resolution from flags and environment
//! - Colour preference for the diagnostic stream

pub mod settings;

pub use settings::Settings;
