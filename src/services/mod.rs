//! Business logic layer for Eco-Track
//!
//! Services own the domain operations and log what they do; the console
//! layer only parses input and prints results.

pub mod ledger;

pub use ledger::{EmissionsLedger, NO_DATA_MESSAGE};
