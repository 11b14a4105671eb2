//! Display formatting for terminal output

pub mod ledger;

pub use ledger::{format_footprint, format_menu};
