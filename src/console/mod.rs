//! Interactive console for Eco-Track
//!
//! This module provides the menu-driven loop that is the tool's whole user
//! surface:
//! - Menu choice parsing
//! - The session state machine and its dispatch to the ledger

pub mod menu;
pub mod session;

pub use menu::MenuChoice;
pub use session::{ConsoleSession, SessionState};
