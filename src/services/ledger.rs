//! Emissions ledger service
//!
//! Owns the per-category totals and implements the three ledger operations:
//! adding a contribution, computing the carbon footprint and suggesting a
//! reduction strategy for the largest source.
//!
//! Categories are kept in a `Vec` in insertion order. `suggest` depends on
//! that order: when several categories share the maximum total, the one
//! added first wins.

use tracing::{error, info, warn};

use crate::error::{EcoTrackError, EcoTrackResult};
use crate::models::{strategy_for, CategoryTotal, Tonnes};

/// Returned by [`EmissionsLedger::suggest`] when nothing has been recorded
pub const NO_DATA_MESSAGE: &str =
    "No data available. Please add emissions data to receive suggestions.";

/// In-memory emissions totals for a single session
#[derive(Debug, Clone, Default)]
pub struct EmissionsLedger {
    categories: Vec<CategoryTotal>,
}

impl EmissionsLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an emission amount to a category
    ///
    /// `raw_value` is parsed as a float. Fails with `InvalidNumberFormat` when
    /// it is not a number and with `NegativeValue` when it is below zero; in
    /// both cases the ledger is untouched and the failure is logged. A
    /// contribution that would overflow the category total to infinity fails
    /// with `TotalOutOfRange` the same way. On success returns the category's
    /// new running total.
    pub fn add(&mut self, category: &str, raw_value: &str) -> EcoTrackResult<Tonnes> {
        let amount = Tonnes::parse(raw_value).inspect_err(|e| {
            error!("Error adding emissions: {}", e);
        })?;

        let total = match self.categories.iter_mut().find(|c| c.name == category) {
            Some(existing) => {
                if !(existing.total + amount).value().is_finite() {
                    let err = EcoTrackError::TotalOutOfRange(category.to_string());
                    error!("Error adding emissions: {}", err);
                    return Err(err);
                }
                existing.contribute(amount)
            }
            None => {
                self.categories.push(CategoryTotal::new(category, amount));
                amount
            }
        };

        info!("Added {} tons to {}. Total: {} tons.", amount, category, total);
        Ok(total)
    }

    /// Sum of every category total (zero for an empty ledger)
    pub fn total(&self) -> Tonnes {
        let footprint: Tonnes = self.categories.iter().map(|c| c.total).sum();
        info!("Total carbon footprint calculated: {} tons.", footprint);
        footprint
    }

    /// Suggest a reduction strategy for the highest-emission category
    pub fn suggest(&self) -> String {
        let Some(highest) = self.highest() else {
            warn!("No data available to suggest strategies.");
            return NO_DATA_MESSAGE.to_string();
        };

        let strategy = strategy_for(&highest.name);
        info!(
            "Suggested reduction strategy for {}: {}",
            highest.name, strategy
        );
        format!(
            "The highest emissions are from {}. {}",
            highest.name, strategy
        )
    }

    /// Category with the largest total, first inserted on ties
    pub fn highest(&self) -> Option<&CategoryTotal> {
        self.categories.iter().fold(None, |best, candidate| match best {
            Some(current) if candidate.total <= current.total => Some(current),
            _ => Some(candidate),
        })
    }

    /// Current total for a category, if it has been recorded
    pub fn get(&self, category: &str) -> Option<Tonnes> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.total)
    }

    /// Iterate categories in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.categories.iter()
    }

    /// Number of recorded categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
