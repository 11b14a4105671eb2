//! Emission category model
//!
//! A category is a free-text label ("transport", "waste", ...) that groups
//! emission contributions. Names are compared exactly; callers normalize
//! user input with [`normalize_category_name`] before handing it over.

use super::tonnes::Tonnes;

/// Accumulated emissions for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name (already normalized)
    pub name: String,

    /// Running total of every accepted contribution
    pub total: Tonnes,
}

impl CategoryTotal {
    /// Create a category with its first contribution
    pub fn new(name: impl Into<String>, total: Tonnes) -> Self {
        Self {
            name: name.into(),
            total,
        }
    }

    /// Add a contribution and return the new running total
    pub fn contribute(&mut self, amount: Tonnes) -> Tonnes {
        self.total += amount;
        self.total
    }
}

/// Normalize a typed category name: surrounding whitespace removed, lowercased
pub fn normalize_category_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}
