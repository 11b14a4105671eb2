//! Reduction strategy table
//!
//! Maps the known emission sources to a static piece of advice. The table is
//! a `match` over a closed enum, so it lives for the whole process and is
//! never mutated.

/// Advice returned for categories outside the known set
pub const FALLBACK_STRATEGY: &str = "Consider reducing emissions in high-impact areas.";

/// Emission sources with a dedicated reduction strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmissionSource {
    Transport,
    Electricity,
    Waste,
    Manufacturing,
}

impl EmissionSource {
    /// Every known source, in table order
    pub const ALL: [EmissionSource; 4] = [
        Self::Transport,
        Self::Electricity,
        Self::Waste,
        Self::Manufacturing,
    ];

    /// Look up a source by its (lowercase) category name
    pub fn from_category(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|source| source.name() == name)
    }

    /// Category name this source is keyed by
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Electricity => "electricity",
            Self::Waste => "waste",
            Self::Manufacturing => "manufacturing",
        }
    }

    /// Advice for reducing emissions from this source
    pub const fn strategy(&self) -> &'static str {
        match self {
            Self::Transport => "Consider using public transport, carpooling, or electric vehicles.",
            Self::Electricity => {
                "Switch to renewable energy sources, use energy-efficient appliances."
            }
            Self::Waste => "Implement recycling and waste reduction programs.",
            Self::Manufacturing => "Optimize processes, use sustainable materials.",
        }
    }
}

/// Advice for any category, falling back to the generic strategy
pub fn strategy_for(category: &str) -> &'static str {
    EmissionSource::from_category(category)
        .map(|source| source.strategy())
        .unwrap_or(FALLBACK_STRATEGY)
}
