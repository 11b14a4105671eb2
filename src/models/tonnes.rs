//! Tonnes type for representing emission amounts
//!
//! Emission amounts are metric tons of CO2-equivalent stored as `f64`. A
//! `Tonnes` value built through [`Tonnes::parse`] is always finite and
//! non-negative, which is what the ledger relies on.

use std::fmt;
use std::ops::{Add, AddAssign};

use crate::error::{EcoTrackError, EcoTrackResult};

/// An emission amount in metric tons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Tonnes(f64);

impl Tonnes {
    /// Create a Tonnes amount from a raw value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Parse an emission amount typed by the user
    ///
    /// Accepts anything `f64` parses after trimming ("10", "2.5", "1e3").
    /// Fails with `InvalidNumberFormat` for text that is not a finite number
    /// and with `NegativeValue` for amounts below zero.
    pub fn parse(s: &str) -> EcoTrackResult<Self> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| EcoTrackError::InvalidNumberFormat(s.to_string()))?;

        if !value.is_finite() {
            return Err(EcoTrackError::InvalidNumberFormat(s.to_string()));
        }

        if value < 0.0 {
            return Err(EcoTrackError::NegativeValue(value));
        }

        // "-0" parses to negative zero; store it as plain zero
        if value == 0.0 {
            return Ok(Self::zero());
        }

        Ok(Self(value))
    }
}

impl fmt::Display for Tonnes {
    /// Whole amounts keep one decimal place so "15" reads as "15.0"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Add for Tonnes {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Tonnes {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Tonnes {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Tonnes::zero(), |acc, t| acc + t)
    }
}
