//! Discount strategy table keyed by code.
//!
//! # Responsibility
//! - Map discount codes to pricing functions.
//! - Provide the shared default table (`XMAS`, `NEWYEAR`, `VIP`).
//!
//! # Invariants
//! - A table is immutable once built.
//! - Codes are matched exactly (case-sensitive).
//! - Unknown codes leave the price unchanged.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

/// Pricing function `price -> price`.
pub type PriceFn = Box<dyn Fn(f64) -> f64 + Send + Sync>;

pub const XMAS: &str = "XMAS";
pub const NEWYEAR: &str = "NEWYEAR";
pub const VIP: &str = "VIP";

static DEFAULT_DISCOUNTS: Lazy<DiscountTable> = Lazy::new(|| DiscountTable {
    rules: BTreeMap::from([
        (XMAS.to_string(), multiplier(0.9)),
        (NEWYEAR.to_string(), multiplier(0.8)),
        (VIP.to_string(), multiplier(0.5)),
    ]),
});

/// Table construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscountTableError {
    InvalidCode(String),
    DuplicateCode(String),
}

impl Display for DiscountTableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCode(code) => write!(f, "discount code is invalid: `{code}`"),
            Self::DuplicateCode(code) => write!(f, "discount code already registered: {code}"),
        }
    }
}

impl Error for DiscountTableError {}

/// Immutable code -> pricing function table.
pub struct DiscountTable {
    rules: BTreeMap<String, PriceFn>,
}

impl Debug for DiscountTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscountTable")
            .field("codes", &self.codes())
            .finish()
    }
}

impl DiscountTable {
    pub fn builder() -> DiscountTableBuilder {
        DiscountTableBuilder::default()
    }

    /// Applies the rule for `code`, or returns `price` unchanged on a miss.
    pub fn apply(&self, code: &str, price: f64) -> f64 {
        match self.rules.get(code) {
            Some(rule) => rule(price),
            None => price,
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rules.contains_key(code)
    }

    /// Registered codes in sorted order.
    pub fn codes(&self) -> Vec<&str> {
        self.rules.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Collects rules before freezing them into a [`DiscountTable`].
#[derive(Default)]
pub struct DiscountTableBuilder {
    rules: BTreeMap<String, PriceFn>,
}

impl DiscountTableBuilder {
    /// Registers one rule.
    ///
    /// # Errors
    /// - `InvalidCode` when `code` is empty or has surrounding whitespace.
    /// - `DuplicateCode` when `code` is already registered.
    pub fn rule<F>(mut self, code: &str, rule: F) -> Result<Self, DiscountTableError>
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        if code.is_empty() || code.trim() != code {
            return Err(DiscountTableError::InvalidCode(code.to_string()));
        }
        if self.rules.contains_key(code) {
            return Err(DiscountTableError::DuplicateCode(code.to_string()));
        }
        self.rules.insert(code.to_string(), Box::new(rule));
        Ok(self)
    }

    pub fn build(self) -> DiscountTable {
        DiscountTable { rules: self.rules }
    }
}

/// Pricing rule that scales the price by `factor`.
pub fn multiplier(factor: f64) -> PriceFn {
    Box::new(move |price| price * factor)
}

/// Returns the shared default table, built on first use.
pub fn default_discounts() -> &'static DiscountTable {
    &DEFAULT_DISCOUNTS
}
