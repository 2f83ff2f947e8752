//! Feature use-case service.
//!
//! # Responsibility
//! - Expose toolkit operations through one stateless entry point.
//! - Turn mode strings and discount codes into toolkit calls.
//!
//! # Invariants
//! - No call fails; absent or malformed input becomes a descriptive string
//!   or an unchanged value.

use crate::toolkit::age;
use crate::toolkit::lazy;
use crate::toolkit::optional;
use crate::toolkit::pipeline::{self, TransformMode};
use crate::toolkit::strategy::{default_discounts, DiscountTable};
use log::debug;

/// Returned by [`FeatureService::apply_mode`] for unrecognized modes.
pub const UNKNOWN_MODE: &str = "Unknown mode";

/// Facade over the functional toolkit.
#[derive(Debug, Clone, Copy)]
pub struct FeatureService<'t> {
    discounts: &'t DiscountTable,
}

impl Default for FeatureService<'static> {
    fn default() -> Self {
        Self::new(default_discounts())
    }
}

impl<'t> FeatureService<'t> {
    /// Creates a service pricing against `discounts`.
    pub fn new(discounts: &'t DiscountTable) -> Self {
        Self { discounts }
    }

    pub fn robust_optional_demo(&self, input: Option<&str>) -> String {
        optional::robust_optional_demo(input)
    }

    /// Reports age relative to today's local date.
    pub fn calculate_age(&self, birth_date: &str) -> String {
        age::calculate_age(birth_date)
    }

    pub fn apply_function<F>(&self, input: &str, processor: F) -> String
    where
        F: FnOnce(&str) -> String,
    {
        pipeline::apply_function(input, processor)
    }

    /// Applies the transform named by `mode` (`upper` or `reverse`).
    pub fn apply_mode(&self, input: &str, mode: &str) -> String {
        match TransformMode::parse(mode) {
            Some(mode) => self.apply_function(input, |value| mode.apply(value)),
            None => {
                debug!("event=apply_mode module=feature status=unknown_mode mode={mode}");
                UNKNOWN_MODE.to_string()
            }
        }
    }

    pub fn text_pipeline(&self, input: &str) -> String {
        pipeline::text_pipeline(input)
    }

    /// Prices `price` with the rule for `code`; unknown codes keep the price.
    pub fn calculate_discount(&self, code: &str, price: f64) -> f64 {
        self.discounts.apply(code, price)
    }

    pub fn heavy_computation<F>(&self, perform: bool, deferred: F) -> String
    where
        F: FnOnce() -> String,
    {
        lazy::heavy_computation(perform, deferred)
    }
}
