//! Composable text transform pipelines.
//!
//! # Responsibility
//! - Chain named single-argument transforms left to right.
//! - Provide the built-in `trim`, `uppercase`, `mask` and `reverse` stages.
//!
//! # Invariants
//! - Stages run strictly in declaration order, each consuming the previous
//!   stage's output.
//! - `mask` keeps length: N characters on a line become N markers.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Debug, Formatter};

/// Marker written by [`mask`] for every masked character.
pub const MASK_MARKER: &str = "*";

/// Boxed single-argument text transform.
pub type Transform = Box<dyn Fn(String) -> String + Send + Sync>;

// Line terminators are left in place; everything else is masked.
static MASK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\n\r\x{85}\x{2028}\x{2029}]").expect("valid mask regex")
});

static TEXT_PIPELINE: Lazy<Pipeline> = Lazy::new(|| {
    Pipeline::new()
        .then("trim", trim)
        .then("uppercase", uppercase)
        .then("mask", mask)
});

struct Stage {
    name: String,
    transform: Transform,
}

/// Ordered list of named transforms.
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Debug for Pipeline {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one stage after all existing stages.
    pub fn then<F>(mut self, name: impl Into<String>, transform: F) -> Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.stages.push(Stage {
            name: name.into(),
            transform: Box::new(transform),
        });
        self
    }

    /// Runs every stage in order. An empty pipeline returns the input.
    pub fn apply(&self, input: &str) -> String {
        self.stages
            .iter()
            .fold(input.to_string(), |value, stage| (stage.transform)(value))
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

/// Strips leading and trailing control characters and spaces (`<= ' '`).
pub fn trim(value: String) -> String {
    value.trim_matches(|c: char| c <= ' ').to_string()
}

pub fn uppercase(value: String) -> String {
    value.to_uppercase()
}

/// Replaces every character except line terminators with [`MASK_MARKER`].
pub fn mask(value: String) -> String {
    MASK_RE.replace_all(&value, MASK_MARKER).into_owned()
}

pub fn reverse(value: String) -> String {
    value.chars().rev().collect()
}

/// Runs the shared trim -> uppercase -> mask pipeline.
pub fn text_pipeline(input: &str) -> String {
    TEXT_PIPELINE.apply(input)
}

/// Applies a caller-provided transform to `input`.
pub fn apply_function<F>(input: &str, processor: F) -> String
where
    F: FnOnce(&str) -> String,
{
    processor(input)
}

/// Named transform selectable by callers that only hold a mode string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformMode {
    Upper,
    Reverse,
}

impl TransformMode {
    /// Parses `upper` or `reverse`, ignoring case.
    pub fn parse(mode: &str) -> Option<Self> {
        match mode.to_ascii_lowercase().as_str() {
            "upper" => Some(Self::Upper),
            "reverse" => Some(Self::Reverse),
            _ => None,
        }
    }

    pub fn apply(self, input: &str) -> String {
        match self {
            Self::Upper => uppercase(input.to_string()),
            Self::Reverse => reverse(input.to_string()),
        }
    }
}
