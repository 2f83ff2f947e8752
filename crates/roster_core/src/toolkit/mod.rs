//! Functional-composition toolkit.
//!
//! # Responsibility
//! - Text transform pipelines, strategy tables and lazy gates.
//! - Optional-value chaining and calendar age reporting.
//!
//! # Invariants
//! - Every entry point is stateless; shared tables are built once and never
//!   mutated.

pub mod age;
pub mod checked;
pub mod lazy;
pub mod optional;
pub mod pipeline;
pub mod strategy;
