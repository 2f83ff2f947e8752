//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository reads into query-level APIs.
//! - Give transport callers one facade per concern (queries, toolkit).

pub mod feature_service;
pub mod query_service;
