//! Repository layer for the fixed employee roster.
//!
//! # Responsibility
//! - Define the read-only data access contract used by query services.
//! - Own the immutable seed collection.
//!
//! # Invariants
//! - Repository membership never changes after construction.
//! - Employee ids are unique within one repository.

pub mod employee_repo;
