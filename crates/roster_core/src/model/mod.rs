//! Domain model for the employee roster.
//!
//! # Responsibility
//! - Define the canonical record consumed by the query engine.
//! - Validate record shape once, at construction time.
//!
//! # Invariants
//! - Every record is identified by a stable `EmployeeId`.
//! - Records are immutable after construction; queries only derive copies.

pub mod employee;
