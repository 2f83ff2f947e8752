//! Core domain logic for roster.
//! In-memory employee queries plus a small functional-composition toolkit.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod toolkit;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{Employee, EmployeeId, EmployeeValidationError};
pub use repo::employee_repo::{
    seed_employees, shared_seed_repository, EmployeeRepository, InMemoryEmployeeRepository,
    RepoError, RepoResult,
};
pub use service::feature_service::{FeatureService, UNKNOWN_MODE};
pub use service::query_service::QueryService;
pub use toolkit::age::{
    age_between, calculate_age, calculate_age_on, parse_iso_date, AgeError, CalendarPeriod,
    DateParseError,
};
pub use toolkit::checked::{wrap, WrappedError};
pub use toolkit::lazy::{heavy_computation, simulated_expensive_operation, SKIPPED};
pub use toolkit::optional::{robust_optional_demo, OPTIONAL_DEFAULT};
pub use toolkit::pipeline::{apply_function, text_pipeline, Pipeline, TransformMode};
pub use toolkit::strategy::{default_discounts, DiscountTable, DiscountTableError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
