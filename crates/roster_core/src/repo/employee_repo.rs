//! Employee repository contracts and in-memory implementation.
//!
//! # Responsibility
//! - Expose a read-only, ordered view over the roster.
//! - Seed the process-wide roster exactly once.
//!
//! # Invariants
//! - Constructors reject duplicate ids and invalid records.
//! - There is no insert/update/delete API; every reader sees the same slice.

use crate::model::employee::{Employee, EmployeeId, EmployeeValidationError};
use chrono::NaiveDate;
use log::info;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository construction error.
#[derive(Debug, Clone, PartialEq)]
pub enum RepoError {
    Validation(EmployeeValidationError),
    DuplicateId(EmployeeId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "duplicate employee id: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<EmployeeValidationError> for RepoError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Read-only access to an ordered employee collection.
pub trait EmployeeRepository {
    /// All employees in seed order.
    fn employees(&self) -> &[Employee];
}

impl<R: EmployeeRepository + ?Sized> EmployeeRepository for &R {
    fn employees(&self) -> &[Employee] {
        (**self).employees()
    }
}

/// Immutable in-memory roster.
///
/// Cloning shares the underlying slice.
#[derive(Debug, Clone)]
pub struct InMemoryEmployeeRepository {
    employees: Arc<[Employee]>,
}

impl InMemoryEmployeeRepository {
    /// Builds a repository from already-constructed employees.
    ///
    /// # Errors
    /// - `Validation` when a record breaks `Employee::validate()`.
    /// - `DuplicateId` when two records share an id.
    pub fn try_new(employees: Vec<Employee>) -> RepoResult<Self> {
        let mut seen = HashSet::with_capacity(employees.len());
        for employee in &employees {
            employee.validate()?;
            if !seen.insert(employee.id()) {
                return Err(RepoError::DuplicateId(employee.id()));
            }
        }

        Ok(Self {
            employees: employees.into(),
        })
    }

    /// Builds a repository holding the built-in six-record roster.
    pub fn seeded() -> RepoResult<Self> {
        Self::try_new(seed_employees()?)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn employees(&self) -> &[Employee] {
        &self.employees
    }
}

static SHARED_SEED: Lazy<InMemoryEmployeeRepository> = Lazy::new(|| {
    let repo = match InMemoryEmployeeRepository::seeded() {
        Ok(repo) => repo,
        // Seed rows are compile-time constants.
        Err(err) => panic!("built-in roster seed is invalid: {err}"),
    };
    info!(
        "event=roster_seed module=repo status=ok employees={}",
        repo.len()
    );
    repo
});

/// Returns the process-wide seed roster, built on first use.
pub fn shared_seed_repository() -> &'static InMemoryEmployeeRepository {
    &SHARED_SEED
}

type SeedRow = (
    EmployeeId,
    &'static str,
    &'static str,
    f64,
    (i32, u32, u32),
    &'static [&'static str],
);

const SEED_ROWS: [SeedRow; 6] = [
    (1, "Alice", "IT", 75000.0, (2018, 5, 20), &["Project A", "Project B"]),
    (2, "Bob", "HR", 50000.0, (2019, 3, 15), &["Recruitment", "Policy"]),
    (3, "Charlie", "IT", 80000.0, (2017, 7, 10), &["Project A", "Project C"]),
    (4, "David", "Finance", 60000.0, (2020, 1, 5), &["Budgeting"]),
    (5, "Eva", "HR", 55000.0, (2021, 11, 25), &["Policy", "Training"]),
    (6, "Frank", "Finance", 65000.0, (2016, 8, 30), &["Auditing", "Budgeting"]),
];

/// Builds the built-in roster records in seed order.
pub fn seed_employees() -> RepoResult<Vec<Employee>> {
    SEED_ROWS.iter().map(seed_row_to_employee).collect()
}

fn seed_row_to_employee(row: &SeedRow) -> RepoResult<Employee> {
    let &(id, name, department, salary, (year, month, day), projects) = row;
    let joining_date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(EmployeeValidationError::InvalidDate { year, month, day })?;
    let employee = Employee::new(
        id,
        name,
        department,
        salary,
        joining_date,
        projects.iter().copied(),
    )?;
    Ok(employee)
}
