//! Employee domain model.
//!
//! # Responsibility
//! - Define the record shared by every roster query.
//! - Reject malformed records before they can reach a store.
//!
//! # Invariants
//! - `name` is never blank.
//! - `salary` is finite and non-negative.
//! - Fields are private; there is no mutation API.

use chrono::NaiveDate;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for one employee record.
pub type EmployeeId = u64;

/// Validation errors for employee construction.
#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeValidationError {
    /// `name` is empty or whitespace only.
    EmptyName,
    /// `salary` is negative, NaN or infinite.
    InvalidSalary { salary: f64 },
    /// Calendar components do not form a real date.
    InvalidDate { year: i32, month: u32, day: u32 },
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "employee name cannot be empty"),
            Self::InvalidSalary { salary } => {
                write!(f, "salary ({salary}) must be a finite, non-negative number")
            }
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date {year:04}-{month:02}-{day:02}")
            }
        }
    }
}

impl Error for EmployeeValidationError {}

/// Canonical roster record.
///
/// Serialized with camelCase field names (`joiningDate`) so transport
/// layers can render it without a separate DTO.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    id: EmployeeId,
    name: String,
    department: String,
    salary: f64,
    joining_date: NaiveDate,
    projects: Vec<String>,
}

impl Employee {
    /// Creates a validated employee record.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is blank.
    /// - `InvalidSalary` when `salary` is negative or not finite.
    pub fn new<P, S>(
        id: EmployeeId,
        name: impl Into<String>,
        department: impl Into<String>,
        salary: f64,
        joining_date: NaiveDate,
        projects: P,
    ) -> Result<Self, EmployeeValidationError>
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let employee = Self {
            id,
            name: name.into(),
            department: department.into(),
            // Folds -0.0 into 0.0 so equal salaries compare equal everywhere.
            salary: if salary == 0.0 { 0.0 } else { salary },
            joining_date,
            projects: projects.into_iter().map(Into::into).collect(),
        };
        employee.validate()?;
        Ok(employee)
    }

    /// Validates record invariants.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        if self.name.trim().is_empty() {
            return Err(EmployeeValidationError::EmptyName);
        }
        if !self.salary.is_finite() || self.salary < 0.0 {
            return Err(EmployeeValidationError::InvalidSalary {
                salary: self.salary,
            });
        }
        Ok(())
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn joining_date(&self) -> NaiveDate {
        self.joining_date
    }

    /// Project labels in declaration order.
    pub fn projects(&self) -> &[String] {
        &self.projects
    }

    /// Case-insensitive department equality used by department filters.
    ///
    /// Compares character by character: two characters match when they are
    /// equal, when their simple uppercase forms are equal, or when the
    /// lowercase forms of those uppercase forms are equal.
    pub fn in_department(&self, department: &str) -> bool {
        equals_ignore_case(&self.department, department)
    }
}

fn equals_ignore_case(left: &str, right: &str) -> bool {
    left.chars().count() == right.chars().count()
        && left.chars().zip(right.chars()).all(|(a, b)| {
            if a == b {
                return true;
            }
            let (upper_a, upper_b) = (simple_upper(a), simple_upper(b));
            upper_a == upper_b || simple_lower(upper_a) == simple_lower(upper_b)
        })
}

// Single-character case mappings; multi-character expansions such as
// `ß -> SS` leave the character unchanged.
fn simple_upper(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

// `İ` lowercases to `i` followed by a combining dot; its simple mapping is
// the leading `i`.
fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
