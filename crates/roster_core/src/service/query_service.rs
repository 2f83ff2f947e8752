//! Roster query use-case service.
//!
//! # Responsibility
//! - Provide filter/map/group/partition/aggregate/sort queries over a roster.
//! - Keep callers decoupled from how the roster is stored.
//!
//! # Invariants
//! - Every query is a pure function of the repository contents.
//! - Queries never fail for empty input or no-match; they return empty views.
//! - Derived collections preserve the roster's original relative order
//!   unless the query is a sort.
//!
//! # See also
//! - `repo::employee_repo` for the read contract.

use crate::model::employee::Employee;
use crate::repo::employee_repo::EmployeeRepository;
use crate::toolkit::age::{parse_iso_date, DateParseError};
use chrono::NaiveDate;
use log::debug;
use std::collections::{BTreeMap, HashSet};

/// Query service over a read-only employee repository.
pub struct QueryService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> QueryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    fn employees(&self) -> &[Employee] {
        self.repo.employees()
    }

    /// Returns employees whose department equals `department`, ignoring case.
    pub fn filter_by_department(&self, department: &str) -> Vec<Employee> {
        let matched: Vec<Employee> = self
            .employees()
            .iter()
            .filter(|employee| employee.in_department(department))
            .cloned()
            .collect();
        log_query("filter_by_department", matched.len());
        matched
    }

    /// Returns every name in roster order; duplicates are kept.
    pub fn map_to_names(&self) -> Vec<String> {
        let names: Vec<String> = self
            .employees()
            .iter()
            .map(|employee| employee.name().to_string())
            .collect();
        log_query("map_to_names", names.len());
        names
    }

    /// Groups employees by exact department text.
    ///
    /// Each bucket keeps roster order. Keys iterate in sorted order.
    pub fn group_by_department(&self) -> BTreeMap<String, Vec<Employee>> {
        let groups = group_by_department(self.employees());
        log_query("group_by_department", groups.len());
        groups
    }

    /// Splits employees on `salary > threshold`.
    ///
    /// Both `true` and `false` keys are always present, possibly empty.
    pub fn partition_by_salary(&self, threshold: f64) -> BTreeMap<bool, Vec<Employee>> {
        let (above, rest): (Vec<Employee>, Vec<Employee>) = self
            .employees()
            .iter()
            .cloned()
            .partition(|employee| employee.salary() > threshold);
        log_query("partition_by_salary", above.len());
        BTreeMap::from([(true, above), (false, rest)])
    }

    /// Sums all salaries; `0.0` for an empty roster.
    pub fn calculate_total_salary(&self) -> f64 {
        let total = compensated_sum(self.employees().iter().map(Employee::salary));
        log_query("calculate_total_salary", 1);
        total
    }

    /// Flattens project lists and drops repeats, keeping first-seen order.
    pub fn get_all_distinct_projects(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut distinct = Vec::new();
        for project in self.employees().iter().flat_map(Employee::projects) {
            if seen.insert(project.as_str()) {
                distinct.push(project.clone());
            }
        }
        log_query("get_all_distinct_projects", distinct.len());
        distinct
    }

    /// Returns the highest-paid employee, or `None` for an empty roster.
    ///
    /// Ties resolve to the first maximum in roster order.
    pub fn get_highest_paid_employee(&self) -> Option<Employee> {
        let highest = self
            .employees()
            .iter()
            .reduce(|best, candidate| {
                if candidate.salary() > best.salary() {
                    candidate
                } else {
                    best
                }
            })
            .cloned();
        log_query("get_highest_paid_employee", usize::from(highest.is_some()));
        highest
    }

    /// Department match (ignoring case), `salary > min_salary` and
    /// `joining_date > joined_after`; all three must hold.
    pub fn complex_filter(
        &self,
        department: &str,
        min_salary: f64,
        joined_after: NaiveDate,
    ) -> Vec<Employee> {
        let matched: Vec<Employee> = self
            .employees()
            .iter()
            .filter(|employee| employee.in_department(department))
            .filter(|employee| employee.salary() > min_salary)
            .filter(|employee| employee.joining_date() > joined_after)
            .cloned()
            .collect();
        log_query("complex_filter", matched.len());
        matched
    }

    /// Same as [`Self::complex_filter`], parsing `joined_after` as `YYYY-MM-DD`.
    ///
    /// # Errors
    /// - Returns `DateParseError` when `joined_after` is malformed.
    pub fn complex_filter_from_text(
        &self,
        department: &str,
        min_salary: f64,
        joined_after: &str,
    ) -> Result<Vec<Employee>, DateParseError> {
        let joined_after = parse_iso_date(joined_after)?;
        Ok(self.complex_filter(department, min_salary, joined_after))
    }

    /// Sorts by department ascending, then salary descending.
    ///
    /// The sort is stable: records equal on both keys keep roster order.
    pub fn multi_level_sort(&self) -> Vec<Employee> {
        let mut sorted = self.employees().to_vec();
        sorted.sort_by(|left, right| {
            left.department()
                .cmp(right.department())
                .then_with(|| right.salary().total_cmp(&left.salary()))
        });
        log_query("multi_level_sort", sorted.len());
        sorted
    }

    /// Mean salary per department, keeping only means above `threshold`.
    pub fn get_departments_with_avg_salary_greater_than(
        &self,
        threshold: f64,
    ) -> BTreeMap<String, f64> {
        let averages: BTreeMap<String, f64> = group_by_department(self.employees())
            .into_iter()
            .map(|(department, members)| {
                // Grouping never yields an empty bucket.
                let total = compensated_sum(members.iter().map(Employee::salary));
                (department, total / members.len() as f64)
            })
            .filter(|(_, average)| *average > threshold)
            .collect();
        log_query("departments_with_avg_salary_greater_than", averages.len());
        averages
    }
}

fn group_by_department(employees: &[Employee]) -> BTreeMap<String, Vec<Employee>> {
    let mut groups: BTreeMap<String, Vec<Employee>> = BTreeMap::new();
    for employee in employees {
        groups
            .entry(employee.department().to_string())
            .or_default()
            .push(employee.clone());
    }
    groups
}

/// Kahan-compensated sum.
fn compensated_sum(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut sum = 0.0_f64;
    let mut compensation = 0.0_f64;
    for value in values {
        let adjusted = value - compensation;
        let next = sum + adjusted;
        compensation = (next - sum) - adjusted;
        sum = next;
    }
    sum
}

fn log_query(op: &str, result_len: usize) {
    debug!("event=query module=query op={op} result_len={result_len}");
}
