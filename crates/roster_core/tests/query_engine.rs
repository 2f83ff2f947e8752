use chrono::NaiveDate;
use roster_core::{
    shared_seed_repository, Employee, EmployeeRepository, InMemoryEmployeeRepository,
    QueryService,
};
use std::collections::{BTreeMap, BTreeSet};

fn seed_service() -> QueryService<InMemoryEmployeeRepository> {
    QueryService::new(InMemoryEmployeeRepository::seeded().unwrap())
}

fn empty_service() -> QueryService<InMemoryEmployeeRepository> {
    QueryService::new(InMemoryEmployeeRepository::try_new(Vec::new()).unwrap())
}

fn ids(employees: &[Employee]) -> Vec<u64> {
    employees.iter().map(Employee::id).collect()
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn filter_by_department_ignores_case_and_keeps_order() {
    let service = seed_service();
    assert_eq!(ids(&service.filter_by_department("it")), vec![1, 3]);
    assert_eq!(ids(&service.filter_by_department("FINANCE")), vec![4, 6]);
    assert!(service.filter_by_department("Legal").is_empty());
}

#[test]
fn map_to_names_keeps_roster_order() {
    assert_eq!(
        seed_service().map_to_names(),
        vec!["Alice", "Bob", "Charlie", "David", "Eva", "Frank"]
    );
}

#[test]
fn group_by_department_covers_every_record_once() {
    let service = seed_service();
    let groups = service.group_by_department();

    assert_eq!(
        groups.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["Finance", "HR", "IT"]
    );
    assert_eq!(ids(&groups["IT"]), vec![1, 3]);
    assert_eq!(ids(&groups["HR"]), vec![2, 5]);

    let mut all: Vec<u64> = groups.values().flat_map(|bucket| ids(bucket)).collect();
    all.sort_unstable();
    assert_eq!(all, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn partition_buckets_are_disjoint_and_complete() {
    let service = seed_service();
    for threshold in [0.0, 50000.0, 60000.0, 64999.99, 80000.0, 1e9] {
        let buckets = service.partition_by_salary(threshold);
        let above: BTreeSet<u64> = ids(&buckets[&true]).into_iter().collect();
        let rest: BTreeSet<u64> = ids(&buckets[&false]).into_iter().collect();

        assert!(above.is_disjoint(&rest), "threshold {threshold}");
        let union: BTreeSet<u64> = above.union(&rest).copied().collect();
        assert_eq!(union, (1..=6).collect::<BTreeSet<u64>>());
        assert!(buckets[&true].iter().all(|e| e.salary() > threshold));
    }
}

#[test]
fn partition_at_sixty_thousand_keeps_equal_salary_below() {
    let buckets = seed_service().partition_by_salary(60000.0);
    assert_eq!(ids(&buckets[&true]), vec![1, 3, 6]);
    assert_eq!(ids(&buckets[&false]), vec![2, 4, 5]);
}

#[test]
fn total_salary_matches_seed_and_is_zero_when_empty() {
    assert_eq!(seed_service().calculate_total_salary(), 385000.0);
    assert_eq!(empty_service().calculate_total_salary(), 0.0);
}

#[test]
fn distinct_projects_use_first_seen_order() {
    assert_eq!(
        seed_service().get_all_distinct_projects(),
        vec![
            "Project A",
            "Project B",
            "Recruitment",
            "Policy",
            "Project C",
            "Budgeting",
            "Training",
            "Auditing",
        ]
    );
}

#[test]
fn highest_paid_is_charlie_and_absent_when_empty() {
    let top = seed_service().get_highest_paid_employee().unwrap();
    assert_eq!(top.name(), "Charlie");
    assert!(empty_service().get_highest_paid_employee().is_none());
}

#[test]
fn complex_filter_requires_all_predicates() {
    let service = seed_service();

    let matched = service.complex_filter("it", 70000.0, ymd(2017, 1, 1));
    assert_eq!(ids(&matched), vec![1, 3]);

    // Joining date comparison is strict.
    let strict_date = service.complex_filter("IT", 70000.0, ymd(2017, 7, 10));
    assert_eq!(ids(&strict_date), vec![1]);

    // Salary comparison is strict.
    let strict_salary = service.complex_filter("IT", 75000.0, ymd(2000, 1, 1));
    assert_eq!(ids(&strict_salary), vec![3]);

    assert!(service
        .complex_filter("HR", 0.0, ymd(2030, 1, 1))
        .is_empty());
}

#[test]
fn complex_filter_from_text_reports_malformed_dates() {
    let service = seed_service();
    let matched = service
        .complex_filter_from_text("finance", 0.0, "2019-01-01")
        .unwrap();
    assert_eq!(ids(&matched), vec![4]);

    let err = service
        .complex_filter_from_text("finance", 0.0, "01/01/2019")
        .unwrap_err();
    assert!(err.to_string().contains("YYYY-MM-DD"));
}

#[test]
fn multi_level_sort_orders_departments_then_salary_desc() {
    let sorted = seed_service().multi_level_sort();
    assert_eq!(ids(&sorted), vec![6, 4, 5, 2, 3, 1]);
}

#[test]
fn multi_level_sort_regroups_to_group_by_department() {
    let service = seed_service();
    let sorted = service.multi_level_sort();

    let mut regrouped: BTreeMap<String, Vec<u64>> = BTreeMap::new();
    for employee in &sorted {
        regrouped
            .entry(employee.department().to_string())
            .or_default()
            .push(employee.id());
    }

    let groups = service.group_by_department();
    assert_eq!(
        regrouped.keys().collect::<Vec<_>>(),
        groups.keys().collect::<Vec<_>>()
    );
    for (department, members) in &groups {
        let mut expected = ids(members);
        expected.sort_unstable();
        let mut actual = regrouped[department].clone();
        actual.sort_unstable();
        assert_eq!(actual, expected);
    }

    for pair in sorted.windows(2) {
        if pair[0].department() == pair[1].department() {
            assert!(pair[0].salary() >= pair[1].salary());
        }
    }
}

#[test]
fn departments_with_average_above_threshold() {
    let service = seed_service();
    let averages = service.get_departments_with_avg_salary_greater_than(60000.0);
    assert_eq!(
        averages,
        BTreeMap::from([("Finance".to_string(), 62500.0), ("IT".to_string(), 77500.0)])
    );

    // Strictly greater: IT's mean equal to the threshold is excluded.
    let strict = service.get_departments_with_avg_salary_greater_than(77500.0);
    assert!(strict.is_empty());

    assert!(empty_service()
        .get_departments_with_avg_salary_greater_than(0.0)
        .is_empty());
}

#[test]
fn queries_never_change_the_store() {
    let repo = shared_seed_repository();
    let before = repo.employees().to_vec();
    let service = QueryService::new(repo);

    let _ = service.multi_level_sort();
    let _ = service.partition_by_salary(1.0);
    let _ = service.group_by_department();

    assert_eq!(repo.employees(), before.as_slice());
}

#[test]
fn concurrent_readers_see_identical_results() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                QueryService::new(shared_seed_repository()).multi_level_sort()
            })
        })
        .collect();

    let results: Vec<Vec<Employee>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for result in &results[1..] {
        assert_eq!(result, &results[0]);
    }
}

fn custom_service(employees: Vec<Employee>) -> QueryService<InMemoryEmployeeRepository> {
    QueryService::new(InMemoryEmployeeRepository::try_new(employees).unwrap())
}

fn named(id: u64, name: &str, projects: &[&str]) -> Employee {
    Employee::new(
        id,
        name,
        "Ops",
        1000.0,
        ymd(2020, 1, 1),
        projects.iter().copied(),
    )
    .unwrap()
}

#[test]
fn map_to_names_keeps_duplicate_names() {
    let service = custom_service(vec![
        named(1, "Sam", &["Alpha"]),
        named(2, "Kim", &[]),
        named(3, "Sam", &["Beta"]),
    ]);
    assert_eq!(service.map_to_names(), vec!["Sam", "Kim", "Sam"]);
}

#[test]
fn distinct_projects_skip_records_without_projects() {
    let service = custom_service(vec![
        named(1, "A", &[]),
        named(2, "B", &["Beta", "Alpha"]),
        named(3, "C", &[]),
        named(4, "D", &["Alpha", "Gamma"]),
    ]);
    assert_eq!(
        service.get_all_distinct_projects(),
        vec!["Beta", "Alpha", "Gamma"]
    );

    let no_projects = custom_service(vec![named(1, "A", &[])]);
    assert!(no_projects.get_all_distinct_projects().is_empty());
}

#[test]
fn empty_store_yields_empty_views() {
    let service = empty_service();
    assert!(service.filter_by_department("IT").is_empty());
    assert!(service.group_by_department().is_empty());
    assert!(service.get_all_distinct_projects().is_empty());
    assert!(service.map_to_names().is_empty());
    assert!(service.multi_level_sort().is_empty());

    let buckets = service.partition_by_salary(0.0);
    assert!(buckets[&true].is_empty());
    assert!(buckets[&false].is_empty());
}

#[test]
fn filter_by_department_folds_case_per_character() {
    let dotted = Employee::new(1, "Ayla", "\u{130}T", 1.0, ymd(2020, 1, 1), ["x"]).unwrap();
    let service = custom_service(vec![dotted]);
    assert_eq!(ids(&service.filter_by_department("it")), vec![1]);
}

#[test]
fn signed_zero_salaries_sort_as_equal() {
    let service = custom_service(vec![
        Employee::new(2, "B", "IT", -0.0, ymd(2020, 1, 1), ["x"]).unwrap(),
        Employee::new(1, "A", "IT", 0.0, ymd(2020, 1, 1), ["x"]).unwrap(),
    ]);
    assert_eq!(ids(&service.multi_level_sort()), vec![2, 1]);
}
