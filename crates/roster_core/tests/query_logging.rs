use log::{Level, LevelFilter, Log, Metadata, Record};
use roster_core::{shared_seed_repository, QueryService};
use std::sync::Mutex;

struct CaptureLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record<'_>) {
        let line = record.args().to_string();
        if line.starts_with("event=query ") {
            self.lines.lock().unwrap().push(line);
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};

#[test]
fn every_query_emits_one_debug_event() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let service = QueryService::new(shared_seed_repository());
    // Force the seed before capturing so only query events are counted.
    let _ = service.map_to_names();
    LOGGER.lines.lock().unwrap().clear();

    let _ = service.filter_by_department("IT");
    let _ = service.map_to_names();
    let _ = service.group_by_department();
    let _ = service.partition_by_salary(60000.0);
    let _ = service.calculate_total_salary();
    let _ = service.get_all_distinct_projects();
    let _ = service.get_highest_paid_employee();
    let _ = service.complex_filter(
        "IT",
        0.0,
        chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
    );
    let _ = service.multi_level_sort();
    let _ = service.get_departments_with_avg_salary_greater_than(60000.0);

    let lines = LOGGER.lines.lock().unwrap().clone();
    let ops: Vec<&str> = lines
        .iter()
        .filter_map(|line| line.split_whitespace().find_map(|kv| kv.strip_prefix("op=")))
        .collect();
    assert_eq!(
        ops,
        vec![
            "filter_by_department",
            "map_to_names",
            "group_by_department",
            "partition_by_salary",
            "calculate_total_salary",
            "get_all_distinct_projects",
            "get_highest_paid_employee",
            "complex_filter",
            "multi_level_sort",
            "departments_with_avg_salary_greater_than",
        ]
    );
    assert!(lines
        .iter()
        .any(|line| line.contains("op=get_highest_paid_employee result_len=1")));
}
