//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `roster_core` linkage.
//! - Print deterministic seed-roster query results for quick sanity checks.
//!
//! Set `ROSTER_LOG_DIR` (absolute) to enable file logging; `ROSTER_LOG_LEVEL`
//! overrides the build-mode default level.

use roster_core::{shared_seed_repository, FeatureService, QueryService};

fn main() {
    if let Ok(log_dir) = std::env::var("ROSTER_LOG_DIR") {
        let level = std::env::var("ROSTER_LOG_LEVEL")
            .unwrap_or_else(|_| roster_core::default_log_level().to_string());
        if let Err(err) = roster_core::init_logging(&level, &log_dir) {
            eprintln!("roster_core logging disabled: {err}");
        }
    }

    println!("roster_core ping={}", roster_core::ping());
    println!("roster_core version={}", roster_core::core_version());

    let queries = QueryService::new(shared_seed_repository());
    println!("total_salary={}", queries.calculate_total_salary());
    println!(
        "distinct_projects={}",
        queries.get_all_distinct_projects().join(",")
    );
    match queries.get_highest_paid_employee() {
        Some(employee) => println!("highest_paid={}", employee.name()),
        None => println!("highest_paid=<none>"),
    }

    let features = FeatureService::default();
    println!("vip_100={}", features.calculate_discount("VIP", 100.0));
    log::info!("event=cli_smoke module=cli status=ok");
}
