//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use nestegg_core::db::Database;
use nestegg_core::models::{EmploymentType, SimulationInput};
use nestegg_core::planner;

use crate::commands::{self, truncate};

fn setup_test_db() -> Database {
    Database::in_memory().unwrap()
}

fn insert_test_simulation(db: &Database, goal: f64) -> i64 {
    let input = SimulationInput {
        monthly_expense: 2000.0,
        employment: EmploymentType::Salaried,
        dependents: 0,
        current_value: 5000.0,
        goal_amount: goal,
        horizon_years: 10.0,
        monthly_contribution: 300.0,
        annual_return_pct: 6.0,
    };
    let outcome = planner::simulate(&input);
    db.insert_simulation(&input, &outcome).unwrap()
}

// ========== History Command Tests ==========

#[test]
fn test_cmd_history_list_empty() {
    let db = setup_test_db();
    assert!(commands::cmd_history_list(&db, 20).is_ok());
}

#[test]
fn test_cmd_history_list_and_show() {
    let db = setup_test_db();
    let id = insert_test_simulation(&db, 75000.0);

    assert!(commands::cmd_history_list(&db, 20).is_ok());
    assert!(commands::cmd_history_show(&db, id, false).is_ok());
    assert!(commands::cmd_history_show(&db, id, true).is_ok());
}

#[test]
fn test_cmd_history_show_missing() {
    let db = setup_test_db();
    let result = commands::cmd_history_show(&db, 404, false);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("not found"));
}

#[test]
fn test_cmd_history_delete() {
    let db = setup_test_db();
    let id = insert_test_simulation(&db, 75000.0);

    assert!(commands::cmd_history_delete(&db, id).is_ok());
    assert!(db.get_simulation(id).unwrap().is_none());
    assert!(commands::cmd_history_delete(&db, id).is_err());
}

// ========== Projection Command Tests ==========

#[test]
fn test_cmd_projection_table() {
    let result = commands::cmd_projection(
        500.0,
        &[4.0, 8.0],
        &[1.0, 5.0],
        "period_end",
        false,
        false,
    );
    assert!(result.is_ok());
}

#[test]
fn test_cmd_projection_flat_json() {
    let result =
        commands::cmd_projection(500.0, &[4.0], &[1.0, 5.0], "period_start", true, true);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_projection_rejects_bad_timing() {
    let result = commands::cmd_projection(500.0, &[4.0], &[1.0], "whenever", false, false);
    assert!(result.is_err());
}

#[test]
fn test_cmd_projection_rejects_negative() {
    assert!(commands::cmd_projection(-1.0, &[4.0], &[1.0], "period_end", false, false).is_err());
    assert!(commands::cmd_projection(1.0, &[-4.0], &[1.0], "period_end", false, false).is_err());
    assert!(commands::cmd_projection(1.0, &[4.0], &[-1.0], "period_end", false, false).is_err());
}

// ========== Init / Validation Tests ==========

#[test]
fn test_cmd_init_creates_database() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("test.db");

    assert!(commands::cmd_init(&db_path, true).is_ok());
    assert!(db_path.exists());

    // Reopen and verify the schema is usable
    let db = commands::open_db(&db_path, true).unwrap();
    assert_eq!(db.count_simulations().unwrap(), 0);
}

#[test]
fn test_require_non_negative() {
    assert!(commands::require_non_negative("--goal", 0.0).is_ok());
    assert!(commands::require_non_negative("--goal", 1234.5).is_ok());

    let err = commands::require_non_negative("--goal", -1.0).unwrap_err();
    assert!(err.to_string().contains("--goal"));
    assert!(commands::require_non_negative("--rate", f64::NAN).is_err());
}

// ========== Helpers ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("exactly-10", 10), "exactly-10");
    assert_eq!(truncate("a much longer string", 10), "a much ...");
}
