//! Simulation record database operations

use rusqlite::params;

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{EmploymentType, SimulationInput, SimulationRecord};
use crate::planner::SimulationOutcome;

impl Database {
    /// Insert a completed simulation and return its row id
    pub fn insert_simulation(
        &self,
        input: &SimulationInput,
        outcome: &SimulationOutcome,
    ) -> Result<i64> {
        let conn = self.conn()?;

        conn.execute(
            r#"
            INSERT INTO simulations (
                monthly_expense, employment_type, dependents,
                current_value, goal_amount, horizon_years,
                monthly_contribution, annual_return_pct,
                reserve_target, required_contribution, years_to_goal
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                input.monthly_expense,
                input.employment.as_str(),
                input.dependents,
                input.current_value,
                input.goal_amount,
                input.horizon_years,
                input.monthly_contribution,
                input.annual_return_pct,
                outcome.reserve_target,
                outcome.required_contribution,
                outcome.years_to_goal,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// List simulations, newest first
    pub fn list_simulations(&self, limit: i64) -> Result<Vec<SimulationRecord>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT id, created_at, monthly_expense, employment_type, dependents,
                   current_value, goal_amount, horizon_years,
                   monthly_contribution, annual_return_pct,
                   reserve_target, required_contribution, years_to_goal, advice
            FROM simulations
            ORDER BY created_at DESC, id DESC
            LIMIT ?
            "#,
        )?;

        let rows = stmt.query_map(params![limit], row_to_record)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Get a single simulation by id
    pub fn get_simulation(&self, id: i64) -> Result<Option<SimulationRecord>> {
        let conn = self.conn()?;

        let result = conn.query_row(
            r#"
            SELECT id, created_at, monthly_expense, employment_type, dependents,
                   current_value, goal_amount, horizon_years,
                   monthly_contribution, annual_return_pct,
                   reserve_target, required_contribution, years_to_goal, advice
            FROM simulations
            WHERE id = ?
            "#,
            params![id],
            row_to_record,
        );

        match result {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a simulation; errors if the id does not exist
    pub fn delete_simulation(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM simulations WHERE id = ?", params![id])?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("Simulation {} not found", id)));
        }
        Ok(())
    }

    /// Attach advisor output to an existing simulation
    pub fn set_simulation_advice(&self, id: i64, advice: &str) -> Result<()> {
        let conn = self.conn()?;
        let updated = conn.execute(
            "UPDATE simulations SET advice = ? WHERE id = ?",
            params![advice, id],
        )?;
        if updated == 0 {
            return Err(Error::NotFound(format!("Simulation {} not found", id)));
        }
        Ok(())
    }

    /// Count stored simulations
    pub fn count_simulations(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM simulations", [], |row| row.get(0))?;
        Ok(count)
    }
}

/// Convert a row to a SimulationRecord
fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<SimulationRecord> {
    let created_at_str: String = row.get(1)?;
    let employment_str: String = row.get(3)?;

    Ok(SimulationRecord {
        id: row.get(0)?,
        created_at: parse_datetime(&created_at_str),
        monthly_expense: row.get(2)?,
        employment: EmploymentType::from_label(&employment_str),
        dependents: row.get(4)?,
        current_value: row.get(5)?,
        goal_amount: row.get(6)?,
        horizon_years: row.get(7)?,
        monthly_contribution: row.get(8)?,
        annual_return_pct: row.get(9)?,
        reserve_target: row.get(10)?,
        required_contribution: row.get(11)?,
        years_to_goal: row.get(12)?,
        advice: row.get(13)?,
    })
}
