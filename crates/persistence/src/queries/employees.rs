// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::diesel_schema::employees;
use crate::error::PersistenceError;
use mishmeret_domain::{Color, Department, Employee};

/// Returns the branch a roster employee belongs to, if the employee exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_employee_branch_id(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<Option<i64>, PersistenceError> {
    Ok(employees::table
        .filter(employees::employee_id.eq(employee_id))
        .select(employees::branch_id)
        .first::<i64>(conn)
        .optional()?)
}

/// Lists the roster of a branch, ordered by employee id.
///
/// `branch_name` is carried into the returned domain values; shifts and the
/// UI reference employees through it.
///
/// # Errors
///
/// Returns an error if the query fails or a departments column cannot be
/// parsed.
pub fn list_employees(
    conn: &mut SqliteConnection,
    branch_id: i64,
    branch_name: &str,
) -> Result<Vec<Employee>, PersistenceError> {
    let rows: Vec<(i64, String, String, String)> = employees::table
        .filter(employees::branch_id.eq(branch_id))
        .order(employees::employee_id.asc())
        .select((
            employees::employee_id,
            employees::name,
            employees::color,
            employees::departments_json,
        ))
        .load(conn)?;

    rows.into_iter()
        .map(|(employee_id, name, color, departments_json)| {
            let departments: Vec<Department> = serde_json::from_str(&departments_json)?;
            Ok(Employee::with_id(
                employee_id,
                branch_name.to_string(),
                name,
                Color::new(&color),
                departments,
            ))
        })
        .collect()
}
