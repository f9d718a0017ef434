// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use crate::diesel_schema::employees;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;
use mishmeret_domain::Employee;

/// Inserts a roster employee and returns its assigned id.
///
/// # Errors
///
/// Returns an error if serialization fails or a uniqueness constraint is
/// violated.
pub fn insert_employee(
    conn: &mut SqliteConnection,
    branch_id: i64,
    employee: &Employee,
) -> Result<i64, PersistenceError> {
    info!(branch_id, name = %employee.name, "Inserting employee");

    let departments_json: String = serde_json::to_string(&employee.departments)?;

    diesel::insert_into(employees::table)
        .values((
            employees::branch_id.eq(branch_id),
            employees::name.eq(&employee.name),
            employees::color.eq(employee.color.value()),
            employees::departments_json.eq(&departments_json),
        ))
        .execute(conn)?;

    get_last_insert_rowid(conn)
}

/// Replaces a roster employee's mutable fields.
///
/// # Errors
///
/// Returns an error if the employee does not exist or serialization fails.
pub fn update_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
    employee: &Employee,
) -> Result<(), PersistenceError> {
    debug!(employee_id, "Updating employee");

    let departments_json: String = serde_json::to_string(&employee.departments)?;

    let updated: usize = diesel::update(employees::table)
        .filter(employees::employee_id.eq(employee_id))
        .set((
            employees::name.eq(&employee.name),
            employees::color.eq(employee.color.value()),
            employees::departments_json.eq(&departments_json),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::EmployeeNotFound(employee_id));
    }
    Ok(())
}

/// Deletes a roster employee.
///
/// Shift assignments referencing the employee are left untouched; they
/// simply no longer resolve against the roster.
///
/// # Errors
///
/// Returns an error if the employee does not exist.
pub fn delete_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<(), PersistenceError> {
    info!(employee_id, "Deleting employee");

    let deleted: usize = diesel::delete(employees::table)
        .filter(employees::employee_id.eq(employee_id))
        .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::EmployeeNotFound(employee_id));
    }
    Ok(())
}
