// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::BranchData;
use crate::diesel_schema::branches;
use crate::error::PersistenceError;

type BranchRow = (i64, String, String, i32, String, Option<String>);

fn to_branch_data(row: BranchRow) -> BranchData {
    let (branch_id, name, username, is_admin, kind, last_schedule_transition) = row;
    BranchData {
        branch_id,
        name,
        username,
        is_admin: is_admin != 0,
        kind,
        last_schedule_transition,
    }
}

/// Looks up a branch by its display name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_branch_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<BranchData>, PersistenceError> {
    let row: Option<BranchRow> = branches::table
        .filter(branches::name.eq(name))
        .select((
            branches::branch_id,
            branches::name,
            branches::username,
            branches::is_admin,
            branches::kind,
            branches::last_schedule_transition,
        ))
        .first::<BranchRow>(conn)
        .optional()?;

    Ok(row.map(to_branch_data))
}

/// Looks up a branch by its canonical id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_branch_by_id(
    conn: &mut SqliteConnection,
    branch_id: i64,
) -> Result<Option<BranchData>, PersistenceError> {
    let row: Option<BranchRow> = branches::table
        .filter(branches::branch_id.eq(branch_id))
        .select((
            branches::branch_id,
            branches::name,
            branches::username,
            branches::is_admin,
            branches::kind,
            branches::last_schedule_transition,
        ))
        .first::<BranchRow>(conn)
        .optional()?;

    Ok(row.map(to_branch_data))
}

/// Looks up a branch with its password hash by login username.
///
/// The hash is only handed to the password verification path and never
/// leaves the persistence layer.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_branch_credentials(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<Option<(BranchData, String)>, PersistenceError> {
    let row: Option<(i64, String, String, i32, String, Option<String>, String)> = branches::table
        .filter(branches::username.eq(username))
        .select((
            branches::branch_id,
            branches::name,
            branches::username,
            branches::is_admin,
            branches::kind,
            branches::last_schedule_transition,
            branches::password_hash,
        ))
        .first(conn)
        .optional()?;

    Ok(row.map(
        |(branch_id, name, username, is_admin, kind, last_schedule_transition, hash)| {
            (
                to_branch_data((branch_id, name, username, is_admin, kind, last_schedule_transition)),
                hash,
            )
        },
    ))
}
