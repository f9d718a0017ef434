// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::diesel_schema::branches;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;
use mishmeret_domain::BranchKind;

/// Creates a new branch row.
///
/// The password is hashed with bcrypt before it touches the database.
///
/// # Errors
///
/// Returns an error if hashing fails or the branch name/username already
/// exists.
pub fn create_branch(
    conn: &mut SqliteConnection,
    name: &str,
    username: &str,
    password: &str,
    is_admin: bool,
    kind: BranchKind,
) -> Result<i64, PersistenceError> {
    info!(name, username, kind = %kind, "Creating branch");

    let password_hash: String = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

    diesel::insert_into(branches::table)
        .values((
            branches::name.eq(name),
            branches::username.eq(username),
            branches::password_hash.eq(&password_hash),
            branches::is_admin.eq(i32::from(is_admin)),
            branches::kind.eq(kind.as_str()),
        ))
        .execute(conn)?;

    let branch_id: i64 = get_last_insert_rowid(conn)?;
    info!(branch_id, "Branch created");

    Ok(branch_id)
}

/// Replaces a branch's password hash.
///
/// # Errors
///
/// Returns an error if hashing fails or the branch does not exist.
pub fn update_branch_password(
    conn: &mut SqliteConnection,
    branch_id: i64,
    password: &str,
) -> Result<(), PersistenceError> {
    let password_hash: String = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

    let updated: usize = diesel::update(branches::table)
        .filter(branches::branch_id.eq(branch_id))
        .set(branches::password_hash.eq(&password_hash))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::BranchNotFound(branch_id.to_string()));
    }
    Ok(())
}

/// Stamps the branch's last schedule transition time.
///
/// # Errors
///
/// Returns an error if the branch does not exist.
pub fn set_last_schedule_transition(
    conn: &mut SqliteConnection,
    branch_id: i64,
    timestamp: &str,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(branches::table)
        .filter(branches::branch_id.eq(branch_id))
        .set(branches::last_schedule_transition.eq(timestamp))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::BranchNotFound(branch_id.to_string()));
    }
    Ok(())
}
