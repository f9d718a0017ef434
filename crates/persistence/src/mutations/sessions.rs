// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::diesel_schema::sessions;
use crate::error::PersistenceError;

/// Creates a session row for a branch login.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_session(
    conn: &mut SqliteConnection,
    token: &str,
    branch_id: i64,
    expires_at: &str,
) -> Result<(), PersistenceError> {
    debug!(branch_id, "Creating session");

    diesel::insert_into(sessions::table)
        .values((
            sessions::token.eq(token),
            sessions::branch_id.eq(branch_id),
            sessions::expires_at.eq(expires_at),
        ))
        .execute(conn)?;

    Ok(())
}

/// Deletes a session by token (logout).
///
/// Deleting an unknown token is not an error; logout is idempotent.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_session(conn: &mut SqliteConnection, token: &str) -> Result<(), PersistenceError> {
    diesel::delete(sessions::table)
        .filter(sessions::token.eq(token))
        .execute(conn)?;

    Ok(())
}
