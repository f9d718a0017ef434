// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::data_models::SessionData;
use crate::diesel_schema::sessions;
use crate::error::PersistenceError;

/// Looks up a session by its token.
///
/// Expiry is checked by the authentication service, not here.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_session_by_token(
    conn: &mut SqliteConnection,
    token: &str,
) -> Result<Option<SessionData>, PersistenceError> {
    let row: Option<(i64, String, i64, String)> = sessions::table
        .filter(sessions::token.eq(token))
        .select((
            sessions::session_id,
            sessions::token,
            sessions::branch_id,
            sessions::expires_at,
        ))
        .first(conn)
        .optional()?;

    Ok(row.map(|(session_id, token, branch_id, expires_at)| SessionData {
        session_id,
        token,
        branch_id,
        expires_at,
    }))
}
