// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::diesel_schema::schedules;
use crate::error::PersistenceError;

/// Loads the raw `days` document for one (branch, week), if a row exists.
///
/// Interpretation (deserialization, backfill of corrupt documents, lazy
/// materialization of the next week) happens in the `Persistence` adapter.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn load_days_json(
    conn: &mut SqliteConnection,
    branch_id: i64,
    week: &str,
) -> Result<Option<String>, PersistenceError> {
    Ok(schedules::table
        .filter(schedules::branch_id.eq(branch_id))
        .filter(schedules::week.eq(week))
        .select(schedules::days_json)
        .first::<String>(conn)
        .optional()?)
}
