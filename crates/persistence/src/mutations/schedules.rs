// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::diesel_schema::schedules;
use crate::error::PersistenceError;

/// Writes the full `days` document for one (branch, week).
///
/// The whole document is replaced in one statement (insert-or-update on the
/// (branch, week) key), never patched, so readers can never observe a
/// partially applied edit.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn upsert_days_json(
    conn: &mut SqliteConnection,
    branch_id: i64,
    week: &str,
    days_json: &str,
    updated_at: &str,
) -> Result<(), PersistenceError> {
    debug!(branch_id, week, "Replacing schedule document");

    diesel::insert_into(schedules::table)
        .values((
            schedules::branch_id.eq(branch_id),
            schedules::week.eq(week),
            schedules::days_json.eq(days_json),
            schedules::updated_at.eq(updated_at),
        ))
        .on_conflict((schedules::branch_id, schedules::week))
        .do_update()
        .set((
            schedules::days_json.eq(days_json),
            schedules::updated_at.eq(updated_at),
        ))
        .execute(conn)?;

    Ok(())
}
