// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::data_models::{ActionData, ActorData, AuditEventRecord, CauseData, StateSnapshotData};
use crate::diesel_schema::audit_events;
use crate::error::PersistenceError;
use mishmeret_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use mishmeret_domain::WeekSelector;

type AuditRow = (
    i64,
    String,
    Option<String>,
    String,
    String,
    String,
    String,
    String,
    String,
);

/// Lists the audit trail of a branch, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails or a persisted event cannot be
/// deserialized.
pub fn list_audit_events(
    conn: &mut SqliteConnection,
    branch: &str,
) -> Result<Vec<AuditEventRecord>, PersistenceError> {
    let rows: Vec<AuditRow> = audit_events::table
        .filter(audit_events::branch.eq(branch))
        .order(audit_events::event_id.asc())
        .select((
            audit_events::event_id,
            audit_events::branch,
            audit_events::week,
            audit_events::actor_json,
            audit_events::cause_json,
            audit_events::action_json,
            audit_events::before_snapshot_json,
            audit_events::after_snapshot_json,
            audit_events::created_at,
        ))
        .load(conn)?;

    rows.into_iter().map(to_record).collect()
}

fn to_record(row: AuditRow) -> Result<AuditEventRecord, PersistenceError> {
    let (
        event_id,
        branch,
        week,
        actor_json,
        cause_json,
        action_json,
        before_json,
        after_json,
        created_at,
    ) = row;

    let actor: ActorData = serde_json::from_str(&actor_json)?;
    let cause: CauseData = serde_json::from_str(&cause_json)?;
    let action: ActionData = serde_json::from_str(&action_json)?;
    let before: StateSnapshotData = serde_json::from_str(&before_json)?;
    let after: StateSnapshotData = serde_json::from_str(&after_json)?;
    let week: Option<WeekSelector> = match week {
        Some(value) => Some(
            value
                .parse::<WeekSelector>()
                .map_err(|e| PersistenceError::SerializationError(e.to_string()))?,
        ),
        None => None,
    };

    Ok(AuditEventRecord {
        event_id,
        event: AuditEvent::new(
            Actor::new(actor.id, actor.actor_type),
            Cause::new(cause.id, cause.description),
            Action::new(action.name, action.details),
            StateSnapshot::new(before.data),
            StateSnapshot::new(after.data),
            branch,
            week,
        ),
        created_at,
    })
}
