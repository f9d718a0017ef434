// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use mishmeret_audit::AuditEvent;
use serde::{Deserialize, Serialize};

/// Stable snapshot of a branch row, without the password hash.
///
/// The hash never leaves the persistence layer; password checks go through
/// `Persistence::verify_branch_password`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchData {
    pub branch_id: i64,
    pub name: String,
    pub username: String,
    pub is_admin: bool,
    pub kind: String,
    pub last_schedule_transition: Option<String>,
}

/// Stable snapshot of a session row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    pub session_id: i64,
    pub token: String,
    pub branch_id: i64,
    pub expires_at: String,
}

/// A persisted audit event with its database identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEventRecord {
    pub event_id: i64,
    pub event: AuditEvent,
    pub created_at: String,
}

/// Serializable representation of an Actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorData {
    pub id: String,
    pub actor_type: String,
}

/// Serializable representation of a Cause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CauseData {
    pub id: String,
    pub description: String,
}

/// Serializable representation of an Action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionData {
    pub name: String,
    pub details: Option<String>,
}

/// Serializable representation of a `StateSnapshot`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshotData {
    pub data: String,
}
