// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the API boundary.
//!
//! Week selectors, roles, and departments arrive as wire strings and are
//! parsed into domain types inside the handlers, so invalid values are
//! reported as field-level input errors rather than deserialization
//! failures.

use serde::{Deserialize, Serialize};

use mishmeret_domain::{Day, Employee};

/// Request to authenticate a branch.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginRequest {
    /// The branch login name.
    pub username: String,
    /// The plain-text password.
    pub password: String,
}

/// Response for a successful login.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginResponse {
    /// The session token to present as a Bearer token.
    pub token: String,
    /// The authenticated branch's display name.
    pub branch: String,
    /// Whether the session has admin authority.
    pub is_admin: bool,
}

/// Response describing the authenticated session.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WhoamiResponse {
    /// The login username.
    pub username: String,
    /// The branch display name.
    pub branch: String,
    /// Whether the session has admin authority.
    pub is_admin: bool,
}

/// Response carrying one week grid of a branch.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScheduleResponse {
    /// The branch display name.
    pub branch: String,
    /// The week selector (`current` or `next`).
    pub week: String,
    /// The 7-day grid.
    pub days: Vec<Day>,
}

/// Request to replace one week grid of a branch.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SaveScheduleRequest {
    /// The week selector (`current` or `next`).
    pub week: String,
    /// The full 7-day grid to store.
    pub days: Vec<Day>,
}

/// Response for a successful schedule save.
///
/// `days` is the server's authoritative echo of what was persisted.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SaveScheduleResponse {
    /// The branch id that was saved.
    pub branch_id: i64,
    /// The week selector that was saved.
    pub week: String,
    /// The persisted grid.
    pub days: Vec<Day>,
    /// The event id of the recorded audit event.
    pub event_id: i64,
}

/// Request to place, overwrite, or clear one cell.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssignShiftRequest {
    /// The week selector (`current` or `next`).
    pub week: String,
    /// The day, by its fixed Hebrew name.
    pub day: String,
    /// The grid role key.
    pub role: String,
    /// The 1-based position within the role.
    pub position: u8,
    /// The employee to place, or `None` to clear the cell.
    #[serde(rename = "employeeId", alias = "workerId")]
    pub employee_id: Option<i64>,
}

/// Request to move an employee between two cells as one transition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MoveShiftRequest {
    /// The week selector (`current` or `next`).
    pub week: String,
    /// The source day name.
    pub from_day: String,
    /// The source role key.
    pub from_role: String,
    /// The source position.
    pub from_position: u8,
    /// The target day name.
    pub to_day: String,
    /// The target role key.
    pub to_role: String,
    /// The target position.
    pub to_position: u8,
    /// The employee being moved.
    #[serde(rename = "employeeId", alias = "workerId")]
    pub employee_id: i64,
}

/// Request to add an employee to a branch roster.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateEmployeeRequest {
    /// The owning branch, by display name.
    pub branch: String,
    /// The employee's display name.
    pub name: String,
    /// The employee's grid color as a `#RRGGBB` hex string.
    pub color: String,
    /// Department tags (ignored for call-center branches).
    pub departments: Vec<String>,
}

/// Request to update a roster employee.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateEmployeeRequest {
    /// The new display name.
    pub name: String,
    /// The new grid color.
    pub color: String,
    /// The new department tags (ignored for call-center branches).
    pub departments: Vec<String>,
}

/// Request to bootstrap a new branch (admin only).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateBranchRequest {
    /// The branch display name.
    pub name: String,
    /// The branch login name.
    pub username: String,
    /// The plain-text password.
    pub password: String,
    /// The password confirmation.
    pub password_confirmation: String,
    /// Whether the branch has admin authority.
    pub is_admin: bool,
    /// The branch kind (`generic` or `call-center`).
    pub kind: String,
}

/// Response for a successful branch creation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateBranchResponse {
    /// The assigned branch id.
    pub branch_id: i64,
    /// The branch display name.
    pub name: String,
}

/// Response for a successful week transition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransitionWeekResponse {
    /// The branch id that was transitioned.
    pub branch_id: i64,
    /// The timestamp stamped on the branch.
    pub transitioned_at: String,
}

/// One entry of a branch's audit trail.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuditEventResponse {
    /// The event id.
    pub event_id: i64,
    /// The acting identity.
    pub actor: String,
    /// The action name.
    pub action: String,
    /// Optional action details.
    pub details: Option<String>,
    /// The week the action touched, if week-scoped.
    pub week: Option<String>,
    /// When the event was recorded.
    pub created_at: String,
}

/// Employee list response payload.
pub type EmployeesResponse = Vec<Employee>;
