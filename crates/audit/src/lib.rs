// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use mishmeret_domain::WeekSelector;

/// Represents the entity performing an action.
///
/// An actor is any identifiable entity that initiates a state change:
/// an admin, a branch session, or a system process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "admin", "branch", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }
}

/// Represents the reason or trigger for an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., request ID).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the specific action performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`AssignShift`", "`AddEmployee`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A compact snapshot of system state at a point in time.
///
/// Snapshots are summaries, not full copies; they exist so an audit trail
/// can show what a transition changed without storing whole documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// A string representation of the state.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }
}

/// An immutable audit event representing one state transition.
///
/// Every successful state change produces exactly one audit event,
/// capturing who acted, why, what was done, and the state before and after,
/// scoped to the branch (and week, for schedule changes) it touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// The actor who initiated this state change.
    pub actor: Actor,
    /// The cause or reason for this state change.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The state before the transition.
    pub before: StateSnapshot,
    /// The state after the transition.
    pub after: StateSnapshot,
    /// The branch this event is scoped to, by name.
    pub branch: String,
    /// The week variant this event touched, if the action was week-scoped.
    pub week: Option<WeekSelector>,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`. Once created, an audit event is immutable.
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
        branch: String,
        week: Option<WeekSelector>,
    ) -> Self {
        Self {
            actor,
            cause,
            action,
            before,
            after,
            branch,
            week,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> AuditEvent {
        AuditEvent::new(
            Actor::new(String::from("admin-1"), String::from("admin")),
            Cause::new(String::from("req-9"), String::from("User request")),
            Action::new(String::from("AssignShift"), None),
            StateSnapshot::new(String::from("assignments=0")),
            StateSnapshot::new(String::from("assignments=1")),
            String::from("תל אביב"),
            Some(WeekSelector::Current),
        )
    }

    #[test]
    fn test_actor_creation_requires_all_fields() {
        let actor: Actor = Actor::new(String::from("branch-3"), String::from("branch"));

        assert_eq!(actor.id, "branch-3");
        assert_eq!(actor.actor_type, "branch");
    }

    #[test]
    fn test_action_creation_with_details() {
        let action: Action = Action::new(
            String::from("MoveShift"),
            Some(String::from("waiters 1 to waiters 2")),
        );

        assert_eq!(action.name, "MoveShift");
        assert_eq!(action.details, Some(String::from("waiters 1 to waiters 2")));
    }

    #[test]
    fn test_audit_event_captures_scope_and_snapshots() {
        let event: AuditEvent = sample_event();

        assert_eq!(event.branch, "תל אביב");
        assert_eq!(event.week, Some(WeekSelector::Current));
        assert_eq!(event.before.data, "assignments=0");
        assert_eq!(event.after.data, "assignments=1");
    }

    #[test]
    fn test_audit_event_equality() {
        assert_eq!(sample_event(), sample_event());
    }

    #[test]
    fn test_roster_event_has_no_week_scope() {
        let mut event: AuditEvent = sample_event();
        event.week = None;
        event.action = Action::new(String::from("AddEmployee"), None);

        assert_eq!(event.week, None);
    }
}
