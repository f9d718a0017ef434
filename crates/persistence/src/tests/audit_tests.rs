// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::AuditEventRecord;
use crate::tests::persistence_with_branch;
use mishmeret_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use mishmeret_domain::WeekSelector;

fn schedule_event() -> AuditEvent {
    AuditEvent::new(
        Actor::new(String::from("telaviv"), String::from("branch")),
        Cause::new(String::from("req-1"), String::from("User request")),
        Action::new(
            String::from("AssignShift"),
            Some(String::from("Placed employee 3 at ראשון/waiters/1")),
        ),
        StateSnapshot::new(String::from("assignments=0")),
        StateSnapshot::new(String::from("assignments=1")),
        String::from("תל אביב"),
        Some(WeekSelector::Current),
    )
}

#[test]
fn test_insert_and_list_round_trips_event() {
    let (mut persistence, _branch_id) = persistence_with_branch();
    let event: AuditEvent = schedule_event();

    let event_id: i64 = persistence.insert_audit_event(&event).unwrap();

    let records: Vec<AuditEventRecord> = persistence.list_audit_events("תל אביב").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].event_id, event_id);
    assert_eq!(records[0].event, event);
    assert!(!records[0].created_at.is_empty());
}

#[test]
fn test_roster_event_round_trips_without_week() {
    let (mut persistence, _branch_id) = persistence_with_branch();
    let mut event: AuditEvent = schedule_event();
    event.week = None;
    event.action = Action::new(String::from("AddEmployee"), None);

    persistence.insert_audit_event(&event).unwrap();

    let records: Vec<AuditEventRecord> = persistence.list_audit_events("תל אביב").unwrap();
    assert_eq!(records[0].event.week, None);
    assert_eq!(records[0].event.action.details, None);
}

#[test]
fn test_events_are_listed_oldest_first_and_scoped_by_branch() {
    let (mut persistence, _branch_id) = persistence_with_branch();
    let first: AuditEvent = schedule_event();
    let mut second: AuditEvent = schedule_event();
    second.action = Action::new(String::from("MoveShift"), None);
    let mut other_branch: AuditEvent = schedule_event();
    other_branch.branch = String::from("חיפה");

    persistence.insert_audit_event(&first).unwrap();
    persistence.insert_audit_event(&second).unwrap();
    persistence.insert_audit_event(&other_branch).unwrap();

    let records: Vec<AuditEventRecord> = persistence.list_audit_events("תל אביב").unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].event.action.name, "AssignShift");
    assert_eq!(records[1].event.action.name, "MoveShift");
}
