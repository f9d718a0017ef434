// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_roster_state, create_test_actor, create_test_cause};
use crate::{Command, CoreError, RosterResult, RosterState, apply_roster};
use mishmeret_domain::{BranchKind, Color, Department, DomainError};

#[test]
fn test_add_employee_appends_to_roster() {
    let state: RosterState = create_roster_state();
    let command: Command = Command::AddEmployee {
        name: String::from("יוסי"),
        color: Color::new("#aa3355"),
        departments: vec![Department::Cooks],
    };

    let result: RosterResult =
        apply_roster(&state, command, create_test_actor(), create_test_cause()).unwrap();

    assert_eq!(result.new_state.employees.len(), 2);
    assert_eq!(result.new_state.employees[1].name, "יוסי");
    assert_eq!(result.new_state.employees[1].employee_id, None);
    assert_eq!(result.audit_event.action.name, "AddEmployee");
    assert_eq!(result.audit_event.week, None);
    // The input roster is untouched.
    assert_eq!(state.employees.len(), 1);
}

#[test]
fn test_add_employee_with_duplicate_name_rejected() {
    let state: RosterState = create_roster_state();
    let command: Command = Command::AddEmployee {
        name: String::from("דנה"),
        color: Color::new("#aa3355"),
        departments: vec![Department::Cooks],
    };

    let result: Result<RosterResult, CoreError> =
        apply_roster(&state, command, create_test_actor(), create_test_cause());

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::DuplicateName { .. }))
    ));
}

#[test]
fn test_add_employee_to_call_center_drops_departments() {
    let state: RosterState = RosterState::new(String::from("מוקד"), BranchKind::CallCenter);
    let command: Command = Command::AddEmployee {
        name: String::from("רון"),
        color: Color::new("#123456"),
        departments: vec![Department::Waiters],
    };

    let result: RosterResult =
        apply_roster(&state, command, create_test_actor(), create_test_cause()).unwrap();

    assert!(result.new_state.employees[0].departments.is_empty());
}

#[test]
fn test_update_employee_replaces_fields() {
    let state: RosterState = create_roster_state();
    let command: Command = Command::UpdateEmployee {
        employee_id: 1,
        name: String::from("דנה לוי"),
        color: Color::new("#2e7d32"),
        departments: vec![Department::Waiters, Department::Manager],
    };

    let result: RosterResult =
        apply_roster(&state, command, create_test_actor(), create_test_cause()).unwrap();

    assert_eq!(result.new_state.employees.len(), 1);
    assert_eq!(result.new_state.employees[0].name, "דנה לוי");
    assert_eq!(
        result.new_state.employees[0].departments,
        vec![Department::Waiters, Department::Manager]
    );
    assert_eq!(result.audit_event.action.name, "UpdateEmployee");
}

#[test]
fn test_update_missing_employee_rejected() {
    let state: RosterState = create_roster_state();
    let command: Command = Command::UpdateEmployee {
        employee_id: 99,
        name: String::from("אורי"),
        color: Color::new("#445566"),
        departments: vec![Department::Cooks],
    };

    let result: Result<RosterResult, CoreError> =
        apply_roster(&state, command, create_test_actor(), create_test_cause());

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::EmployeeNotFound {
            branch: String::from("תל אביב"),
            employee_id: 99,
        }))
    );
}

#[test]
fn test_remove_employee_shrinks_roster() {
    let state: RosterState = create_roster_state();
    let command: Command = Command::RemoveEmployee { employee_id: 1 };

    let result: RosterResult =
        apply_roster(&state, command, create_test_actor(), create_test_cause()).unwrap();

    assert!(result.new_state.employees.is_empty());
    assert_eq!(result.audit_event.action.name, "RemoveEmployee");
    assert!(
        result
            .audit_event
            .action
            .details
            .as_ref()
            .unwrap()
            .contains("דנה")
    );
}

#[test]
fn test_remove_missing_employee_rejected() {
    let state: RosterState = create_roster_state();
    let command: Command = Command::RemoveEmployee { employee_id: 42 };

    let result: Result<RosterResult, CoreError> =
        apply_roster(&state, command, create_test_actor(), create_test_cause());

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::EmployeeNotFound { .. }))
    ));
}

#[test]
#[should_panic(expected = "apply_roster called with schedule command")]
fn test_apply_roster_rejects_schedule_command() {
    let state: RosterState = create_roster_state();
    let command: Command = Command::AssignShift {
        day: String::from("ראשון"),
        role: mishmeret_domain::Role::Waiters,
        position: 1,
        employee_id: Some(1),
    };

    let _result: Result<RosterResult, CoreError> =
        apply_roster(&state, command, create_test_actor(), create_test_cause());
}
