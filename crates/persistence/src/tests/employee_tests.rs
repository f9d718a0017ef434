// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::persistence_with_branch;
use crate::PersistenceError;
use mishmeret_domain::{Color, Department, Employee, Role, Schedule, WeekSelector};

fn waiter(name: &str, color: &str) -> Employee {
    Employee::new(
        String::from("תל אביב"),
        String::from(name),
        Color::new(color),
        vec![Department::Waiters],
    )
}

#[test]
fn test_create_and_list_employees() {
    let (mut persistence, branch_id) = persistence_with_branch();

    let first_id: i64 = persistence
        .create_employee(branch_id, &waiter("דנה", "#2e7d32"))
        .unwrap();
    let second_id: i64 = persistence
        .create_employee(branch_id, &waiter("יוסי", "#aa3355"))
        .unwrap();

    let roster: Vec<Employee> = persistence.list_employees(branch_id).unwrap();

    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].employee_id, Some(first_id));
    assert_eq!(roster[0].name, "דנה");
    assert_eq!(roster[0].branch, "תל אביב");
    assert_eq!(roster[0].departments, vec![Department::Waiters]);
    assert_eq!(roster[1].employee_id, Some(second_id));
}

#[test]
fn test_update_employee_replaces_fields() {
    let (mut persistence, branch_id) = persistence_with_branch();
    let employee_id: i64 = persistence
        .create_employee(branch_id, &waiter("דנה", "#2e7d32"))
        .unwrap();

    let mut updated: Employee = waiter("דנה לוי", "#445566");
    updated.departments = vec![Department::Waiters, Department::Manager];
    persistence.update_employee(employee_id, &updated).unwrap();

    let roster: Vec<Employee> = persistence.list_employees(branch_id).unwrap();
    assert_eq!(roster[0].name, "דנה לוי");
    assert_eq!(roster[0].color, Color::new("#445566"));
    assert_eq!(
        roster[0].departments,
        vec![Department::Waiters, Department::Manager]
    );
}

#[test]
fn test_delete_employee_removes_from_roster() {
    let (mut persistence, branch_id) = persistence_with_branch();
    let employee_id: i64 = persistence
        .create_employee(branch_id, &waiter("דנה", "#2e7d32"))
        .unwrap();

    persistence.delete_employee(employee_id).unwrap();

    assert!(persistence.list_employees(branch_id).unwrap().is_empty());
}

#[test]
fn test_delete_unknown_employee_rejected() {
    let (mut persistence, _branch_id) = persistence_with_branch();

    let result: Result<(), PersistenceError> = persistence.delete_employee(99);

    assert_eq!(result, Err(PersistenceError::EmployeeNotFound(99)));
}

#[test]
fn test_deleting_employee_leaves_schedule_assignments() {
    let (mut persistence, branch_id) = persistence_with_branch();
    let employee_id: i64 = persistence
        .create_employee(branch_id, &waiter("דנה", "#2e7d32"))
        .unwrap();
    let mut schedule: Schedule = Schedule::empty();
    schedule.assign("ראשון", Role::Waiters, 1, Some(employee_id));
    persistence
        .save_schedule(branch_id, WeekSelector::Current, &schedule)
        .unwrap();

    persistence.delete_employee(employee_id).unwrap();

    // The orphaned reference survives; it simply no longer resolves to a
    // roster entry.
    let loaded: Schedule = persistence
        .get_schedule("תל אביב", WeekSelector::Current)
        .unwrap();
    assert_eq!(
        loaded.assigned_employee("ראשון", Role::Waiters, 1),
        Some(employee_id)
    );
    assert!(persistence.list_employees(branch_id).unwrap().is_empty());
}

#[test]
fn test_duplicate_color_in_branch_rejected_by_constraint() {
    let (mut persistence, branch_id) = persistence_with_branch();
    persistence
        .create_employee(branch_id, &waiter("דנה", "#2e7d32"))
        .unwrap();

    let result: Result<i64, PersistenceError> =
        persistence.create_employee(branch_id, &waiter("יוסי", "#2e7d32"));

    assert!(matches!(result, Err(PersistenceError::DatabaseError(_))));
}
