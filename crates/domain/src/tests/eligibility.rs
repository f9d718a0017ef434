// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::color::Color;
use crate::eligibility::{department_for_role, is_eligible};
use crate::grid::Role;
use crate::types::{Department, Employee};

fn waiter() -> Employee {
    Employee::with_id(
        1,
        String::from("תל אביב"),
        String::from("דנה"),
        Color::new("#2e7d32"),
        vec![Department::Waiters],
    )
}

#[test]
fn test_role_department_mapping() {
    assert_eq!(department_for_role(Role::Manager), Some(Department::Manager));
    assert_eq!(department_for_role(Role::Waiters), Some(Department::Waiters));
    assert_eq!(department_for_role(Role::Cooks), Some(Department::Cooks));
    assert_eq!(
        department_for_role(Role::Apprentices),
        Some(Department::Cooks)
    );
    assert_eq!(department_for_role(Role::Morning), None);
    assert_eq!(department_for_role(Role::Noon), None);
    assert_eq!(department_for_role(Role::Evening), None);
}

#[test]
fn test_employee_eligible_for_matching_department() {
    assert!(is_eligible(&waiter(), Role::Waiters));
}

#[test]
fn test_employee_ineligible_for_other_department() {
    assert!(!is_eligible(&waiter(), Role::Cooks));
    assert!(!is_eligible(&waiter(), Role::Manager));
}

#[test]
fn test_everyone_eligible_for_call_center_slots() {
    let mut employee: Employee = waiter();
    employee.departments.clear();

    assert!(is_eligible(&employee, Role::Morning));
    assert!(is_eligible(&waiter(), Role::Evening));
}

#[test]
fn test_cook_eligible_for_apprentice_slots() {
    let mut employee: Employee = waiter();
    employee.departments = vec![Department::Cooks];

    assert!(is_eligible(&employee, Role::Apprentices));
}
