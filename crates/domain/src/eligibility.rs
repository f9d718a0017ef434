// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Soft department-to-role eligibility.
//!
//! Eligibility is advisory only. An ineligible placement is surfaced as a
//! warning requiring explicit confirmation; the server never rejects it.

use crate::grid::Role;
use crate::types::{Department, Employee};

/// Returns the department a role expects, if it expects one.
///
/// Call-center time slots expect no department and are open to everyone.
/// Apprentice shifts are staffed from the kitchen.
#[must_use]
pub const fn department_for_role(role: Role) -> Option<Department> {
    match role {
        Role::Manager => Some(Department::Manager),
        Role::Waiters => Some(Department::Waiters),
        Role::Cooks | Role::Apprentices => Some(Department::Cooks),
        Role::Morning | Role::Noon | Role::Evening => None,
    }
}

/// Returns whether an employee is eligible for a role.
///
/// An employee is eligible when the role expects no department, or the
/// expected department is among the employee's tags.
#[must_use]
pub fn is_eligible(employee: &Employee, role: Role) -> bool {
    department_for_role(role)
        .is_none_or(|department| employee.departments.contains(&department))
}
