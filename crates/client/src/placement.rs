// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use mishmeret_domain::{Employee, Role, is_eligible};

/// The outcome of checking an employee against a role before placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementCheck {
    /// The employee's departments match the role; place without asking.
    Eligible,
    /// The employee's departments do not match the role. The placement is
    /// still allowed, but only after the user explicitly confirms the
    /// exception.
    RequiresConfirmation {
        /// The employee's display name, for the confirmation prompt.
        employee_name: String,
        /// The role being filled.
        role: Role,
    },
}

/// Checks whether placing an employee into a role needs user confirmation.
///
/// Eligibility is a soft, client-side concern: the server accepts any
/// placement that addresses a valid cell. UI flows call this before
/// [`crate::ScheduleStore::assign`] and proceed directly when `Eligible`,
/// or after an explicit confirmation otherwise.
#[must_use]
pub fn check_placement(employee: &Employee, role: Role) -> PlacementCheck {
    if is_eligible(employee, role) {
        PlacementCheck::Eligible
    } else {
        PlacementCheck::RequiresConfirmation {
            employee_name: employee.name.clone(),
            role,
        }
    }
}
