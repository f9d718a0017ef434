// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use mishmeret_domain::{Color, Department, Role};

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request state changes. Schedule commands
/// address cells of the week the state is scoped to; roster commands operate
/// on the branch employee list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place, overwrite, or clear one (day, role, position) cell.
    ///
    /// `employee_id: None` clears the cell; this is also the trash-drop
    /// operation. Placing over an occupied cell replaces the occupant.
    AssignShift {
        /// The day, by its fixed Hebrew name.
        day: String,
        /// The grid role.
        role: Role,
        /// The 1-based position within the role.
        position: u8,
        /// The employee to place, or `None` to clear.
        employee_id: Option<i64>,
    },
    /// Move an employee from one cell to another as a single transition.
    ///
    /// The source cell is cleared and the employee placed at the target in
    /// one state change, so intermediate states (doubly placed or missing)
    /// are never observable and a failed save rolls back both halves.
    MoveShift {
        /// The source day name.
        from_day: String,
        /// The source role.
        from_role: Role,
        /// The source position.
        from_position: u8,
        /// The target day name.
        to_day: String,
        /// The target role.
        to_role: Role,
        /// The target position.
        to_position: u8,
        /// The employee being moved.
        employee_id: i64,
    },
    /// Add a new employee to the branch roster.
    AddEmployee {
        /// The employee's display name.
        name: String,
        /// The employee's grid color.
        color: Color,
        /// Department tags (ignored for call-center branches).
        departments: Vec<Department>,
    },
    /// Update an existing roster employee.
    UpdateEmployee {
        /// The employee to update.
        employee_id: i64,
        /// The new display name.
        name: String,
        /// The new grid color.
        color: Color,
        /// The new department tags (ignored for call-center branches).
        departments: Vec<Department>,
    },
    /// Remove an employee from the branch roster.
    ///
    /// Existing shift assignments referencing the employee are left in
    /// place; they simply no longer resolve to a roster entry.
    RemoveEmployee {
        /// The employee to remove.
        employee_id: i64,
    },
}
