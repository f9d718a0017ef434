// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The weekly schedule entity and its assignment algorithm.

use crate::grid::{Role, WEEK_DAYS};
use serde::{Deserialize, Serialize};

/// One employee bound to one (role, position) cell of a day.
///
/// A shift only exists while its cell is occupied; clearing a cell removes
/// the shift rather than nulling its employee. Within one day at most one
/// shift exists per (role, position) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// The grid role this shift fills.
    pub role: Role,
    /// The 1-based position within the role.
    pub position: u8,
    /// The assigned employee. Accepts the legacy `workerId` key on input.
    #[serde(rename = "employeeId", alias = "workerId")]
    pub employee_id: i64,
}

/// One day of a weekly schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// The day number, 1 (Sunday) through 7 (Saturday).
    #[serde(rename = "dayId")]
    pub day_id: u8,
    /// The fixed Hebrew day name.
    pub name: String,
    /// The occupied cells of this day, unordered.
    pub shifts: Vec<Shift>,
}

impl Day {
    /// Creates an empty day.
    #[must_use]
    pub const fn new(day_id: u8, name: String) -> Self {
        Self {
            day_id,
            name,
            shifts: Vec::new(),
        }
    }
}

/// A weekly schedule grid: exactly 7 days, Sunday through Saturday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// The 7 days in fixed order.
    pub days: Vec<Day>,
}

impl Schedule {
    /// Creates the empty weekly template: 7 days, all cells empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            days: WEEK_DAYS
                .iter()
                .map(|(day_id, name)| Day::new(*day_id, (*name).to_string()))
                .collect(),
        }
    }

    /// Assigns, overwrites, or clears one (day, role, position) cell.
    ///
    /// The cell is cleared unconditionally, then re-filled when an employee
    /// is given. This delete-then-insert order makes clearing idempotent and
    /// placement last-write-wins: assigning over an occupied cell replaces
    /// the occupant, and no sequence of calls can leave two shifts on the
    /// same cell.
    ///
    /// Days are located by name. A missing day is appended empty before the
    /// assignment; with the fixed 7-day template this path is unreachable,
    /// but a malformed days array is repaired rather than rejected.
    pub fn assign(&mut self, day_name: &str, role: Role, position: u8, employee_id: Option<i64>) {
        let day_index: usize = match self.days.iter().position(|day| day.name == day_name) {
            Some(index) => index,
            None => {
                let day_id: u8 = u8::try_from(self.days.len() + 1).unwrap_or(u8::MAX);
                self.days.push(Day::new(day_id, day_name.to_string()));
                self.days.len() - 1
            }
        };

        let day: &mut Day = &mut self.days[day_index];
        day.shifts
            .retain(|shift| !(shift.role == role && shift.position == position));
        if let Some(employee_id) = employee_id {
            day.shifts.push(Shift {
                role,
                position,
                employee_id,
            });
        }
    }

    /// Returns the employee assigned to a cell, if any.
    #[must_use]
    pub fn assigned_employee(&self, day_name: &str, role: Role, position: u8) -> Option<i64> {
        self.days
            .iter()
            .find(|day| day.name == day_name)
            .and_then(|day| {
                day.shifts
                    .iter()
                    .find(|shift| shift.role == role && shift.position == position)
            })
            .map(|shift| shift.employee_id)
    }

    /// Returns the total number of occupied cells across the week.
    #[must_use]
    pub fn assignment_count(&self) -> usize {
        self.days.iter().map(|day| day.shifts.len()).sum()
    }

    /// Returns whether the days array still matches the fixed weekly
    /// template: 7 days with the canonical ids and names, in order.
    ///
    /// Shifts are not inspected. Used by the repository to decide whether a
    /// loaded document needs backfilling.
    #[must_use]
    pub fn has_complete_week(&self) -> bool {
        self.days.len() == WEEK_DAYS.len()
            && self
                .days
                .iter()
                .zip(WEEK_DAYS.iter())
                .all(|(day, (day_id, name))| day.day_id == *day_id && day.name == *name)
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::empty()
    }
}
