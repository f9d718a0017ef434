// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{RosterState, ScheduleState};
use mishmeret_audit::{Actor, Cause};
use mishmeret_domain::{BranchKind, Color, Department, Employee, WeekSelector};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("admin-123"), String::from("admin"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("User request"))
}

pub fn create_schedule_state() -> ScheduleState {
    ScheduleState::new(
        String::from("תל אביב"),
        BranchKind::Generic,
        WeekSelector::Current,
    )
}

pub fn create_call_center_state() -> ScheduleState {
    ScheduleState::new(
        String::from("מוקד"),
        BranchKind::CallCenter,
        WeekSelector::Next,
    )
}

pub fn create_roster_state() -> RosterState {
    let mut state: RosterState = RosterState::new(String::from("תל אביב"), BranchKind::Generic);
    state.employees.push(Employee::with_id(
        1,
        String::from("תל אביב"),
        String::from("דנה"),
        Color::new("#2e7d32"),
        vec![Department::Waiters],
    ));
    state
}
