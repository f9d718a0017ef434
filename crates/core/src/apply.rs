// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{RosterResult, RosterState, ScheduleState, TransitionResult};
use mishmeret_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use mishmeret_domain::{
    DomainError, Employee, Schedule, normalize_departments, validate_cell, validate_employee,
};

/// Applies a schedule command to the current state, producing a new state
/// and audit event.
///
/// This function handles cell-addressed commands within one
/// (branch, week) scope. It is pure: the input state is never mutated, and
/// a failed command has no side effects.
///
/// Cell addresses are validated against the branch kind's grid before any
/// mutation, so an out-of-grid role or position is reported as a domain
/// error rather than reaching the grid's fail-fast paths.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The schedule command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and audit event
/// * `Err(CoreError)` if the command addresses an invalid cell
///
/// # Errors
///
/// Returns an error if the command addresses a role outside the branch
/// kind's grid or a position beyond the role's capacity.
pub fn apply(
    state: &ScheduleState,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::AssignShift {
            day,
            role,
            position,
            employee_id,
        } => {
            validate_cell(state.kind, role, position)?;

            let before: StateSnapshot = state.to_snapshot();

            let mut schedule: Schedule = state.schedule.clone();
            schedule.assign(&day, role, position, employee_id);

            let new_state: ScheduleState = ScheduleState {
                branch: state.branch.clone(),
                kind: state.kind,
                week: state.week,
                schedule,
            };
            let after: StateSnapshot = new_state.to_snapshot();

            let details: String = match employee_id {
                Some(id) => format!("Placed employee {id} at {day}/{role}/{position}"),
                None => format!("Cleared {day}/{role}/{position}"),
            };
            let action: Action = Action::new(String::from("AssignShift"), Some(details));
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                before,
                after,
                state.branch.clone(),
                Some(state.week),
            );

            Ok(TransitionResult {
                new_state,
                audit_event,
            })
        }
        Command::MoveShift {
            from_day,
            from_role,
            from_position,
            to_day,
            to_role,
            to_position,
            employee_id,
        } => {
            validate_cell(state.kind, from_role, from_position)?;
            validate_cell(state.kind, to_role, to_position)?;

            let before: StateSnapshot = state.to_snapshot();

            // Both halves land in one new state so the move is atomic from
            // the caller's point of view.
            let mut schedule: Schedule = state.schedule.clone();
            schedule.assign(&from_day, from_role, from_position, None);
            schedule.assign(&to_day, to_role, to_position, Some(employee_id));

            let new_state: ScheduleState = ScheduleState {
                branch: state.branch.clone(),
                kind: state.kind,
                week: state.week,
                schedule,
            };
            let after: StateSnapshot = new_state.to_snapshot();

            let action: Action = Action::new(
                String::from("MoveShift"),
                Some(format!(
                    "Moved employee {employee_id} from {from_day}/{from_role}/{from_position} to {to_day}/{to_role}/{to_position}"
                )),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                before,
                after,
                state.branch.clone(),
                Some(state.week),
            );

            Ok(TransitionResult {
                new_state,
                audit_event,
            })
        }
        Command::AddEmployee { .. } | Command::UpdateEmployee { .. }
        | Command::RemoveEmployee { .. } => {
            // Roster commands should use apply_roster() instead
            unreachable!("apply called with roster command")
        }
    }
}

/// Applies a roster command to the current roster, producing a new roster
/// and audit event.
///
/// Validation runs in the fixed rule order before any mutation; the first
/// violated rule aborts the transition.
///
/// # Arguments
///
/// * `state` - The current roster (immutable)
/// * `command` - The roster command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(RosterResult)` containing the new roster and audit event
/// * `Err(CoreError)` if the command violates a validation rule
///
/// # Errors
///
/// Returns an error if:
/// - The employee violates a roster rule (name, color, departments)
/// - The referenced employee does not exist (update/remove)
pub fn apply_roster(
    state: &RosterState,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<RosterResult, CoreError> {
    match command {
        Command::AddEmployee {
            name,
            color,
            departments,
        } => {
            let employee: Employee = Employee::new(
                state.branch.clone(),
                name,
                color,
                normalize_departments(state.kind, departments),
            );
            validate_employee(state.kind, &employee, &state.employees)?;

            let before: StateSnapshot = state.to_snapshot();

            let mut employees: Vec<Employee> = state.employees.clone();
            let details: String = format!("Added employee '{}'", employee.name);
            employees.push(employee);

            let new_state: RosterState = RosterState {
                branch: state.branch.clone(),
                kind: state.kind,
                employees,
            };
            let after: StateSnapshot = new_state.to_snapshot();

            let action: Action = Action::new(String::from("AddEmployee"), Some(details));
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                before,
                after,
                state.branch.clone(),
                None,
            );

            Ok(RosterResult {
                new_state,
                audit_event,
            })
        }
        Command::UpdateEmployee {
            employee_id,
            name,
            color,
            departments,
        } => {
            let index: usize = state
                .employees
                .iter()
                .position(|employee| employee.employee_id == Some(employee_id))
                .ok_or(DomainError::EmployeeNotFound {
                    branch: state.branch.clone(),
                    employee_id,
                })?;

            let candidate: Employee = Employee::with_id(
                employee_id,
                state.branch.clone(),
                name,
                color,
                normalize_departments(state.kind, departments),
            );
            validate_employee(state.kind, &candidate, &state.employees)?;

            let before: StateSnapshot = state.to_snapshot();

            let mut employees: Vec<Employee> = state.employees.clone();
            let details: String = format!("Updated employee '{}'", candidate.name);
            employees[index] = candidate;

            let new_state: RosterState = RosterState {
                branch: state.branch.clone(),
                kind: state.kind,
                employees,
            };
            let after: StateSnapshot = new_state.to_snapshot();

            let action: Action = Action::new(String::from("UpdateEmployee"), Some(details));
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                before,
                after,
                state.branch.clone(),
                None,
            );

            Ok(RosterResult {
                new_state,
                audit_event,
            })
        }
        Command::RemoveEmployee { employee_id } => {
            let index: usize = state
                .employees
                .iter()
                .position(|employee| employee.employee_id == Some(employee_id))
                .ok_or(DomainError::EmployeeNotFound {
                    branch: state.branch.clone(),
                    employee_id,
                })?;

            let before: StateSnapshot = state.to_snapshot();

            let mut employees: Vec<Employee> = state.employees.clone();
            let removed: Employee = employees.remove(index);

            let new_state: RosterState = RosterState {
                branch: state.branch.clone(),
                kind: state.kind,
                employees,
            };
            let after: StateSnapshot = new_state.to_snapshot();

            let action: Action = Action::new(
                String::from("RemoveEmployee"),
                Some(format!("Removed employee '{}'", removed.name)),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                before,
                after,
                state.branch.clone(),
                None,
            );

            Ok(RosterResult {
                new_state,
                audit_event,
            })
        }
        Command::AssignShift { .. } | Command::MoveShift { .. } => {
            // Schedule commands should use apply() instead
            unreachable!("apply_roster called with schedule command")
        }
    }
}
