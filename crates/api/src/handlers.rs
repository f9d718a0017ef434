// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary handlers.
//!
//! Each handler enforces authorization, translates wire strings into
//! domain types, routes the mutation through a core transition, persists
//! the result together with its audit event, and returns a response DTO.
//! Errors are translated explicitly; domain and core errors never leak.

use tracing::info;

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::password_policy::PasswordPolicy;
use crate::request_response::{
    AssignShiftRequest, AuditEventResponse, CreateBranchRequest, CreateBranchResponse,
    CreateEmployeeRequest, EmployeesResponse, MoveShiftRequest, SaveScheduleRequest,
    SaveScheduleResponse, ScheduleResponse, TransitionWeekResponse, UpdateEmployeeRequest,
};
use mishmeret::{
    Command, RosterResult, RosterState, ScheduleState, TransitionResult, apply, apply_roster,
};
use mishmeret_audit::{Action, AuditEvent, Cause, StateSnapshot};
use mishmeret_domain::{
    BranchKind, Color, Department, DomainError, Employee, Role, Schedule, WeekSelector,
    validate_cell,
};
use mishmeret_persistence::{AuditEventRecord, BranchData, Persistence};

/// Returns the schedule of a branch for one week variant.
///
/// Requesting the next week of a branch that has never staged one
/// materializes an empty grid; the current week is never affected.
///
/// # Errors
///
/// Returns an error if the week selector is invalid or the branch does not
/// exist.
pub fn get_schedule(
    persistence: &mut Persistence,
    branch_name: &str,
    week: &str,
) -> Result<ScheduleResponse, ApiError> {
    let week: WeekSelector = parse_week(week)?;

    let schedule: Schedule = persistence
        .get_schedule(branch_name, week)
        .map_err(translate_persistence_error)?;

    Ok(ScheduleResponse {
        branch: branch_name.to_string(),
        week: week.as_str().to_string(),
        days: schedule.days,
    })
}

/// Replaces one week grid of a branch with a client-computed document.
///
/// The submitted days are normalized by replaying every shift through the
/// assignment algorithm onto an empty grid: cell bounds are enforced
/// against the branch kind and duplicate cells collapse last-write-wins.
/// The normalized document is what gets persisted and echoed back.
///
/// # Errors
///
/// Returns an error if the actor may not mutate the branch, the branch
/// does not exist, or a shift addresses an invalid cell.
pub fn save_schedule(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    branch_id: i64,
    request: SaveScheduleRequest,
    cause: Cause,
) -> Result<SaveScheduleResponse, ApiError> {
    AuthorizationService::authorize_save_schedule(actor, branch_id)?;

    let week: WeekSelector = parse_week(&request.week)?;
    let branch: BranchData = require_branch_by_id(persistence, branch_id)?;
    let kind: BranchKind = branch_kind(&branch)?;

    let submitted: Schedule = Schedule {
        days: request.days,
    };
    let normalized: Schedule = normalize_days(kind, &submitted)?;

    let stored: Schedule = persistence
        .load_or_init_schedule(branch_id, week)
        .map_err(translate_persistence_error)?;
    let before: StateSnapshot = snapshot(&branch.name, week, &stored);
    let after: StateSnapshot = snapshot(&branch.name, week, &normalized);

    persistence
        .save_schedule(branch_id, week, &normalized)
        .map_err(translate_persistence_error)?;

    let audit_event: AuditEvent = AuditEvent::new(
        actor.to_audit_actor(),
        cause,
        Action::new(
            String::from("SaveSchedule"),
            Some(format!(
                "Replaced {week} schedule ({} assignments)",
                normalized.assignment_count()
            )),
        ),
        before,
        after,
        branch.name.clone(),
        Some(week),
    );
    let event_id: i64 = persistence
        .insert_audit_event(&audit_event)
        .map_err(translate_persistence_error)?;

    info!(branch = %branch.name, week = %week, event_id, "Schedule replaced");

    Ok(SaveScheduleResponse {
        branch_id,
        week: week.as_str().to_string(),
        days: normalized.days,
        event_id,
    })
}

/// Places, overwrites, or clears one cell of a branch schedule.
///
/// # Errors
///
/// Returns an error if the actor may not mutate the branch, the branch
/// does not exist, or the cell is invalid for the branch kind.
pub fn assign_shift(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    branch_id: i64,
    request: AssignShiftRequest,
    cause: Cause,
) -> Result<SaveScheduleResponse, ApiError> {
    AuthorizationService::authorize_save_schedule(actor, branch_id)?;

    let week: WeekSelector = parse_week(&request.week)?;
    let role: Role = Role::parse(&request.role).map_err(translate_domain_error)?;
    let branch: BranchData = require_branch_by_id(persistence, branch_id)?;

    let command: Command = Command::AssignShift {
        day: request.day,
        role,
        position: request.position,
        employee_id: request.employee_id,
    };

    run_schedule_command(persistence, actor, &branch, week, command, cause)
}

/// Moves an employee between two cells as one atomic transition.
///
/// # Errors
///
/// Returns an error if the actor may not mutate the branch, the branch
/// does not exist, or either cell is invalid for the branch kind.
pub fn move_shift(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    branch_id: i64,
    request: MoveShiftRequest,
    cause: Cause,
) -> Result<SaveScheduleResponse, ApiError> {
    AuthorizationService::authorize_save_schedule(actor, branch_id)?;

    let week: WeekSelector = parse_week(&request.week)?;
    let from_role: Role = Role::parse(&request.from_role).map_err(translate_domain_error)?;
    let to_role: Role = Role::parse(&request.to_role).map_err(translate_domain_error)?;
    let branch: BranchData = require_branch_by_id(persistence, branch_id)?;

    let command: Command = Command::MoveShift {
        from_day: request.from_day,
        from_role,
        from_position: request.from_position,
        to_day: request.to_day,
        to_role,
        to_position: request.to_position,
        employee_id: request.employee_id,
    };

    run_schedule_command(persistence, actor, &branch, week, command, cause)
}

/// Lists the roster of a branch.
///
/// # Errors
///
/// Returns an error if the branch does not exist.
pub fn list_employees(
    persistence: &mut Persistence,
    branch_name: &str,
) -> Result<EmployeesResponse, ApiError> {
    let branch: BranchData = require_branch_by_name(persistence, branch_name)?;
    persistence
        .list_employees(branch.branch_id)
        .map_err(translate_persistence_error)
}

/// Adds an employee to a branch roster.
///
/// Validation runs in the fixed rule order before anything is persisted;
/// a rejected employee never reaches the database.
///
/// # Errors
///
/// Returns an error if the actor may not edit the roster, the branch does
/// not exist, or a validation rule fails.
pub fn create_employee(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: CreateEmployeeRequest,
    cause: Cause,
) -> Result<Employee, ApiError> {
    let branch: BranchData = require_branch_by_name(persistence, &request.branch)?;
    AuthorizationService::authorize_manage_roster(actor, branch.branch_id)?;

    let departments: Vec<Department> = parse_departments(&request.departments)?;
    let command: Command = Command::AddEmployee {
        name: request.name,
        color: Color::new(&request.color),
        departments,
    };

    let state: RosterState = load_roster(persistence, &branch)?;
    let result: RosterResult = apply_roster(&state, command, actor.to_audit_actor(), cause)
        .map_err(translate_core_error)?;

    // The applied command appended the new employee last.
    let mut employee: Employee = result
        .new_state
        .employees
        .last()
        .cloned()
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Roster transition produced no employee"),
        })?;

    let employee_id: i64 = persistence
        .create_employee(branch.branch_id, &employee)
        .map_err(translate_persistence_error)?;
    employee.employee_id = Some(employee_id);

    persistence
        .insert_audit_event(&result.audit_event)
        .map_err(translate_persistence_error)?;

    Ok(employee)
}

/// Updates a roster employee.
///
/// # Errors
///
/// Returns an error if the employee or its branch does not exist, the
/// actor may not edit the roster, or a validation rule fails.
pub fn update_employee(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    employee_id: i64,
    request: UpdateEmployeeRequest,
    cause: Cause,
) -> Result<Employee, ApiError> {
    let branch: BranchData = require_employee_branch(persistence, employee_id)?;
    AuthorizationService::authorize_manage_roster(actor, branch.branch_id)?;

    let departments: Vec<Department> = parse_departments(&request.departments)?;
    let command: Command = Command::UpdateEmployee {
        employee_id,
        name: request.name,
        color: Color::new(&request.color),
        departments,
    };

    let state: RosterState = load_roster(persistence, &branch)?;
    let result: RosterResult = apply_roster(&state, command, actor.to_audit_actor(), cause)
        .map_err(translate_core_error)?;

    let employee: Employee = result
        .new_state
        .employees
        .iter()
        .find(|employee| employee.employee_id == Some(employee_id))
        .cloned()
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Roster transition lost the updated employee"),
        })?;

    persistence
        .update_employee(employee_id, &employee)
        .map_err(translate_persistence_error)?;
    persistence
        .insert_audit_event(&result.audit_event)
        .map_err(translate_persistence_error)?;

    Ok(employee)
}

/// Removes an employee from a branch roster.
///
/// Existing shift assignments referencing the employee are left in place.
///
/// # Errors
///
/// Returns an error if the employee or its branch does not exist, or the
/// actor may not edit the roster.
pub fn delete_employee(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    employee_id: i64,
    cause: Cause,
) -> Result<(), ApiError> {
    let branch: BranchData = require_employee_branch(persistence, employee_id)?;
    AuthorizationService::authorize_manage_roster(actor, branch.branch_id)?;

    let state: RosterState = load_roster(persistence, &branch)?;
    let result: RosterResult = apply_roster(
        &state,
        Command::RemoveEmployee { employee_id },
        actor.to_audit_actor(),
        cause,
    )
    .map_err(translate_core_error)?;

    persistence
        .delete_employee(employee_id)
        .map_err(translate_persistence_error)?;
    persistence
        .insert_audit_event(&result.audit_event)
        .map_err(translate_persistence_error)?;

    Ok(())
}

/// Promotes a branch's next week into the current week (admin only).
///
/// The next week becomes current, the next week resets to empty, and the
/// branch's transition timestamp is stamped.
///
/// # Errors
///
/// Returns an error if the actor is not an admin or the branch does not
/// exist.
pub fn transition_week(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    branch_id: i64,
    cause: Cause,
) -> Result<TransitionWeekResponse, ApiError> {
    AuthorizationService::authorize_transition_week(actor)?;

    let branch: BranchData = require_branch_by_id(persistence, branch_id)?;

    let staged: Schedule = persistence
        .load_or_init_schedule(branch_id, WeekSelector::Next)
        .map_err(translate_persistence_error)?;
    let before: StateSnapshot = StateSnapshot::new(format!(
        "branch={},staged_assignments={}",
        branch.name,
        staged.assignment_count()
    ));

    let transitioned_at: String = persistence
        .transition_week(branch_id)
        .map_err(translate_persistence_error)?;
    let after: StateSnapshot = StateSnapshot::new(format!(
        "branch={},current_assignments={},staged_assignments=0",
        branch.name,
        staged.assignment_count()
    ));

    let audit_event: AuditEvent = AuditEvent::new(
        actor.to_audit_actor(),
        cause,
        Action::new(
            String::from("TransitionWeek"),
            Some(format!("Promoted next week at {transitioned_at}")),
        ),
        before,
        after,
        branch.name.clone(),
        None,
    );
    persistence
        .insert_audit_event(&audit_event)
        .map_err(translate_persistence_error)?;

    Ok(TransitionWeekResponse {
        branch_id,
        transitioned_at,
    })
}

/// Bootstraps a new branch (admin only).
///
/// # Errors
///
/// Returns an error if the actor is not an admin, a field is invalid, the
/// password violates policy, or the branch name is taken.
pub fn create_branch(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: CreateBranchRequest,
    cause: Cause,
) -> Result<CreateBranchResponse, ApiError> {
    AuthorizationService::authorize_create_branch(actor)?;

    if request.name.trim().is_empty() {
        return Err(translate_domain_error(DomainError::InvalidBranchName(
            String::from("Branch name cannot be empty"),
        )));
    }
    if request.username.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("username"),
            message: String::from("Username cannot be empty"),
        });
    }
    let kind: BranchKind = request.kind.parse().map_err(translate_domain_error)?;

    PasswordPolicy::default().validate(
        &request.password,
        &request.password_confirmation,
        &request.username,
    )?;

    if persistence
        .get_branch_by_name(&request.name)
        .map_err(translate_persistence_error)?
        .is_some()
    {
        return Err(ApiError::DomainRuleViolation {
            rule: String::from("unique_branch"),
            message: format!("Branch '{}' already exists", request.name),
        });
    }

    let branch_id: i64 = persistence
        .create_branch(
            &request.name,
            &request.username,
            &request.password,
            request.is_admin,
            kind,
        )
        .map_err(translate_persistence_error)?;

    let audit_event: AuditEvent = AuditEvent::new(
        actor.to_audit_actor(),
        cause,
        Action::new(
            String::from("CreateBranch"),
            Some(format!("Created {kind} branch '{}'", request.name)),
        ),
        StateSnapshot::new(String::from("branch=absent")),
        StateSnapshot::new(format!("branch_id={branch_id}")),
        request.name.clone(),
        None,
    );
    persistence
        .insert_audit_event(&audit_event)
        .map_err(translate_persistence_error)?;

    Ok(CreateBranchResponse {
        branch_id,
        name: request.name,
    })
}

/// Lists a branch's audit trail, oldest first.
///
/// # Errors
///
/// Returns an error if the branch does not exist or the actor may not read
/// its audit trail.
pub fn list_audit_events(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    branch_name: &str,
) -> Result<Vec<AuditEventResponse>, ApiError> {
    let branch: BranchData = require_branch_by_name(persistence, branch_name)?;
    AuthorizationService::authorize_read_audit(actor, branch.branch_id)?;

    let records: Vec<AuditEventRecord> = persistence
        .list_audit_events(&branch.name)
        .map_err(translate_persistence_error)?;

    Ok(records
        .into_iter()
        .map(|record| AuditEventResponse {
            event_id: record.event_id,
            actor: record.event.actor.id,
            action: record.event.action.name,
            details: record.event.action.details,
            week: record.event.week.map(|week| week.as_str().to_string()),
            created_at: record.created_at,
        })
        .collect())
}

// ---- helpers ------------------------------------------------------------

fn parse_week(week: &str) -> Result<WeekSelector, ApiError> {
    week.parse::<WeekSelector>().map_err(translate_domain_error)
}

fn parse_departments(departments: &[String]) -> Result<Vec<Department>, ApiError> {
    departments
        .iter()
        .map(|department| Department::parse(department).map_err(translate_domain_error))
        .collect()
}

fn branch_kind(branch: &BranchData) -> Result<BranchKind, ApiError> {
    branch.kind.parse().map_err(|_| ApiError::Internal {
        message: format!(
            "Branch '{}' has an unrecognized kind '{}'",
            branch.name, branch.kind
        ),
    })
}

fn require_branch_by_id(
    persistence: &mut Persistence,
    branch_id: i64,
) -> Result<BranchData, ApiError> {
    persistence
        .get_branch_by_id(branch_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Branch"),
            message: format!("Branch {branch_id} does not exist"),
        })
}

fn require_branch_by_name(
    persistence: &mut Persistence,
    branch_name: &str,
) -> Result<BranchData, ApiError> {
    persistence
        .get_branch_by_name(branch_name)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Branch"),
            message: format!("Branch '{branch_name}' does not exist"),
        })
}

fn require_employee_branch(
    persistence: &mut Persistence,
    employee_id: i64,
) -> Result<BranchData, ApiError> {
    let branch_id: i64 = persistence
        .get_employee_branch_id(employee_id)
        .map_err(translate_persistence_error)?
        .ok_or(ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message: format!("Employee {employee_id} does not exist"),
        })?;
    require_branch_by_id(persistence, branch_id)
}

fn load_roster(
    persistence: &mut Persistence,
    branch: &BranchData,
) -> Result<RosterState, ApiError> {
    let kind: BranchKind = branch_kind(branch)?;
    let employees: Vec<Employee> = persistence
        .list_employees(branch.branch_id)
        .map_err(translate_persistence_error)?;
    Ok(RosterState {
        branch: branch.name.clone(),
        kind,
        employees,
    })
}

fn snapshot(branch: &str, week: WeekSelector, schedule: &Schedule) -> StateSnapshot {
    StateSnapshot::new(format!(
        "branch={branch},week={week},assignments={}",
        schedule.assignment_count()
    ))
}

/// Replays a submitted document through the assignment algorithm.
///
/// Cell bounds are checked against the branch kind and duplicate cells
/// collapse last-write-wins, so the persisted document always satisfies
/// the one-shift-per-cell invariant.
fn normalize_days(kind: BranchKind, submitted: &Schedule) -> Result<Schedule, ApiError> {
    let mut normalized: Schedule = Schedule::empty();
    for day in &submitted.days {
        for shift in &day.shifts {
            validate_cell(kind, shift.role, shift.position).map_err(translate_domain_error)?;
            normalized.assign(&day.name, shift.role, shift.position, Some(shift.employee_id));
        }
    }
    Ok(normalized)
}

fn run_schedule_command(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    branch: &BranchData,
    week: WeekSelector,
    command: Command,
    cause: Cause,
) -> Result<SaveScheduleResponse, ApiError> {
    let kind: BranchKind = branch_kind(branch)?;
    let schedule: Schedule = persistence
        .load_or_init_schedule(branch.branch_id, week)
        .map_err(translate_persistence_error)?;

    let state: ScheduleState = ScheduleState {
        branch: branch.name.clone(),
        kind,
        week,
        schedule,
    };
    let result: TransitionResult = apply(&state, command, actor.to_audit_actor(), cause)
        .map_err(translate_core_error)?;

    persistence
        .save_schedule(branch.branch_id, week, &result.new_state.schedule)
        .map_err(translate_persistence_error)?;
    let event_id: i64 = persistence
        .insert_audit_event(&result.audit_event)
        .map_err(translate_persistence_error)?;

    Ok(SaveScheduleResponse {
        branch_id: branch.branch_id,
        week: week.as_str().to_string(),
        days: result.new_state.schedule.days,
        event_id,
    })
}
