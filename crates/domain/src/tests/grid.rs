// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::grid::{CALL_CENTER_ROLES, GENERIC_ROLES, Role, WEEK_DAYS};
use crate::grid::{capacity_of, cells_for, day_name, roles_for, validate_cell};
use crate::types::BranchKind;

#[test]
fn test_generic_grid_has_fourteen_cells() {
    let cells: Vec<(Role, u8)> = cells_for(BranchKind::Generic);

    assert_eq!(cells.len(), 14);
    assert_eq!(cells[0], (Role::Manager, 1));
    assert_eq!(cells[1], (Role::Waiters, 1));
    assert_eq!(cells[13], (Role::Apprentices, 3));
}

#[test]
fn test_call_center_grid_has_eight_cells() {
    let cells: Vec<(Role, u8)> = cells_for(BranchKind::CallCenter);

    assert_eq!(cells.len(), 8);
    assert_eq!(cells[0], (Role::Morning, 1));
    assert_eq!(cells[7], (Role::Evening, 3));
}

#[test]
fn test_capacity_table() {
    assert_eq!(capacity_of(BranchKind::Generic, Role::Manager), 1);
    assert_eq!(capacity_of(BranchKind::Generic, Role::Waiters), 6);
    assert_eq!(capacity_of(BranchKind::Generic, Role::Cooks), 4);
    assert_eq!(capacity_of(BranchKind::Generic, Role::Apprentices), 3);
    assert_eq!(capacity_of(BranchKind::CallCenter, Role::Morning), 3);
    assert_eq!(capacity_of(BranchKind::CallCenter, Role::Noon), 2);
    assert_eq!(capacity_of(BranchKind::CallCenter, Role::Evening), 3);
}

#[test]
#[should_panic(expected = "not part of the call-center grid")]
fn test_capacity_of_role_outside_grid_panics() {
    let _capacity: u8 = capacity_of(BranchKind::CallCenter, Role::Waiters);
}

#[test]
fn test_roles_for_each_kind() {
    assert_eq!(roles_for(BranchKind::Generic), &GENERIC_ROLES);
    assert_eq!(roles_for(BranchKind::CallCenter), &CALL_CENTER_ROLES);
}

#[test]
fn test_week_template_is_sunday_through_saturday() {
    assert_eq!(WEEK_DAYS.len(), 7);
    assert_eq!(WEEK_DAYS[0], (1, "ראשון"));
    assert_eq!(WEEK_DAYS[6], (7, "שבת"));
    assert_eq!(day_name(1), Some("ראשון"));
    assert_eq!(day_name(7), Some("שבת"));
    assert_eq!(day_name(8), None);
}

#[test]
fn test_validate_cell_accepts_every_enumerated_cell() {
    for kind in [BranchKind::Generic, BranchKind::CallCenter] {
        for (role, position) in cells_for(kind) {
            assert!(validate_cell(kind, role, position).is_ok());
        }
    }
}

#[test]
fn test_validate_cell_rejects_role_outside_grid() {
    let result: Result<(), DomainError> = validate_cell(BranchKind::Generic, Role::Morning, 1);

    assert_eq!(
        result,
        Err(DomainError::RoleNotInGrid {
            kind: BranchKind::Generic,
            role: Role::Morning,
        })
    );
}

#[test]
fn test_validate_cell_rejects_position_zero() {
    let result: Result<(), DomainError> = validate_cell(BranchKind::Generic, Role::Waiters, 0);

    assert!(matches!(
        result,
        Err(DomainError::PositionOutOfRange { position: 0, .. })
    ));
}

#[test]
fn test_validate_cell_rejects_position_beyond_capacity() {
    let result: Result<(), DomainError> = validate_cell(BranchKind::CallCenter, Role::Noon, 3);

    assert_eq!(
        result,
        Err(DomainError::PositionOutOfRange {
            role: Role::Noon,
            position: 3,
            capacity: 2,
        })
    );
}
