// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::grid::Role;
use crate::types::BranchKind;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Employee name is shorter than 2 characters.
    NameTooShort {
        /// The rejected name.
        name: String,
    },
    /// Employee name already exists within the branch.
    DuplicateName {
        /// The branch in which the duplicate was found.
        branch: String,
        /// The duplicate name.
        name: String,
    },
    /// Employee color is missing.
    MissingColor,
    /// Employee color already exists within the branch.
    DuplicateColor {
        /// The branch in which the duplicate was found.
        branch: String,
        /// The duplicate color value.
        color: String,
    },
    /// Employee color is above the luminance threshold.
    ColorTooLight {
        /// The rejected color value.
        color: String,
    },
    /// Employee color is not a parseable hex color.
    InvalidColor {
        /// The rejected color value.
        color: String,
        /// Why parsing failed.
        reason: String,
    },
    /// A non-call-center employee has no departments.
    MissingDepartment {
        /// The employee's name.
        name: String,
    },
    /// Department string is not a known department.
    InvalidDepartment(String),
    /// Role string is not a known role.
    InvalidRole(String),
    /// Branch kind string is not a known kind.
    InvalidBranchKind(String),
    /// Week selector string is not `current` or `next`.
    InvalidWeek(String),
    /// Branch name is empty or invalid.
    InvalidBranchName(String),
    /// The role is not part of the branch kind's grid.
    RoleNotInGrid {
        /// The branch kind whose grid was addressed.
        kind: BranchKind,
        /// The role outside that grid.
        role: Role,
    },
    /// The position is outside the role's capacity.
    PositionOutOfRange {
        /// The addressed role.
        role: Role,
        /// The rejected position.
        position: u8,
        /// The role's capacity.
        capacity: u8,
    },
    /// Branch does not exist.
    BranchNotFound(String),
    /// Employee does not exist within the branch.
    EmployeeNotFound {
        /// The branch that was searched.
        branch: String,
        /// The missing employee id.
        employee_id: i64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameTooShort { name } => {
                write!(f, "Name '{name}' is too short: at least 2 characters required")
            }
            Self::DuplicateName { branch, name } => {
                write!(f, "An employee named '{name}' already exists in branch '{branch}'")
            }
            Self::MissingColor => write!(f, "A color is required"),
            Self::DuplicateColor { branch, color } => {
                write!(f, "Color '{color}' is already used in branch '{branch}'")
            }
            Self::ColorTooLight { color } => {
                write!(f, "Color '{color}' is too light to read against the grid")
            }
            Self::InvalidColor { color, reason } => {
                write!(f, "Color '{color}' is not a valid hex color: {reason}")
            }
            Self::MissingDepartment { name } => {
                write!(f, "Employee '{name}' needs at least one department")
            }
            Self::InvalidDepartment(s) => write!(f, "Unknown department: {s}"),
            Self::InvalidRole(s) => write!(f, "Unknown role: {s}"),
            Self::InvalidBranchKind(s) => write!(f, "Unknown branch kind: {s}"),
            Self::InvalidWeek(s) => {
                write!(f, "Unknown week selector '{s}': expected 'current' or 'next'")
            }
            Self::InvalidBranchName(s) => write!(f, "Invalid branch name: {s}"),
            Self::RoleNotInGrid { kind, role } => {
                write!(f, "Role '{role}' is not part of the {kind} grid")
            }
            Self::PositionOutOfRange {
                role,
                position,
                capacity,
            } => {
                write!(
                    f,
                    "Position {position} is out of range for role '{role}': capacity is {capacity}"
                )
            }
            Self::BranchNotFound(name) => write!(f, "Branch '{name}' not found"),
            Self::EmployeeNotFound {
                branch,
                employee_id,
            } => {
                write!(f, "Employee {employee_id} not found in branch '{branch}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
