// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::color::Color;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Classifies a branch by the grid layout its schedule uses.
///
/// Generic branches schedule by job title; call-center ("Moked") branches
/// schedule by time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BranchKind {
    /// A restaurant-style branch with job-title roles.
    #[default]
    Generic,
    /// A call-center branch with time-slot roles.
    CallCenter,
}

impl FromStr for BranchKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generic" => Ok(Self::Generic),
            "call-center" => Ok(Self::CallCenter),
            _ => Err(DomainError::InvalidBranchKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for BranchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl BranchKind {
    /// Converts this branch kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::CallCenter => "call-center",
        }
    }
}

/// Selects between the two independently persisted grids of a branch.
///
/// Each branch carries a `Current` schedule and a lazily created `Next`
/// schedule. The two never share structure; a week transition promotes
/// `Next` into `Current` and resets `Next` to the empty template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekSelector {
    /// The week currently in effect.
    #[default]
    Current,
    /// The staged week being prepared.
    Next,
}

impl FromStr for WeekSelector {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "current" => Ok(Self::Current),
            "next" => Ok(Self::Next),
            _ => Err(DomainError::InvalidWeek(s.to_string())),
        }
    }
}

impl std::fmt::Display for WeekSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl WeekSelector {
    /// Converts this week selector to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Next => "next",
        }
    }
}

/// A department tag carried by an employee.
///
/// Departments are fixed domain constants. Call-center employees carry no
/// departments; every other employee carries at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    /// Shift managers.
    Manager,
    /// Waiting staff.
    Waiters,
    /// Kitchen staff.
    Cooks,
}

impl Department {
    /// Parses a department from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known department.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "manager" => Ok(Self::Manager),
            "waiters" => Ok(Self::Waiters),
            "cooks" => Ok(Self::Cooks),
            _ => Err(DomainError::InvalidDepartment(s.to_string())),
        }
    }

    /// Returns the string representation of this department.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Waiters => "waiters",
            Self::Cooks => "cooks",
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An employee on a branch roster.
///
/// `employee_id` is the canonical internal identifier, assigned by the
/// persistence layer on first save. Names and colors are unique within a
/// branch; shifts reference employees by id only, so deleting an employee
/// leaves existing assignments in place as unresolvable references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Canonical internal identifier (`None` before first persistence).
    #[serde(rename = "id")]
    pub employee_id: Option<i64>,
    /// The branch this employee belongs to, by name.
    pub branch: String,
    /// The employee's display name (at least 2 characters, unique per branch).
    pub name: String,
    /// The employee's grid color (unique per branch, never too light).
    pub color: Color,
    /// Department tags. Empty for call-center employees.
    pub departments: Vec<Department>,
}

impl Employee {
    /// Creates a new `Employee` without a persisted id.
    #[must_use]
    pub const fn new(
        branch: String,
        name: String,
        color: Color,
        departments: Vec<Department>,
    ) -> Self {
        Self {
            employee_id: None,
            branch,
            name,
            color,
            departments,
        }
    }

    /// Creates an `Employee` with an existing persisted id.
    #[must_use]
    pub const fn with_id(
        employee_id: i64,
        branch: String,
        name: String,
        color: Color,
        departments: Vec<Department>,
    ) -> Self {
        Self {
            employee_id: Some(employee_id),
            branch,
            name,
            color,
            departments,
        }
    }
}
