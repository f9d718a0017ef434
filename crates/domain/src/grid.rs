// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The fixed addressable space of a week.
//!
//! A schedule grid is 7 days by a kind-specific role set, each role with a
//! fixed number of 1-based positions. The capacity table here is the single
//! authority; validation, persistence, and the HTTP surface all consult it.

use crate::error::DomainError;
use crate::types::BranchKind;
use serde::{Deserialize, Serialize};

/// A grid role key.
///
/// Generic branches use job-title roles; call-center branches use time-slot
/// roles. A role is only meaningful within the grid of the kind it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Shift manager (generic grid).
    Manager,
    /// Waiting staff (generic grid).
    Waiters,
    /// Kitchen staff (generic grid).
    Cooks,
    /// Apprentice cooks (generic grid).
    Apprentices,
    /// Morning time slot (call-center grid).
    Morning,
    /// Noon time slot (call-center grid).
    Noon,
    /// Evening time slot (call-center grid).
    Evening,
}

impl Role {
    /// Parses a role from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known role.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "manager" => Ok(Self::Manager),
            "waiters" => Ok(Self::Waiters),
            "cooks" => Ok(Self::Cooks),
            "apprentices" => Ok(Self::Apprentices),
            "morning" => Ok(Self::Morning),
            "noon" => Ok(Self::Noon),
            "evening" => Ok(Self::Evening),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }

    /// Returns the string representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Waiters => "waiters",
            Self::Cooks => "cooks",
            Self::Apprentices => "apprentices",
            Self::Morning => "morning",
            Self::Noon => "noon",
            Self::Evening => "evening",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The roles of the generic branch grid, in display order.
pub const GENERIC_ROLES: [Role; 4] = [Role::Manager, Role::Waiters, Role::Cooks, Role::Apprentices];

/// The roles of the call-center ("Moked") grid, in display order.
pub const CALL_CENTER_ROLES: [Role; 3] = [Role::Morning, Role::Noon, Role::Evening];

/// The fixed day template: `day_id` 1..=7 with Hebrew names, Sunday first.
///
/// Every schedule carries exactly these days in exactly this order.
pub const WEEK_DAYS: [(u8, &str); 7] = [
    (1, "ראשון"),
    (2, "שני"),
    (3, "שלישי"),
    (4, "רביעי"),
    (5, "חמישי"),
    (6, "שישי"),
    (7, "שבת"),
];

/// Returns the fixed name for a `day_id`, if it is in 1..=7.
#[must_use]
pub fn day_name(day_id: u8) -> Option<&'static str> {
    WEEK_DAYS
        .iter()
        .find(|(id, _)| *id == day_id)
        .map(|(_, name)| *name)
}

/// Returns the role set for a branch kind, in display order.
#[must_use]
pub const fn roles_for(kind: BranchKind) -> &'static [Role] {
    match kind {
        BranchKind::Generic => &GENERIC_ROLES,
        BranchKind::CallCenter => &CALL_CENTER_ROLES,
    }
}

/// Returns the number of positions a role has within a kind's grid.
///
/// # Panics
///
/// Panics if `role` is not part of the kind's role set. Callers that handle
/// untrusted input must check membership first (see
/// [`validate_cell`]); reaching this panic is a programming error, not a
/// runtime user error.
#[must_use]
pub fn capacity_of(kind: BranchKind, role: Role) -> u8 {
    match (kind, role) {
        (BranchKind::Generic, Role::Manager) => 1,
        (BranchKind::Generic, Role::Waiters) => 6,
        (BranchKind::Generic, Role::Cooks) => 4,
        (BranchKind::Generic, Role::Apprentices) => 3,
        (BranchKind::CallCenter, Role::Morning | Role::Evening) => 3,
        (BranchKind::CallCenter, Role::Noon) => 2,
        _ => panic!("role '{role}' is not part of the {kind} grid"),
    }
}

/// Enumerates every valid (role, position) cell of a kind's grid.
///
/// Cells are ordered role-major in display order, positions ascending from 1.
#[must_use]
pub fn cells_for(kind: BranchKind) -> Vec<(Role, u8)> {
    roles_for(kind)
        .iter()
        .flat_map(|role| (1..=capacity_of(kind, *role)).map(|position| (*role, position)))
        .collect()
}

/// Validates that (role, position) addresses a cell of the kind's grid.
///
/// This is the runtime boundary check for untrusted input; unlike
/// [`capacity_of`] it reports out-of-set roles as errors instead of
/// panicking.
///
/// # Errors
///
/// Returns an error if the role is not in the kind's role set, or the
/// position is zero or beyond the role's capacity.
pub fn validate_cell(kind: BranchKind, role: Role, position: u8) -> Result<(), DomainError> {
    if !roles_for(kind).contains(&role) {
        return Err(DomainError::RoleNotInGrid { kind, role });
    }
    let capacity: u8 = capacity_of(kind, role);
    if position == 0 || position > capacity {
        return Err(DomainError::PositionOutOfRange {
            role,
            position,
            capacity,
        });
    }
    Ok(())
}
