// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{BranchKind, Department, Employee};

/// The luminance ceiling for employee colors.
///
/// Colors whose perceptual luminance exceeds this value are unreadable
/// against the light grid background and are rejected.
pub const COLOR_LUMINANCE_MAX: f64 = 0.8;

/// Validates an employee against the branch roster before create or update.
///
/// Rules run in a fixed order and the first failure wins:
/// 1. name at least 2 characters
/// 2. name unique within the branch
/// 3. color present
/// 4. color unique within the branch
/// 5. color not too light
/// 6. at least one department, unless the branch is a call center
///
/// On update, the candidate's own row (matched by `employee_id`) is excluded
/// from the uniqueness checks.
///
/// This function is pure and has no side effects; eligibility of an employee
/// for a particular role is deliberately NOT checked here (see the
/// `eligibility` module).
///
/// # Errors
///
/// Returns the first violated rule's error.
pub fn validate_employee(
    kind: BranchKind,
    candidate: &Employee,
    existing: &[Employee],
) -> Result<(), DomainError> {
    let others = || {
        existing.iter().filter(|employee| {
            candidate.employee_id.is_none() || employee.employee_id != candidate.employee_id
        })
    };

    if candidate.name.chars().count() < 2 {
        return Err(DomainError::NameTooShort {
            name: candidate.name.clone(),
        });
    }

    if others().any(|employee| employee.name == candidate.name) {
        return Err(DomainError::DuplicateName {
            branch: candidate.branch.clone(),
            name: candidate.name.clone(),
        });
    }

    if candidate.color.is_empty() {
        return Err(DomainError::MissingColor);
    }

    if others().any(|employee| employee.color == candidate.color) {
        return Err(DomainError::DuplicateColor {
            branch: candidate.branch.clone(),
            color: candidate.color.value().to_string(),
        });
    }

    if candidate.color.luminance()? > COLOR_LUMINANCE_MAX {
        return Err(DomainError::ColorTooLight {
            color: candidate.color.value().to_string(),
        });
    }

    if kind != BranchKind::CallCenter && candidate.departments.is_empty() {
        return Err(DomainError::MissingDepartment {
            name: candidate.name.clone(),
        });
    }

    Ok(())
}

/// Normalizes an employee's department list for a branch kind.
///
/// Call-center employees carry no departments regardless of input; other
/// branches keep the list as given (deduplicated, input order preserved).
#[must_use]
pub fn normalize_departments(kind: BranchKind, departments: Vec<Department>) -> Vec<Department> {
    if kind == BranchKind::CallCenter {
        return Vec::new();
    }
    let mut seen: Vec<Department> = Vec::with_capacity(departments.len());
    for department in departments {
        if !seen.contains(&department) {
            seen.push(department);
        }
    }
    seen
}
