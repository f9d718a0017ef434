// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::color::Color;
use crate::error::DomainError;
use crate::types::{BranchKind, Department, Employee};
use crate::validation::{normalize_departments, validate_employee};

fn employee(name: &str, color: &str) -> Employee {
    Employee::new(
        String::from("תל אביב"),
        String::from(name),
        Color::new(color),
        vec![Department::Waiters],
    )
}

#[test]
fn test_valid_employee_passes() {
    let candidate: Employee = employee("דנה", "#2e7d32");

    assert!(validate_employee(BranchKind::Generic, &candidate, &[]).is_ok());
}

#[test]
fn test_name_shorter_than_two_chars_rejected() {
    let candidate: Employee = employee("ד", "#2e7d32");

    let result: Result<(), DomainError> = validate_employee(BranchKind::Generic, &candidate, &[]);

    assert_eq!(
        result,
        Err(DomainError::NameTooShort {
            name: String::from("ד"),
        })
    );
}

#[test]
fn test_duplicate_name_rejected() {
    let existing: Vec<Employee> = vec![Employee {
        employee_id: Some(1),
        ..employee("דנה", "#aa3355")
    }];
    let candidate: Employee = employee("דנה", "#2e7d32");

    let result: Result<(), DomainError> =
        validate_employee(BranchKind::Generic, &candidate, &existing);

    assert!(matches!(result, Err(DomainError::DuplicateName { .. })));
}

#[test]
fn test_missing_color_rejected() {
    let candidate: Employee = employee("דנה", "");

    let result: Result<(), DomainError> = validate_employee(BranchKind::Generic, &candidate, &[]);

    assert_eq!(result, Err(DomainError::MissingColor));
}

#[test]
fn test_duplicate_color_rejected_case_insensitively() {
    let existing: Vec<Employee> = vec![Employee {
        employee_id: Some(1),
        ..employee("יוסי", "#2E7D32")
    }];
    let candidate: Employee = employee("דנה", "#2e7d32");

    let result: Result<(), DomainError> =
        validate_employee(BranchKind::Generic, &candidate, &existing);

    assert!(matches!(result, Err(DomainError::DuplicateColor { .. })));
}

#[test]
fn test_near_white_color_rejected_as_too_light() {
    let candidate: Employee = employee("דנה", "#ffffff");

    let result: Result<(), DomainError> = validate_employee(BranchKind::Generic, &candidate, &[]);

    assert_eq!(
        result,
        Err(DomainError::ColorTooLight {
            color: String::from("#ffffff"),
        })
    );
}

#[test]
fn test_unparseable_color_rejected() {
    let candidate: Employee = employee("דנה", "#zzzzzz");

    let result: Result<(), DomainError> = validate_employee(BranchKind::Generic, &candidate, &[]);

    assert!(matches!(result, Err(DomainError::InvalidColor { .. })));
}

#[test]
fn test_generic_employee_without_departments_rejected() {
    let mut candidate: Employee = employee("דנה", "#2e7d32");
    candidate.departments.clear();

    let result: Result<(), DomainError> = validate_employee(BranchKind::Generic, &candidate, &[]);

    assert!(matches!(result, Err(DomainError::MissingDepartment { .. })));
}

#[test]
fn test_call_center_employee_without_departments_passes() {
    let mut candidate: Employee = employee("דנה", "#2e7d32");
    candidate.departments.clear();

    assert!(validate_employee(BranchKind::CallCenter, &candidate, &[]).is_ok());
}

#[test]
fn test_rule_order_name_length_beats_duplicate_color() {
    // An employee violating both the name rule and the color rule must fail
    // on the name first.
    let existing: Vec<Employee> = vec![Employee {
        employee_id: Some(1),
        ..employee("יוסי", "#2e7d32")
    }];
    let candidate: Employee = employee("ד", "#2e7d32");

    let result: Result<(), DomainError> =
        validate_employee(BranchKind::Generic, &candidate, &existing);

    assert!(matches!(result, Err(DomainError::NameTooShort { .. })));
}

#[test]
fn test_update_excludes_own_row_from_uniqueness() {
    let existing: Vec<Employee> = vec![Employee {
        employee_id: Some(1),
        ..employee("דנה", "#2e7d32")
    }];
    let candidate: Employee = Employee {
        employee_id: Some(1),
        ..employee("דנה", "#2e7d32")
    };

    assert!(validate_employee(BranchKind::Generic, &candidate, &existing).is_ok());
}

#[test]
fn test_luminance_boundaries() {
    assert!(Color::new("#000000").luminance().unwrap() < f64::EPSILON);
    assert!((Color::new("#ffffff").luminance().unwrap() - 1.0).abs() < 1e-9);
    // Pure green is bright but still below the ceiling.
    assert!(Color::new("#00ff00").luminance().unwrap() < 0.8);
}

#[test]
fn test_normalize_departments_for_call_center_is_empty() {
    let normalized: Vec<Department> = normalize_departments(
        BranchKind::CallCenter,
        vec![Department::Manager, Department::Cooks],
    );

    assert!(normalized.is_empty());
}

#[test]
fn test_normalize_departments_deduplicates_preserving_order() {
    let normalized: Vec<Department> = normalize_departments(
        BranchKind::Generic,
        vec![Department::Cooks, Department::Manager, Department::Cooks],
    );

    assert_eq!(normalized, vec![Department::Cooks, Department::Manager]);
}
