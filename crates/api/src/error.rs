// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::password_policy::PasswordPolicyError;
use mishmeret::CoreError;
use mishmeret_domain::DomainError;
use mishmeret_persistence::PersistenceError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role}")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// Password policy violation.
    PasswordPolicyViolation {
        /// A human-readable description of the policy violation.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::PasswordPolicyViolation { message } => {
                write!(f, "Password policy violation: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::PasswordPolicyViolation {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::NameTooShort { name } => ApiError::InvalidInput {
            field: String::from("name"),
            message: format!("Name '{name}' is too short: at least 2 characters required"),
        },
        DomainError::DuplicateName { branch, name } => ApiError::DomainRuleViolation {
            rule: String::from("unique_name"),
            message: format!("An employee named '{name}' already exists in branch '{branch}'"),
        },
        DomainError::MissingColor => ApiError::InvalidInput {
            field: String::from("color"),
            message: String::from("A color is required"),
        },
        DomainError::DuplicateColor { branch, color } => ApiError::DomainRuleViolation {
            rule: String::from("unique_color"),
            message: format!("Color '{color}' is already used in branch '{branch}'"),
        },
        DomainError::ColorTooLight { color } => ApiError::InvalidInput {
            field: String::from("color"),
            message: format!("Color '{color}' is too light to read against the grid"),
        },
        DomainError::InvalidColor { color, reason } => ApiError::InvalidInput {
            field: String::from("color"),
            message: format!("Color '{color}' is not a valid hex color: {reason}"),
        },
        DomainError::MissingDepartment { name } => ApiError::InvalidInput {
            field: String::from("departments"),
            message: format!("Employee '{name}' needs at least one department"),
        },
        DomainError::InvalidDepartment(s) => ApiError::InvalidInput {
            field: String::from("departments"),
            message: format!("Unknown department: {s}"),
        },
        DomainError::InvalidRole(s) => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("Unknown role: {s}"),
        },
        DomainError::InvalidBranchKind(s) => ApiError::InvalidInput {
            field: String::from("kind"),
            message: format!("Unknown branch kind: {s}"),
        },
        DomainError::InvalidWeek(s) => ApiError::InvalidInput {
            field: String::from("week"),
            message: format!("Unknown week selector '{s}': expected 'current' or 'next'"),
        },
        DomainError::InvalidBranchName(s) => ApiError::InvalidInput {
            field: String::from("name"),
            message: format!("Invalid branch name: {s}"),
        },
        DomainError::RoleNotInGrid { kind, role } => ApiError::DomainRuleViolation {
            rule: String::from("grid_membership"),
            message: format!("Role '{role}' is not part of the {kind} grid"),
        },
        DomainError::PositionOutOfRange {
            role,
            position,
            capacity,
        } => ApiError::DomainRuleViolation {
            rule: String::from("grid_capacity"),
            message: format!(
                "Position {position} is out of range for role '{role}': capacity is {capacity}"
            ),
        },
        DomainError::BranchNotFound(name) => ApiError::ResourceNotFound {
            resource_type: String::from("Branch"),
            message: format!("Branch '{name}' does not exist"),
        },
        DomainError::EmployeeNotFound {
            branch,
            employee_id,
        } => ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message: format!("Employee {employee_id} not found in branch '{branch}'"),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a persistence error into an API error.
///
/// Not-found conditions map to `ResourceNotFound`; everything else is an
/// internal error from the caller's point of view.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::BranchNotFound(name) => ApiError::ResourceNotFound {
            resource_type: String::from("Branch"),
            message: format!("Branch '{name}' does not exist"),
        },
        PersistenceError::EmployeeNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message: format!("Employee {id} does not exist"),
        },
        PersistenceError::SessionNotFound(msg) => ApiError::AuthenticationFailed {
            reason: format!("Session not found: {msg}"),
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
