// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use mishmeret_domain::DomainError;

/// Errors a remote save can fail with.
///
/// These mirror what the server surfaces; the store treats them all the
/// same way (roll back, report) but callers react differently: an
/// `Unauthorized` clears the session, a `Transient` offers a manual retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    /// The session may not mutate this branch's schedule.
    Unauthorized {
        /// A user-displayable reason.
        reason: String,
    },
    /// The branch or schedule does not exist.
    NotFound {
        /// A user-displayable message.
        message: String,
    },
    /// A network or database failure; retrying manually may succeed.
    Transient {
        /// A user-displayable message.
        message: String,
    },
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized { reason } => write!(f, "Unauthorized: {reason}"),
            Self::NotFound { message } => write!(f, "Not found: {message}"),
            Self::Transient { message } => write!(f, "Save failed: {message}"),
        }
    }
}

impl std::error::Error for SaveError {}

/// Errors surfaced by the schedule store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The edit violated a domain rule before any network call.
    DomainViolation(DomainError),
    /// The remote save failed; local state has been rolled back.
    SaveFailed(SaveError),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::SaveFailed(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<DomainError> for ClientError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<SaveError> for ClientError {
    fn from(err: SaveError) -> Self {
        Self::SaveFailed(err)
    }
}
