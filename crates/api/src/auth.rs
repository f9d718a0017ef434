// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use time::{Duration, OffsetDateTime};
use time::format_description::well_known::Iso8601;
use tracing::debug;

use crate::error::AuthError;
use mishmeret_audit::Actor;
use mishmeret_persistence::{BranchData, Persistence, PersistenceError, SessionData};

/// Actor roles for authorization.
///
/// Roles determine what actions an authenticated session may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Admin role: head-office sessions with cross-branch authority.
    ///
    /// Admins may create branches, edit any branch's roster and schedule,
    /// trigger week transitions, and read any audit trail.
    Admin,
    /// Branch role: a session acting for a single branch.
    ///
    /// Branch sessions may edit their own roster and schedule and read
    /// their own audit trail. They may view other branches' schedules but
    /// never mutate them.
    Branch,
}

/// An authenticated actor bound to a branch session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The login username this session authenticated as.
    pub id: String,
    /// The branch this session belongs to.
    pub branch_id: i64,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    #[must_use]
    pub const fn new(id: String, branch_id: i64, role: Role) -> Self {
        Self {
            id,
            branch_id,
            role,
        }
    }

    /// Converts this authenticated actor into an audit Actor.
    #[must_use]
    pub fn to_audit_actor(&self) -> Actor {
        let actor_type: String = match self.role {
            Role::Admin => String::from("admin"),
            Role::Branch => String::from("branch"),
        };
        Actor::new(self.id.clone(), actor_type)
    }
}

/// Authorization service for enforcing role-based access control.
///
/// Schedule and roster mutations are allowed to an admin or to the branch
/// that owns the target; cross-branch structural operations are admin-only.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if an actor may replace a branch's schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is neither an admin nor the owning
    /// branch.
    pub fn authorize_save_schedule(
        actor: &AuthenticatedActor,
        branch_id: i64,
    ) -> Result<(), AuthError> {
        if actor.role == Role::Admin || actor.branch_id == branch_id {
            return Ok(());
        }
        Err(AuthError::Unauthorized {
            action: String::from("save_schedule"),
            required_role: String::from("Admin or owning branch"),
        })
    }

    /// Checks if an actor may edit a branch's roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is neither an admin nor the owning
    /// branch.
    pub fn authorize_manage_roster(
        actor: &AuthenticatedActor,
        branch_id: i64,
    ) -> Result<(), AuthError> {
        if actor.role == Role::Admin || actor.branch_id == branch_id {
            return Ok(());
        }
        Err(AuthError::Unauthorized {
            action: String::from("manage_roster"),
            required_role: String::from("Admin or owning branch"),
        })
    }

    /// Checks if an actor may read a branch's audit trail.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is neither an admin nor the owning
    /// branch.
    pub fn authorize_read_audit(
        actor: &AuthenticatedActor,
        branch_id: i64,
    ) -> Result<(), AuthError> {
        if actor.role == Role::Admin || actor.branch_id == branch_id {
            return Ok(());
        }
        Err(AuthError::Unauthorized {
            action: String::from("read_audit"),
            required_role: String::from("Admin or owning branch"),
        })
    }

    /// Checks if an actor may promote a branch's next week.
    ///
    /// Only admins may trigger week transitions.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not an admin.
    pub fn authorize_transition_week(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Branch => Err(AuthError::Unauthorized {
                action: String::from("transition_week"),
                required_role: String::from("Admin"),
            }),
        }
    }

    /// Checks if an actor may create a branch.
    ///
    /// Only admins may create branches.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not an admin.
    pub fn authorize_create_branch(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Branch => Err(AuthError::Unauthorized {
                action: String::from("create_branch"),
                required_role: String::from("Admin"),
            }),
        }
    }
}

/// Authentication service for session-based authentication.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Default session expiration duration (30 days).
    const DEFAULT_SESSION_EXPIRATION: Duration = Duration::days(30);

    /// Authenticates a branch and creates a session.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `username` - The branch login name
    /// * `password` - The plain-text password
    ///
    /// # Returns
    ///
    /// A tuple of (`session_token`, `authenticated_actor`, `branch_data`)
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are invalid.
    pub fn login(
        persistence: &mut Persistence,
        username: &str,
        password: &str,
    ) -> Result<(String, AuthenticatedActor, BranchData), AuthError> {
        let branch: BranchData = persistence
            .verify_branch_password(username, password)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Unknown username or wrong password"),
            })?;

        let session_token: String = Self::generate_session_token();

        let expires_at: OffsetDateTime =
            OffsetDateTime::now_utc() + Self::DEFAULT_SESSION_EXPIRATION;
        let expires_at_str: String = expires_at.format(&Iso8601::DEFAULT).map_err(|e| {
            AuthError::AuthenticationFailed {
                reason: format!("Failed to format expiration time: {e}"),
            }
        })?;

        persistence
            .create_session(&session_token, branch.branch_id, &expires_at_str)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to create session: {e}"),
            })?;

        let actor: AuthenticatedActor = Self::actor_for(&branch);
        debug!(username = %branch.username, role = ?actor.role, "Login succeeded");

        Ok((session_token, actor, branch))
    }

    /// Validates a session token and returns the authenticated actor.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unknown, expired, or its branch
    /// no longer exists.
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
    ) -> Result<(AuthenticatedActor, BranchData), AuthError> {
        let session: SessionData = persistence
            .get_session_by_token(session_token)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        let expires_at: OffsetDateTime =
            OffsetDateTime::parse(&session.expires_at, &Iso8601::DEFAULT).map_err(|e| {
                AuthError::AuthenticationFailed {
                    reason: format!("Failed to parse session expiration: {e}"),
                }
            })?;

        if OffsetDateTime::now_utc() > expires_at {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        let branch: BranchData = persistence
            .get_branch_by_id(session.branch_id)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Branch no longer exists"),
            })?;

        Ok((Self::actor_for(&branch), branch))
    }

    /// Logs out by deleting the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the logout fails.
    pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to delete session: {e}"),
            })?;

        Ok(())
    }

    fn actor_for(branch: &BranchData) -> AuthenticatedActor {
        let role: Role = if branch.is_admin {
            Role::Admin
        } else {
            Role::Branch
        };
        AuthenticatedActor::new(branch.username.clone(), branch.branch_id, role)
    }

    /// Generates a session token.
    ///
    /// In a production system, this would use a cryptographically secure
    /// random number generator. For simplicity, we use a timestamp-based
    /// approach here.
    fn generate_session_token() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let timestamp: u128 = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_nanos();
        format!("session_{timestamp}_{}", rand::random::<u64>())
    }

    /// Maps persistence errors to authentication errors.
    fn map_persistence_error(err: PersistenceError) -> AuthError {
        AuthError::AuthenticationFailed {
            reason: format!("Database error: {err}"),
        }
    }
}
