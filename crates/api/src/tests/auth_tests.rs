// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::auth::{AuthenticatedActor, AuthenticationService, AuthorizationService, Role};
use crate::error::AuthError;
use crate::password_policy::{PasswordPolicy, PasswordPolicyError};
use crate::tests::helpers::{branch_actor, seeded_persistence};
use mishmeret_persistence::BranchData;

#[test]
fn test_login_with_valid_credentials_creates_session() {
    let (mut persistence, _admin, restaurant_id, _moked) = seeded_persistence();

    let (token, actor, branch) =
        AuthenticationService::login(&mut persistence, "telaviv", "Sisma-1234!").unwrap();

    assert!(!token.is_empty());
    assert_eq!(actor.role, Role::Branch);
    assert_eq!(actor.branch_id, restaurant_id);
    assert_eq!(branch.name, "תל אביב");
}

#[test]
fn test_login_with_wrong_password_fails() {
    let (mut persistence, _admin, _restaurant, _moked) = seeded_persistence();

    let result = AuthenticationService::login(&mut persistence, "telaviv", "wrong");

    assert!(matches!(
        result,
        Err(AuthError::AuthenticationFailed { .. })
    ));
}

#[test]
fn test_admin_branch_logs_in_with_admin_role() {
    let (mut persistence, admin_id, _restaurant, _moked) = seeded_persistence();

    let (_token, actor, _branch) =
        AuthenticationService::login(&mut persistence, "admin", "Rakevet-99!").unwrap();

    assert_eq!(actor.role, Role::Admin);
    assert_eq!(actor.branch_id, admin_id);
}

#[test]
fn test_validate_session_round_trips_actor() {
    let (mut persistence, _admin, restaurant_id, _moked) = seeded_persistence();
    let (token, _actor, _branch) =
        AuthenticationService::login(&mut persistence, "telaviv", "Sisma-1234!").unwrap();

    let (actor, branch): (AuthenticatedActor, BranchData) =
        AuthenticationService::validate_session(&mut persistence, &token).unwrap();

    assert_eq!(actor.branch_id, restaurant_id);
    assert_eq!(branch.username, "telaviv");
}

#[test]
fn test_validate_unknown_token_fails() {
    let (mut persistence, _admin, _restaurant, _moked) = seeded_persistence();

    let result = AuthenticationService::validate_session(&mut persistence, "bogus");

    assert!(matches!(
        result,
        Err(AuthError::AuthenticationFailed { .. })
    ));
}

#[test]
fn test_expired_session_rejected() {
    let (mut persistence, _admin, restaurant_id, _moked) = seeded_persistence();
    persistence
        .create_session("old-token", restaurant_id, "2020-01-01T00:00:00Z")
        .unwrap();

    let result = AuthenticationService::validate_session(&mut persistence, "old-token");

    assert!(matches!(
        result,
        Err(AuthError::AuthenticationFailed { .. })
    ));
}

#[test]
fn test_logout_invalidates_session() {
    let (mut persistence, _admin, _restaurant, _moked) = seeded_persistence();
    let (token, _actor, _branch) =
        AuthenticationService::login(&mut persistence, "telaviv", "Sisma-1234!").unwrap();

    AuthenticationService::logout(&mut persistence, &token).unwrap();

    assert!(AuthenticationService::validate_session(&mut persistence, &token).is_err());
}

#[test]
fn test_branch_may_save_own_schedule_only() {
    let actor = branch_actor("telaviv", 2);

    assert!(AuthorizationService::authorize_save_schedule(&actor, 2).is_ok());
    assert!(matches!(
        AuthorizationService::authorize_save_schedule(&actor, 3),
        Err(AuthError::Unauthorized { .. })
    ));
}

#[test]
fn test_admin_may_save_any_schedule() {
    let actor = AuthenticatedActor::new(String::from("admin"), 1, Role::Admin);

    assert!(AuthorizationService::authorize_save_schedule(&actor, 2).is_ok());
    assert!(AuthorizationService::authorize_save_schedule(&actor, 3).is_ok());
}

#[test]
fn test_transition_week_is_admin_only() {
    let branch = branch_actor("telaviv", 2);
    let admin = AuthenticatedActor::new(String::from("admin"), 1, Role::Admin);

    assert!(AuthorizationService::authorize_transition_week(&admin).is_ok());
    assert!(matches!(
        AuthorizationService::authorize_transition_week(&branch),
        Err(AuthError::Unauthorized { .. })
    ));
}

#[test]
fn test_password_policy_enforces_length_complexity_and_username() {
    let policy: PasswordPolicy = PasswordPolicy::default();

    assert_eq!(
        policy.validate("Ab1!", "Ab1!", "telaviv"),
        Err(PasswordPolicyError::TooShort { min_length: 10 })
    );
    assert_eq!(
        policy.validate("abcdefghijk", "abcdefghijk", "telaviv"),
        Err(PasswordPolicyError::InsufficientComplexity {
            required: 3,
            found: 1,
        })
    );
    assert_eq!(
        policy.validate("Sisma-1234!", "Sisma-9999!", "telaviv"),
        Err(PasswordPolicyError::ConfirmationMismatch)
    );
    assert!(policy.validate("Sisma-1234!", "Sisma-1234!", "telaviv").is_ok());
}
