// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::persistence_with_branch;
use crate::{BranchData, Persistence, PersistenceError};
use mishmeret_domain::BranchKind;

#[test]
fn test_create_branch_and_fetch_by_name() {
    let (mut persistence, branch_id) = persistence_with_branch();

    let branch: BranchData = persistence.get_branch_by_name("תל אביב").unwrap().unwrap();

    assert_eq!(branch.branch_id, branch_id);
    assert_eq!(branch.name, "תל אביב");
    assert_eq!(branch.username, "telaviv");
    assert!(!branch.is_admin);
    assert_eq!(branch.kind, "generic");
    assert_eq!(branch.last_schedule_transition, None);
}

#[test]
fn test_fetch_by_id_matches_fetch_by_name() {
    let (mut persistence, branch_id) = persistence_with_branch();

    let by_id: BranchData = persistence.get_branch_by_id(branch_id).unwrap().unwrap();
    let by_name: BranchData = persistence.get_branch_by_name("תל אביב").unwrap().unwrap();

    assert_eq!(by_id, by_name);
}

#[test]
fn test_unknown_branch_returns_none() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    assert!(persistence.get_branch_by_name("חיפה").unwrap().is_none());
    assert!(persistence.get_branch_by_id(42).unwrap().is_none());
}

#[test]
fn test_duplicate_branch_name_rejected() {
    let (mut persistence, _branch_id) = persistence_with_branch();

    let result: Result<i64, PersistenceError> = persistence.create_branch(
        "תל אביב",
        "other",
        "sisma-1234",
        false,
        BranchKind::Generic,
    );

    assert!(matches!(result, Err(PersistenceError::DatabaseError(_))));
}

#[test]
fn test_verify_password_accepts_correct_credentials() {
    let (mut persistence, branch_id) = persistence_with_branch();

    let branch: BranchData = persistence
        .verify_branch_password("telaviv", "sisma-1234")
        .unwrap()
        .unwrap();

    assert_eq!(branch.branch_id, branch_id);
}

#[test]
fn test_verify_password_rejects_wrong_password_and_unknown_user() {
    let (mut persistence, _branch_id) = persistence_with_branch();

    assert!(
        persistence
            .verify_branch_password("telaviv", "wrong")
            .unwrap()
            .is_none()
    );
    assert!(
        persistence
            .verify_branch_password("nobody", "sisma-1234")
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_update_password_invalidates_old_one() {
    let (mut persistence, branch_id) = persistence_with_branch();

    persistence
        .update_branch_password(branch_id, "sisma-5678")
        .unwrap();

    assert!(
        persistence
            .verify_branch_password("telaviv", "sisma-1234")
            .unwrap()
            .is_none()
    );
    assert!(
        persistence
            .verify_branch_password("telaviv", "sisma-5678")
            .unwrap()
            .is_some()
    );
}

#[test]
fn test_create_admin_call_center_branch() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let branch_id: i64 = persistence
        .create_branch("מוקד", "moked", "sisma-1234", true, BranchKind::CallCenter)
        .unwrap();

    let branch: BranchData = persistence.get_branch_by_id(branch_id).unwrap().unwrap();

    assert!(branch.is_admin);
    assert_eq!(branch.kind, "call-center");
}
