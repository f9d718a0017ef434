// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::SessionData;
use crate::tests::persistence_with_branch;

#[test]
fn test_create_and_fetch_session() {
    let (mut persistence, branch_id) = persistence_with_branch();

    persistence
        .create_session("token-abc", branch_id, "2026-09-01T00:00:00Z")
        .unwrap();

    let session: SessionData = persistence
        .get_session_by_token("token-abc")
        .unwrap()
        .unwrap();
    assert_eq!(session.branch_id, branch_id);
    assert_eq!(session.token, "token-abc");
    assert_eq!(session.expires_at, "2026-09-01T00:00:00Z");
}

#[test]
fn test_unknown_token_returns_none() {
    let (mut persistence, _branch_id) = persistence_with_branch();

    assert!(
        persistence
            .get_session_by_token("missing")
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_delete_session_is_idempotent() {
    let (mut persistence, branch_id) = persistence_with_branch();
    persistence
        .create_session("token-abc", branch_id, "2026-09-01T00:00:00Z")
        .unwrap();

    persistence.delete_session("token-abc").unwrap();
    persistence.delete_session("token-abc").unwrap();

    assert!(
        persistence
            .get_session_by_token("token-abc")
            .unwrap()
            .is_none()
    );
}
