// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::auth::{AuthenticatedActor, Role};
use mishmeret_audit::Cause;
use mishmeret_domain::BranchKind;
use mishmeret_persistence::Persistence;

/// Creates an in-memory persistence with an admin branch and two regular
/// branches (a generic restaurant and a call center).
///
/// Returns the adapter and the ids of (admin, restaurant, call center).
pub fn seeded_persistence() -> (Persistence, i64, i64, i64) {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let admin_id: i64 = persistence
        .create_branch("הנהלה", "admin", "Rakevet-99!", true, BranchKind::Generic)
        .unwrap();
    let restaurant_id: i64 = persistence
        .create_branch("תל אביב", "telaviv", "Sisma-1234!", false, BranchKind::Generic)
        .unwrap();
    let call_center_id: i64 = persistence
        .create_branch("מוקד", "moked", "Sisma-5678!", false, BranchKind::CallCenter)
        .unwrap();
    (persistence, admin_id, restaurant_id, call_center_id)
}

pub fn admin_actor(branch_id: i64) -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("admin"), branch_id, Role::Admin)
}

pub fn branch_actor(username: &str, branch_id: i64) -> AuthenticatedActor {
    AuthenticatedActor::new(String::from(username), branch_id, Role::Branch)
}

pub fn test_cause() -> Cause {
    Cause::new(String::from("req-1"), String::from("Test request"))
}
