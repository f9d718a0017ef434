// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod audit_tests;
mod branch_tests;
mod employee_tests;
mod session_tests;

use crate::Persistence;
use mishmeret_domain::BranchKind;

/// Creates an isolated in-memory persistence with one generic branch.
///
/// Returns the adapter and the branch id.
pub fn persistence_with_branch() -> (Persistence, i64) {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let branch_id: i64 = persistence
        .create_branch("תל אביב", "telaviv", "sisma-1234", false, BranchKind::Generic)
        .unwrap();
    (persistence, branch_id)
}
