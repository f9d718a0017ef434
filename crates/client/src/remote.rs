// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::SaveError;
use mishmeret_domain::{Schedule, WeekSelector};

/// The seam between the schedule store and the remote service.
///
/// Implementations serialize the schedule and PUT it to the server; tests
/// substitute an in-memory fake. The returned schedule is the server's
/// authoritative echo, which may differ from the input if the server
/// applied additional normalization.
pub trait ScheduleBackend {
    /// Persists the full `days` value for one (branch, week) as an atomic
    /// replace.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not authorized, the branch does
    /// not exist, or the save fails in transit.
    fn save_schedule(
        &self,
        branch_id: i64,
        week: WeekSelector,
        schedule: &Schedule,
    ) -> impl Future<Output = Result<Schedule, SaveError>>;
}
