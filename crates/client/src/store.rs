// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ClientError;
use crate::remote::ScheduleBackend;
use mishmeret_domain::{BranchKind, Role, Schedule, WeekSelector, validate_cell};
use tracing::{debug, warn};

/// The client-side state container for one (branch, week) schedule.
///
/// A store is created from a fetched schedule and injected into UI
/// handlers. All edits go through [`ScheduleStore::update_optimistic`]:
/// the new value is applied locally before the network call resolves, and
/// restored from a snapshot when the save fails, so the UI can always
/// render `schedule()` as consistent state.
///
/// Edits from one session are serialized by the `&mut self` receiver.
/// Each save is tagged with a revision; an echo or rollback belonging to a
/// superseded revision is discarded instead of clobbering newer local
/// state.
#[derive(Debug)]
pub struct ScheduleStore {
    branch_id: i64,
    kind: BranchKind,
    week: WeekSelector,
    schedule: Schedule,
    revision: u64,
}

impl ScheduleStore {
    /// Creates a store over a schedule fetched from the server.
    #[must_use]
    pub const fn new(
        branch_id: i64,
        kind: BranchKind,
        week: WeekSelector,
        schedule: Schedule,
    ) -> Self {
        Self {
            branch_id,
            kind,
            week,
            schedule,
            revision: 0,
        }
    }

    /// Returns the current local schedule.
    #[must_use]
    pub const fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Returns the week variant this store is bound to.
    #[must_use]
    pub const fn week(&self) -> WeekSelector {
        self.week
    }

    /// Replaces local state with a freshly fetched schedule.
    ///
    /// Used on navigation. Bumps the revision so any still-in-flight save
    /// can no longer adopt its echo over the fresh data.
    pub fn replace(&mut self, schedule: Schedule) {
        self.schedule = schedule;
        self.revision += 1;
    }

    /// Applies a schedule value optimistically and persists it.
    ///
    /// The new value becomes visible to `schedule()` immediately. On
    /// success the server's authoritative echo is adopted and returned; on
    /// failure local state is restored to the exact pre-call value (full
    /// replace, not a merge) and the error is returned for the UI to
    /// surface.
    ///
    /// # Errors
    ///
    /// Returns the save error after rolling local state back.
    pub async fn update_optimistic<B: ScheduleBackend>(
        &mut self,
        backend: &B,
        schedule: Schedule,
    ) -> Result<Schedule, ClientError> {
        let original: Schedule = self.schedule.clone();
        self.revision += 1;
        let revision: u64 = self.revision;
        self.schedule = schedule.clone();

        match backend
            .save_schedule(self.branch_id, self.week, &schedule)
            .await
        {
            Ok(echo) => {
                if self.revision == revision {
                    self.schedule = echo.clone();
                } else {
                    debug!(revision, "Discarding stale save echo");
                }
                Ok(echo)
            }
            Err(err) => {
                warn!(error = %err, "Schedule save failed, rolling back");
                if self.revision == revision {
                    self.schedule = original;
                }
                Err(ClientError::SaveFailed(err))
            }
        }
    }

    /// Places, overwrites, or clears one cell and persists the result.
    ///
    /// Passing `None` clears the cell; this is also the trash-drop path,
    /// which never attempts a reciprocal placement.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is invalid for the branch kind (before
    /// any network call), or if the save fails (after rollback).
    pub async fn assign<B: ScheduleBackend>(
        &mut self,
        backend: &B,
        day: &str,
        role: Role,
        position: u8,
        employee_id: Option<i64>,
    ) -> Result<Schedule, ClientError> {
        validate_cell(self.kind, role, position)?;

        let mut next: Schedule = self.schedule.clone();
        next.assign(day, role, position, employee_id);
        self.update_optimistic(backend, next).await
    }

    /// Moves an employee between two cells as one local transition.
    ///
    /// The clear and the placement are combined into a single schedule
    /// value before anything is applied, so the UI never renders a
    /// doubly-placed or missing employee, and a failed save rolls both
    /// halves back together.
    ///
    /// # Errors
    ///
    /// Returns an error if either cell is invalid for the branch kind, or
    /// if the save fails (after rollback of the whole move).
    #[allow(clippy::too_many_arguments)]
    pub async fn move_assignment<B: ScheduleBackend>(
        &mut self,
        backend: &B,
        from_day: &str,
        from_role: Role,
        from_position: u8,
        to_day: &str,
        to_role: Role,
        to_position: u8,
        employee_id: i64,
    ) -> Result<Schedule, ClientError> {
        validate_cell(self.kind, from_role, from_position)?;
        validate_cell(self.kind, to_role, to_position)?;

        let mut next: Schedule = self.schedule.clone();
        next.assign(from_day, from_role, from_position, None);
        next.assign(to_day, to_role, to_position, Some(employee_id));
        self.update_optimistic(backend, next).await
    }
}
