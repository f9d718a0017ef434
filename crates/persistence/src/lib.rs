// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Mishmeret shift board.
//!
//! This crate provides `SQLite` persistence (via Diesel with embedded
//! migrations) for branches, rosters, schedule documents, sessions, and
//! audit events.
//!
//! Schedule documents are stored whole: one row per (branch, week) with the
//! full `days` array as JSON, replaced atomically on every save. There is
//! deliberately no version or etag column; concurrent saves resolve as
//! last-writer-wins.
//!
//! In-memory databases are named from an atomic counter so each test gets
//! an isolated instance without time-based collisions.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;
use time::format_description::well_known::Iso8601;
use tracing::{info, warn};

use mishmeret_audit::AuditEvent;
use mishmeret_domain::{BranchKind, Employee, Schedule, WeekSelector};

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::{AuditEventRecord, BranchData, SessionData};
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter over a single `SQLite` connection.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via an atomic counter,
    /// ensuring deterministic test isolation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        Ok(Self { conn })
    }

    /// Creates a persistence adapter backed by a database file.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated.
    pub fn new_with_database_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let url: String = path.as_ref().to_string_lossy().into_owned();
        let conn: SqliteConnection = sqlite::initialize_database(&url)?;
        Ok(Self { conn })
    }

    // ---- branches -------------------------------------------------------

    /// Creates a branch together with its empty current-week schedule.
    ///
    /// The next-week schedule is NOT created here; it materializes lazily
    /// on first access.
    ///
    /// # Errors
    ///
    /// Returns an error if the branch name or username is already taken.
    pub fn create_branch(
        &mut self,
        name: &str,
        username: &str,
        password: &str,
        is_admin: bool,
        kind: BranchKind,
    ) -> Result<i64, PersistenceError> {
        let branch_id: i64 =
            mutations::branches::create_branch(&mut self.conn, name, username, password, is_admin, kind)?;

        let days_json: String = serde_json::to_string(&Schedule::empty())?;
        let now: String = now_timestamp()?;
        mutations::schedules::upsert_days_json(
            &mut self.conn,
            branch_id,
            WeekSelector::Current.as_str(),
            &days_json,
            &now,
        )?;

        Ok(branch_id)
    }

    /// Looks up a branch by display name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_branch_by_name(
        &mut self,
        name: &str,
    ) -> Result<Option<BranchData>, PersistenceError> {
        queries::branches::get_branch_by_name(&mut self.conn, name)
    }

    /// Looks up a branch by canonical id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_branch_by_id(
        &mut self,
        branch_id: i64,
    ) -> Result<Option<BranchData>, PersistenceError> {
        queries::branches::get_branch_by_id(&mut self.conn, branch_id)
    }

    /// Verifies branch credentials.
    ///
    /// Returns the branch when the username exists and the password matches
    /// its bcrypt hash, `None` otherwise. The hash itself never leaves this
    /// layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the query or hash verification fails.
    pub fn verify_branch_password(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<Option<BranchData>, PersistenceError> {
        let Some((branch, hash)) =
            queries::branches::get_branch_credentials(&mut self.conn, username)?
        else {
            return Ok(None);
        };

        if bcrypt::verify(password, &hash)? {
            Ok(Some(branch))
        } else {
            Ok(None)
        }
    }

    /// Replaces a branch's password.
    ///
    /// # Errors
    ///
    /// Returns an error if the branch does not exist or hashing fails.
    pub fn update_branch_password(
        &mut self,
        branch_id: i64,
        password: &str,
    ) -> Result<(), PersistenceError> {
        mutations::branches::update_branch_password(&mut self.conn, branch_id, password)
    }

    // ---- roster ---------------------------------------------------------

    /// Lists the roster of a branch.
    ///
    /// # Errors
    ///
    /// Returns an error if the branch does not exist or the query fails.
    pub fn list_employees(&mut self, branch_id: i64) -> Result<Vec<Employee>, PersistenceError> {
        let branch: BranchData = self
            .get_branch_by_id(branch_id)?
            .ok_or_else(|| PersistenceError::BranchNotFound(branch_id.to_string()))?;
        queries::employees::list_employees(&mut self.conn, branch_id, &branch.name)
    }

    /// Returns the branch id a roster employee belongs to, if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_employee_branch_id(
        &mut self,
        employee_id: i64,
    ) -> Result<Option<i64>, PersistenceError> {
        queries::employees::get_employee_branch_id(&mut self.conn, employee_id)
    }

    /// Inserts a roster employee and returns its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_employee(
        &mut self,
        branch_id: i64,
        employee: &Employee,
    ) -> Result<i64, PersistenceError> {
        mutations::employees::insert_employee(&mut self.conn, branch_id, employee)
    }

    /// Replaces a roster employee's fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the employee does not exist.
    pub fn update_employee(
        &mut self,
        employee_id: i64,
        employee: &Employee,
    ) -> Result<(), PersistenceError> {
        mutations::employees::update_employee(&mut self.conn, employee_id, employee)
    }

    /// Deletes a roster employee, leaving their shift assignments in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the employee does not exist.
    pub fn delete_employee(&mut self, employee_id: i64) -> Result<(), PersistenceError> {
        mutations::employees::delete_employee(&mut self.conn, employee_id)
    }

    // ---- schedules ------------------------------------------------------

    /// Loads the schedule of a branch (by name) for one week variant.
    ///
    /// The returned schedule always carries a usable `days` array: a
    /// missing row (the lazy next-week case, or a branch predating the
    /// current-week bootstrap) and a corrupt document are both backfilled
    /// with the empty weekly template and persisted before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if the branch does not exist or the query fails.
    pub fn get_schedule(
        &mut self,
        branch_name: &str,
        week: WeekSelector,
    ) -> Result<Schedule, PersistenceError> {
        let branch: BranchData = self
            .get_branch_by_name(branch_name)?
            .ok_or_else(|| PersistenceError::BranchNotFound(branch_name.to_string()))?;
        self.load_or_init_schedule(branch.branch_id, week)
    }

    /// Loads the schedule of a branch (by id) for one week variant,
    /// materializing it from the empty template when absent or corrupt.
    ///
    /// # Errors
    ///
    /// Returns an error if the branch does not exist or the query fails.
    pub fn load_or_init_schedule(
        &mut self,
        branch_id: i64,
        week: WeekSelector,
    ) -> Result<Schedule, PersistenceError> {
        if self.get_branch_by_id(branch_id)?.is_none() {
            return Err(PersistenceError::BranchNotFound(branch_id.to_string()));
        }

        let raw: Option<String> =
            queries::schedules::load_days_json(&mut self.conn, branch_id, week.as_str())?;

        if let Some(days_json) = raw {
            match serde_json::from_str::<Schedule>(&days_json) {
                Ok(schedule) if !schedule.days.is_empty() => return Ok(schedule),
                Ok(_) => {
                    warn!(branch_id, week = %week, "Schedule document has no days, backfilling");
                }
                Err(e) => {
                    warn!(branch_id, week = %week, error = %e, "Schedule document corrupt, backfilling");
                }
            }
        } else {
            info!(branch_id, week = %week, "Materializing empty schedule");
        }

        let empty: Schedule = Schedule::empty();
        self.save_schedule(branch_id, week, &empty)?;
        Ok(empty)
    }

    /// Persists the full `days` value for one (branch, week).
    ///
    /// This is an atomic full replace of the stored document. The schedule
    /// is serialized from the caller's value, so the stored document and
    /// the caller's in-memory object never alias.
    ///
    /// # Errors
    ///
    /// Returns an error if the branch does not exist or the write fails.
    pub fn save_schedule(
        &mut self,
        branch_id: i64,
        week: WeekSelector,
        schedule: &Schedule,
    ) -> Result<(), PersistenceError> {
        if self.get_branch_by_id(branch_id)?.is_none() {
            return Err(PersistenceError::BranchNotFound(branch_id.to_string()));
        }

        let days_json: String = serde_json::to_string(schedule)?;
        let now: String = now_timestamp()?;
        mutations::schedules::upsert_days_json(
            &mut self.conn,
            branch_id,
            week.as_str(),
            &days_json,
            &now,
        )
    }

    /// Promotes the next-week schedule into the current week.
    ///
    /// The next week (materialized empty if it never existed) becomes the
    /// current week, the next week resets to the empty template, and the
    /// branch's transition timestamp is stamped. Returns the timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the branch does not exist or a write fails.
    pub fn transition_week(&mut self, branch_id: i64) -> Result<String, PersistenceError> {
        let next: Schedule = self.load_or_init_schedule(branch_id, WeekSelector::Next)?;

        self.save_schedule(branch_id, WeekSelector::Current, &next)?;
        self.save_schedule(branch_id, WeekSelector::Next, &Schedule::empty())?;

        let now: String = now_timestamp()?;
        mutations::branches::set_last_schedule_transition(&mut self.conn, branch_id, &now)?;

        info!(branch_id, "Promoted next week into current week");
        Ok(now)
    }

    // ---- sessions -------------------------------------------------------

    /// Creates a session row for a branch login.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_session(
        &mut self,
        token: &str,
        branch_id: i64,
        expires_at: &str,
    ) -> Result<(), PersistenceError> {
        mutations::sessions::create_session(&mut self.conn, token, branch_id, expires_at)
    }

    /// Looks up a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_session_by_token(
        &mut self,
        token: &str,
    ) -> Result<Option<SessionData>, PersistenceError> {
        queries::sessions::get_session_by_token(&mut self.conn, token)
    }

    /// Deletes a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_session(&mut self, token: &str) -> Result<(), PersistenceError> {
        mutations::sessions::delete_session(&mut self.conn, token)
    }

    // ---- audit ----------------------------------------------------------

    /// Persists an audit event and returns its event id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_audit_event(&mut self, event: &AuditEvent) -> Result<i64, PersistenceError> {
        mutations::audit::insert_audit_event(&mut self.conn, event)
    }

    /// Lists a branch's audit trail, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_audit_events(
        &mut self,
        branch: &str,
    ) -> Result<Vec<AuditEventRecord>, PersistenceError> {
        queries::audit::list_audit_events(&mut self.conn, branch)
    }
}

/// Formats the current UTC time as an ISO 8601 string.
fn now_timestamp() -> Result<String, PersistenceError> {
    OffsetDateTime::now_utc()
        .format(&Iso8601::DEFAULT)
        .map_err(|e| PersistenceError::Other(format!("Failed to format timestamp: {e}")))
}
