//! In-memory session store.
//!
//! One [`Session`] per chat user: completed rows plus the row builder.
//! Nothing is persisted; a session lives until it is exported or the
//! process exits. Profiles (the supervisor name) survive `clear`.

use crate::core::builder::RowBuilder;
use crate::errors::{AppError, AppResult};
use crate::models::Row;
use std::collections::HashMap;
use tracing::debug;

pub type UserId = i64;

#[derive(Debug, Default)]
pub struct Session {
    pub rows: Vec<Row>,
    pub builder: RowBuilder,
}

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<UserId, Session>,
    names: HashMap<UserId, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_create(&mut self, user: UserId) -> &mut Session {
        self.sessions.entry(user).or_insert_with(|| {
            debug!(user, "session created");
            Session::default()
        })
    }

    pub fn get(&self, user: UserId) -> Option<&Session> {
        self.sessions.get(&user)
    }

    pub fn get_mut(&mut self, user: UserId) -> Option<&mut Session> {
        self.sessions.get_mut(&user)
    }

    /// Rows of `user`, empty if there is no session.
    pub fn rows(&self, user: UserId) -> &[Row] {
        self.sessions
            .get(&user)
            .map(|s| s.rows.as_slice())
            .unwrap_or_default()
    }

    /// Append a completed row. Does nothing without a session.
    pub fn append_row(&mut self, user: UserId, row: Row) {
        if let Some(session) = self.sessions.get_mut(&user) {
            session.rows.push(row);
        }
    }

    /// Remove the most recent row.
    pub fn pop_last_row(&mut self, user: UserId) -> AppResult<Row> {
        self.sessions
            .get_mut(&user)
            .and_then(|s| s.rows.pop())
            .ok_or(AppError::NothingToCancel)
    }

    /// Forget the whole session (rows and the row in progress).
    pub fn clear(&mut self, user: UserId) {
        if self.sessions.remove(&user).is_some() {
            debug!(user, "session cleared");
        }
    }

    pub fn contains(&self, user: UserId) -> bool {
        self.sessions.contains_key(&user)
    }

    pub fn set_name(&mut self, user: UserId, name: impl Into<String>) {
        self.names.insert(user, name.into());
    }

    /// Supervisor name, empty when never set.
    pub fn name(&self, user: UserId) -> &str {
        self.names.get(&user).map(String::as_str).unwrap_or("")
    }
}
