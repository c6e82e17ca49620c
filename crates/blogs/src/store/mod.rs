//! SQLite persistence for blogs, users and sessions
//!
//! A single connection is shared behind a mutex, so every store operation
//! runs serialized. Multi-step operations (insert then read back, the
//! username uniqueness check) hold the lock for their whole duration.

mod blogs;
mod sessions;
mod users;

use crate::prelude::Error;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

const SCHEMA: &str = "
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS users (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    username      TEXT NOT NULL UNIQUE,
    name          TEXT,
    password_hash TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS blogs (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    title   TEXT,
    author  TEXT NOT NULL,
    url     TEXT,
    likes   INTEGER NOT NULL DEFAULT 0 CHECK (likes >= 0),
    user_id INTEGER REFERENCES users (id) ON DELETE SET NULL
);

CREATE TABLE IF NOT EXISTS sessions (
    token_hash TEXT PRIMARY KEY,
    user_id    INTEGER NOT NULL REFERENCES users (id) ON DELETE CASCADE,
    expires_at INTEGER NOT NULL
);
";

#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
}

impl Store {
    /// Open (or create) the database file at `path`
    pub fn open(path: &Path) -> Result<Self, Error> {
        Self::init(Connection::open(path)?)
    }

    /// Fresh database that lives as long as the store
    pub fn in_memory() -> Result<Self, Error> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, Error> {
        conn.execute_batch(SCHEMA)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.conn
            .lock()
            .map_err(|_| Error::Generic("database connection lock poisoned".to_string()))
    }
}
