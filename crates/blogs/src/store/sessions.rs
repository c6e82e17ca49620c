use super::Store;
use crate::prelude::Error;
use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension};

impl Store {
    pub fn insert_session(
        &self,
        token_hash: &str,
        user_id: i64,
        expires_at: DateTime<Utc>,
    ) -> Result<(), Error> {
        let conn = self.conn()?;

        // Expired rows are dropped lazily, whenever a new session is issued.
        conn.execute(
            "DELETE FROM sessions WHERE expires_at <= ?1",
            [Utc::now().timestamp()],
        )?;
        conn.execute(
            "INSERT INTO sessions (token_hash, user_id, expires_at) VALUES (?1, ?2, ?3)",
            params![token_hash, user_id, expires_at.timestamp()],
        )?;
        Ok(())
    }

    /// Owner of a session that is still valid at `now`
    pub fn session_user(&self, token_hash: &str, now: DateTime<Utc>) -> Result<Option<i64>, Error> {
        let user_id = self
            .conn()?
            .query_row(
                "SELECT user_id FROM sessions WHERE token_hash = ?1 AND expires_at > ?2",
                params![token_hash, now.timestamp()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(user_id)
    }
}
