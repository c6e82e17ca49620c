use super::Store;
use crate::prelude::Error;
use blogs_core::auth::hash_password;
use blogs_core::error::ValidationError;
use blogs_core::user::{validate_new_user, NewUser, User, UserBlog};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

const SALT_LENGTH: usize = 16;

/// Login lookup result; the only place the password digest is read back
#[derive(Debug, Clone)]
pub struct Credentials {
    pub id: i64,
    pub username: String,
    pub name: Option<String>,
    pub password_hash: String,
}

fn user_blogs(conn: &Connection, user_id: i64) -> Result<Vec<UserBlog>, Error> {
    let mut stmt =
        conn.prepare("SELECT id, title, author, url FROM blogs WHERE user_id = ?1 ORDER BY id")?;
    let blogs = stmt
        .query_map([user_id], |row| {
            Ok(UserBlog {
                id: row.get(0)?,
                title: row.get(1)?,
                author: row.get(2)?,
                url: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(blogs)
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == ErrorCode::ConstraintViolation
                && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

impl Store {
    /// Validate, hash and insert a user
    ///
    /// Username uniqueness is exact and case-sensitive; a clash is reported as
    /// a validation error.
    pub fn create_user(&self, input: NewUser) -> Result<User, Error> {
        let draft = validate_new_user(input)?;
        let salt: [u8; SALT_LENGTH] = rand::random();
        let password_hash = hash_password(&draft.password, &salt);

        let conn = self.conn()?;
        let inserted = conn.execute(
            "INSERT INTO users (username, name, password_hash) VALUES (?1, ?2, ?3)",
            params![draft.username, draft.name, password_hash],
        );

        match inserted {
            Ok(_) => {}
            Err(err) if is_unique_violation(&err) => {
                log::debug!("username {} already taken", draft.username);
                return Err(ValidationError::UsernameTaken(draft.username).into());
            }
            Err(err) => return Err(err.into()),
        }

        Ok(User {
            id: conn.last_insert_rowid(),
            username: draft.username,
            name: draft.name,
            blogs: Vec::new(),
        })
    }

    /// All users with their blogs populated
    pub fn list_users(&self) -> Result<Vec<User>, Error> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT id, username, name FROM users ORDER BY id")?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<String>>(2)?,
                ))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter()
            .map(|(id, username, name)| {
                Ok(User {
                    id,
                    username,
                    name,
                    blogs: user_blogs(&conn, id)?,
                })
            })
            .collect()
    }

    pub fn find_credentials(&self, username: &str) -> Result<Option<Credentials>, Error> {
        let credentials = self
            .conn()?
            .query_row(
                "SELECT id, username, name, password_hash FROM users WHERE username = ?1",
                [username],
                |row| {
                    Ok(Credentials {
                        id: row.get(0)?,
                        username: row.get(1)?,
                        name: row.get(2)?,
                        password_hash: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(credentials)
    }
}
