use super::Store;
use crate::prelude::Error;
use blogs_core::blog::{
    apply_patch, validate_new_blog, Blog, BlogDraft, BlogOwner, BlogPatch, NewBlog,
};
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_BLOG: &str = "
SELECT b.id, b.title, b.author, b.url, b.likes, u.id, u.username, u.name
FROM blogs b
LEFT JOIN users u ON u.id = b.user_id
";

fn blog_from_row(row: &Row<'_>) -> rusqlite::Result<Blog> {
    let user = match row.get::<_, Option<i64>>(5)? {
        Some(id) => Some(BlogOwner {
            id,
            username: row.get(6)?,
            name: row.get(7)?,
        }),
        None => None,
    };

    Ok(Blog {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        url: row.get(3)?,
        likes: row.get(4)?,
        user,
    })
}

fn fetch_blog(conn: &Connection, id: i64) -> Result<Option<Blog>, Error> {
    let blog = conn
        .query_row(&format!("{SELECT_BLOG} WHERE b.id = ?1"), [id], blog_from_row)
        .optional()?;
    Ok(blog)
}

fn write_draft(conn: &Connection, id: i64, draft: &BlogDraft) -> Result<(), Error> {
    conn.execute(
        "UPDATE blogs SET title = ?1, author = ?2, url = ?3, likes = ?4 WHERE id = ?5",
        params![draft.title, draft.author, draft.url, draft.likes, id],
    )?;
    Ok(())
}

impl Store {
    /// Validate and insert a blog owned by `owner_id`
    pub fn create_blog(&self, input: NewBlog, owner_id: Option<i64>) -> Result<Blog, Error> {
        let draft = validate_new_blog(input)?;
        let conn = self.conn()?;

        conn.execute(
            "INSERT INTO blogs (title, author, url, likes, user_id) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![draft.title, draft.author, draft.url, draft.likes, owner_id],
        )?;
        let id = conn.last_insert_rowid();

        fetch_blog(&conn, id)?.ok_or_else(|| Error::NotFound(format!("blog {id}")))
    }

    /// All blogs in insertion order, owners populated
    pub fn list_blogs(&self) -> Result<Vec<Blog>, Error> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("{SELECT_BLOG} ORDER BY b.id"))?;
        let blogs = stmt
            .query_map([], blog_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(blogs)
    }

    pub fn get_blog(&self, id: i64) -> Result<Option<Blog>, Error> {
        let conn = self.conn()?;
        fetch_blog(&conn, id)
    }

    /// Overwrite the fields present in `patch`; `None` when the blog is unknown
    pub fn update_blog(&self, id: i64, patch: BlogPatch) -> Result<Option<Blog>, Error> {
        let conn = self.conn()?;

        let Some(existing) = fetch_blog(&conn, id)? else {
            return Ok(None);
        };
        write_draft(&conn, id, &apply_patch(&existing, patch)?)?;

        fetch_blog(&conn, id)
    }

    /// Delete a blog on behalf of `user_id`
    ///
    /// The ownership check and the delete run under the same lock. Blogs
    /// without an owner can be deleted by any authenticated user.
    pub fn delete_blog(&self, id: i64, user_id: i64) -> Result<(), Error> {
        let conn = self.conn()?;

        let owner = conn
            .query_row("SELECT user_id FROM blogs WHERE id = ?1", [id], |row| {
                row.get::<_, Option<i64>>(0)
            })
            .optional()?;

        match owner {
            None => Err(Error::NotFound(format!("blog {id}"))),
            Some(Some(owner_id)) if owner_id != user_id => Err(Error::Forbidden),
            Some(_) => {
                conn.execute("DELETE FROM blogs WHERE id = ?1", [id])?;
                Ok(())
            }
        }
    }
}
