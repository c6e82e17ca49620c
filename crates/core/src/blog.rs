use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Largest like count the store can hold (a signed 64-bit SQLite integer)
pub const MAX_LIKES: u64 = i64::MAX as u64;

/// Owner summary embedded in a blog response
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BlogOwner {
    pub id: i64,
    pub username: String,
    pub name: Option<String>,
}

/// A stored blog post
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: i64,
    pub title: Option<String>,
    pub author: String,
    pub url: Option<String>,
    pub likes: u64,
    pub user: Option<BlogOwner>,
}

/// Blog creation payload as received from clients
///
/// Every field is optional so that missing values can be reported as
/// validation errors instead of deserialization failures.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct NewBlog {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
}

/// A validated blog, ready to be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogDraft {
    pub title: Option<String>,
    pub author: String,
    pub url: Option<String>,
    pub likes: u64,
}

/// Partial blog update; absent fields keep their stored value
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
}

fn check_likes(likes: u64) -> Result<u64, ValidationError> {
    if likes > MAX_LIKES {
        Err(ValidationError::LikesOutOfRange(likes))
    } else {
        Ok(likes)
    }
}

/// Treat empty strings as absent
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Validate a creation payload
///
/// Fails when both `title` and `url` are absent or when `likes` exceeds
/// [`MAX_LIKES`]. `likes` defaults to 0 and a missing author is stored as an
/// empty string.
pub fn validate_new_blog(input: NewBlog) -> Result<BlogDraft, ValidationError> {
    let title = non_empty(input.title);
    let url = non_empty(input.url);

    if title.is_none() && url.is_none() {
        return Err(ValidationError::TitleAndUrlMissing);
    }

    Ok(BlogDraft {
        title,
        author: input.author.unwrap_or_default(),
        url,
        likes: check_likes(input.likes.unwrap_or(0))?,
    })
}

/// Apply a patch on top of an existing blog
pub fn apply_patch(blog: &Blog, patch: BlogPatch) -> Result<BlogDraft, ValidationError> {
    Ok(BlogDraft {
        title: patch.title.or_else(|| blog.title.clone()),
        author: patch.author.unwrap_or_else(|| blog.author.clone()),
        url: patch.url.or_else(|| blog.url.clone()),
        likes: check_likes(patch.likes.unwrap_or(blog.likes))?,
    })
}
