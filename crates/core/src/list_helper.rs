//! Statistics over a list of blogs
//!
//! Every function reads the slice once (plus one pass over the per-author
//! groups) and returns `None` instead of an empty record when the input is
//! empty.
//!
//! Likes are summed as `u128`: every stored count is at most `i64::MAX`, so
//! sums cannot overflow for any slice that fits in memory.
//!
//! Tie-breaks differ on purpose and are pinned by tests:
//!
//! - [`favorite_blog`] returns the **last** blog holding the maximum likes.
//! - [`most_blogs`] and [`most_likes`] return the author that was seen
//!   **first** in the input among those sharing the maximum.

use std::collections::HashMap;

use serde::Serialize;

use crate::blog::Blog;

/// Author with the number of blogs they wrote
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct AuthorBlogs {
    pub author: String,
    pub blogs: usize,
}

/// Author with the sum of likes across their blogs
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct AuthorLikes {
    pub author: String,
    pub likes: u128,
}

/// All statistics for a list of blogs
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total_likes: u128,
    pub favorite_blog: Option<Blog>,
    pub most_blogs: Option<AuthorBlogs>,
    pub most_likes: Option<AuthorLikes>,
}

/// Sum of likes; 0 for an empty list
pub fn total_likes(blogs: &[Blog]) -> u128 {
    blogs.iter().map(|blog| u128::from(blog.likes)).sum()
}

/// Blog with the most likes; on a tie the later blog wins
pub fn favorite_blog(blogs: &[Blog]) -> Option<&Blog> {
    blogs.iter().fold(None, |best, blog| match best {
        Some(current) if current.likes > blog.likes => Some(current),
        _ => Some(blog),
    })
}

/// Author who wrote the most blogs
pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogs> {
    let groups = group_by_author(blogs, |count: &mut usize, _| *count += 1);
    let (author, count) = max_by_author(groups)?;

    Some(AuthorBlogs {
        author: author.to_string(),
        blogs: count,
    })
}

/// Author with the highest sum of likes
pub fn most_likes(blogs: &[Blog]) -> Option<AuthorLikes> {
    let groups = group_by_author(blogs, |sum: &mut u128, blog| {
        *sum += u128::from(blog.likes)
    });
    let (author, likes) = max_by_author(groups)?;

    Some(AuthorLikes {
        author: author.to_string(),
        likes,
    })
}

pub fn summarize(blogs: &[Blog]) -> Summary {
    Summary {
        total_likes: total_likes(blogs),
        favorite_blog: favorite_blog(blogs).cloned(),
        most_blogs: most_blogs(blogs),
        most_likes: most_likes(blogs),
    }
}

/// Fold blogs into one accumulator per author, in first-seen author order
fn group_by_author<T, F>(blogs: &[Blog], mut accumulate: F) -> Vec<(&str, T)>
where
    T: Default,
    F: FnMut(&mut T, &Blog),
{
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, T)> = Vec::new();

    for blog in blogs {
        let author = blog.author.as_str();
        let position = *positions.entry(author).or_insert_with(|| {
            groups.push((author, T::default()));
            groups.len() - 1
        });
        accumulate(&mut groups[position].1, blog);
    }

    groups
}

/// Largest group; an equal later group does not displace an earlier one
///
/// Note this differs from `favorite_blog`: a `<=` comparison here would let
/// the last tied author win, so ties keep the author seen first.
fn max_by_author<T: Ord>(groups: Vec<(&str, T)>) -> Option<(&str, T)> {
    groups.into_iter().fold(None, |best, candidate| match best {
        Some(current) if current.1 >= candidate.1 => Some(current),
        _ => Some(candidate),
    })
}
