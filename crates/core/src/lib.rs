//! Core library for blogs
//!
//! This crate implements the **Functional Core** of the blogs service,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`blogs_core`** (this crate): Pure functions and domain types with zero I/O
//! - **`blogs`**: HTTP API, SQLite persistence and the CLI (the Imperative Shell)
//!
//! Everything here is deterministic: the shell fetches data, generates random
//! material (salts, token bytes) and hands it to these functions.
//!
//! # Module Organization
//!
//! - [`list_helper`]: Statistics over a list of blogs (likes, favorite, top authors)
//! - [`blog`]: Blog models, creation validation and partial updates
//! - [`user`]: User models and creation validation
//! - [`auth`]: Bearer header parsing, password and token digests
//! - [`error`]: Validation errors with client-visible messages
//!
//! # Example Usage
//!
//! ```rust
//! use blogs_core::blog::Blog;
//! use blogs_core::list_helper::{most_likes, total_likes};
//!
//! let blogs = vec![Blog {
//!     id: 1,
//!     title: Some("Type wars".to_string()),
//!     author: "Robert C. Martin".to_string(),
//!     url: None,
//!     likes: 2,
//!     user: None,
//! }];
//!
//! assert_eq!(total_likes(&blogs), 2);
//! assert_eq!(most_likes(&blogs).map(|a| a.likes), Some(2));
//! ```

pub mod auth;
pub mod blog;
pub mod error;
pub mod list_helper;
pub mod user;
