//! Domain entities and their field validators.

pub mod author;
pub mod post;

pub use author::{Author, AuthorChanges, NewAuthor};
pub use post::{Category, NewPost, Post, PostChanges};
