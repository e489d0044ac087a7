//! Use-case services - validation plus persistence through the ports.
//!
//! Services never bypass the repository contracts and stay storage-agnostic.

mod author_service;
mod post_service;

pub use author_service::AuthorService;
pub use post_service::PostService;

use crate::error::{DomainError, RepoError};

/// Turn a repository `NotFound` into a domain `NotFound` for the given entity.
fn not_found(entity_type: &'static str, id: i32) -> impl FnOnce(RepoError) -> DomainError {
    move |err| match err {
        RepoError::NotFound => DomainError::NotFound { entity_type, id },
        other => other.into(),
    }
}
