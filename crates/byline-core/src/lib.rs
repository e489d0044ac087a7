//! # Byline Core
//!
//! The domain layer of the Byline blog backend.
//! This crate contains the Author and Post entities, their validators and the
//! use-case services. It has zero infrastructure dependencies; storage is
//! reached only through the traits in [`ports`].

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, RepoError, ValidationError};
pub use services::{AuthorService, PostService};
