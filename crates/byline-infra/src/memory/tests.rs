use std::sync::Arc;

use async_trait::async_trait;

use byline_core::domain::{Author, AuthorChanges, Category, NewAuthor, PostChanges};
use byline_core::error::{DomainError, RepoError};
use byline_core::ports::{AuthorRepository, BaseRepository};
use byline_core::{AuthorService, PostService};

use super::{InMemoryAuthorRepository, InMemoryPostRepository};

fn authors() -> AuthorService {
    AuthorService::new(Arc::new(InMemoryAuthorRepository::new()))
}

fn posts() -> PostService {
    PostService::new(Arc::new(InMemoryPostRepository::new()))
}

fn chars(n: usize) -> String {
    "a".repeat(n)
}

fn validation_field(err: DomainError) -> &'static str {
    match err {
        DomainError::Validation(e) => e.field,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_author_scenarios() {
    let service = authors();

    let jane = service.create("Jane Doe", "5551234567").await.unwrap();
    assert_eq!(jane.id, 1);
    assert!(jane.updated_at.is_none());

    let err = service.create("Jane Doe", "5559876543").await.unwrap_err();
    assert_eq!(validation_field(err), "name");

    let err = service.create("John", "12345").await.unwrap_err();
    assert_eq!(validation_field(err), "phone_number");

    assert_eq!(service.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_name_uniqueness_is_case_sensitive() {
    let service = authors();
    service.create("Jane Doe", "5551234567").await.unwrap();

    assert!(service.create("jane doe", "5551234567").await.is_ok());
}

#[tokio::test]
async fn test_duplicate_name_reported_before_bad_phone() {
    let service = authors();
    service.create("Jane Doe", "5551234567").await.unwrap();

    let err = service.create("Jane Doe", "12345").await.unwrap_err();
    assert_eq!(validation_field(err), "name");
}

#[tokio::test]
async fn test_author_update_revalidates_assigned_fields() {
    let service = authors();
    let jane = service.create("Jane Doe", "5551234567").await.unwrap();
    service.create("John Roe", "5559876543").await.unwrap();

    let err = service
        .update(jane.id, Some("John Roe".to_string()), None)
        .await
        .unwrap_err();
    assert_eq!(validation_field(err), "name");

    let err = service
        .update(jane.id, None, Some("555".to_string()))
        .await
        .unwrap_err();
    assert_eq!(validation_field(err), "phone_number");

    // Reassigning the current name still hits the stored row.
    let err = service
        .update(jane.id, Some("Jane Doe".to_string()), None)
        .await
        .unwrap_err();
    assert_eq!(validation_field(err), "name");

    let updated = service
        .update(jane.id, None, Some("5550000000".to_string()))
        .await
        .unwrap();
    assert_eq!(updated.name, "Jane Doe");
    assert_eq!(updated.phone_number, "5550000000");
    assert!(updated.updated_at.is_some());
}

#[tokio::test]
async fn test_missing_author_is_not_found() {
    let service = authors();

    assert!(matches!(
        service.get(9).await,
        Err(DomainError::NotFound { entity_type: "Author", id: 9 })
    ));
    assert!(matches!(
        service.update(9, None, Some("5551234567".to_string())).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        service.delete(9).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_missing_author_wins_over_taken_name() {
    let service = authors();
    service.create("Jane Doe", "5551234567").await.unwrap();

    let err = service
        .update(9, Some("Jane Doe".to_string()), None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::NotFound { entity_type: "Author", id: 9 }
    ));
}

#[tokio::test]
async fn test_deleted_author_name_can_be_reused() {
    let service = authors();
    let jane = service.create("Jane Doe", "5551234567").await.unwrap();

    service.delete(jane.id).await.unwrap();

    let again = service.create("Jane Doe", "5551234567").await.unwrap();
    assert_ne!(again.id, jane.id);
}

/// Simulates a concurrent writer: the name lookup sees a snapshot taken
/// before the other insert committed.
struct StaleReadAuthors(InMemoryAuthorRepository);

#[async_trait]
impl BaseRepository<Author, i32> for StaleReadAuthors {
    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, RepoError> {
        self.0.find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<Author>, RepoError> {
        self.0.find_all().await
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        self.0.delete(id).await
    }
}

#[async_trait]
impl AuthorRepository for StaleReadAuthors {
    async fn find_by_name(&self, _name: &str) -> Result<Option<Author>, RepoError> {
        Ok(None)
    }

    async fn insert(&self, author: NewAuthor) -> Result<Author, RepoError> {
        self.0.insert(author).await
    }

    async fn update(&self, id: i32, changes: AuthorChanges) -> Result<Author, RepoError> {
        self.0.update(id, changes).await
    }
}

#[tokio::test]
async fn test_racing_insert_surfaces_as_duplicate() {
    let service = AuthorService::new(Arc::new(StaleReadAuthors(InMemoryAuthorRepository::new())));

    service.create("Jane Doe", "5551234567").await.unwrap();
    let err = service.create("Jane Doe", "5559876543").await.unwrap_err();

    assert!(matches!(err, DomainError::Duplicate(_)), "got {err:?}");
}

#[tokio::test]
async fn test_post_scenarios() {
    let service = posts();

    let post = service
        .create("Top 10 Secrets", chars(260), chars(100), "Fiction")
        .await
        .unwrap();
    assert_eq!(post.category, Category::Fiction);

    let err = service
        .create("An Ordinary Day", chars(300), chars(50), "Fiction")
        .await
        .unwrap_err();
    assert_eq!(validation_field(err), "title");

    let err = service
        .create("Secret Life", chars(100), chars(50), "Fiction")
        .await
        .unwrap_err();
    assert_eq!(validation_field(err), "content");

    let err = service
        .create("Secret Life", chars(300), chars(251), "Fiction")
        .await
        .unwrap_err();
    assert_eq!(validation_field(err), "summary");

    let err = service
        .create("Secret Life", chars(300), chars(50), "Poetry")
        .await
        .unwrap_err();
    assert_eq!(validation_field(err), "category");

    assert_eq!(service.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_post_update_and_delete() {
    let service = posts();
    let post = service
        .create("Guess What", chars(250), chars(250), "Non-Fiction")
        .await
        .unwrap();

    let changes = PostChanges::new(Some("Top Story".to_string()), None, None, None).unwrap();
    let updated = service.update(post.id, changes).await.unwrap();
    assert_eq!(updated.title, "Top Story");
    assert_eq!(updated.category, Category::NonFiction);
    assert!(updated.updated_at.is_some());

    service.delete(post.id).await.unwrap();
    assert!(matches!(
        service.get(post.id).await,
        Err(DomainError::NotFound { entity_type: "Post", .. })
    ));
}

#[tokio::test]
async fn test_missing_post_update_is_not_found() {
    let service = posts();

    let changes = PostChanges::new(Some("Top Story".to_string()), None, None, None).unwrap();
    assert!(matches!(
        service.update(5, changes).await,
        Err(DomainError::NotFound { entity_type: "Post", id: 5 })
    ));
}
