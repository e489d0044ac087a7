use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::json;

use byline_shared::dto::{AuthorResponse, PostResponse};
use byline_shared::{ApiResponse, ErrorResponse};

use super::configure_routes;
use crate::state::AppState;

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory()))
                .configure(configure_routes),
        )
        .await
    };
}

fn long_text(n: usize) -> String {
    "w".repeat(n)
}

#[actix_web::test]
async fn test_health() {
    let app = app!();
    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_create_author_then_duplicate() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/authors")
        .set_json(json!({ "name": "Jane Doe", "phone_number": "5551234567" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: ApiResponse<AuthorResponse> = test::read_body_json(resp).await;
    let jane = body.data.unwrap();
    assert_eq!(jane.name, "Jane Doe");
    assert!(jane.updated_at.is_none());

    let req = test::TestRequest::post()
        .uri("/api/authors")
        .set_json(json!({ "name": "Jane Doe", "phone_number": "5559876543" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let problem: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(problem.field.as_deref(), Some("name"));
    assert_eq!(
        problem.detail.as_deref(),
        Some("Author name 'Jane Doe' must be unique.")
    );
}

#[actix_web::test]
async fn test_invalid_phone_number_rejected() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/authors")
        .set_json(json!({ "name": "John", "phone_number": "12345" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let problem: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(problem.field.as_deref(), Some("phone_number"));
}

#[actix_web::test]
async fn test_author_update_and_delete() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/authors")
        .set_json(json!({ "name": "Jane Doe", "phone_number": "5551234567" }))
        .to_request();
    let body: ApiResponse<AuthorResponse> = test::call_and_read_body_json(&app, req).await;
    let id = body.data.unwrap().id;

    let req = test::TestRequest::patch()
        .uri(&format!("/api/authors/{id}"))
        .set_json(json!({ "phone_number": "5550000000" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: ApiResponse<AuthorResponse> = test::read_body_json(resp).await;
    let updated = body.data.unwrap();
    assert_eq!(updated.phone_number, "5550000000");
    assert!(updated.updated_at.is_some());

    let req = test::TestRequest::delete()
        .uri(&format!("/api/authors/{id}"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );

    let req = test::TestRequest::get()
        .uri(&format!("/api/authors/{id}"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn test_create_post_and_reject_plain_title() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({
            "title": "Top 10 Secrets",
            "content": long_text(260),
            "summary": long_text(100),
            "category": "Fiction",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: ApiResponse<PostResponse> = test::read_body_json(resp).await;
    assert_eq!(body.data.unwrap().category, "Fiction");

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({
            "title": "An Ordinary Day",
            "content": long_text(300),
            "summary": long_text(50),
            "category": "Fiction",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let problem: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(problem.field.as_deref(), Some("title"));

    let req = test::TestRequest::get().uri("/api/posts").to_request();
    let body: ApiResponse<Vec<PostResponse>> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.data.unwrap().len(), 1);
}

#[actix_web::test]
async fn test_post_patch_validates_category() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({
            "title": "Guess Who",
            "content": long_text(250),
            "summary": "",
            "category": "Non-Fiction",
        }))
        .to_request();
    let body: ApiResponse<PostResponse> = test::call_and_read_body_json(&app, req).await;
    let id = body.data.unwrap().id;

    let req = test::TestRequest::patch()
        .uri(&format!("/api/posts/{id}"))
        .set_json(json!({ "category": "fiction" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let problem: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(problem.field.as_deref(), Some("category"));
}

#[actix_web::test]
async fn test_malformed_body_is_problem_details() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/authors")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let problem: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(problem.title, "Bad Request");
}
