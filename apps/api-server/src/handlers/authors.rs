//! Author handlers.

use actix_web::{HttpResponse, web};

use byline_core::domain::Author;
use byline_shared::ApiResponse;
use byline_shared::dto::{AuthorResponse, CreateAuthorRequest, UpdateAuthorRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(author: Author) -> AuthorResponse {
    AuthorResponse {
        id: author.id,
        name: author.name,
        phone_number: author.phone_number,
        created_at: author.created_at,
        updated_at: author.updated_at,
    }
}

/// GET /api/authors
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let authors: Vec<_> = state
        .authors
        .list()
        .await?
        .into_iter()
        .map(to_response)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(authors)))
}

/// POST /api/authors
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateAuthorRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let author = state.authors.create(req.name, req.phone_number).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(to_response(author))))
}

/// GET /api/authors/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let author = state.authors.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(author))))
}

/// PATCH /api/authors/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdateAuthorRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let author = state
        .authors
        .update(path.into_inner(), req.name, req.phone_number)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(author))))
}

/// DELETE /api/authors/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    state.authors.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
