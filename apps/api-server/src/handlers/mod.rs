//! HTTP handlers and route configuration.

mod authors;
mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed bodies get the same problem-details shape as other errors.
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into());

    cfg.app_data(json_config).service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/authors")
                    .route("", web::get().to(authors::list))
                    .route("", web::post().to(authors::create))
                    .route("/{id}", web::get().to(authors::get))
                    .route("/{id}", web::patch().to(authors::update))
                    .route("/{id}", web::delete().to(authors::delete)),
            )
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create))
                    .route("/{id}", web::get().to(posts::get))
                    .route("/{id}", web::patch().to(posts::update))
                    .route("/{id}", web::delete().to(posts::delete)),
            ),
    );
}

#[cfg(test)]
mod tests;
