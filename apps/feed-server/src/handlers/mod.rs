//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::json_error_handler;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                // One resource, one verb per operation
                .service(
                    web::resource("/posts")
                        .route(web::get().to(posts::list_posts))
                        .route(web::post().to(posts::create_post))
                        .route(web::put().to(posts::toggle_like))
                        .route(web::patch().to(posts::add_comment)),
                ),
        );
}
