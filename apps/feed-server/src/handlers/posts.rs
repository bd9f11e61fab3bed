//! Post handlers - `/api/posts`, multiplexed by verb.

use actix_web::{HttpResponse, web};

use feed_core::domain::{Comment, Post};
use feed_shared::dto::{AddCommentRequest, CreatePostRequest, ToggleLikeRequest};

use crate::middleware::error::AppResult;
use crate::observability::RequestId;
use crate::state::AppState;

/// GET /api/posts - the whole feed, newest first.
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let new_post = body.into_inner().validate()?;

    let post = Post::new(
        new_post.user_id,
        new_post.username,
        new_post.content,
        new_post.image_url,
    );
    let saved = state.posts.prepend(post).await?;

    tracing::info!(
        request_id = %request_id.as_str(),
        post_id = %saved.id,
        user_id = %saved.user_id,
        "Post created"
    );
    Ok(HttpResponse::Ok().json(saved))
}

/// PUT /api/posts - toggle a like.
pub async fn toggle_like(
    state: web::Data<AppState>,
    body: web::Json<ToggleLikeRequest>,
) -> AppResult<HttpResponse> {
    let toggle = body.into_inner().validate()?;

    let post = state
        .posts
        .toggle_like(&toggle.post_id, &toggle.user_id)
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

/// PATCH /api/posts - append a comment.
pub async fn add_comment(
    state: web::Data<AppState>,
    body: web::Json<AddCommentRequest>,
) -> AppResult<HttpResponse> {
    let new_comment = body.into_inner().validate()?;

    let comment = Comment::new(new_comment.user_id, new_comment.username, new_comment.content);
    let post = state.posts.add_comment(&new_comment.post_id, comment).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::{Value, json};

    use crate::config::AppConfig;
    use crate::handlers::configure_routes;
    use crate::observability::RequestIdMiddleware;

    use super::*;

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::new(&AppConfig::default()).await))
                    .configure(configure_routes),
            )
            .await
        };
    }

    macro_rules! create {
        ($app:expr, $content:expr) => {{
            let req = test::TestRequest::post()
                .uri("/api/posts")
                .set_json(json!({ "userId": "u1", "username": "alice", "content": $content }))
                .to_request();
            let post: Value = test::call_and_read_body_json(&$app, req).await;
            post
        }};
    }

    #[actix_rt::test]
    async fn test_create_then_list_newest_first() {
        let app = test_app!();

        let first = create!(app, "first");
        let post = create!(app, "hi");
        assert_eq!(post["likes"], json!([]));
        assert_eq!(post["comments"], json!([]));
        assert_eq!(post["userId"], "u1");
        assert!(post["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert!(post["createdAt"].as_str().is_some());

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let posts: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0]["id"], post["id"]);
        assert_eq!(posts[1]["id"], first["id"]);
    }

    #[actix_rt::test]
    async fn test_like_unknown_post_is_404() {
        let app = test_app!();

        let req = test::TestRequest::put()
            .uri("/api/posts")
            .set_json(json!({ "postId": "does-not-exist", "userId": "u1" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({ "error": "Post not found" }));
    }

    #[actix_rt::test]
    async fn test_like_toggles() {
        let app = test_app!();
        let post = create!(app, "hi");

        let like = || {
            test::TestRequest::put()
                .uri("/api/posts")
                .set_json(json!({ "postId": post["id"], "userId": "u2" }))
                .to_request()
        };

        let liked: Value = test::call_and_read_body_json(&app, like()).await;
        assert_eq!(liked["likes"], json!(["u2"]));
        let unliked: Value = test::call_and_read_body_json(&app, like()).await;
        assert_eq!(unliked["likes"], json!([]));
    }

    #[actix_rt::test]
    async fn test_comment_appends() {
        let app = test_app!();
        let post = create!(app, "hi");

        let req = test::TestRequest::patch()
            .uri("/api/posts")
            .set_json(json!({
                "postId": post["id"],
                "userId": "u2",
                "username": "bob",
                "content": "welcome!"
            }))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(updated["comments"][0]["username"], "bob");
        assert_eq!(updated["comments"][0]["content"], "welcome!");
    }

    #[actix_rt::test]
    async fn test_comment_unknown_post_is_404() {
        let app = test_app!();

        let req = test::TestRequest::patch()
            .uri("/api/posts")
            .set_json(json!({
                "postId": "missing",
                "userId": "u2",
                "username": "bob",
                "content": "hello?"
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_rt::test]
    async fn test_missing_fields_are_rejected() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "content": "   " }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "Validation failed");
        assert_eq!(
            body["details"],
            json!([
                "userId is required",
                "username is required",
                "content must not be blank"
            ])
        );

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let posts: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert!(posts.is_empty());
    }

    #[actix_rt::test]
    async fn test_malformed_json_is_400() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ not json")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "Bad request");
    }

    #[actix_rt::test]
    async fn test_posts_responses_carry_request_id() {
        let app = test::init_service(
            App::new()
                .wrap(RequestIdMiddleware)
                .app_data(web::Data::new(AppState::new(&AppConfig::default()).await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/posts")
            .insert_header(("X-Request-ID", "feed-req-1"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers().get("x-request-id").unwrap(), "feed-req-1");

        let req = test::TestRequest::put()
            .uri("/api/posts")
            .set_json(json!({ "postId": "missing", "userId": "u1" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(res.headers().contains_key("x-request-id"));
    }

    #[actix_rt::test]
    async fn test_health_counts_posts() {
        let app = test_app!();
        create!(app, "hi");

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["posts"], 1);
    }
}
