//! Post handlers.
//!
//! Each handler forwards the request to the post repository and echoes the
//! stored post back as JSON. Any repository failure answers with a bare 500.

use actix_web::{HttpResponse, web};

use blog_core::domain::{NewPost, PostChanges};
use blog_shared::dto::PostPayload;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let fields = new_post(body.into_inner());
    let post = state.posts.create_post(fields).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .update_post(&id, post_changes(body.into_inner()))
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

/// GET /api/posts/{id}
pub async fn find(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let post = state.posts.find_post(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(post))
}

fn new_post(payload: PostPayload) -> NewPost {
    NewPost {
        title: payload.title,
        content: payload.content,
        author: payload.author,
        date: payload.date,
    }
}

fn post_changes(payload: PostPayload) -> PostChanges {
    PostChanges {
        title: payload.title,
        content: payload.content,
        author: payload.author,
        date: payload.date,
    }
}
