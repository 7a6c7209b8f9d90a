//! HTTP Handlers
//!
//! Mutating handlers re-check the gate-populated identity defensively:
//! a missing identity fails 401 even if the middleware was bypassed.

use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::id::PostId;
use std::sync::Arc;

use auth::presentation::middleware::AuthUser;

use crate::domain::post::Post;
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};
use crate::presentation::dto::{MessageResponse, PostBodyRequest, PostResponse, required};

/// Shared state for post handlers
#[derive(Clone)]
pub struct PostAppState<R>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// Unparseable IDs behave like unknown IDs: 404, never 400
fn parse_post_id(id: &str) -> PostResult<PostId> {
    id.parse().map_err(|_| PostError::NotFound)
}

// ============================================================================
// Create
// ============================================================================

/// POST /api/v1/posts/create
pub async fn create<R>(
    State(state): State<PostAppState<R>>,
    auth_user: Option<Extension<AuthUser>>,
    Json(req): Json<PostBodyRequest>,
) -> PostResult<impl IntoResponse>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let title = required(&req.title)?.to_string();
    let content = required(&req.content)?.to_string();

    let Extension(auth_user) = auth_user.ok_or(PostError::NotAuthorized)?;

    let post = Post::new(title, content, auth_user.user_id);
    state.repo.create(&post).await?;

    tracing::info!(post_id = %post.post_id, user_id = %post.user_id, "Post created");

    Ok(Json(MessageResponse::new("Post created successfully")))
}

// ============================================================================
// List
// ============================================================================

/// GET /api/v1/posts
pub async fn list<R>(
    State(state): State<PostAppState<R>>,
) -> PostResult<Json<Vec<PostResponse>>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let posts = state.repo.list().await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

// ============================================================================
// Get One
// ============================================================================

/// GET /api/v1/posts/{id}
pub async fn get_one<R>(
    State(state): State<PostAppState<R>>,
    Path(id): Path<String>,
) -> PostResult<Json<PostResponse>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;

    let post = state
        .repo
        .find_by_id(&post_id)
        .await?
        .ok_or(PostError::NotFound)?;

    Ok(Json(PostResponse::from(post)))
}

// ============================================================================
// Update
// ============================================================================

/// PUT /api/v1/posts/update/{id}
///
/// Two preserved quirks: missing fields respond 404, and success
/// responds 201. Any authenticated user may update any post.
pub async fn update<R>(
    State(state): State<PostAppState<R>>,
    auth_user: Option<Extension<AuthUser>>,
    Path(id): Path<String>,
    Json(req): Json<PostBodyRequest>,
) -> PostResult<impl IntoResponse>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    auth_user.ok_or(PostError::NotAuthorized)?;

    let post_id = parse_post_id(&id)?;

    let title = req
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or(PostError::UpdateFieldsMissing)?;
    let content = req
        .content
        .as_deref()
        .filter(|c| !c.is_empty())
        .ok_or(PostError::UpdateFieldsMissing)?;

    // Single conditional update; 0 affected rows means the post was
    // gone, with no separate existence lookup racing the write.
    let affected = state.repo.update(&post_id, title, content).await?;
    if affected == 0 {
        return Err(PostError::NotFound);
    }

    tracing::info!(post_id = %post_id, "Post updated");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Post updated successfully")),
    ))
}

// ============================================================================
// Delete
// ============================================================================

/// DELETE /api/v1/posts/delete/{id}
pub async fn remove<R>(
    State(state): State<PostAppState<R>>,
    auth_user: Option<Extension<AuthUser>>,
    Path(id): Path<String>,
) -> PostResult<impl IntoResponse>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    auth_user.ok_or(PostError::NotAuthorized)?;

    let post_id = parse_post_id(&id)?;

    let affected = state.repo.delete(&post_id).await?;
    if affected == 0 {
        return Err(PostError::NotFound);
    }

    tracing::info!(post_id = %post_id, "Post deleted");

    Ok(Json(MessageResponse::new("Post deleted successfully")))
}
