//! Blog post handlers.

use actix_web::{HttpResponse, web};

use geoblog_core::domain::BlogPost;
use geoblog_core::ports::BaseRepository;
use geoblog_shared::LegacyNotFound;
use geoblog_shared::dto::{BlogPostResponse, CreateBlogPostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: BlogPost) -> BlogPostResponse {
    BlogPostResponse {
        id: post.id.to_string(),
        location_id: post.location_id,
        user: post.user,
        date: post.date,
        time: post.time,
        text: post.text,
    }
}

/// POST /blog
///
/// `location_id` is not checked against the stored locations.
pub async fn create_blog_post(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let missing = req.missing_fields();

    let CreateBlogPostRequest {
        location_id: Some(location_id),
        user: Some(user),
        date: Some(date),
        time: Some(time),
        text: Some(text),
    } = req
    else {
        return Err(AppError::missing_fields(&missing));
    };

    let post = BlogPost::new(location_id, user, date, time, text)?;
    let post = state.blog_posts.create(post).await?;
    tracing::info!(post_id = %post.id, location_id = %post.location_id, "Blog post created");

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// GET /blog/{id}
///
/// Unlike `GET /locations`, an empty result is a 404 with `{"Error": "Not found"}`.
pub async fn list_blog_posts(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let location_id = path.into_inner();
    let posts = state.blog_posts.find_by_location_id(&location_id).await?;

    if posts.is_empty() {
        return Ok(HttpResponse::NotFound().json(LegacyNotFound::default()));
    }

    Ok(HttpResponse::Ok().json(posts.into_iter().map(to_response).collect::<Vec<_>>()))
}
