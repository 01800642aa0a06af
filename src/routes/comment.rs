use actix_web::{delete, get, post, put, web::Data, HttpRequest, HttpResponse};

use super::{deleted, path_id};
use crate::{
    app::{AppError, AppState},
    database::models::comment::*,
};

/// Pipe for listing every comment
/// - url: `{domain}/comments`
///
/// # Response
/// ## Ok
/// ```
/// [
///     {
///         "cid": 1,
///         "userid": 3,
///         "bid": 7,
///         "comment": "Comment body 1",
///         "created_at": "2022-08-12T06:05:31.097180",
///         "updated_at": "2022-08-12T06:05:31.097180",
///         "status": "active"
///     }
/// ]
/// ```
/// ## Error
/// - Internal server error
#[get("/comments")]
pub async fn get_comments(app_state: Data<AppState>) -> Result<HttpResponse, AppError> {
    let comments = app_state.run(|store| store.list_comments()).await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// Pipe for creating a comment on a blog
/// - url: `{domain}/comments`
///
/// # HTTP request requirements
/// ## body
/// - json with `userid`, `bid` and `comment`
/// - `bid` must name an existing blog, `userid` is not checked
///
/// # Example
/// ```
/// let comment = "{ \"userid\": 3, \"bid\": 7, \"comment\": \"comment text\" }";
/// let request = actix_web::test::TestRequest::post()
///     .uri("localhost/comments")
///     .set_payload(comment)
///     .to_request();
/// ```
///
/// # Response
/// ## Ok
/// - the created [comment](Comment), always with `status` `active`
/// ## Error
/// - Not found, when the blog does not exist
/// - Unprocessable entity
/// - Internal server error
#[post("/comments")]
pub async fn create_comment(
    req_body: String,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let form = serde_json::from_str::<CommentForm>(&req_body)?;

    let comment = app_state
        .run(move |store| store.create_comment(form))
        .await?;
    log::info!("created comment {} on blog {}", comment.cid, comment.bid);

    Ok(HttpResponse::Ok().json(comment))
}

/// Pipe for editing a comment
/// - url: `{domain}/comments/{comment_id}`
///
/// ## body
/// - same fields as on creation. The blog is not checked here and the
///   status is kept.
///
/// # Response
/// ## Ok
/// - the updated [comment](Comment) with a fresh `updated_at`
/// ## Error
/// - Not found
/// - Unprocessable entity
/// - Internal server error
#[put("/comments/{comment_id}")]
pub async fn update_comment(
    req: HttpRequest,
    req_body: String,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let comment_id = path_id(&req, "comment_id")?;
    let form = serde_json::from_str::<CommentForm>(&req_body)?;

    let comment = app_state
        .run(move |store| store.update_comment(comment_id, form))
        .await?;

    Ok(HttpResponse::Ok().json(comment))
}

/// Pipe for deleting a comment
/// - url: `{domain}/comments/{comment_id}`
///
/// # Response
/// ## Ok
/// - `{"Comment with id {comment_id} has been deleted": true}`
/// ## Error
/// - Not found
/// - Internal server error
#[delete("/comments/{comment_id}")]
pub async fn delete_comment(
    req: HttpRequest,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let comment_id = path_id(&req, "comment_id")?;

    app_state
        .run(move |store| store.delete_comment(comment_id))
        .await?;
    log::info!("deleted comment {}", comment_id);

    Ok(deleted(format!("Comment with id {} has been deleted", comment_id)))
}
