use actix_web::{delete, get, post, put, web::Data, HttpRequest, HttpResponse};

use super::{deleted, path_id};
use crate::{
    app::{AppError, AppState},
    database::models::blog_tag::*,
};

/// Pipe for listing every blog tag
/// - url: `{domain}/blog_tags`
///
/// # Response
/// ## Ok
/// ```
/// [
///     { "tag_id": 2, "bid": 5, "status": "active" }
/// ]
/// ```
/// ## Error
/// - Internal server error
#[get("/blog_tags")]
pub async fn get_blog_tags(app_state: Data<AppState>) -> Result<HttpResponse, AppError> {
    let links = app_state.run(|store| store.list_blog_tags()).await?;

    Ok(HttpResponse::Ok().json(links))
}

/// Pipe for tagging a blog
/// - url: `{domain}/blog_tags`
///
/// ## body
/// - json with `tag_id`, `bid` and an optional `status` (`active` by default).
///   Neither id is checked, linking the same pair twice is a store error.
#[post("/blog_tags")]
pub async fn create_blog_tag(
    req_body: String,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let link = serde_json::from_str::<BlogTag>(&req_body)?;

    let link = app_state
        .run(move |store| store.create_blog_tag(link))
        .await?;
    log::debug!("tagged blog {} with tag {}", link.bid, link.tag_id);

    Ok(HttpResponse::Ok().json(link))
}

/// Pipe for changing the status of a blog tag
/// - url: `{domain}/blog_tags/{tag_id}/{bid}`
///
/// ## body
/// - same shape as on creation, only `status` is applied
#[put("/blog_tags/{tag_id}/{bid}")]
pub async fn update_blog_tag(
    req: HttpRequest,
    req_body: String,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let tag_id = path_id(&req, "tag_id")?;
    let bid = path_id(&req, "bid")?;
    let body = serde_json::from_str::<BlogTag>(&req_body)?;

    let link = app_state
        .run(move |store| store.update_blog_tag(tag_id, bid, body.status))
        .await?;

    Ok(HttpResponse::Ok().json(link))
}

/// Pipe for removing a tag from a blog
/// - url: `{domain}/blog_tags/{tag_id}/{bid}`
///
/// # Response
/// ## Ok
/// - `{"BlogTag with tag_id {tag_id} and bid {bid} has been deleted": true}`
/// ## Error
/// - Not found
/// - Internal server error
#[delete("/blog_tags/{tag_id}/{bid}")]
pub async fn delete_blog_tag(
    req: HttpRequest,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let tag_id = path_id(&req, "tag_id")?;
    let bid = path_id(&req, "bid")?;

    app_state
        .run(move |store| store.delete_blog_tag(tag_id, bid))
        .await?;
    log::info!("removed tag {} from blog {}", tag_id, bid);

    Ok(deleted(format!(
        "BlogTag with tag_id {} and bid {} has been deleted",
        tag_id, bid
    )))
}
