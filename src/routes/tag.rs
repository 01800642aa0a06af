use actix_web::{delete, get, post, put, web::Data, HttpRequest, HttpResponse};

use super::{deleted, path_id};
use crate::{
    app::{AppError, AppState},
    database::models::tag::*,
};

/// Pipe for listing every tag
/// - url: `{domain}/tags`
///
/// # Response
/// ## Ok
/// - a json array of [tags](Tag)
/// ## Error
/// - Internal server error
#[get("/tags")]
pub async fn get_tags(app_state: Data<AppState>) -> Result<HttpResponse, AppError> {
    let tags = app_state.run(|store| store.list_tags()).await?;

    Ok(HttpResponse::Ok().json(tags))
}

/// Pipe for creating a tag
/// - url: `{domain}/tags`
///
/// # HTTP request requirements
/// ## body
/// - json with `tname`
///
/// # Response
/// ## Ok
/// - the created [tag](Tag) including its `tag_id`
/// ## Error
/// - Unprocessable entity
/// - Internal server error
#[post("/tags")]
pub async fn create_tag(
    req_body: String,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let form = serde_json::from_str::<TagForm>(&req_body)?;

    let tag = app_state.run(move |store| store.create_tag(form)).await?;
    log::debug!("created tag {} ({})", tag.tag_id, tag.tname);

    Ok(HttpResponse::Ok().json(tag))
}

/// Pipe for renaming a tag
/// - url: `{domain}/tags/{tag_id}`
///
/// # HTTP request requirements
/// ## body
/// - json with `tname`
///
/// # Response
/// ## Ok
/// - the updated [tag](Tag)
/// ## Error
/// - Not found
/// - Unprocessable entity
/// - Internal server error
#[put("/tags/{tag_id}")]
pub async fn update_tag(
    req: HttpRequest,
    req_body: String,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let tag_id = path_id(&req, "tag_id")?;
    let form = serde_json::from_str::<TagForm>(&req_body)?;

    let tag = app_state
        .run(move |store| store.update_tag(tag_id, form))
        .await?;

    Ok(HttpResponse::Ok().json(tag))
}

/// Pipe for deleting a tag. Blog links to the tag are not removed.
/// - url: `{domain}/tags/{tag_id}`
///
/// # Response
/// ## Ok
/// - `{"Tag with id {tag_id} has been deleted": true}`
/// ## Error
/// - Not found
/// - Internal server error
#[delete("/tags/{tag_id}")]
pub async fn delete_tag(
    req: HttpRequest,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let tag_id = path_id(&req, "tag_id")?;

    app_state.run(move |store| store.delete_tag(tag_id)).await?;
    log::info!("deleted tag {}", tag_id);

    Ok(deleted(format!("Tag with id {} has been deleted", tag_id)))
}
