use actix_web::{delete, get, post, put, web::Data, HttpRequest, HttpResponse};

use super::{deleted, path_id};
use crate::{
    app::{AppError, AppState},
    database::models::blog::*,
};

/// Pipe for listing every blog
/// - url: `{domain}/blogs`
#[get("/blogs")]
pub async fn get_blogs(app_state: Data<AppState>) -> Result<HttpResponse, AppError> {
    let blogs = app_state.run(|store| store.list_blogs()).await?;

    Ok(HttpResponse::Ok().json(blogs))
}

/// Pipe for creating a blog
/// - url: `{domain}/blogs`
///
/// # HTTP request requirements
/// ## body
/// - json with `image`, `title`, `content` and `status` (`draft` or `published`)
/// - optional `category_id`, which is stored without checking the category exists
///
/// # Response
/// ## Ok
/// - the created [blog](Blog) including its `bid`
/// ## Error
/// - Unprocessable entity
/// - Internal server error
#[post("/blogs")]
pub async fn create_blog(
    req_body: String,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let form = serde_json::from_str::<BlogForm>(&req_body)?;

    let blog = app_state.run(move |store| store.create_blog(form)).await?;
    log::info!("created blog {}", blog.bid);

    Ok(HttpResponse::Ok().json(blog))
}

/// Pipe for replacing every field of a blog
/// - url: `{domain}/blogs/{blog_id}`
///
/// # Response
/// ## Ok
/// - the updated [blog](Blog)
/// ## Error
/// - Not found
/// - Unprocessable entity
/// - Internal server error
#[put("/blogs/{blog_id}")]
pub async fn update_blog(
    req: HttpRequest,
    req_body: String,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let blog_id = path_id(&req, "blog_id")?;
    let form = serde_json::from_str::<BlogForm>(&req_body)?;

    let blog = app_state
        .run(move |store| store.update_blog(blog_id, form))
        .await?;

    Ok(HttpResponse::Ok().json(blog))
}

/// Pipe for deleting a blog, its comments and tag links are left in place
/// - url: `{domain}/blogs/{blog_id}`
#[delete("/blogs/{blog_id}")]
pub async fn delete_blog(
    req: HttpRequest,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let blog_id = path_id(&req, "blog_id")?;

    app_state
        .run(move |store| store.delete_blog(blog_id))
        .await?;
    log::info!("deleted blog {}", blog_id);

    Ok(deleted(format!("blog of id {} has been deleted", blog_id)))
}
