pub mod blog;
pub mod blog_tag;
pub mod category;
pub mod comment;
pub mod tag;
pub mod user;

use actix_web::{web::ServiceConfig, HttpRequest, HttpResponse};
use serde_json::{Map, Value};

use crate::app::AppError;

/** Registers every entity route */
pub fn configure(cfg: &mut ServiceConfig) {
    cfg
        //User routes
        .service(user::get_users)
        .service(user::create_user)
        .service(user::update_user)
        .service(user::delete_user)
        //Blog routes
        .service(blog::get_blogs)
        .service(blog::create_blog)
        .service(blog::update_blog)
        .service(blog::delete_blog)
        //Category routes
        .service(category::get_categories)
        .service(category::create_category)
        .service(category::update_category)
        .service(category::delete_category)
        //Comment routes
        .service(comment::get_comments)
        .service(comment::create_comment)
        .service(comment::update_comment)
        .service(comment::delete_comment)
        //Tag routes
        .service(tag::get_tags)
        .service(tag::create_tag)
        .service(tag::update_tag)
        .service(tag::delete_tag)
        //Blog tag routes
        .service(blog_tag::get_blog_tags)
        .service(blog_tag::create_blog_tag)
        .service(blog_tag::update_blog_tag)
        .service(blog_tag::delete_blog_tag);
}

/// Reads an integer key out of the matched path.
pub(crate) fn path_id(req: &HttpRequest, name: &str) -> Result<i32, AppError> {
    Ok(req.match_info().query(name).parse::<i32>()?)
}

/// Confirmation body for a delete: `{"<message>": true}`.
pub(crate) fn deleted(message: String) -> HttpResponse {
    let mut body = Map::new();
    body.insert(message, Value::Bool(true));
    HttpResponse::Ok().json(body)
}
