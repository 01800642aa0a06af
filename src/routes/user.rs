use actix_web::{delete, get, post, put, web::Data, HttpRequest, HttpResponse};

use super::{deleted, path_id};
use crate::{
    app::{AppError, AppState},
    database::models::user::*,
};

/// Pipe for listing every user
/// - url: `{domain}/users`
///
/// # Response
/// ## Ok
/// - json array of [users](User), empty when there are none
/// ## Error
/// - Internal server error
#[get("/users")]
pub async fn get_users(app_state: Data<AppState>) -> Result<HttpResponse, AppError> {
    let users = app_state.run(|store| store.list_users()).await?;

    Ok(HttpResponse::Ok().json(users))
}

/// Pipe for creating an user
/// - url: `{domain}/users`
///
/// # HTTP request requirements
/// ## body
/// - json with `name`, `email`, `password` and `username`
/// - optional `phone`, `profile_image`, `bio` and `status` (`active` by default)
///
/// # Example
/// ```
/// let data = "{ \"name\": \"Ana\", \"email\": \"ana@example.com\", \"password\": \"pw\", \"username\": \"ana\" }";
/// let request = actix_web::test::TestRequest::post()
///     .uri("localhost/users")
///     .set_payload(data)
///     .to_request();
/// ```
///
/// # Response
/// ## Ok
/// - the created [user](User) including its `userid`
/// ## Error
/// - Unprocessable entity
/// - Internal server error
#[post("/users")]
pub async fn create_user(
    req_body: String,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let form = serde_json::from_str::<UserForm>(&req_body)?;

    let user = app_state.run(move |store| store.create_user(form)).await?;
    log::info!("created user {}", user.userid);

    Ok(HttpResponse::Ok().json(user))
}

/// Pipe for replacing every field of an user
/// - url: `{domain}/users/{user_id}`
///
/// # HTTP request requirements
/// - `{user_id}` as a parameter
///
/// ## body
/// - same fields as on creation, optional fields left out are cleared
///
/// # Response
/// ## Ok
/// - the updated [user](User)
/// ## Error
/// - Not found
/// - Unprocessable entity
/// - Internal server error
#[put("/users/{user_id}")]
pub async fn update_user(
    req: HttpRequest,
    req_body: String,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = path_id(&req, "user_id")?;
    let form = serde_json::from_str::<UserForm>(&req_body)?;

    let user = app_state
        .run(move |store| store.update_user(user_id, form))
        .await?;

    Ok(HttpResponse::Ok().json(user))
}

/// Pipe for deleting an user. Comments written by the user are kept.
/// - url: `{domain}/users/{user_id}`
///
/// # Response
/// ## Ok
/// - `{"user of id {user_id} has been deleted": true}`
/// ## Error
/// - Not found
/// - Internal server error
#[delete("/users/{user_id}")]
pub async fn delete_user(
    req: HttpRequest,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = path_id(&req, "user_id")?;

    app_state
        .run(move |store| store.delete_user(user_id))
        .await?;
    log::info!("deleted user {}", user_id);

    Ok(deleted(format!("user of id {} has been deleted", user_id)))
}
