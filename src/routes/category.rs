use actix_web::{delete, get, post, put, web::Data, HttpRequest, HttpResponse};

use super::{deleted, path_id};
use crate::{
    app::{AppError, AppState},
    database::models::category::*,
};

/// Pipe for listing every category
/// - url: `{domain}/categories`
///
/// # Response
/// ## Ok
/// ```
/// [
///     { "id": 1, "name": "Systems" }
/// ]
/// ```
/// ## Error
/// - Internal server error
#[get("/categories")]
pub async fn get_categories(app_state: Data<AppState>) -> Result<HttpResponse, AppError> {
    let categories = app_state.run(|store| store.list_categories()).await?;

    Ok(HttpResponse::Ok().json(categories))
}

/// Pipe for creating a category
/// - url: `{domain}/categories`
/// - body: `{"name": "..."}`
#[post("/categories")]
pub async fn create_category(
    req_body: String,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let form = serde_json::from_str::<CategoryForm>(&req_body)?;

    let category = app_state
        .run(move |store| store.create_category(form))
        .await?;
    log::debug!("created category {}", category.id);

    Ok(HttpResponse::Ok().json(category))
}

/// Pipe for renaming a category
/// - url: `{domain}/categories/{category_id}`
///
/// # HTTP request requirements
/// ## body
/// - json with `name`
///
/// # Response
/// ## Ok
/// - the updated [category](Category)
/// ## Error
/// - Not found
/// - Unprocessable entity
/// - Internal server error
#[put("/categories/{category_id}")]
pub async fn update_category(
    req: HttpRequest,
    req_body: String,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let category_id = path_id(&req, "category_id")?;
    let form = serde_json::from_str::<CategoryForm>(&req_body)?;

    let category = app_state
        .run(move |store| store.update_category(category_id, form))
        .await?;

    Ok(HttpResponse::Ok().json(category))
}

/// Pipe for deleting a category. Blogs in the category keep pointing at the
/// deleted id.
/// - url: `{domain}/categories/{category_id}`
#[delete("/categories/{category_id}")]
pub async fn delete_category(
    req: HttpRequest,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let category_id = path_id(&req, "category_id")?;

    app_state
        .run(move |store| store.delete_category(category_id))
        .await?;
    log::info!("deleted category {}", category_id);

    Ok(deleted(format!("Category with id {} has been deleted", category_id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::{blog::BlogForm, status::BlogStatus};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    fn named(name: &str) -> CategoryForm {
        CategoryForm {
            name: String::from(name),
        }
    }

    #[actix_rt::test]
    async fn test_create_update_list() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(AppState::in_memory()))
                .service(super::create_category)
                .service(super::update_category)
                .service(super::get_categories),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/categories")
            .set_json(named("Systems"))
            .to_request();
        let created: Category = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created.name, "Systems");

        let req = test::TestRequest::put()
            .uri(&format!("/categories/{}", created.id))
            .set_json(named("Embedded"))
            .to_request();
        let updated: Category = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated, Category { id: created.id, name: String::from("Embedded") });

        let req = test::TestRequest::get().uri("/categories").to_request();
        let categories: Vec<Category> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(categories, vec![updated]);
    }

    #[actix_rt::test]
    async fn test_missing_category_is_not_found() {
        let state = AppState::in_memory();
        let kept = state.store.create_category(named("Systems")).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(Data::new(state.clone()))
                .service(super::update_category)
                .service(super::delete_category),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/categories/12")
            .set_json(named("Nope"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Category not found");

        let req = test::TestRequest::delete().uri("/categories/12").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Category not found");

        assert_eq!(state.store.list_categories().unwrap(), vec![kept]);
    }

    #[actix_rt::test]
    async fn test_delete_keeps_dangling_blog_reference() {
        let state = AppState::in_memory();
        let category = state.store.create_category(named("Systems")).unwrap();
        let blog = state
            .store
            .create_blog(BlogForm {
                image: String::from("cover.png"),
                title: String::from("Allocators"),
                content: String::from("..."),
                category_id: Some(category.id),
                status: BlogStatus::Published,
            })
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(Data::new(state.clone()))
                .service(super::delete_category),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/categories/{}", category.id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body[format!("Category with id {} has been deleted", category.id)], true);

        assert!(state.store.list_categories().unwrap().is_empty());
        assert_eq!(state.store.list_blogs().unwrap(), vec![blog.clone()]);
        assert_eq!(blog.category_id, Some(category.id));
    }
}
