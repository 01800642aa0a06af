pub mod config;

use std::{num::ParseIntError, sync::Arc};

use actix_web::{
    error::BlockingError, http::StatusCode, web, HttpResponse, ResponseError,
};
use diesel::r2d2::PoolError;
use serde::Serialize;
use thiserror::Error;

use crate::database::store::Store;

/** Shared by every worker, holds the store the handlers run their queries against */
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        AppState { store }
    }

    /// Runs one unit of store work on the blocking thread pool so diesel
    /// calls do not stall the async workers.
    pub async fn run<T, F>(&self, work: F) -> Result<T, AppError>
    where
        F: FnOnce(&dyn Store) -> Result<T, AppError> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        web::block(move || work(store.as_ref())).await?
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        AppState::new(Arc::new(crate::database::memory::MemoryStore::new()))
    }
}

/** Errors a request can end with, each one is rendered as `{"detail": ...}` */
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("Internal Server Error: {0}")]
    Store(String),
    #[error("{0}")]
    Validation(String),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Store(message) = self {
            log::error!("store fault: {}", message);
        }

        HttpResponse::build(self.status_code()).json(ErrorBody {
            detail: self.to_string(),
        })
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        AppError::Store(err.to_string())
    }
}
impl From<PoolError> for AppError {
    fn from(err: PoolError) -> Self {
        AppError::Store(err.to_string())
    }
}
impl From<BlockingError> for AppError {
    fn from(err: BlockingError) -> Self {
        AppError::Store(err.to_string())
    }
}
impl From<ParseIntError> for AppError {
    fn from(err: ParseIntError) -> Self {
        AppError::Validation(format!("invalid path parameter: {}", err))
    }
}
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Io => AppError::Store(err.to_string()),
            _ => AppError::Validation(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body;

    #[actix_rt::test]
    async fn test_store_fault_echoes_message() {
        let err = AppError::Store(String::from("relation \"tags\" does not exist"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = body::to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json["detail"],
            "Internal Server Error: relation \"tags\" does not exist"
        );
    }

    #[test]
    fn test_parse_errors_are_validation() {
        let err: AppError = "abc".parse::<i32>().unwrap_err().into();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let err: AppError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_not_found_detail_is_plain() {
        let err = AppError::NotFound(String::from("Tag not found"));
        assert_eq!(err.to_string(), "Tag not found");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
