use std::fmt;

use actix_web::ResponseError;
use actix_web::http::StatusCode;
use thiserror::Error;
use tokio::task::JoinError;

use crate::engine::DataError;
use crate::models::InputError;

/// Everything that can fail a request to the order filter page.
///
/// The response body is the plain-text message; input problems are the
/// caller's fault (400), everything else is ours (500).
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error("Order aggregation task failed: {0}")]
    Task(#[from] JoinError),
    #[error("Page rendering failed")]
    Render(#[from] fmt::Error)
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Input(_) => StatusCode::BAD_REQUEST,
            AppError::Data(_) | AppError::Task(_) | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
