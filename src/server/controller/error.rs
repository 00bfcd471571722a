use actix_web::{error, HttpResponse};
use actix_web::http::StatusCode;
use derive_more::{Display, Error, From};
use log::error;
use serde::Serialize;
use crate::server::store::StoreError;

#[derive(Debug, Display, Error, From)]
pub(crate) enum CustomError {
    #[display("{_0}")]
    #[from(ignore)]
    Validation(#[error(not(source))] &'static str),
    #[display("invalid request body, {_0}")]
    #[from(ignore)]
    MalformedBody(#[error(not(source))] String),
    #[display("{_0}")]
    #[from(ignore)]
    Conflict(#[error(not(source))] &'static str),
    #[display("{_0}")]
    #[from(ignore)]
    NotFound(#[error(not(source))] &'static str),
    #[display("store error")]
    Store(#[error(source)] StoreError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl error::ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::Validation(_) | CustomError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            CustomError::Conflict(_) => StatusCode::CONFLICT,
            CustomError::NotFound(_) => StatusCode::NOT_FOUND,
            CustomError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let CustomError::Store(e) = self {
            error!("request failed on store access, {}", e);
        }
        HttpResponse::build(self.status_code())
            .json(ErrorBody { error: self.to_string() })
    }
}
