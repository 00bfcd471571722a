use actix_web::{web, HttpMessage, HttpRequest};
use serde::de::DeserializeOwned;
use crate::server::controller::error::CustomError;

pub(crate) mod ad;
pub(crate) mod assignment;
pub(crate) mod error;
pub(crate) mod table;

/// Reads a json request body. A body that is empty or not sent as json reads as
/// an empty object, so missing fields are reported by the handler itself.
pub(crate) fn json_body<T>(req: &HttpRequest, body: &web::Bytes) -> Result<T, CustomError>
where
    T: DeserializeOwned + Default,
{
    let essence = req.content_type().split(';').next().unwrap_or_default().trim();
    let is_json = essence.eq_ignore_ascii_case("application/json") || essence.ends_with("+json");
    if !is_json || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| CustomError::MalformedBody(e.to_string()))
}
