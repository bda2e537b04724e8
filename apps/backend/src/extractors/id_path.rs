use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Integer `{id}` path segment.
///
/// Only coerces the segment; existence is checked by the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl IdPath {
    fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        let raw = raw.ok_or_else(|| {
            AppError::invalid(ErrorCode::InvalidId, "Missing id parameter")
        })?;
        raw.parse::<i64>()
            .map(IdPath)
            .map_err(|_| AppError::invalid(ErrorCode::InvalidId, format!("Invalid id: {raw}")))
    }
}

impl FromRequest for IdPath {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::parse(req.match_info().get("id")))
    }
}
