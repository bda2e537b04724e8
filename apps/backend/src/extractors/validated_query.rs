use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Query-string extractor that reports coercion failures as 422 problems.
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

impl<T> Deref for ValidatedQuery<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> FromRequest for ValidatedQuery<T>
where
    T: DeserializeOwned,
{
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = web::Query::<T>::from_query(req.query_string())
            .map(|q| ValidatedQuery(q.into_inner()))
            .map_err(|e| {
                debug!(query = req.query_string(), error = %e, "query parsing failed");
                AppError::invalid(
                    ErrorCode::ValidationError,
                    format!("Invalid query string: {e}"),
                )
            });
        ready(result)
    }
}
