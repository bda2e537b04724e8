use std::future::Future;
use std::ops::Deref;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::debug;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// JSON body extractor.
///
/// Read and parse failures become a 422 `VALIDATION_ERROR` problem with a
/// sanitized message; bodies over [`MAX_BODY_BYTES`] are a 400.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, AppError>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();
        let path = req.path().to_owned();

        Box::pin(async move {
            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    debug!(%path, error = %e, "body read failed");
                    AppError::invalid(ErrorCode::ValidationError, "Failed to read request body")
                })?;
                if body.len() + chunk.len() > MAX_BODY_BYTES {
                    return Err(AppError::bad_request(
                        ErrorCode::BadRequest,
                        "Request body too large",
                    ));
                }
                body.extend_from_slice(&chunk);
            }

            serde_json::from_slice::<T>(&body)
                .map(ValidatedJson)
                .map_err(|e| {
                    debug!(%path, error = %e, body_size = body.len(), "json body rejected");
                    AppError::invalid(ErrorCode::ValidationError, describe(&e))
                })
        })
    }
}

/// Client-safe description of a JSON failure. Never echoes body content.
fn describe(error: &serde_json::Error) -> String {
    match error.classify() {
        Category::Syntax => format!(
            "Invalid JSON at line {} column {}",
            error.line(),
            error.column()
        ),
        Category::Eof => "Invalid JSON: unexpected end of input".to_owned(),
        Category::Data => "Invalid JSON: wrong types or missing required fields".to_owned(),
        Category::Io => "Invalid JSON: body could not be read".to_owned(),
    }
}
