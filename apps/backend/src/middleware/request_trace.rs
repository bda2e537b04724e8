//! Per-request trace id.
//!
//! Wire it outermost: `TraceSpan`, `StructuredLogger` and error rendering all
//! read the id it assigns.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::HttpMessage;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use uuid::Uuid;

use crate::trace_ctx;

pub const TRACE_HEADER: HeaderName = HeaderName::from_static("x-trace-id");

/// Request extension holding the trace id.
#[derive(Debug, Clone)]
pub struct TraceId(pub String);

impl TraceId {
    /// Trace id stored on `req`, or the no-trace placeholder.
    pub fn of(req: &ServiceRequest) -> String {
        req.extensions()
            .get::<TraceId>()
            .map(|t| t.0.clone())
            .unwrap_or_else(|| trace_ctx::NO_TRACE.to_owned())
    }
}

pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let id = Uuid::new_v4().to_string();
        req.extensions_mut().insert(TraceId(id.clone()));

        let inner = trace_ctx::with_trace_id(id.clone(), self.service.call(req));

        Box::pin(async move {
            let mut res = inner.await?;

            // Problem responses set the header themselves.
            if !res.headers().contains_key(&TRACE_HEADER) {
                if let Ok(value) = HeaderValue::from_str(&id) {
                    res.headers_mut().insert(TRACE_HEADER, value);
                }
            }
            Ok(res)
        })
    }
}
