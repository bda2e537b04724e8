//! One `request_completed` event per request, leveled by status class.

use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::{Method, StatusCode};
use actix_web::Error as ActixError;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::Level;

use super::request_trace::TraceId;

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

/// Fields of a finished request.
struct Completion {
    method: Method,
    path: String,
    route: String,
    status: StatusCode,
    duration_us: u64,
    trace_id: String,
}

impl Completion {
    fn level(&self) -> Level {
        if self.status.is_server_error() {
            Level::ERROR
        } else if self.status.is_client_error() {
            Level::WARN
        } else {
            Level::INFO
        }
    }

    fn emit(&self) {
        // `event!` needs a constant level per callsite.
        macro_rules! completed {
            ($lvl:expr) => {
                tracing::event!(
                    $lvl,
                    http.method = %self.method,
                    url.path = %self.path,
                    http.route = %self.route,
                    http.status_code = self.status.as_u16(),
                    duration_us = self.duration_us,
                    trace_id = %self.trace_id,
                    "request_completed"
                )
            };
        }

        let level = self.level();
        if level == Level::ERROR {
            completed!(Level::ERROR);
        } else if level == Level::WARN {
            completed!(Level::WARN);
        } else {
            completed!(Level::INFO);
        }
    }
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().clone();
        let path = req.path().to_owned();
        let trace_id = TraceId::of(&req);

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, route) = match &result {
                Ok(res) => (
                    res.status(),
                    res.request().match_pattern().unwrap_or_else(|| "-".to_owned()),
                ),
                Err(err) => (err.as_response_error().status_code(), "-".to_owned()),
            };

            Completion {
                method,
                path,
                route,
                status,
                duration_us: start.elapsed().as_micros() as u64,
                trace_id,
            }
            .emit();

            result
        })
    }
}
