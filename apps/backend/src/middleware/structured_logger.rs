use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::Error as ActixError;
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

/// One `request_completed` event per request, levelled by status class.
///
/// Runs inside `TraceSpan`, so the trace id, method and path come from the
/// span; the event adds the outcome and the game the request addressed.
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
        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, game_id) = match &result {
                // Routing has run by now, so the path parameters are known.
                Ok(res) => (
                    res.status(),
                    res.request().match_info().get("game_id").map(str::to_owned),
                ),
                Err(err) => (err.as_response_error().status_code(), None),
            };
            log_completion(status, game_id.as_deref(), start);

            result
        })
    }
}

fn log_completion(status: StatusCode, game_id: Option<&str>, start: Instant) {
    let status_code = status.as_u16();
    let duration_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
    let game_id = game_id.unwrap_or("-");

    if status.is_server_error() {
        error!(http.status_code = status_code, duration_us, game_id, "request_completed");
    } else if status.is_client_error() {
        warn!(http.status_code = status_code, duration_us, game_id, "request_completed");
    } else {
        info!(http.status_code = status_code, duration_us, game_id, "request_completed");
    }
}
