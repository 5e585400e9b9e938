use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use http::{Request, Response};
use tower::{Layer, Service};
use tracing::{info, warn};

/// A Tower layer that logs HTTP requests and their outcome.
#[derive(Clone, Copy)]
pub struct HttpLoggingLayer;

impl<S> Layer<S> for HttpLoggingLayer {
    type Service = HttpLoggingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        HttpLoggingService { inner }
    }
}

/// A Tower service that logs HTTP requests and their outcome.
#[derive(Clone)]
pub struct HttpLoggingService<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for HttpLoggingService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let start = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        info!(http.method = %method, http.path = %path, "HTTP request started");

        let mut inner = self.inner.clone();
        Box::pin(async move {
            let result = inner.call(req).await;
            let duration_ms = start.elapsed().as_millis();

            match &result {
                Ok(response) if response.status().is_server_error() => {
                    warn!(
                        http.method = %method,
                        http.path = %path,
                        http.status = response.status().as_u16(),
                        duration_ms = %duration_ms,
                        "HTTP request failed"
                    );
                }
                Ok(response) => {
                    info!(
                        http.method = %method,
                        http.path = %path,
                        http.status = response.status().as_u16(),
                        duration_ms = %duration_ms,
                        "HTTP request completed"
                    );
                }
                Err(_) => {
                    warn!(
                        http.method = %method,
                        http.path = %path,
                        http.status = "error",
                        duration_ms = %duration_ms,
                        "HTTP request errored"
                    );
                }
            }

            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::routing::get;
    use axum::Router;
    use http::StatusCode;
    use tower::ServiceExt;

    #[allow(clippy::unused_async)]
    async fn ok_handler() -> &'static str {
        "ok"
    }

    #[tokio::test]
    async fn test_layer_passes_response_through() {
        let app = Router::new()
            .route("/ping", get(ok_handler))
            .layer(HttpLoggingLayer);
        let response = app
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"ok");
    }
}
