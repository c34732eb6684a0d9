use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderName, HeaderValue, Method, Request, StatusCode},
    response::{IntoResponse, Response},
};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// CORS policy for the HTTP entrypoint.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub allow_methods: Vec<String>,
    pub allow_headers: Vec<String>,
    pub expose_headers: Vec<String>,
    pub allow_credentials: bool,
    pub max_age: u32,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origins: vec!["*".to_string()],
            allow_methods: ["GET", "POST", "PUT", "DELETE", "OPTIONS", "PATCH"]
                .iter()
                .map(|method| method.to_string())
                .collect(),
            allow_headers: [
                "Origin",
                "Content-Type",
                "Accept",
                "Authorization",
                "X-Requested-With",
            ]
            .iter()
            .map(|header| header.to_string())
            .collect(),
            expose_headers: vec!["Content-Length".to_string()],
            allow_credentials: false,
            max_age: 86400, // 24 hours
        }
    }
}

impl CorsConfig {
    fn is_origin_allowed(&self, origin: &str) -> bool {
        if origin.is_empty() {
            return false;
        }
        self.allow_origins
            .iter()
            .any(|allowed| allowed == "*" || allowed == origin)
    }
}

/// Tower layer applying a [`CorsConfig`] to every response and answering
/// preflight requests before they reach the router.
#[derive(Clone)]
pub struct CorsLayer {
    config: Arc<CorsConfig>,
}

impl CorsLayer {
    pub fn new(config: CorsConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl Default for CorsLayer {
    fn default() -> Self {
        Self::new(CorsConfig::default())
    }
}

impl<S> Layer<S> for CorsLayer {
    type Service = CorsMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CorsMiddleware {
            inner,
            config: Arc::clone(&self.config),
        }
    }
}

#[derive(Clone)]
pub struct CorsMiddleware<S> {
    inner: S,
    config: Arc<CorsConfig>,
}

impl<S> Service<Request<Body>> for CorsMiddleware<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Response, S::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let config = Arc::clone(&self.config);
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let origin = request
                .headers()
                .get(header::ORIGIN)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_string();
            let preflight = request.method() == Method::OPTIONS;

            let mut response = if preflight {
                // Preflight requests are answered here, without touching
                // the router
                StatusCode::OK.into_response()
            } else {
                inner.call(request).await?
            };

            apply_cors_headers(response.headers_mut(), &config, &origin, preflight);
            Ok(response)
        })
    }
}

fn apply_cors_headers(headers: &mut HeaderMap, config: &CorsConfig, origin: &str, preflight: bool) {
    if config.is_origin_allowed(origin) {
        insert_header(headers, header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    } else if config.allow_origins.len() == 1 && config.allow_origins[0] == "*" {
        insert_header(headers, header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
    }

    if config.allow_credentials {
        insert_header(headers, header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
    }

    if !config.expose_headers.is_empty() {
        insert_header(
            headers,
            header::ACCESS_CONTROL_EXPOSE_HEADERS,
            &config.expose_headers.join(", "),
        );
    }

    if preflight {
        insert_header(
            headers,
            header::ACCESS_CONTROL_ALLOW_METHODS,
            &config.allow_methods.join(", "),
        );
        insert_header(
            headers,
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            &config.allow_headers.join(", "),
        );
        insert_header(
            headers,
            header::ACCESS_CONTROL_MAX_AGE,
            &config.max_age.to_string(),
        );
    }
}

fn insert_header(headers: &mut HeaderMap, name: HeaderName, value: &str) {
    if let Ok(value) = HeaderValue::from_str(value) {
        headers.insert(name, value);
    }
}
