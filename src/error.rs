use thiserror::Error;

pub type Result<T> = std::result::Result<T, PortsideError>;

#[derive(Debug, Error)]
pub enum PortsideError {
    #[error("service not found: {name}")]
    ServiceNotFound { name: String },

    #[error("service '{name}' is not a {expected}")]
    DowncastFailed { name: String, expected: &'static str },

    #[error("failed to inject '{field}': {source}")]
    InjectionFailed {
        field: &'static str,
        #[source]
        source: Box<PortsideError>,
    },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for PortsideError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            PortsideError::NotFound { .. } => (axum::http::StatusCode::NOT_FOUND, self.to_string()),
            PortsideError::ServiceNotFound { .. } => (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                self.to_string(),
            ),
            PortsideError::DowncastFailed { .. } => (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                self.to_string(),
            ),
            PortsideError::InjectionFailed { .. } => (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                self.to_string(),
            ),
            PortsideError::Internal(msg) => {
                (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };
        (status, message).into_response()
    }
}
