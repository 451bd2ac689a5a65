use axum::response::{IntoResponse, Response};
use axum::Json;
use diesel::r2d2;
use http::StatusCode;
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

#[derive(Debug)]
pub enum ApiError {
    Database(diesel::result::Error),
    DatabaseConnection(String),
    Bcrypt(bcrypt::BcryptError),
    Validation(validator::ValidationErrors),
    /// A business precondition failed: amount mismatch, duplicate slug,
    /// unconfigured payout account. Always a 400.
    Precondition(String),
    NotFound(String),
    Token(String),
    Auth(AuthError),
    Forbidden(String),
    /// The external payment provider rejected or failed a request.
    Payment(String),
    /// A Stripe transfer succeeded but the local ledger write failed.
    /// Surfaced distinctly so the operator can reconcile against the
    /// transfer id instead of guessing whether money moved.
    PayoutUnrecorded { transfer_id: String, detail: String },
    Internal(String),
}

#[derive(Debug)]
pub enum AuthError {
    MissingHeader,
    InvalidFormat,
    InvalidToken(String),
    BlacklistedToken,
    DuplicateEmail,
    InvalidCredentials,
}

/// JSON error body returned by every failing endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Database(e) => write!(f, "Database error: {}", e),
            ApiError::DatabaseConnection(e) => write!(f, "Database connection error: {}", e),
            ApiError::Bcrypt(e) => write!(f, "Bcrypt error: {}", e),
            ApiError::Validation(e) => write!(f, "Validation error: {}", e),
            ApiError::Precondition(e) => write!(f, "Precondition failed: {}", e),
            ApiError::NotFound(e) => write!(f, "Not found: {}", e),
            ApiError::Token(e) => write!(f, "Token error: {}", e),
            ApiError::Auth(e) => write!(f, "Authentication error: {}", e),
            ApiError::Forbidden(e) => write!(f, "Forbidden: {}", e),
            ApiError::Payment(e) => write!(f, "Payment provider error: {}", e),
            ApiError::PayoutUnrecorded { transfer_id, detail } => write!(
                f,
                "Payout transferred externally (transfer {}) but not recorded: {}",
                transfer_id, detail
            ),
            ApiError::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingHeader => write!(f, "Authorization header required"),
            AuthError::InvalidFormat => write!(f, "Invalid Authorization format"),
            AuthError::InvalidToken(msg) => write!(f, "Invalid token: {}", msg),
            AuthError::BlacklistedToken => write!(f, "Token has been invalidated"),
            AuthError::DuplicateEmail => write!(f, "Email is already registered"),
            AuthError::InvalidCredentials => write!(f, "Invalid email or password"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Database(e) => Some(e),
            ApiError::Bcrypt(e) => Some(e),
            ApiError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<r2d2::Error> for ApiError {
    fn from(err: r2d2::Error) -> Self {
        ApiError::DatabaseConnection(err.to_string())
    }
}

impl From<diesel::result::Error> for ApiError {
    fn from(err: diesel::result::Error) -> Self {
        ApiError::Database(err)
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        ApiError::Bcrypt(err)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Payment(err.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Auth(err)
    }
}

impl From<ApiError> for (StatusCode, String) {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Database(e) => match e {
                diesel::result::Error::NotFound => {
                    (StatusCode::NOT_FOUND, "Record not found".to_string())
                }
                diesel::result::Error::DatabaseError(
                    diesel::result::DatabaseErrorKind::UniqueViolation,
                    _,
                ) => (
                    StatusCode::BAD_REQUEST,
                    "A record with those values already exists".to_string(),
                ),
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {}", e),
                ),
            },
            ApiError::DatabaseConnection(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database connection error: {}", e),
            ),
            ApiError::Bcrypt(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Password verification error".to_string(),
            ),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                format!("Validation error: {}", errors),
            ),
            ApiError::Precondition(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Token(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Token error: {}", e),
            ),
            ApiError::Auth(e) => match e {
                AuthError::DuplicateEmail | AuthError::InvalidFormat => {
                    (StatusCode::BAD_REQUEST, e.to_string())
                }
                _ => (StatusCode::UNAUTHORIZED, e.to_string()),
            },
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::Payment(msg) => (
                StatusCode::BAD_GATEWAY,
                format!("Payment provider error: {}", msg),
            ),
            err @ ApiError::PayoutUnrecorded { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal error: {}", msg),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message): (StatusCode, String) = self.into();
        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}
