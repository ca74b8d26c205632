use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use std::fmt;
use validator::{ValidationErrors, ValidationErrorsKind};

pub type Result<T> = std::result::Result<T, Error>;

/// Layer of the application an error code was assigned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorLayer {
    Database,
    Service,
    Controller,
}

impl ErrorLayer {
    fn as_str(&self) -> &'static str {
        match self {
            ErrorLayer::Database => "DB",
            ErrorLayer::Service => "SVC",
            ErrorLayer::Controller => "CTL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorDomain {
    User,
    Vacancy,
    Application,
    Disability,
    Activity,
    Reports,
    Request,
}

impl ErrorDomain {
    fn as_str(&self) -> &'static str {
        match self {
            ErrorDomain::User => "USER",
            ErrorDomain::Vacancy => "VACANCY",
            ErrorDomain::Application => "APPLY",
            ErrorDomain::Disability => "DISABILITY",
            ErrorDomain::Activity => "ACTIVITY",
            ErrorDomain::Reports => "REPORTS",
            ErrorDomain::Request => "REQUEST",
        }
    }
}

/// Stable `(layer, domain, sequence)` identifier rendered as `SVC-VACANCY-01`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCode {
    pub layer: ErrorLayer,
    pub domain: ErrorDomain,
    pub sequence: u8,
}

impl ErrorCode {
    pub const fn new(layer: ErrorLayer, domain: ErrorDomain, sequence: u8) -> Self {
        Self {
            layer,
            domain,
            sequence,
        }
    }

    pub const fn database(domain: ErrorDomain, sequence: u8) -> Self {
        Self::new(ErrorLayer::Database, domain, sequence)
    }

    pub const fn service(domain: ErrorDomain, sequence: u8) -> Self {
        Self::new(ErrorLayer::Service, domain, sequence)
    }

    pub const fn controller(domain: ErrorDomain, sequence: u8) -> Self {
        Self::new(ErrorLayer::Controller, domain, sequence)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{:02}",
            self.layer.as_str(),
            self.domain.as_str(),
            self.sequence
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    Conflict { message: String, code: ErrorCode },

    /// The request could not be extracted (body, query string or path).
    #[error("{message}")]
    Rejected { message: String, code: ErrorCode },

    /// A use-case was aborted and its transaction rolled back.
    #[error("{message}")]
    Failed {
        message: String,
        code: ErrorCode,
        #[source]
        source: Box<Error>,
    },

    #[error("{message}")]
    Storage {
        message: String,
        code: ErrorCode,
        #[source]
        source: sqlx::Error,
    },

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("{}", validation_message(.0))]
    Validation(#[from] validator::ValidationErrors),

    #[error("Failed to sign token: {0}")]
    Signing(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn conflict(message: impl Into<String>, code: ErrorCode) -> Self {
        Error::Conflict {
            message: message.into(),
            code,
        }
    }

    pub fn failed(message: impl Into<String>, code: ErrorCode, source: Error) -> Self {
        Error::Failed {
            message: message.into(),
            code,
            source: Box::new(source),
        }
    }

    /// Wraps a driver error with a stable code for the layer it crossed.
    pub fn storage(message: impl Into<String>, code: ErrorCode) -> impl FnOnce(sqlx::Error) -> Self {
        let message = message.into();
        move |source| match source {
            sqlx::Error::RowNotFound => Error::NotFound(message),
            source => Error::Storage {
                message,
                code,
                source,
            },
        }
    }

    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Error::Conflict { code, .. }
            | Error::Rejected { code, .. }
            | Error::Failed { code, .. }
            | Error::Storage { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Error::BadRequest(_)
            | Error::Validation(_)
            | Error::Conflict { .. }
            | Error::Rejected { .. }
            | Error::Failed { .. } => StatusCode::BAD_REQUEST,
            Error::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Error::Forbidden(_) => StatusCode::FORBIDDEN,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Config(_)
            | Error::Storage { .. }
            | Error::Database(_)
            | Error::Signing(_)
            | Error::PasswordHash(_)
            | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show a client. Driver and internal details are logged
    /// here and replaced with a generic text.
    pub fn public_message(&self) -> String {
        match self {
            Error::Storage { message, source, .. } => {
                tracing::error!(error = ?source, "{}", message);
                message.clone()
            }
            Error::Database(err) => {
                tracing::error!(error = ?err, "Unhandled database error");
                "An unexpected database error occurred".to_string()
            }
            Error::Failed {
                message, source, ..
            } => {
                tracing::warn!(error = %source, "{}", message);
                message.clone()
            }
            Error::Config(_) | Error::Signing(_) | Error::PasswordHash(_) | Error::Internal(_) => {
                tracing::error!(error = %self, "Internal error");
                "An unexpected error occurred".to_string()
            }
            other => other.to_string(),
        }
    }

    fn rejected(message: String, sequence: u8) -> Self {
        Error::Rejected {
            message,
            code: ErrorCode::controller(ErrorDomain::Request, sequence),
        }
    }

    /// True when a driver error reports a unique-constraint violation.
    pub fn is_unique_violation(err: &sqlx::Error) -> bool {
        matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
    }
}

/// Flattens field errors into their messages, ordered by field name so the
/// response is stable.
fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();
    collect_messages(errors, &mut messages);
    if messages.is_empty() {
        return "invalid request".to_string();
    }
    messages.join("; ")
}

fn collect_messages(errors: &ValidationErrors, out: &mut Vec<String>) {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    for (field, kind) in fields {
        match kind {
            ValidationErrorsKind::Field(list) => {
                for err in list {
                    match &err.message {
                        Some(message) => out.push(message.to_string()),
                        None => out.push(format!("{} is invalid", field)),
                    }
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_messages(inner, out),
            ValidationErrorsKind::List(items) => {
                for inner in items.values() {
                    collect_messages(inner, out);
                }
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let code = self.code().map(|c| c.to_string());
        let message = self.public_message();

        let body = match code {
            Some(code) => json!({ "message": message, "code": code }),
            None => json!({ "message": message }),
        };
        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("Resource not found".to_string()),
            other => Error::Database(other),
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::rejected(
            format!("failed to parse the request body: {}", rejection.body_text()),
            1,
        )
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::rejected(rejection.body_text(), 2)
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::rejected(rejection.body_text(), 3)
    }
}
