//! Error Types
//!
//! Failures the front end can hit: transport/HTTP errors from the API and
//! rejected form submissions.

use thiserror::Error;

/// Errors returned by the API bindings
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text suitable for a notice: the backend's own message when it sent one.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message: Some(msg), .. } if !msg.trim().is_empty() => {
                format!("Error: {}", msg)
            }
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }

    /// The backend no longer accepts the session token
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Per-field validation messages, in form order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(Vec<(&'static str, String)>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push((field, message.into()));
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, msg)| msg.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Ok when nothing was recorded
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Why a submission did not start
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("A submission is already in flight")]
    Busy,

    #[error("Form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_backend_text() {
        let err = ApiError::Status {
            status: 400,
            message: Some("Descripción demasiado larga".to_string()),
        };
        assert_eq!(err.user_message("fallback"), "Error: Descripción demasiado larga");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_user_message_falls_back() {
        let err = ApiError::Status { status: 500, message: None };
        assert_eq!(err.user_message("Error al comentar."), "Error al comentar.");

        let err = ApiError::Decode("bad json".to_string());
        assert_eq!(err.user_message("Error al comentar."), "Error al comentar.");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_only_401_means_unauthorized() {
        let expired = ApiError::Status { status: 401, message: None };
        let forbidden = ApiError::Status { status: 403, message: None };
        assert!(expired.is_unauthorized());
        assert!(!forbidden.is_unauthorized());
        assert!(!ApiError::Decode("x".into()).is_unauthorized());
    }

    #[test]
    fn test_field_errors() {
        let mut errors = FieldErrors::new();
        assert!(errors.clone().into_result().is_ok());

        errors.push("title", "El título es obligatorio.");
        assert_eq!(errors.get("title"), Some("El título es obligatorio."));
        assert_eq!(errors.get("category"), None);
        assert_eq!(errors.len(), 1);
        assert!(errors.into_result().is_err());
    }
}
