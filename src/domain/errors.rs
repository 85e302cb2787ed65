use std::fmt::{Display, Formatter, Result as FmtResult};

/// Root error type for the dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Network(NetworkError),
    /// Non-2xx answer from the REST service, with its `detail` field when present
    Api { status: u16, detail: Option<String> },
    Validation(ValidationError),
}

/// Transport-level failures
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    RequestFailed(String),
    Serialization(String),
    Deserialization(String),
}

/// Local form validation failures. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    IncompleteOtp { expected: usize },
    PasswordMismatch,
    PasswordTooShort { min: usize },
    TermsNotAccepted,
    InvalidEmail,
    EmptyPassword,
    EmptySymbol,
    ResendCooldown { seconds_left: u32 },
}

impl AppError {
    /// Text shown to the user: the service's `detail` if it sent one, otherwise `fallback`.
    /// Validation errors always carry their own text.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Api { detail: Some(detail), .. } if !detail.trim().is_empty() => detail.clone(),
            AppError::Validation(e) => e.to_string(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AppError::Network(e) => write!(f, "Network Error: {}", e),
            AppError::Api { status, detail: Some(detail) } => write!(f, "API Error {}: {}", status, detail),
            AppError::Api { status, detail: None } => write!(f, "API Error {}", status),
            AppError::Validation(e) => write!(f, "Validation Error: {}", e),
        }
    }
}

impl Display for NetworkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            NetworkError::RequestFailed(msg) => write!(f, "request failed: {}", msg),
            NetworkError::Serialization(msg) => write!(f, "failed to serialize body: {}", msg),
            NetworkError::Deserialization(msg) => write!(f, "failed to parse JSON: {}", msg),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ValidationError::IncompleteOtp { expected } => {
                write!(f, "Please enter the complete {}-digit code", expected)
            }
            ValidationError::PasswordMismatch => write!(f, "Passwords do not match"),
            ValidationError::PasswordTooShort { min } => {
                write!(f, "Password must be at least {} characters long", min)
            }
            ValidationError::TermsNotAccepted => write!(f, "Please agree to the terms and conditions"),
            ValidationError::InvalidEmail => write!(f, "Please enter a valid email address"),
            ValidationError::EmptyPassword => write!(f, "Please enter your password"),
            ValidationError::EmptySymbol => write!(f, "Symbol cannot be empty"),
            ValidationError::ResendCooldown { seconds_left } => {
                write!(f, "You can request a new code in {}s", seconds_left)
            }
        }
    }
}

impl std::error::Error for AppError {}

impl From<NetworkError> for AppError {
    fn from(error: NetworkError) -> Self {
        AppError::Network(error)
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        AppError::Validation(error)
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_wins_over_fallback() {
        let err = AppError::Api { status: 400, detail: Some("Invalid or expired code".into()) };
        assert_eq!(err.user_message("Verification failed. Please try again."), "Invalid or expired code");
    }

    #[test]
    fn network_error_uses_fallback() {
        let err = AppError::from(NetworkError::RequestFailed("offline".into()));
        assert_eq!(err.user_message("Failed to load market data"), "Failed to load market data");
    }

    #[test]
    fn blank_detail_uses_fallback() {
        let err = AppError::Api { status: 500, detail: Some("  ".into()) };
        assert_eq!(err.user_message("oops"), "oops");
    }

    #[test]
    fn validation_text() {
        let err = AppError::from(ValidationError::IncompleteOtp { expected: 6 });
        assert_eq!(err.user_message("ignored"), "Please enter the complete 6-digit code");
    }
}
