pub mod auth;
pub mod insights;
pub mod market;

pub use auth::*;
pub use insights::*;
pub use market::*;

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::errors::AppError;

/// Failure of a use case: the text to show plus the underlying error
#[derive(Debug, Clone, PartialEq)]
pub struct UseCaseError {
    pub message: String,
    pub cause: AppError,
}

impl UseCaseError {
    /// Picks the server detail or validation text over `fallback`
    pub fn new(cause: AppError, fallback: &str) -> Self {
        Self { message: cause.user_message(fallback), cause }
    }
}

impl Display for UseCaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for UseCaseError {}

pub type UseCaseResult<T> = Result<T, UseCaseError>;
