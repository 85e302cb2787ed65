use super::{UseCaseError, UseCaseResult};
use crate::domain::{
    auth::{LoginForm, OtpEntry, PasswordResetStep, RegistrationForm, ResendCountdown, validate_email},
    errors::AppError,
    logging::{LogComponent, get_logger},
    repositories::AuthGateway,
};

pub const REGISTER_FAILED: &str = "Registration failed. Please try again.";
pub const VERIFY_FAILED: &str = "Verification failed. Please try again.";
pub const RESEND_FAILED: &str = "Failed to resend code. Please try again.";
pub const RESET_FAILED: &str = "Failed to send reset link. Please try again.";
pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

/// Where the UI should go after a successful auth step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthNext {
    VerifyEmail { email: String },
    Dashboard,
    Stay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub message: String,
    pub next: AuthNext,
}

impl AuthOutcome {
    fn new(message: &str, next: AuthNext) -> Self {
        Self { message: message.to_string(), next }
    }
}

fn fail(cause: impl Into<AppError>, fallback: &str) -> UseCaseError {
    let err = UseCaseError::new(cause.into(), fallback);
    if err.cause.is_validation() {
        get_logger().debug(LogComponent::Application("Auth"), &format!("Rejected form: {}", err.message));
    } else {
        get_logger().warn(LogComponent::Application("Auth"), &format!("{} ({})", err.message, err.cause));
    }
    err
}

/// Creates the account; the service mails the verification code
pub struct RegisterUseCase<'a, G: AuthGateway> {
    gateway: &'a G,
}

impl<'a, G: AuthGateway> RegisterUseCase<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, form: &RegistrationForm) -> UseCaseResult<AuthOutcome> {
        form.validate().map_err(|e| fail(e, REGISTER_FAILED))?;
        let created = self.gateway.register(form).await.map_err(|e| fail(e, REGISTER_FAILED))?;
        get_logger().info(
            LogComponent::Application("Auth"),
            &format!("📝 Registered account #{} for {}", created.id, created.email),
        );
        Ok(AuthOutcome::new(
            "Verification code sent! Redirecting to verification...",
            AuthNext::VerifyEmail { email: form.email.trim().to_string() },
        ))
    }
}

pub struct VerifyOtpUseCase<'a, G: AuthGateway> {
    gateway: &'a G,
}

impl<'a, G: AuthGateway> VerifyOtpUseCase<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Incomplete codes are rejected before any request is made
    pub async fn execute(&self, email: &str, entry: &OtpEntry) -> UseCaseResult<AuthOutcome> {
        let code = entry.submit_code().map_err(|e| fail(e, VERIFY_FAILED))?;
        self.gateway.verify_otp(email, &code).await.map_err(|e| fail(e, VERIFY_FAILED))?;
        get_logger().info(LogComponent::Application("Auth"), &format!("✅ Email verified: {}", email));
        Ok(AuthOutcome::new(
            "Email verified successfully! Redirecting to dashboard...",
            AuthNext::Dashboard,
        ))
    }
}

pub struct ResendOtpUseCase<'a, G: AuthGateway> {
    gateway: &'a G,
}

impl<'a, G: AuthGateway> ResendOtpUseCase<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Restarts `countdown` only when the new code was sent
    pub async fn execute(&self, email: &str, countdown: &mut ResendCountdown) -> UseCaseResult<AuthOutcome> {
        countdown.ensure_ready().map_err(|e| fail(e, RESEND_FAILED))?;
        self.gateway.send_otp(email, None).await.map_err(|e| fail(e, RESEND_FAILED))?;
        countdown.restart();
        Ok(AuthOutcome::new("Verification code sent to your email", AuthNext::Stay))
    }
}

pub struct PasswordResetUseCase<'a, G: AuthGateway> {
    gateway: &'a G,
}

impl<'a, G: AuthGateway> PasswordResetUseCase<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Returns the confirmation text and the page step to show next
    pub async fn execute(&self, email: &str) -> UseCaseResult<(String, PasswordResetStep)> {
        let email = validate_email(email).map_err(|e| fail(e, RESET_FAILED))?;
        self.gateway
            .send_password_reset(&email, None)
            .await
            .map_err(|e| fail(e, RESET_FAILED))?;
        Ok(("Password reset link sent to your email!".to_string(), PasswordResetStep::LinkSent))
    }
}

/// Login is fire-and-forget: the returned token is not stored
pub struct LoginUseCase<'a, G: AuthGateway> {
    gateway: &'a G,
}

impl<'a, G: AuthGateway> LoginUseCase<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, form: &LoginForm) -> UseCaseResult<AuthOutcome> {
        form.validate().map_err(|e| fail(e, LOGIN_FAILED))?;
        let session = self
            .gateway
            .login(form.email.trim(), &form.password)
            .await
            .map_err(|e| fail(e, LOGIN_FAILED))?;
        get_logger().info(
            LogComponent::Application("Auth"),
            &format!("🔐 Signed in ({} token issued)", session.token_type),
        );
        Ok(AuthOutcome::new("Signed in successfully! Redirecting to dashboard...", AuthNext::Dashboard))
    }
}
