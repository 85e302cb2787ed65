//! Authentication form state: OTP entry, resend cooldown and form validation.

use crate::domain::errors::ValidationError;

pub const OTP_LENGTH: usize = 6;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const RESEND_COOLDOWN_SECS: u32 = 60;

/// The six single-digit boxes of the verification page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpEntry {
    slots: [Option<char>; OTP_LENGTH],
}

impl Default for OtpEntry {
    fn default() -> Self {
        Self::new()
    }
}

impl OtpEntry {
    pub fn new() -> Self {
        Self { slots: [None; OTP_LENGTH] }
    }

    pub fn slot(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    /// Applies typed input to one box and returns the box to focus next.
    ///
    /// More than one character, or a non-digit, leaves the entry untouched and keeps focus.
    /// An empty value clears the box.
    pub fn set_digit(&mut self, index: usize, value: &str) -> usize {
        if index >= OTP_LENGTH {
            return OTP_LENGTH - 1;
        }
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (None, _) => {
                self.slots[index] = None;
                index
            }
            (Some(c), None) if c.is_ascii_digit() => {
                self.slots[index] = Some(c);
                if index < OTP_LENGTH - 1 { index + 1 } else { index }
            }
            _ => index,
        }
    }

    /// Backspace on an already empty box moves focus back one
    pub fn backspace(&mut self, index: usize) -> usize {
        if index >= OTP_LENGTH {
            return OTP_LENGTH - 1;
        }
        if self.slots[index].is_none() && index > 0 {
            index - 1
        } else {
            index
        }
    }

    /// Fills boxes from the start with the digits of the pasted text.
    /// Returns the box to focus afterwards.
    pub fn paste(&mut self, text: &str) -> usize {
        let digits: Vec<char> = text.chars().filter(|c| c.is_ascii_digit()).take(OTP_LENGTH).collect();
        for (slot, digit) in self.slots.iter_mut().zip(digits.iter()) {
            *slot = Some(*digit);
        }
        digits.len().min(OTP_LENGTH - 1)
    }

    pub fn clear(&mut self) {
        self.slots = [None; OTP_LENGTH];
    }

    pub fn code(&self) -> String {
        self.slots.iter().flatten().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Code ready to submit
    pub fn submit_code(&self) -> Result<String, ValidationError> {
        if self.is_complete() {
            Ok(self.code())
        } else {
            Err(ValidationError::IncompleteOtp { expected: OTP_LENGTH })
        }
    }
}

/// Seconds until "resend code" unlocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResendCountdown {
    remaining: u32,
    period: u32,
}

impl Default for ResendCountdown {
    fn default() -> Self {
        Self::new(RESEND_COOLDOWN_SECS)
    }
}

impl ResendCountdown {
    /// Starts running, like the page does on first render
    pub fn new(period: u32) -> Self {
        Self { remaining: period, period }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn can_resend(&self) -> bool {
        self.remaining == 0
    }

    pub fn restart(&mut self) {
        self.remaining = self.period;
    }

    pub fn ensure_ready(&self) -> Result<(), ValidationError> {
        if self.can_resend() {
            Ok(())
        } else {
            Err(ValidationError::ResendCooldown { seconds_left: self.remaining })
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

pub fn validate_email(email: &str) -> Result<String, ValidationError> {
    if is_valid_email(email) {
        Ok(email.trim().to_string())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
}

impl RegistrationForm {
    /// Checks run in the order the page reports them
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_email(&self.email)?;
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LENGTH });
        }
        if !self.agree_to_terms {
            return Err(ValidationError::TermsNotAccepted);
        }
        Ok(())
    }

    /// "First Last", trimmed; None when both are blank
    pub fn display_name(&self) -> Option<String> {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim()).trim().to_string();
        (!name.is_empty()).then_some(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err(ValidationError::EmptyPassword);
        }
        Ok(())
    }
}

/// The forgot-password page has two screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordResetStep {
    #[default]
    EnterEmail,
    LinkSent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_digit_clears_on_empty() {
        let mut otp = OtpEntry::new();
        otp.set_digit(2, "7");
        assert_eq!(otp.set_digit(2, ""), 2);
        assert_eq!(otp.slot(2), None);
    }

    #[test]
    fn last_box_keeps_focus() {
        let mut otp = OtpEntry::new();
        assert_eq!(otp.set_digit(5, "1"), 5);
    }

    #[test]
    fn countdown_saturates() {
        let mut c = ResendCountdown::new(2);
        assert!(!c.can_resend());
        c.tick();
        c.tick();
        c.tick();
        assert_eq!(c.remaining(), 0);
        assert!(c.ensure_ready().is_ok());
        c.restart();
        assert_eq!(c.ensure_ready(), Err(ValidationError::ResendCooldown { seconds_left: 2 }));
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("  jane.doe+x@mail.example.org "));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("ja ne@example.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }
}
