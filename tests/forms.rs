use sentiment_dashboard_wasm::domain::auth::{LoginForm, RegistrationForm, is_valid_email, validate_email};
use sentiment_dashboard_wasm::domain::errors::ValidationError;

fn form() -> RegistrationForm {
    RegistrationForm {
        first_name: " Grace ".into(),
        last_name: "Hopper".into(),
        email: "grace@navy.mil".into(),
        password: "cobol1959".into(),
        confirm_password: "cobol1959".into(),
        agree_to_terms: true,
    }
}

#[test]
fn valid_registration_passes() {
    assert_eq!(form().validate(), Ok(()));
    assert_eq!(form().display_name().as_deref(), Some("Grace Hopper"));
    let anonymous = RegistrationForm { first_name: " ".into(), last_name: String::new(), ..form() };
    assert_eq!(anonymous.display_name(), None);
}

#[test]
fn registration_errors_carry_page_messages() {
    let mismatch = RegistrationForm { confirm_password: "cobol1960".into(), ..form() };
    assert_eq!(mismatch.validate().unwrap_err().to_string(), "Passwords do not match");

    let short = RegistrationForm { password: "short".into(), confirm_password: "short".into(), ..form() };
    assert_eq!(short.validate().unwrap_err().to_string(), "Password must be at least 8 characters long");

    let no_terms = RegistrationForm { agree_to_terms: false, ..form() };
    assert_eq!(no_terms.validate().unwrap_err().to_string(), "Please agree to the terms and conditions");
}

#[test]
fn mismatch_is_reported_before_length() {
    let both = RegistrationForm { password: "a".into(), confirm_password: "b".into(), ..form() };
    assert_eq!(both.validate(), Err(ValidationError::PasswordMismatch));
}

#[test]
fn email_shapes() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("  first.last+tag@sub.example.org "));
    for bad in ["", "plain", "@example.com", "a@b", "a@.com", "a@com.", "a b@c.com", "a@b@c.com"] {
        assert!(!is_valid_email(bad), "{bad} should be rejected");
    }
    assert_eq!(validate_email(" a@b.co "), Ok("a@b.co".to_string()));
}

#[test]
fn login_requires_password() {
    let login = LoginForm { email: "a@b.co".into(), password: String::new() };
    assert_eq!(login.validate(), Err(ValidationError::EmptyPassword));
    let bad_email = LoginForm { email: "nope".into(), password: "x".into() };
    assert_eq!(bad_email.validate(), Err(ValidationError::InvalidEmail));
}
