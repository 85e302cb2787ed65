use quickcheck_macros::quickcheck;
use sentiment_dashboard_wasm::domain::auth::{OTP_LENGTH, OtpEntry, ResendCountdown};
use sentiment_dashboard_wasm::domain::errors::ValidationError;

#[test]
fn typing_advances_focus_until_last_box() {
    let mut otp = OtpEntry::new();
    for (i, digit) in ["1", "2", "3", "4", "5"].iter().enumerate() {
        assert_eq!(otp.set_digit(i, digit), i + 1);
    }
    assert_eq!(otp.set_digit(5, "6"), 5);
    assert!(otp.is_complete());
    assert_eq!(otp.code(), "123456");
}

#[test]
fn multi_char_and_non_digit_input_is_rejected() {
    let mut otp = OtpEntry::new();
    otp.set_digit(0, "4");
    assert_eq!(otp.set_digit(0, "45"), 0);
    assert_eq!(otp.set_digit(1, "x"), 1);
    assert_eq!(otp.slot(0), Some('4'));
    assert_eq!(otp.slot(1), None);
}

#[test]
fn backspace_on_empty_box_moves_back() {
    let mut otp = OtpEntry::new();
    otp.set_digit(0, "1");
    assert_eq!(otp.backspace(1), 0);
    assert_eq!(otp.backspace(0), 0);
    otp.set_digit(1, "2");
    assert_eq!(otp.backspace(1), 1);
}

#[test]
fn paste_keeps_first_six_digits() {
    let mut otp = OtpEntry::new();
    let focus = otp.paste("12-34 5678");
    assert_eq!(otp.code(), "123456");
    assert_eq!(focus, OTP_LENGTH - 1);

    let mut short = OtpEntry::new();
    assert_eq!(short.paste("98"), 2);
    assert_eq!(short.code(), "98");
    assert!(!short.is_complete());
}

#[quickcheck]
fn paste_never_stores_non_digits(text: String) -> bool {
    let mut otp = OtpEntry::new();
    otp.paste(&text);
    let code = otp.code();
    code.chars().all(|c| c.is_ascii_digit()) && code.len() <= OTP_LENGTH
}

#[test]
fn incomplete_code_cannot_be_submitted() {
    let mut otp = OtpEntry::new();
    otp.paste("12345");
    assert_eq!(otp.submit_code(), Err(ValidationError::IncompleteOtp { expected: 6 }));
    assert_eq!(
        ValidationError::IncompleteOtp { expected: 6 }.to_string(),
        "Please enter the complete 6-digit code"
    );
    otp.clear();
    assert_eq!(otp.code(), "");
}

#[test]
fn countdown_unlocks_at_zero_and_restarts() {
    let mut countdown = ResendCountdown::default();
    assert_eq!(countdown.remaining(), 60);
    assert!(countdown.ensure_ready().is_err());
    for _ in 0..70 {
        countdown.tick();
    }
    assert_eq!(countdown.remaining(), 0);
    assert!(countdown.can_resend());
    countdown.restart();
    assert_eq!(countdown.remaining(), 60);
}
