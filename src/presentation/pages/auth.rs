use std::time::Duration;

use leptos::html::Input;
use leptos::*;
use wasm_bindgen::JsCast;

use crate::{
    application::{
        AuthNext, LoginUseCase, PasswordResetUseCase, RegisterUseCase, ResendOtpUseCase, VerifyOtpUseCase,
    },
    config::config,
    domain::{
        auth::{LoginForm, OTP_LENGTH, OtpEntry, PasswordResetStep, RegistrationForm, ResendCountdown},
        logging::{LogComponent, get_logger},
    },
    global_state::navigate,
    presentation::{
        layout::{AuthCard, StatusBanner},
        routes::Route,
    },
};

/// Navigates to the outcome's next page after `delay_ms`
fn follow_after(next: AuthNext, delay_ms: u32) {
    let route = match next {
        AuthNext::VerifyEmail { email } => Route::VerifyOtp { email },
        AuthNext::Dashboard => Route::Dashboard,
        AuthNext::Stay => return,
    };
    set_timeout(move || navigate(route), Duration::from_millis(u64::from(delay_ms)));
}

/// Shared form plumbing: error, success and in-flight flags
#[derive(Clone, Copy)]
struct FormStatus {
    error: ReadSignal<Option<String>>,
    set_error: WriteSignal<Option<String>>,
    success: ReadSignal<Option<String>>,
    set_success: WriteSignal<Option<String>>,
    busy: RwSignal<bool>,
}

impl FormStatus {
    fn new() -> Self {
        let (error, set_error) = create_signal(None);
        let (success, set_success) = create_signal(None);
        Self { error, set_error, success, set_success, busy: create_rw_signal(false) }
    }

    /// Clears the banners and claims the form; false when a request is already running
    fn begin(&self) -> bool {
        if self.busy.get_untracked() {
            return false;
        }
        self.set_error.set(None);
        self.set_success.set(None);
        self.busy.set(true);
        true
    }

    fn finish(&self, result: Result<String, String>) {
        match result {
            Ok(message) => self.set_success.set(Some(message)),
            Err(message) => self.set_error.set(Some(message)),
        }
        self.busy.set(false);
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = create_rw_signal(RegistrationForm::default());
    let status = FormStatus::new();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if !status.begin() {
            return;
        }
        let snapshot = form.get_untracked();
        crate::run_with_api!(|api| async move {
            let result = RegisterUseCase::new(&api).execute(&snapshot).await;
            status.finish(result.as_ref().map(|o| o.message.clone()).map_err(|e| e.message.clone()));
            if let Ok(outcome) = result {
                follow_after(outcome.next, config().register_redirect_ms);
            }
        });
    };

    view! {
        <AuthCard title="Create your account" subtitle="Start tracking market sentiment in minutes">
            <form class="auth-card" style="padding: 0" on:submit=on_submit>
                <div class="row">
                    <input
                        placeholder="First name"
                        prop:value=move || form.with(|f| f.first_name.clone())
                        on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                    />
                    <input
                        placeholder="Last name"
                        prop:value=move || form.with(|f| f.last_name.clone())
                        on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                    />
                </div>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password (8+ characters)"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Confirm password"
                    prop:value=move || form.with(|f| f.confirm_password.clone())
                    on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                />
                <label class="row">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.agree_to_terms)
                        on:change=move |ev| form.update(|f| f.agree_to_terms = event_target_checked(&ev))
                    />
                    "I agree to the terms and conditions"
                </label>
                <StatusBanner error=status.error success=status.success/>
                <button type="submit" disabled=move || status.busy.get()>
                    {move || if status.busy.get() { "Creating account..." } else { "Create account" }}
                </button>
            </form>
            <p>
                "Already registered? "
                <a on:click=move |_| navigate(Route::Login)>"Sign in"</a>
            </p>
        </AuthCard>
    }
}

#[component]
pub fn VerifyOtpPage(email: String) -> impl IntoView {
    if email.is_empty() {
        return view! {
            <AuthCard title="Verify your email" subtitle="No email address to verify">
                <p>"Open the link from the registration page, or "</p>
                <a on:click=move |_| navigate(Route::Register)>"register again"</a>
            </AuthCard>
        }
        .into_view();
    }

    let cfg = config();
    let otp = create_rw_signal(OtpEntry::new());
    let countdown = create_rw_signal(ResendCountdown::new(cfg.resend_cooldown_secs));
    let status = FormStatus::new();
    let resending = create_rw_signal(false);
    let email = store_value(email);
    let inputs: [NodeRef<Input>; OTP_LENGTH] = std::array::from_fn(|_| create_node_ref::<Input>());

    let focus = move |index: usize| {
        if let Some(input) = inputs.get(index).and_then(|r| r.get()) {
            let _ = input.focus();
        }
    };

    match set_interval_with_handle(move || countdown.update(ResendCountdown::tick), Duration::from_secs(1)) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => get_logger().warn(
            LogComponent::Presentation("VerifyOtp"),
            &format!("Resend countdown unavailable: {:?}", e),
        ),
    }

    let submit = move || {
        if !status.begin() {
            return;
        }
        let entry = otp.get_untracked();
        let email = email.get_value();
        crate::run_with_api!(|api| async move {
            let result = VerifyOtpUseCase::new(&api).execute(&email, &entry).await;
            status.finish(result.as_ref().map(|o| o.message.clone()).map_err(|e| e.message.clone()));
            if let Ok(outcome) = result {
                follow_after(outcome.next, config().verify_redirect_ms);
            }
        });
    };

    let resend = move |_| {
        if resending.get_untracked() {
            return;
        }
        resending.set(true);
        status.set_error.set(None);
        status.set_success.set(None);
        let mut local = countdown.get_untracked();
        let email = email.get_value();
        crate::run_with_api!(|api| async move {
            match ResendOtpUseCase::new(&api).execute(&email, &mut local).await {
                Ok(outcome) => {
                    countdown.update(ResendCountdown::restart);
                    otp.update(OtpEntry::clear);
                    status.set_success.set(Some(outcome.message));
                    focus(0);
                }
                Err(e) => status.set_error.set(Some(e.message)),
            }
            resending.set(false);
        });
    };

    let slot_text = move |i: usize| otp.with(|e| e.slot(i).map(String::from).unwrap_or_default());

    let boxes = (0..OTP_LENGTH)
        .map(|i| {
            let node = inputs[i];
            view! {
                <input
                    type="text"
                    inputmode="numeric"
                    autocomplete="one-time-code"
                    node_ref=node
                    prop:value=move || slot_text(i)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        let next = otp.try_update(|e| e.set_digit(i, &value)).unwrap_or(i);
                        // rejected input must not linger in the box
                        let shown = otp.with_untracked(|e| e.slot(i).map(String::from).unwrap_or_default());
                        event_target::<web_sys::HtmlInputElement>(&ev).set_value(&shown);
                        if next != i {
                            focus(next);
                        }
                    }
                    on:keydown=move |ev: ev::KeyboardEvent| {
                        if ev.key() == "Backspace" {
                            let target = otp.try_update(|e| e.backspace(i)).unwrap_or(i);
                            if target != i {
                                focus(target);
                            }
                        }
                    }
                    on:paste=move |ev| {
                        ev.prevent_default();
                        let text = ev
                            .unchecked_ref::<web_sys::ClipboardEvent>()
                            .clipboard_data()
                            .and_then(|data| data.get_data("text").ok())
                            .unwrap_or_default();
                        let target = otp.try_update(|e| e.paste(&text)).unwrap_or(i);
                        focus(target);
                    }
                />
            }
        })
        .collect_view();

    view! {
        <AuthCard title="Verify your email" subtitle=format!("We sent a 6-digit code to {}", email.get_value())>
            <form
                class="auth-card"
                style="padding: 0"
                on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }
            >
                <div class="otp-inputs">{boxes}</div>
                <StatusBanner error=status.error success=status.success/>
                <button type="submit" disabled=move || status.busy.get()>
                    {move || if status.busy.get() { "Verifying..." } else { "Verify email" }}
                </button>
            </form>
            <div class="row">
                <span class="tone-neutral">"Didn't get it?"</span>
                <button
                    class="secondary"
                    disabled=move || resending.get() || !countdown.with(ResendCountdown::can_resend)
                    on:click=resend
                >
                    {move || {
                        let left = countdown.with(ResendCountdown::remaining);
                        if left > 0 { format!("Resend in {}s", left) } else { "Resend code".to_string() }
                    }}
                </button>
            </div>
        </AuthCard>
    }
    .into_view()
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let step = create_rw_signal(PasswordResetStep::EnterEmail);
    let status = FormStatus::new();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if !status.begin() {
            return;
        }
        let address = email.get_untracked();
        crate::run_with_api!(|api| async move {
            let result = PasswordResetUseCase::new(&api).execute(&address).await;
            match result {
                Ok((message, next)) => {
                    status.finish(Ok(message));
                    step.set(next);
                }
                Err(e) => status.finish(Err(e.message)),
            }
        });
    };

    view! {
        <AuthCard title="Reset your password" subtitle="We'll email you a link to choose a new one">
            <Show
                when=move || step.get() == PasswordResetStep::LinkSent
                fallback=move || {
                    view! {
                        <form class="auth-card" style="padding: 0" on:submit=on_submit>
                            <input
                                type="email"
                                placeholder="Email"
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                            <StatusBanner error=status.error success=status.success/>
                            <button type="submit" disabled=move || status.busy.get()>
                                {move || if status.busy.get() { "Sending..." } else { "Send reset link" }}
                            </button>
                        </form>
                    }
                }
            >
                <StatusBanner error=status.error success=status.success/>
                <p>{move || format!("Check {} for the reset link.", email.get())}</p>
                <button class="secondary" on:click=move |_| step.set(PasswordResetStep::EnterEmail)>
                    "Use another email"
                </button>
            </Show>
            <a on:click=move |_| navigate(Route::Login)>"Back to sign in"</a>
        </AuthCard>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = create_rw_signal(LoginForm::default());
    let status = FormStatus::new();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if !status.begin() {
            return;
        }
        let snapshot = form.get_untracked();
        crate::run_with_api!(|api| async move {
            let result = LoginUseCase::new(&api).execute(&snapshot).await;
            status.finish(result.as_ref().map(|o| o.message.clone()).map_err(|e| e.message.clone()));
            if let Ok(outcome) = result {
                follow_after(outcome.next, config().verify_redirect_ms);
            }
        });
    };

    view! {
        <AuthCard title="Welcome back" subtitle="Sign in to your dashboard">
            <form class="auth-card" style="padding: 0" on:submit=on_submit>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
                <StatusBanner error=status.error success=status.success/>
                <button type="submit" disabled=move || status.busy.get()>
                    {move || if status.busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <div class="row" style="justify-content: space-between">
                <a on:click=move |_| navigate(Route::ForgotPassword)>"Forgot password?"</a>
                <a on:click=move |_| navigate(Route::Register)>"Create account"</a>
            </div>
        </AuthCard>
    }
}
