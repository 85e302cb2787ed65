use std::cell::RefCell;

use futures::executor::block_on;
use serde_json::{Value, json};
use sentiment_dashboard_wasm::application::{
    AuthNext, InsightsUseCases, LOGIN_FAILED, LoginUseCase, MARKET_LOAD_FAILED, MarketUseCases, MockFeeds, NoDelay,
    PasswordResetUseCase, REGISTER_FAILED, RESEND_FAILED, RegisterUseCase, ResendOtpUseCase, VERIFY_FAILED,
    VerifyOtpUseCase, post_texts,
};
use sentiment_dashboard_wasm::domain::{
    auth::{LoginForm, OtpEntry, PasswordResetStep, RegistrationForm, ResendCountdown},
    errors::{AppError, AppResult, NetworkError},
    market::{CompanyProfile, CryptoQuote, MarketOverview, PriceLookup, StockQuote, Symbol, TrendingCrypto, TrendingStock},
    recommendations::{Action, Recommendation},
    repositories::{
        AuthGateway, DemoDataSource, HealthStatus, InsightsGateway, LoginResponse, MarketGateway, MessageResponse,
        RegisterResponse,
    },
    sentiment::{HeadlineStat, SentimentPoint},
};
use sentiment_dashboard_wasm::domain::{alerts::Alert, influencers::Influencer};
use sentiment_dashboard_wasm::infrastructure::mock_data::BundledDemoData;

/// Records every call; answers with `failure` when set
#[derive(Default)]
struct FakeApi {
    calls: RefCell<Vec<String>>,
    failure: Option<AppError>,
}

impl FakeApi {
    fn failing(err: AppError) -> Self {
        Self { failure: Some(err), ..Self::default() }
    }

    fn record<T>(&self, call: String, ok: T) -> AppResult<T> {
        self.calls.borrow_mut().push(call);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(ok),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

fn ack(message: &str) -> MessageResponse {
    MessageResponse { message: message.to_string(), email: None }
}

impl AuthGateway for FakeApi {
    async fn send_otp(&self, email: &str, _name: Option<&str>) -> AppResult<MessageResponse> {
        self.record(format!("send_otp {}", email), ack("OTP sent"))
    }

    async fn verify_otp(&self, email: &str, code: &str) -> AppResult<MessageResponse> {
        self.record(format!("verify_otp {} {}", email, code), ack("verified"))
    }

    async fn send_password_reset(&self, email: &str, _name: Option<&str>) -> AppResult<MessageResponse> {
        self.record(format!("send_password_reset {}", email), ack("reset sent"))
    }

    async fn register(&self, form: &RegistrationForm) -> AppResult<RegisterResponse> {
        self.record(
            format!("register {}", form.email.trim()),
            RegisterResponse { id: 7, email: form.email.trim().to_string() },
        )
    }

    async fn login(&self, email: &str, _password: &str) -> AppResult<LoginResponse> {
        self.record(
            format!("login {}", email),
            LoginResponse { access_token: "token".into(), token_type: "bearer".into() },
        )
    }
}

impl MarketGateway for FakeApi {
    async fn health(&self) -> AppResult<HealthStatus> {
        self.record("health".into(), HealthStatus { status: "ok".into() })
    }

    async fn market_prices(&self, symbol: &Symbol) -> AppResult<PriceLookup> {
        let quote = StockQuote { symbol: Some(symbol.value().to_string()), price: 190.5, ..StockQuote::default() };
        self.record(format!("prices {}", symbol), PriceLookup::Stock(quote))
    }

    async fn market_overview(&self) -> AppResult<MarketOverview> {
        let overview = MarketOverview {
            stocks: vec![StockQuote { symbol: Some("AAPL".into()), price: 190.0, ..StockQuote::default() }],
            cryptocurrencies: vec![CryptoQuote { symbol: "BTC".into(), price: 43000.0, ..CryptoQuote::default() }],
            error: Some("crypto upstream timed out".into()),
            ..MarketOverview::default()
        };
        self.record("overview".into(), overview)
    }

    async fn trending_stocks(&self) -> AppResult<Vec<TrendingStock>> {
        self.record("trending_stocks".into(), vec![TrendingStock::default()])
    }

    async fn trending_crypto(&self) -> AppResult<Vec<TrendingCrypto>> {
        self.record("trending_crypto".into(), vec![TrendingCrypto::default(), TrendingCrypto::default()])
    }

    async fn company_profile(&self, symbol: &Symbol) -> AppResult<CompanyProfile> {
        self.record(format!("profile {}", symbol), CompanyProfile::default())
    }
}

impl InsightsGateway for FakeApi {
    async fn twitter_search(&self, query: &str, max_results: u32) -> AppResult<Value> {
        self.record(
            format!("search {} {}", query, max_results),
            json!({ "data": [{ "id": "1", "text": "$TSLA to the moon" }, { "id": "2" }] }),
        )
    }

    async fn scrape_reddit(&self) -> AppResult<MessageResponse> {
        self.record("scrape_reddit".into(), ack("Reddit scraping started"))
    }

    async fn scrape_twitter(&self) -> AppResult<MessageResponse> {
        self.record("scrape_twitter".into(), ack("Twitter scraping started"))
    }

    async fn analyze_sentiment(&self, payload: &Value) -> AppResult<Value> {
        self.record(format!("analyze {}", payload), json!({ "score": 0.4 }))
    }

    async fn recommendations(&self, symbol: Option<&Symbol>) -> AppResult<Vec<Recommendation>> {
        let label = symbol.map(|s| s.value().to_string()).unwrap_or_else(|| "*".into());
        self.record(format!("recommendations {}", label), Vec::new())
    }
}

fn valid_registration() -> RegistrationForm {
    RegistrationForm {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: " ada@example.com ".into(),
        password: "correct horse".into(),
        confirm_password: "correct horse".into(),
        agree_to_terms: true,
    }
}

fn full_otp(code: &str) -> OtpEntry {
    let mut entry = OtpEntry::new();
    entry.paste(code);
    entry
}

#[test]
fn register_success_redirects_to_verification() {
    let api = FakeApi::default();
    let outcome = block_on(RegisterUseCase::new(&api).execute(&valid_registration())).unwrap();
    assert_eq!(outcome.message, "Verification code sent! Redirecting to verification...");
    assert_eq!(outcome.next, AuthNext::VerifyEmail { email: "ada@example.com".into() });
    assert_eq!(api.calls(), vec!["register ada@example.com"]);
}

#[test]
fn invalid_registration_never_reaches_the_service() {
    let api = FakeApi::default();
    let form = RegistrationForm { confirm_password: "different".into(), ..valid_registration() };
    let err = block_on(RegisterUseCase::new(&api).execute(&form)).unwrap_err();
    assert_eq!(err.message, "Passwords do not match");
    assert!(api.calls().is_empty());
}

#[test]
fn server_detail_wins_over_generic_message() {
    let api = FakeApi::failing(AppError::Api { status: 400, detail: Some("Email already registered".into()) });
    let err = block_on(RegisterUseCase::new(&api).execute(&valid_registration())).unwrap_err();
    assert_eq!(err.message, "Email already registered");

    let api = FakeApi::failing(AppError::Network(NetworkError::RequestFailed("offline".into())));
    let err = block_on(RegisterUseCase::new(&api).execute(&valid_registration())).unwrap_err();
    assert_eq!(err.message, REGISTER_FAILED);
}

#[test]
fn incomplete_code_is_rejected_locally() {
    let api = FakeApi::default();
    let err = block_on(VerifyOtpUseCase::new(&api).execute("ada@example.com", &full_otp("123"))).unwrap_err();
    assert_eq!(err.message, "Please enter the complete 6-digit code");
    assert!(api.calls().is_empty());
}

#[test]
fn verify_sends_joined_code() {
    let api = FakeApi::default();
    let outcome = block_on(VerifyOtpUseCase::new(&api).execute("ada@example.com", &full_otp("123456"))).unwrap();
    assert_eq!(outcome.message, "Email verified successfully! Redirecting to dashboard...");
    assert_eq!(outcome.next, AuthNext::Dashboard);
    assert_eq!(api.calls(), vec!["verify_otp ada@example.com 123456"]);

    let api = FakeApi::failing(AppError::Api { status: 400, detail: None });
    let err = block_on(VerifyOtpUseCase::new(&api).execute("ada@example.com", &full_otp("123456"))).unwrap_err();
    assert_eq!(err.message, VERIFY_FAILED);
}

#[test]
fn resend_waits_for_countdown() {
    let api = FakeApi::default();
    let mut countdown = ResendCountdown::new(2);
    let err = block_on(ResendOtpUseCase::new(&api).execute("ada@example.com", &mut countdown)).unwrap_err();
    assert!(err.cause.is_validation());
    assert!(api.calls().is_empty());

    countdown.tick();
    countdown.tick();
    let outcome = block_on(ResendOtpUseCase::new(&api).execute("ada@example.com", &mut countdown)).unwrap();
    assert_eq!(outcome.message, "Verification code sent to your email");
    assert_eq!(countdown.remaining(), 2);
    assert_eq!(api.calls(), vec!["send_otp ada@example.com"]);
}

#[test]
fn failed_resend_keeps_countdown_unlocked() {
    let api = FakeApi::failing(AppError::Network(NetworkError::RequestFailed("offline".into())));
    let mut countdown = ResendCountdown::new(1);
    countdown.tick();
    let err = block_on(ResendOtpUseCase::new(&api).execute("ada@example.com", &mut countdown)).unwrap_err();
    assert_eq!(err.message, RESEND_FAILED);
    assert!(countdown.can_resend());
}

#[test]
fn password_reset_moves_to_link_sent() {
    let api = FakeApi::default();
    let (message, step) = block_on(PasswordResetUseCase::new(&api).execute("ada@example.com")).unwrap();
    assert_eq!(message, "Password reset link sent to your email!");
    assert_eq!(step, PasswordResetStep::LinkSent);

    let err = block_on(PasswordResetUseCase::new(&api).execute("not-an-email")).unwrap_err();
    assert_eq!(err.message, "Please enter a valid email address");
    assert_eq!(api.calls().len(), 1);
}

#[test]
fn login_failure_uses_credentials_message() {
    let api = FakeApi::failing(AppError::Network(NetworkError::Deserialization("bad json".into())));
    let form = LoginForm { email: "ada@example.com".into(), password: "secret".into() };
    let err = block_on(LoginUseCase::new(&api).execute(&form)).unwrap_err();
    assert_eq!(err.message, LOGIN_FAILED);

    let api = FakeApi::default();
    let outcome = block_on(LoginUseCase::new(&api).execute(&form)).unwrap();
    assert_eq!(outcome.next, AuthNext::Dashboard);
}

#[test]
fn overview_keeps_rows_when_partially_failed() {
    let api = FakeApi::default();
    let overview = block_on(MarketUseCases::new(&api).load_overview()).unwrap();
    assert_eq!(overview.stocks.len(), 1);
    assert_eq!(overview.cryptocurrencies.len(), 1);

    let api = FakeApi::failing(AppError::Api { status: 502, detail: None });
    let err = block_on(MarketUseCases::new(&api).load_overview()).unwrap_err();
    assert_eq!(err.message, MARKET_LOAD_FAILED);
}

#[test]
fn blank_symbol_lookup_is_a_validation_error() {
    let api = FakeApi::default();
    let market = MarketUseCases::new(&api);
    assert!(block_on(market.lookup_price("   ")).unwrap_err().cause.is_validation());

    let quote = block_on(market.lookup_price(" aapl ")).unwrap();
    assert_eq!(quote.price(), 190.5);
    assert_eq!(api.calls(), vec!["prices AAPL"]);
}

#[test]
fn trending_board_holds_both_lists() {
    let api = FakeApi::default();
    let board = block_on(MarketUseCases::new(&api).trending()).unwrap();
    assert_eq!(board.stocks.len(), 1);
    assert_eq!(board.crypto.len(), 2);
}

#[test]
fn health_errors_read_as_offline() {
    let api = FakeApi::failing(AppError::Network(NetworkError::RequestFailed("refused".into())));
    assert!(!block_on(MarketUseCases::new(&api).is_service_up()));
    assert!(block_on(MarketUseCases::new(&FakeApi::default()).is_service_up()));
}

#[test]
fn insights_calls() {
    let api = FakeApi::default();
    let insights = InsightsUseCases::new(&api);

    assert_eq!(block_on(insights.search_posts(" $TSLA ", 10)).unwrap(), vec!["$TSLA to the moon"]);
    assert_eq!(block_on(insights.trigger_reddit_scraper()).unwrap(), "Reddit scraping started");
    assert_eq!(block_on(insights.analyze_text("great earnings")).unwrap(), json!({ "score": 0.4 }));
    assert!(block_on(insights.recommendations("")).unwrap().is_empty());
    block_on(insights.recommendations("nvda")).unwrap();

    assert_eq!(
        api.calls(),
        vec![
            "search $TSLA 10",
            "scrape_reddit",
            r#"analyze {"text":"great earnings"}"#,
            "recommendations *",
            "recommendations NVDA",
        ]
    );
}

#[test]
fn post_texts_ignores_unexpected_shapes() {
    assert!(post_texts(&json!({ "error": "rate limited" })).is_empty());
    assert!(post_texts(&json!([1, 2])).is_empty());
}

#[test]
fn mock_feeds_serve_fixtures() {
    let feeds = MockFeeds::new(BundledDemoData, NoDelay, 1000);
    assert_eq!(block_on(feeds.alerts()).len(), 5);
    assert_eq!(block_on(feeds.influencers()).len(), 5);
    assert_eq!(block_on(feeds.recommendations()).len(), 5);
    assert_eq!(block_on(feeds.sentiment_trend()).len(), 6);
    assert_eq!(block_on(feeds.headline_stats()).len(), 4);
}

struct SingleRecommendation;

impl DemoDataSource for SingleRecommendation {
    fn alerts(&self) -> Vec<Alert> {
        Vec::new()
    }

    fn influencers(&self) -> Vec<Influencer> {
        Vec::new()
    }

    fn recommendations(&self) -> Vec<Recommendation> {
        vec![Recommendation {
            symbol: "AMD".into(),
            action: Action::Buy,
            confidence: 0.9,
            reasoning: String::new(),
            sentiment: 0.4,
            price_target: None,
            price: None,
            timestamp: String::new(),
        }]
    }

    fn sentiment_trend(&self) -> Vec<SentimentPoint> {
        Vec::new()
    }

    fn headline_stats(&self) -> Vec<HeadlineStat> {
        Vec::new()
    }
}

#[test]
fn mock_feeds_read_the_injected_source() {
    let feeds = MockFeeds::new(SingleRecommendation, NoDelay, 0);
    let recs = block_on(feeds.recommendations());
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].symbol, "AMD");
    assert!(block_on(feeds.alerts()).is_empty());
}
