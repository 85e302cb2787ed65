use sentiment_dashboard_wasm::domain::auth::RegistrationForm;
use sentiment_dashboard_wasm::domain::market::PriceLookup;
use sentiment_dashboard_wasm::domain::recommendations::Recommendation;
use sentiment_dashboard_wasm::infrastructure::http::dto::{ErrorBody, LoginRequest, RecommendationFeed, RegisterRequest};
use sentiment_dashboard_wasm::infrastructure::http::{Endpoint, HttpMethod, HttpUtils};

#[test]
fn route_table() {
    let table = [
        (Endpoint::Health, HttpMethod::Get, "/health"),
        (Endpoint::MarketPrices { symbol: "BTC" }, HttpMethod::Get, "/market/prices?symbol=BTC"),
        (Endpoint::MarketOverview, HttpMethod::Get, "/market/overview"),
        (Endpoint::TrendingStocks, HttpMethod::Get, "/market/trending/stocks"),
        (Endpoint::TrendingCrypto, HttpMethod::Get, "/market/trending/crypto"),
        (Endpoint::CompanyProfile { symbol: "AAPL" }, HttpMethod::Get, "/market/profile/AAPL"),
        (Endpoint::SendOtp, HttpMethod::Post, "/auth/send-otp"),
        (Endpoint::VerifyOtp, HttpMethod::Post, "/auth/verify-otp"),
        (Endpoint::SendPasswordReset, HttpMethod::Post, "/auth/send-password-reset"),
        (Endpoint::Register, HttpMethod::Post, "/auth/register"),
        (Endpoint::Login, HttpMethod::Post, "/auth/login"),
        (
            Endpoint::TwitterSearch { query: "tesla", max_results: 10 },
            HttpMethod::Get,
            "/social/twitter/search?query=tesla&max_results=10",
        ),
        (Endpoint::ScrapeReddit, HttpMethod::Get, "/scrapers/reddit"),
        (Endpoint::ScrapeTwitter, HttpMethod::Get, "/scrapers/twitter"),
        (Endpoint::AnalyzeSentiment, HttpMethod::Post, "/analyzer/sentiment"),
        (Endpoint::Recommendations { symbol: None }, HttpMethod::Get, "/recommendations"),
        (Endpoint::Recommendations { symbol: Some("NVDA") }, HttpMethod::Get, "/recommendations?symbol=NVDA"),
    ];
    for (endpoint, method, path) in table {
        assert_eq!(endpoint.method(), method, "{:?}", endpoint);
        assert_eq!(endpoint.path(), path);
    }
}

#[test]
fn urls_join_base_without_double_slash() {
    assert_eq!(Endpoint::Health.url("http://localhost:8000/"), "http://localhost:8000/health");
    assert_eq!(
        Endpoint::CompanyProfile { symbol: "A/B" }.url("https://api.test"),
        "https://api.test/market/profile/A%2FB"
    );
    assert_eq!(HttpMethod::Post.to_string(), "POST");
}

#[test]
fn query_values_are_encoded() {
    assert_eq!(HttpUtils::url_encode("a b&c=d"), "a%20b%26c%3Dd");
    assert_eq!(HttpUtils::build_url_with_params("/x", &[]), "/x");
    assert!(HttpUtils::is_success_status(204));
    assert!(!HttpUtils::is_success_status(404));
}

#[test]
fn request_bodies() {
    let form = RegistrationForm {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        password: "engine123".into(),
        confirm_password: "engine123".into(),
        agree_to_terms: true,
    };
    let body = serde_json::to_value(RegisterRequest::from(&form)).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "password": "engine123"
        })
    );
    let login = serde_json::to_string(&LoginRequest { email: "a@b.co", password: "pw" }).unwrap();
    assert_eq!(login, r#"{"email":"a@b.co","password":"pw"}"#);
}

#[test]
fn error_bodies() {
    let plain: ErrorBody = serde_json::from_str(r#"{"detail":"Invalid OTP"}"#).unwrap();
    assert_eq!(plain.message().as_deref(), Some("Invalid OTP"));

    let list: ErrorBody =
        serde_json::from_str(r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address"}]}"#)
            .unwrap();
    assert_eq!(list.message().as_deref(), Some("value is not a valid email address"));

    let empty: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(empty.message(), None);
}

#[test]
fn price_lookup_is_tagged_by_type() {
    let stock: PriceLookup =
        serde_json::from_str(r#"{"type":"stock","data":{"symbol":"AAPL","price":190.1,"change_percent":"0.52"}}"#)
            .unwrap();
    assert_eq!(stock.price(), 190.1);
    assert_eq!(stock.to_row().change_percent, 0.52);

    let crypto: PriceLookup =
        serde_json::from_str(r#"{"type":"crypto","data":{"symbol":"btc","price":43000.0,"change_24h":-2.1}}"#).unwrap();
    let row = crypto.to_row();
    assert_eq!(row.symbol.value(), "BTC");
    assert_eq!((row.change, row.change_percent), (-2.1, -2.1));
}

#[test]
fn recommendation_feed_accepts_one_or_many() {
    let one = r#"{"symbol":"NVDA","action":"buy","confidence":0.9,"reasoning":"","sentiment":0.4}"#;
    let many = format!("[{one},{one}]");
    let single: Vec<Recommendation> = serde_json::from_str::<RecommendationFeed>(one).unwrap().into();
    let list: Vec<Recommendation> = serde_json::from_str::<RecommendationFeed>(&many).unwrap().into();
    assert_eq!(single.len(), 1);
    assert_eq!(list.len(), 2);
}
