use crate::infrastructure::http::HttpUtils;

/// Pages of the single-page app, addressed by the location hash (`#/dashboard`)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Landing,
    Login,
    Register,
    VerifyOtp { email: String },
    ForgotPassword,
    Dashboard,
    Influencers,
    Alerts,
    Recommendations,
}

impl Route {
    /// Parses `#/path?query`. Unknown paths fall back to the landing page.
    pub fn from_hash(hash: &str) -> Self {
        let hash = hash.trim_start_matches('#');
        let (path, query) = hash.split_once('?').unwrap_or((hash, ""));
        match path.trim_end_matches('/') {
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/verify-otp" => Self::VerifyOtp {
                email: query_param(query, "email").unwrap_or_default(),
            },
            "/forgot-password" => Self::ForgotPassword,
            "/dashboard" => Self::Dashboard,
            "/influencers" => Self::Influencers,
            "/alerts" => Self::Alerts,
            "/recommendations" => Self::Recommendations,
            _ => Self::Landing,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::VerifyOtp { .. } => "/verify-otp",
            Self::ForgotPassword => "/forgot-password",
            Self::Dashboard => "/dashboard",
            Self::Influencers => "/influencers",
            Self::Alerts => "/alerts",
            Self::Recommendations => "/recommendations",
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Self::VerifyOtp { email } if !email.is_empty() => {
                format!("#{}?email={}", self.path(), HttpUtils::url_encode(email))
            }
            _ => format!("#{}", self.path()),
        }
    }

    /// Pages rendered inside the dashboard shell with the side navigation
    pub fn in_dashboard(&self) -> bool {
        matches!(self, Self::Dashboard | Self::Influencers | Self::Alerts | Self::Recommendations)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Landing => "Home",
            Self::Login => "Sign In",
            Self::Register => "Create Account",
            Self::VerifyOtp { .. } => "Verify Email",
            Self::ForgotPassword => "Reset Password",
            Self::Dashboard => "Dashboard",
            Self::Influencers => "Influencers",
            Self::Alerts => "Alerts",
            Self::Recommendations => "AI Recommendations",
        }
    }
}

/// Side navigation entries, in display order
pub const DASHBOARD_NAV: [Route; 4] = [Route::Dashboard, Route::Influencers, Route::Alerts, Route::Recommendations];

fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| percent_decode(v))
}

/// Inverse of `HttpUtils::url_encode`; malformed escapes are kept literally
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let escaped = (bytes[i] == b'%')
            .then(|| input.get(i + 1..i + 3))
            .flatten()
            .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
            .and_then(|hex| u8::from_str_radix(hex, 16).ok());
        match escaped {
            Some(byte) => {
                out.push(byte);
                i += 3;
            }
            None => {
                out.push(if bytes[i] == b'+' { b' ' } else { bytes[i] });
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
