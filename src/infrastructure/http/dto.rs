//! Request bodies and error payloads of the REST service

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{auth::RegistrationForm, recommendations::Recommendation};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendOtpRequest<'a> {
    pub email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifyOtpRequest<'a> {
    pub email: &'a str,
    pub code: &'a str,
}

/// Same shape as [`SendOtpRequest`], separate type for the reset route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordResetRequest<'a> {
    pub email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<&'a str>,
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a RegistrationForm> for RegisterRequest<'a> {
    fn from(form: &'a RegistrationForm) -> Self {
        let non_blank = |s: &'a str| Some(s.trim()).filter(|s| !s.is_empty());
        Self {
            first_name: non_blank(&form.first_name),
            last_name: non_blank(&form.last_name),
            email: form.email.trim(),
            password: &form.password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// FastAPI-style error body: `detail` is a string, or a list of `{msg}` objects on validation errors
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Value,
}

impl ErrorBody {
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Value::String(s) => Some(s.clone()),
            Value::Array(items) => items
                .iter()
                .find_map(|item| item.get("msg").and_then(Value::as_str))
                .map(str::to_string),
            _ => None,
        }
    }
}

/// `/recommendations` answers with one object for a symbol query, or a list
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecommendationFeed {
    Many(Vec<Recommendation>),
    One(Recommendation),
}

impl From<RecommendationFeed> for Vec<Recommendation> {
    fn from(feed: RecommendationFeed) -> Self {
        match feed {
            RecommendationFeed::Many(list) => list,
            RecommendationFeed::One(single) => vec![single],
        }
    }
}
