pub mod http;
pub mod mock_data;
pub mod services;

pub use http::{ApiClient, SentimentApiClient};
