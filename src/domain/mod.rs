pub mod alerts;
pub mod auth;
pub mod errors;
pub mod formatting;
pub mod influencers;
pub mod logging;
pub mod market;
pub mod recommendations;
pub mod repositories;
pub mod sentiment;
