//! Leptos components: hash routes, the shared layout and one module per page.

pub mod layout;
pub mod pages;
pub mod routes;
