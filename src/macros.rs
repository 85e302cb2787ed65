/// Generate global signal accessors at once.
///
/// Usage:
/// `global_signals! {
///     pub fn1 => field1: Type1,
///     fn2 => field2: Type2,
/// }`
#[macro_export]
macro_rules! global_signals {
    ( $( $vis:vis $name:ident => $field:ident : $ty:ty ),+ $(,)? ) => {
        $(
            $vis fn $name() -> ::leptos::RwSignal<$ty> {
                $crate::global_state::globals().$field
            }
        )+
    };
}

/// Spawns a future on the browser event loop that runs one use case against a fresh API client.
///
/// Usage: `run_with_api!(|api| async move { ... })`
#[macro_export]
macro_rules! run_with_api {
    (|$api:ident| $body:expr) => {
        ::leptos::spawn_local(async move {
            let $api = $crate::infrastructure::SentimentApiClient::new(
                $crate::config::config().api_base_url.clone(),
            );
            $body.await
        })
    };
}
