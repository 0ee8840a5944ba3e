//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::mutation::MutationClient;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Validation client bound to the page's campaign
    pub client: MutationClient,
}

impl AppContext {
    pub fn new(client: MutationClient) -> Self {
        Self { client }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
