//! Shared API client context.

use api::ParkAllClient;
use dioxus::prelude::*;

/// Provide one client for the whole tree, configured from the environment.
pub fn use_api_provider() -> ParkAllClient {
    use_context_provider(ParkAllClient::from_env)
}

pub fn use_api() -> ParkAllClient {
    use_context::<ParkAllClient>()
}
