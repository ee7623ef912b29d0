//! Backend client and page settings shared through context.

use api::ApiClient;
use dioxus::prelude::*;
use store::config::UiConfig;
use store::AcademyConfig;

/// Get the shared API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Get the page timings and list sizes.
pub fn use_ui_config() -> UiConfig {
    use_context::<UiConfig>()
}

/// Provider component for the API client and page settings.
/// Wrap the router with this so every page can reach the backend.
#[component]
pub fn ApiProvider(config: AcademyConfig, children: Element) -> Element {
    let api_config = config.clone();
    use_context_provider(move || ApiClient::from_config(&api_config));
    use_context_provider(move || config.ui.clone());

    rsx! {
        {children}
    }
}
