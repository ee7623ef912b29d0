//! Loading, empty, error and success states shared by the pages.

use dioxus::prelude::*;

#[component]
pub fn Loading(message: Option<String>) -> Element {
    rsx! {
        div {
            class: "loading-container",
            div { class: "spinner" }
            if let Some(message) = message {
                p { class: "loading-message", "{message}" }
            }
        }
    }
}

/// Placeholder for a table with nothing to show. Children render below the text.
#[component]
pub fn EmptyState(icon: String, title: String, message: String, children: Element) -> Element {
    rsx! {
        div {
            class: "empty-state",
            div { class: "empty-state-icon", "{icon}" }
            h3 { class: "empty-state-title", "{title}" }
            p { "{message}" }
            {children}
        }
    }
}

/// Inline error message with an optional Retry button.
#[component]
pub fn ErrorBanner(message: String, on_retry: Option<EventHandler<()>>) -> Element {
    rsx! {
        div {
            class: "banner banner-error",
            span { "⚠️" }
            span { "{message}" }
            if let Some(on_retry) = on_retry {
                button {
                    class: "banner-retry",
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        }
    }
}

#[component]
pub fn SuccessBanner(message: String) -> Element {
    rsx! {
        div {
            class: "banner banner-success",
            span { "✅" }
            span { "{message}" }
        }
    }
}
