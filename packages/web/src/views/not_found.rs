use dioxus::prelude::*;

use ui::components::EmptyState;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::warn!("No page at /{path}");

    rsx! {
        div {
            class: "main-container",
            EmptyState {
                icon: "🎵",
                title: "Page not found",
                message: "Nothing lives at /{path}.",
                Link { class: "btn-add", to: Route::Dashboard {}, "← Back to Dashboard" }
            }
        }
    }
}
