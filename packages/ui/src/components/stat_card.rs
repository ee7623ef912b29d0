use dioxus::prelude::*;

/// One number in the stats strip at the top of a page.
///
/// `tone` picks the colour: `""` (default), `"success"`, `"warning"`,
/// `"info"` or `"danger"`.
#[component]
pub fn StatCard(
    value: String,
    label: String,
    #[props(default = "".to_string())] tone: String,
) -> Element {
    rsx! {
        div {
            class: "stat-card {tone}",
            div { class: "stat-number", "{value}" }
            div { class: "stat-label", "{label}" }
        }
    }
}
