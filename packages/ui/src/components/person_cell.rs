use dioxus::prelude::*;
use store::format::initials;

#[component]
pub fn Avatar(name: String, #[props(default = "user-avatar".to_string())] class: String) -> Element {
    rsx! {
        div { class: "{class}", "{initials(&name)}" }
    }
}

/// Avatar, name and id, as shown in the first column of people and payment tables.
#[component]
pub fn PersonCell(name: String, id: i64) -> Element {
    rsx! {
        div {
            class: "user-info",
            Avatar { name: name.clone() }
            div {
                div { class: "user-name", "{name}" }
                div { class: "user-id", "ID: {id}" }
            }
        }
    }
}
