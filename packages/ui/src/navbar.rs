use dioxus::prelude::*;

const ACADEMY_CSS: Asset = asset!("/assets/academy.css");

/// Links shown in the top bar, as `(path, label)`.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "🏠 Dashboard"),
    ("/students", "👥 Students"),
    ("/payments", "💰 Payments"),
];

/// Whether the nav link for `link` is highlighted on `current`.
///
/// The root link covers both `/` and `/dashboard`; every other link is
/// active for any path that starts with it.
pub fn nav_link_active(current: &str, link: &str) -> bool {
    let current = current.split('?').next().unwrap_or(current);
    if link == "/" {
        current == "/" || current == "/dashboard"
    } else {
        current.starts_with(link)
    }
}

#[component]
pub fn Navbar(current_path: String) -> Element {
    let links = NAV_LINKS.iter().map(|&(path, label)| {
        let class = if nav_link_active(&current_path, path) {
            "nav-link active"
        } else {
            "nav-link"
        };
        (path, label, class)
    });

    rsx! {
        document::Stylesheet { href: ACADEMY_CSS }
        nav {
            class: "navbar",
            Link {
                class: "navbar-brand",
                to: "/",
                span { class: "navbar-logo", "🎵" }
                span { class: "navbar-title", "Music Academy" }
            }
            div {
                class: "navbar-links",
                for (path, label, class) in links {
                    Link {
                        key: "{path}",
                        class: class,
                        to: path,
                        "{label}"
                    }
                }
            }
        }
    }
}
