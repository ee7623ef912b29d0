use dioxus::prelude::*;

/// Where a form or profile page returns to, chosen by its `from` query value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackTarget {
    Dashboard,
    Students,
    Payments,
}

impl BackTarget {
    /// Unknown or empty values return to the dashboard.
    pub fn from_query(from: &str) -> Self {
        match from {
            "students" => Self::Students,
            "payments" => Self::Payments,
            _ => Self::Dashboard,
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Students => "/students",
            Self::Payments => "/payments",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "← Back to Dashboard",
            Self::Students => "← Back to Students",
            Self::Payments => "← Back to Payments",
        }
    }
}

#[component]
pub fn BackLink(target: BackTarget) -> Element {
    rsx! {
        Link {
            class: "back-link",
            to: target.href(),
            "{target.label()}"
        }
    }
}

/// Title block at the top of every page, with optional trailing actions.
#[component]
pub fn PageHeader(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        div {
            class: "page-header",
            div {
                h1 { class: "page-title", "{title}" }
                p { class: "page-subtitle", "{subtitle}" }
            }
            {children}
        }
    }
}
