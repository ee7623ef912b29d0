use dioxus::prelude::*;

use store::AcademyConfig;
use ui::{ApiProvider, Navbar};
use views::{
    AddStudent, Dashboard, DashboardAlias, EditStudent, NotFound, PaymentsList, RecordPayment,
    StudentList, StudentProfile,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Dashboard {},
        #[route("/dashboard")]
        DashboardAlias {},
        #[route("/students")]
        StudentList {},
        #[route("/students/add?:from")]
        AddStudent { from: String },
        #[route("/students/edit/:id?:from")]
        EditStudent { id: i64, from: String },
        #[route("/students/:id?:from")]
        StudentProfile { id: i64, from: String },
        #[route("/payments")]
        PaymentsList {},
        #[route("/payments/add?:student&:from")]
        RecordPayment { student: String, from: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Console configuration baked in at build time.
const CONFIG_TOML: &str = include_str!("../academy.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

/// Parse the embedded config, letting `ACADEMY_API_URL` override the backend.
fn load_config() -> AcademyConfig {
    let config = AcademyConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}: {e}; using defaults", AcademyConfig::filename());
        AcademyConfig::default()
    });
    match option_env!("ACADEMY_API_URL") {
        Some(url) if !url.is_empty() => config.with_base_url(url),
        _ => config,
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    tracing::debug!("Backend at {}", config.api.base_url);

    rsx! {
        ApiProvider {
            config: config,
            Router::<Route> {}
        }
    }
}

/// Navigation bar above every page.
#[component]
fn Shell() -> Element {
    let route = use_route::<Route>();

    rsx! {
        Navbar { current_path: route.to_string() }
        Outlet::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = AcademyConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(config.ui.delete_confirm_secs, 3);
        assert!(!config.api.base_url.ends_with('/'));
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::StudentList {}.to_string(), "/students");
        assert_eq!(
            "/students/edit/7?from=students".parse::<Route>().ok(),
            Some(Route::EditStudent { id: 7, from: "students".into() })
        );
        assert_eq!(
            "/students/add".parse::<Route>().ok(),
            Some(Route::AddStudent { from: String::new() })
        );
        assert_eq!(
            "/payments/add?student=3&from=payments".parse::<Route>().ok(),
            Some(Route::RecordPayment { student: "3".into(), from: "payments".into() })
        );
    }
}
