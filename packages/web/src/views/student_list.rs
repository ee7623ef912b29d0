use dioxus::prelude::*;

use store::filters::filter_people;
use store::format::or_dash;
use store::ledger::role_counts;
use store::Person;
use ui::components::{EmptyState, ErrorBanner, Loading, PersonCell, RoleBadges, StatCard};
use ui::{use_api, use_delete_confirm, ConfirmDeleteButton, PageHeader};

use super::CONNECT_FAILED;
use crate::Route;

const DELETE_FAILED: &str = "Failed to delete student. Please try again.";

#[component]
pub fn StudentList() -> Element {
    let api = use_api();
    let fetch_api = api.clone();
    let mut search = use_signal(String::new);
    let mut action_error = use_signal(|| Option::<String>::None);
    let mut confirm = use_delete_confirm::<i64>();

    let mut people = use_resource(move || {
        let api = fetch_api.clone();
        async move {
            api.list_people().await.map_err(|e| {
                tracing::error!("Error fetching students: {e}");
                CONNECT_FAILED.to_string()
            })
        }
    });

    let delete_person = use_callback(move |id: i64| {
        let api = api.clone();
        spawn(async move {
            match api.delete_person(id).await {
                Ok(()) => {
                    tracing::info!("Deleted student {id}");
                    action_error.set(None);
                    people.restart();
                }
                Err(e) => {
                    tracing::error!("Error deleting student {id}: {e}");
                    action_error.set(Some(e.user_message(DELETE_FAILED)));
                }
            }
            confirm.reset();
        });
    });

    let term = search();
    let loaded = people.cloned();
    let all: &[Person] = match &loaded {
        Some(Ok(list)) => list,
        _ => &[],
    };
    let (students, teachers) = role_counts(all);
    let total = all.len();
    let visible: Vec<Person> = filter_people(all, &term).into_iter().cloned().collect();

    rsx! {
        div {
            class: "main-container",
            PageHeader {
                title: "Students & Teachers",
                subtitle: "Manage everyone enrolled at the academy",
            }

            div {
                class: "stats-container",
                StatCard { value: "{total}", label: "Total Users" }
                StatCard { value: "{students}", label: "Students", tone: "success" }
                StatCard { value: "{teachers}", label: "Teachers", tone: "info" }
            }

            if let Some(message) = action_error() {
                ErrorBanner { message }
            }

            div {
                class: "table-container",
                div {
                    class: "table-header",
                    h2 { class: "table-title", "All Users" }
                    div {
                        class: "table-actions",
                        input {
                            class: "search-box",
                            r#type: "text",
                            placeholder: "🔍 Search by name, email or phone...",
                            value: "{term}",
                            oninput: move |evt| search.set(evt.value()),
                        }
                        Link {
                            class: "btn-add",
                            to: Route::AddStudent { from: "students".to_string() },
                            "+ Add Student"
                        }
                    }
                }

                match loaded {
                    None => rsx! { Loading { message: "Loading students..." } },
                    Some(Err(message)) => rsx! {
                        ErrorBanner {
                            message,
                            on_retry: EventHandler::new(move |_| people.restart()),
                        }
                    },
                    Some(Ok(_)) if visible.is_empty() && term.is_empty() => rsx! {
                        EmptyState {
                            icon: "👥",
                            title: "No students found",
                            message: "Add your first student to get started",
                        }
                    },
                    Some(Ok(_)) if visible.is_empty() => rsx! {
                        EmptyState {
                            icon: "🔍",
                            title: "No students match your search",
                            message: "Try a different search term",
                        }
                    },
                    Some(Ok(_)) => rsx! {
                        table {
                            class: "students-table",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Email" }
                                    th { "Phone" }
                                    th { "Role" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                for person in visible {
                                    tr {
                                        key: "{person.user_id}",
                                        td { PersonCell { name: person.display_name().to_string(), id: person.user_id } }
                                        td { "{or_dash(&person.email)}" }
                                        td { "{or_dash(&person.phone)}" }
                                        td { RoleBadges { person: person.clone() } }
                                        td {
                                            Link {
                                                class: "action-btn view",
                                                to: Route::StudentProfile { id: person.user_id, from: "students".to_string() },
                                                "View"
                                            }
                                            Link {
                                                class: "action-btn edit",
                                                to: Route::EditStudent { id: person.user_id, from: "students".to_string() },
                                                "Edit"
                                            }
                                            ConfirmDeleteButton {
                                                armed: confirm.is_armed(&person.user_id),
                                                onclick: move |_| {
                                                    if confirm.click(person.user_id) {
                                                        delete_person.call(person.user_id);
                                                    }
                                                },
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
