use dioxus::prelude::*;

use store::NewPerson;
use ui::components::{ErrorBanner, Loading, SuccessBanner};
use ui::{sleep_ms, use_api, use_ui_config, BackLink, BackTarget, PageHeader};

use crate::Route;

#[component]
pub fn AddStudent(from: String) -> Element {
    rsx! { StudentForm { from } }
}

#[component]
pub fn EditStudent(id: i64, from: String) -> Element {
    rsx! { StudentForm { id, from } }
}

/// Create form when `id` is absent, edit form for that person otherwise.
#[component]
fn StudentForm(id: Option<i64>, from: String) -> Element {
    let api = use_api();
    let load_api = api.clone();
    let redirect_ms = use_ui_config().redirect_delay_ms;
    let nav = use_navigator();
    let back = BackTarget::from_query(&from);

    let mut draft = use_signal(NewPerson::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let loader = use_resource(move || {
        let api = load_api.clone();
        async move {
            let Some(id) = id_signal() else {
                return;
            };
            match api.get_person(id).await {
                Ok(person) => draft.set(NewPerson::from(&person)),
                Err(e) => {
                    tracing::error!("Error fetching student {id}: {e}");
                    error.set(Some("Failed to load student data".to_string()));
                }
            }
        }
    });

    let is_edit = id.is_some();
    let loading = is_edit && loader.read().is_none();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        let api = api.clone();
        let body = draft();
        saving.set(true);
        error.set(None);
        spawn(async move {
            let result = match id {
                Some(id) => api.update_person(id, &body).await,
                None => api.create_person(&body).await,
            };
            match result {
                Ok(saved) => {
                    match saved {
                        Some(saved) => {
                            tracing::info!("Saved student {} ({})", saved.user_id, saved.name)
                        }
                        None => tracing::info!("Saved student {}", body.name),
                    }
                    let message = if is_edit {
                        "Student updated successfully! Redirecting..."
                    } else {
                        "Student added successfully! Redirecting..."
                    };
                    success.set(Some(message.to_string()));
                    sleep_ms(redirect_ms).await;
                    nav.push(Route::StudentList {});
                }
                Err(e) => {
                    tracing::error!("Error saving student: {e}");
                    let fallback = if is_edit {
                        "Failed to update student. Please try again."
                    } else {
                        "Failed to add student. Please try again."
                    };
                    error.set(Some(e.user_message(fallback)));
                    saving.set(false);
                }
            }
        });
    };

    let (title, subtitle, submit_label) = if is_edit {
        ("Edit Student", "Update student information", "Update Student")
    } else {
        ("Add New Student", "Register a new student or teacher", "Add Student")
    };
    let values = draft.read().clone();

    rsx! {
        div {
            class: "main-container",
            BackLink { target: back }
            PageHeader { title: title.to_string(), subtitle: subtitle.to_string() }

            if let Some(message) = success() {
                SuccessBanner { message }
            }
            if let Some(message) = error() {
                ErrorBanner { message }
            }

            div {
                class: "table-container",
                if loading {
                    Loading { message: "Loading student data..." }
                } else {
                    form {
                        class: "form",
                        onsubmit: onsubmit,
                        div {
                            class: "form-field",
                            label { r#for: "name", "Full Name *" }
                            input {
                                id: "name",
                                r#type: "text",
                                required: true,
                                placeholder: "Enter full name",
                                value: "{values.name}",
                                oninput: move |evt| draft.write().name = evt.value(),
                            }
                        }
                        div {
                            class: "form-field",
                            label { r#for: "email", "Email Address *" }
                            input {
                                id: "email",
                                r#type: "email",
                                required: true,
                                placeholder: "student@example.com",
                                value: "{values.email}",
                                oninput: move |evt| draft.write().email = evt.value(),
                            }
                        }
                        div {
                            class: "form-field",
                            label { r#for: "phone", "Phone Number *" }
                            input {
                                id: "phone",
                                r#type: "tel",
                                required: true,
                                placeholder: "+91 9876543210",
                                value: "{values.phone}",
                                oninput: move |evt| draft.write().phone = evt.value(),
                            }
                            small { class: "form-hint", "Format: +91 followed by 10 digits" }
                        }
                        div {
                            class: "form-field",
                            label { "Role" }
                            div {
                                class: "form-roles",
                                label {
                                    input {
                                        r#type: "checkbox",
                                        checked: values.is_student,
                                        onchange: move |evt| draft.write().is_student = evt.checked(),
                                    }
                                    "🎓 Student"
                                }
                                label {
                                    input {
                                        r#type: "checkbox",
                                        checked: values.is_teacher,
                                        onchange: move |evt| draft.write().is_teacher = evt.checked(),
                                    }
                                    "👨‍🏫 Teacher"
                                }
                            }
                        }
                        div {
                            class: "form-actions",
                            button {
                                class: "btn-primary",
                                r#type: "submit",
                                disabled: saving(),
                                if saving() { "Saving..." } else { "{submit_label}" }
                            }
                            Link { class: "btn-secondary", to: back.href(), "Cancel" }
                        }
                    }
                }
            }
        }
    }
}
