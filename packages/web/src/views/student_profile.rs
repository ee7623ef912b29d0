use std::fmt::Display;

use dioxus::prelude::*;

use store::format::{format_date, format_inr, or_dash};
use store::{Payment, Person, StudentBalance};
use ui::components::{
    Avatar, EmptyState, ErrorBanner, Loading, PaymentStatusBadge, RoleBadges,
};
use ui::{use_api, use_delete_confirm, BackLink, BackTarget, ConfirmDeleteButton, PageHeader};

use crate::Route;

#[derive(Clone, Debug, PartialEq)]
struct Profile {
    person: Person,
    payments: Vec<Payment>,
}

/// Combine the person lookup with their payments. Payment history is
/// optional; a missing person is not.
fn assemble<E: Display>(
    person: Result<Option<Person>, E>,
    payments: Result<Vec<Payment>, E>,
) -> Result<Profile, String> {
    let person = match person {
        Ok(Some(person)) => person,
        Ok(None) => return Err("Student not found".to_string()),
        Err(e) => {
            tracing::error!("Error fetching student details: {e}");
            return Err("Failed to load student details".to_string());
        }
    };
    let payments = payments.unwrap_or_else(|e| {
        tracing::warn!("No payment history for {}: {e}", person.user_id);
        Vec::new()
    });
    Ok(Profile { person, payments })
}

#[component]
pub fn StudentProfile(id: i64, from: String) -> Element {
    let api = use_api();
    let load_api = api.clone();
    let nav = use_navigator();
    let back = BackTarget::from_query(&from);
    let mut action_error = use_signal(|| Option::<String>::None);
    let mut confirm = use_delete_confirm::<()>();

    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let profile = use_resource(move || {
        let api = load_api.clone();
        async move {
            let id = id_signal();
            let (person, payments) =
                futures::join!(api.find_person(id), api.list_student_payments(id));
            assemble(person, payments)
        }
    });

    let on_delete = move |_: ()| {
        if !confirm.click(()) {
            return;
        }
        let api = api.clone();
        spawn(async move {
            match api.delete_person(id).await {
                Ok(()) => {
                    tracing::info!("Deleted student {id}");
                    nav.push(Route::StudentList {});
                }
                Err(e) => {
                    tracing::error!("Error deleting student {id}: {e}");
                    action_error.set(Some(
                        e.user_message("Failed to delete student. Please try again."),
                    ));
                    confirm.reset();
                }
            }
        });
    };

    let profile = match profile.cloned() {
        None => {
            return rsx! {
                div { class: "main-container", Loading { message: "Loading student profile..." } }
            };
        }
        Some(Err(message)) => {
            return rsx! {
                div {
                    class: "main-container",
                    EmptyState {
                        icon: "❌",
                        title: message,
                        message: "The student you are looking for could not be loaded.",
                        Link { class: "btn-add", to: Route::StudentList {}, "← Back to Students" }
                    }
                }
            };
        }
        Some(Ok(profile)) => profile,
    };

    let Profile { person, payments } = profile;
    let balance = StudentBalance::from_payments(&payments);
    let name = person.display_name().to_string();
    let member_since = format_date(person.created_at.as_deref());

    rsx! {
        div {
            class: "main-container",
            BackLink { target: back }
            PageHeader {
                title: "Student Profile",
                subtitle: "View and manage student information",
            }

            if let Some(message) = action_error() {
                ErrorBanner { message }
            }

            div {
                class: "profile-layout",
                div {
                    class: "table-container",
                    div {
                        class: "profile-hero",
                        Avatar { name: name.clone(), class: "user-avatar profile-avatar" }
                        h2 { "{name}" }
                        p { "ID: {person.user_id}" }
                    }
                    div {
                        class: "profile-details",
                        div {
                            class: "profile-field",
                            label { "Role" }
                            div { RoleBadges { person: person.clone() } }
                        }
                        div {
                            class: "profile-field",
                            label { "Email" }
                            p { "📧 {or_dash(&person.email)}" }
                        }
                        div {
                            class: "profile-field",
                            label { "Phone" }
                            p { "📱 {or_dash(&person.phone)}" }
                        }
                        div {
                            class: "profile-field",
                            label { "Member Since" }
                            p { "{member_since}" }
                        }
                        div {
                            class: "profile-actions",
                            Link {
                                class: "action-btn edit",
                                to: Route::EditStudent { id, from: String::new() },
                                "✏️ Edit"
                            }
                            ConfirmDeleteButton {
                                armed: confirm.is_armed(&()),
                                label: "🗑️ Delete",
                                confirm_label: "⚠️ Confirm Delete?",
                                onclick: on_delete,
                            }
                        }
                    }
                }

                div {
                    div {
                        class: "balance-grid",
                        div {
                            class: "balance-card",
                            div { class: "amount paid", "{format_inr(balance.paid)}" }
                            div { class: "caption", "Total Paid" }
                        }
                        div {
                            class: "balance-card",
                            div { class: "amount outstanding", "{format_inr(balance.outstanding)}" }
                            div { class: "caption", "Outstanding" }
                        }
                        div {
                            class: "balance-card",
                            div { class: "amount total", "{format_inr(balance.total)}" }
                            div { class: "caption", "Total Fee" }
                        }
                    }

                    div {
                        class: "table-container",
                        div {
                            class: "table-header",
                            h2 { class: "table-title", "Payment History" }
                            Link {
                                class: "btn-add",
                                to: Route::RecordPayment { student: id.to_string(), from: String::new() },
                                "+ Record Payment"
                            }
                        }
                        if payments.is_empty() {
                            EmptyState {
                                icon: "💰",
                                title: "No payment records",
                                message: "No payment records found for this student",
                            }
                        } else {
                            table {
                                class: "students-table",
                                thead {
                                    tr {
                                        th { "Due Date" }
                                        th { "Payment Date" }
                                        th { "Amount" }
                                        th { "Method" }
                                        th { "Status" }
                                    }
                                }
                                tbody {
                                    for payment in payments {
                                        tr {
                                            key: "{payment.payment_id}",
                                            td { "{format_date(payment.due_date.as_deref())}" }
                                            td { "{format_date(payment.payment_date.as_deref())}" }
                                            td { "{format_inr(payment.amount)}" }
                                            td { "{or_dash(payment.payment_method.as_deref().unwrap_or_default())}" }
                                            td { PaymentStatusBadge { status: payment.status.clone() } }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
