use std::fmt::Display;

use dioxus::prelude::*;

use store::filters::filter_payments;
use store::format::{format_date, format_inr, or_dash};
use store::ledger::join_student_names;
use store::{Payment, PaymentRow, PaymentStatus, PaymentTotals, Person, StatusFilter};
use ui::components::{EmptyState, ErrorBanner, Loading, PaymentStatusBadge, PersonCell, StatCard};
use ui::{use_api, PageHeader};

use super::CONNECT_FAILED;
use crate::Route;

/// Join both fetches into display rows. Either failing fails the page.
fn assemble<E: Display>(
    people: Result<Vec<Person>, E>,
    payments: Result<Vec<Payment>, E>,
) -> Result<Vec<PaymentRow>, String> {
    match (people, payments) {
        (Ok(people), Ok(payments)) => Ok(join_student_names(&payments, &people)),
        (Err(e), _) | (_, Err(e)) => {
            tracing::error!("Error fetching payments: {e}");
            Err(CONNECT_FAILED.to_string())
        }
    }
}

#[component]
pub fn PaymentsList() -> Element {
    let api = use_api();
    let mut search = use_signal(String::new);
    let mut status = use_signal(|| StatusFilter::All);

    let mut rows = use_resource(move || {
        let api = api.clone();
        async move {
            let (people, payments) = futures::join!(api.list_people(), api.list_payments());
            assemble(people, payments)
        }
    });

    let term = search();
    let filter = status();
    let loaded = rows.cloned();
    let all: &[PaymentRow] = match &loaded {
        Some(Ok(rows)) => rows,
        _ => &[],
    };
    let totals = PaymentTotals::from_payments(all.iter().map(|row| &row.payment));
    let visible: Vec<PaymentRow> = filter_payments(all, &term, filter)
        .into_iter()
        .cloned()
        .collect();
    let narrowed = !term.is_empty() || filter != StatusFilter::All;

    rsx! {
        div {
            class: "main-container",
            PageHeader {
                title: "Payments",
                subtitle: "Track and manage all fee payments",
                Link {
                    class: "btn-add",
                    to: Route::RecordPayment { student: String::new(), from: "payments".to_string() },
                    "+ Record Payment"
                }
            }

            div {
                class: "stats-container",
                StatCard { value: format_inr(totals.collected), label: "Total Collected", tone: "success" }
                StatCard { value: format_inr(totals.pending), label: "Pending", tone: "warning" }
                StatCard { value: format_inr(totals.overdue), label: "Overdue", tone: "danger" }
                StatCard { value: "{totals.records}", label: "Total Records", tone: "info" }
            }

            div {
                class: "table-container",
                div {
                    class: "table-header",
                    h2 { class: "table-title", "Payment Records" }
                    div {
                        class: "table-actions",
                        select {
                            class: "filter-select",
                            value: "{filter.value()}",
                            onchange: move |evt| status.set(StatusFilter::from_value(&evt.value())),
                            for choice in StatusFilter::ALL {
                                option {
                                    key: "{choice.value()}",
                                    value: "{choice.value()}",
                                    selected: choice == filter,
                                    "{choice.label()}"
                                }
                            }
                        }
                        input {
                            class: "search-box",
                            r#type: "text",
                            placeholder: "🔍 Search by student name...",
                            value: "{term}",
                            oninput: move |evt| search.set(evt.value()),
                        }
                    }
                }

                match loaded {
                    None => rsx! { Loading { message: "Loading payments..." } },
                    Some(Err(message)) => rsx! {
                        ErrorBanner {
                            message,
                            on_retry: EventHandler::new(move |_| rows.restart()),
                        }
                    },
                    Some(Ok(_)) if visible.is_empty() && narrowed => rsx! {
                        EmptyState {
                            icon: "💰",
                            title: "No matching payments found",
                            message: "Try adjusting your filters",
                        }
                    },
                    Some(Ok(_)) if visible.is_empty() => rsx! {
                        EmptyState {
                            icon: "💰",
                            title: "No payments recorded",
                            message: "Record your first payment to get started",
                            Link {
                                class: "btn-add",
                                to: Route::RecordPayment { student: String::new(), from: "payments".to_string() },
                                "+ Record Payment"
                            }
                        }
                    },
                    Some(Ok(_)) => rsx! {
                        table {
                            class: "students-table",
                            thead {
                                tr {
                                    th { "Student" }
                                    th { "Amount" }
                                    th { "Due Date" }
                                    th { "Payment Date" }
                                    th { "Method" }
                                    th { "Status" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                for row in visible {
                                    tr {
                                        key: "{row.payment.payment_id}",
                                        td { PersonCell { name: row.student_name.clone(), id: row.payment.student_id } }
                                        td { strong { "{format_inr(row.payment.amount)}" } }
                                        td { "{format_date(row.payment.due_date.as_deref())}" }
                                        td { "{format_date(row.payment.payment_date.as_deref())}" }
                                        td { "{or_dash(row.payment.payment_method.as_deref().unwrap_or_default())}" }
                                        td { PaymentStatusBadge { status: row.payment.status.clone() } }
                                        td {
                                            Link {
                                                class: "action-btn view",
                                                to: Route::StudentProfile { id: row.payment.student_id, from: "payments".to_string() },
                                                "View"
                                            }
                                            if row.payment.status_kind() != PaymentStatus::Paid {
                                                Link {
                                                    class: "action-btn edit",
                                                    to: Route::RecordPayment {
                                                        student: row.payment.student_id.to_string(),
                                                        from: "payments".to_string(),
                                                    },
                                                    "Pay"
                                                }
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

#[cfg(test)]
mod tests {
    use super::*;
    use store::UNKNOWN_STUDENT;

    fn person(id: i64, name: &str) -> Person {
        Person {
            user_id: id,
            name: name.into(),
            is_student: true,
            ..Default::default()
        }
    }

    fn payment(id: i64, student_id: i64, amount: f64, status: &str) -> Payment {
        Payment {
            payment_id: id,
            student_id,
            amount,
            status: status.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_rows_carry_student_names() {
        let rows = assemble::<&str>(
            Ok(vec![person(1, "Asha")]),
            Ok(vec![payment(10, 1, 500.0, "Paid"), payment(11, 9, 300.0, "Pending")]),
        )
        .unwrap();
        assert_eq!(rows[0].student_name, "Asha");
        assert_eq!(rows[1].student_name, UNKNOWN_STUDENT);
    }

    #[test]
    fn test_either_failure_fails_page() {
        assert_eq!(
            assemble::<&str>(Err("down"), Ok(vec![])),
            Err(CONNECT_FAILED.to_string())
        );
        assert_eq!(
            assemble::<&str>(Ok(vec![]), Err("down")),
            Err(CONNECT_FAILED.to_string())
        );
    }

    #[test]
    fn test_totals_and_filter_over_rows() {
        let rows = assemble::<&str>(
            Ok(vec![person(1, "Asha"), person(2, "Ravi")]),
            Ok(vec![
                payment(1, 1, 1000.0, "Paid"),
                payment(2, 2, 400.0, "Pending"),
                payment(3, 2, 150.0, "Overdue"),
            ]),
        )
        .unwrap();
        let totals = PaymentTotals::from_payments(rows.iter().map(|row| &row.payment));
        assert_eq!(totals.collected, 1000.0);
        assert_eq!(totals.pending, 400.0);
        assert_eq!(totals.overdue, 150.0);
        assert_eq!(totals.records, 3);

        let ravi_unpaid = filter_payments(&rows, "rav", StatusFilter::Overdue);
        assert_eq!(ravi_unpaid.len(), 1);
        assert_eq!(ravi_unpaid[0].payment.payment_id, 3);
    }
}
