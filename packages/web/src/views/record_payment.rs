use dioxus::prelude::*;

use store::filters::roster;
use store::format::{format_date, format_inr, today_iso};
use store::models::PAYMENT_METHODS;
use store::{NewPayment, PaymentStatus, Person};
use ui::components::{Avatar, ErrorBanner, SuccessBanner};
use ui::{sleep_ms, use_api, use_ui_config, BackLink, BackTarget, PageHeader};

use crate::Route;

/// Raw field values of the record-payment form.
#[derive(Clone, Debug, PartialEq)]
struct PaymentForm {
    student_id: String,
    amount: String,
    due_date: String,
    payment_date: String,
    payment_method: String,
    status: String,
    notes: String,
}

impl PaymentForm {
    /// Both dates today, paid in cash, optionally for a pre-selected student.
    fn new(student_id: &str, today: &str) -> Self {
        Self {
            student_id: student_id.to_string(),
            amount: String::new(),
            due_date: today.to_string(),
            payment_date: today.to_string(),
            payment_method: "Cash".to_string(),
            status: PaymentStatus::Paid.as_str().to_string(),
            notes: String::new(),
        }
    }

    fn selected_id(&self) -> Option<i64> {
        self.student_id.trim().parse().ok()
    }

    fn amount_value(&self) -> f64 {
        self.amount.trim().parse().unwrap_or(0.0)
    }

    /// Request body, or the message to show when a field is unusable.
    fn to_new_payment(&self) -> Result<NewPayment, String> {
        let student_id = self
            .selected_id()
            .ok_or_else(|| "Please select a student".to_string())?;
        let amount: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| "Please enter a valid amount".to_string())?;
        if !amount.is_finite() {
            return Err("Please enter a valid amount".to_string());
        }
        Ok(NewPayment {
            student_id,
            amount,
            due_date: self.due_date.clone(),
            payment_date: self.payment_date.clone(),
            payment_method: self.payment_method.clone(),
            status: self.status.clone(),
            notes: (!self.notes.is_empty()).then(|| self.notes.clone()),
        })
    }
}

fn method_label(method: &str) -> String {
    let icon = match method {
        "Cash" => "💵",
        "UPI" => "📱",
        "Card" => "💳",
        "Bank Transfer" => "🏦",
        "Cheque" => "📝",
        _ => "",
    };
    format!("{icon} {method}")
}

#[component]
pub fn RecordPayment(student: String, from: String) -> Element {
    let api = use_api();
    let roster_api = api.clone();
    let redirect_ms = use_ui_config().redirect_delay_ms;
    let nav = use_navigator();
    let back = BackTarget::from_query(&from);

    let mut draft = use_signal(|| PaymentForm::new(&student, &today_iso()));
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| false);
    let mut saving = use_signal(|| false);

    let students = use_resource(move || {
        let api = roster_api.clone();
        async move {
            match api.list_people().await {
                Ok(people) => roster(&people),
                Err(e) => {
                    tracing::error!("Error fetching students: {e}");
                    Vec::new()
                }
            }
        }
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        let body = match draft.read().to_new_payment() {
            Ok(body) => body,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        let api = api.clone();
        saving.set(true);
        error.set(None);
        spawn(async move {
            match api.create_payment(&body).await {
                Ok(payment) => {
                    match payment {
                        Some(payment) => tracing::info!(
                            "Recorded payment {} for student {}",
                            payment.payment_id,
                            body.student_id
                        ),
                        None => tracing::info!("Recorded payment for student {}", body.student_id),
                    }
                    success.set(true);
                    sleep_ms(redirect_ms).await;
                    nav.push(Route::PaymentsList {});
                }
                Err(e) => {
                    tracing::error!("Error recording payment: {e}");
                    error.set(Some(
                        e.user_message("Failed to record payment. Please try again."),
                    ));
                    saving.set(false);
                }
            }
        });
    };

    let values = draft.read().clone();
    let roster_list: Vec<Person> = students.cloned().unwrap_or_default();
    let roster_loading = students.read().is_none();
    let selected = values
        .selected_id()
        .and_then(|id| roster_list.iter().find(|p| p.user_id == id).cloned());

    rsx! {
        div {
            class: "main-container",
            BackLink { target: back }
            PageHeader {
                title: "Record Payment",
                subtitle: "Record a fee payment for a student",
            }

            div {
                class: "two-column",
                div {
                    class: "table-container",
                    div {
                        class: "table-header",
                        h2 { class: "table-title", "Payment Details" }
                    }

                    if success() {
                        SuccessBanner { message: "Payment recorded successfully! Redirecting..." }
                    }
                    if let Some(message) = error() {
                        ErrorBanner { message }
                    }

                    form {
                        class: "form",
                        onsubmit: onsubmit,
                        div {
                            class: "form-field",
                            label { r#for: "student", "Select Student *" }
                            select {
                                id: "student",
                                required: true,
                                disabled: roster_loading,
                                value: "{values.student_id}",
                                onchange: move |evt| draft.write().student_id = evt.value(),
                                option { value: "", "-- Select a student --" }
                                for person in roster_list.iter() {
                                    option {
                                        key: "{person.user_id}",
                                        value: "{person.user_id}",
                                        selected: values.selected_id() == Some(person.user_id),
                                        "{person.display_name()} (ID: {person.user_id})"
                                    }
                                }
                            }
                            if roster_loading {
                                small { class: "form-hint", "Loading students..." }
                            }
                        }
                        div {
                            class: "form-field",
                            label { r#for: "amount", "Amount (₹) *" }
                            input {
                                id: "amount",
                                r#type: "number",
                                required: true,
                                min: "0",
                                step: "0.01",
                                placeholder: "Enter amount",
                                value: "{values.amount}",
                                oninput: move |evt| draft.write().amount = evt.value(),
                            }
                        }
                        div {
                            class: "form-field",
                            label { r#for: "due_date", "Due Date *" }
                            input {
                                id: "due_date",
                                r#type: "date",
                                required: true,
                                value: "{values.due_date}",
                                oninput: move |evt| draft.write().due_date = evt.value(),
                            }
                        }
                        div {
                            class: "form-field",
                            label { r#for: "payment_date", "Payment Date *" }
                            input {
                                id: "payment_date",
                                r#type: "date",
                                required: true,
                                value: "{values.payment_date}",
                                oninput: move |evt| draft.write().payment_date = evt.value(),
                            }
                        }
                        div {
                            class: "form-field",
                            label { r#for: "status", "Status *" }
                            select {
                                id: "status",
                                value: "{values.status}",
                                onchange: move |evt| draft.write().status = evt.value(),
                                for status in PaymentStatus::choices() {
                                    option {
                                        key: "{status.as_str()}",
                                        value: "{status.as_str()}",
                                        selected: values.status == status.as_str(),
                                        "{status.as_str()}"
                                    }
                                }
                            }
                        }
                        div {
                            class: "form-field",
                            label { r#for: "payment_method", "Payment Method *" }
                            select {
                                id: "payment_method",
                                value: "{values.payment_method}",
                                onchange: move |evt| draft.write().payment_method = evt.value(),
                                for method in PAYMENT_METHODS.iter().copied() {
                                    option {
                                        key: "{method}",
                                        value: "{method}",
                                        selected: values.payment_method == method,
                                        "{method_label(method)}"
                                    }
                                }
                            }
                        }
                        div {
                            class: "form-field",
                            label { r#for: "notes", "Notes" }
                            textarea {
                                id: "notes",
                                rows: "3",
                                placeholder: "Any additional notes...",
                                value: "{values.notes}",
                                oninput: move |evt| draft.write().notes = evt.value(),
                            }
                        }
                        div {
                            class: "form-actions",
                            button {
                                class: "btn-primary",
                                r#type: "submit",
                                disabled: saving(),
                                if saving() { "Processing..." } else { "💰 Record Payment" }
                            }
                            Link { class: "btn-secondary", to: back.href(), "Cancel" }
                        }
                    }
                }

                div {
                    class: "table-container",
                    div {
                        class: "table-header",
                        h2 { class: "table-title", "Payment Summary" }
                    }
                    div {
                        class: "summary",
                        if let Some(person) = selected {
                            div {
                                class: "summary-student",
                                Avatar { name: person.display_name().to_string(), class: "user-avatar profile-avatar" }
                                h3 { "{person.display_name()}" }
                                p { "ID: {person.user_id}" }
                            }
                            div {
                                class: "summary-rows",
                                div {
                                    class: "summary-row",
                                    span { "Amount" }
                                    span { strong { "{format_inr(values.amount_value())}" } }
                                }
                                div {
                                    class: "summary-row",
                                    span { "Date" }
                                    span { "{format_date(Some(values.payment_date.as_str()))}" }
                                }
                                div {
                                    class: "summary-row",
                                    span { "Method" }
                                    span { "{values.payment_method}" }
                                }
                                div {
                                    class: "summary-row",
                                    span { "Status" }
                                    span { "{values.status}" }
                                }
                            }
                        } else {
                            div {
                                class: "summary-empty",
                                div { class: "empty-state-icon", "👤" }
                                p { "Select a student to see payment summary" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PaymentForm {
        PaymentForm {
            amount: "2500".into(),
            ..PaymentForm::new("7", "2024-03-01")
        }
    }

    #[test]
    fn test_defaults() {
        let form = PaymentForm::new("", "2024-03-01");
        assert_eq!(form.status, "Paid");
        assert_eq!(form.payment_method, "Cash");
        assert_eq!(form.due_date, "2024-03-01");
        assert_eq!(form.payment_date, "2024-03-01");
        assert_eq!(form.selected_id(), None);
    }

    #[test]
    fn test_preselected_student() {
        assert_eq!(PaymentForm::new("12", "2024-03-01").selected_id(), Some(12));
    }

    #[test]
    fn test_body_from_form() {
        let body = filled().to_new_payment().unwrap();
        assert_eq!(body.student_id, 7);
        assert_eq!(body.amount, 2500.0);
        assert_eq!(body.status, "Paid");
        assert_eq!(body.payment_method, "Cash");
        assert_eq!(body.notes, None);

        let with_notes = PaymentForm {
            notes: "March fees".into(),
            ..filled()
        };
        assert_eq!(
            with_notes.to_new_payment().unwrap().notes.as_deref(),
            Some("March fees")
        );
    }

    #[test]
    fn test_rejects_missing_student_and_bad_amount() {
        let no_student = PaymentForm {
            student_id: String::new(),
            ..filled()
        };
        assert_eq!(no_student.to_new_payment(), Err("Please select a student".into()));

        for amount in ["", "abc", "NaN", "inf"] {
            let form = PaymentForm {
                amount: amount.into(),
                ..filled()
            };
            assert_eq!(form.to_new_payment(), Err("Please enter a valid amount".into()));
        }
    }

    #[test]
    fn test_method_labels() {
        assert_eq!(method_label("UPI"), "📱 UPI");
        assert_eq!(method_label("Bank Transfer"), "🏦 Bank Transfer");
    }
}
