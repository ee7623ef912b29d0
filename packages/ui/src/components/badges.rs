use dioxus::prelude::*;
use store::{PaymentStatus, Person};

/// CSS modifier and label for a payment status badge.
///
/// Unknown statuses keep their text and get no modifier.
pub fn status_badge(status: &str) -> (&'static str, String) {
    match PaymentStatus::parse(status) {
        PaymentStatus::Paid => ("paid", "✅ Paid".to_string()),
        PaymentStatus::Pending => ("pending", "⏳ Pending".to_string()),
        PaymentStatus::Overdue => ("overdue", "⚠️ Overdue".to_string()),
        PaymentStatus::Other(text) => ("", text),
    }
}

#[component]
pub fn PaymentStatusBadge(status: String) -> Element {
    let (modifier, label) = status_badge(&status);
    rsx! {
        span { class: "status-badge {modifier}", "{label}" }
    }
}

/// Student and teacher badges for a person, or a muted "None".
#[component]
pub fn RoleBadges(person: Person) -> Element {
    rsx! {
        if person.is_student {
            span { class: "status-badge student", "🎓 Student" }
        }
        if person.is_teacher {
            span { class: "status-badge teacher", "👨‍🏫 Teacher" }
        }
        if person.has_no_role() {
            span { class: "status-badge none", "— None" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses() {
        assert_eq!(status_badge("Paid"), ("paid", "✅ Paid".to_string()));
        assert_eq!(status_badge("Pending").0, "pending");
        assert_eq!(status_badge("Overdue").0, "overdue");
    }

    #[test]
    fn test_free_text_status() {
        assert_eq!(status_badge("Partially paid"), ("", "Partially paid".to_string()));
    }
}
