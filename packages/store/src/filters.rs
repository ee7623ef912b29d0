//! Client-side search and status filtering over fetched lists.

use crate::ledger::PaymentRow;
use crate::models::Person;

/// Whether `person` matches a free-text search term.
///
/// Name and email match case-insensitively; phone matches as a plain substring.
/// An empty term matches everyone.
pub fn person_matches(person: &Person, term: &str) -> bool {
    let needle = term.to_lowercase();
    person.name.to_lowercase().contains(&needle)
        || person.email.to_lowercase().contains(&needle)
        || person.phone.contains(term)
}

pub fn filter_people<'a>(people: &'a [Person], term: &str) -> Vec<&'a Person> {
    people.iter().filter(|p| person_matches(p, term)).collect()
}

/// People whose student flag is set, in list order.
pub fn roster(people: &[Person]) -> Vec<Person> {
    people.iter().filter(|p| p.is_student).cloned().collect()
}

/// Status selector of the payments list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Paid,
    Pending,
    Overdue,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [Self::All, Self::Paid, Self::Pending, Self::Overdue];

    /// Value used in the `<select>` element.
    pub fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Overdue => "overdue",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Status",
            Self::Paid => "✅ Paid",
            Self::Pending => "⏳ Pending",
            Self::Overdue => "⚠️ Overdue",
        }
    }

    /// Unknown values select [`StatusFilter::All`].
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.value() == value)
            .unwrap_or_default()
    }

    pub fn matches(self, status: &str) -> bool {
        match self {
            Self::All => true,
            other => status.to_lowercase() == other.value(),
        }
    }
}

/// Joined payment rows matching both the student-name search and the status filter.
pub fn filter_payments<'a>(
    rows: &'a [PaymentRow],
    term: &str,
    status: StatusFilter,
) -> Vec<&'a PaymentRow> {
    let needle = term.to_lowercase();
    rows.iter()
        .filter(|row| row.student_name.to_lowercase().contains(&needle))
        .filter(|row| status.matches(&row.payment.status))
        .collect()
}
