//! Joins and sums over already-fetched people and payments.
//!
//! Everything here is display arithmetic: the backend remains the source of
//! truth, and these helpers only derive the numbers the pages show.

use crate::models::{DashboardStats, Payment, PaymentStatus, Person};

/// Label used when a payment's `student_id` matches nobody in the list.
pub const UNKNOWN_STUDENT: &str = "Unknown Student";

/// A payment paired with the display name of its student.
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentRow {
    pub payment: Payment,
    pub student_name: String,
}

/// Attach a student name to every payment, in payment order.
pub fn join_student_names(payments: &[Payment], people: &[Person]) -> Vec<PaymentRow> {
    payments
        .iter()
        .map(|payment| {
            let student_name = people
                .iter()
                .find(|p| p.user_id == payment.student_id)
                .map(|p| p.name.as_str())
                .filter(|name| !name.is_empty())
                .unwrap_or(UNKNOWN_STUDENT)
                .to_string();
            PaymentRow {
                payment: payment.clone(),
                student_name,
            }
        })
        .collect()
}

fn sum_where<'a>(
    payments: impl IntoIterator<Item = &'a Payment>,
    pred: impl Fn(&PaymentStatus) -> bool,
) -> f64 {
    payments
        .into_iter()
        .filter(|p| pred(&p.status_kind()))
        .map(|p| p.amount)
        .sum()
}

/// Stat cards of the payments list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaymentTotals {
    pub collected: f64,
    pub pending: f64,
    pub overdue: f64,
    pub records: usize,
}

impl PaymentTotals {
    pub fn from_payments<'a>(payments: impl IntoIterator<Item = &'a Payment> + Clone) -> Self {
        Self {
            collected: sum_where(payments.clone(), |s| *s == PaymentStatus::Paid),
            pending: sum_where(payments.clone(), |s| *s == PaymentStatus::Pending),
            overdue: sum_where(payments.clone(), |s| *s == PaymentStatus::Overdue),
            records: payments.into_iter().count(),
        }
    }
}

/// Sums shown on a student's profile. Outstanding covers Pending and Overdue.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentBalance {
    pub paid: f64,
    pub outstanding: f64,
    pub total: f64,
}

impl StudentBalance {
    pub fn from_payments(payments: &[Payment]) -> Self {
        Self {
            paid: sum_where(payments, |s| *s == PaymentStatus::Paid),
            outstanding: sum_where(payments, |s| {
                matches!(s, PaymentStatus::Pending | PaymentStatus::Overdue)
            }),
            total: payments.iter().map(|p| p.amount).sum(),
        }
    }
}

/// Number of people with each role flag set, as `(students, teachers)`.
pub fn role_counts(people: &[Person]) -> (u64, u64) {
    let students = people.iter().filter(|p| p.is_student).count() as u64;
    let teachers = people.iter().filter(|p| p.is_teacher).count() as u64;
    (students, teachers)
}

impl DashboardStats {
    /// Counts derived from the raw people list when the aggregate endpoint is
    /// unavailable. Money fields are zero.
    pub fn fallback(people: &[Person]) -> Self {
        let (total_students, total_teachers) = role_counts(people);
        Self {
            total_students,
            total_teachers,
            ..Default::default()
        }
    }
}

/// The last `n` people of the list, most recent first.
pub fn recent_people(people: &[Person], n: usize) -> Vec<Person> {
    people.iter().rev().take(n).cloned().collect()
}
