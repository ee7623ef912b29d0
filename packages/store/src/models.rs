//! # Record shapes mirrored from the academy backend
//!
//! The backend owns every record; these types only mirror the JSON it sends
//! and accepts. They are `Serialize + Deserialize + PartialEq` so they can be
//! passed straight into Dioxus component props.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Person`] | A student and/or teacher as returned by `GET /students/`. Role flags are parsed leniently (see [`crate::loose`]). |
//! | [`NewPerson`] | Body of `POST /user` and `PUT /students/{id}`. |
//! | [`Payment`] | A fee transaction tied to one person via `student_id`. |
//! | [`NewPayment`] | Body of `POST /payments`. |
//! | [`DashboardStats`] | Aggregates from `GET /dashboard/stats`. |
//! | [`Envelope`] | The `{ "data": [...] }` wrapper used by collection endpoints. |

use serde::{Deserialize, Serialize};

use crate::loose::{loose_amount, loose_bool, loose_count, null_as_empty};

/// Placeholder shown when a person has no name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// A person record: student, teacher, both, or neither.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub user_id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "loose_bool")]
    pub is_student: bool,
    #[serde(default, deserialize_with = "loose_bool")]
    pub is_teacher: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Person {
    /// Name for display, falling back to [`UNKNOWN_NAME`].
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            UNKNOWN_NAME
        } else {
            &self.name
        }
    }

    /// Neither role flag set.
    pub fn has_no_role(&self) -> bool {
        !self.is_student && !self.is_teacher
    }
}

/// Create/update body for a person.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewPerson {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub is_student: bool,
    pub is_teacher: bool,
}

impl Default for NewPerson {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            is_student: true,
            is_teacher: false,
        }
    }
}

impl From<&Person> for NewPerson {
    fn from(p: &Person) -> Self {
        Self {
            name: p.name.clone(),
            email: p.email.clone(),
            phone: p.phone.clone(),
            is_student: p.is_student,
            is_teacher: p.is_teacher,
        }
    }
}

/// A fee payment. `status` is free text; see [`PaymentStatus`] for the known values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: i64,
    pub student_id: i64,
    #[serde(default, deserialize_with = "loose_amount")]
    pub amount: f64,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub payment_date: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Payment {
    pub fn status_kind(&self) -> PaymentStatus {
        PaymentStatus::parse(&self.status)
    }
}

/// Body of `POST /payments`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewPayment {
    pub student_id: i64,
    pub amount: f64,
    pub due_date: String,
    pub payment_date: String,
    pub payment_method: String,
    pub status: String,
    pub notes: Option<String>,
}

/// Payment methods offered by the record-payment form.
pub const PAYMENT_METHODS: &[&str] = &["Cash", "UPI", "Card", "Bank Transfer", "Cheque"];

/// Classification of the free-text payment status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
    Other(String),
}

impl PaymentStatus {
    /// Exact, case-sensitive match on the three known values.
    pub fn parse(s: &str) -> Self {
        match s {
            "Paid" => Self::Paid,
            "Pending" => Self::Pending,
            "Overdue" => Self::Overdue,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
            Self::Overdue => "Overdue",
            Self::Other(s) => s,
        }
    }

    /// Selectable values in the record-payment form.
    pub fn choices() -> [PaymentStatus; 3] {
        [Self::Paid, Self::Pending, Self::Overdue]
    }
}

/// Aggregates from `GET /dashboard/stats`. Missing or `null` fields read as zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default, deserialize_with = "loose_count")]
    pub total_students: u64,
    #[serde(default, deserialize_with = "loose_count")]
    pub total_teachers: u64,
    #[serde(default, deserialize_with = "loose_count")]
    pub total_payments: u64,
    #[serde(default, deserialize_with = "loose_amount")]
    pub total_revenue: f64,
    #[serde(default, deserialize_with = "loose_amount")]
    pub pending_amount: f64,
    #[serde(default, deserialize_with = "loose_amount")]
    pub overdue_amount: f64,
}

/// `{ "data": [...] }` wrapper of the collection endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}
