pub mod config;
pub mod confirm;
pub mod filters;
pub mod format;
pub mod ledger;
pub mod loose;
pub mod models;

pub use config::AcademyConfig;
pub use confirm::{ConfirmStep, DeleteConfirm};
pub use filters::StatusFilter;
pub use ledger::{PaymentRow, PaymentTotals, StudentBalance, UNKNOWN_STUDENT};
pub use models::{DashboardStats, Envelope, NewPayment, NewPerson, Payment, PaymentStatus, Person};
