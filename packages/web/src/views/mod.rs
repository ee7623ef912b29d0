mod dashboard;
pub use dashboard::{Dashboard, DashboardAlias};

mod student_list;
pub use student_list::StudentList;

mod student_form;
pub use student_form::{AddStudent, EditStudent};

mod student_profile;
pub use student_profile::StudentProfile;

mod payments_list;
pub use payments_list::PaymentsList;

mod record_payment;
pub use record_payment::RecordPayment;

mod not_found;
pub use not_found::NotFound;

/// Shown when a page's primary fetch fails.
pub(crate) const CONNECT_FAILED: &str =
    "Failed to connect to the server. Make sure the backend is running.";
