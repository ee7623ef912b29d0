mod badges;
pub use badges::{status_badge, PaymentStatusBadge, RoleBadges};

mod feedback;
pub use feedback::{EmptyState, ErrorBanner, Loading, SuccessBanner};

mod person_cell;
pub use person_cell::{Avatar, PersonCell};

mod stat_card;
pub use stat_card::StatCard;
