pub mod apply_leave;
pub mod colleagues;
pub mod dashboard;
pub mod hr;
pub mod leave_policy;
pub mod login;
pub mod manager;
pub mod not_found;
pub mod profile;
pub mod tech_lead;

pub use apply_leave::ApplyLeavePage;
pub use colleagues::{ColleagueDetailPage, ColleaguesPage};
pub use dashboard::DashboardPage;
pub use hr::{HrAccountsPage, HrDashboardPage};
pub use leave_policy::LeavePolicyPage;
pub use login::LoginPage;
pub use manager::{ApprovalsPage, ManagerDashboardPage};
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use tech_lead::{TeamPage, TechLeadDashboardPage};
