use leptos::*;

pub mod utils;

mod approvals;
mod dashboard;

pub use approvals::ApprovalsPanel;
pub use dashboard::ManagerDashboardPanel;

#[component]
pub fn ManagerDashboardPage() -> impl IntoView {
    view! { <ManagerDashboardPanel /> }
}

#[component]
pub fn ApprovalsPage() -> impl IntoView {
    view! { <ApprovalsPanel /> }
}
