use leptos::*;

pub mod utils;

mod accounts;
mod dashboard;

pub use accounts::HrAccountsPanel;
pub use dashboard::HrDashboardPanel;

#[component]
pub fn HrDashboardPage() -> impl IntoView {
    view! { <HrDashboardPanel /> }
}

#[component]
pub fn HrAccountsPage() -> impl IntoView {
    view! { <HrAccountsPanel /> }
}
