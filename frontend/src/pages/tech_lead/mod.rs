use leptos::*;

pub mod utils;

mod dashboard;
mod team;

pub use dashboard::TechLeadDashboardPanel;
pub use team::TeamPanel;

#[component]
pub fn TechLeadDashboardPage() -> impl IntoView {
    view! { <TechLeadDashboardPanel /> }
}

#[component]
pub fn TeamPage() -> impl IntoView {
    view! { <TeamPanel /> }
}
