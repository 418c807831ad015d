use leptos::*;

pub mod components;
pub mod utils;

mod detail;
mod list;

pub use detail::ColleagueDetailPanel;
pub use list::ColleaguesPanel;

#[component]
pub fn ColleaguesPage() -> impl IntoView {
    view! { <ColleaguesPanel /> }
}

#[component]
pub fn ColleagueDetailPage(#[prop(into)] id: String) -> impl IntoView {
    view! { <ColleagueDetailPanel id=id /> }
}
