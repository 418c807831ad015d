use leptos::*;

pub mod components;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::ApplyLeavePanel;

#[component]
pub fn ApplyLeavePage(#[prop(optional)] initial_date: Option<String>) -> impl IntoView {
    view! { <ApplyLeavePanel initial_date=initial_date.unwrap_or_default() /> }
}
