use leptos::*;

pub mod utils;

mod panel;

pub use panel::LeavePolicyPanel;

#[component]
pub fn LeavePolicyPage() -> impl IntoView {
    view! { <LeavePolicyPanel /> }
}
