use crate::{
    components::cards::{SectionCard, StatCard},
    data::DataClient,
    pages::manager::utils::status_counts,
};
use leptos::*;

#[component]
pub fn ManagerDashboardPanel() -> impl IntoView {
    let data = use_context::<DataClient>().unwrap_or_default();
    let counts = status_counts(data.leave_requests());

    view! {
        <SectionCard title="Leave Requests">
            <div class="grid grid-cols-1 sm:grid-cols-3 gap-3">
                {counts
                    .into_iter()
                    .map(|(status, count)| view! { <StatCard label=status.label() value=count /> })
                    .collect_view()}
            </div>
        </SectionCard>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dashboard_counts_each_status() {
        let html = render_to_string(move || view! { <ManagerDashboardPanel /> });
        assert!(html.contains("Pending"));
        assert!(html.contains("Approved"));
        assert!(html.contains("Rejected"));
    }
}
