use crate::{
    components::{
        cards::{SectionCard, StatCard},
        empty_state::EmptyState,
    },
    data::DataClient,
    pages::hr::utils::{celebrations, headcount_by_role},
    utils::time,
};
use leptos::*;

#[component]
pub fn HrDashboardPanel() -> impl IntoView {
    let data = use_context::<DataClient>().unwrap_or_default();
    let today = time::today();
    let counts = headcount_by_role(data.users());
    let upcoming = celebrations(data.notifications());

    view! {
        <div class="space-y-6">
            <SectionCard title="Headcount">
                <div class="grid grid-cols-2 lg:grid-cols-4 gap-3">
                    {counts
                        .into_iter()
                        .map(|(role, count)| view! { <StatCard label=role.label() value=count /> })
                        .collect_view()}
                </div>
            </SectionCard>
            <SectionCard title="Celebrations">
                {if upcoming.is_empty() {
                    view! { <EmptyState title="No celebrations scheduled." /> }.into_view()
                } else {
                    view! {
                        <ul class="divide-y divide-gray-100">
                            {upcoming
                                .into_iter()
                                .map(|note| {
                                    view! {
                                        <li class="py-2 flex justify-between text-sm">
                                            <span class="text-gray-800">{note.message}</span>
                                            <span class="text-gray-500">{time::relative_day_label(note.date, today)}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_view()
                }}
            </SectionCard>
        </div>
    }
}
