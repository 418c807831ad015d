use crate::{
    components::{
        cards::{SectionCard, StatCard},
        empty_state::EmptyState,
    },
    config,
    data::{fixtures::MONTHS, DataClient},
    pages::tech_lead::utils::{leave_in_month, off_on, team_members},
    utils::time,
};
use leptos::*;

#[component]
pub fn TechLeadDashboardPanel() -> impl IntoView {
    let data = use_context::<DataClient>().unwrap_or_default();
    let cfg = config::current();
    let team_size = team_members(&data).len();
    let off_today = off_on(&data, time::today());
    let leave = leave_in_month(&data, cfg.calendar_year, cfg.calendar_month);
    let month_name = MONTHS
        .get(cfg.calendar_month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or_default();

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
                <StatCard label="Team Size" value=team_size />
                <StatCard label="Off Today" value=off_today />
            </div>
            <SectionCard title=format!("Scheduled Leave in {month_name} {}", cfg.calendar_year)>
                {if leave.is_empty() {
                    view! { <EmptyState title="Nobody is scheduled off." /> }.into_view()
                } else {
                    view! {
                        <ul class="divide-y divide-gray-100">
                            {leave
                                .into_iter()
                                .map(|entry| {
                                    let range = entry.range_label();
                                    view! {
                                        <li class="py-2 flex justify-between text-sm">
                                            <span class="font-medium text-gray-800">{entry.member}</span>
                                            <span class="text-gray-500">{range}</span>
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
