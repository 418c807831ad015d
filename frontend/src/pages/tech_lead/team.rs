use crate::{
    components::cards::{Card, SectionCard},
    data::DataClient,
    pages::tech_lead::utils::{team_members, TeamLeave},
};
use leptos::*;

#[component]
pub fn TeamPanel() -> impl IntoView {
    let data = use_context::<DataClient>().unwrap_or_default();
    let members = team_members(&data);

    view! {
        <SectionCard title="My Team">
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
                {members
                    .into_iter()
                    .map(|member| {
                        let leave: Vec<String> = data
                            .schedules_for(&member.id)
                            .into_iter()
                            .map(|schedule| {
                                TeamLeave { member: member.name.clone(), schedule }.range_label()
                            })
                            .collect();
                        view! {
                            <Card>
                                <div data-member=member.id.clone()>
                                    <p class="font-semibold text-gray-800">{member.name.clone()}</p>
                                    <p class="text-xs text-gray-500 mb-2">{member.display_position().to_string()}</p>
                                    {if leave.is_empty() {
                                        view! { <p class="text-xs text-gray-400">"No leave scheduled"</p> }.into_view()
                                    } else {
                                        leave
                                            .into_iter()
                                            .map(|range| view! { <p class="text-xs text-indigo-600">{range}</p> })
                                            .collect_view()
                                    }}
                                </div>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </SectionCard>
    }
}
