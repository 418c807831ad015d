use crate::pages::dashboard::utils::{activity_icon, ActivityItem};
use leptos::*;

#[component]
pub fn RecentActivity(#[prop(into)] items: Signal<Vec<ActivityItem>>) -> impl IntoView {
    view! {
        <div>
            <h2 class="text-sm sm:text-base font-semibold text-gray-800 mb-4">"Recent Activity"</h2>
            <div class="max-h-[200px] overflow-y-auto space-y-3">
                {move || {
                    let items = items.get();
                    if items.is_empty() {
                        return view! {
                            <p class="text-xs sm:text-sm text-gray-600 text-center">
                                "No recent activities available"
                            </p>
                        }
                        .into_view();
                    }
                    items
                        .into_iter()
                        .map(|item| {
                            let is_leave = item.is_leave();
                            view! {
                                <div class="bg-white rounded-lg p-3 shadow-sm flex items-start gap-3">
                                    <span aria-hidden="true">{activity_icon(item.kind)}</span>
                                    <div class="flex-1">
                                        <div class="flex items-center justify-between">
                                            <p class="text-xs sm:text-sm font-semibold text-gray-800">{item.title.clone()}</p>
                                            {is_leave.then(|| view! {
                                                <span class="text-xs px-2 py-1 bg-red-200 text-red-700 rounded-full">"Leave"</span>
                                            })}
                                        </div>
                                        <p class="text-xs text-gray-600 mt-1">{item.date_label()}</p>
                                        <p class="text-xs sm:text-sm text-gray-700">{item.description.clone()}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
