use crate::{
    components::{cards::SectionCard, empty_state::EmptyState},
    data::DataClient,
    pages::manager::utils::pending_approvals,
    utils::time,
};
use leptos::*;

/// Read-only: approving or rejecting is not offered.
#[component]
pub fn ApprovalsPanel() -> impl IntoView {
    let data = use_context::<DataClient>().unwrap_or_default();
    let pending = pending_approvals(&data);

    view! {
        <SectionCard title="Pending Approvals">
            {if pending.is_empty() {
                view! { <EmptyState title="No pending requests." /> }.into_view()
            } else {
                view! {
                    <ul class="divide-y divide-gray-100">
                        {pending
                            .into_iter()
                            .map(|item| {
                                let request = item.request;
                                view! {
                                    <li class="py-3 flex items-center justify-between text-sm" data-request=request.id.clone()>
                                        <div>
                                            <p class="font-medium text-gray-800">{item.requester}</p>
                                            <p class="text-xs text-gray-500">
                                                {format!(
                                                    "{} leave, {} - {}",
                                                    request.leave_type.label(),
                                                    time::format_long(request.start_date),
                                                    time::format_long(request.end_date),
                                                )}
                                            </p>
                                        </div>
                                        <span class=format!(
                                            "px-2 py-0.5 rounded-full text-xs font-medium {}",
                                            request.status.pill_class(),
                                        )>{request.status.label()}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_view()
            }}
        </SectionCard>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn lists_pending_requests_with_requester() {
        let html = render_to_string(move || view! { <ApprovalsPanel /> });
        assert_eq!(html.matches("data-request=").count(), 1);
        assert!(html.contains("John Doe"));
        assert!(html.contains("Annual leave, May 1, 2025 - May 5, 2025"));
    }
}
