use crate::{components::empty_state::EmptyState, data::LeaveRequest, utils::time};
use leptos::*;

#[component]
pub fn SubmittedList(#[prop(into)] requests: Signal<Vec<LeaveRequest>>) -> impl IntoView {
    view! {
        <Show
            when=move || !requests.with(Vec::is_empty)
            fallback=|| view! { <EmptyState title="No applications submitted yet." /> }
        >
            <ul class="divide-y divide-gray-100">
                <For
                    each=move || requests.get()
                    key=|request| request.id.clone()
                    children=|request| {
                        view! {
                            <li class="py-3 flex items-center justify-between text-sm">
                                <div>
                                    <p class="font-medium text-gray-800">{request.leave_type.form_label()}</p>
                                    <p class="text-gray-500 text-xs">
                                        {format!(
                                            "{} - {}",
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
                    }
                />
            </ul>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::data::{LeaveStatus, LeaveType};
    use crate::test_support::ssr::render_to_string;
    use chrono::NaiveDate;

    #[test]
    fn lists_submitted_requests_with_status() {
        let html = render_to_string(move || {
            let day = NaiveDate::from_ymd_opt(2025, 4, 8).unwrap();
            let requests = create_rw_signal(vec![LeaveRequest {
                id: "local-1".into(),
                user_id: "1".into(),
                leave_type: LeaveType::Maternity,
                start_date: day,
                end_date: day,
                status: LeaveStatus::Pending,
                reason: Some("Newborn".into()),
            }]);
            view! { <SubmittedList requests=requests /> }
        });
        assert!(html.contains("Maternity&#x2F;Paternity"));
        assert!(html.contains("Apr 8, 2025 - Apr 8, 2025"));
        assert!(html.contains("Pending"));
    }

    #[test]
    fn empty_list_says_so() {
        let html = render_to_string(move || {
            let requests = create_rw_signal(Vec::<LeaveRequest>::new());
            view! { <SubmittedList requests=requests /> }
        });
        assert!(html.contains("No applications submitted yet."));
    }
}
