use crate::data::LeaveRequest;
use leptos::*;

#[component]
pub fn LeaveRequestTable(requests: Vec<LeaveRequest>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto max-h-[200px] overflow-y-auto">
            <table class="w-full text-left text-xs sm:text-sm">
                <thead class="bg-white sticky top-0 border-b border-gray-200">
                    <tr>
                        <th class="py-2 px-2 sm:px-4">"Type"</th>
                        <th class="py-2 px-2 sm:px-4">"Start Date"</th>
                        <th class="py-2 px-2 sm:px-4">"End Date"</th>
                        <th class="py-2 px-2 sm:px-4">"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {requests
                        .into_iter()
                        .map(|request| {
                            view! {
                                <tr class="border-b border-gray-100 even:bg-gray-50 hover:bg-indigo-50">
                                    <td class="py-2 px-2 sm:px-4">{request.leave_type.label()}</td>
                                    <td class="py-2 px-2 sm:px-4">{request.start_date.to_string()}</td>
                                    <td class="py-2 px-2 sm:px-4">{request.end_date.to_string()}</td>
                                    <td class="py-2 px-2 sm:px-4">
                                        <span class=format!(
                                            "inline-block px-2 py-1 rounded-full text-xs font-medium {}",
                                            request.status.pill_class(),
                                        )>
                                            {request.status.label()}
                                        </span>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
