use crate::{components::cards::SectionCard, data::DataClient};
use leptos::*;

#[component]
pub fn HrAccountsPanel() -> impl IntoView {
    let data = use_context::<DataClient>().unwrap_or_default();
    let users = data.users().to_vec();

    view! {
        <SectionCard title="Accounts">
            <div class="overflow-x-auto">
                <table class="min-w-full text-sm">
                    <thead class="text-left text-gray-500">
                        <tr>
                            <th class="py-2 pr-4">"Name"</th>
                            <th class="py-2 pr-4">"Email"</th>
                            <th class="py-2 pr-4">"Role"</th>
                            <th class="py-2">"Position"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        {users
                            .into_iter()
                            .map(|user| {
                                view! {
                                    <tr data-account=user.id.clone()>
                                        <td class="py-2 pr-4 font-medium text-gray-800">{user.name.clone()}</td>
                                        <td class="py-2 pr-4 text-gray-600">{user.email.clone()}</td>
                                        <td class="py-2 pr-4 text-gray-600">{user.role.label()}</td>
                                        <td class="py-2 text-gray-600">{user.display_position().to_string()}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </SectionCard>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn lists_every_account() {
        let html = render_to_string(move || view! { <HrAccountsPanel /> });
        assert_eq!(html.matches("data-account=").count(), 5);
        assert!(html.contains("alice.jones@example.com"));
        assert!(html.contains("HR Manager"));
    }
}
