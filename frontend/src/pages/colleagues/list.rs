use crate::{
    components::cards::Card,
    data::DataClient,
    pages::colleagues::{
        components::details::{ColleagueDetails, ColleagueHeader},
        utils::ExpandedCards,
    },
};
use leptos::*;

#[component]
pub fn ColleaguesPanel() -> impl IntoView {
    let data = use_context::<DataClient>().unwrap_or_default();
    let expanded = create_rw_signal(ExpandedCards::default());

    view! {
        <div class="max-w-7xl mx-auto grid grid-cols-1 sm:grid-cols-2 gap-3 sm:gap-4">
            {data
                .users()
                .iter()
                .cloned()
                .map(|user| {
                    let id = store_value(user.id.clone());
                    let is_expanded = move || expanded.with(|cards| cards.is_expanded(&id.get_value()));
                    view! {
                        <Card class="hover:shadow-lg">
                            <div data-colleague=user.id.clone()>
                                <ColleagueHeader user=user.clone() />
                                <hr class="my-3 border-gray-100" />
                                <div class=move || if is_expanded() { "" } else { "hidden sm:block" }>
                                    <ColleagueDetails user=user />
                                </div>
                                <button
                                    type="button"
                                    class="sm:hidden mt-3 w-full bg-indigo-600 text-white py-1.5 rounded-lg text-xs hover:bg-indigo-700"
                                    on:click=move |_| expanded.update(|cards| cards.toggle(&id.get_value()))
                                >
                                    {move || if is_expanded() { "Hide Details" } else { "Show Details" }}
                                </button>
                            </div>
                        </Card>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn every_user_gets_a_collapsed_card() {
        let html = render_to_string(move || view! { <ColleaguesPanel /> });
        assert_eq!(html.matches("data-colleague=").count(), 5);
        assert!(html.contains("Carol Brown"));
        assert!(html.contains("Show Details"));
        assert!(!html.contains("Hide Details"));
    }
}
