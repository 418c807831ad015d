use crate::{
    data::DataClient,
    pages::colleagues::{
        components::details::{ColleagueDetails, ColleagueHeader},
        utils::lookup,
    },
};
use leptos::*;

#[component]
pub fn ColleagueDetailPanel(#[prop(into)] id: String) -> impl IntoView {
    let data = use_context::<DataClient>().unwrap_or_default();
    match lookup(&data, &id) {
        Ok(user) => view! {
            <div class="bg-white rounded-lg shadow-xl p-3 sm:p-6 border border-gray-200">
                <ColleagueHeader user=user.clone() />
                <hr class="my-3 sm:my-6 border-gray-200" />
                <ColleagueDetails user=user />
            </div>
        }
        .into_view(),
        Err(err) => {
            log::debug!("colleague lookup failed: {err}");
            view! {
                <div class="flex items-center justify-center py-10">
                    <div class="bg-white rounded-lg shadow-xl p-4 w-full max-w-sm text-center border border-gray-200">
                        <h1 class="text-lg sm:text-2xl font-bold text-gray-800 mb-2">"Colleague Not Found"</h1>
                        <p class="text-xs sm:text-sm text-gray-600">{err.to_string()}</p>
                    </div>
                </div>
            }
            .into_view()
        }
    }
}
