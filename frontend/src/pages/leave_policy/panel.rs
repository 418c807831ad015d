use crate::{
    components::{cards::SectionCard, error::InlineErrorMessage, layout::LoadingSpinner},
    config,
    pages::leave_policy::utils::{
        check_document, document_url, is_mobile_user_agent, policy_view, user_agent, PolicyView,
        DOWNLOAD_NAME, MOBILE_MESSAGE,
    },
};
use leptos::*;

const DOWNLOAD_CLASS: &str = "mt-2 bg-gradient-to-r from-indigo-500 to-purple-600 text-white px-4 py-1.5 rounded-lg text-sm sm:text-base font-semibold shadow-sm hover:shadow-lg";

fn download_link(href: String) -> impl IntoView {
    view! {
        <a href=href download=DOWNLOAD_NAME target="_blank" class=DOWNLOAD_CLASS>
            "Download PDF"
        </a>
    }
}

pub fn render_policy(view_state: PolicyView, href: String) -> View {
    match view_state {
        PolicyView::Checking => view! { <LoadingSpinner label="Loading policy document..." /> }.into_view(),
        PolicyView::Unavailable(err) => view! {
            <div class="flex flex-col items-center justify-center h-full text-gray-700 text-sm sm:text-base">
                <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) />
                {download_link(href)}
            </div>
        }
        .into_view(),
        PolicyView::MobileDownload => view! {
            <div class="flex flex-col items-center justify-center h-full text-gray-700 text-sm sm:text-base">
                <p>{MOBILE_MESSAGE}</p>
                {download_link(href)}
            </div>
        }
        .into_view(),
        PolicyView::Embedded => view! {
            <div class="max-h-[50vh] sm:max-h-[60vh] lg:max-h-[70vh] flex-1 overflow-auto">
                <iframe src=href.clone() title="Leave Policy PDF" class="w-full h-[60vh] border-none"></iframe>
            </div>
            <div class="flex items-center justify-center mt-2">{download_link(href)}</div>
        }
        .into_view(),
    }
}

#[component]
pub fn LeavePolicyPanel() -> impl IntoView {
    let href = document_url(&config::current().policy_document_url);
    let mobile = is_mobile_user_agent(&user_agent());
    let source = href.clone();
    let check = create_local_resource(move || source.clone(), check_document);

    view! {
        <div class="max-w-6xl mx-auto">
            <SectionCard title="Leave Policy">
                <div class="bg-white/10 rounded-lg p-3 sm:p-4 flex flex-col min-h-[40vh]">
                    {move || render_policy(policy_view(check.get(), mobile), href.clone())}
                </div>
            </SectionCard>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::data::AppError;
    use crate::pages::leave_policy::utils::LOAD_FAILED_MESSAGE;
    use crate::test_support::ssr::render_to_string;

    const HREF: &str = "/assets/leave-policy.pdf";

    #[test]
    fn failure_offers_a_download_link() {
        let html = render_to_string(move || {
            render_policy(
                PolicyView::Unavailable(AppError::asset_unavailable(LOAD_FAILED_MESSAGE)),
                HREF.into(),
            )
        });
        assert!(html.contains(LOAD_FAILED_MESSAGE));
        assert!(html.contains("Code: ASSET_UNAVAILABLE"));
        assert!(html.contains("Download PDF"));
        assert!(!html.contains("<iframe"));
    }

    #[test]
    fn mobile_gets_no_inline_viewer() {
        let html = render_to_string(move || render_policy(PolicyView::MobileDownload, HREF.into()));
        assert!(html.contains("Inline PDF viewing is not supported on your device."));
        assert!(!html.contains("<iframe"));
    }

    #[test]
    fn desktop_embeds_the_document() {
        let html = render_to_string(move || render_policy(PolicyView::Embedded, HREF.into()));
        assert!(html.contains("<iframe"));
        assert!(html.contains(HREF));
    }

    #[test]
    fn panel_shows_loading_until_checked() {
        let html = render_to_string(move || view! { <LeavePolicyPanel /> });
        assert!(html.contains("Leave Policy"));
        assert!(html.contains("Loading policy document..."));
    }
}
