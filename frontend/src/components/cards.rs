use leptos::*;

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!("bg-white rounded-xl p-4 shadow-sm border border-gray-100 transition-all duration-300 {class}")>
            {children()}
        </div>
    }
}

/// A titled dashboard panel. `action` renders to the right of the title.
#[component]
pub fn SectionCard(
    #[prop(into)] title: String,
    #[prop(optional, into)] class: String,
    #[prop(optional)] action: Option<View>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class=format!("bg-white/20 backdrop-blur-[16px] rounded-xl p-4 sm:p-5 shadow-md transition-all duration-300 {class}")>
            <div class="flex items-center justify-between mb-4 w-full">
                <h2 class="text-lg sm:text-xl font-bold text-gray-800 relative">
                    {title}
                    <span class="absolute -bottom-1 left-0 w-12 h-1 bg-gradient-to-r from-indigo-500 to-purple-600 rounded-full"></span>
                </h2>
                {action}
            </div>
            {children()}
        </section>
    }
}

/// A single headline number with its caption.
#[component]
pub fn StatCard(#[prop(into)] label: String, value: usize) -> impl IntoView {
    view! {
        <Card>
            <p class="text-xs sm:text-sm text-gray-500">{label}</p>
            <p class="text-2xl font-bold text-gray-800">{value}</p>
        </Card>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn section_card_renders_title_action_and_body() {
        let html = render_to_string(move || {
            view! {
                <SectionCard
                    title="Our Team"
                    action=view! { <button>"pick"</button> }.into_view()
                >
                    <p>"body"</p>
                </SectionCard>
            }
        });
        assert!(html.contains("Our Team"));
        assert!(html.contains("pick"));
        assert!(html.contains("body"));
    }

    #[test]
    fn card_wraps_children() {
        let html = render_to_string(move || view! { <Card class="extra"><span>"inside"</span></Card> });
        assert!(html.contains("inside"));
        assert!(html.contains("extra"));
    }

    #[test]
    fn stat_card_shows_label_and_value() {
        let html = render_to_string(move || view! { <StatCard label="Pending" value=42 /> });
        assert!(html.contains("Pending"));
        assert!(html.contains("42"));
    }
}
