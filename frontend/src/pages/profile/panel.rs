use crate::{
    components::{cards::SectionCard, common::{Button, ButtonVariant}, empty_state::EmptyState},
    pages::profile::{
        components::{edit::ProfileForm, summary::ProfileSummary},
        view_model::ProfileViewModel,
    },
};
use leptos::*;

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let vm = ProfileViewModel::new();
    let editing = vm.editing;
    let profile = vm.profile;

    let action = move || {
        (!editing.get()).then(|| {
            view! {
                <Button
                    variant=ButtonVariant::Primary
                    on_click=Callback::new(move |_| vm.start_editing())
                >
                    "Edit Profile"
                </Button>
            }
        })
    };

    view! {
        <div class="max-w-4xl mx-auto">
            <SectionCard title="My Profile" action=action.into_view()>
                {move || match profile.get() {
                    None => view! { <EmptyState title="No profile loaded." /> }.into_view(),
                    Some(user) if editing.get() => view! { <ProfileForm vm=vm user=user /> }.into_view(),
                    Some(user) => view! { <ProfileSummary user=user /> }.into_view(),
                }}
            </SectionCard>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{employee_user, provide_session, provide_toast_state};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn panel_starts_in_read_mode() {
        let html = render_to_string(move || {
            provide_session(Some(employee_user()));
            provide_toast_state();
            view! { <ProfilePanel /> }
        });
        assert!(html.contains("My Profile"));
        assert!(html.contains("Edit Profile"));
        assert!(html.contains("john.doe@example.com"));
        assert!(!html.contains("Save Changes"));
    }
}
