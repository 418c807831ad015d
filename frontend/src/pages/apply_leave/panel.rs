use crate::{
    components::cards::SectionCard,
    pages::apply_leave::{
        components::{form::LeaveApplicationForm, submitted::SubmittedList},
        view_model::ApplyLeaveViewModel,
    },
};
use leptos::*;

#[component]
pub fn ApplyLeavePanel(#[prop(optional)] initial_date: Option<String>) -> impl IntoView {
    let vm = ApplyLeaveViewModel::new(initial_date);
    let submitted = vm.submitted;

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            <SectionCard title="Apply for Leave">
                <LeaveApplicationForm vm=vm />
            </SectionCard>
            <SectionCard title="Submitted this session">
                <SubmittedList requests=submitted />
            </SectionCard>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{employee_user, provide_recording_navigator, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn panel_renders_form_and_session_list() {
        let html = render_to_string(move || {
            provide_session(Some(employee_user()));
            provide_recording_navigator();
            view! { <ApplyLeavePanel /> }
        });
        assert!(html.contains("Apply for Leave"));
        assert!(html.contains("Submitted this session"));
        assert!(html.contains("Select a date"));
    }
}
