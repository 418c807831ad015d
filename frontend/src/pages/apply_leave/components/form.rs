use crate::{
    components::{
        common::{Button, ButtonVariant},
        forms::{DatePicker, SelectField, TextAreaField},
    },
    pages::apply_leave::{
        utils::{type_options, FIELD_END, FIELD_REASON, FIELD_START, FIELD_TYPE},
        view_model::ApplyLeaveViewModel,
    },
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LeaveApplicationForm(vm: ApplyLeaveViewModel) -> impl IntoView {
    let form = vm.form;
    let setter = {
        let vm = vm.clone();
        move |field: &'static str| {
            let vm = vm.clone();
            Callback::new(move |value: String| vm.set_field(field, value))
        }
    };
    let on_type = setter(FIELD_TYPE);
    let on_start = setter(FIELD_START);
    let on_end = setter(FIELD_END);
    let on_reason = setter(FIELD_REASON);
    let on_submit = {
        let vm = vm.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            vm.submit();
        }
    };

    view! {
        <form class="space-y-4" novalidate=true on:submit=on_submit>
            <SelectField
                id="leave-type"
                label="Leave Type"
                options=type_options()
                value=form.leave_type
                on_change=on_type
                error=vm.error_for(FIELD_TYPE)
                placeholder="Select leave type".to_string()
            />
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                <DatePicker
                    id="start-date"
                    label="Start Date"
                    value=form.start_date
                    on_input=on_start
                    error=vm.error_for(FIELD_START)
                />
                <DatePicker
                    id="end-date"
                    label="End Date"
                    value=form.end_date
                    on_input=on_end
                    error=vm.error_for(FIELD_END)
                />
            </div>
            <TextAreaField
                id="reason"
                label="Reason"
                value=form.reason
                on_input=on_reason
                error=vm.error_for(FIELD_REASON)
            />
            <Button variant=ButtonVariant::Primary button_type="submit">
                "Submit Application"
            </Button>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{employee_user, provide_recording_navigator, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn form_lists_leave_types_and_prefilled_date() {
        let html = render_to_string(move || {
            provide_session(Some(employee_user()));
            provide_recording_navigator();
            let vm = ApplyLeaveViewModel::new(Some("2025-04-08".into()));
            view! { <LeaveApplicationForm vm=vm /> }
        });
        assert!(html.contains("Maternity/Paternity"));
        assert!(html.contains("Apr 8, 2025 (Tue)"));
        assert!(html.contains("Submit Application"));
    }
}
