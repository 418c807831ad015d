use crate::{
    components::toast::ToastHost,
    pages::login::{components::form::LoginForm, view_model::use_login_view_model},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let form = vm.form;

    let on_submit = {
        let vm = vm.clone();
        Callback::new(move |ev: SubmitEvent| {
            ev.prevent_default();
            let _ = vm.submit();
        })
    };
    let on_email_input = {
        let vm = vm.clone();
        Callback::new(move |value: String| vm.set_email(value))
    };
    let on_password_input = {
        let vm = vm.clone();
        Callback::new(move |value: String| vm.set_password(value))
    };
    let on_toggle_password = Callback::new(move |_| vm.toggle_password());

    view! {
        <ToastHost />
        <LoginForm
            email=form.email
            password=form.password
            show_password=form.show_password
            email_error=form.email_error
            password_error=form.password_error
            on_email_input=on_email_input
            on_password_input=on_password_input
            on_toggle_password=on_toggle_password
            on_submit=on_submit
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{
        provide_recording_navigator, provide_session, provide_toast_state,
    };
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_panel_renders_empty_form() {
        let html = render_to_string(move || {
            provide_session(None);
            provide_toast_state();
            provide_recording_navigator();
            view! { <LoginPanel /> }
        });
        assert!(html.contains("Enter your email"));
        assert!(!html.contains("text-red-500"));
    }
}
