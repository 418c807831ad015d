use leptos::{ev::SubmitEvent, *};

use crate::components::error::FieldError;

fn input_class(has_error: bool) -> String {
    format!(
        "mt-1 w-full p-3 border {} rounded-lg focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:border-transparent text-sm sm:text-base placeholder-gray-400",
        if has_error { "border-red-300" } else { "border-gray-200" }
    )
}

#[component]
pub fn LoginForm(
    #[prop(into)] email: Signal<String>,
    #[prop(into)] password: Signal<String>,
    #[prop(into)] show_password: Signal<bool>,
    #[prop(into)] email_error: Signal<Option<String>>,
    #[prop(into)] password_error: Signal<Option<String>>,
    on_email_input: Callback<String>,
    on_password_input: Callback<String>,
    on_toggle_password: Callback<()>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-gray-100 to-gray-200 px-4 sm:px-6 lg:px-8">
            <div class="bg-white p-6 sm:p-8 rounded-xl shadow-[0_4px_15px_rgba(0,0,0,0.1)] w-full max-w-sm sm:max-w-md">
                <h1 class="text-2xl font-bold text-gray-800 text-center mb-6">"Leave Tracker"</h1>
                <form class="space-y-6" novalidate=true on:submit=move |ev| on_submit.call(ev)>
                    <div>
                        <label for="email" class="block text-sm sm:text-base font-medium text-gray-700">
                            "Email Address"
                        </label>
                        <input
                            id="email"
                            type="email"
                            placeholder="Enter your email"
                            class=move || input_class(email_error.get().is_some())
                            prop:value=move || email.get()
                            on:input=move |ev| on_email_input.call(event_target_value(&ev))
                        />
                        <FieldError message=email_error />
                    </div>
                    <div class="relative">
                        <label for="password" class="block text-sm sm:text-base font-medium text-gray-700">
                            "Password"
                        </label>
                        <input
                            id="password"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Enter your password"
                            class=move || input_class(password_error.get().is_some())
                            prop:value=move || password.get()
                            on:input=move |ev| on_password_input.call(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="absolute right-3 top-10 text-xs text-gray-500 hover:text-gray-700"
                            on:click=move |_| on_toggle_password.call(())
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                        <FieldError message=password_error />
                    </div>
                    <button
                        type="submit"
                        class="w-full bg-gradient-to-r from-indigo-500 to-purple-600 text-white p-3 rounded-lg hover:from-indigo-600 hover:to-purple-700 font-medium text-sm sm:text-base shadow-md"
                    >
                        "Sign In"
                    </button>
                </form>
                <p class="mt-6 text-gray-500 text-sm sm:text-base text-center">
                    "Don't have an account? "
                    <span class="text-indigo-500 font-medium">"Contact HR"</span>
                </p>
            </div>
        </div>
    }
}
