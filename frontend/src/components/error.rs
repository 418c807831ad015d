use crate::data::AppError;
use leptos::*;

#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <p class="text-red-500 text-xs mt-1">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<AppError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.to_string()).unwrap_or_default()}</div>
                {move || {
                    error
                        .get()
                        .map(|e| view! { <div class="text-xs opacity-75">{"Code: "}{e.code()}</div> })
                }}
            </div>
        </Show>
    }
}
