use crate::{components::error::FieldError, data::fixtures::MONTHS, utils::time};
use chrono::Datelike;
use leptos::*;
use wasm_bindgen::JsCast;

const INPUT_CLASS: &str = "w-full px-3 py-2 border rounded-lg text-sm text-gray-800 focus:outline-none focus:ring-2 focus:ring-indigo-500";

fn input_class(has_error: bool) -> String {
    format!(
        "{INPUT_CLASS} {}",
        if has_error {
            "border-red-400"
        } else {
            "border-gray-300"
        }
    )
}

#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] error: Signal<Option<String>>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1">
            <label for=id.clone() class="text-sm font-medium text-gray-700">{label}</label>
            <input
                id=id
                type=input_type
                placeholder=placeholder
                class=move || input_class(error.get().is_some())
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
            <FieldError message=error />
        </div>
    }
}

/// Date input showing a readable label ("Apr 8, 2025 (Tue)") over the native
/// picker, which holds the `YYYY-MM-DD` value.
#[component]
pub fn DatePicker(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();

    let on_click = move |_| {
        if let Some(input) = input_ref.get() {
            let _ = js_sys::Reflect::get(&input, &"showPicker".into()).map(|f| {
                if f.is_function() {
                    let _ = js_sys::Reflect::apply(
                        &f.unchecked_into::<js_sys::Function>(),
                        &input,
                        &js_sys::Array::new(),
                    );
                }
            });
            let _ = input.focus();
        }
    };

    view! {
        <div class="flex flex-col gap-1">
            <label for=id.clone() class="text-sm font-medium text-gray-700">{label}</label>
            <div
                class=move || format!("relative cursor-pointer {}", input_class(error.get().is_some()))
                on:click=on_click
            >
                <span class=move || {
                    if value.get().is_empty() { "text-gray-400" } else { "text-gray-800" }
                }>
                    {move || date_display(&value.get())}
                </span>
                <input
                    id=id
                    type="date"
                    node_ref=input_ref
                    class="absolute inset-0 w-full h-full opacity-0"
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.call(event_target_value(&ev))
                />
            </div>
            <FieldError message=error />
        </div>
    }
}

pub fn date_display(raw: &str) -> String {
    if raw.is_empty() {
        return "Select a date".into();
    }
    match time::parse_input_date(raw) {
        Some(date) => format!("{} ({})", time::format_long(date), date.format("%a")),
        None => raw.to_string(),
    }
}

#[component]
pub fn SelectField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    options: Vec<(String, String)>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] error: Signal<Option<String>>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1">
            <label for=id.clone() class="text-sm font-medium text-gray-700">{label}</label>
            <select
                id=id
                class=move || input_class(error.get().is_some())
                prop:value=move || value.get()
                on:change=move |ev| on_change.call(event_target_value(&ev))
            >
                {placeholder.map(|text| view! { <option value="">{text}</option> })}
                {options
                    .into_iter()
                    .map(|(option_value, text)| {
                        let selected_value = option_value.clone();
                        view! {
                            <option
                                value=option_value
                                selected=move || value.get() == selected_value
                            >
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <FieldError message=error />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] error: Signal<Option<String>>,
    #[prop(default = 4)] rows: u32,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1">
            <label for=id.clone() class="text-sm font-medium text-gray-700">{label}</label>
            <textarea
                id=id
                rows=rows
                class=move || input_class(error.get().is_some())
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            ></textarea>
            <FieldError message=error />
        </div>
    }
}

/// Month picker over the twelve calendar months, values 1..=12.
#[component]
pub fn MonthSelect(selected: RwSignal<u32>) -> impl IntoView {
    let on_change = move |ev| {
        if let Ok(month) = event_target_value(&ev).parse::<u32>() {
            if (1..=12).contains(&month) {
                selected.set(month);
            }
        }
    };
    view! {
        <select
            class="px-3 py-1.5 border border-gray-300 rounded-lg text-xs sm:text-sm text-gray-700 bg-white focus:outline-none focus:ring-2 focus:ring-indigo-500"
            aria-label="Select month"
            prop:value=move || selected.get().to_string()
            on:change=on_change
        >
            {MONTHS
                .iter()
                .enumerate()
                .map(|(idx, name)| {
                    let month = idx as u32 + 1;
                    view! {
                        <option value=month.to_string() selected=move || selected.get() == month>
                            {*name}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

pub fn current_month() -> u32 {
    time::today().month()
}
