use crate::{
    components::{
        common::{Button, ButtonVariant},
        forms::{DatePicker, TextField},
    },
    data::User,
    pages::profile::{
        utils::{
            FIELD_BIRTHDAY, FIELD_EDUCATION, FIELD_INSTAGRAM, FIELD_LINKEDIN, FIELD_LOCATION,
            FIELD_MOBILE, FIELD_TECH_STACK,
        },
        view_model::ProfileViewModel,
    },
};
use leptos::{ev::SubmitEvent, *};

fn read_only(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <p class="text-sm font-semibold text-gray-800">{label}</p>
            <p class="text-sm text-gray-500 bg-gray-50 px-3 py-2 rounded-lg">{value}</p>
        </div>
    }
}

#[component]
pub fn ProfileForm(vm: ProfileViewModel, user: User) -> impl IntoView {
    let on = move |field: &'static str| Callback::new(move |value: String| vm.set_field(field, value));
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.save();
    };
    let text = move |field: &'static str, label: &'static str, placeholder: &'static str| {
        view! {
            <TextField
                id=field
                label=label
                value=vm.field_value(field)
                on_input=on(field)
                error=vm.error_for(field)
                placeholder=placeholder
            />
        }
    };

    view! {
        <form class="grid grid-cols-1 lg:grid-cols-2 gap-4 sm:gap-6" novalidate=true on:submit=on_submit>
            {read_only("Name", user.name.clone())}
            {read_only("Email", user.email.clone())}
            {read_only("Role", user.display_position().to_string())}
            {read_only(
                "Join Date",
                user.join_date.map(crate::utils::time::format_long).unwrap_or_default(),
            )}
            <DatePicker
                id=FIELD_BIRTHDAY
                label="Birthday"
                value=vm.field_value(FIELD_BIRTHDAY)
                on_input=on(FIELD_BIRTHDAY)
                error=vm.error_for(FIELD_BIRTHDAY)
            />
            {text(FIELD_MOBILE, "Mobile Number", "+1234567890")}
            {text(FIELD_TECH_STACK, "Tech Stack (comma separated)", "Rust, Leptos")}
            {text(FIELD_EDUCATION, "Education", "")}
            {text(FIELD_LOCATION, "Location", "")}
            {text(FIELD_LINKEDIN, "LinkedIn", "https://www.linkedin.com/in/username")}
            {text(FIELD_INSTAGRAM, "Instagram", "https://www.instagram.com/username")}
            <div class="col-span-1 lg:col-span-2 flex justify-center gap-4">
                <Button button_type="submit">"Save Changes"</Button>
                <Button
                    variant=ButtonVariant::Secondary
                    on_click=Callback::new(move |_| vm.cancel())
                >
                    "Cancel"
                </Button>
            </div>
        </form>
    }
}
