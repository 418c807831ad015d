use crate::{data::User, pages::profile::utils::or_not_set, utils::time};
use leptos::*;

fn field(label: &'static str, value: String, wide: bool) -> impl IntoView {
    view! {
        <div class=if wide { "col-span-1 lg:col-span-2" } else { "" }>
            <p class="text-sm sm:text-base font-semibold text-gray-800">{label}</p>
            <p class="text-sm sm:text-base text-gray-600">{value}</p>
        </div>
    }
}

fn link_field(label: &'static str, href: Option<String>) -> impl IntoView {
    view! {
        <div class="col-span-1 lg:col-span-2">
            <p class="text-sm sm:text-base font-semibold text-gray-800">{label}</p>
            <p class="text-sm sm:text-base text-gray-600">
                {match href.filter(|h| !h.is_empty()) {
                    Some(href) => view! {
                        <a href=href.clone() target="_blank" rel="noopener noreferrer" class="text-indigo-600 hover:underline">
                            {href}
                        </a>
                    }
                    .into_view(),
                    None => or_not_set(None).into_view(),
                }}
            </p>
        </div>
    }
}

#[component]
pub fn ProfileSummary(user: User) -> impl IntoView {
    let tech = user.tech_stack.join(", ");
    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-4 sm:gap-6">
            {field("Name", or_not_set(Some(&user.name)), false)}
            {field("Email", or_not_set(Some(&user.email)), false)}
            {field("Role", user.display_position().to_string(), false)}
            {field("Join Date", user.join_date.map(time::format_long).unwrap_or_else(|| or_not_set(None)), false)}
            {field("Birthday", user.birthday.map(time::format_long).unwrap_or_else(|| or_not_set(None)), false)}
            {field("Mobile Number", or_not_set(user.mobile.as_deref()), false)}
            {field("Tech Stack", or_not_set(Some(&tech)), true)}
            {field("Education", or_not_set(user.education.as_deref()), true)}
            {field("Location", or_not_set(user.location.as_deref()), true)}
            {link_field("LinkedIn", user.social_links.linkedin.clone())}
            {link_field("Instagram", user.social_links.instagram.clone())}
        </div>
    }
}
