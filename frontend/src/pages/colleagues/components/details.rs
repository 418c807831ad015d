use crate::{
    data::User,
    pages::colleagues::utils::{detail_rows, role_badge_class, MISSING},
};
use leptos::*;

#[component]
pub fn ColleagueHeader(user: User) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 sm:gap-4">
            <div class="w-14 h-14 bg-gray-100 rounded-full flex items-center justify-center shrink-0 shadow-sm">
                <span class="text-lg font-medium text-gray-700">{user.initials()}</span>
            </div>
            <div class="flex-1 min-w-0">
                <p class="text-lg sm:text-xl font-bold text-gray-800 truncate">{user.name.clone()}</p>
                <p class="text-xs sm:text-sm text-gray-600 truncate">{user.email.clone()}</p>
            </div>
            <span class=format!(
                "shrink-0 text-[10px] sm:text-xs font-semibold px-2 py-1 rounded-md shadow-sm {}",
                role_badge_class(&user.position),
            )>{user.display_position().to_string()}</span>
        </div>
    }
}

#[component]
pub fn ColleagueDetails(user: User) -> impl IntoView {
    let links = [
        ("LinkedIn", user.social_links.linkedin.clone()),
        ("Instagram", user.social_links.instagram.clone()),
    ];
    let tech_stack = user.tech_stack.clone();

    view! {
        <div class="space-y-3 text-xs sm:text-sm text-gray-600">
            {detail_rows(&user)
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="flex items-center gap-3">
                            <span class="font-semibold">{format!("{label}:")}</span>
                            <span>{value}</span>
                        </div>
                    }
                })
                .collect_view()}
            <div class="flex gap-4 items-center">
                {links
                    .into_iter()
                    .filter_map(|(label, href)| href.map(|href| (label, href)))
                    .map(|(label, href)| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-indigo-600 hover:text-indigo-800 underline"
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <div>
                <p class="font-semibold text-gray-800">"Tech Stack"</p>
                <div class="flex flex-wrap gap-2 mt-1">
                    {if tech_stack.is_empty() {
                        view! { <span class="text-xs text-gray-600">{MISSING}</span> }.into_view()
                    } else {
                        tech_stack
                            .into_iter()
                            .map(|tech| {
                                view! {
                                    <span class="text-xs bg-gray-100 text-gray-800 px-3 py-1 rounded-full shadow-sm">
                                        {tech}
                                    </span>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}
