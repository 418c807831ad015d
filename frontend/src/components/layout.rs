use crate::{
    components::toast::ToastHost,
    data::{DataClient, NotificationKind, Role, User},
    state::auth::{use_auth, use_session},
    utils::{navigation::use_navigator, time},
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
}

const fn item(label: &'static str, path: &'static str) -> MenuItem {
    MenuItem { label, path }
}

const LEAVE_POLICY: MenuItem = item("Leave Policy", "/employee/leave-policy");

const EMPLOYEE_MENU: &[MenuItem] = &[
    item("Dashboard", "/employee/dashboard"),
    item("Colleagues", "/employee/colleagues"),
    item("Apply Leave", "/employee/leave/apply"),
    LEAVE_POLICY,
    item("Profile", "/employee/profile"),
];

const HR_MENU: &[MenuItem] = &[
    item("Dashboard", "/hr/dashboard"),
    item("Accounts", "/hr/accounts"),
    LEAVE_POLICY,
];

const MANAGER_MENU: &[MenuItem] = &[
    item("Dashboard", "/manager/dashboard"),
    item("Approvals", "/manager/approvals"),
    LEAVE_POLICY,
];

const TECH_LEAD_MENU: &[MenuItem] = &[
    item("Dashboard", "/tech-lead/dashboard"),
    item("Team", "/tech-lead/team"),
    LEAVE_POLICY,
];

pub fn menu_for(role: Role) -> &'static [MenuItem] {
    match role {
        Role::Employee => EMPLOYEE_MENU,
        Role::Hr => HR_MENU,
        Role::Manager => MANAGER_MENU,
        Role::TechLead => TECH_LEAD_MENU,
    }
}

fn greeting(user: Option<&User>) -> String {
    match user.map(User::first_name).filter(|first| !first.is_empty()) {
        Some(first) => format!("Hi, {first}!"),
        None => "Welcome".into(),
    }
}

#[component]
pub fn Sidebar(
    #[prop(into)] current_path: String,
    #[prop(into)] is_open: MaybeSignal<bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let session = use_session();
    let navigator = use_navigator();

    let on_logout = move |_| {
        session.logout();
        on_close.call(());
        navigator.go("/");
    };

    let menu = move || {
        let current = current_path.clone();
        auth.get()
            .user
            .map(|user| {
                menu_for(user.role)
                    .iter()
                    .map(|entry| {
                        let active = entry.path == current;
                        view! {
                            <a
                                href=entry.path
                                class=if active {
                                    "flex items-center p-2 rounded-lg text-xs font-medium bg-gradient-to-r from-indigo-50 to-purple-50 text-indigo-600 shadow-sm"
                                } else {
                                    "flex items-center p-2 rounded-lg text-xs font-medium text-gray-600 hover:bg-gray-100"
                                }
                                aria-current=if active { Some("page") } else { None }
                                on:click=move |_| on_close.call(())
                            >
                                {entry.label}
                            </a>
                        }
                    })
                    .collect_view()
            })
            .unwrap_or_else(|| ().into_view())
    };

    view! {
        <aside class=move || {
            format!(
                "bg-white w-60 min-h-screen p-4 flex flex-col justify-between fixed top-0 left-0 z-30 transform transition-transform duration-200 ease-in-out sm:translate-x-0 {}",
                if is_open.get() { "translate-x-0" } else { "-translate-x-full" },
            )
        }>
            <div>
                <div class="mb-6 pt-2">
                    <h2 class="text-lg font-bold text-gray-800 flex items-center gap-2">
                        <span class="w-8 h-8 rounded-full bg-gradient-to-r from-indigo-500 to-purple-600 flex items-center justify-center text-white text-sm">
                            "LT"
                        </span>
                        "Leave Tracker"
                    </h2>
                    <p class="text-xs text-gray-500 mt-2">
                        {move || auth.with(|state| greeting(state.user.as_ref()))}
                    </p>
                </div>
                <nav class="space-y-1">{menu}</nav>
            </div>
            <button
                class="flex items-center p-2 rounded-lg text-xs font-medium text-red-600 hover:bg-red-50"
                on:click=on_logout
            >
                "Logout"
            </button>
        </aside>
    }
}

#[component]
pub fn Header(on_toggle_sidebar: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let data = use_context::<DataClient>().unwrap_or_default();
    let notifications = store_value(data.notifications().to_vec());
    let count = notifications.with_value(|list| list.len());
    let (dropdown_open, set_dropdown_open) = create_signal(false);
    let today = time::today();

    let items = move || {
        notifications.with_value(|list| {
            list.iter()
                .map(|notif| {
                    let icon = match notif.kind {
                        NotificationKind::Birthday => "🎂",
                        NotificationKind::Anniversary => "🏆",
                    };
                    view! {
                        <li class="p-3 rounded-lg hover:bg-gray-100 flex items-start gap-3">
                            <span aria-hidden="true">{icon}</span>
                            <div>
                                <p class="text-sm text-gray-800 font-medium">{notif.message.clone()}</p>
                                <p class="text-xs text-gray-500 mt-1">{time::relative_day_label(notif.date, today)}</p>
                            </div>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <header class="bg-white/20 backdrop-blur-[16px] p-4 flex items-center justify-between gap-3 sm:gap-6 rounded-xl shadow-md border border-gray-100">
            <div>
                <p class="text-sm sm:text-base font-medium text-gray-800">
                    {move || {
                        format!(
                            "Welcome, {}",
                            auth.get().user.map(|u| u.name).unwrap_or_else(|| "User".into()),
                        )
                    }}
                </p>
                <p class="text-xs sm:text-sm text-gray-600 hidden sm:block">
                    "Your leave management dashboard"
                </p>
            </div>
            <div class="flex items-center gap-3 sm:gap-4 relative">
                <button
                    class="relative p-2 rounded-full hover:bg-gray-100"
                    aria-label="Notifications"
                    aria-expanded=move || dropdown_open.get().to_string()
                    on:click=move |_| set_dropdown_open.update(|open| *open = !*open)
                >
                    <span aria-hidden="true">"🔔"</span>
                    {(count > 0).then(|| view! {
                        <span class="absolute -top-1 -right-1 w-4 h-4 bg-rose-500 rounded-full text-[10px] text-white flex items-center justify-center">
                            {count}
                        </span>
                    })}
                </button>
                <button
                    class="sm:hidden p-2 rounded-full hover:bg-gray-100"
                    aria-label="Toggle menu"
                    on:click=move |_| on_toggle_sidebar.call(())
                >
                    "☰"
                </button>
                <Show when=move || dropdown_open.get()>
                    <div class="absolute right-0 top-12 w-72 bg-white rounded-xl shadow-lg border border-gray-100 p-4 space-y-3 z-50">
                        <div class="flex items-center justify-between">
                            <h3 class="text-base font-semibold text-gray-800">"Notifications"</h3>
                            <button
                                class="text-xs text-gray-500 hover:text-gray-700"
                                on:click=move |_| set_dropdown_open.set(false)
                            >
                                "Close"
                            </button>
                        </div>
                        {if count == 0 {
                            view! { <p class="text-sm text-gray-500 text-center py-6">"No notifications"</p> }.into_view()
                        } else {
                            view! { <ul class="space-y-3">{items()}</ul> }.into_view()
                        }}
                    </div>
                </Show>
            </div>
        </header>
    }
}

/// Frame for every signed-in page: sidebar, header, toasts and the page body.
#[component]
pub fn ProtectedLayout(#[prop(optional, into)] current_path: String, children: Children) -> impl IntoView {
    let sidebar_open = create_rw_signal(false);
    let toggle = Callback::new(move |_| sidebar_open.update(|open| *open = !*open));
    let close = Callback::new(move |_| sidebar_open.set(false));
    view! {
        <div class="min-h-screen bg-gradient-to-br from-gray-100 to-gray-200 flex">
            <ToastHost />
            <Show when=move || sidebar_open.get()>
                <div class="fixed inset-0 bg-gray-900/40 z-20 sm:hidden" on:click=move |_| sidebar_open.set(false)></div>
            </Show>
            <Sidebar current_path=current_path is_open=sidebar_open on_close=close />
            <div class="flex-1 flex flex-col sm:ml-64">
                <div class="sticky top-0 z-20 p-2">
                    <Header on_toggle_sidebar=toggle />
                </div>
                <main class="flex-1 p-4 sm:p-6">{children()}</main>
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="flex flex-col justify-center items-center gap-2 p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-indigo-600"></div>
            {label.map(|text| view! { <p class="text-sm text-gray-600">{text}</p> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_gets_a_dashboard_and_the_policy() {
        for role in Role::ALL {
            let menu = menu_for(role);
            assert_eq!(menu[0].label, "Dashboard");
            assert_eq!(menu[0].path, role.landing_path());
            assert!(menu.contains(&LEAVE_POLICY));
        }
    }

    #[test]
    fn employee_menu_covers_employee_pages() {
        let paths: Vec<_> = menu_for(Role::Employee).iter().map(|m| m.path).collect();
        assert_eq!(
            paths,
            [
                "/employee/dashboard",
                "/employee/colleagues",
                "/employee/leave/apply",
                "/employee/leave-policy",
                "/employee/profile",
            ]
        );
        assert_eq!(menu_for(Role::Hr)[1].path, "/hr/accounts");
        assert_eq!(menu_for(Role::Manager)[1].path, "/manager/approvals");
        assert_eq!(menu_for(Role::TechLead)[1].path, "/tech-lead/team");
    }

    #[test]
    fn greeting_uses_first_name() {
        assert_eq!(greeting(Some(&crate::test_support::helpers::employee_user())), "Hi, John!");
        assert_eq!(greeting(None), "Welcome");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{
        employee_user, provide_recording_navigator, provide_session, provide_toast_state,
        user_with_role,
    };
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn layout_renders_greeting_menu_and_children() {
        let html = render_to_string(move || {
            provide_session(Some(employee_user()));
            provide_toast_state();
            provide_recording_navigator();
            view! {
                <ProtectedLayout current_path="/employee/dashboard">
                    <div>"page-body"</div>
                </ProtectedLayout>
            }
        });
        assert!(html.contains("Leave Tracker"));
        assert!(html.contains("Hi, John!"));
        assert!(html.contains("Welcome, John Doe"));
        assert!(html.contains("Apply Leave"));
        assert!(html.contains("page-body"));
        assert!(html.contains("aria-current=\"page\""));
    }

    #[test]
    fn hr_menu_hides_employee_entries() {
        let html = render_to_string(move || {
            provide_session(Some(user_with_role(Role::Hr)));
            provide_recording_navigator();
            let close = Callback::new(|_| ());
            view! { <Sidebar current_path="/hr/dashboard" is_open=false on_close=close /> }
        });
        assert!(html.contains("Accounts"));
        assert!(!html.contains("Apply Leave"));
    }

    #[test]
    fn header_shows_notification_count() {
        let html = render_to_string(move || {
            provide_session(Some(employee_user()));
            view! { <Header on_toggle_sidebar=Callback::new(|_| ()) /> }
        });
        assert!(html.contains("bg-rose-500"));
        assert!(html.contains("Welcome, John Doe"));
    }

    #[test]
    fn spinner_renders_its_label() {
        let html = render_to_string(move || view! { <LoadingSpinner label="Loading PDF..." /> });
        assert!(html.contains("Loading PDF..."));
        assert!(html.contains("animate-spin"));
    }
}
