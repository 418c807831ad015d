use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::{guard::RequireAuth, layout::ProtectedLayout},
    data::DataClient,
    pages::{
        dashboard::snapshot::SharedStatusSource, ApplyLeavePage, ApprovalsPage,
        ColleagueDetailPage, ColleaguesPage, DashboardPage, HrAccountsPage, HrDashboardPage,
        LeavePolicyPage, LoginPage, ManagerDashboardPage, NotFoundPage, ProfilePage, TeamPage,
        TechLeadDashboardPage,
    },
    state::{auth::AuthProvider, toast::provide_toasts},
    utils::navigation::provide_router_navigator,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/employee/dashboard",
    "/employee/colleagues",
    "/employee/colleagues/:id",
    "/employee/profile",
    "/employee/leave/apply",
    "/employee/leave-policy",
    "/hr/dashboard",
    "/hr/accounts",
    "/manager/dashboard",
    "/manager/approvals",
    "/tech-lead/dashboard",
    "/tech-lead/team",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/employee/dashboard",
    "/employee/colleagues",
    "/employee/colleagues/:id",
    "/employee/profile",
    "/employee/leave/apply",
    "/employee/leave-policy",
    "/hr/dashboard",
    "/hr/accounts",
    "/manager/dashboard",
    "/manager/approvals",
    "/tech-lead/dashboard",
    "/tech-lead/team",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(DataClient::new());
    provide_context(SharedStatusSource::seeded_from_config());
    provide_toasts();
    provide_meta_context();
    view! {
        <Title text="Leave Tracker" />
        <AuthProvider>
            <Router>
                <AppRoutes />
            </Router>
        </AuthProvider>
    }
}

#[component]
fn AppRoutes() -> impl IntoView {
    provide_router_navigator();
    view! { <RouteTable /> }
}

/// Catch-all included, everything but `/` sits behind a session.
#[component]
fn RouteTable() -> impl IntoView {
    view! {
        <Routes>
            <Route path="/" view=LoginPage />
            <Route path="/employee/dashboard" view=|| view! { <Protected><DashboardPage /></Protected> } />
            <Route path="/employee/colleagues" view=|| view! { <Protected><ColleaguesPage /></Protected> } />
            <Route path="/employee/colleagues/:id" view=|| view! { <Protected><ColleagueRoute /></Protected> } />
            <Route path="/employee/profile" view=|| view! { <Protected><ProfilePage /></Protected> } />
            <Route path="/employee/leave/apply" view=|| view! { <Protected><ApplyLeaveRoute /></Protected> } />
            <Route path="/employee/leave-policy" view=|| view! { <Protected><LeavePolicyPage /></Protected> } />
            <Route path="/hr/dashboard" view=|| view! { <Protected><HrDashboardPage /></Protected> } />
            <Route path="/hr/accounts" view=|| view! { <Protected><HrAccountsPage /></Protected> } />
            <Route path="/manager/dashboard" view=|| view! { <Protected><ManagerDashboardPage /></Protected> } />
            <Route path="/manager/approvals" view=|| view! { <Protected><ApprovalsPage /></Protected> } />
            <Route path="/tech-lead/dashboard" view=|| view! { <Protected><TechLeadDashboardPage /></Protected> } />
            <Route path="/tech-lead/team" view=|| view! { <Protected><TeamPage /></Protected> } />
            <Route path="/*any" view=|| view! { <Protected><NotFoundPage /></Protected> } />
        </Routes>
    }
}

/// Session guard plus the signed-in layout.
#[component]
fn Protected(children: ChildrenFn) -> impl IntoView {
    let pathname = use_location().pathname;
    let children = store_value(children);
    view! {
        <RequireAuth>
            <ProtectedLayout current_path=pathname.get_untracked()>
                {children.with_value(|render| render())}
            </ProtectedLayout>
        </RequireAuth>
    }
}

#[component]
fn ColleagueRoute() -> impl IntoView {
    let params = use_params_map();
    move || {
        let id = params.with(|p| p.get("id").cloned().unwrap_or_default());
        view! { <ColleagueDetailPage id=id /> }
    }
}

#[component]
fn ApplyLeaveRoute() -> impl IntoView {
    let query = use_query_map();
    let date = query.with_untracked(|q| q.get("date").cloned());
    view! { <ApplyLeavePage initial_date=date.unwrap_or_default() /> }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::data::User;
    use crate::test_support::helpers::{employee_user, provide_session, provide_toast_state};
    use crate::test_support::ssr::render_to_string;
    use crate::utils::navigation::Navigator;
    use std::{cell::RefCell, rc::Rc};

    /// Renders the route table at `path`; returns the html and every
    /// navigation the guard requested.
    fn render_at(path: &'static str, user: Option<User>) -> (String, Vec<String>) {
        let visited = Rc::new(RefCell::new(Vec::new()));
        let sink = visited.clone();
        let html = render_to_string(move || {
            provide_context(RouterIntegrationContext::new(ServerIntegration {
                path: format!("http://localhost{path}"),
            }));
            provide_context(DataClient::new());
            provide_session(user);
            provide_toast_state();
            provide_context(Navigator::new(move |to| sink.borrow_mut().push(to.to_string())));
            view! {
                <Router>
                    <RouteTable />
                </Router>
            }
        });
        let visited = visited.borrow().clone();
        (html, visited)
    }

    #[test]
    fn unknown_path_renders_not_found_inside_the_layout() {
        let (html, visited) = render_at("/no/such/page", Some(employee_user()));
        assert!(html.contains("404 - Page Not Found"));
        assert!(html.contains("Leave Tracker"));
        assert!(visited.is_empty());
    }

    #[test]
    fn unknown_path_without_session_goes_to_login() {
        let (html, visited) = render_at("/no/such/page", None);
        assert!(!html.contains("404 - Page Not Found"));
        assert_eq!(visited, ["/".to_string()]);
    }

    #[test]
    fn protected_page_without_session_goes_to_login() {
        let (html, visited) = render_at("/hr/accounts", None);
        assert!(!html.contains("data-account"));
        assert_eq!(visited, ["/".to_string()]);
    }

    #[test]
    fn login_page_needs_no_session() {
        let (html, visited) = render_at("/", None);
        assert!(html.contains("Sign In"));
        assert!(visited.is_empty());
    }

    #[test]
    fn colleague_route_passes_the_path_id() {
        let (html, _) = render_at("/employee/colleagues/3", Some(employee_user()));
        assert!(html.contains("Alice Jones"));
        let (missing, _) = render_at("/employee/colleagues/99", Some(employee_user()));
        assert!(missing.contains("Colleague Not Found"));
    }
}
