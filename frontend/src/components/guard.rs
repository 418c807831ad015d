use crate::{
    state::auth::{use_auth, AuthState},
    utils::navigation::use_navigator,
};
use leptos::*;

pub const LOGIN_PATH: &str = "/";

/// Where a visitor without a session is sent, if anywhere.
pub fn redirect_for(state: &AuthState) -> Option<&'static str> {
    (!state.is_authenticated()).then_some(LOGIN_PATH)
}

/// Renders `children` only with a session; otherwise sends the visitor to
/// the login page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigator = use_navigator();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated());
    create_isomorphic_effect(move |_| {
        if let Some(path) = auth.with(redirect_for) {
            log::debug!("no session, redirecting to login");
            navigator.go(path);
        }
    });
    view! {
        <Show when=move || is_authenticated.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::employee_user;

    #[test]
    fn only_a_missing_session_redirects() {
        assert_eq!(redirect_for(&AuthState::default()), Some("/"));
        let signed_in = AuthState {
            user: Some(employee_user()),
        };
        assert_eq!(redirect_for(&signed_in), None);
    }
}
