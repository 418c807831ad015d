use std::rc::Rc;

use crate::{
    data::User,
    utils::storage::{default_store, KeyValueStore},
};
use leptos::*;

pub const SESSION_STORAGE_KEY: &str = "user";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    Restore(Option<User>),
    Login(User),
    Logout,
}

pub fn reduce(_state: AuthState, action: SessionAction) -> AuthState {
    match action {
        SessionAction::Restore(user) => AuthState { user },
        SessionAction::Login(user) => AuthState { user: Some(user) },
        SessionAction::Logout => AuthState { user: None },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    Empty,
    Restored,
    Discarded(String),
}

/// Parses a persisted session, rejecting anything that would not pass as a
/// logged-in user.
pub fn validate_persisted(raw: &str) -> Result<User, String> {
    let user: User = serde_json::from_str(raw).map_err(|err| err.to_string())?;
    for (field, value) in [
        ("id", &user.id),
        ("email", &user.email),
        ("name", &user.name),
    ] {
        if value.trim().is_empty() {
            return Err(format!("missing {field}"));
        }
    }
    Ok(user)
}

pub fn restore_from(store: &dyn KeyValueStore) -> (Option<User>, RestoreOutcome) {
    let raw = match store.get(SESSION_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return (None, RestoreOutcome::Empty),
        Err(err) => return (None, RestoreOutcome::Discarded(err.to_string())),
    };
    match validate_persisted(&raw) {
        Ok(user) => (Some(user), RestoreOutcome::Restored),
        Err(reason) => {
            if let Err(err) = store.remove(SESSION_STORAGE_KEY) {
                log::warn!("malformed session not cleared: {err}");
            }
            (None, RestoreOutcome::Discarded(reason))
        }
    }
}

/// The session store: reactive state plus the storage it mirrors into.
#[derive(Clone)]
pub struct SessionStore {
    state: RwSignal<AuthState>,
    storage: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        let (user, outcome) = restore_from(storage.as_ref());
        match &outcome {
            RestoreOutcome::Empty => log::debug!("no stored session"),
            RestoreOutcome::Restored => log::info!("session restored from storage"),
            RestoreOutcome::Discarded(reason) => {
                log::warn!("discarded stored session: {reason}")
            }
        }
        let state = create_rw_signal(reduce(AuthState::default(), SessionAction::Restore(user)));
        Self { state, storage }
    }

    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.with_untracked(|s| s.user.clone())
    }

    pub fn dispatch(&self, action: SessionAction) {
        match &action {
            SessionAction::Login(user) => match serde_json::to_string(user) {
                Ok(json) => {
                    if let Err(err) = self.storage.set(SESSION_STORAGE_KEY, &json) {
                        log::warn!("session not persisted: {err}");
                    }
                }
                Err(err) => log::warn!("session not serialized: {err}"),
            },
            SessionAction::Logout => {
                if let Err(err) = self.storage.remove(SESSION_STORAGE_KEY) {
                    log::warn!("stored session not cleared: {err}");
                }
            }
            SessionAction::Restore(_) => {}
        }
        self.state.update(|state| {
            *state = reduce(std::mem::take(state), action);
        });
    }

    pub fn login(&self, user: User) {
        log::info!("login: {} ({})", user.email, user.role.label());
        self.dispatch(SessionAction::Login(user));
    }

    pub fn logout(&self) {
        log::info!("logout");
        self.dispatch(SessionAction::Logout);
    }
}

#[component]
pub fn AuthProvider(
    #[prop(optional)] storage: Option<Rc<dyn KeyValueStore>>,
    children: Children,
) -> impl IntoView {
    let store = SessionStore::new(storage.unwrap_or_else(default_store));
    provide_context(store);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().unwrap_or_else(|| SessionStore::new(default_store()))
}

pub fn use_auth() -> ReadSignal<AuthState> {
    use_session().state()
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{employee_user, memory_store};
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn login_and_logout_mirror_into_storage() {
        with_runtime(|| {
            let storage = memory_store();
            let session = SessionStore::new(Rc::new(storage.clone()));
            assert!(!session.state().get().is_authenticated());

            session.login(employee_user());
            assert_eq!(session.current_user().unwrap().name, "John Doe");
            let stored = storage.get(SESSION_STORAGE_KEY).unwrap().unwrap();
            assert_eq!(validate_persisted(&stored).unwrap(), employee_user());

            session.logout();
            assert!(session.current_user().is_none());
            assert_eq!(storage.get(SESSION_STORAGE_KEY).unwrap(), None);
        });
    }

    #[test]
    fn new_store_restores_a_previous_login() {
        with_runtime(|| {
            let storage = memory_store();
            SessionStore::new(Rc::new(storage.clone())).login(employee_user());
            let reloaded = SessionStore::new(Rc::new(storage));
            assert_eq!(reloaded.current_user(), Some(employee_user()));
        });
    }

    #[test]
    fn use_auth_defaults_to_logged_out_without_context() {
        with_runtime(|| {
            let auth = use_auth();
            assert!(auth.get().user.is_none());
        });
    }
}
