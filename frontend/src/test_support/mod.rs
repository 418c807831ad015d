#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use std::{cell::RefCell, rc::Rc};

    use crate::data::{fixtures, Role, User};
    use crate::pages::dashboard::snapshot::{SnapshotStatus, StatusSource};
    use crate::state::{auth::SessionStore, toast::ToastState};
    use crate::utils::{navigation::Navigator, storage::MemoryStorage};
    use leptos::*;

    pub fn employee_user() -> User {
        fixture_user("1")
    }

    pub fn user_with_role(role: Role) -> User {
        fixtures::users()
            .into_iter()
            .find(|u| u.role == role)
            .expect("fixture user for role")
    }

    fn fixture_user(id: &str) -> User {
        fixtures::users()
            .into_iter()
            .find(|u| u.id == id)
            .expect("fixture user")
    }

    pub fn memory_store() -> MemoryStorage {
        MemoryStorage::new()
    }

    /// Provides a session (optionally logged in) backed by memory storage.
    pub fn provide_session(user: Option<User>) -> SessionStore {
        let session = SessionStore::new(Rc::new(memory_store()));
        if let Some(user) = user {
            session.login(user);
        }
        provide_context(session.clone());
        session
    }

    pub fn provide_toast_state() -> ToastState {
        let toasts = ToastState::new();
        provide_context(toasts);
        toasts
    }

    /// Provides a navigator that records every path instead of navigating.
    pub fn provide_recording_navigator() -> Rc<RefCell<Vec<String>>> {
        let visited = Rc::new(RefCell::new(Vec::new()));
        let sink = visited.clone();
        provide_context(Navigator::new(move |path| {
            sink.borrow_mut().push(path.to_string())
        }));
        visited
    }

    /// Always answers with the same status.
    pub struct FixedStatus(pub SnapshotStatus);

    impl StatusSource for FixedStatus {
        fn status_for(&self, _user_id: &str, _date: chrono::NaiveDate) -> SnapshotStatus {
            self.0
        }
    }
}
