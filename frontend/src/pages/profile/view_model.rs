use super::utils::{self, ProfileDraft};
use crate::{
    data::User,
    state::{
        auth::use_auth,
        toast::{use_toasts, ToastState},
    },
    utils::validation::FieldErrors,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ProfileViewModel {
    /// Page-local copy of the session user; saving updates this only.
    pub profile: RwSignal<Option<User>>,
    pub draft: RwSignal<ProfileDraft>,
    pub errors: RwSignal<FieldErrors>,
    pub editing: RwSignal<bool>,
    toasts: ToastState,
}

impl ProfileViewModel {
    pub fn new() -> Self {
        let user = use_auth().get_untracked().user;
        let draft = user.as_ref().map(ProfileDraft::from_user).unwrap_or_default();
        Self {
            profile: create_rw_signal(user),
            draft: create_rw_signal(draft),
            errors: create_rw_signal(FieldErrors::new()),
            editing: create_rw_signal(false),
            toasts: use_toasts(),
        }
    }

    pub fn start_editing(&self) {
        if let Some(user) = self.profile.get_untracked() {
            self.draft.set(ProfileDraft::from_user(&user));
        }
        self.errors.set(FieldErrors::new());
        self.editing.set(true);
    }

    pub fn cancel(&self) {
        self.errors.set(FieldErrors::new());
        self.editing.set(false);
    }

    pub fn set_field(&self, field: &'static str, value: String) {
        self.draft.update(|draft| draft.set(field, value));
        self.errors.update(|errors| errors.clear(field));
    }

    pub fn field_value(&self, field: &'static str) -> Signal<String> {
        let draft = self.draft;
        Signal::derive(move || draft.with(|d| d.get(field).to_string()))
    }

    pub fn error_for(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    pub fn save(&self) -> bool {
        let Some(user) = self.profile.get_untracked() else {
            return false;
        };
        match self.draft.with_untracked(|draft| utils::apply(&user, draft)) {
            Ok(updated) => {
                log::info!("profile updated for {}", updated.email);
                self.profile.set(Some(updated));
                self.errors.set(FieldErrors::new());
                self.editing.set(false);
                self.toasts.success(utils::SAVED_MESSAGE);
                true
            }
            Err(errors) => {
                self.errors.set(errors);
                false
            }
        }
    }
}

impl Default for ProfileViewModel {
    fn default() -> Self {
        Self::new()
    }
}
