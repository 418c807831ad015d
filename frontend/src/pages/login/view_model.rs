use super::utils::{self, LoginError, LoginField};
use crate::{
    data::DataClient,
    state::{
        auth::{use_session, SessionStore},
        toast::{use_toasts, ToastState},
    },
    utils::navigation::{use_navigator, Navigator},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub show_password: RwSignal<bool>,
    pub email_error: RwSignal<Option<String>>,
    pub password_error: RwSignal<Option<String>>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            show_password: create_rw_signal(false),
            email_error: create_rw_signal(None),
            password_error: create_rw_signal(None),
        }
    }
}

#[derive(Clone)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    data: DataClient,
    session: SessionStore,
    toasts: ToastState,
    navigator: Navigator,
}

impl LoginViewModel {
    pub fn set_email(&self, value: String) {
        self.form.email_error.set(utils::email_input_error(&value));
        self.form.email.set(value);
    }

    pub fn set_password(&self, value: String) {
        self.form.password.set(value);
    }

    pub fn toggle_password(&self) {
        self.form.show_password.update(|shown| *shown = !*shown);
    }

    pub fn submit(&self) -> Result<(), LoginError> {
        let form = self.form;
        form.email_error.set(None);
        form.password_error.set(None);
        let email = form.email.get_untracked();
        let password = form.password.get_untracked();

        match utils::authenticate(&self.data, &email, &password) {
            Ok(user) => {
                let landing = user.role.landing_path();
                self.toasts.success(utils::welcome_message(&user));
                self.session.login(user);
                self.navigator.go(landing);
                Ok(())
            }
            Err(err) => {
                log::info!("login rejected: {}", err.kind());
                let target = match err.field() {
                    LoginField::Email => form.email_error,
                    LoginField::Password => form.password_error,
                };
                target.set(Some(err.field_message()));
                self.toasts.error(err.to_string());
                Err(err)
            }
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    LoginViewModel {
        form: LoginFormState::default(),
        data: use_context::<DataClient>().unwrap_or_default(),
        session: use_session(),
        toasts: use_toasts(),
        navigator: use_navigator(),
    }
}
