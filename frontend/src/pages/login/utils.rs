use thiserror::Error;

use crate::{
    data::{fixtures::DEMO_PASSWORD, DataClient, User},
    utils::validation::is_valid_email,
};

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Email not found")]
    UnknownEmail,
    #[error("Incorrect password")]
    WrongPassword,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

impl LoginError {
    pub fn field(&self) -> LoginField {
        match self {
            LoginError::InvalidEmail | LoginError::UnknownEmail => LoginField::Email,
            LoginError::WrongPassword => LoginField::Password,
        }
    }

    /// Text shown under the offending field; the toast uses `Display`.
    pub fn field_message(&self) -> String {
        match self {
            LoginError::InvalidEmail => INVALID_EMAIL_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LoginError::InvalidEmail => "invalid_email",
            LoginError::UnknownEmail => "unknown_email",
            LoginError::WrongPassword => "wrong_password",
        }
    }
}

/// Live check while typing; `None` means the field is fine.
pub fn email_input_error(value: &str) -> Option<String> {
    (!is_valid_email(value)).then(|| INVALID_EMAIL_MESSAGE.to_string())
}

/// Checks run in order: email shape, known email, demo password.
pub fn authenticate(data: &DataClient, email: &str, password: &str) -> Result<User, LoginError> {
    if !is_valid_email(email) {
        return Err(LoginError::InvalidEmail);
    }
    let user = data
        .find_user_by_email(email)
        .ok_or(LoginError::UnknownEmail)?;
    if password != DEMO_PASSWORD {
        return Err(LoginError::WrongPassword);
    }
    Ok(user)
}

pub fn welcome_message(user: &User) -> String {
    format!("Welcome, {}! Logged in as {}", user.name, user.role.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Role;

    #[test]
    fn every_fixture_user_can_log_in_with_the_demo_password() {
        let data = DataClient::new();
        for user in data.users() {
            let found = authenticate(&data, &user.email, "password").unwrap();
            assert_eq!(&found, user);
        }
    }

    #[test]
    fn failures_are_reported_in_check_order() {
        let data = DataClient::new();
        assert_eq!(
            authenticate(&data, "not-an-email", "wrong"),
            Err(LoginError::InvalidEmail)
        );
        assert_eq!(
            authenticate(&data, "ghost@example.com", "password"),
            Err(LoginError::UnknownEmail)
        );
        assert_eq!(
            authenticate(&data, "john.doe@example.com", "Password"),
            Err(LoginError::WrongPassword)
        );
        assert_eq!(
            authenticate(&data, "John.Doe@example.com", "password"),
            Err(LoginError::UnknownEmail)
        );
    }

    #[test]
    fn messages_match_what_the_user_sees() {
        assert_eq!(LoginError::InvalidEmail.to_string(), "Invalid email format");
        assert_eq!(LoginError::InvalidEmail.field_message(), "Please enter a valid email");
        assert_eq!(LoginError::UnknownEmail.field_message(), "Email not found");
        assert_eq!(LoginError::WrongPassword.field(), LoginField::Password);
        assert_eq!(LoginError::UnknownEmail.field(), LoginField::Email);
    }

    #[test]
    fn live_email_check() {
        assert_eq!(email_input_error("john.doe@example.com"), None);
        assert_eq!(
            email_input_error("john.doe@"),
            Some("Please enter a valid email".to_string())
        );
    }

    #[test]
    fn welcome_names_role_label() {
        let data = DataClient::new();
        let lead = data.users_with_role(Role::TechLead).remove(0);
        assert_eq!(
            welcome_message(&lead),
            format!("Welcome, {}! Logged in as Tech Lead", lead.name)
        );
    }
}
