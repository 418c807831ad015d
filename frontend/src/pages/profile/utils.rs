use crate::{
    data::{SocialLinks, User},
    utils::{
        time,
        validation::{is_valid_instagram, is_valid_linkedin, is_valid_mobile, FieldErrors},
    },
};

pub const FIELD_BIRTHDAY: &str = "birthday";
pub const FIELD_MOBILE: &str = "mobile";
pub const FIELD_EDUCATION: &str = "education";
pub const FIELD_LOCATION: &str = "location";
pub const FIELD_TECH_STACK: &str = "tech_stack";
pub const FIELD_LINKEDIN: &str = "linkedin";
pub const FIELD_INSTAGRAM: &str = "instagram";

pub const NOT_SET: &str = "Not set";
pub const SAVED_MESSAGE: &str = "Profile updated successfully!";

/// The editable part of a profile, as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub birthday: String,
    pub mobile: String,
    pub education: String,
    pub location: String,
    pub tech_stack: String,
    pub linkedin: String,
    pub instagram: String,
}

impl ProfileDraft {
    pub fn from_user(user: &User) -> Self {
        Self {
            birthday: user
                .birthday
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            mobile: user.mobile.clone().unwrap_or_default(),
            education: user.education.clone().unwrap_or_default(),
            location: user.location.clone().unwrap_or_default(),
            tech_stack: user.tech_stack.join(", "),
            linkedin: user.social_links.linkedin.clone().unwrap_or_default(),
            instagram: user.social_links.instagram.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: &str) -> &str {
        match field {
            FIELD_BIRTHDAY => &self.birthday,
            FIELD_MOBILE => &self.mobile,
            FIELD_EDUCATION => &self.education,
            FIELD_LOCATION => &self.location,
            FIELD_TECH_STACK => &self.tech_stack,
            FIELD_LINKEDIN => &self.linkedin,
            FIELD_INSTAGRAM => &self.instagram,
            _ => "",
        }
    }

    pub fn set(&mut self, field: &str, value: String) {
        let slot = match field {
            FIELD_BIRTHDAY => &mut self.birthday,
            FIELD_MOBILE => &mut self.mobile,
            FIELD_EDUCATION => &mut self.education,
            FIELD_LOCATION => &mut self.location,
            FIELD_TECH_STACK => &mut self.tech_stack,
            FIELD_LINKEDIN => &mut self.linkedin,
            FIELD_INSTAGRAM => &mut self.instagram,
            _ => return,
        };
        *slot = value;
    }
}

pub fn parse_tech_stack(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tech| !tech.is_empty())
        .map(str::to_string)
        .collect()
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn validate(draft: &ProfileDraft) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if draft.birthday.trim().is_empty() {
        errors.insert(FIELD_BIRTHDAY, "Birthday is required");
    } else if time::parse_input_date(&draft.birthday).is_none() {
        errors.insert(FIELD_BIRTHDAY, "Birthday must be a valid date");
    }
    let mobile = draft.mobile.trim();
    if mobile.is_empty() {
        errors.insert(FIELD_MOBILE, "Mobile number is required");
    } else if !is_valid_mobile(mobile) {
        errors.insert(
            FIELD_MOBILE,
            "Mobile number must start with + followed by 10-15 digits",
        );
    }
    let linkedin = draft.linkedin.trim();
    if !linkedin.is_empty() && !is_valid_linkedin(linkedin) {
        errors.insert(FIELD_LINKEDIN, "Invalid LinkedIn URL");
    }
    let instagram = draft.instagram.trim();
    if !instagram.is_empty() && !is_valid_instagram(instagram) {
        errors.insert(FIELD_INSTAGRAM, "Invalid Instagram URL");
    }
    errors.into_result()
}

/// Validates `draft` and folds it into a copy of `user`. Read-only fields
/// (name, email, position, join date) are carried over untouched.
pub fn apply(user: &User, draft: &ProfileDraft) -> Result<User, FieldErrors> {
    validate(draft)?;
    Ok(User {
        birthday: time::parse_input_date(&draft.birthday),
        mobile: optional(&draft.mobile),
        education: optional(&draft.education),
        location: optional(&draft.location),
        tech_stack: parse_tech_stack(&draft.tech_stack),
        social_links: SocialLinks {
            linkedin: optional(&draft.linkedin),
            instagram: optional(&draft.instagram),
        },
        ..user.clone()
    })
}

pub fn or_not_set(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(NOT_SET)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;
    use chrono::NaiveDate;

    fn john() -> User {
        fixtures::users().remove(0)
    }

    fn valid_draft() -> ProfileDraft {
        ProfileDraft {
            mobile: "+15551234567".into(),
            ..ProfileDraft::from_user(&john())
        }
    }

    #[test]
    fn draft_starts_from_the_user() {
        let draft = ProfileDraft::from_user(&john());
        assert_eq!(draft.birthday, "1990-04-25");
        assert_eq!(draft.tech_stack, "JavaScript, React, Node.js");
        assert_eq!(draft.get(FIELD_LINKEDIN), "https://linkedin.com/in/johndoe");
    }

    #[test]
    fn required_fields_are_enforced() {
        let draft = ProfileDraft::default();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.get(FIELD_BIRTHDAY), Some("Birthday is required"));
        assert_eq!(errors.get(FIELD_MOBILE), Some("Mobile number is required"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn dashed_mobile_numbers_are_rejected() {
        let errors = validate(&ProfileDraft::from_user(&john())).unwrap_err();
        assert_eq!(
            errors.get(FIELD_MOBILE),
            Some("Mobile number must start with + followed by 10-15 digits")
        );
    }

    #[test]
    fn social_links_must_match_their_site() {
        let mut draft = valid_draft();
        draft.set(FIELD_LINKEDIN, "https://example.com/john".into());
        draft.set(FIELD_INSTAGRAM, "instagram.com/john".into());
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.get(FIELD_LINKEDIN), Some("Invalid LinkedIn URL"));
        assert_eq!(errors.get(FIELD_INSTAGRAM), Some("Invalid Instagram URL"));
    }

    #[test]
    fn apply_updates_editable_fields_only() {
        let mut draft = valid_draft();
        draft.set(FIELD_TECH_STACK, " Rust, ,Leptos ".into());
        draft.set(FIELD_BIRTHDAY, "1990-05-01".into());
        draft.set(FIELD_INSTAGRAM, String::new());
        let updated = apply(&john(), &draft).unwrap();
        assert_eq!(updated.tech_stack, vec!["Rust".to_string(), "Leptos".to_string()]);
        assert_eq!(updated.birthday, NaiveDate::from_ymd_opt(1990, 5, 1));
        assert_eq!(updated.mobile.as_deref(), Some("+15551234567"));
        assert_eq!(updated.social_links.instagram, None);
        assert_eq!(updated.name, "John Doe");
        assert_eq!(updated.join_date, john().join_date);
    }

    #[test]
    fn missing_values_read_not_set() {
        assert_eq!(or_not_set(None), "Not set");
        assert_eq!(or_not_set(Some("")), "Not set");
        assert_eq!(or_not_set(Some("Austin")), "Austin");
    }
}
