use std::collections::HashSet;

use crate::{
    data::{AppError, DataClient, User},
    utils::time,
};

pub const MISSING: &str = "N/A";

pub fn role_badge_class(position: &str) -> &'static str {
    match position {
        "Junior Developer" => "bg-indigo-500 text-white",
        "Senior Developer" => "bg-purple-500 text-white",
        "Tech Lead" => "bg-green-500 text-white",
        "DevOps Engineer" => "bg-yellow-500 text-white",
        "HR Manager" => "bg-pink-500 text-white",
        _ => "bg-gray-500 text-white",
    }
}

fn or_missing(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(MISSING)
        .to_string()
}

/// Label/value pairs in display order.
pub fn detail_rows(user: &User) -> Vec<(&'static str, String)> {
    vec![
        ("Education", or_missing(user.education.as_deref())),
        ("Location", or_missing(user.location.as_deref())),
        ("Mobile", or_missing(user.mobile.as_deref())),
        ("Joined", time::format_optional_long(user.join_date)),
        ("Birthday", time::format_optional_long(user.birthday)),
    ]
}

pub fn lookup(data: &DataClient, id: &str) -> Result<User, AppError> {
    data.find_user(id)
}

/// Which cards have their details expanded on narrow screens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedCards(HashSet<String>);

impl ExpandedCards {
    pub fn toggle(&mut self, id: &str) {
        if !self.0.remove(id) {
            self.0.insert(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.0.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{fixtures, Role, SocialLinks};

    fn bare_user() -> User {
        User {
            id: "9".into(),
            email: "new.hire@example.com".into(),
            name: "New Hire".into(),
            role: Role::Employee,
            position: String::new(),
            birthday: None,
            join_date: None,
            tech_stack: Vec::new(),
            education: None,
            location: Some("  ".into()),
            mobile: None,
            social_links: SocialLinks::default(),
            avatar: None,
        }
    }

    #[test]
    fn badge_follows_position() {
        assert_eq!(role_badge_class("Tech Lead"), "bg-green-500 text-white");
        assert_eq!(role_badge_class("HR Manager"), "bg-pink-500 text-white");
        assert_eq!(role_badge_class("Intern"), "bg-gray-500 text-white");
    }

    #[test]
    fn rows_fill_missing_values() {
        let rows = detail_rows(&bare_user());
        assert!(rows.iter().all(|(_, value)| value == MISSING));
    }

    #[test]
    fn rows_format_dates() {
        let john = fixtures::users().remove(0);
        let rows = detail_rows(&john);
        assert_eq!(rows[3], ("Joined", "Apr 20, 2023".to_string()));
        assert_eq!(rows[4], ("Birthday", "Apr 25, 1990".to_string()));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let err = lookup(&DataClient::new(), "42").unwrap_err();
        assert_eq!(err.to_string(), "No colleague found with ID: 42");
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn toggling_twice_collapses() {
        let mut cards = ExpandedCards::default();
        cards.toggle("2");
        assert!(cards.is_expanded("2"));
        assert!(!cards.is_expanded("3"));
        cards.toggle("2");
        assert!(!cards.is_expanded("2"));
    }
}
