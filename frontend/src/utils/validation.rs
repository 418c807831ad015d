use std::sync::OnceLock;

use regex::Regex;

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"))
}

fn mobile_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+[0-9]{10,15}$").expect("mobile pattern"))
}

fn linkedin_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^https?://(www\.)?linkedin\.com/.+$").expect("linkedin pattern")
    })
}

fn instagram_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^https?://(www\.)?instagram\.com/.+$").expect("instagram pattern")
    })
}

pub fn is_valid_email(value: &str) -> bool {
    email_re().is_match(value)
}

pub fn is_valid_mobile(value: &str) -> bool {
    mobile_re().is_match(value)
}

pub fn is_valid_linkedin(value: &str) -> bool {
    linkedin_re().is_match(value)
}

pub fn is_valid_instagram(value: &str) -> bool {
    instagram_re().is_match(value)
}

/// Per-field validation messages, kept in the order they were raised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(&'static str, String)>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        let message = message.into();
        match self.0.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = message,
            None => self.0.push((field, message)),
        }
    }

    pub fn clear(&mut self, field: &str) {
        self.0.retain(|(name, _)| *name != field);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(|(_, message)| message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_pattern_needs_local_part_domain_and_tld() {
        assert!(is_valid_email("john.doe@example.com"));
        assert!(!is_valid_email("john.doe@example"));
        assert!(!is_valid_email("john doe@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn mobile_needs_plus_and_ten_to_fifteen_digits() {
        assert!(is_valid_mobile("+1234567890"));
        assert!(is_valid_mobile("+123456789012345"));
        assert!(!is_valid_mobile("1234567890"));
        assert!(!is_valid_mobile("+123456789"));
        assert!(!is_valid_mobile("+1234567890123456"));
        assert!(!is_valid_mobile("+12345 67890"));
    }

    #[test]
    fn mobile_accepts_ascii_digits_only() {
        assert!(!is_valid_mobile("+١٢٣٤٥٦٧٨٩٠"));
        assert!(!is_valid_mobile("+１２３４５６７８９０"));
    }

    #[test]
    fn social_links_must_point_at_their_site() {
        assert!(is_valid_linkedin("https://linkedin.com/in/johndoe"));
        assert!(is_valid_linkedin("http://www.linkedin.com/in/johndoe"));
        assert!(!is_valid_linkedin("https://linkedin.com/"));
        assert!(!is_valid_linkedin("https://example.com/johndoe"));
        assert!(is_valid_instagram("https://instagram.com/johndoe"));
        assert!(!is_valid_instagram("instagram.com/johndoe"));
    }

    #[test]
    fn field_errors_keep_order_and_replace_in_place() {
        let mut errors = FieldErrors::new();
        errors.insert("start", "Start date is required");
        errors.insert("end", "End date is required");
        errors.insert("start", "again");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first(), Some("again"));
        errors.clear("start");
        assert_eq!(errors.get("start"), None);
        assert_eq!(errors.get("end"), Some("End date is required"));
        assert!(errors.clone().into_result().is_err());
        errors.clear("end");
        assert!(errors.into_result().is_ok());
    }
}
