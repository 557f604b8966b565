use std::sync::OnceLock;

use regex::Regex;

use crate::form::FormState;

pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const SHORT_PASSWORD: &str = "Password must be at least 6 characters long.";
pub const MIN_PASSWORD_LEN: usize = 6;

/// `<local>@<domain>.<tld>`, no whitespace anywhere.
const EMAIL_PATTERN: &str = r"^\S+@\S+\.\S+$";

/// Outcome of the validation of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldValidation {
    pub has_error: bool,
    /// Empty when the field is valid.
    pub message: &'static str,
}

impl FieldValidation {
    pub const fn ok() -> Self {
        Self {
            has_error: false,
            message: "",
        }
    }

    pub const fn error(message: &'static str) -> Self {
        Self {
            has_error: true,
            message,
        }
    }

    /// The message to display under the field, if any.
    pub fn warning(&self) -> Option<&'static str> {
        self.has_error.then_some(self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Validation {
    pub email: FieldValidation,
    pub password: FieldValidation,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        !self.email.has_error && !self.password.has_error
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("constant pattern"))
}

pub fn is_email_shaped(email: &str) -> bool {
    !email.is_empty() && email_regex().is_match(email)
}

/// Validate the form fields. This is a pure function: the same input always gives the same
/// [`Validation`] and the form is left untouched.
pub fn validate(form: &FormState) -> Validation {
    let email = if is_email_shaped(&form.email) {
        FieldValidation::ok()
    } else {
        FieldValidation::error(INVALID_EMAIL)
    };

    let password = if form.password.chars().count() < MIN_PASSWORD_LEN {
        FieldValidation::error(SHORT_PASSWORD)
    } else {
        FieldValidation::ok()
    };

    Validation { email, password }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        for valid in [
            "a@b.co",
            "john.doe@example.com",
            "x+tag@sub.domain.org",
            "a@b.c",
        ] {
            assert!(is_email_shaped(valid), "{} should be valid", valid);
        }

        for invalid in [
            "",
            "plainaddress",
            "a@b",
            "@b.co",
            "a@.co",
            "a@b.",
            "a.b.c",
            "a @b.co",
            "a@b .co",
            " a@b.co",
            "a@b.co ",
            "a@b.\tco",
        ] {
            assert!(!is_email_shaped(invalid), "{:?} should be invalid", invalid);
        }
    }

    #[test]
    fn invalid_email_has_fixed_message() {
        for email in ["", "no-at-sign.com", "missing@dot", "trailing@dot."] {
            let v = validate(&FormState::new(email, "secret1"));
            assert!(v.email.has_error);
            assert_eq!(v.email.message, INVALID_EMAIL);
            assert_eq!(v.email.warning(), Some(INVALID_EMAIL));
            assert!(!v.password.has_error);
            assert!(!v.is_valid());
        }
    }

    #[test]
    fn short_password_has_fixed_message() {
        for password in ["", "a", "12345", "ñandú"] {
            let v = validate(&FormState::new("a@b.co", password));
            assert!(v.password.has_error);
            assert_eq!(v.password.message, SHORT_PASSWORD);
            assert!(!v.email.has_error);
            assert!(!v.is_valid());
        }
    }

    #[test]
    fn password_length_counts_characters() {
        // 6 characters, more than 6 bytes.
        let v = validate(&FormState::new("a@b.co", "ñañañá"));
        assert!(!v.password.has_error);
        assert_eq!(v.password.message, "");
    }

    #[test]
    fn both_fields_reported_at_once() {
        let v = validate(&FormState::new("nope", "123"));
        assert_eq!(v.email, FieldValidation::error(INVALID_EMAIL));
        assert_eq!(v.password, FieldValidation::error(SHORT_PASSWORD));
    }

    #[test]
    fn valid_form() {
        let v = validate(&FormState::new("a@b.co", "secret1"));
        assert!(v.is_valid());
        assert_eq!(v, Validation::default());
        assert_eq!(v.email.warning(), None);
    }

    #[test]
    fn validate_is_idempotent() {
        let form = FormState::new("bad-email", "short");
        let before = form.clone();
        let first = validate(&form);
        let second = validate(&form);
        assert_eq!(first, second);
        assert_eq!(form, before);
    }
}
