//! Pure validation of form values.
//!
//! `validate` maps a [`FormValues`] snapshot to a [`FormErrors`] set with no
//! side effects. Every rule runs on every call; there is no short-circuit
//! across fields, so a submit attempt always reports the full error set.

use super::{FieldId, FormErrors, FormValues};
use regex::Regex;
use std::sync::LazyLock;

pub const NAME_REQUIRED: &str = "name required.";
pub const EMAIL_REQUIRED: &str = "email required.";
pub const EMAIL_INVALID: &str = "invalid email format.";
pub const MESSAGE_REQUIRED: &str = "message required.";

/// Loose `<text>@<text>.<text>` shape check, matched anywhere in the value.
/// Deliberately not an RFC 5322 parser.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

/// Compute the full error set for the given values. The result contains
/// entries only for failing fields; an empty result means the form is valid.
pub fn validate(values: &FormValues) -> FormErrors {
    let mut errors = FormErrors::default();

    if values.name.trim().is_empty() {
        errors.set(FieldId::Name, NAME_REQUIRED);
    }

    if values.email.trim().is_empty() {
        errors.set(FieldId::Email, EMAIL_REQUIRED);
    } else if !EMAIL_SHAPE.is_match(&values.email) {
        errors.set(FieldId::Email, EMAIL_INVALID);
    }

    if values.message.trim().is_empty() {
        errors.set(FieldId::Message, MESSAGE_REQUIRED);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(name: &str, email: &str, message: &str) -> FormValues {
        FormValues {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn test_all_valid_yields_empty_errors() {
        let errors = validate(&values("Ann", "ann@x.com", "Hello"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_blank_fields_are_required() {
        let errors = validate(&values("", "", ""));
        assert_eq!(errors.get(FieldId::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(FieldId::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(FieldId::Message), Some(MESSAGE_REQUIRED));
    }

    #[test]
    fn test_whitespace_only_counts_as_blank() {
        let errors = validate(&values("   ", "\t", "  \n "));
        assert_eq!(errors.get(FieldId::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(FieldId::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(FieldId::Message), Some(MESSAGE_REQUIRED));
    }

    #[test]
    fn test_email_shape() {
        for bad in ["foo", "foo@bar", "@b.co", "a@.", "a@b."] {
            let errors = validate(&values("Ann", bad, "hi"));
            assert_eq!(errors.get(FieldId::Email), Some(EMAIL_INVALID), "{bad:?}");
        }
        for good in ["a@b.co", "ann@x.com", "first.last@sub.domain.org"] {
            let errors = validate(&values("Ann", good, "hi"));
            assert_eq!(errors.get(FieldId::Email), None, "{good:?}");
        }
    }

    #[test]
    fn test_email_shape_is_unanchored() {
        // The shape only has to appear somewhere in the value.
        let errors = validate(&values("Ann", "reach me at a@b.co thanks", "hi"));
        assert_eq!(errors.get(FieldId::Email), None);
    }

    #[test]
    fn test_rules_are_independent() {
        let errors = validate(&values("", "a@b.com", "hi"));
        assert_eq!(errors.get(FieldId::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(FieldId::Email), None);
        assert_eq!(errors.get(FieldId::Message), None);
    }
}
