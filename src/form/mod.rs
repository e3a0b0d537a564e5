//! Form domain types: field identity, live values, and validation errors.

pub mod validator;

/// Identifies one of the three form fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Message,
}

impl FieldId {
    /// All fields in tab order.
    pub const ALL: [FieldId; 3] = [FieldId::Name, FieldId::Email, FieldId::Message];

    /// Stable lowercase key, used in diagnostic records.
    pub const fn key(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Message => "message",
        }
    }
}

/// Snapshot of the three field values at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Message => &self.message,
        }
    }
}

/// Validation messages keyed by field. A present entry means the field
/// failed its rule at the last submit attempt; an empty set means the
/// form was valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FormErrors {
    pub fn get(&self, field: FieldId) -> Option<&str> {
        let slot = match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Message => &self.message,
        };
        slot.as_deref()
    }

    pub fn set(&mut self, field: FieldId, message: impl Into<String>) {
        let slot = match field {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Message => &mut self.message,
        };
        *slot = Some(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_set_and_get() {
        let mut errors = FormErrors::default();
        assert!(errors.is_empty());
        errors.set(FieldId::Email, "invalid email format.");
        assert!(!errors.is_empty());
        assert_eq!(errors.get(FieldId::Email), Some("invalid email format."));
        assert_eq!(errors.get(FieldId::Name), None);
        assert_eq!(errors.get(FieldId::Message), None);
    }

    #[test]
    fn test_values_get_by_field() {
        let values = FormValues {
            name: "Ann".into(),
            email: "ann@x.com".into(),
            message: "Hello".into(),
        };
        assert_eq!(values.get(FieldId::Name), "Ann");
        assert_eq!(values.get(FieldId::Email), "ann@x.com");
        assert_eq!(values.get(FieldId::Message), "Hello");
    }
}
