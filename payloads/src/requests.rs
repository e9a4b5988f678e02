use serde::{Deserialize, Serialize};
#[cfg(feature = "validate")]
use validator::{Validate, ValidationError, ValidationErrors};

/// One of the four fields of a contact message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ContactField {
    #[display("name")]
    Name,
    #[display("email")]
    Email,
    #[display("subject")]
    Subject,
    #[display("message")]
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] =
        [Self::Name, Self::Email, Self::Subject, Self::Message];
}

/// A message sent from the contact page to the support inbox.
///
/// The default value is the empty draft the contact form starts from.
/// With the `validate` feature, whitespace-only fields and a malformed
/// email are rejected by `Validate::validate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "validate", derive(Validate))]
pub struct ContactMessage {
    #[cfg_attr(feature = "validate", validate(custom(function = "not_blank")))]
    pub name: String,
    #[cfg_attr(
        feature = "validate",
        validate(custom(function = "not_blank"), email)
    )]
    pub email: String,
    #[cfg_attr(feature = "validate", validate(custom(function = "not_blank")))]
    pub subject: String,
    #[cfg_attr(feature = "validate", validate(custom(function = "not_blank")))]
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Copy of this message with a single field replaced.
    pub fn with_field(&self, field: ContactField, value: String) -> Self {
        let mut updated = self.clone();
        match field {
            ContactField::Name => updated.name = value,
            ContactField::Email => updated.email = value,
            ContactField::Subject => updated.subject = value,
            ContactField::Message => updated.message = value,
        }
        updated
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[cfg(feature = "validate")]
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Reasons a contact message is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidation {
    #[error("{0} must not be empty")]
    Empty(ContactField),
    #[error("email is not a valid address")]
    InvalidEmail,
    #[error("{0}")]
    Other(String),
}

/// Reports the first failing field in form order, so the same message
/// always produces the same error.
#[cfg(feature = "validate")]
impl From<ValidationErrors> for ContactValidation {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors.field_errors();
        for field in ContactField::ALL {
            let name = field.to_string();
            let Some(field_errors) = fields.get(name.as_str()) else {
                continue;
            };
            if field_errors.iter().any(|e| e.code == "blank") {
                return ContactValidation::Empty(field);
            }
            if field == ContactField::Email {
                return ContactValidation::InvalidEmail;
            }
        }
        ContactValidation::Other(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Bug".into(),
            message: "Found an issue".into(),
        }
    }

    #[test]
    fn with_field_replaces_only_that_field() {
        let base = ada();
        for field in ContactField::ALL {
            let updated = base.with_field(field, "changed".into());
            for other in ContactField::ALL {
                if other == field {
                    assert_eq!(updated.get(other), "changed");
                } else {
                    assert_eq!(updated.get(other), base.get(other));
                }
            }
        }
    }

    #[test]
    fn serializes_with_plain_field_names() {
        let json = serde_json::to_value(ada()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Bug",
                "message": "Found an issue",
            })
        );
    }

    #[test]
    fn default_is_empty() {
        assert!(ContactMessage::default().is_empty());
        assert!(!ada().is_empty());
    }

    #[cfg(feature = "validate")]
    fn check(msg: &ContactMessage) -> Result<(), ContactValidation> {
        msg.validate().map_err(ContactValidation::from)
    }

    #[cfg(feature = "validate")]
    #[test]
    fn validate_rejects_blank_fields() {
        let msg = ada().with_field(ContactField::Subject, "   ".into());
        assert_eq!(
            check(&msg),
            Err(ContactValidation::Empty(ContactField::Subject))
        );
        assert_eq!(
            ContactValidation::Empty(ContactField::Subject).to_string(),
            "subject must not be empty"
        );
    }

    #[cfg(feature = "validate")]
    #[test]
    fn blank_email_is_reported_as_empty() {
        let msg = ada().with_field(ContactField::Email, " ".into());
        assert_eq!(
            check(&msg),
            Err(ContactValidation::Empty(ContactField::Email))
        );
    }

    #[cfg(feature = "validate")]
    #[test]
    fn first_blank_field_wins() {
        let msg = ContactMessage::default();
        assert_eq!(
            check(&msg),
            Err(ContactValidation::Empty(ContactField::Name))
        );
    }

    #[cfg(feature = "validate")]
    #[test]
    fn validate_checks_email_shape() {
        assert_eq!(check(&ada()), Ok(()));
        for bad in ["ada", "@example.com", "ada@", "a@b@c", "ada @example.com"] {
            let msg = ada().with_field(ContactField::Email, bad.into());
            assert_eq!(check(&msg), Err(ContactValidation::InvalidEmail), "{bad}");
        }
    }

    #[cfg(feature = "validate")]
    #[test]
    fn long_multibyte_text_is_accepted() {
        let msg = ada()
            .with_field(ContactField::Subject, "€".repeat(300))
            .with_field(ContactField::Message, "ü".repeat(20_000));
        assert_eq!(check(&msg), Ok(()));
    }
}
