use std::fmt;

/// The four named contact-form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// The field's name attribute in the host document.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Outcome of checking one field value against its rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub field: Field,
    /// Present iff the value failed its rule.
    pub error: Option<&'static str>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Checks a single field value. The raw value is trimmed before the rule is
/// evaluated; rules are independent per field.
pub fn validate(field: Field, raw: &str) -> ValidationResult {
    let value = raw.trim();
    let error = match field {
        Field::Name if value.chars().count() < 2 => {
            Some("Name must be at least 2 characters long")
        }
        Field::Email if !email_shape_ok(value) => Some("Please enter a valid email address"),
        Field::Subject if value.chars().count() < 5 => {
            Some("Subject must be at least 5 characters long")
        }
        Field::Message if value.chars().count() < 10 => {
            Some("Message must be at least 10 characters long")
        }
        _ => None,
    };
    ValidationResult { field, error }
}

/// Shape check for email addresses: no whitespace, exactly one `@`, a
/// non-empty local part, and a dot in the domain with at least one character
/// on each side of it.
fn email_shape_ok(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, ch)| ch == '.' && i > 0 && i + ch.len_utf8() < domain.len())
}
