use std::sync::LazyLock;

use regex::Regex;

use crate::models::{ContactForm, FieldError, FormField};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s\-()]+$").expect("valid phone regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Digits, spaces, dashes and parentheses only, with 10 to 15 digits.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    PHONE_RE.is_match(phone) && (10..=15).contains(&digits)
}

/// First failing rule for a single field, if any. `value` is trimmed first.
pub fn validate_field(field: FormField, value: &str) -> Option<String> {
    let value = value.trim();
    let chars = value.chars().count();

    let message = match field {
        FormField::Name if value.is_empty() => "Name is required.",
        FormField::Name if chars < 2 => "Name must be at least 2 characters.",
        FormField::Email if value.is_empty() => "Email is required.",
        FormField::Email if !is_valid_email(value) => "Please enter a valid email address.",
        FormField::Phone if !value.is_empty() && !is_valid_phone(value) => {
            "Please enter a valid phone number (10-15 digits)."
        }
        FormField::Service if value.is_empty() => "Please select a service.",
        FormField::Message if value.is_empty() => "Message is required.",
        FormField::Message if chars < 10 => {
            "Please provide more details (at least 10 characters)."
        }
        _ => return None,
    };
    Some(message.to_string())
}

/// Validate every field in form order. The first error names the field to
/// focus.
pub fn validate(form: &ContactForm) -> Result<ContactForm, Vec<FieldError>> {
    let form = form.trimmed();
    let fields = [
        (FormField::Name, &form.name),
        (FormField::Email, &form.email),
        (FormField::Phone, &form.phone),
        (FormField::Service, &form.service),
        (FormField::Message, &form.message),
    ];

    let errors: Vec<FieldError> = fields
        .iter()
        .filter_map(|(field, value)| {
            validate_field(*field, value).map(|message| FieldError {
                field: *field,
                message,
            })
        })
        .collect();

    if errors.is_empty() {
        Ok(form)
    } else {
        Err(errors)
    }
}
