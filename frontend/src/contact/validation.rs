use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

const NAME_MIN_CHARS: usize = 2;
const PHONE_MIN_CHARS: usize = 10;
const MESSAGE_MIN_CHARS: usize = 10;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

// Digits, whitespace, hyphens, plus signs and parentheses.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s\-+()]+$").expect("phone pattern compiles"));

/// Contact form fields, in the order they appear on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Subject,
        Field::Message,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Element id of the input.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    /// Element id of the inline error text.
    pub fn error_id(self) -> &'static str {
        match self {
            Field::Name => "nameError",
            Field::Email => "emailError",
            Field::Phone => "phoneError",
            Field::Subject => "subjectError",
            Field::Message => "messageError",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Please enter a valid phone number")]
    PhoneInvalid,
    #[error("Please select a subject")]
    SubjectRequired,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

/// Length as the browser reports it, in UTF-16 code units.
fn length(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn validate_name(value: &str) -> Result<(), FieldError> {
    let name = value.trim();
    if name.is_empty() {
        Err(FieldError::NameRequired)
    } else if length(name) < NAME_MIN_CHARS {
        Err(FieldError::NameTooShort)
    } else {
        Ok(())
    }
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    let email = value.trim();
    if email.is_empty() {
        Err(FieldError::EmailRequired)
    } else if !EMAIL_PATTERN.is_match(email) {
        Err(FieldError::EmailInvalid)
    } else {
        Ok(())
    }
}

/// Phone is optional; only a non-empty value is checked.
pub fn validate_phone(value: &str) -> Result<(), FieldError> {
    let phone = value.trim();
    if phone.is_empty() {
        return Ok(());
    }
    if !PHONE_PATTERN.is_match(phone) || length(phone) < PHONE_MIN_CHARS {
        return Err(FieldError::PhoneInvalid);
    }
    Ok(())
}

pub fn validate_subject(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        Err(FieldError::SubjectRequired)
    } else {
        Ok(())
    }
}

pub fn validate_message(value: &str) -> Result<(), FieldError> {
    let message = value.trim();
    if message.is_empty() {
        Err(FieldError::MessageRequired)
    } else if length(message) < MESSAGE_MIN_CHARS {
        Err(FieldError::MessageTooShort)
    } else {
        Ok(())
    }
}

pub fn validate(field: Field, value: &str) -> Result<(), FieldError> {
    match field {
        Field::Name => validate_name(value),
        Field::Email => validate_email(value),
        Field::Phone => validate_phone(value),
        Field::Subject => validate_subject(value),
        Field::Message => validate_message(value),
    }
}

/// Current values of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Validates every field, not stopping at the first failure.
    pub fn validate(&self) -> ValidationReport {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            errors.record(field, validate(field, self.value(field)));
        }
        ValidationReport { errors }
    }
}

/// Inline error state of each field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors([Option<FieldError>; 5]);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0[field.index()]
    }

    pub fn record(&mut self, field: Field, result: Result<(), FieldError>) {
        self.0[field.index()] = result.err();
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// Text for the field's error element; empty when the field is valid.
    pub fn message(&self, field: Field) -> String {
        self.get(field).map(|e| e.to_string()).unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    errors: FieldErrors,
}

impl ValidationReport {
    /// First failing field in page order.
    pub fn first_invalid(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| self.errors.has_error(*f))
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }
}

/// Result of submitting the form: what the form holds afterwards and what to do next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed. `submission` holds the captured values; the form is
    /// left empty and without errors.
    Sent {
        submission: ContactDraft,
        draft: ContactDraft,
        errors: FieldErrors,
    },
    /// At least one field failed. Values are kept and `scroll_to` is the first
    /// failing field in page order.
    Rejected {
        draft: ContactDraft,
        errors: FieldErrors,
        scroll_to: Field,
    },
}

pub fn submit(draft: &ContactDraft) -> SubmitOutcome {
    let report = draft.validate();
    match report.first_invalid() {
        None => SubmitOutcome::Sent {
            submission: draft.clone(),
            draft: ContactDraft::default(),
            errors: FieldErrors::default(),
        },
        Some(scroll_to) => SubmitOutcome::Rejected {
            draft: draft.clone(),
            errors: report.errors().clone(),
            scroll_to,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ContactDraft {
        ContactDraft {
            name: "Alice Tenant".into(),
            email: "alice@example.com".into(),
            phone: "".into(),
            subject: "lease-review".into(),
            message: "Please review my lease agreement.".into(),
        }
    }

    #[test]
    fn name_rules() {
        assert_eq!(validate_name(""), Err(FieldError::NameRequired));
        assert_eq!(validate_name("   "), Err(FieldError::NameRequired));
        assert_eq!(validate_name("A"), Err(FieldError::NameTooShort));
        assert_eq!(validate_name(" A "), Err(FieldError::NameTooShort));
        assert_eq!(validate_name("Al"), Ok(()));
    }

    #[test]
    fn error_messages_match_the_page_copy() {
        assert_eq!(FieldError::NameRequired.to_string(), "Name is required");
        assert_eq!(
            FieldError::NameTooShort.to_string(),
            "Name must be at least 2 characters"
        );
        assert_eq!(
            FieldError::EmailInvalid.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            FieldError::MessageTooShort.to_string(),
            "Message must be at least 10 characters"
        );
    }

    #[test]
    fn email_needs_a_dotted_domain() {
        assert_eq!(validate_email(""), Err(FieldError::EmailRequired));
        assert_eq!(validate_email("foo@bar"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("foo bar@baz.com"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("foo@@bar.com"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("foo@bar.com"), Ok(()));
        assert_eq!(validate_email("  foo@bar.co.uk "), Ok(()));
    }

    #[test]
    fn phone_is_optional_but_checked_when_present() {
        assert_eq!(validate_phone(""), Ok(()));
        assert_eq!(validate_phone("   "), Ok(()));
        assert_eq!(validate_phone("12345"), Err(FieldError::PhoneInvalid));
        assert_eq!(validate_phone("555-123-456x"), Err(FieldError::PhoneInvalid));
        assert_eq!(validate_phone("(555) 123-4567"), Ok(()));
        assert_eq!(validate_phone("+1 555 123 4567"), Ok(()));
    }

    #[test]
    fn subject_must_be_selected() {
        assert_eq!(validate_subject(""), Err(FieldError::SubjectRequired));
        assert_eq!(validate_subject("eviction"), Ok(()));
    }

    #[test]
    fn message_length_boundary() {
        assert_eq!(validate_message(""), Err(FieldError::MessageRequired));
        assert_eq!(validate_message("123456789"), Err(FieldError::MessageTooShort));
        assert_eq!(validate_message("1234567890"), Ok(()));
    }

    #[test]
    fn lengths_count_utf16_code_units() {
        // Each emoji is a surrogate pair, two code units.
        assert_eq!(validate_name("😀"), Ok(()));
        assert_eq!(validate_message("😀😀😀😀😀"), Ok(()));
        assert_eq!(validate_message("😀😀😀😀"), Err(FieldError::MessageTooShort));
        assert_eq!(validate_name("é"), Err(FieldError::NameTooShort));
    }

    #[test]
    fn valid_submit_clears_the_form_and_keeps_the_values_for_logging() {
        let filled = valid_draft();
        match submit(&filled) {
            SubmitOutcome::Sent { submission, draft, errors } => {
                assert_eq!(submission, filled);
                assert_eq!(draft, ContactDraft::default());
                assert_eq!(errors, FieldErrors::default());
            }
            other => panic!("expected Sent, got {:?}", other),
        }
    }

    #[test]
    fn success_banner_hides_after_five_seconds() {
        assert_eq!(crate::config::SUCCESS_BANNER_MS, 5_000);
    }

    #[test]
    fn invalid_submit_keeps_values_and_targets_first_invalid_field() {
        let mut filled = valid_draft();
        filled.set(Field::Phone, "12345".into());
        filled.set(Field::Message, "too short".into());

        match submit(&filled) {
            SubmitOutcome::Rejected { draft, errors, scroll_to } => {
                assert_eq!(draft, filled);
                assert_eq!(scroll_to, Field::Phone);
                assert_eq!(errors.get(Field::Phone), Some(FieldError::PhoneInvalid));
                assert_eq!(errors.get(Field::Message), Some(FieldError::MessageTooShort));
                assert!(!errors.has_error(Field::Name));
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn empty_submit_targets_the_name_field() {
        match submit(&ContactDraft::default()) {
            SubmitOutcome::Rejected { scroll_to, errors, .. } => {
                assert_eq!(scroll_to, Field::Name);
                assert_eq!(errors.get(Field::Phone), None);
                assert_eq!(errors.get(Field::Subject), Some(FieldError::SubjectRequired));
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn valid_draft_passes() {
        let report = valid_draft().validate();
        assert_eq!(report.first_invalid(), None);
    }

    #[test]
    fn report_points_at_first_invalid_field_in_page_order() {
        let mut draft = valid_draft();
        draft.set(Field::Message, "short".into());
        draft.set(Field::Email, "foo@bar".into());

        let report = draft.validate();
        assert_eq!(report.first_invalid(), Some(Field::Email));
        assert_eq!(report.errors().get(Field::Message), Some(FieldError::MessageTooShort));
        assert!(!report.errors().has_error(Field::Name));
        assert_eq!(report.errors().message(Field::Name), "");
    }

    #[test]
    fn recording_success_clears_an_error() {
        let mut errors = FieldErrors::default();
        errors.record(Field::Phone, validate_phone("12345"));
        assert!(errors.has_error(Field::Phone));

        errors.record(Field::Phone, validate_phone("(555) 123-4567"));
        assert!(!errors.has_error(Field::Phone));
    }

    #[test]
    fn element_ids() {
        let ids: Vec<_> = Field::ALL.iter().map(|f| f.id()).collect();
        assert_eq!(ids, ["name", "email", "phone", "subject", "message"]);
        assert_eq!(Field::Subject.error_id(), "subjectError");
    }
}
