use webrevamp_core_contact_contracts::{
    validation::ContactValidationService, ContactField, ContactSubmitRequest, ContactViolation,
};
use webrevamp_di::Build;
use webrevamp_models::{
    contact::{
        ContactSubmissionCompany, ContactSubmissionMessage, ContactSubmissionName,
        NewContactSubmission,
    },
    email_address::EmailAddress,
    url::Url,
};

pub const REQUIRED: &str = "Required";
pub const EXPECTED_STRING: &str = "Expected a string";
pub const INVALID_NAME: &str = "Name must be at least 2 characters";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const INVALID_URL: &str = "Please enter a valid URL";
pub const INVALID_MESSAGE: &str = "Message must be at least 20 characters";

/// Checks every field of a submission as it was submitted. Values are not
/// trimmed before validation; only the company name is trimmed when stored.
#[derive(Debug, Clone, Copy, Default, Build)]
pub struct ContactValidationServiceImpl;

impl ContactValidationService for ContactValidationServiceImpl {
    fn validate(
        &self,
        request: ContactSubmitRequest,
    ) -> Result<NewContactSubmission, Vec<ContactViolation>> {
        let mut violations = Violations::new(request.malformed);

        let name = violations.required(ContactField::Name, request.name, INVALID_NAME, |x| {
            ContactSubmissionName::try_from(x).ok()
        });
        let email = violations.required(ContactField::Email, request.email, INVALID_EMAIL, |x| {
            x.parse::<EmailAddress>().ok()
        });
        let company = violations.check_type(ContactField::Company).then(|| {
            request
                .company
                .map(ContactSubmissionCompany::from)
                .filter(|x| !x.is_empty())
        });
        let current_website = violations.optional(
            ContactField::CurrentWebsite,
            request.current_website,
            INVALID_URL,
            |x| {
                x.parse::<Url>()
                    .ok()
                    .filter(|url| url.has_host() && x.trim() == x)
            },
        );
        let message =
            violations.required(ContactField::Message, request.message, INVALID_MESSAGE, |x| {
                ContactSubmissionMessage::try_from(x).ok()
            });

        match (name, email, company, current_website, message) {
            (Some(name), Some(email), Some(company), Some(current_website), Some(message)) => {
                Ok(NewContactSubmission {
                    name,
                    email,
                    company,
                    current_website,
                    message,
                })
            }
            _ => Err(violations.found),
        }
    }
}

struct Violations {
    found: Vec<ContactViolation>,
    malformed: Vec<ContactField>,
}

impl Violations {
    fn new(malformed: Vec<ContactField>) -> Self {
        Self {
            found: Vec::new(),
            malformed,
        }
    }

    fn push(&mut self, field: ContactField, message: &'static str) {
        self.found.push(ContactViolation { field, message });
    }

    /// Returns `false` and records a violation if the field was submitted
    /// with a value that is not a string.
    fn check_type(&mut self, field: ContactField) -> bool {
        if self.malformed.contains(&field) {
            self.push(field, EXPECTED_STRING);
            return false;
        }
        true
    }

    fn required<T>(
        &mut self,
        field: ContactField,
        value: Option<String>,
        message: &'static str,
        parse: impl FnOnce(String) -> Option<T>,
    ) -> Option<T> {
        if !self.check_type(field) {
            return None;
        }
        let Some(value) = value else {
            self.push(field, REQUIRED);
            return None;
        };
        let parsed = parse(value);
        if parsed.is_none() {
            self.push(field, message);
        }
        parsed
    }

    /// Returns `Some(None)` for absent or empty values.
    fn optional<T>(
        &mut self,
        field: ContactField,
        value: Option<String>,
        message: &'static str,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Option<Option<T>> {
        if !self.check_type(field) {
            return None;
        }
        let Some(value) = value.filter(|x| !x.is_empty()) else {
            return Some(None);
        };
        let parsed = parse(&value);
        if parsed.is_none() {
            self.push(field, message);
        }
        parsed.map(Some)
    }
}
