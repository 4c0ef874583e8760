use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use webrevamp_core_contact_contracts::{ContactField, ContactSubmitRequest, ContactViolation};
use webrevamp_models::contact::{ContactSubmission, ContactSubmissionId};

use super::ApiViolation;

/// Raw contact form fields. Unknown fields are ignored and every field may be
/// missing or hold a value of the wrong type, so that the honeypot is checked
/// first and validation can report all problems at once.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactSubmitRequest {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub company: Option<Value>,
    pub current_website: Option<Value>,
    pub message: Option<Value>,
    /// Honeypot
    pub website: Option<Value>,
}

impl From<ApiContactSubmitRequest> for ContactSubmitRequest {
    fn from(value: ApiContactSubmitRequest) -> Self {
        let mut malformed = Vec::new();
        let mut field = |field: ContactField, value: Option<Value>| match value {
            None | Some(Value::Null) => None,
            Some(Value::String(x)) => Some(x),
            Some(_) => {
                malformed.push(field);
                None
            }
        };

        let name = field(ContactField::Name, value.name);
        let email = field(ContactField::Email, value.email);
        let company = field(ContactField::Company, value.company);
        let current_website = field(ContactField::CurrentWebsite, value.current_website);
        let message = field(ContactField::Message, value.message);

        // any non-empty honeypot counts as filled, whatever its type
        let website = value.website.and_then(|x| match x {
            Value::Null => None,
            Value::String(x) => Some(x),
            x => Some(x.to_string()),
        });

        Self {
            name,
            email,
            company,
            current_website,
            message,
            website,
            malformed,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiContactSubmitResponse {
    pub success: bool,
    pub message: &'static str,
    pub id: ContactSubmissionId,
}

#[derive(Debug, Serialize)]
pub struct ApiContactSubmissionList {
    pub success: bool,
    pub data: Vec<ApiContactSubmission>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactSubmission {
    pub id: ContactSubmissionId,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub current_website: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<ContactSubmission> for ApiContactSubmission {
    fn from(value: ContactSubmission) -> Self {
        Self {
            id: value.id,
            name: value.name.into_inner(),
            email: value.email.to_string(),
            company: value.company.map(|x| x.into_inner()),
            current_website: value.current_website.map(|x| x.to_string()),
            message: value.message.into_inner(),
            created_at: value.created_at,
        }
    }
}

impl From<ContactViolation> for ApiViolation {
    fn from(value: ContactViolation) -> Self {
        Self {
            field: value.field.as_str(),
            message: value.message.into(),
        }
    }
}
