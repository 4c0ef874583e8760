use chrono::{DateTime, Utc};
use nutype::nutype;
use serde::Serialize;

use crate::{
    email_address::EmailAddress,
    macros::{id, nutype_string},
    url::Url,
};

id!(ContactSubmissionId);

/// An inquiry received through the contact form.
///
/// Submissions are only ever created from a [`NewContactSubmission`], so every
/// stored submission satisfies the field constraints encoded in its types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: ContactSubmissionId,
    pub name: ContactSubmissionName,
    pub email: EmailAddress,
    pub company: Option<ContactSubmissionCompany>,
    pub current_website: Option<Url>,
    pub message: ContactSubmissionMessage,
    pub created_at: DateTime<Utc>,
}

/// A validated submission which has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactSubmission {
    pub name: ContactSubmissionName,
    pub email: EmailAddress,
    pub company: Option<ContactSubmissionCompany>,
    pub current_website: Option<Url>,
    pub message: ContactSubmissionMessage,
}

impl NewContactSubmission {
    pub fn into_submission(
        self,
        id: ContactSubmissionId,
        created_at: DateTime<Utc>,
    ) -> ContactSubmission {
        let Self {
            name,
            email,
            company,
            current_website,
            message,
        } = self;

        ContactSubmission {
            id,
            name,
            email,
            company,
            current_website,
            message,
            created_at,
        }
    }
}

// Lengths count the value as submitted, surrounding whitespace included.
nutype_string!(ContactSubmissionName(validate(len_char_min = 2)));

nutype_string!(ContactSubmissionMessage(validate(len_char_min = 20)));

#[nutype(
    sanitize(trim),
    derive(Debug, Clone, PartialEq, Eq, Deref, From, Serialize, Deserialize)
)]
pub struct ContactSubmissionCompany(String);
