use webrevamp_core_contact_contracts::{spam::ContactSpamService, ContactSubmitRequest};
use webrevamp_di::Build;

/// Flags every submission with a filled honeypot field.
///
/// The `website` field is hidden from humans, so any content (even
/// whitespace) was put there by a bot.
#[derive(Debug, Clone, Copy, Default, Build)]
pub struct ContactSpamServiceImpl;

impl ContactSpamService for ContactSpamServiceImpl {
    fn is_spam(&self, request: &ContactSubmitRequest) -> bool {
        request.website.as_ref().is_some_and(|x| !x.is_empty())
    }
}
