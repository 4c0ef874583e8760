use std::{future::Future, sync::Arc, time::Duration};

use webrevamp_core_contact_contracts::notification::{
    ContactNotification, ContactNotificationService, ContactNotifyError, ContactNotifyFailure,
    ContactNotifyFailureReason,
};
use webrevamp_di::Build;
use webrevamp_email_contracts::template::TemplateEmailService;
use webrevamp_models::{contact::ContactSubmission, email_address::EmailAddressWithName};
use webrevamp_templates_contracts::{ContactAdminAlertTemplate, ContactConfirmationTemplate};
use webrevamp_utils::trace_instrument;

#[derive(Debug, Clone, Build)]
pub struct ContactNotificationServiceImpl<TemplateEmail> {
    template_email: TemplateEmail,
    config: ContactNotificationServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactNotificationServiceConfig {
    pub admin_email: Arc<EmailAddressWithName>,
    /// Upper bound for each of the two messages.
    pub send_timeout: Duration,
}

impl<TemplateEmail> ContactNotificationService for ContactNotificationServiceImpl<TemplateEmail>
where
    TemplateEmail: TemplateEmailService,
{
    #[trace_instrument(skip(self))]
    async fn notify(&self, submission: &ContactSubmission) -> Result<(), ContactNotifyError> {
        let submitter = submission.email.clone().with_name((*submission.name).clone());

        let admin_alert = ContactAdminAlertTemplate {
            name: (*submission.name).clone(),
            email: submission.email.to_string(),
            company: submission.company.as_deref().cloned(),
            current_website: submission.current_website.as_ref().map(ToString::to_string),
            message: (*submission.message).clone(),
            submitted_at: submission
                .created_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
        };
        let confirmation = ContactConfirmationTemplate {
            name: (*submission.name).clone(),
        };

        let (admin_alert, confirmation) = tokio::join!(
            self.bounded(self.template_email.send_contact_admin_alert_email(
                (*self.config.admin_email).clone(),
                submitter.clone(),
                &admin_alert,
            )),
            self.bounded(
                self.template_email
                    .send_contact_confirmation_email(submitter, &confirmation)
            ),
        );

        let failures = [
            (ContactNotification::AdminAlert, admin_alert),
            (ContactNotification::Confirmation, confirmation),
        ]
        .into_iter()
        .filter_map(|(notification, result)| {
            result
                .err()
                .map(|reason| ContactNotifyFailure {
                    notification,
                    reason,
                })
        })
        .collect::<Vec<_>>();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(ContactNotifyError { failures })
        }
    }
}

impl<TemplateEmail> ContactNotificationServiceImpl<TemplateEmail> {
    async fn bounded(
        &self,
        send: impl Future<Output = anyhow::Result<bool>>,
    ) -> Result<(), ContactNotifyFailureReason> {
        match tokio::time::timeout(self.config.send_timeout, send).await {
            Ok(Ok(true)) => Ok(()),
            Ok(Ok(false)) => Err(ContactNotifyFailureReason::Rejected),
            Ok(Err(err)) => Err(ContactNotifyFailureReason::Error(err)),
            Err(_) => Err(ContactNotifyFailureReason::Timeout),
        }
    }
}
