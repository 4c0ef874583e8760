use webrevamp_di::Build;
use webrevamp_email_contracts::{template::TemplateEmailService, ContentType, Email, EmailService};
use webrevamp_models::email_address::EmailAddressWithName;
use webrevamp_templates_contracts::{
    ContactAdminAlertTemplate, ContactConfirmationTemplate, Template, TemplateService,
};
use webrevamp_utils::trace_instrument;

#[derive(Debug, Clone, Build)]
pub struct TemplateEmailServiceImpl<Email, Template> {
    email: Email,
    template: Template,
}

impl<EmailS, Template> TemplateEmailService for TemplateEmailServiceImpl<EmailS, Template>
where
    EmailS: EmailService,
    Template: TemplateService,
{
    #[trace_instrument(skip(self, data))]
    async fn send_contact_admin_alert_email(
        &self,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        data: &ContactAdminAlertTemplate,
    ) -> anyhow::Result<bool> {
        let subject = format!("New Website Audit Request from {}", data.name);
        self.send_email(recipient, Some(reply_to), data, subject)
            .await
    }

    #[trace_instrument(skip(self, data))]
    async fn send_contact_confirmation_email(
        &self,
        recipient: EmailAddressWithName,
        data: &ContactConfirmationTemplate,
    ) -> anyhow::Result<bool> {
        self.send_email(
            recipient,
            None,
            data,
            "Thank you for your website audit request",
        )
        .await
    }
}

impl<EmailS, TemplateS> TemplateEmailServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn send_email<T: Template + 'static>(
        &self,
        recipient: EmailAddressWithName,
        reply_to: Option<EmailAddressWithName>,
        data: &T,
        subject: impl Into<String>,
    ) -> anyhow::Result<bool> {
        self.email
            .send(Email {
                recipient,
                subject: subject.into(),
                body: self.template.render(data)?,
                content_type: ContentType::Html,
                reply_to,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use webrevamp_email_contracts::MockEmailService;
    use webrevamp_templates_contracts::MockTemplateService;

    use super::*;

    type Sut = TemplateEmailServiceImpl<MockEmailService, MockTemplateService>;

    fn admin() -> EmailAddressWithName {
        "WebRevamp Studio <hello@webrevampstudio.com>".parse().unwrap()
    }

    fn submitter() -> EmailAddressWithName {
        "Asha Rao <asha@biz.com>".parse().unwrap()
    }

    #[tokio::test]
    async fn send_contact_admin_alert_email() {
        // Arrange
        let data = ContactAdminAlertTemplate {
            name: "Asha Rao".into(),
            email: "asha@biz.com".into(),
            company: None,
            current_website: None,
            message: "I need a full site redesign for my clinic, please advise".into(),
            submitted_at: "2024-05-02 09:15:00 UTC".into(),
        };

        let template = MockTemplateService::new().with_render(data.clone(), "<p>alert</p>".into());
        let email = MockEmailService::new().with_send(
            Email {
                recipient: admin(),
                subject: "New Website Audit Request from Asha Rao".into(),
                body: "<p>alert</p>".into(),
                content_type: ContentType::Html,
                reply_to: Some(submitter()),
            },
            true,
        );

        let sut = Sut { email, template };

        // Act
        let result = sut
            .send_contact_admin_alert_email(admin(), submitter(), &data)
            .await;

        // Assert
        assert!(result.unwrap());
    }

    #[tokio::test]
    async fn send_contact_confirmation_email() {
        // Arrange
        let data = ContactConfirmationTemplate {
            name: "Asha Rao".into(),
        };

        let template = MockTemplateService::new().with_render(data.clone(), "<p>thanks</p>".into());
        let email = MockEmailService::new().with_send(
            Email {
                recipient: submitter(),
                subject: "Thank you for your website audit request".into(),
                body: "<p>thanks</p>".into(),
                content_type: ContentType::Html,
                reply_to: None,
            },
            false,
        );

        let sut = Sut { email, template };

        // Act
        let result = sut.send_contact_confirmation_email(submitter(), &data).await;

        // Assert
        assert!(!result.unwrap());
    }
}
