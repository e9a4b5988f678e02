use anyhow::{Context, Result};
use askama::Template;
use payloads::requests::ContactMessage;
#[cfg(not(feature = "mock-email"))]
use resend_rs::{Resend, types::CreateEmailBaseOptions};
#[cfg(not(feature = "mock-email"))]
use secrecy::ExposeSecret;
use secrecy::SecretBox;

pub struct EmailService {
    #[cfg(not(feature = "mock-email"))]
    client: Resend,
    #[cfg(feature = "mock-email")]
    outbox: Outbox,
    from_address: String,
    support_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailTemplate {
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

impl EmailService {
    #[cfg(not(feature = "mock-email"))]
    pub fn new(
        api_key: &SecretBox<String>,
        from_address: String,
        support_address: String,
    ) -> Self {
        let client = Resend::new(api_key.expose_secret());
        Self {
            client,
            from_address,
            support_address,
        }
    }

    #[cfg(feature = "mock-email")]
    pub fn new(
        _api_key: &SecretBox<String>,
        from_address: String,
        support_address: String,
    ) -> Self {
        Self {
            outbox: Outbox::default(),
            from_address,
            support_address,
        }
    }

    /// Handle to the messages this service has "sent".
    #[cfg(feature = "mock-email")]
    pub fn outbox(&self) -> Outbox {
        self.outbox.clone()
    }

    #[tracing::instrument(skip(self, template), fields(to = %to_email))]
    #[cfg(not(feature = "mock-email"))]
    pub async fn send_email(
        &self,
        to_email: &str,
        reply_to: Option<&str>,
        template: EmailTemplate,
    ) -> Result<()> {
        let mut email = CreateEmailBaseOptions::new(
            &self.from_address,
            [to_email],
            &template.subject,
        )
        .with_html(&template.html_body)
        .with_text(&template.text_body);
        if let Some(reply_to) = reply_to {
            email = email.with_reply(reply_to);
        }

        self.client
            .emails
            .send(email)
            .await
            .context("Failed to send email via Resend")?;

        tracing::info!("Email sent successfully");
        Ok(())
    }

    #[tracing::instrument(skip(self, template), fields(to = %to_email))]
    #[cfg(feature = "mock-email")]
    pub async fn send_email(
        &self,
        to_email: &str,
        reply_to: Option<&str>,
        template: EmailTemplate,
    ) -> Result<()> {
        let delay = self.outbox.delay();
        if !delay.is_zero() {
            actix_web::rt::time::sleep(delay).await;
        }
        if self.outbox.is_failing() {
            anyhow::bail!("Mock email delivery failure");
        }
        tracing::info!(
            "Test mode: Mock email sent to: {} from: {} with subject: {}",
            to_email,
            self.from_address,
            template.subject
        );
        self.outbox.push(SentEmail {
            to: to_email.to_string(),
            reply_to: reply_to.map(str::to_string),
            template,
        });
        Ok(())
    }

    /// Relay a message from the contact page to the support inbox, with
    /// replies going back to the sender.
    #[tracing::instrument(skip(self, message))]
    pub async fn send_contact_message(
        &self,
        message: &ContactMessage,
    ) -> Result<()> {
        let template = contact_template(message)?;
        let reply_to = message.email.trim();
        self.send_email(&self.support_address, Some(reply_to), template)
            .await
    }
}

/// Contact email HTML body
#[derive(Template)]
#[template(path = "emails/contact.html")]
struct ContactHtmlTemplate<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

/// Contact email plain text body
#[derive(Template)]
#[template(path = "emails/contact.txt")]
struct ContactTextTemplate<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

fn contact_template(message: &ContactMessage) -> Result<EmailTemplate> {
    let name = message.name.trim();
    let email = message.email.trim();
    let subject = message.subject.trim();
    let body = message.message.trim();

    let html_body = ContactHtmlTemplate {
        name,
        email,
        subject,
        message: body,
    }
    .render()
    .context("Failed to render HTML email template")?;
    let text_body = ContactTextTemplate {
        name,
        email,
        subject,
        message: body,
    }
    .render()
    .context("Failed to render plain text email template")?;

    Ok(EmailTemplate {
        subject: format!("[Contact] {subject}"),
        html_body,
        text_body,
    })
}

#[cfg(feature = "mock-email")]
pub use mock::{Outbox, SentEmail};

#[cfg(feature = "mock-email")]
mod mock {
    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use super::EmailTemplate;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SentEmail {
        pub to: String,
        pub reply_to: Option<String>,
        pub template: EmailTemplate,
    }

    /// In-memory record of mock deliveries, shared between the running
    /// server and tests.
    #[derive(Debug, Clone, Default)]
    pub struct Outbox {
        sent: Arc<Mutex<Vec<SentEmail>>>,
        failing: Arc<AtomicBool>,
        delay_ms: Arc<AtomicU64>,
    }

    impl Outbox {
        pub fn sent(&self) -> Vec<SentEmail> {
            self.sent.lock().unwrap_or_else(|e| e.into_inner()).clone()
        }

        /// Make every following delivery fail until switched back.
        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        /// Hold every following delivery for `delay` before it completes.
        pub fn set_delay(&self, delay: Duration) {
            let millis = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
            self.delay_ms.store(millis, Ordering::SeqCst);
        }

        pub(super) fn delay(&self) -> Duration {
            Duration::from_millis(self.delay_ms.load(Ordering::SeqCst))
        }

        pub(super) fn is_failing(&self) -> bool {
            self.failing.load(Ordering::SeqCst)
        }

        pub(super) fn push(&self, email: SentEmail) {
            self.sent
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(email);
        }
    }
}
