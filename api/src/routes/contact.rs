use actix_web::{HttpResponse, post, web};
use payloads::requests::ContactMessage;
use validator::Validate;

use crate::email::EmailService;
use crate::telemetry::log_error;

use super::APIError;

/// Relay a message from the contact page to the support inbox. Nothing is
/// stored.
#[tracing::instrument(
    skip(details, email_service),
    fields(subject = %details.subject)
)]
#[post("/contact")]
pub async fn submit_contact(
    details: web::Json<ContactMessage>,
    email_service: web::Data<EmailService>,
) -> Result<HttpResponse, APIError> {
    details.validate()?;

    email_service
        .send_contact_message(&details)
        .await
        .map_err(|e| {
            let e = e.context("Failed to relay contact message");
            log_error(&e);
            APIError::UnexpectedError(e)
        })?;

    Ok(HttpResponse::Ok().finish())
}
