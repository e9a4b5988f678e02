use anyhow::Result;
use payloads::requests::ContactField;
use reqwest::StatusCode;
use test_helpers::{SUPPORT_EMAIL, ada_message, assert_status_code, spawn_app};

#[tokio::test]
async fn contact_message_is_relayed_to_support() -> Result<()> {
    let app = spawn_app().await;

    app.client.submit_contact(&ada_message()).await?;

    let sent = app.outbox.sent();
    assert_eq!(sent.len(), 1);
    let email = &sent[0];
    assert_eq!(email.to, SUPPORT_EMAIL);
    assert_eq!(email.reply_to.as_deref(), Some("ada@example.com"));
    assert_eq!(email.template.subject, "[Contact] Bug");
    assert!(email.template.text_body.contains("From: Ada <ada@example.com>"));
    assert!(email.template.text_body.contains("Found an issue"));

    Ok(())
}

#[tokio::test]
async fn contact_accepts_plain_json_body() -> Result<()> {
    let app = spawn_app().await;

    let url = format!("{}/api/contact", app.client.address);
    let response = app
        .client
        .inner_client
        .post(&url)
        .json(&serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Bug",
            "message": "Found an issue",
        }))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await?, "");
    assert_eq!(app.outbox.sent().len(), 1);

    Ok(())
}

#[tokio::test]
async fn contact_rejects_empty_fields() {
    let app = spawn_app().await;

    for field in ContactField::ALL {
        let message = ada_message().with_field(field, "  ".into());
        let result = app.client.submit_contact(&message).await;
        assert_status_code(result, StatusCode::BAD_REQUEST);
    }

    assert!(app.outbox.sent().is_empty());
}

#[tokio::test]
async fn contact_rejects_invalid_email() {
    let app = spawn_app().await;

    let message = ada_message().with_field(ContactField::Email, "ada".into());
    let result = app.client.submit_contact(&message).await;

    match result {
        Err(payloads::ClientError::APIError(code, body)) => {
            assert_eq!(code, StatusCode::BAD_REQUEST);
            assert!(body.contains("email is not a valid address"), "{body}");
        }
        _ => panic!("Expected APIError"),
    }
}

#[tokio::test]
async fn contact_rejects_missing_fields() -> Result<()> {
    let app = spawn_app().await;

    let url = format!("{}/api/contact", app.client.address);
    let response = app
        .client
        .inner_client
        .post(&url)
        .json(&serde_json::json!({ "name": "Ada", "email": "ada@example.com" }))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.outbox.sent().is_empty());

    Ok(())
}

#[tokio::test]
async fn relay_failure_is_an_internal_error() {
    let app = spawn_app().await;
    app.outbox.set_failing(true);

    let result = app.client.submit_contact(&ada_message()).await;

    assert_status_code(result, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(app.outbox.sent().is_empty());
}

#[tokio::test]
async fn contact_accepts_long_multibyte_subject() -> Result<()> {
    let app = spawn_app().await;

    let subject = "€".repeat(100);
    let message = ada_message().with_field(ContactField::Subject, subject.clone());
    app.client.submit_contact(&message).await?;

    let sent = app.outbox.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].template.subject, format!("[Contact] {subject}"));

    Ok(())
}

#[tokio::test]
async fn blank_field_is_named_in_the_error() {
    let app = spawn_app().await;

    let message = ada_message().with_field(ContactField::Message, "\n\t".into());
    let result = app.client.submit_contact(&message).await;

    match result {
        Err(payloads::ClientError::APIError(code, body)) => {
            assert_eq!(code, StatusCode::BAD_REQUEST);
            assert!(body.contains("message must not be empty"), "{body}");
        }
        _ => panic!("Expected APIError"),
    }
}

#[tokio::test]
async fn slow_relay_still_answers_ok() -> Result<()> {
    let app = spawn_app().await;
    app.outbox.set_delay(std::time::Duration::from_millis(200));

    let started = std::time::Instant::now();
    app.client.submit_contact(&ada_message()).await?;

    assert!(started.elapsed() >= std::time::Duration::from_millis(200));
    assert_eq!(app.outbox.sent().len(), 1);

    Ok(())
}
