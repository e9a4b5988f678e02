use anyhow::Result;
use std::time::Duration;
use test_helpers::{SUPPORT_EMAIL, ada_message};
use tokio::time::sleep;
use tracing::info;

use crate::framework::{
    TestEnvironment, contact_form_values, fill_contact_form,
    submit_button_state, toast_texts, wait_for,
};

/// Fill in the contact form and send it.
///
/// Steps:
/// - Open the contact page and type a complete message
/// - Submit while delivery is slowed down
/// - While the request is outstanding the button is disabled and reads
///   "Sending..."
/// - Afterwards the message reached the support inbox once, every field is
///   empty again and a single "Message sent!" toast is shown
#[tokio::test]
#[ignore = "needs geckodriver, firefox and trunk"]
async fn test_send_contact_message() -> Result<()> {
    let env = TestEnvironment::setup().await?;
    env.api.outbox.set_delay(Duration::from_secs(2));

    env.open_contact_page().await?;
    fill_contact_form(&env.browser, &ada_message()).await?;

    info!("📨 Submitting contact form");
    let (label, disabled) = submit_button_state(&env.browser).await?;
    assert_eq!((label.as_str(), disabled), ("Send Message", false));
    env.browser
        .find(fantoccini::Locator::Css(
            "[data-testid='button-submit-contact']",
        ))
        .await?
        .click()
        .await?;
    sleep(Duration::from_millis(300)).await;

    let (label, disabled) = submit_button_state(&env.browser).await?;
    assert_eq!(label, "Sending...");
    assert!(disabled, "submit button should be disabled while sending");

    wait_for(&env.browser, "[data-testid='toast']").await?;

    let sent = env.api.outbox.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, SUPPORT_EMAIL);
    assert_eq!(sent[0].reply_to.as_deref(), Some("ada@example.com"));

    assert_eq!(
        contact_form_values(&env.browser).await?,
        vec![String::new(); 4]
    );
    let toasts = toast_texts(&env.browser).await?;
    assert_eq!(toasts.len(), 1, "{toasts:?}");
    assert!(toasts[0].contains("Message sent!"), "{toasts:?}");

    let (label, disabled) = submit_button_state(&env.browser).await?;
    assert_eq!((label.as_str(), disabled), ("Send Message", false));

    Ok(())
}

/// A relay failure keeps everything that was typed and shows an error toast.
#[tokio::test]
#[ignore = "needs geckodriver, firefox and trunk"]
async fn test_failed_contact_message_keeps_draft() -> Result<()> {
    let env = TestEnvironment::setup().await?;
    env.api.outbox.set_failing(true);

    env.open_contact_page().await?;
    let message = ada_message();
    fill_contact_form(&env.browser, &message).await?;

    info!("📨 Submitting contact form against a failing relay");
    env.browser
        .find(fantoccini::Locator::Css(
            "[data-testid='button-submit-contact']",
        ))
        .await?
        .click()
        .await?;
    wait_for(&env.browser, "[data-testid='toast']").await?;

    assert!(env.api.outbox.sent().is_empty());
    assert_eq!(
        contact_form_values(&env.browser).await?,
        vec![
            message.name,
            message.email,
            message.subject,
            message.message
        ]
    );
    let toasts = toast_texts(&env.browser).await?;
    assert_eq!(toasts.len(), 1, "{toasts:?}");
    assert!(
        toasts[0].contains("Failed to send message. Please try again."),
        "{toasts:?}"
    );

    let (label, disabled) = submit_button_state(&env.browser).await?;
    assert_eq!((label.as_str(), disabled), ("Send Message", false));

    Ok(())
}

/// The page shows the chat support card next to the form and nothing else.
#[tokio::test]
#[ignore = "needs geckodriver, firefox and trunk"]
async fn test_contact_page_cards() -> Result<()> {
    let env = TestEnvironment::setup().await?;
    env.open_contact_page().await?;

    let cards = env
        .browser
        .find_all(fantoccini::Locator::Css("[data-testid$='-card']"))
        .await?;
    assert_eq!(cards.len(), 1);
    assert!(cards[0].text().await?.contains("Chat Support"));

    let link = env
        .browser
        .find(fantoccini::Locator::Css("[data-testid='button-support-chat']"))
        .await?;
    assert_eq!(link.attr("href").await?.as_deref(), Some("/support"));

    Ok(())
}
