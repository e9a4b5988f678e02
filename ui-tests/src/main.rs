//! Browser tests for the contact page, written as ordinary `#[tokio::test]`s.
//! They need geckodriver, firefox and trunk on the PATH, so they are ignored
//! by default. Run with: cargo test -p ui-tests -- --ignored
//!
//! For human-in-the-loop debugging, `main` opens the contact page in a
//! headed browser against a mocked backend and keeps it open until Ctrl+C.

use anyhow::Result;
use tracing::info;

#[cfg(test)]
mod contact;
mod framework;

use crate::framework::{TestEnvironment, fill_contact_form};

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = api::telemetry::get_subscriber("info");
    api::telemetry::init_subscriber(subscriber)?;

    info!("🔧 Setting up test environment with headed browser");
    let env = TestEnvironment::setup_headed().await?;

    env.open_contact_page().await?;
    fill_contact_form(&env.browser, &test_helpers::ada_message()).await?;

    let current_url = env.browser.current_url().await?;
    info!("🌐 Browser is now open at: {}", current_url);
    info!("📨 The form is filled in; messages sent land in the mock outbox");
    info!("👋 Press Ctrl+C to exit and close the browser");

    tokio::signal::ctrl_c().await?;

    let sent = env.api.outbox.sent();
    info!("📬 {} contact message(s) captured", sent.len());
    info!("🧹 Cleaning up and closing browser");
    Ok(())
}
