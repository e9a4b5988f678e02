//! Development server for contact page UI development
//!
//! This binary starts the API with email delivery mocked, so messages sent
//! from the contact page are captured in memory and logged instead of
//! reaching a real inbox.
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use std::time::Duration;
use test_helpers::TestApp;
use tokio::time::interval;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize logging
    let subscriber = api::telemetry::get_subscriber("info");
    api::telemetry::init_subscriber(subscriber)?;

    info!("🚀 Starting contact page development server");

    let port = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(0);
    let app = test_helpers::spawn_app_on_port(port).await;

    info!("✅ API server running on http://127.0.0.1:{}", app.port);
    info!("📬 Contact messages go to {}", test_helpers::SUPPORT_EMAIL);

    start_outbox_watch(&app);

    info!("🎯 Development server ready!");
    info!("   API: http://127.0.0.1:{}", app.port);
    info!(
        "   UI:  cd ui && BACKEND_URL=http://127.0.0.1:{} trunk serve",
        app.port
    );
    info!("👋 Press Ctrl+C to shutdown");

    // Keep server running until Ctrl+C
    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}

/// Starts a background task that logs each message the mock outbox captures.
fn start_outbox_watch(app: &TestApp) {
    let outbox = app.outbox.clone();

    tokio::spawn(async move {
        let mut interval = interval(Duration::from_secs(1));
        let mut seen = 0;

        loop {
            interval.tick().await;
            let sent = outbox.sent();
            for email in sent.iter().skip(seen) {
                info!(
                    "📨 {} (reply to {})\n{}",
                    email.template.subject,
                    email.reply_to.as_deref().unwrap_or("-"),
                    email.template.text_body.trim()
                );
            }
            seen = sent.len();
        }
    });
}
