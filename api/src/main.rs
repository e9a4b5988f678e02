use anyhow::Context;
use api::{
    Config, build,
    email::EmailService,
    telemetry::{get_subscriber, init_subscriber},
};

/// Contact page API server
///
/// Environment variables can be set directly or loaded from a .env file in the project root.
///
/// Required environment variables:
/// - IP_ADDRESS: Server bind address (127.0.0.1 for local, 0.0.0.0 for public)
/// - PORT: Server port
/// - EMAIL_API_KEY: API key for email service (e.g., Resend)
/// - EMAIL_FROM_ADDRESS: From address for outgoing emails
/// - SUPPORT_EMAIL_ADDRESS: Inbox that receives contact messages
///
/// Optional:
/// - ALLOWED_ORIGINS: CORS origins ("*" for any origin in development, or comma-separated list for production)
///
/// Example .env file:
/// IP_ADDRESS=127.0.0.1
/// PORT=8000
/// ALLOWED_ORIGINS=*
/// EMAIL_API_KEY=your_api_key
/// EMAIL_FROM_ADDRESS=noreply@yourdomain.com
/// SUPPORT_EMAIL_ADDRESS=support@yourdomain.com
///
/// Example production command:
/// IP_ADDRESS=0.0.0.0 PORT=8000 ALLOWED_ORIGINS=https://example.com \
/// EMAIL_API_KEY=your_key EMAIL_FROM_ADDRESS=noreply@example.com \
/// SUPPORT_EMAIL_ADDRESS=support@example.com \
/// cargo run
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if available
    // This will silently ignore if the file doesn't exist
    let _ = dotenvy::dotenv();

    init_subscriber(get_subscriber("info"))?;

    let mut config = Config::from_env().context("Invalid configuration")?;

    let email_service = EmailService::new(
        &config.email_api_key,
        config.email_from_address.clone(),
        config.support_email_address.clone(),
    );

    let server = build(&mut config, email_service)?;
    tracing::info!("Listening on {}:{}", config.ip, config.port);
    server.await?;
    Ok(())
}
