pub mod email;
pub mod routes;
pub mod telemetry;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use secrecy::SecretBox;
use std::net::TcpListener;

use crate::email::EmailService;

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(
    config: &mut Config,
    email_service: EmailService,
) -> std::io::Result<Server> {
    let email_service = web::Data::new(email_service);

    // Clone config values for use in closure
    let allowed_origins = config.allowed_origins.clone();

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        // Configure CORS based on allowed origins
        let cors = if allowed_origins.contains(&"*".to_string()) {
            // Allow any origin (for development)
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
        } else {
            let mut cors =
                Cors::default().allow_any_method().allow_any_header();
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };

        App::new()
            .wrap(cors)
            .service(routes::api_services())
            .app_data(email_service.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// List of allowed CORS origins. Use "*" to allow any origin (development only)
    pub allowed_origins: Vec<String>,
    pub email_api_key: SecretBox<String>,
    pub email_from_address: String,
    /// Inbox that messages from the contact page are relayed to
    pub support_email_address: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        use std::env::var;

        let required =
            |name: &'static str| var(name).map_err(|_| ConfigError::Missing(name));

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string()) // Default to allow any origin for development
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let port = required("PORT")?;
        let port = port.parse::<u16>().map_err(|_| ConfigError::Invalid {
            name: "PORT",
            value: port,
        })?;

        Ok(Config {
            ip: required("IP_ADDRESS")?,
            port,
            allowed_origins,
            email_api_key: SecretBox::new(Box::new(required("EMAIL_API_KEY")?)),
            email_from_address: required("EMAIL_FROM_ADDRESS")?,
            support_email_address: required("SUPPORT_EMAIL_ADDRESS")?,
        })
    }
}
