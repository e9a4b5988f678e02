use api::email::{EmailService, Outbox};
use api::{Config, telemetry};
use payloads::requests::ContactMessage;
use reqwest::StatusCode;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub const SUPPORT_EMAIL: &str = "support@example.com";

pub struct TestApp {
    pub port: u16,
    pub client: payloads::APIClient,
    /// Every email the api has relayed so far.
    pub outbox: Outbox,
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = telemetry::get_subscriber("error");
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
        allowed_origins: vec!["*".to_string()],
        email_api_key: secrecy::SecretBox::new(Box::new(
            "test-api-key".to_string(),
        )),
        email_from_address: "test@example.com".to_string(),
        support_email_address: SUPPORT_EMAIL.to_string(),
    };

    let email_service = EmailService::new(
        &config.email_api_key,
        config.email_from_address.clone(),
        config.support_email_address.clone(),
    );
    let outbox = email_service.outbox();

    let server = api::build(&mut config, email_service).unwrap();
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: payloads::APIClient {
            address: format!("http://127.0.0.1:{}", config.port),
            inner_client: reqwest::Client::new(),
        },
        outbox,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// A client pointed at a port nothing is listening on.
pub async fn unreachable_client() -> payloads::APIClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    payloads::APIClient {
        address: format!("http://127.0.0.1:{port}"),
        inner_client: reqwest::Client::new(),
    }
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

pub fn ada_message() -> ContactMessage {
    ContactMessage {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Bug".into(),
        message: "Found an issue".into(),
    }
}
