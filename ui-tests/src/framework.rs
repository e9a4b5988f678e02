//! Browser test environment: the api with mocked email, the UI served by
//! `trunk`, and a Firefox session driven through geckodriver.
//!
//! Run with debugging output:
//!
//! ```shell
//! RUST_LOG=ui_tests=debug,api=info cargo test -p ui-tests -- --ignored --nocapture
//! ```

use anyhow::{Context, Result};
use fantoccini::{Client, ClientBuilder, Locator};
use payloads::requests::ContactMessage;
use rand::Rng;
use std::process::{Child, Command, Stdio};
use std::time::Duration;
use test_helpers::TestApp;
use tokio::time::sleep;
use tracing::{debug, info, warn};

pub struct TestEnvironment {
    pub api: TestApp,
    pub browser: Client,
    pub frontend_process: Child,
    pub geckodriver_process: Child,
    pub frontend_url: String,
}

impl TestEnvironment {
    #[cfg(test)]
    pub async fn setup() -> Result<Self> {
        Self::setup_with_options(false).await
    }

    pub async fn setup_headed() -> Result<Self> {
        Self::setup_with_options(true).await
    }

    async fn setup_with_options(headed: bool) -> Result<Self> {
        info!("🚀 Starting API server");
        let api = test_helpers::spawn_app().await;
        let api_url = format!("http://localhost:{}", api.port);
        info!("✅ API server running on {}", api_url);

        info!("🦎 Starting geckodriver");
        let (geckodriver_process, gecko_port) =
            spawn_with_retry("geckodriver", 4444, |port| {
                let mut command = Command::new("geckodriver");
                command.arg("--port").arg(port.to_string());
                command
            })
            .await?;
        info!("✅ Geckodriver running on port {}", gecko_port);

        info!("🎨 Starting frontend");
        build_frontend(&api_url)?;
        let (frontend_process, frontend_port) =
            spawn_with_retry("trunk serve", 8080, |port| {
                let mut command = Command::new("trunk");
                command
                    .arg("serve")
                    .arg("--port")
                    .arg(port.to_string())
                    .current_dir("../ui")
                    .env("BACKEND_URL", &api_url);
                command
            })
            .await?;
        let frontend_url = format!("http://localhost:{}", frontend_port);
        wait_for_frontend(&frontend_url).await?;
        info!("✅ Frontend ready at {}", frontend_url);

        info!("🌐 Connecting to browser");
        let browser = connect_to_browser(gecko_port, headed).await?;
        info!("✅ Browser connected");

        Ok(TestEnvironment {
            api,
            browser,
            frontend_process,
            geckodriver_process,
            frontend_url,
        })
    }

    pub async fn open_contact_page(&self) -> Result<()> {
        self.browser
            .goto(&format!("{}/contact", self.frontend_url))
            .await?;
        wait_for(&self.browser, "[data-testid='contact-form']").await
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        info!("🧹 Cleaning up test environment");

        if let Err(e) = self.frontend_process.kill() {
            warn!("Failed to kill frontend process: {}", e);
        }
        if let Err(e) = self.geckodriver_process.kill() {
            warn!("Failed to kill geckodriver process: {}", e);
        }
    }
}

/// Start a server process on a randomized port near `base_port`, retrying
/// on another port when it exits right away (usually a port conflict).
async fn spawn_with_retry(
    name: &str,
    base_port: u16,
    command_for: impl Fn(u16) -> Command,
) -> Result<(Child, u16)> {
    for attempt in 1..=5 {
        let port = base_port + rand::thread_rng().gen_range(0..=100);
        debug!("Starting {} on port {} (attempt {})", name, port, attempt);

        match command_for(port)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(mut child) => {
                sleep(Duration::from_millis(500)).await;
                match child.try_wait() {
                    Ok(Some(status)) => {
                        debug!("{} exited with status {}", name, status);
                    }
                    Ok(None) => return Ok((child, port)),
                    Err(e) => {
                        debug!("Error checking {} status: {}", name, e);
                        let _ = child.kill();
                    }
                }
            }
            Err(e) => debug!("Failed to start {}: {}", name, e),
        }

        sleep(Duration::from_millis(100)).await;
    }

    Err(anyhow::anyhow!("Failed to start {} after 5 attempts", name))
}

fn build_frontend(backend_url: &str) -> Result<()> {
    debug!("Building frontend with trunk build");
    let status = Command::new("trunk")
        .arg("build")
        .current_dir("../ui")
        .env("BACKEND_URL", backend_url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .context("Failed to run trunk build")?;
    if !status.success() {
        anyhow::bail!("Frontend build failed with status: {}", status);
    }
    Ok(())
}

async fn wait_for_frontend(url: &str) -> Result<()> {
    for i in 1..=30 {
        match reqwest::get(url).await {
            Ok(response) if response.status().is_success() => {
                debug!("Frontend ready after {} attempts", i);
                return Ok(());
            }
            _ => sleep(Duration::from_secs(1)).await,
        }
    }
    Err(anyhow::anyhow!("Frontend failed to start after 30 attempts"))
}

async fn connect_to_browser(gecko_port: u16, headed: bool) -> Result<Client> {
    let gecko_url = format!("http://localhost:{}", gecko_port);

    let mut caps = serde_json::Map::new();
    let firefox_opts = if headed {
        info!("🖥️ Starting browser in headed mode");
        serde_json::json!({ "log": {"level": "error"} })
    } else {
        info!("👻 Starting browser in headless mode");
        serde_json::json!({
            "args": ["--headless"],
            "log": {"level": "error"}
        })
    };
    caps.insert("moz:firefoxOptions".to_string(), firefox_opts);

    ClientBuilder::native()
        .capabilities(caps)
        .connect(&gecko_url)
        .await
        .context("Failed to connect to geckodriver")
}

fn by_test_id(test_id: &str) -> String {
    format!("[data-testid='{test_id}']")
}

/// Wait up to ten seconds for an element matching `css` to appear.
pub async fn wait_for(browser: &Client, css: &str) -> Result<()> {
    for _ in 0..50 {
        if browser.find(Locator::Css(css)).await.is_ok() {
            return Ok(());
        }
        sleep(Duration::from_millis(200)).await;
    }
    Err(anyhow::anyhow!("Timed out waiting for {}", css))
}

/// Type a message into the contact form, one field after another.
pub async fn fill_contact_form(
    browser: &Client,
    message: &ContactMessage,
) -> Result<()> {
    info!("✍️ Filling contact form as {}", message.name);
    for (test_id, value) in [
        ("input-name", &message.name),
        ("input-email", &message.email),
        ("input-subject", &message.subject),
        ("input-message", &message.message),
    ] {
        let field = browser.find(Locator::Css(&by_test_id(test_id))).await?;
        field.click().await?;
        field.clear().await?;
        field.send_keys(value).await?;
    }
    Ok(())
}

#[cfg(test)]
/// Current value of each contact form field, in form order.
pub async fn contact_form_values(browser: &Client) -> Result<Vec<String>> {
    let mut values = Vec::new();
    for test_id in
        ["input-name", "input-email", "input-subject", "input-message"]
    {
        let field = browser.find(Locator::Css(&by_test_id(test_id))).await?;
        values.push(field.prop("value").await?.unwrap_or_default());
    }
    Ok(values)
}

#[cfg(test)]
pub async fn submit_button_state(browser: &Client) -> Result<(String, bool)> {
    let button = browser
        .find(Locator::Css(&by_test_id("button-submit-contact")))
        .await?;
    let disabled = button.attr("disabled").await?.is_some();
    Ok((button.text().await?, disabled))
}

#[cfg(test)]
/// Text of every toast currently on screen.
pub async fn toast_texts(browser: &Client) -> Result<Vec<String>> {
    let mut texts = Vec::new();
    for toast in browser.find_all(Locator::Css(&by_test_id("toast"))).await? {
        texts.push(toast.text().await?);
    }
    Ok(texts)
}
