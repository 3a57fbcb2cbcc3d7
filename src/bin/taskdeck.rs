//! Taskdeck demo driver.
//!
//! Usage: `taskdeck [config-path]`
//!
//! Loads backend settings (local defaults when no path is given), wires the
//! screens to in-process identity and document backends, registers a demo
//! account, adds three tasks through the Home screen form, logs the derived
//! task list and signs out.

use std::sync::Arc;

use camino::Utf8PathBuf;
use mockable::DefaultClock;
use taskdeck::config::BackendConfig;
use taskdeck::identity::{adapters::memory::InMemoryIdentityProvider, services::SessionService};
use taskdeck::screen::{HomeScreen, Navigation, RegisterScreen};
use taskdeck::store::adapters::memory::InMemoryDocumentStore;
use taskdeck::task::domain::{Deadline, Priority};
use tracing::{info, warn};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

const DEMO_EMAIL: &str = "demo@taskdeck.local";
const DEMO_PASSWORD: &str = "demo-password";
const DEMO_TASKS: [(&str, &str, Priority); 3] = [
    ("Buy milk", "2025-01-01", Priority::High),
    ("Pay rent", "2025-01-05", Priority::High),
    ("Call mom", "2024-12-20", Priority::Low),
];

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    taskdeck::telemetry::init()?;
    let config = load_config()?;
    info!(
        project_id = %config.project_id,
        collection = %config.tasks_collection,
        "backend configured"
    );

    let store = Arc::new(InMemoryDocumentStore::new());
    let sessions = SessionService::new(
        Arc::new(InMemoryIdentityProvider::new()),
        Arc::new(DefaultClock),
    );

    let mut register = RegisterScreen::new(sessions.clone());
    register.set_email(DEMO_EMAIL);
    register.set_password(DEMO_PASSWORD);
    let navigation = register.submit().await;
    if let Some(alert) = register.take_alert() {
        info!(title = alert.title(), message = alert.message(), "alert");
    }
    let Navigation::Home(session) = navigation else {
        return Err("demo registration did not reach the task list".into());
    };

    let mut home = HomeScreen::new(store, sessions, session)
        .with_collection(config.tasks_collection.as_str());
    home.mount().await?;
    home.wait_for_update().await;

    for (title, deadline, priority) in DEMO_TASKS {
        home.open_form();
        let form = home.form_mut();
        form.set_title(title);
        form.set_deadline(Deadline::parse(deadline)?);
        form.set_priority(priority);
        home.submit_form().await;
        home.wait_for_update().await;
    }

    let view = home.view();
    for task in view.incomplete() {
        info!(section = "incomplete", row = %task, "task");
    }
    for task in view.completed() {
        info!(section = "completed", row = %task, "task");
    }

    if home.logout().await != Navigation::Login {
        warn!("sign-out failed; session left open");
    }
    Ok(())
}

fn load_config() -> Result<BackendConfig, BoxError> {
    let mut args = std::env::args_os().skip(1);
    let Some(arg) = args.next() else {
        return Ok(BackendConfig::local());
    };
    if let Some(extra) = args.next() {
        return Err(format!("unexpected extra argument: {}", extra.to_string_lossy()).into());
    }
    let path = arg
        .into_string()
        .map(Utf8PathBuf::from)
        .map_err(|_| "config path is not valid UTF-8")?;
    Ok(BackendConfig::load(&path)?)
}
