//! In-memory integration tests for moving between screens.

use super::helpers::{Backend, backend, deadline};
use rstest::rstest;
use taskdeck::identity::ports::IdentityProvider;
use taskdeck::screen::{HomeScreen, LoginScreen, Navigation, RegisterScreen};
use taskdeck::task::domain::Priority;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_work_logout_and_sign_back_in(backend: Backend) -> Result<(), eyre::Report> {
    let mut register = RegisterScreen::new(backend.sessions.clone());
    register.set_email("ada@example.com");
    register.set_password("secret-password");
    let Navigation::Home(session) = register.submit().await else {
        eyre::bail!("registration should open the task list");
    };

    let mut home = HomeScreen::new(backend.store.clone(), backend.sessions.clone(), session);
    home.mount().await?;
    home.wait_for_update().await;
    home.open_form();
    home.form_mut().set_title("Renew passport");
    home.form_mut().set_priority(Priority::High);
    home.form_mut().set_deadline(deadline("2025-01-10")?);
    home.submit_form().await;
    eyre::ensure!(home.wait_for_update().await, "added task should be pushed");
    eyre::ensure!(home.view().len() == 1, "one task expected");

    eyre::ensure!(home.logout().await == Navigation::Login, "logout should succeed");
    eyre::ensure!(
        backend.store.active_subscriptions()? == 0,
        "logout should release the live query"
    );
    eyre::ensure!(
        backend.provider.current_user().await.is_none(),
        "provider should have no current user"
    );

    let mut login = LoginScreen::new(backend.sessions.clone());
    login.set_email(" ada@example.com ");
    login.set_password("secret-password");
    let Navigation::Home(resumed) = login.submit().await else {
        eyre::bail!("sign-in should open the task list");
    };
    let mut home_again = HomeScreen::new(backend.store.clone(), backend.sessions.clone(), resumed);
    home_again.mount().await?;
    home_again.wait_for_update().await;
    let rows: Vec<String> = home_again
        .view()
        .incomplete()
        .iter()
        .map(ToString::to_string)
        .collect();
    eyre::ensure!(
        rows == ["Renew passport |  | 2025-01-10 | High"],
        "unexpected rows: {rows:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn offline_provider_keeps_the_user_on_login(backend: Backend) -> Result<(), eyre::Report> {
    backend.provider.go_offline("no route to host")?;
    let mut login = LoginScreen::new(backend.sessions.clone());
    login.set_email("ada@example.com");
    login.set_password("secret-password");

    let navigation = login.submit().await;

    eyre::ensure!(navigation == Navigation::Stay, "login should not proceed");
    let alert = login
        .take_alert()
        .ok_or_else(|| eyre::eyre!("an alert should be raised"))?;
    eyre::ensure!(alert.title() == "Login Error", "unexpected title {}", alert.title());
    eyre::ensure!(
        alert.message().contains("auth/network-request-failed"),
        "unexpected message {}",
        alert.message()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn resume_rebuilds_the_session_of_the_current_user(
    backend: Backend,
) -> Result<(), eyre::Report> {
    eyre::ensure!(backend.sessions.resume().await.is_none(), "nobody signed in yet");

    let session = backend
        .sessions
        .sign_up(&super::helpers::credentials("ada@example.com"))
        .await?;
    let resumed = backend
        .sessions
        .resume()
        .await
        .ok_or_else(|| eyre::eyre!("session should resume"))?;

    eyre::ensure!(resumed.user() == session.user(), "same user expected");
    Ok(())
}
