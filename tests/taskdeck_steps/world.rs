//! Shared world state for Taskdeck BDD scenarios.

use std::sync::Arc;

use eyre::WrapErr;
use mockable::DefaultClock;
use rstest::fixture;
use taskdeck::identity::{
    adapters::memory::InMemoryIdentityProvider,
    domain::{Credentials, Session},
    services::SessionService,
};
use taskdeck::screen::{Alert, HomeScreen, Navigation};
use taskdeck::store::adapters::memory::InMemoryDocumentStore;
use taskdeck::task::domain::{Deadline, Priority, Task};

/// Session service used by the BDD world.
pub type TestSessions = SessionService<InMemoryIdentityProvider, DefaultClock>;

/// Home screen type used by the BDD world.
pub type TestHome = HomeScreen<InMemoryDocumentStore, InMemoryIdentityProvider, DefaultClock>;

/// Password given to accounts the scenarios sign in with.
pub const SCENARIO_PASSWORD: &str = "secret-password";

/// Scenario world for Taskdeck behaviour tests.
pub struct TaskDeckWorld {
    pub store: Arc<InMemoryDocumentStore>,
    pub provider: Arc<InMemoryIdentityProvider>,
    pub sessions: TestSessions,
    pub home: Option<TestHome>,
    pub navigation: Option<Navigation>,
    pub alert: Option<Alert>,
}

impl TaskDeckWorld {
    /// Creates a world with empty backends and no screen state.
    #[must_use]
    pub fn new() -> Self {
        let provider = Arc::new(InMemoryIdentityProvider::new());
        Self {
            store: Arc::new(InMemoryDocumentStore::new()),
            sessions: SessionService::new(Arc::clone(&provider), Arc::new(DefaultClock)),
            provider,
            home: None,
            navigation: None,
            alert: None,
        }
    }

    /// Registers `email` and shows its task list.
    ///
    /// # Errors
    ///
    /// Returns an error if sign-up or the initial subscription fails.
    pub fn sign_in_as(&mut self, email: &str) -> Result<(), eyre::Report> {
        let session = run_async(
            self.sessions
                .sign_up(&Credentials::new(email, SCENARIO_PASSWORD)),
        )
        .wrap_err("register scenario user")?;
        self.show_home(session)
    }

    /// Mounts the Home screen for `session` and waits for its first
    /// snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the subscription cannot be opened.
    pub fn show_home(&mut self, session: Session) -> Result<(), eyre::Report> {
        let mut home = HomeScreen::new(Arc::clone(&self.store), self.sessions.clone(), session);
        run_async(home.mount()).wrap_err("mount home screen")?;
        run_async(home.wait_for_update());
        self.home = Some(home);
        Ok(())
    }

    /// Returns the mounted Home screen.
    ///
    /// # Errors
    ///
    /// Returns an error if no user is signed in.
    pub fn home_mut(&mut self) -> Result<&mut TestHome, eyre::Report> {
        self.home
            .as_mut()
            .ok_or_else(|| eyre::eyre!("no signed-in user in scenario world"))
    }

    /// Fills and submits the add-task form, then waits for the snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs are invalid or no snapshot arrives.
    pub fn add_task(
        &mut self,
        priority: &str,
        title: &str,
        deadline: &str,
    ) -> Result<(), eyre::Report> {
        let parsed_priority = Priority::try_from(priority).map_err(|err| eyre::eyre!("{err}"))?;
        let due = Deadline::parse(deadline).map_err(|err| eyre::eyre!("{err}"))?;
        let home = self.home_mut()?;
        home.open_form();
        let form = home.form_mut();
        form.set_title(title);
        form.set_priority(parsed_priority);
        form.set_deadline(due);
        run_async(home.submit_form());
        eyre::ensure!(
            run_async(home.wait_for_update()),
            "no snapshot after adding {title}"
        );
        Ok(())
    }

    /// Finds a displayed task by title.
    ///
    /// # Errors
    ///
    /// Returns an error if no displayed task has that title.
    pub fn task_titled(&mut self, title: &str) -> Result<Task, eyre::Report> {
        let view = self.home_mut()?.view();
        view.incomplete()
            .iter()
            .chain(view.completed())
            .find(|task| task.title() == title)
            .cloned()
            .ok_or_else(|| eyre::eyre!("no task titled {title}"))
    }
}

impl Default for TaskDeckWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskDeckWorld {
    TaskDeckWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
