//! Then steps for Taskdeck BDD scenarios.

use super::world::TaskDeckWorld;
use rstest_bdd_macros::then;
use taskdeck::screen::Navigation;
use taskdeck::task::domain::Task;

fn titles(tasks: &[Task]) -> Vec<String> {
    tasks.iter().map(|task| task.title().to_owned()).collect()
}

fn expected_titles(list: &str) -> Vec<String> {
    list.split(", ").map(str::to_owned).collect()
}

#[then(r#"the incomplete tasks are "{list}""#)]
fn incomplete_tasks(world: &mut TaskDeckWorld, list: String) -> Result<(), eyre::Report> {
    let home = world.home_mut()?;
    home.refresh();
    let actual = titles(home.view().incomplete());
    eyre::ensure!(
        actual == expected_titles(&list),
        "expected incomplete tasks {list}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"the completed tasks are "{list}""#)]
fn completed_tasks(world: &mut TaskDeckWorld, list: String) -> Result<(), eyre::Report> {
    let home = world.home_mut()?;
    home.refresh();
    let actual = titles(home.view().completed());
    eyre::ensure!(
        actual == expected_titles(&list),
        "expected completed tasks {list}, found {actual:?}"
    );
    Ok(())
}

#[then("no tasks are completed")]
fn nothing_completed(world: &mut TaskDeckWorld) -> Result<(), eyre::Report> {
    let home = world.home_mut()?;
    home.refresh();
    eyre::ensure!(
        home.view().completed().is_empty(),
        "expected no completed tasks"
    );
    Ok(())
}

#[then("no tasks are incomplete")]
fn nothing_incomplete(world: &mut TaskDeckWorld) -> Result<(), eyre::Report> {
    let home = world.home_mut()?;
    home.refresh();
    eyre::ensure!(
        home.view().incomplete().is_empty(),
        "expected no incomplete tasks"
    );
    Ok(())
}

#[then("the task list is empty")]
fn task_list_empty(world: &mut TaskDeckWorld) -> Result<(), eyre::Report> {
    let home = world.home_mut()?;
    home.refresh();
    let view = home.view();
    eyre::ensure!(view.is_empty(), "expected no tasks, found {}", view.len());
    Ok(())
}

#[then("the add form is still open")]
fn add_form_open(world: &mut TaskDeckWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.home_mut()?.form().is_visible(),
        "expected the add form to stay open"
    );
    Ok(())
}

#[then(r#"the alert reads "{title}" with "{message}""#)]
fn alert_reads(world: &TaskDeckWorld, title: String, message: String) -> Result<(), eyre::Report> {
    let alert = world
        .alert
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected an alert"))?;
    eyre::ensure!(
        alert.title() == title && alert.message() == message,
        "unexpected alert {alert:?}"
    );
    Ok(())
}

#[then("the task list is shown")]
fn task_list_shown(world: &TaskDeckWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        matches!(world.navigation, Some(Navigation::Home(_))),
        "expected the task list, got {:?}",
        world.navigation
    );
    Ok(())
}

#[then("the visitor stays on the current screen")]
fn stays(world: &TaskDeckWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.navigation == Some(Navigation::Stay),
        "expected to stay, got {:?}",
        world.navigation
    );
    Ok(())
}

#[then("the login screen is shown")]
fn login_shown(world: &TaskDeckWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.navigation == Some(Navigation::Login),
        "expected the login screen, got {:?}",
        world.navigation
    );
    Ok(())
}

#[then("the task subscription is released")]
fn subscription_released(world: &TaskDeckWorld) -> Result<(), eyre::Report> {
    let active = world.store.active_subscriptions()?;
    eyre::ensure!(active == 0, "expected no live queries, found {active}");
    Ok(())
}
