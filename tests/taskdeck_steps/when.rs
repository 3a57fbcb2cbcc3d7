//! When steps for Taskdeck BDD scenarios.

use super::world::{TaskDeckWorld, run_async};
use rstest_bdd_macros::when;
use taskdeck::screen::{LoginScreen, RegisterScreen};

#[when(r#"the user adds a "{priority}" priority task "{title}" due "{deadline}""#)]
fn add_task(
    world: &mut TaskDeckWorld,
    priority: String,
    title: String,
    deadline: String,
) -> Result<(), eyre::Report> {
    world.add_task(&priority, &title, &deadline)
}

#[when("the user submits the add form without a title")]
fn submit_blank_form(world: &mut TaskDeckWorld) -> Result<(), eyre::Report> {
    let home = world.home_mut()?;
    home.open_form();
    home.form_mut().set_title("   ");
    run_async(home.submit_form());
    Ok(())
}

#[when(r#"the user taps the task "{title}""#)]
fn tap_task(world: &mut TaskDeckWorld, title: String) -> Result<(), eyre::Report> {
    let task = world.task_titled(&title)?;
    let home = world.home_mut()?;
    run_async(home.toggle_task(task.id(), task.is_completed()));
    eyre::ensure!(run_async(home.wait_for_update()), "no snapshot after toggle");
    Ok(())
}

#[when(r#"the user deletes the task "{title}""#)]
fn delete_task(world: &mut TaskDeckWorld, title: String) -> Result<(), eyre::Report> {
    let task = world.task_titled(&title)?;
    let home = world.home_mut()?;
    run_async(home.delete_task(task.id()));
    eyre::ensure!(run_async(home.wait_for_update()), "no snapshot after delete");
    Ok(())
}

#[when(r#"the user searches for "{text}""#)]
fn search(world: &mut TaskDeckWorld, text: String) -> Result<(), eyre::Report> {
    world.home_mut()?.set_search_text(text);
    Ok(())
}

#[when("the user logs out")]
fn log_out(world: &mut TaskDeckWorld) -> Result<(), eyre::Report> {
    let navigation = run_async(world.home_mut()?.logout());
    world.navigation = Some(navigation);
    Ok(())
}

#[when(r#"a visitor registers as "{email}" with password "{password}""#)]
fn register(world: &mut TaskDeckWorld, email: String, password: String) {
    let mut screen = RegisterScreen::new(world.sessions.clone());
    screen.set_email(email);
    screen.set_password(password);
    world.navigation = Some(run_async(screen.submit()));
    world.alert = screen.take_alert();
}

#[when(r#"the visitor logs in as "{email}" with password "{password}""#)]
fn log_in(world: &mut TaskDeckWorld, email: String, password: String) {
    let mut screen = LoginScreen::new(world.sessions.clone());
    screen.set_email(email);
    screen.set_password(password);
    world.navigation = Some(run_async(screen.submit()));
    world.alert = screen.take_alert();
}

#[when(r#"the visitor logs in as "{email}" without a password"#)]
fn log_in_without_password(world: &mut TaskDeckWorld, email: String) {
    let mut screen = LoginScreen::new(world.sessions.clone());
    screen.set_email(email);
    world.navigation = Some(run_async(screen.submit()));
    world.alert = screen.take_alert();
}
