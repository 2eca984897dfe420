//! Then steps for board reorder BDD scenarios.

use super::world::{BoardWorld, parse_status};
use hubboard::board::{
    domain::{BoardDomainError, ProjectStatus},
    services::{BoardSyncError, MoveReport},
};
use rstest_bdd_macros::then;

fn last_report(world: &BoardWorld) -> Result<&MoveReport<ProjectStatus>, eyre::Report> {
    match world.last_move_result.as_ref() {
        Some(Ok(report)) => Ok(report),
        Some(Err(err)) => Err(eyre::eyre!("move failed unexpectedly: {err}")),
        None => Err(eyre::eyre!("missing move result in scenario world")),
    }
}

#[then("the move is confirmed")]
fn move_confirmed(world: &BoardWorld) -> Result<(), eyre::Report> {
    let report = last_report(world)?;
    if !matches!(report, MoveReport::Confirmed(_)) {
        return Err(eyre::eyre!("expected a confirmed move, got {report:?}"));
    }
    Ok(())
}

#[then("the move is rolled back")]
fn move_rolled_back(world: &BoardWorld) -> Result<(), eyre::Report> {
    let report = last_report(world)?;
    if !matches!(report, MoveReport::RolledBack(_)) {
        return Err(eyre::eyre!("expected a rolled back move, got {report:?}"));
    }
    Ok(())
}

#[then("the move is unchanged")]
fn move_unchanged(world: &BoardWorld) -> Result<(), eyre::Report> {
    let report = last_report(world)?;
    if *report != MoveReport::Unchanged {
        return Err(eyre::eyre!("expected an unchanged move, got {report:?}"));
    }
    Ok(())
}

#[then("the move fails because the card is in another column")]
fn move_fails_wrong_column(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_move_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing move result in scenario world"))?;
    if !matches!(
        result,
        Err(BoardSyncError::Domain(BoardDomainError::ItemNotInBucket { .. }))
    ) {
        return Err(eyre::eyre!("expected ItemNotInBucket error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the "{status}" column lists "{ids}""#)]
fn column_lists(world: &BoardWorld, status: String, ids: String) -> Result<(), eyre::Report> {
    let expected: Vec<String> = ids.split(',').map(|id| id.trim().to_owned()).collect();
    let actual = world.column(parse_status(&status)?)?;
    if actual != expected {
        return Err(eyre::eyre!(
            "expected column {status} to list {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"the "{status}" column is empty"#)]
fn column_empty(world: &BoardWorld, status: String) -> Result<(), eyre::Report> {
    let actual = world.column(parse_status(&status)?)?;
    if !actual.is_empty() {
        return Err(eyre::eyre!("expected column {status} to be empty, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the latest notification reads "{message}""#)]
fn latest_notification(world: &BoardWorld, message: String) -> Result<(), eyre::Report> {
    let notifications = world.feedback.notifications();
    let latest = notifications
        .last()
        .ok_or_else(|| eyre::eyre!("no notification was shown"))?;
    if latest.message != message {
        return Err(eyre::eyre!(
            "expected notification {message:?}, found {:?}",
            latest.message
        ));
    }
    Ok(())
}

#[then("no notification has been shown")]
fn no_notification(world: &BoardWorld) -> Result<(), eyre::Report> {
    let notifications = world.feedback.notifications();
    if !notifications.is_empty() {
        return Err(eyre::eyre!("expected no notifications, found {notifications:?}"));
    }
    Ok(())
}

#[then("{count:usize} celebrations have fired")]
fn celebrations_fired(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let fired = world.feedback.celebrations().len();
    if fired != count {
        return Err(eyre::eyre!("expected {count} celebrations, found {fired}"));
    }
    Ok(())
}

#[then("the store received {count:usize} updates")]
fn store_updates(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let calls = world.repository.update_calls();
    if calls != count {
        return Err(eyre::eyre!("expected {count} store updates, found {calls}"));
    }
    Ok(())
}
