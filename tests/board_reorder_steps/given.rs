//! Given steps for board reorder BDD scenarios.

use super::world::{BoardWorld, parse_status, run_async};
use chrono::{TimeDelta, Utc};
use eyre::WrapErr;
use hubboard::board::domain::{Item, ItemId, Priority};
use rstest_bdd_macros::given;

#[given("a project board")]
fn project_board(world: &mut BoardWorld) {
    world.last_move_result = None;
}

#[given(r#"project "{id}" is "{status}" with priority "{priority}" and due {when}"#)]
fn stored_project(
    world: &mut BoardWorld,
    id: String,
    status: String,
    priority: String,
    when: String,
) -> Result<(), eyre::Report> {
    let now = Utc::now();
    let due_at = match when.as_str() {
        "yesterday" => now - TimeDelta::days(1),
        "tomorrow" => now + TimeDelta::days(1),
        other => return Err(eyre::eyre!("unsupported due date in scenario: {other}")),
    };
    let rank = Priority::try_from(priority.as_str())
        .map_err(|err| eyre::eyre!("invalid priority in scenario: {err}"))?;
    let item = Item::new(ItemId::new(id)?, parse_status(&status)?)
        .with_priority(rank)
        .with_due_at(due_at);
    world
        .repository
        .upsert(item)
        .wrap_err("store project for scenario")?;
    Ok(())
}

#[given("the board has been loaded")]
fn board_loaded(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    run_async(world.service.refresh()).wrap_err("load board from store")?;
    Ok(())
}

#[given("the store rejects every update")]
fn store_rejects_updates(world: &mut BoardWorld) {
    world.repository.fail_all_updates();
}
