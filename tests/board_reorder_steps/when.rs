//! When steps for board reorder BDD scenarios.

use super::world::{BoardWorld, parse_status, run_async};
use hubboard::board::domain::{ItemId, MoveRequest};
use rstest_bdd_macros::when;

#[when(r#"project "{id}" is dragged from "{from}" to "{to}""#)]
fn drag_project(
    world: &mut BoardWorld,
    id: String,
    from: String,
    to: String,
) -> Result<(), eyre::Report> {
    let request = MoveRequest::new(ItemId::new(id)?, parse_status(&from)?, parse_status(&to)?);
    let result = run_async(world.service.move_item(request));
    world.last_move_result = Some(result);
    Ok(())
}
