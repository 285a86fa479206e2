//! When steps for interactive dispatch BDD scenarios.

use super::world::{InteractiveWorld, run_async};
use nativeflow::interactive::services::SendOptions;
use rstest_bdd_macros::when;

#[when(r#"the simple payload is sent to "{jid}""#)]
fn send_simple_payload(world: &mut InteractiveWorld, jid: String) -> Result<(), eyre::Report> {
    let payload = world
        .pending_simple
        .take()
        .ok_or_else(|| eyre::eyre!("missing simple payload in scenario world"))?;
    let result = run_async(
        world
            .service()?
            .send_buttons(&jid, payload, SendOptions::default()),
    );
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"the interactive payload is sent to "{jid}""#)]
fn send_interactive_payload(world: &mut InteractiveWorld, jid: String) -> Result<(), eyre::Report> {
    let payload = world
        .pending_interactive
        .take()
        .ok_or_else(|| eyre::eyre!("missing interactive payload in scenario world"))?;
    let result = run_async(world.service()?.send_interactive_message(
        &jid,
        payload,
        SendOptions::default(),
    ));
    world.last_result = Some(result);
    Ok(())
}
