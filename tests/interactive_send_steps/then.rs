//! Then steps for interactive dispatch BDD scenarios.

use super::world::InteractiveWorld;
use nativeflow::interactive::{
    error::InteractiveValidationError, ports::transport::ProtocolMessage,
};
use rstest_bdd_macros::then;
use serde_json::Value;

fn sent_message(world: &InteractiveWorld) -> Result<&ProtocolMessage, eyre::Report> {
    world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing send result in scenario world"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected send failure: {err}"))
}

fn validation_failure(world: &InteractiveWorld) -> Result<&InteractiveValidationError, eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing send result in scenario world"))?;
    match result {
        Ok(_) => Err(eyre::eyre!("expected the send to fail")),
        Err(err) => err
            .as_validation()
            .ok_or_else(|| eyre::eyre!("expected a validation failure, found: {err}")),
    }
}

#[then("the send succeeds")]
fn send_succeeds(world: &InteractiveWorld) -> Result<(), eyre::Report> {
    sent_message(world).map(|_| ())
}

#[then(r#"every relayed button is a "{kind}""#)]
fn every_button_has_kind(world: &InteractiveWorld, kind: String) -> Result<(), eyre::Report> {
    let message = sent_message(world)?;
    let buttons = message
        .message
        .pointer("/interactiveMessage/nativeFlowMessage/buttons")
        .and_then(Value::as_array)
        .ok_or_else(|| eyre::eyre!("relayed message has no native flow buttons"))?;

    let mismatched: Vec<&Value> = buttons
        .iter()
        .filter(|button| button.get("name").and_then(Value::as_str) != Some(kind.as_str()))
        .collect();
    if !mismatched.is_empty() {
        return Err(eyre::eyre!("expected only {kind} buttons, found {mismatched:?}"));
    }
    Ok(())
}

#[then(r#"the relay carries the nodes "{tags}""#)]
fn relay_carries_nodes(world: &InteractiveWorld, tags: String) -> Result<(), eyre::Report> {
    let relays = world.transport()?.relays();
    let relay = relays
        .first()
        .ok_or_else(|| eyre::eyre!("expected a relay to be recorded"))?;
    let actual: Vec<&str> = relay
        .options
        .additional_nodes
        .iter()
        .map(|node| node.tag.as_str())
        .collect();
    let expected: Vec<&str> = tags.split(',').map(str::trim).collect();

    if actual != expected {
        return Err(eyre::eyre!("expected nodes {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the send fails validation in "{context}""#)]
fn send_fails_validation(world: &InteractiveWorld, context: String) -> Result<(), eyre::Report> {
    let failure = validation_failure(world)?;
    if failure.context() != Some(context.as_str()) {
        return Err(eyre::eyre!(
            "expected context {context}, found {:?}",
            failure.context()
        ));
    }
    if failure.example().is_none() {
        return Err(eyre::eyre!("expected an example payload on the failure"));
    }
    Ok(())
}

#[then(r#"the failure reports "{message}""#)]
fn failure_reports(world: &InteractiveWorld, message: String) -> Result<(), eyre::Report> {
    let failure = validation_failure(world)?;
    if !failure.errors().iter().any(|error| error.to_string() == message) {
        return Err(eyre::eyre!(
            "expected error {message:?}, found {:?}",
            failure.errors()
        ));
    }
    Ok(())
}

#[then(r#"the failure reports only "{message}""#)]
fn failure_reports_only(world: &InteractiveWorld, message: String) -> Result<(), eyre::Report> {
    let failure = validation_failure(world)?;
    let reported: Vec<String> = failure.errors().iter().map(ToString::to_string).collect();
    if reported != [message.clone()] {
        return Err(eyre::eyre!("expected only {message:?}, found {reported:?}"));
    }
    Ok(())
}

#[then("nothing is relayed")]
fn nothing_is_relayed(world: &InteractiveWorld) -> Result<(), eyre::Report> {
    let relays = world.transport()?.relays();
    if !relays.is_empty() {
        return Err(eyre::eyre!("expected no relays, found {}", relays.len()));
    }
    Ok(())
}
