//! The user address lookup: parse JSON, walk `user.address.state`, upper-case the result.

mod common;

use common::Maybe;
use kleisli::{compose, compose_k, of, pipe_k, Of};
use serde_json::Value;

fn parse_json(raw: String) -> Option<Value> {
    serde_json::from_str(&raw).ok()
}

fn get(key: &'static str) -> impl Fn(Value) -> Option<Value> {
    move |value: Value| match value {
        Value::Object(mut map) => map.remove(key),
        _ => None,
    }
}

fn shout(state: Value) -> Option<String> {
    state.as_str().map(str::to_uppercase)
}

const ADDRESS: &str = r#"{"user":{"address":{"state":"ny"}}}"#;

#[test]
fn state_code_found() {
    let get_state_code = compose_k!(shout, get("state"), get("address"), get("user"), parse_json);
    assert_eq!(get_state_code(Some(ADDRESS.to_owned())), Some("NY".to_owned()));
}

#[test]
fn invalid_json_is_nothing() {
    let get_state_code = compose_k!(shout, get("state"), get("address"), get("user"), parse_json);
    assert_eq!(get_state_code(Some("[Invalid JSON]".to_owned())), None);
    assert_eq!(get_state_code(None), None);
}

#[test]
fn missing_key_is_nothing() {
    let get_state_code = compose_k!(shout, get("state"), get("address"), get("user"), parse_json);
    assert_eq!(
        get_state_code(Some(r#"{"user":{"name":"ana"}}"#.to_owned())),
        None
    );
    assert_eq!(
        get_state_code(Some(r#"{"user":{"address":{"state":5}}}"#.to_owned())),
        None
    );
}

#[test]
fn wrap_stage_built_from_of() {
    let upper = |state: Value| state.as_str().unwrap_or_default().to_uppercase();
    let get_state_code = compose_k!(
        compose!(of::<Option<String>, String>, upper),
        get("state"),
        get("address"),
        get("user"),
        parse_json
    );
    assert_eq!(get_state_code(Some(ADDRESS.to_owned())), Some("NY".to_owned()));
}

#[test]
fn pipe_k_reads_in_run_order() {
    let get_state_code = pipe_k!(parse_json, get("user"), get("address"), get("state"), shout);
    assert_eq!(get_state_code(Some(ADDRESS.to_owned())), Some("NY".to_owned()));
}

#[test]
fn works_with_foreign_maybe() {
    let parse_json = |raw: String| Maybe::from(serde_json::from_str::<Value>(&raw).ok());
    let get = |key: &'static str| move |value: Value| Maybe::from(value.get(key).cloned());
    let shout = |state: Value| Maybe::from(state.as_str().map(str::to_uppercase));

    let get_state_code = compose_k!(shout, get("state"), get("address"), get("user"), parse_json);
    assert_eq!(
        get_state_code(Maybe::of(ADDRESS.to_owned())),
        Maybe::Just("NY".to_owned())
    );
    assert_eq!(
        get_state_code(Maybe::of("[Invalid JSON]".to_owned())),
        Maybe::Nothing
    );
}
