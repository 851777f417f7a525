use serde_json::Value;
use thiserror::Error;

/// A lookup step that turns absence into `None`.
pub type OptionArrow = Box<dyn Fn(Value) -> Option<Value>>;
/// A lookup step that reports why it failed.
pub type ResultArrow = Box<dyn Fn(Value) -> Result<Value, LookupError>>;

/// Why a lookup step failed.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Expected a string, found {0}")]
    NotText(Value),
    #[error("Expected an object to look up `{key}` in, found {found}")]
    NotAnObject { key: String, found: Value },
    #[error("Missing key `{0}`")]
    MissingKey(String),
}

/// Parses a string value as a JSON document.
pub fn parse_json(raw: Value) -> Option<Value> {
    try_parse_json(raw).ok()
}

/// Takes member `key` out of an object value.
pub fn get(key: String) -> impl Fn(Value) -> Option<Value> {
    let get = try_get(key);
    move |value: Value| get(value).ok()
}

/// Upper-cases a string value.
pub fn to_upper(value: Value) -> Option<Value> {
    try_to_upper(value).ok()
}

/// [`parse_json`] reporting the failure.
pub fn try_parse_json(raw: Value) -> Result<Value, LookupError> {
    match raw {
        Value::String(text) => Ok(serde_json::from_str(&text)?),
        other => Err(LookupError::NotText(other)),
    }
}

/// [`get`] reporting the failure.
pub fn try_get(key: String) -> impl Fn(Value) -> Result<Value, LookupError> {
    move |value: Value| match value {
        Value::Object(mut map) => map
            .remove(&key)
            .ok_or_else(|| LookupError::MissingKey(key.clone())),
        found => Err(LookupError::NotAnObject {
            key: key.clone(),
            found,
        }),
    }
}

/// [`to_upper`] reporting the failure.
pub fn try_to_upper(value: Value) -> Result<Value, LookupError> {
    match value {
        Value::String(text) => Ok(Value::String(text.to_uppercase())),
        other => Err(LookupError::NotText(other)),
    }
}

/// The non-empty keys of a dot separated path.
pub fn path_keys(path: &str) -> impl Iterator<Item = &str> {
    path.split('.').filter(|key| !key.is_empty())
}

/// Steps to parse a document, follow `path`, and optionally upper-case. In the order they run.
pub fn option_arrows(path: &str, upper: bool) -> Vec<OptionArrow> {
    let mut arrows: Vec<OptionArrow> = Vec::new();
    arrows.push(Box::new(parse_json));
    arrows.extend(path_keys(path).map(|key| Box::new(get(key.to_owned())) as OptionArrow));
    if upper {
        arrows.push(Box::new(to_upper));
    }
    arrows
}

/// [`option_arrows`] reporting the failure.
pub fn result_arrows(path: &str, upper: bool) -> Vec<ResultArrow> {
    let mut arrows: Vec<ResultArrow> = Vec::new();
    arrows.push(Box::new(try_parse_json));
    arrows.extend(path_keys(path).map(|key| Box::new(try_get(key.to_owned())) as ResultArrow));
    if upper {
        arrows.push(Box::new(try_to_upper));
    }
    arrows
}
